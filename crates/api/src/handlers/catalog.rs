//! Handlers for the home page, browse/search, and taxonomy lookups.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use lentera_core::browse::{BrowseFilter, BrowseParams, BrowseSort};
use lentera_core::taxonomy::PREDEFINED_GENRES;
use lentera_db::models::novel::NovelSummary;
use lentera_db::models::taxonomy::{Genre, TaxonomyKind};
use lentera_db::repositories::{NovelRepo, TaxonomyRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::{PaginationParams, TagSuggestParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Home page: novels newest first, with chapter counts.
///
/// `novels` is one page (`?limit=&offset=`); `total` counts every novel.
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub novels: Vec<NovelSummary>,
    pub total: i64,
}

/// Echo of the normalized browse filter, for re-rendering the form.
#[derive(Debug, Serialize)]
pub struct AppliedFilter {
    pub q: Option<String>,
    pub genre: Option<String>,
    pub tag: Option<String>,
    pub sort: &'static str,
}

/// Browse page: filtered novels plus every genre for the filter menu.
#[derive(Debug, Serialize)]
pub struct BrowsePage {
    pub novels: Vec<NovelSummary>,
    /// Every match of the filter, across pages.
    pub total: i64,
    pub genres: Vec<Genre>,
    pub filter: AppliedFilter,
    pub sort_options: [&'static str; 3],
}

/// GET /api/v1/home
pub async fn home(
    State(state): State<AppState>,
    Query(page): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let filter = BrowseFilter::default();
    let novels = NovelRepo::list_summaries(&state.pool, &filter, page.limit, page.offset).await?;
    let total = NovelRepo::count_summaries(&state.pool, &filter).await?;

    Ok(Json(DataResponse {
        data: HomePage { novels, total },
    }))
}

/// GET /api/v1/browse?q=&genre=&tag=&sort=
///
/// Blank parameters are ignored; an unknown `sort` falls back to newest.
pub async fn browse(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
    Query(page): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let filter = BrowseFilter::from_params(&params);

    let novels = NovelRepo::list_summaries(&state.pool, &filter, page.limit, page.offset).await?;
    let total = NovelRepo::count_summaries(&state.pool, &filter).await?;
    let genres = TaxonomyRepo::list(&state.pool, TaxonomyKind::Genre).await?;

    tracing::debug!(
        q = ?filter.query,
        genre = ?filter.genre,
        tag = ?filter.tag,
        sort = filter.sort.as_str(),
        results = novels.len(),
        total,
        "Browse query",
    );

    Ok(Json(DataResponse {
        data: BrowsePage {
            novels,
            total,
            genres,
            filter: AppliedFilter {
                sort: filter.sort.as_str(),
                q: filter.query,
                genre: filter.genre,
                tag: filter.tag,
            },
            sort_options: [
                BrowseSort::Newest.as_str(),
                BrowseSort::Updated.as_str(),
                BrowseSort::Popular.as_str(),
            ],
        },
    }))
}

/// Genres in use plus the predefined set offered on the edit form.
#[derive(Debug, Serialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
    pub predefined: &'static [&'static str],
}

/// GET /api/v1/genres
pub async fn list_genres(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = TaxonomyRepo::list(&state.pool, TaxonomyKind::Genre).await?;

    Ok(Json(DataResponse {
        data: GenreList {
            genres,
            predefined: PREDEFINED_GENRES,
        },
    }))
}

/// GET /api/v1/tags?q=&limit=
///
/// Autocomplete suggestions for the tag input.
pub async fn suggest_tags(
    State(state): State<AppState>,
    Query(params): Query<TagSuggestParams>,
) -> AppResult<impl IntoResponse> {
    let tags = TaxonomyRepo::suggest_tags(&state.pool, params.q.as_deref(), params.limit).await?;

    Ok(Json(DataResponse { data: tags }))
}

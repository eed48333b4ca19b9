//! Admin handlers for novels: dashboard list, create, edit, delete.
//!
//! Every handler requires [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lentera_core::browse::BrowseFilter;
use lentera_core::error::CoreError;
use lentera_core::novel_status::{NovelStatus, VALID_STATUSES};
use lentera_core::revalidation::{chapter_paths, novel_paths};
use lentera_core::taxonomy::PREDEFINED_GENRES;
use lentera_core::types::DbId;
use lentera_core::validation::NovelInput;
use lentera_db::models::novel::{NovelSummary, NovelWithTaxonomy};
use lentera_db::repositories::{ChapterRepo, NovelRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_novel_exists;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

/// Dashboard row: a novel summary with its display status label.
#[derive(Debug, Serialize)]
pub struct AdminNovelRow {
    #[serde(flatten)]
    pub novel: NovelSummary,
    pub status_label: &'static str,
}

/// One page of the dashboard plus the number of novels overall.
#[derive(Debug, Serialize)]
pub struct AdminNovelPage {
    pub items: Vec<AdminNovelRow>,
    pub total: i64,
}

/// A selectable status on the edit form.
#[derive(Debug, Serialize)]
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Data for the novel edit form.
#[derive(Debug, Serialize)]
pub struct NovelForm {
    #[serde(flatten)]
    pub novel: NovelWithTaxonomy,
    pub predefined_genres: &'static [&'static str],
    pub statuses: Vec<StatusOption>,
}

/// GET /api/v1/admin/novels
pub async fn list_novels(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(page): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let filter = BrowseFilter::default();
    let novels = NovelRepo::list_summaries(&state.pool, &filter, page.limit, page.offset).await?;
    let total = NovelRepo::count_summaries(&state.pool, &filter).await?;

    let items: Vec<AdminNovelRow> = novels
        .into_iter()
        .map(|novel| AdminNovelRow {
            status_label: NovelStatus::from_str(&novel.status)
                .unwrap_or_default()
                .label(),
            novel,
        })
        .collect();

    Ok(Json(DataResponse {
        data: AdminNovelPage { items, total },
    }))
}

/// POST /api/v1/admin/novels
///
/// Creates the novel with a slug derived from its title and connects (or
/// creates) the submitted genres and tags.
pub async fn create_novel(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<NovelInput>,
) -> AppResult<impl IntoResponse> {
    let draft = input.into_draft()?;
    let created = NovelRepo::create(&state.pool, &draft).await?;

    tracing::info!(
        novel_id = created.novel.id,
        slug = %created.novel.slug,
        user = %admin.subject,
        "Novel created",
    );

    let revalidate = novel_paths(&created.novel.slug);
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: created,
            revalidate,
        }),
    ))
}

/// GET /api/v1/admin/novels/{id}
pub async fn get_novel_form(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let novel = ensure_novel_exists(&state.pool, id).await?;
    let novel = NovelRepo::with_taxonomy(&state.pool, novel).await?;

    Ok(Json(DataResponse {
        data: NovelForm {
            novel,
            predefined_genres: PREDEFINED_GENRES,
            statuses: status_options(),
        },
    }))
}

/// PUT /api/v1/admin/novels/{id}
///
/// Replaces the novel's fields, genres, and tags in one transaction. The
/// slug does not change.
pub async fn update_novel(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<NovelInput>,
) -> AppResult<impl IntoResponse> {
    let draft = input.into_draft()?;
    let updated = NovelRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Novel",
            id,
        }))?;

    tracing::info!(novel_id = id, user = %admin.subject, "Novel updated");

    let revalidate = novel_and_chapter_paths(&state, id, &updated.novel.slug).await?;
    Ok(Json(MutationResponse {
        data: updated,
        revalidate,
    }))
}

/// DELETE /api/v1/admin/novels/{id}
///
/// Deletes the novel with its chapters and taxonomy links.
pub async fn delete_novel(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let novel = ensure_novel_exists(&state.pool, id).await?;
    let revalidate = novel_and_chapter_paths(&state, id, &novel.slug).await?;

    let deleted = NovelRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Novel",
            id,
        }))?;

    tracing::info!(novel_id = id, slug = %deleted.slug, user = %admin.subject, "Novel deleted");

    Ok(Json(MutationResponse {
        data: deleted,
        revalidate,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn status_options() -> Vec<StatusOption> {
    VALID_STATUSES
        .iter()
        .filter_map(|s| NovelStatus::from_str(s).ok())
        .map(|status| StatusOption {
            value: status.as_str(),
            label: status.label(),
        })
        .collect()
}

/// Novel pages plus every reader page of the novel; all show novel fields.
async fn novel_and_chapter_paths(state: &AppState, id: DbId, slug: &str) -> AppResult<Vec<String>> {
    let orders = ChapterRepo::list_orders(&state.pool, id).await?;
    let mut paths = novel_paths(slug);
    for path in chapter_paths(slug, &orders) {
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    Ok(paths)
}

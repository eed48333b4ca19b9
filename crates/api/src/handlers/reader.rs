//! Handlers for the chapter reader and the legacy chapter addresses.
//!
//! The canonical reader address is `/novels/{slug}/chapter-{order}`. Any
//! other shape that identifies a chapter answers with a 308 redirect to it.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use lentera_core::chapter_ref::{chapter_api_path, chapter_path, novel_api_path, ChapterRef};
use lentera_core::error::CoreError;
use lentera_core::types::DbId;
use lentera_db::models::chapter::Chapter;
use lentera_db::models::novel::Novel;
use lentera_db::repositories::ChapterRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_chapter_exists, ensure_novel_by_slug, ensure_novel_exists};
use crate::response::DataResponse;
use crate::state::AppState;

/// The novel a chapter belongs to, as shown in the reader header.
#[derive(Debug, Serialize)]
pub struct ReaderNovel {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub author: String,
}

/// A previous/next navigation target.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub order: i32,
    pub href: String,
}

/// Arguments for the client's history writer, recorded on every view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPayload {
    pub novel_id: String,
    pub chapter_id: String,
    pub chapter_order: i32,
    pub chapter_title: String,
}

/// Reader page.
#[derive(Debug, Serialize)]
pub struct ReaderPage {
    pub novel: ReaderNovel,
    pub chapter: Chapter,
    pub prev: Option<NavLink>,
    pub next: Option<NavLink>,
    pub history: HistoryPayload,
}

/// GET /api/v1/novels/{slug}/{chapter_ref}
///
/// `chapter-{order}` renders the reader. A bare chapter id redirects to the
/// canonical order address.
pub async fn read_chapter(
    State(state): State<AppState>,
    Path((slug, segment)): Path<(String, String)>,
) -> AppResult<Response> {
    let novel = ensure_novel_by_slug(&state.pool, &slug).await?;

    match ChapterRef::parse(&segment)? {
        ChapterRef::Order(order) => {
            let chapter = ChapterRepo::find_by_order(&state.pool, novel.id, order)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::NotFoundByKey(format!(
                        "Chapter {order} of '{slug}' not found"
                    )))
                })?;
            let page = build_reader_page(&state, novel, chapter).await?;
            Ok(Json(DataResponse { data: page }).into_response())
        }
        ChapterRef::Id(id) => {
            let chapter = ensure_chapter_in_novel(&state, &novel, id).await?;
            Ok(redirect_to_chapter(&novel.slug, chapter.order))
        }
    }
}

/// GET /api/v1/novels/{slug}/chapter/{chapter_ref}
///
/// Legacy shape; always redirects to the canonical address.
pub async fn legacy_chapter(
    State(state): State<AppState>,
    Path((slug, segment)): Path<(String, String)>,
) -> AppResult<Response> {
    let novel = ensure_novel_by_slug(&state.pool, &slug).await?;

    let order = match ChapterRef::parse(&segment)? {
        ChapterRef::Order(order) => order,
        ChapterRef::Id(id) => ensure_chapter_in_novel(&state, &novel, id).await?.order,
    };

    Ok(redirect_to_chapter(&novel.slug, order))
}

/// GET /api/v1/read/novel/{id}
///
/// Id address of a novel. Redirects to its first chapter, or to the overview
/// if it has none.
pub async fn read_novel_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let novel = ensure_novel_exists(&state.pool, id).await?;

    match ChapterRepo::first_for_novel(&state.pool, novel.id).await? {
        Some(first) => Ok(redirect_to_chapter(&novel.slug, first.order)),
        None => Ok(Redirect::permanent(&novel_api_path(&novel.slug)).into_response()),
    }
}

/// GET /api/v1/read/chapter/{id}
///
/// Id address of a chapter. Redirects to its canonical order address.
pub async fn read_chapter_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let chapter = ensure_chapter_exists(&state.pool, id).await?;
    let novel = ensure_novel_exists(&state.pool, chapter.novel_id).await?;
    Ok(redirect_to_chapter(&novel.slug, chapter.order))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn build_reader_page(
    state: &AppState,
    novel: Novel,
    chapter: Chapter,
) -> AppResult<ReaderPage> {
    let adjacent = ChapterRepo::adjacent(&state.pool, novel.id, chapter.order).await?;
    let link = |order: i32| NavLink {
        order,
        href: chapter_path(&novel.slug, order),
    };
    let prev = adjacent.prev.map(link);
    let next = adjacent.next.map(link);

    Ok(ReaderPage {
        prev,
        next,
        history: HistoryPayload {
            novel_id: novel.id.to_string(),
            chapter_id: chapter.id.to_string(),
            chapter_order: chapter.order,
            chapter_title: chapter.title.clone(),
        },
        novel: ReaderNovel {
            id: novel.id,
            slug: novel.slug,
            title: novel.title,
            author: novel.author,
        },
        chapter,
    })
}

/// Load a chapter by id and check that it belongs to `novel`.
async fn ensure_chapter_in_novel(state: &AppState, novel: &Novel, id: DbId) -> AppResult<Chapter> {
    let chapter = ensure_chapter_exists(&state.pool, id).await?;
    if chapter.novel_id != novel.id {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id,
        }));
    }
    Ok(chapter)
}

fn redirect_to_chapter(slug: &str, order: i32) -> Response {
    Redirect::permanent(&chapter_api_path(slug, order)).into_response()
}

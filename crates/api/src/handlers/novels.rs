//! Handler for the public novel overview page.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use lentera_core::chapter_ref::{chapter_path, novel_path};
use lentera_core::novel_status::NovelStatus;
use lentera_db::models::chapter::ChapterListItem;
use lentera_db::models::novel::NovelWithTaxonomy;
use lentera_db::repositories::{ChapterRepo, NovelRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::ensure_novel_by_slug;
use crate::response::DataResponse;
use crate::state::AppState;

/// A chapter-list row with its canonical reader path.
#[derive(Debug, Serialize)]
pub struct ChapterLink {
    #[serde(flatten)]
    pub chapter: ChapterListItem,
    pub href: String,
}

/// Novel overview page.
///
/// `first_chapter_order` feeds the client's read-entry-point resolver; the
/// continue-reading banner and read marks are computed client-side from
/// the local history.
#[derive(Debug, Serialize)]
pub struct NovelPage {
    #[serde(flatten)]
    pub novel: NovelWithTaxonomy,
    pub status_label: &'static str,
    pub href: String,
    pub chapters: Vec<ChapterLink>,
    pub first_chapter_order: Option<i32>,
}

/// GET /api/v1/novels/{slug}
pub async fn get_novel(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let novel = ensure_novel_by_slug(&state.pool, &slug).await?;
    let chapters = ChapterRepo::list_for_novel(&state.pool, novel.id).await?;
    let novel = NovelRepo::with_taxonomy(&state.pool, novel).await?;

    let status_label = NovelStatus::from_str(&novel.novel.status)
        .unwrap_or_default()
        .label();
    let first_chapter_order = chapters.first().map(|c| c.order);

    let chapters = chapters
        .into_iter()
        .map(|chapter| ChapterLink {
            href: chapter_path(&slug, chapter.order),
            chapter,
        })
        .collect();

    Ok(Json(DataResponse {
        data: NovelPage {
            href: novel_path(&slug),
            novel,
            status_label,
            chapters,
            first_chapter_order,
        },
    }))
}

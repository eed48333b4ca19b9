//! Request handlers.
//!
//! Public handlers return JSON view-models for the reading pages; admin
//! handlers back the content-management forms. Handlers delegate to the
//! repositories in `lentera_db` and map errors via [`AppError`].

pub mod admin_chapters;
pub mod admin_novels;
pub mod catalog;
pub mod novels;
pub mod reader;
pub mod sitemap;
pub mod user;

use lentera_core::error::CoreError;
use lentera_core::types::DbId;
use lentera_db::models::chapter::Chapter;
use lentera_db::models::novel::Novel;
use lentera_db::repositories::{ChapterRepo, NovelRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a novel by id or fail with 404.
pub(crate) async fn ensure_novel_exists(pool: &PgPool, id: DbId) -> AppResult<Novel> {
    NovelRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Novel",
            id,
        })
    })
}

/// Load a novel by slug or fail with 404.
pub(crate) async fn ensure_novel_by_slug(pool: &PgPool, slug: &str) -> AppResult<Novel> {
    NovelRepo::find_by_slug(pool, slug).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFoundByKey(format!(
            "Novel '{slug}' not found"
        )))
    })
}

/// Load a chapter by id or fail with 404.
pub(crate) async fn ensure_chapter_exists(pool: &PgPool, id: DbId) -> AppResult<Chapter> {
    ChapterRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id,
        })
    })
}

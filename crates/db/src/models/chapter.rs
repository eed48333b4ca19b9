//! Chapter models.

use lentera_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `chapters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chapter {
    pub id: DbId,
    pub novel_id: DbId,
    pub title: String,
    pub content: String,
    #[sqlx(rename = "chapter_order")]
    pub order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Chapter row without its content, for chapter lists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChapterListItem {
    pub id: DbId,
    pub novel_id: DbId,
    pub title: String,
    #[sqlx(rename = "chapter_order")]
    pub order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

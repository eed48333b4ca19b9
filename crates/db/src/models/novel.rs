//! Novel models.

use lentera_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::taxonomy::{Genre, Tag};

/// A row from the `novels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Novel {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing row used by the home, browse, and admin pages.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NovelSummary {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub cover_image: Option<String>,
    pub status: String,
    pub chapter_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A novel with its genres and tags.
#[derive(Debug, Clone, Serialize)]
pub struct NovelWithTaxonomy {
    #[serde(flatten)]
    pub novel: Novel,
    pub genres: Vec<Genre>,
    pub tags: Vec<Tag>,
}

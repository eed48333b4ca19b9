//! Genre and tag models.

use lentera_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from `genres` or `tags`; both tables share one shape.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TaxonomyTerm {
    pub id: DbId,
    pub name: String,
}

pub type Genre = TaxonomyTerm;
pub type Tag = TaxonomyTerm;

/// Which taxonomy a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyKind {
    Genre,
    Tag,
}

impl TaxonomyKind {
    /// Name of the term table.
    pub fn table(self) -> &'static str {
        match self {
            Self::Genre => "genres",
            Self::Tag => "tags",
        }
    }

    /// Name of the novel junction table.
    pub fn join_table(self) -> &'static str {
        match self {
            Self::Genre => "novel_genres",
            Self::Tag => "novel_tags",
        }
    }

    /// Foreign-key column in the junction table.
    pub fn foreign_key(self) -> &'static str {
        match self {
            Self::Genre => "genre_id",
            Self::Tag => "tag_id",
        }
    }
}

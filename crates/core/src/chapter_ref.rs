//! Chapter addressing.
//!
//! The canonical reader address is `/novel/{slug}/chapter-{order}`. Older
//! links address a chapter by its database id; those are parsed into
//! [`ChapterRef::Id`] and redirected by the API layer.

use crate::error::CoreError;
use crate::types::DbId;

/// Prefix of an order-addressed chapter path segment.
pub const ORDER_PREFIX: &str = "chapter-";

/// A chapter reference taken from a URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterRef {
    /// `chapter-<N>`: the chapter with `order = N` in the addressed novel.
    Order(i32),
    /// A bare numeric database id.
    Id(DbId),
}

impl ChapterRef {
    /// Parse a path segment.
    ///
    /// ```
    /// use lentera_core::chapter_ref::ChapterRef;
    ///
    /// assert_eq!(ChapterRef::parse("chapter-12").unwrap(), ChapterRef::Order(12));
    /// assert_eq!(ChapterRef::parse("4051").unwrap(), ChapterRef::Id(4051));
    /// assert!(ChapterRef::parse("chapter-abc").is_err());
    /// ```
    pub fn parse(segment: &str) -> Result<Self, CoreError> {
        if let Some(rest) = segment.strip_prefix(ORDER_PREFIX) {
            return rest
                .parse::<i32>()
                .map(Self::Order)
                .map_err(|_| CoreError::Validation(format!("Invalid chapter order: '{rest}'")));
        }

        segment
            .parse::<DbId>()
            .map(Self::Id)
            .map_err(|_| CoreError::Validation(format!("Invalid chapter reference: '{segment}'")))
    }
}

/// Path of the novel overview page.
pub fn novel_path(slug: &str) -> String {
    format!("/novel/{slug}")
}

/// Canonical reader path for a chapter.
pub fn chapter_path(slug: &str, order: i32) -> String {
    format!("/novel/{slug}/{ORDER_PREFIX}{order}")
}

/// API path serving the novel overview view-model.
pub fn novel_api_path(slug: &str) -> String {
    format!("/api/v1/novels/{slug}")
}

/// API path serving the reader view-model for a chapter.
pub fn chapter_api_path(slug: &str, order: i32) -> String {
    format!("/api/v1/novels/{slug}/{ORDER_PREFIX}{order}")
}

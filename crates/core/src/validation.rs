//! Input schemas for content-management mutations.
//!
//! Each mutation (novel create/update, chapter create/update) deserializes
//! into an input struct, which is trimmed, validated, and converted into a
//! typed draft. Anything missing or malformed fails with
//! [`CoreError::Validation`] before the database is touched.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::novel_status::NovelStatus;
use crate::taxonomy::{normalize_names, overlong_names, split_tag_input, MAX_NAME_LEN};

/// Maximum length of a novel or chapter title.
pub const MAX_TITLE_LEN: u64 = 200;

/// Maximum length of an author name.
pub const MAX_AUTHOR_LEN: u64 = 120;

/// Maximum length of a novel description.
pub const MAX_DESCRIPTION_LEN: u64 = 20_000;

/// Maximum length of chapter content.
pub const MAX_CONTENT_LEN: u64 = 500_000;

// ---------------------------------------------------------------------------
// Novel
// ---------------------------------------------------------------------------

/// Payload of the novel create and update forms.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NovelInput {
    #[serde(default)]
    #[validate(length(min = 1, max = MAX_TITLE_LEN, message = "Title is required (max 200 characters)"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, max = MAX_AUTHOR_LEN, message = "Author is required (max 120 characters)"))]
    pub author: String,
    #[serde(default)]
    #[validate(length(max = MAX_DESCRIPTION_LEN, message = "Description is too long"))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Cover image must be a valid URL"))]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub tags: TagsValue,
}

/// Tag names as submitted: a JSON array, or the comma-separated text field
/// of the novel form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TagsValue {
    List(Vec<String>),
    Text(String),
}

impl Default for TagsValue {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl TagsValue {
    /// Normalized tag names.
    pub fn names(&self) -> Vec<String> {
        match self {
            Self::List(names) => normalize_names(names),
            Self::Text(raw) => split_tag_input(raw),
        }
    }
}

/// A validated novel payload, ready for the repository layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovelDraft {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub status: NovelStatus,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
}

impl NovelInput {
    /// Trim, validate, and convert into a [`NovelDraft`].
    pub fn into_draft(self) -> Result<NovelDraft, CoreError> {
        let trimmed = NovelInput {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            description: trim_optional(self.description),
            cover_image: trim_optional(self.cover_image),
            status: trim_optional(self.status),
            genres: normalize_names(&self.genres),
            tags: TagsValue::List(self.tags.names()),
        };
        let tags = trimmed.tags.names();
        validate_input(&trimmed)?;

        let status = match trimmed.status.as_deref() {
            Some(s) => NovelStatus::from_str(s)?,
            None => NovelStatus::default(),
        };

        let overlong: Vec<String> = overlong_names(&trimmed.genres)
            .into_iter()
            .chain(overlong_names(&tags))
            .collect();
        if !overlong.is_empty() {
            return Err(CoreError::Validation(format!(
                "Genre and tag names must be at most {MAX_NAME_LEN} characters: {}",
                overlong.join(", ")
            )));
        }

        Ok(NovelDraft {
            title: trimmed.title,
            author: trimmed.author,
            description: trimmed.description,
            cover_image: trimmed.cover_image,
            status,
            genres: trimmed.genres,
            tags,
        })
    }
}

// ---------------------------------------------------------------------------
// Chapter
// ---------------------------------------------------------------------------

/// A chapter order as submitted: a JSON number or the raw form string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OrderValue {
    Number(i64),
    Text(String),
}

/// Payload of the chapter create and update forms.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ChapterInput {
    #[serde(default)]
    #[validate(length(min = 1, max = MAX_TITLE_LEN, message = "Title is required (max 200 characters)"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, max = MAX_CONTENT_LEN, message = "Content is required"))]
    pub content: String,
    #[serde(default)]
    pub order: Option<OrderValue>,
}

/// A validated chapter payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDraft {
    pub title: String,
    pub content: String,
    pub order: i32,
}

impl ChapterInput {
    /// Trim, validate, and convert into a [`ChapterDraft`].
    ///
    /// Content is kept verbatim apart from the emptiness check; leading
    /// whitespace can be meaningful in prose.
    pub fn into_draft(self) -> Result<ChapterDraft, CoreError> {
        let trimmed = ChapterInput {
            title: self.title.trim().to_string(),
            content: if self.content.trim().is_empty() {
                String::new()
            } else {
                self.content
            },
            order: self.order,
        };
        validate_input(&trimmed)?;

        let order = match &trimmed.order {
            Some(OrderValue::Number(n)) => order_from_i64(*n)?,
            Some(OrderValue::Text(s)) => parse_order(s)?,
            None => {
                return Err(CoreError::Validation("Order is required".to_string()));
            }
        };

        Ok(ChapterDraft {
            title: trimmed.title,
            content: trimmed.content,
            order,
        })
    }
}

/// Parse a chapter order submitted as text.
///
/// ```
/// use lentera_core::validation::parse_order;
///
/// assert_eq!(parse_order(" 7 ").unwrap(), 7);
/// assert!(parse_order("seven").is_err());
/// ```
pub fn parse_order(raw: &str) -> Result<i32, CoreError> {
    let trimmed = raw.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|_| CoreError::Validation(format!("Order must be a number, got '{trimmed}'")))?;
    order_from_i64(n)
}

fn order_from_i64(n: i64) -> Result<i32, CoreError> {
    if n < 0 {
        return Err(CoreError::Validation(
            "Order must not be negative".to_string(),
        ));
    }
    i32::try_from(n).map_err(|_| CoreError::Validation(format!("Order {n} is out of range")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run `validator` rules and flatten failures into a [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
}

fn describe_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! Novel publication status.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_ONGOING: &str = "ongoing";
pub const STATUS_COMPLETE: &str = "complete";
pub const STATUS_DROPPED: &str = "dropped";
pub const STATUS_HIATUS: &str = "hiatus";

/// All valid status strings, in display order.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_ONGOING,
    STATUS_COMPLETE,
    STATUS_DROPPED,
    STATUS_HIATUS,
];

/// Publication status of a novel. Stored as lowercase text in `novels.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NovelStatus {
    #[default]
    Ongoing,
    Complete,
    Dropped,
    Hiatus,
}

impl NovelStatus {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => STATUS_ONGOING,
            Self::Complete => STATUS_COMPLETE,
            Self::Dropped => STATUS_DROPPED,
            Self::Hiatus => STATUS_HIATUS,
        }
    }

    /// Parse from a string, returning an error for unknown statuses.
    ///
    /// Accepts any casing so legacy upper-case values (`ONGOING`, `DROP`)
    /// round-trip.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            STATUS_ONGOING => Ok(Self::Ongoing),
            STATUS_COMPLETE => Ok(Self::Complete),
            STATUS_DROPPED | "drop" => Ok(Self::Dropped),
            STATUS_HIATUS => Ok(Self::Hiatus),
            other => Err(CoreError::Validation(format!(
                "Unknown novel status: '{other}'. Valid statuses: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }

    /// Human-readable label shown on the admin dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ongoing => "On-going",
            Self::Complete => "Complete",
            Self::Dropped => "Drop",
            Self::Hiatus => "Hiatus",
        }
    }
}

//! Per-user metadata.

use lentera_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_preferences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserPreference {
    pub id: DbId,
    /// Subject id issued by the identity provider.
    pub subject: String,
    pub theme: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

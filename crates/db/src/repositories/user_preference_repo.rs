//! Repository for the `user_preferences` table.

use lentera_core::theme::Theme;
use sqlx::PgPool;

use crate::models::user_preference::UserPreference;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subject, theme, created_at, updated_at";

/// Provides access to per-user metadata keyed by identity subject.
pub struct UserPreferenceRepo;

impl UserPreferenceRepo {
    /// Find the stored preferences for a subject.
    pub async fn find_by_subject(
        pool: &PgPool,
        subject: &str,
    ) -> Result<Option<UserPreference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_preferences WHERE subject = $1");
        sqlx::query_as::<_, UserPreference>(&query)
            .bind(subject)
            .fetch_optional(pool)
            .await
    }

    /// Store the theme for a subject, creating the row on first use.
    pub async fn upsert_theme(
        pool: &PgPool,
        subject: &str,
        theme: Theme,
    ) -> Result<UserPreference, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_preferences (subject, theme) VALUES ($1, $2) \
             ON CONFLICT (subject) DO UPDATE SET theme = EXCLUDED.theme \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserPreference>(&query)
            .bind(subject)
            .bind(theme.as_str())
            .fetch_one(pool)
            .await
    }
}

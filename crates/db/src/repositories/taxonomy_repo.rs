//! Repository for the `genres` / `tags` tables and their novel junctions.
//!
//! Terms are connected to novels by name and created on first use.

use lentera_core::types::DbId;
use sqlx::PgPool;

use crate::models::taxonomy::{TaxonomyKind, TaxonomyTerm};

/// Default number of tag suggestions.
const DEFAULT_SUGGEST_LIMIT: i64 = 10;

/// Maximum number of tag suggestions.
const MAX_SUGGEST_LIMIT: i64 = 50;

/// Provides lookups and connect-or-create for genres and tags.
pub struct TaxonomyRepo;

impl TaxonomyRepo {
    /// List every term of a taxonomy, alphabetically.
    pub async fn list(pool: &PgPool, kind: TaxonomyKind) -> Result<Vec<TaxonomyTerm>, sqlx::Error> {
        let query = format!("SELECT id, name FROM {} ORDER BY name", kind.table());
        sqlx::query_as::<_, TaxonomyTerm>(&query).fetch_all(pool).await
    }

    /// Terms attached to a novel, alphabetically.
    pub async fn for_novel(
        pool: &PgPool,
        kind: TaxonomyKind,
        novel_id: DbId,
    ) -> Result<Vec<TaxonomyTerm>, sqlx::Error> {
        let query = format!(
            "SELECT t.id, t.name FROM {table} t \
             JOIN {join} j ON j.{fk} = t.id \
             WHERE j.novel_id = $1 \
             ORDER BY t.name",
            table = kind.table(),
            join = kind.join_table(),
            fk = kind.foreign_key(),
        );
        sqlx::query_as::<_, TaxonomyTerm>(&query)
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// Tag names containing `query` (case-insensitive), for the tag input.
    ///
    /// An empty query returns the first tags alphabetically.
    pub async fn suggest_tags(
        pool: &PgPool,
        query: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<TaxonomyTerm>, sqlx::Error> {
        let limit = limit
            .unwrap_or(DEFAULT_SUGGEST_LIMIT)
            .clamp(1, MAX_SUGGEST_LIMIT);
        let pattern = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(|q| {
                let escaped = q
                    .replace('\\', "\\\\")
                    .replace('%', "\\%")
                    .replace('_', "\\_");
                format!("%{escaped}%")
            });

        sqlx::query_as::<_, TaxonomyTerm>(
            "SELECT id, name FROM tags \
             WHERE ($1::text IS NULL OR name ILIKE $1) \
             ORDER BY name \
             LIMIT $2",
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Find-or-insert a term by exact name.
    pub(crate) async fn connect_or_create(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        kind: TaxonomyKind,
        name: &str,
    ) -> Result<TaxonomyTerm, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
             RETURNING id, name",
            kind.table()
        );
        sqlx::query_as::<_, TaxonomyTerm>(&query)
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }

    /// Replace a novel's terms with `names`, creating missing terms.
    ///
    /// Runs inside the caller's transaction, so the disconnect and reconnect
    /// passes commit or roll back together.
    pub(crate) async fn set_for_novel(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        kind: TaxonomyKind,
        novel_id: DbId,
        names: &[String],
    ) -> Result<Vec<TaxonomyTerm>, sqlx::Error> {
        let delete = format!("DELETE FROM {} WHERE novel_id = $1", kind.join_table());
        sqlx::query(&delete)
            .bind(novel_id)
            .execute(&mut **tx)
            .await?;

        let insert = format!(
            "INSERT INTO {} (novel_id, {}) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            kind.join_table(),
            kind.foreign_key()
        );

        let mut terms = Vec::with_capacity(names.len());
        for name in names {
            let term = Self::connect_or_create(tx, kind, name).await?;
            sqlx::query(&insert)
                .bind(novel_id)
                .bind(term.id)
                .execute(&mut **tx)
                .await?;
            terms.push(term);
        }

        Ok(terms)
    }
}

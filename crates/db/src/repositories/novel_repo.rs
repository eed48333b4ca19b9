//! Repository for the `novels` table.

use lentera_core::browse::{BrowseFilter, BrowseSort};
use lentera_core::slug::{slugify, with_random_suffix};
use lentera_core::types::{DbId, Timestamp};
use lentera_core::validation::NovelDraft;
use sqlx::PgPool;

use crate::models::novel::{Novel, NovelSummary, NovelWithTaxonomy};
use crate::models::taxonomy::TaxonomyKind;
use crate::repositories::TaxonomyRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, slug, title, author, description, cover_image, status, created_at, updated_at";

/// Column list for summary queries over `novels n`.
const SUMMARY_COLUMNS: &str = "\
    n.id, n.slug, n.title, n.author, n.cover_image, n.status, \
    (SELECT COUNT(*) FROM chapters c WHERE c.novel_id = n.id) AS chapter_count, \
    n.created_at, n.updated_at";

/// Browse filter over `novels n`, binding query pattern, genre, and tag as
/// `$1`..`$3`.
const FILTER_CLAUSE: &str = "\
    ($1::text IS NULL OR n.title ILIKE $1 OR n.author ILIKE $1) \
    AND ($2::text IS NULL OR EXISTS ( \
        SELECT 1 FROM novel_genres ng JOIN genres g ON g.id = ng.genre_id \
        WHERE ng.novel_id = n.id AND g.name = $2)) \
    AND ($3::text IS NULL OR EXISTS ( \
        SELECT 1 FROM novel_tags nt JOIN tags t ON t.id = nt.tag_id \
        WHERE nt.novel_id = n.id AND t.name = $3))";

/// Default page size for novel listings. Callers report the full match
/// count from [`NovelRepo::count_summaries`] next to the page.
const DEFAULT_LIMIT: i64 = 100;

/// Maximum page size for novel listings.
const MAX_LIMIT: i64 = 500;

/// How many suffixed candidates to try before giving up on a slug.
const MAX_SLUG_ATTEMPTS: usize = 5;

/// Provides CRUD operations for novels.
pub struct NovelRepo;

impl NovelRepo {
    /// Insert a novel with its genres and tags, returning the created row.
    ///
    /// The slug is derived from the title. If it is taken, a random suffix is
    /// appended. Everything runs in one transaction.
    pub async fn create(pool: &PgPool, draft: &NovelDraft) -> Result<NovelWithTaxonomy, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let slug = Self::available_slug(&mut tx, &slugify(&draft.title)).await?;

        let query = format!(
            "INSERT INTO novels (slug, title, author, description, cover_image, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let novel = sqlx::query_as::<_, Novel>(&query)
            .bind(&slug)
            .bind(&draft.title)
            .bind(&draft.author)
            .bind(&draft.description)
            .bind(&draft.cover_image)
            .bind(draft.status.as_str())
            .fetch_one(&mut *tx)
            .await?;

        let genres =
            TaxonomyRepo::set_for_novel(&mut tx, TaxonomyKind::Genre, novel.id, &draft.genres).await?;
        let tags =
            TaxonomyRepo::set_for_novel(&mut tx, TaxonomyKind::Tag, novel.id, &draft.tags).await?;

        tx.commit().await?;
        Ok(NovelWithTaxonomy {
            novel,
            genres,
            tags,
        })
    }

    /// Find a novel by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM novels WHERE id = $1");
        sqlx::query_as::<_, Novel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a novel by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM novels WHERE slug = $1");
        sqlx::query_as::<_, Novel>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Attach genres and tags to a loaded novel.
    pub async fn with_taxonomy(pool: &PgPool, novel: Novel) -> Result<NovelWithTaxonomy, sqlx::Error> {
        let genres = TaxonomyRepo::for_novel(pool, TaxonomyKind::Genre, novel.id).await?;
        let tags = TaxonomyRepo::for_novel(pool, TaxonomyKind::Tag, novel.id).await?;
        Ok(NovelWithTaxonomy {
            novel,
            genres,
            tags,
        })
    }

    /// List one page of novels matching a browse filter, with chapter counts.
    pub async fn list_summaries(
        pool: &PgPool,
        filter: &BrowseFilter,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<NovelSummary>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = offset.unwrap_or(0).max(0);

        let order_by = match filter.sort {
            BrowseSort::Newest => "n.created_at DESC, n.id DESC",
            BrowseSort::Updated => "n.updated_at DESC, n.id DESC",
            BrowseSort::Popular => "chapter_count DESC, n.created_at DESC, n.id DESC",
        };

        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM novels n \
             WHERE {FILTER_CLAUSE} \
             ORDER BY {order_by} \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, NovelSummary>(&query)
            .bind(filter.like_pattern())
            .bind(&filter.genre)
            .bind(&filter.tag)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count every novel matching a browse filter, ignoring paging.
    pub async fn count_summaries(pool: &PgPool, filter: &BrowseFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM novels n WHERE {FILTER_CLAUSE}");
        sqlx::query_scalar(&query)
            .bind(filter.like_pattern())
            .bind(&filter.genre)
            .bind(&filter.tag)
            .fetch_one(pool)
            .await
    }

    /// Update a novel and replace its genres and tags.
    ///
    /// Field update, taxonomy disconnect, and reconnect share one
    /// transaction. The slug is left unchanged so existing links keep
    /// working. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &NovelDraft,
    ) -> Result<Option<NovelWithTaxonomy>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE novels SET \
                title = $2, \
                author = $3, \
                description = $4, \
                cover_image = $5, \
                status = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let novel = sqlx::query_as::<_, Novel>(&query)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.author)
            .bind(&draft.description)
            .bind(&draft.cover_image)
            .bind(draft.status.as_str())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(novel) = novel else {
            return Ok(None);
        };

        let genres =
            TaxonomyRepo::set_for_novel(&mut tx, TaxonomyKind::Genre, id, &draft.genres).await?;
        let tags = TaxonomyRepo::set_for_novel(&mut tx, TaxonomyKind::Tag, id, &draft.tags).await?;

        tx.commit().await?;
        Ok(Some(NovelWithTaxonomy {
            novel,
            genres,
            tags,
        }))
    }

    /// Delete a novel with its chapters and taxonomy links.
    ///
    /// Returns the deleted row, or `None` if it did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!("DELETE FROM novels WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Novel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Slugs and last-modified times of every novel, for the sitemap.
    pub async fn list_sitemap(pool: &PgPool) -> Result<Vec<(String, Timestamp)>, sqlx::Error> {
        sqlx::query_as::<_, (String, Timestamp)>(
            "SELECT slug, updated_at FROM novels ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Bump `updated_at` after a chapter change so "recently updated"
    /// listings reflect new chapters.
    pub(crate) async fn touch(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE novels SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// Return `base` if unused, else the first free suffixed variant.
    async fn available_slug(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        base: &str,
    ) -> Result<String, sqlx::Error> {
        let mut candidate = base.to_string();
        for _ in 0..MAX_SLUG_ATTEMPTS {
            let taken: bool =
                sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM novels WHERE slug = $1)")
                    .bind(&candidate)
                    .fetch_one(&mut **tx)
                    .await?;
            if !taken {
                return Ok(candidate);
            }
            tracing::debug!(slug = %candidate, "Slug taken, retrying with suffix");
            candidate = with_random_suffix(base);
        }
        // Let the unique constraint report the collision.
        Ok(candidate)
    }
}

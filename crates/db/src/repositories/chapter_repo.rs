//! Repository for the `chapters` table.

use lentera_core::navigation::{adjacent_orders, Adjacent};
use lentera_core::types::DbId;
use lentera_core::validation::ChapterDraft;
use sqlx::PgPool;

use crate::models::chapter::{Chapter, ChapterListItem};
use crate::repositories::NovelRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, novel_id, title, content, chapter_order, created_at, updated_at";

/// Column list for chapter lists (no content).
const LIST_COLUMNS: &str = "id, novel_id, title, chapter_order, created_at, updated_at";

/// Provides CRUD operations for chapters.
pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a chapter and bump the parent novel's `updated_at`.
    ///
    /// A duplicate `(novel_id, chapter_order)` fails with the
    /// `uq_chapters_novel_order` unique violation.
    pub async fn create(
        pool: &PgPool,
        novel_id: DbId,
        draft: &ChapterDraft,
    ) -> Result<Chapter, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO chapters (novel_id, title, content, chapter_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let chapter = sqlx::query_as::<_, Chapter>(&query)
            .bind(novel_id)
            .bind(&draft.title)
            .bind(&draft.content)
            .bind(draft.order)
            .fetch_one(&mut *tx)
            .await?;

        NovelRepo::touch(&mut tx, novel_id).await?;

        tx.commit().await?;
        Ok(chapter)
    }

    /// Find a chapter by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chapters WHERE id = $1");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a chapter by its order within a novel.
    pub async fn find_by_order(
        pool: &PgPool,
        novel_id: DbId,
        order: i32,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM chapters WHERE novel_id = $1 AND chapter_order = $2");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(novel_id)
            .bind(order)
            .fetch_optional(pool)
            .await
    }

    /// List a novel's chapters in ascending order, without content.
    pub async fn list_for_novel(
        pool: &PgPool,
        novel_id: DbId,
    ) -> Result<Vec<ChapterListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS} FROM chapters WHERE novel_id = $1 ORDER BY chapter_order ASC"
        );
        sqlx::query_as::<_, ChapterListItem>(&query)
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// The lowest-ordered chapter of a novel, if it has any.
    pub async fn first_for_novel(
        pool: &PgPool,
        novel_id: DbId,
    ) -> Result<Option<ChapterListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS} FROM chapters WHERE novel_id = $1 \
             ORDER BY chapter_order ASC LIMIT 1"
        );
        sqlx::query_as::<_, ChapterListItem>(&query)
            .bind(novel_id)
            .fetch_optional(pool)
            .await
    }

    /// Every chapter order of a novel, ascending.
    pub async fn list_orders(pool: &PgPool, novel_id: DbId) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT chapter_order FROM chapters WHERE novel_id = $1 ORDER BY chapter_order ASC",
        )
        .bind(novel_id)
        .fetch_all(pool)
        .await
    }

    /// Orders of the nearest existing chapters before and after `order`.
    pub async fn adjacent(
        pool: &PgPool,
        novel_id: DbId,
        order: i32,
    ) -> Result<Adjacent, sqlx::Error> {
        let orders = Self::list_orders(pool, novel_id).await?;
        Ok(adjacent_orders(&orders, order))
    }

    /// Update a chapter's title, content, and order.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &ChapterDraft,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE chapters SET title = $2, content = $3, chapter_order = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let chapter = sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.content)
            .bind(draft.order)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(ref chapter) = chapter {
            NovelRepo::touch(&mut tx, chapter.novel_id).await?;
        }

        tx.commit().await?;
        Ok(chapter)
    }

    /// Delete a chapter, returning the deleted row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!("DELETE FROM chapters WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

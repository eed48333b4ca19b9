//! Admin handlers for chapters.
//!
//! Every handler requires [`RequireAdmin`]. Chapter orders are unique per
//! novel; a duplicate surfaces as 409 from the `uq_chapters_novel_order`
//! constraint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lentera_core::error::CoreError;
use lentera_core::navigation::{adjacent_orders, next_free_order};
use lentera_core::revalidation::chapter_paths;
use lentera_core::types::DbId;
use lentera_core::validation::ChapterInput;
use lentera_db::models::chapter::{Chapter, ChapterListItem};
use lentera_db::models::novel::Novel;
use lentera_db::repositories::ChapterRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_chapter_exists, ensure_novel_exists};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

/// Chapter management page for one novel.
#[derive(Debug, Serialize)]
pub struct ChapterManagement {
    pub novel: Novel,
    pub chapters: Vec<ChapterListItem>,
    /// Order pre-filled on the new-chapter form.
    pub next_order: i32,
}

/// Data for the chapter edit form.
#[derive(Debug, Serialize)]
pub struct ChapterForm {
    pub novel: Novel,
    pub chapter: Chapter,
}

/// GET /api/v1/admin/novels/{id}/chapters
pub async fn list_chapters(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(novel_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let novel = ensure_novel_exists(&state.pool, novel_id).await?;
    let chapters = ChapterRepo::list_for_novel(&state.pool, novel_id).await?;
    let orders: Vec<i32> = chapters.iter().map(|c| c.order).collect();

    Ok(Json(DataResponse {
        data: ChapterManagement {
            novel,
            chapters,
            next_order: next_free_order(&orders),
        },
    }))
}

/// POST /api/v1/admin/novels/{id}/chapters
pub async fn create_chapter(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(novel_id): Path<DbId>,
    Json(input): Json<ChapterInput>,
) -> AppResult<impl IntoResponse> {
    let draft = input.into_draft()?;
    let novel = ensure_novel_exists(&state.pool, novel_id).await?;

    let chapter = ChapterRepo::create(&state.pool, novel_id, &draft).await?;

    tracing::info!(
        novel_id,
        chapter_id = chapter.id,
        order = chapter.order,
        user = %admin.subject,
        "Chapter created",
    );

    let revalidate = affected_paths(&state, &novel, &[chapter.order]).await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: chapter,
            revalidate,
        }),
    ))
}

/// GET /api/v1/admin/chapters/{id}
pub async fn get_chapter_form(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let chapter = ensure_chapter_exists(&state.pool, id).await?;
    let novel = ensure_novel_exists(&state.pool, chapter.novel_id).await?;

    Ok(Json(DataResponse {
        data: ChapterForm { novel, chapter },
    }))
}

/// PUT /api/v1/admin/chapters/{id}
pub async fn update_chapter(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ChapterInput>,
) -> AppResult<impl IntoResponse> {
    let draft = input.into_draft()?;
    let existing = ensure_chapter_exists(&state.pool, id).await?;
    let novel = ensure_novel_exists(&state.pool, existing.novel_id).await?;

    // Neighbours of the old position lose or gain a link too.
    let old_orders = ChapterRepo::list_orders(&state.pool, novel.id).await?;
    let old_adjacent = adjacent_orders(&old_orders, existing.order);

    let updated = ChapterRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id,
        }))?;

    tracing::info!(
        novel_id = novel.id,
        chapter_id = id,
        order = updated.order,
        user = %admin.subject,
        "Chapter updated",
    );

    let mut orders = vec![existing.order, updated.order];
    orders.extend(old_adjacent.prev);
    orders.extend(old_adjacent.next);
    let revalidate = affected_paths(&state, &novel, &orders).await?;

    Ok(Json(MutationResponse {
        data: updated,
        revalidate,
    }))
}

/// DELETE /api/v1/admin/chapters/{id}
pub async fn delete_chapter(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_chapter_exists(&state.pool, id).await?;
    let novel = ensure_novel_exists(&state.pool, existing.novel_id).await?;
    let orders = ChapterRepo::list_orders(&state.pool, novel.id).await?;
    let adjacent = adjacent_orders(&orders, existing.order);

    let deleted = ChapterRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id,
        }))?;

    tracing::info!(novel_id = novel.id, chapter_id = id, user = %admin.subject, "Chapter deleted");

    let mut affected = vec![deleted.order];
    affected.extend(adjacent.prev);
    affected.extend(adjacent.next);

    Ok(Json(MutationResponse {
        data: deleted,
        revalidate: chapter_paths(&novel.slug, &affected),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reader pages for `orders` and for their current neighbours.
async fn affected_paths(state: &AppState, novel: &Novel, orders: &[i32]) -> AppResult<Vec<String>> {
    let current = ChapterRepo::list_orders(&state.pool, novel.id).await?;

    let mut affected = Vec::with_capacity(orders.len() * 3);
    for &order in orders {
        affected.push(order);
        let adjacent = adjacent_orders(&current, order);
        affected.extend(adjacent.prev);
        affected.extend(adjacent.next);
    }

    Ok(chapter_paths(&novel.slug, &affected))
}

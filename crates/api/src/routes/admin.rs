//! Route definitions for the content-management area, mounted at `/admin`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{admin_chapters, admin_novels};
use crate::state::AppState;

/// ```text
/// GET    /novels                   -> list_novels
/// POST   /novels                   -> create_novel
/// GET    /novels/{id}              -> get_novel_form
/// PUT    /novels/{id}              -> update_novel
/// DELETE /novels/{id}              -> delete_novel
/// GET    /novels/{id}/chapters     -> list_chapters
/// POST   /novels/{id}/chapters     -> create_chapter
/// GET    /chapters/{id}            -> get_chapter_form
/// PUT    /chapters/{id}            -> update_chapter
/// DELETE /chapters/{id}            -> delete_chapter
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/novels",
            get(admin_novels::list_novels).post(admin_novels::create_novel),
        )
        .route(
            "/novels/{id}",
            get(admin_novels::get_novel_form)
                .put(admin_novels::update_novel)
                .delete(admin_novels::delete_novel),
        )
        .route(
            "/novels/{id}/chapters",
            get(admin_chapters::list_chapters).post(admin_chapters::create_chapter),
        )
        .route(
            "/chapters/{id}",
            get(admin_chapters::get_chapter_form)
                .put(admin_chapters::update_chapter)
                .delete(admin_chapters::delete_chapter),
        )
}

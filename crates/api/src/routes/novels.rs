//! Route definitions for the public novel and reader pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::{novels, reader};
use crate::state::AppState;

/// ```text
/// GET /novels/{slug}                          -> get_novel
/// GET /novels/{slug}/{chapter_ref}            -> read_chapter
/// GET /novels/{slug}/chapter/{chapter_ref}    -> legacy_chapter (308)
/// GET /read/novel/{id}                        -> read_novel_by_id (308)
/// GET /read/chapter/{id}                      -> read_chapter_by_id (308)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/novels/{slug}", get(novels::get_novel))
        .route("/novels/{slug}/{chapter_ref}", get(reader::read_chapter))
        .route(
            "/novels/{slug}/chapter/{chapter_ref}",
            get(reader::legacy_chapter),
        )
        .route("/read/novel/{id}", get(reader::read_novel_by_id))
        .route("/read/chapter/{id}", get(reader::read_chapter_by_id))
}

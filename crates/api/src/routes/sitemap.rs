use axum::routing::get;
use axum::Router;

use crate::handlers::sitemap;
use crate::state::AppState;

/// Mount the sitemap at root level (not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/sitemap.xml", get(sitemap::sitemap_xml))
}

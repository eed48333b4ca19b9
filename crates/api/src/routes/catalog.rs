use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Listing and taxonomy routes.
///
/// ```text
/// GET /home     -> home
/// GET /browse   -> browse
/// GET /genres   -> list_genres
/// GET /tags     -> suggest_tags
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(catalog::home))
        .route("/browse", get(catalog::browse))
        .route("/genres", get(catalog::list_genres))
        .route("/tags", get(catalog::suggest_tags))
}

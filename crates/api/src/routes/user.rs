use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// GET /session        -> get_session
/// GET /user/theme     -> get_theme
/// PUT /user/theme     -> update_theme
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", get(user::get_session))
        .route("/user/theme", get(user::get_theme).put(user::update_theme))
}

pub mod admin;
pub mod catalog;
pub mod health;
pub mod novels;
pub mod sitemap;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /home                                   latest novels
/// /browse                                 search, genre/tag filter, sort
/// /genres                                 genre list
/// /tags                                   tag suggestions
///
/// /novels/{slug}                          novel overview
/// /novels/{slug}/{chapter_ref}            reader (chapter-N; id redirects)
/// /novels/{slug}/chapter/{chapter_ref}    legacy reader address (redirect)
/// /read/novel/{id}                        novel id address (redirect)
/// /read/chapter/{id}                      chapter id address (redirect)
///
/// /session                                visitor summary
/// /user/theme                             get, update (requires auth)
///
/// /admin/novels                           list, create (admin only)
/// /admin/novels/{id}                      get, update, delete
/// /admin/novels/{id}/chapters             list, create
/// /admin/chapters/{id}                    get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(novels::router())
        .merge(user::router())
        .nest("/admin", admin::router())
}

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use lentera_core::sitemap::{build_entries, render_sitemap};
use lentera_db::repositories::NovelRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /sitemap.xml -- home, browse, and every novel overview.
pub async fn sitemap_xml(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let novels = NovelRepo::list_sitemap(&state.pool).await?;
    let entries = build_entries(&state.config.public_base_url, chrono::Utc::now(), &novels);

    Ok((
        [(CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&entries),
    ))
}

//! Handlers for the session summary and the reader theme preference.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use lentera_core::admin::is_admin_email;
use lentera_core::revalidation::HOME_PATH;
use lentera_core::theme::Theme;
use lentera_db::repositories::UserPreferenceRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

/// What the page chrome needs to know about the current visitor.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub signed_in: bool,
    pub is_admin: bool,
    pub email: Option<String>,
    pub theme: Theme,
}

/// Current theme of a signed-in user.
#[derive(Debug, Serialize)]
pub struct ThemePreference {
    pub theme: Theme,
}

/// Body of `PUT /api/v1/user/theme`.
#[derive(Debug, Deserialize)]
pub struct UpdateTheme {
    pub theme: String,
}

/// GET /api/v1/session
///
/// Anonymous visitors get the default theme and no admin link.
pub async fn get_session(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> AppResult<impl IntoResponse> {
    let info = match user {
        None => SessionInfo {
            signed_in: false,
            is_admin: false,
            email: None,
            theme: Theme::default(),
        },
        Some(user) => {
            let theme = load_theme(&state, &user.subject).await?;
            SessionInfo {
                signed_in: true,
                is_admin: is_admin_email(user.email.as_deref(), &state.config.admin_email),
                email: user.email,
                theme,
            }
        }
    };

    Ok(Json(DataResponse { data: info }))
}

/// GET /api/v1/user/theme
pub async fn get_theme(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let theme = load_theme(&state, &user.subject).await?;

    Ok(Json(DataResponse {
        data: ThemePreference { theme },
    }))
}

/// PUT /api/v1/user/theme
///
/// Stores `light` or `dark` in the user's metadata.
pub async fn update_theme(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateTheme>,
) -> AppResult<impl IntoResponse> {
    let theme = Theme::from_str(input.theme.trim())?;
    UserPreferenceRepo::upsert_theme(&state.pool, &user.subject, theme).await?;

    tracing::info!(user = %user.subject, theme = theme.as_str(), "Theme updated");

    Ok(Json(MutationResponse {
        data: ThemePreference { theme },
        revalidate: vec![HOME_PATH.to_string()],
    }))
}

async fn load_theme(state: &AppState, subject: &str) -> AppResult<Theme> {
    let pref = UserPreferenceRepo::find_by_subject(&state.pool, subject).await?;
    Ok(Theme::from_stored(pref.as_ref().map(|p| p.theme.as_str())))
}

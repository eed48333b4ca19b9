//! Admin gate extractor.
//!
//! There is one admin: the signed-in user whose email matches the
//! configured `ADMIN_EMAIL`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lentera_core::admin::is_admin_email;
use lentera_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the admin account. Rejects with 401 when not signed in and
/// 403 Forbidden for any other user.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be the admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_admin_email(user.email.as_deref(), &state.config.admin_email) {
            tracing::warn!(user = %user.subject, "Non-admin user rejected from admin area");
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin access required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

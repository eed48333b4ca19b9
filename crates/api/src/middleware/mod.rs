//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the signed-in user from a Bearer token.
//! - [`auth::MaybeUser`] -- Same, but anonymous requests pass through.
//! - [`rbac::RequireAdmin`] -- Requires the configured admin account.

pub mod auth;
pub mod rbac;

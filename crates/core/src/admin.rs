//! Admin gate.
//!
//! Content management is restricted to a single configured identity: the
//! signed-in user whose email matches `ADMIN_EMAIL`.

/// Check whether `user_email` is the configured admin email.
///
/// Comparison ignores surrounding whitespace and ASCII case. A blank admin
/// email never matches.
pub fn is_admin_email(user_email: Option<&str>, admin_email: &str) -> bool {
    let admin = admin_email.trim();
    if admin.is_empty() {
        return false;
    }
    match user_email {
        Some(email) => email.trim().eq_ignore_ascii_case(admin),
        None => false,
    }
}

//! Shared response envelope types for API handlers.
//!
//! Reads use a `{ "data": ... }` envelope. Mutations add the page paths the
//! renderer should invalidate: `{ "data": ..., "revalidate": [...] }`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": T, "revalidate": [paths] }` envelope returned by mutations.
#[derive(Debug, Serialize)]
pub struct MutationResponse<T: Serialize> {
    pub data: T,
    /// Page paths whose cached renderings are now stale.
    pub revalidate: Vec<String>,
}

//! Page paths to refresh after a content mutation.
//!
//! The API returns these alongside every mutation result so the rendering
//! layer can drop its cached copies of the affected pages.

use crate::chapter_ref::{chapter_path, novel_path};

pub const HOME_PATH: &str = "/";
pub const BROWSE_PATH: &str = "/browse";
pub const ADMIN_PATH: &str = "/admin";

/// Paths affected by creating, updating, or deleting a novel.
pub fn novel_paths(slug: &str) -> Vec<String> {
    vec![
        HOME_PATH.to_string(),
        BROWSE_PATH.to_string(),
        ADMIN_PATH.to_string(),
        novel_path(slug),
    ]
}

/// Paths affected by creating, updating, or deleting a chapter.
///
/// Listing pages are included: they show chapter counts and sort by the
/// novel's update time, which every chapter mutation bumps.
///
/// `orders` lists every order whose reader page shows a changed link or
/// content (the chapter itself, its old order when renumbered, and the
/// neighbours whose prev/next links may change).
pub fn chapter_paths(slug: &str, orders: &[i32]) -> Vec<String> {
    let mut paths = vec![
        HOME_PATH.to_string(),
        BROWSE_PATH.to_string(),
        ADMIN_PATH.to_string(),
        novel_path(slug),
    ];
    let mut seen: Vec<i32> = Vec::new();
    for &order in orders {
        if !seen.contains(&order) {
            seen.push(order);
            paths.push(chapter_path(slug, order));
        }
    }
    paths
}

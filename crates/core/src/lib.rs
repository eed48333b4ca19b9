//! Domain logic for Lentera Baca, free of I/O.
//!
//! Shared by the repository layer (`lentera-db`), the HTTP server
//! (`lentera-api`), and reading clients (`reading_history`).

pub mod admin;
pub mod browse;
pub mod chapter_ref;
pub mod error;
pub mod navigation;
pub mod novel_status;
pub mod reading_history;
pub mod revalidation;
pub mod sitemap;
pub mod slug;
pub mod taxonomy;
pub mod theme;
pub mod types;
pub mod validation;

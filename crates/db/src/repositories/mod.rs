//! Repository layer: one zero-sized struct per table group.
//!
//! Each repo exposes async functions that take a `&PgPool`. Multi-statement
//! writes open their own transaction.

pub mod chapter_repo;
pub mod novel_repo;
pub mod taxonomy_repo;
pub mod user_preference_repo;

pub use chapter_repo::ChapterRepo;
pub use novel_repo::NovelRepo;
pub use taxonomy_repo::TaxonomyRepo;
pub use user_preference_repo::UserPreferenceRepo;

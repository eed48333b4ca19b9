//! Row structs and composite read models.
//!
//! Write payloads are the validated drafts from `lentera_core::validation`;
//! this module only describes what comes back out of the database.

pub mod chapter;
pub mod novel;
pub mod taxonomy;
pub mod user_preference;

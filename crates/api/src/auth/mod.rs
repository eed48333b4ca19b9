//! Authentication primitives.
//!
//! - [`jwt`] -- verification of identity-provider bearer tokens.

pub mod jwt;

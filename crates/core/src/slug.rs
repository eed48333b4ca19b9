//! Novel slug generation.
//!
//! Slugs are derived from the novel title: lowercased ASCII alphanumerics
//! separated by single hyphens. When a slug is already taken, the repository
//! layer retries with [`with_random_suffix`].

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

/// Runs of anything that is not a lowercase ASCII letter or digit.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Slug used when a title contains no usable characters at all.
pub const FALLBACK_SLUG: &str = "novel";

/// Length of the random suffix appended on slug collision.
pub const SUFFIX_LEN: usize = 6;

/// Maximum slug length (before any suffix).
pub const MAX_BASE_LEN: usize = 80;

/// Normalize a title into a URL-safe slug.
///
/// ```
/// use lentera_core::slug::slugify;
///
/// assert_eq!(slugify("Sang Pencari!!"), "sang-pencari");
/// assert_eq!(slugify("  Cahaya di Ujung   Terowongan "), "cahaya-di-ujung-terowongan");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let joined = SEPARATOR_RE.replace_all(&lowered, "-");
    let mut slug = joined.trim_matches('-').to_string();

    if slug.len() > MAX_BASE_LEN {
        slug.truncate(MAX_BASE_LEN);
        slug = slug.trim_end_matches('-').to_string();
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Append a random lowercase alphanumeric suffix to a base slug.
pub fn with_random_suffix(base: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("{base}-{suffix}")
}

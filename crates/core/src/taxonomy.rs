//! Genre and tag name handling.
//!
//! Genres and tags are connected to novels by name and created on first use,
//! so every name goes through [`normalize_names`] before it reaches the
//! repository layer.

/// Maximum length of a single genre or tag name.
pub const MAX_NAME_LEN: usize = 50;

/// Genres offered as checkboxes on the novel form.
pub const PREDEFINED_GENRES: &[&str] = &[
    "Action",
    "Adult",
    "Adventure",
    "Comedy",
    "Drama",
    "Ecchi",
    "Fan-Fiction",
    "Fantasy",
    "Game",
    "Gender-Bender",
    "Harem",
    "Historical",
    "Horror",
    "Josei",
    "Martial-Arts",
    "Mature",
    "Mecha",
    "Military",
    "Mystery",
    "Psychological",
    "Romance",
    "School-Life",
    "Sci-Fi",
    "Seinen",
    "Shoujo",
    "Shoujo-Ai",
    "Shounen",
    "Shounen-Ai",
    "Slice-Of-Life",
    "Smut",
    "Sports",
    "Supernatural",
    "Tragedy",
    "Urban-Life",
    "Yaoi",
    "Yuri",
];

/// Trim names, drop empty ones, and remove case-insensitive duplicates.
///
/// The first spelling of a duplicated name wins and input order is kept.
pub fn normalize_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();

    for name in names {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = trimmed.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(trimmed.to_string());
    }

    out
}

/// Split the comma-separated tag field of the novel form.
///
/// ```
/// use lentera_core::taxonomy::split_tag_input;
///
/// assert_eq!(split_tag_input("magic, , revenge ,magic"), vec!["magic", "revenge"]);
/// ```
pub fn split_tag_input(raw: &str) -> Vec<String> {
    let parts: Vec<&str> = raw.split(',').collect();
    normalize_names(&parts)
}

/// Return the names longer than [`MAX_NAME_LEN`].
pub fn overlong_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| n.chars().count() > MAX_NAME_LEN)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_blanks_and_duplicates() {
        let names = ["Fantasy", " fantasy ", "", "  ", "Drama"];
        assert_eq!(normalize_names(&names), vec!["Fantasy", "Drama"]);
    }

    #[test]
    fn split_handles_empty_input() {
        assert!(split_tag_input("").is_empty());
        assert!(split_tag_input(" , ,").is_empty());
    }

    #[test]
    fn predefined_genres_are_sorted() {
        let mut sorted = PREDEFINED_GENRES.to_vec();
        sorted.sort();
        assert_eq!(sorted, PREDEFINED_GENRES);
    }

    #[test]
    fn overlong_names_are_reported() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let names = vec!["ok".to_string(), long.clone()];
        assert_eq!(overlong_names(&names), vec![long]);
    }
}

//! Browse page filters and sort orders.

use serde::Deserialize;

pub const SORT_NEWEST: &str = "newest";
pub const SORT_UPDATED: &str = "updated";
pub const SORT_POPULAR: &str = "popular";

/// Maximum accepted length of the free-text query.
pub const MAX_QUERY_LEN: usize = 200;

/// Sort order of the browse results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseSort {
    /// Most recently created first.
    #[default]
    Newest,
    /// Most recently updated first.
    Updated,
    /// Most chapters first.
    Popular,
}

impl BrowseSort {
    /// Parse the `sort` query parameter. Unknown or missing values fall back
    /// to [`BrowseSort::Newest`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(SORT_UPDATED) => Self::Updated,
            Some(SORT_POPULAR) => Self::Popular,
            _ => Self::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => SORT_NEWEST,
            Self::Updated => SORT_UPDATED,
            Self::Popular => SORT_POPULAR,
        }
    }
}

/// Raw `?q=&genre=&tag=&sort=` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseParams {
    pub q: Option<String>,
    pub genre: Option<String>,
    pub tag: Option<String>,
    pub sort: Option<String>,
}

/// Normalized browse filter. Blank parameters are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseFilter {
    /// Case-insensitive substring matched against title and author.
    pub query: Option<String>,
    /// Exact genre name.
    pub genre: Option<String>,
    /// Exact tag name.
    pub tag: Option<String>,
    pub sort: BrowseSort,
}

impl BrowseFilter {
    pub fn from_params(params: &BrowseParams) -> Self {
        let query = non_blank(params.q.as_deref()).map(|q| {
            let mut q = q.to_string();
            if q.len() > MAX_QUERY_LEN {
                let mut cut = MAX_QUERY_LEN;
                while !q.is_char_boundary(cut) {
                    cut -= 1;
                }
                q.truncate(cut);
            }
            q
        });

        Self {
            query,
            genre: non_blank(params.genre.as_deref()).map(str::to_string),
            tag: non_blank(params.tag.as_deref()).map(str::to_string),
            sort: BrowseSort::parse(params.sort.as_deref()),
        }
    }

    /// `ILIKE` pattern for the free-text query, with wildcards escaped.
    pub fn like_pattern(&self) -> Option<String> {
        self.query.as_ref().map(|q| {
            let escaped = q
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            format!("%{escaped}%")
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

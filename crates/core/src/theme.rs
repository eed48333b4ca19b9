//! Reader theme preference.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const THEME_LIGHT: &str = "light";
pub const THEME_DARK: &str = "dark";

/// Colour scheme chosen by a signed-in reader. Anonymous readers get
/// [`Theme::Light`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => THEME_LIGHT,
            Self::Dark => THEME_DARK,
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            THEME_LIGHT => Ok(Self::Light),
            THEME_DARK => Ok(Self::Dark),
            other => Err(CoreError::Validation(format!(
                "Unknown theme: '{other}'. Valid themes: {THEME_LIGHT}, {THEME_DARK}"
            ))),
        }
    }

    /// Parse a stored value, falling back to the default for anything unknown.
    pub fn from_stored(s: Option<&str>) -> Self {
        s.and_then(|v| Self::from_str(v).ok()).unwrap_or_default()
    }
}

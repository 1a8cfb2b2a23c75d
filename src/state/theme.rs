//! Light/dark theme preference.
//!
//! Persisted as the strings `"light"` and `"dark"`. Anything else, including
//! no stored value, reads as light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Class on the root element while the dark theme is applied.
pub const DARK_THEME_CLASS: &str = "dark-theme";
/// Icon shown while light: offers switching to dark.
pub const LIGHT_ICON_CLASS: &str = "fa-moon";
/// Icon shown while dark: offers switching to light.
pub const DARK_ICON_CLASS: &str = "fa-sun";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon class to show for this theme and the one to clear.
    pub fn icon_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => (LIGHT_ICON_CLASS, DARK_ICON_CLASS),
            Self::Dark => (DARK_ICON_CLASS, LIGHT_ICON_CLASS),
        }
    }
}

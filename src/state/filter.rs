//! Project filter selection.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Token on a filter button that shows every project.
pub const ALL_TOKEN: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Interpret a button's `data-filter` token. A missing token only shows
    /// entries that carry no category.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(ALL_TOKEN) => Self::All,
            Some(other) => Self::Category(other.to_owned()),
            None => Self::Category(String::new()),
        }
    }

    /// Whether an entry with `category` is shown under this filter.
    pub fn shows(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category.unwrap_or_default() == wanted.as_str(),
        }
    }

    pub fn display_value(&self, category: Option<&str>) -> &'static str {
        if self.shows(category) { "block" } else { "none" }
    }
}

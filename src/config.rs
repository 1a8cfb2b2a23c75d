//! Page configuration: thresholds, delays, storage key and DOM selectors.
//!
//! Defaults match the stock portfolio markup. A page can override any subset
//! by embedding a JSON object; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_HEADER_CONDENSE_OFFSET: f64 = 50.0;
pub const DEFAULT_SCROLL_TOP_REVEAL_OFFSET: f64 = 500.0;
pub const DEFAULT_SECTION_PROBE_OFFSET: f64 = 100.0;
pub const DEFAULT_SKILL_REVEAL_DELAY_MS: u64 = 500;
pub const DEFAULT_FORM_RESET_DELAY_MS: u64 = 5000;

/// Element id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    /// Header gets the condensed class strictly above this scroll offset.
    pub header_condense_offset: f64,
    /// Scroll-to-top control shows strictly above this scroll offset.
    pub scroll_top_reveal_offset: f64,
    /// Added to the scroll offset before testing section ranges.
    pub section_probe_offset: f64,
    pub skill_reveal_delay_ms: u64,
    pub form_reset_delay_ms: u64,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            header_condense_offset: DEFAULT_HEADER_CONDENSE_OFFSET,
            scroll_top_reveal_offset: DEFAULT_SCROLL_TOP_REVEAL_OFFSET,
            section_probe_offset: DEFAULT_SECTION_PROBE_OFFSET,
            skill_reveal_delay_ms: DEFAULT_SKILL_REVEAL_DELAY_MS,
            form_reset_delay_ms: DEFAULT_FORM_RESET_DELAY_MS,
            selectors: Selectors::default(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when [`PageConfig::validate`] rejects it.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the storage key and every selector are non-blank and the
    /// offsets are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme_storage_key is empty".into()));
        }
        for (name, value) in [
            ("header_condense_offset", self.header_condense_offset),
            ("scroll_top_reveal_offset", self.scroll_top_reveal_offset),
            ("section_probe_offset", self.section_probe_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be a finite, non-negative number")));
            }
        }
        if let Some(name) = self.selectors.first_empty() {
            return Err(ConfigError::Invalid(format!("selector {name} is empty")));
        }
        Ok(())
    }
}

/// CSS selectors for every element the controller binds to.
///
/// Selectors under a container (`theme_icon`, `circle_*`, `form_group`,
/// `submit_button`) are resolved relative to that container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header: String,
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_link: String,
    pub theme_switch: String,
    pub theme_icon: String,
    pub scroll_top: String,
    pub section: String,
    pub skill_bar: String,
    pub circle: String,
    pub circle_label: String,
    pub circle_fill: String,
    pub circle_mask: String,
    pub filter_button: String,
    pub project_item: String,
    pub contact_form: String,
    pub form_group: String,
    pub submit_button: String,
    pub name_field: String,
    pub email_field: String,
    pub subject_field: String,
    pub message_field: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: "header".into(),
            nav_toggle: "#navToggle".into(),
            nav_menu: ".nav-menu".into(),
            nav_link: ".nav-link".into(),
            theme_switch: ".theme-switch".into(),
            theme_icon: "i".into(),
            scroll_top: ".scroll-top".into(),
            section: "section".into(),
            skill_bar: ".skill-progress".into(),
            circle: ".circle".into(),
            circle_label: ".inside-circle".into(),
            circle_fill: ".fill".into(),
            circle_mask: ".mask.full".into(),
            filter_button: ".filter-btn".into(),
            project_item: ".project-item".into(),
            contact_form: "#contactForm".into(),
            form_group: ".form-group".into(),
            submit_button: "button[type=\"submit\"]".into(),
            name_field: "#name".into(),
            email_field: "#email".into(),
            subject_field: "#subject".into(),
            message_field: "#message".into(),
        }
    }
}

impl Selectors {
    fn first_empty(&self) -> Option<&'static str> {
        let all: [(&'static str, &str); 22] = [
            ("header", self.header.as_str()),
            ("nav_toggle", self.nav_toggle.as_str()),
            ("nav_menu", self.nav_menu.as_str()),
            ("nav_link", self.nav_link.as_str()),
            ("theme_switch", self.theme_switch.as_str()),
            ("theme_icon", self.theme_icon.as_str()),
            ("scroll_top", self.scroll_top.as_str()),
            ("section", self.section.as_str()),
            ("skill_bar", self.skill_bar.as_str()),
            ("circle", self.circle.as_str()),
            ("circle_label", self.circle_label.as_str()),
            ("circle_fill", self.circle_fill.as_str()),
            ("circle_mask", self.circle_mask.as_str()),
            ("filter_button", self.filter_button.as_str()),
            ("project_item", self.project_item.as_str()),
            ("contact_form", self.contact_form.as_str()),
            ("form_group", self.form_group.as_str()),
            ("submit_button", self.submit_button.as_str()),
            ("name_field", self.name_field.as_str()),
            ("email_field", self.email_field.as_str()),
            ("subject_field", self.subject_field.as_str()),
            ("message_field", self.message_field.as_str()),
        ];
        all.into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}

//! Error types for page initialization and configuration.
//!
//! Event handlers never return errors; DOM writes are best-effort. Only
//! resolving element handles and parsing configuration can fail, and both
//! happen once at startup.

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl PageError {
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

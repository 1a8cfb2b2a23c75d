//! # portfolio-page
//!
//! WASM page controller for a single-page portfolio site. Binds to markup
//! rendered elsewhere and reacts to clicks, scrolls, loads and form submits
//! by toggling classes, writing inline styles and persisting one theme flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! All behavior lives in [`controller::PageController`], which only talks to
//! the page through the [`surface`] traits. The `hydrate` feature supplies the
//! web-sys implementations and the wasm entry point; native builds carry the
//! same controller so it can be exercised against in-memory fakes.

pub mod config;
pub mod controller;
pub mod elements;
pub mod error;
pub mod state;
pub mod surface;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(test)]
mod fake;

pub use config::PageConfig;
pub use controller::PageController;
pub use error::{ConfigError, PageError};

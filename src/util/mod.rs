//! Pure helpers shared by the controller.

pub mod document;
pub mod progress;

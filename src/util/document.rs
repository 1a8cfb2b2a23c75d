//! Document lifecycle helpers.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

/// `document.readyState` once the window's `load` event has fired.
pub const READY_STATE_COMPLETE: &str = "complete";

/// Whether `ready_state` (the raw `document.readyState` string) means the
/// `load` event has already been dispatched.
pub fn is_load_complete(ready_state: &str) -> bool {
    ready_state == READY_STATE_COMPLETE
}

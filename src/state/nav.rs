//! Mobile navigation menu open/closed state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class on the toggle control and menu panel while the menu is open. Also
/// marks the nav link of the section in view.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns `true` if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

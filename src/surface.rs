//! Seams between the page controller and the browser.
//!
//! DESIGN
//! ======
//! The controller never touches web-sys directly. It mutates [`Surface`]
//! handles and asks a [`Host`] for scroll position, preference storage and
//! delayed tasks. The `hydrate` build implements these over the live DOM;
//! tests implement them in memory.

use std::time::Duration;

/// A renderable element the controller can read and mutate.
///
/// All methods take `&self`: DOM handles are shared references to mutable
/// browser state, and fakes mirror that with interior mutability.
pub trait Surface {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Add or remove `class` so that its presence equals `on`.
    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Write one inline style property.
    fn set_style(&self, property: &str, value: &str);

    fn attribute(&self, name: &str) -> Option<String>;

    fn text(&self) -> String;

    /// Current value of a form control; empty for anything else.
    fn value(&self) -> String;
    fn set_value(&self, value: &str);

    /// Document-relative `(top, height)` in CSS pixels.
    fn vertical_extent(&self) -> (f64, f64);

    /// Append a new child `div` with `class` and inner `html`, returning it.
    fn append_panel(&self, class: &str, html: &str) -> Option<Self>
    where
        Self: Sized;

    /// Detach this element from its parent.
    fn remove(&self);
}

/// Window-level scroll state.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

/// Durable per-origin key/value storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Delayed work the controller can schedule, keyed by purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    /// Grow skill bars from 0% to their target width.
    SkillReveal,
    /// Restore the contact form after the success panel.
    FormReset,
}

/// Keyed, cancellable timers. Scheduling a pending key replaces it.
///
/// When a task comes due the host hands it back through
/// [`crate::controller::PageController::run_task`].
pub trait Scheduler {
    fn schedule(&mut self, task: Task, delay: Duration);
    fn cancel(&mut self, task: Task);
}

/// Everything the controller needs from its environment.
pub trait Host: Viewport + PreferenceStore + Scheduler {}

impl<T: Viewport + PreferenceStore + Scheduler> Host for T {}

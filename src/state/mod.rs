//! Page state held by the controller.
//!
//! DESIGN
//! ======
//! Each submodule is plain data plus pure transitions. The controller owns
//! one of each and projects them onto elements; nothing here touches the DOM.

pub mod contact;
pub mod filter;
pub mod nav;
pub mod scroll;
pub mod theme;

use contact::ContactState;
use filter::Filter;
use nav::NavState;
use scroll::ScrollState;
use theme::Theme;

/// Snapshot of all transient page state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub theme: Theme,
    pub nav: NavState,
    pub scroll: ScrollState,
    /// Index into the page's sections, if the probe point is inside one.
    pub active_section: Option<usize>,
    pub filter: Filter,
    pub contact: ContactState,
}

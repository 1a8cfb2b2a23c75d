//! Event listener wiring from DOM events to controller methods.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, HtmlElement, Window};

use super::host::BrowserHost;
use super::resolve::js_error;
use crate::controller::PageController;
use crate::elements::PageElements;
use crate::error::PageError;
use crate::util::document::is_load_complete;

pub type SharedController = Rc<RefCell<PageController<HtmlElement, BrowserHost>>>;

/// Run `f` against the controller unless it is already mid-event.
pub fn dispatch(controller: &SharedController, f: impl FnOnce(&mut PageController<HtmlElement, BrowserHost>)) {
    match controller.try_borrow_mut() {
        Ok(mut guard) => f(&mut guard),
        Err(_) => log::warn!("page controller busy; event dropped"),
    }
}

/// Register `handler` for the page's lifetime.
fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

fn on_controller<F>(target: &EventTarget, event: &str, controller: &SharedController, f: F) -> Result<(), PageError>
where
    F: Fn(&mut PageController<HtmlElement, BrowserHost>) + 'static,
{
    let controller = Rc::clone(controller);
    on(target, event, move |_| dispatch(&controller, &f))
}

/// Wire every page event to `controller`, then run the load pass if the
/// document has already finished loading.
///
/// # Errors
///
/// Returns [`PageError::Js`] if the browser rejects a listener registration.
pub fn bind(
    window: &Window,
    document: &Document,
    elements: &PageElements<HtmlElement>,
    controller: &SharedController,
) -> Result<(), PageError> {
    on_controller(&elements.nav_toggle, "click", controller, PageController::toggle_nav)?;
    for link in &elements.nav_links {
        on_controller(link, "click", controller, PageController::close_nav)?;
    }
    on_controller(&elements.theme_switch, "click", controller, |c| {
        c.toggle_theme();
    })?;
    on_controller(&elements.scroll_top, "click", controller, |c| c.scroll_to_top())?;
    for (index, button) in elements.filter_buttons.iter().enumerate() {
        on_controller(button, "click", controller, move |c| c.apply_filter(index))?;
    }

    if let Some(contact) = &elements.contact {
        let shared = Rc::clone(controller);
        on(&contact.form, "submit", move |event| {
            event.prevent_default();
            dispatch(&shared, |c| {
                c.submit_contact();
            });
        })?;
    }

    on_controller(window, "scroll", controller, PageController::on_scroll)?;
    on_controller(window, "pagehide", controller, PageController::flush_pending)?;

    // The module may finish loading after the window's load event.
    if is_load_complete(&document.ready_state()) {
        dispatch(controller, PageController::on_load);
    } else {
        on_controller(window, "load", controller, PageController::on_load)?;
    }
    Ok(())
}

//! Browser bindings and the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page: install logging, read the optional inline config,
//! resolve element handles, build the controller and attach listeners. A
//! missing required element stops initialization with a logged error.

mod element;
pub mod host;
pub mod listen;
pub mod resolve;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::controller::PageController;
use crate::error::PageError;
use crate::surface::Task;
use host::{BrowserHost, TaskSink};
use listen::dispatch;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    if let Err(e) = mount() {
        log::error!("page controller not started: {e}");
    }
}

/// Bind a controller to the current document.
///
/// # Errors
///
/// Fails when there is no window or document, when a required element is
/// missing, or when a listener cannot be registered.
pub fn mount() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    let config = load_config(&document);
    let elements = resolve::resolve(&document, &config.selectors)?;

    let sink: TaskSink = Rc::new(RefCell::new(None));
    let host = BrowserHost::new(window.clone(), Rc::clone(&sink));
    let controller = Rc::new(RefCell::new(PageController::new(config, elements.clone(), host)));

    let weak = Rc::downgrade(&controller);
    *sink.borrow_mut() = Some(Box::new(move |task: Task| {
        if let Some(controller) = weak.upgrade() {
            dispatch(&controller, |c| c.run_task(task));
        }
    }));

    listen::bind(&window, &document, &elements, &controller)?;
    log::debug!(
        "page controller bound: {} sections, {} projects, contact form {}",
        elements.sections.len(),
        elements.projects.len(),
        if elements.contact.is_some() { "present" } else { "absent" }
    );
    Ok(())
}

fn load_config(document: &Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            PageConfig::default()
        }
    }
}

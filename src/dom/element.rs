//! `Surface` over live DOM elements.
//!
//! Writes are best-effort: a rejected class or style change is dropped the
//! same way the browser drops an invalid declaration.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::surface::Surface;

impl Surface for HtmlElement {
    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn value(&self) -> String {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn vertical_extent(&self) -> (f64, f64) {
        (f64::from(self.offset_top()), f64::from(self.offset_height()))
    }

    fn append_panel(&self, class: &str, html: &str) -> Option<Self> {
        let document = self.owner_document()?;
        let panel = document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        panel.set_class_name(class);
        panel.set_inner_html(html);
        self.append_child(&panel).ok()?;
        Some(panel)
    }

    fn remove(&self) {
        Element::remove(self);
    }
}

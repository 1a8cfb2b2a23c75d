//! Resolve configured selectors into element handles.
//!
//! Every single-element selector is required except the contact form, whose
//! absence just disables submission handling.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::config::Selectors;
use crate::elements::{CircleIndicator, ContactForm, PageElements, SkillBar};
use crate::error::PageError;

const SKILL_LEVEL_SELECTOR: &str = "[data-percent]";

pub(crate) fn js_error(err: JsValue) -> PageError {
    PageError::Js(format!("{err:?}"))
}

fn required(found: Result<Option<Element>, JsValue>, selector: &str) -> Result<HtmlElement, PageError> {
    found
        .map_err(js_error)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| PageError::missing(selector))
}

fn optional(found: Result<Option<Element>, JsValue>) -> Result<Option<HtmlElement>, PageError> {
    Ok(found
        .map_err(js_error)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn all(found: Result<NodeList, JsValue>) -> Result<Vec<HtmlElement>, PageError> {
    let list = found.map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Resolve every element the controller binds to. The contact form is
/// optional; everything else must be present.
///
/// # Errors
///
/// Returns [`PageError::MissingElement`] for an absent required element and
/// [`PageError::Js`] when a selector is rejected by the browser.
pub fn resolve(document: &Document, selectors: &Selectors) -> Result<PageElements<HtmlElement>, PageError> {
    let root = document.body().ok_or_else(|| PageError::missing("body"))?;
    let theme_switch = required(document.query_selector(&selectors.theme_switch), &selectors.theme_switch)?;
    let theme_icon = required(theme_switch.query_selector(&selectors.theme_icon), &selectors.theme_icon)?;

    let skill_bars = all(document.query_selector_all(&selectors.skill_bar))?
        .into_iter()
        .map(|bar| {
            let level_source = required(bar.closest(SKILL_LEVEL_SELECTOR), SKILL_LEVEL_SELECTOR)?;
            Ok(SkillBar { bar, level_source })
        })
        .collect::<Result<Vec<_>, PageError>>()?;

    let circles = all(document.query_selector_all(&selectors.circle))?
        .into_iter()
        .map(|circle| {
            Ok(CircleIndicator {
                label: required(circle.query_selector(&selectors.circle_label), &selectors.circle_label)?,
                mask: required(circle.query_selector(&selectors.circle_mask), &selectors.circle_mask)?,
                fill: required(circle.query_selector(&selectors.circle_fill), &selectors.circle_fill)?,
            })
        })
        .collect::<Result<Vec<_>, PageError>>()?;

    Ok(PageElements {
        root,
        header: required(document.query_selector(&selectors.header), &selectors.header)?,
        nav_toggle: required(document.query_selector(&selectors.nav_toggle), &selectors.nav_toggle)?,
        nav_menu: required(document.query_selector(&selectors.nav_menu), &selectors.nav_menu)?,
        nav_links: all(document.query_selector_all(&selectors.nav_link))?,
        theme_switch,
        theme_icon,
        scroll_top: required(document.query_selector(&selectors.scroll_top), &selectors.scroll_top)?,
        sections: all(document.query_selector_all(&selectors.section))?,
        skill_bars,
        circles,
        filter_buttons: all(document.query_selector_all(&selectors.filter_button))?,
        projects: all(document.query_selector_all(&selectors.project_item))?,
        contact: resolve_contact(document, selectors)?,
    })
}

fn resolve_contact(document: &Document, selectors: &Selectors) -> Result<Option<ContactForm<HtmlElement>>, PageError> {
    let Some(form) = optional(document.query_selector(&selectors.contact_form))? else {
        log::debug!("no contact form ({}); submissions disabled", selectors.contact_form);
        return Ok(None);
    };
    let field = |selector: &str| required(document.query_selector(selector), selector);
    Ok(Some(ContactForm {
        groups: all(form.query_selector_all(&selectors.form_group))?,
        submit: required(form.query_selector(&selectors.submit_button), &selectors.submit_button)?,
        name: field(&selectors.name_field)?,
        email: field(&selectors.email_field)?,
        subject: field(&selectors.subject_field)?,
        message: field(&selectors.message_field)?,
        form,
    }))
}

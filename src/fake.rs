//! In-memory `Surface` and `Host` for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::config::PageConfig;
use crate::controller::PageController;
use crate::elements::{CircleIndicator, ContactForm, PageElements, SkillBar};
use crate::surface::{PreferenceStore, Scheduler, Surface, Task, Viewport};

#[derive(Default)]
struct Node {
    classes: BTreeSet<String>,
    styles: HashMap<String, String>,
    attributes: HashMap<String, String>,
    html: String,
    value: String,
    extent: (f64, f64),
    children: Vec<FakeElement>,
    parent: Weak<RefCell<Node>>,
}

/// Shared handle to an in-memory element; clones alias the same node.
#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("FakeElement")
            .field("classes", &node.classes)
            .field("styles", &node.styles)
            .finish_non_exhaustive()
    }
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn set_attr(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    pub fn with_text(self, text: &str) -> Self {
        text.clone_into(&mut self.0.borrow_mut().html);
        self
    }

    pub fn with_extent(self, top: f64, height: f64) -> Self {
        self.0.borrow_mut().extent = (top, height);
        self
    }

    pub fn set_extent(&self, top: f64, height: f64) {
        self.0.borrow_mut().extent = (top, height);
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn children(&self) -> Vec<FakeElement> {
        self.0.borrow().children.clone()
    }
}

impl Surface for FakeElement {
    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_owned(), value.to_owned());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn text(&self) -> String {
        strip_tags(&self.0.borrow().html)
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        value.clone_into(&mut self.0.borrow_mut().value);
    }

    fn vertical_extent(&self) -> (f64, f64) {
        self.0.borrow().extent
    }

    fn append_panel(&self, class: &str, html: &str) -> Option<Self> {
        let child = FakeElement::new().with_text(html);
        child.add_class(class);
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        Some(child)
    }

    fn remove(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent
                .borrow_mut()
                .children
                .retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        }
        self.0.borrow_mut().parent = Weak::new();
    }
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Viewport, storage and virtual-clock scheduler in one.
#[derive(Default)]
pub struct FakeHost {
    pub scroll_y: Cell<f64>,
    pub scroll_requests: RefCell<Vec<f64>>,
    pub storage: HashMap<String, String>,
    pub saves: usize,
    now_ms: u64,
    pending: HashMap<Task, u64>,
}

impl FakeHost {
    pub fn with_stored(key: &str, value: &str) -> Self {
        let mut host = Self::default();
        host.storage.insert(key.to_owned(), value.to_owned());
        host
    }

    pub fn is_pending(&self, task: Task) -> bool {
        self.pending.contains_key(&task)
    }

    /// Move the clock forward and return tasks that came due, in due order.
    pub fn advance(&mut self, ms: u64) -> Vec<Task> {
        self.now_ms += ms;
        let now = self.now_ms;
        let mut due = self
            .pending
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(task, at)| (*at, *task))
            .collect::<Vec<_>>();
        due.sort_by_key(|(at, _)| *at);
        for (_, task) in &due {
            self.pending.remove(task);
        }
        due.into_iter().map(|(_, task)| task).collect()
    }
}

impl Viewport for FakeHost {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scroll_requests.borrow_mut().push(top);
    }
}

impl PreferenceStore for FakeHost {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.saves += 1;
        self.storage.insert(key.to_owned(), value.to_owned());
    }
}

impl Scheduler for FakeHost {
    fn schedule(&mut self, task: Task, delay: Duration) {
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.pending.insert(task, self.now_ms.saturating_add(delay_ms));
    }

    fn cancel(&mut self, task: Task) {
        self.pending.remove(&task);
    }
}

pub type FakeController = PageController<FakeElement, FakeHost>;

/// Advance simulated time and deliver due tasks to the controller.
pub fn advance(controller: &mut FakeController, ms: u64) {
    for task in controller.host_mut().advance(ms) {
        controller.run_task(task);
    }
}

/// A stock portfolio page: three sections, two skill bars, three circles,
/// three filter buttons, four projects and a contact form.
pub struct FakePage {
    pub root: FakeElement,
    pub header: FakeElement,
    pub nav_toggle: FakeElement,
    pub nav_menu: FakeElement,
    pub nav_links: Vec<FakeElement>,
    pub theme_switch: FakeElement,
    pub theme_icon: FakeElement,
    pub scroll_top: FakeElement,
    pub sections: Vec<FakeElement>,
    pub skill_bars: Vec<SkillBar<FakeElement>>,
    pub circles: Vec<CircleIndicator<FakeElement>>,
    pub filter_buttons: Vec<FakeElement>,
    pub projects: Vec<FakeElement>,
    pub contact: Option<ContactForm<FakeElement>>,
}

impl FakePage {
    pub fn new() -> Self {
        let sections = vec![
            FakeElement::new().with_attr("id", "home").with_extent(0.0, 700.0),
            FakeElement::new().with_attr("id", "about").with_extent(700.0, 900.0),
            FakeElement::new().with_attr("id", "contact").with_extent(1600.0, 800.0),
        ];
        let nav_links = ["#home", "#about", "#contact"]
            .into_iter()
            .map(|href| FakeElement::new().with_attr("href", href))
            .collect();
        let skill_bars = ["90", "65"]
            .into_iter()
            .map(|percent| SkillBar {
                bar: FakeElement::new(),
                level_source: FakeElement::new().with_attr("data-percent", percent),
            })
            .collect();
        let circles = ["0%", "50%", "75%"]
            .into_iter()
            .map(|label| CircleIndicator {
                label: FakeElement::new().with_text(label),
                mask: FakeElement::new(),
                fill: FakeElement::new(),
            })
            .collect();
        let filter_buttons = ["all", "design", "web"]
            .into_iter()
            .map(|token| FakeElement::new().with_attr("data-filter", token))
            .collect();
        let projects = ["design", "web", "design", "app"]
            .into_iter()
            .map(|category| FakeElement::new().with_attr("data-category", category))
            .collect();
        let contact = ContactForm {
            form: FakeElement::new(),
            groups: (0..4).map(|_| FakeElement::new()).collect(),
            submit: FakeElement::new(),
            name: FakeElement::new(),
            email: FakeElement::new(),
            subject: FakeElement::new(),
            message: FakeElement::new(),
        };

        Self {
            root: FakeElement::new(),
            header: FakeElement::new(),
            nav_toggle: FakeElement::new(),
            nav_menu: FakeElement::new(),
            nav_links,
            theme_switch: FakeElement::new(),
            theme_icon: FakeElement::new(),
            scroll_top: FakeElement::new(),
            sections,
            skill_bars,
            circles,
            filter_buttons,
            projects,
            contact: Some(contact),
        }
    }

    pub fn elements(&self) -> PageElements<FakeElement> {
        PageElements {
            root: self.root.clone(),
            header: self.header.clone(),
            nav_toggle: self.nav_toggle.clone(),
            nav_menu: self.nav_menu.clone(),
            nav_links: self.nav_links.clone(),
            theme_switch: self.theme_switch.clone(),
            theme_icon: self.theme_icon.clone(),
            scroll_top: self.scroll_top.clone(),
            sections: self.sections.clone(),
            skill_bars: self.skill_bars.clone(),
            circles: self.circles.clone(),
            filter_buttons: self.filter_buttons.clone(),
            projects: self.projects.clone(),
            contact: self.contact.clone(),
        }
    }

    pub fn controller(&self, host: FakeHost) -> FakeController {
        PageController::new(PageConfig::default(), self.elements(), host)
    }
}

//! Resolved element handles, grouped the way the controller uses them.

/// One skill bar and the element carrying its `data-percent` target.
#[derive(Clone, Debug)]
pub struct SkillBar<E> {
    pub bar: E,
    pub level_source: E,
}

/// A two-layer circular indicator: text label plus mask/fill pair.
#[derive(Clone, Debug)]
pub struct CircleIndicator<E> {
    pub label: E,
    pub mask: E,
    pub fill: E,
}

#[derive(Clone, Debug)]
pub struct ContactForm<E> {
    pub form: E,
    pub groups: Vec<E>,
    pub submit: E,
    pub name: E,
    pub email: E,
    pub subject: E,
    pub message: E,
}

impl<E> ContactForm<E> {
    pub fn fields(&self) -> [&E; 4] {
        [&self.name, &self.email, &self.subject, &self.message]
    }
}

/// Every handle the page controller binds to.
///
/// `contact` is optional; pages without a contact form are still valid.
#[derive(Clone, Debug)]
pub struct PageElements<E> {
    /// Element that carries the theme class (the document body).
    pub root: E,
    pub header: E,
    pub nav_toggle: E,
    pub nav_menu: E,
    pub nav_links: Vec<E>,
    pub theme_switch: E,
    pub theme_icon: E,
    pub scroll_top: E,
    pub sections: Vec<E>,
    pub skill_bars: Vec<SkillBar<E>>,
    pub circles: Vec<CircleIndicator<E>>,
    pub filter_buttons: Vec<E>,
    pub projects: Vec<E>,
    pub contact: Option<ContactForm<E>>,
}

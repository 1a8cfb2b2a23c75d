//! The page controller: every interaction on the page, as methods.
//!
//! ARCHITECTURE
//! ============
//! The browser layer resolves element handles once, builds a controller and
//! forwards events to it one at a time. Each method updates [`PageState`]
//! and projects the result onto elements through [`Surface`]. Delayed work
//! goes through the host's keyed [`crate::surface::Scheduler`] and comes back via
//! [`PageController::run_task`].

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use crate::config::PageConfig;
use crate::elements::PageElements;
use crate::state::PageState;
use crate::state::contact::{ContactState, ContactSubmission, SUCCESS_PANEL_CLASS, success_panel_html};
use crate::state::filter::Filter;
use crate::state::nav::ACTIVE_CLASS;
use crate::state::scroll::{HEADER_SCROLLED_CLASS, ScrollState, SectionExtent, active_section, link_target};
use crate::state::theme::{DARK_THEME_CLASS, Theme};
use crate::surface::{Host, Surface, Task};
use crate::util::progress::{circle_rotation, css_percent, css_rotate, parse_leading_int, parse_skill_level};

const PERCENT_ATTR: &str = "data-percent";
const FILTER_ATTR: &str = "data-filter";
const CATEGORY_ATTR: &str = "data-category";

pub struct PageController<E, H> {
    config: PageConfig,
    elements: PageElements<E>,
    host: H,
    state: PageState,
    success_panel: Option<E>,
    /// Levels read from `data-percent` at load, one per skill bar.
    skill_levels: Vec<Option<f64>>,
    skill_reveal_pending: bool,
}

impl<E: Surface, H: Host> PageController<E, H> {
    /// Build a controller and apply the stored theme preference.
    pub fn new(config: PageConfig, elements: PageElements<E>, host: H) -> Self {
        let mut controller = Self {
            config,
            elements,
            host,
            state: PageState::default(),
            success_panel: None,
            skill_levels: Vec::new(),
            skill_reveal_pending: false,
        };
        controller.restore_theme();
        controller
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // =============================================================
    // Theme
    // =============================================================

    fn restore_theme(&mut self) {
        let stored = self.host.load(&self.config.theme_storage_key);
        self.state.theme = Theme::from_stored(stored.as_deref());
        log::debug!("restored theme: {}", self.state.theme.as_str());
        self.apply_theme();
    }

    /// Flip the theme, apply it and persist the new preference.
    pub fn toggle_theme(&mut self) -> Theme {
        self.state.theme = self.state.theme.toggled();
        self.apply_theme();
        self.host.save(&self.config.theme_storage_key, self.state.theme.as_str());
        self.state.theme
    }

    fn apply_theme(&self) {
        let theme = self.state.theme;
        self.elements.root.set_class(DARK_THEME_CLASS, theme.is_dark());
        let (show, hide) = theme.icon_classes();
        self.elements.theme_icon.remove_class(hide);
        self.elements.theme_icon.add_class(show);
    }

    // =============================================================
    // Navigation
    // =============================================================

    pub fn toggle_nav(&mut self) {
        self.state.nav.toggle();
        self.apply_nav();
    }

    /// Close the menu after a nav link is activated. No-op when closed.
    pub fn close_nav(&mut self) {
        if self.state.nav.close() {
            self.apply_nav();
        }
    }

    fn apply_nav(&self) {
        let open = self.state.nav.open;
        self.elements.nav_toggle.set_class(ACTIVE_CLASS, open);
        self.elements.nav_menu.set_class(ACTIVE_CLASS, open);
    }

    // =============================================================
    // Load and scroll
    // =============================================================

    /// One-time setup once the page has loaded.
    pub fn on_load(&mut self) {
        self.animate_skill_bars();
        self.render_circular_progress();
        self.update_active_section();
    }

    pub fn on_scroll(&mut self) {
        let scroll_y = self.host.scroll_y();
        self.state.scroll = ScrollState::at(scroll_y, &self.config);
        self.elements
            .header
            .set_class(HEADER_SCROLLED_CLASS, self.state.scroll.header_condensed);
        self.elements
            .scroll_top
            .set_class(ACTIVE_CLASS, self.state.scroll.scroll_top_visible);
        self.update_active_section();
    }

    pub fn scroll_to_top(&self) {
        self.host.smooth_scroll_to(0.0);
    }

    /// Mark the nav link of the section under the probe point, clearing the rest.
    pub fn update_active_section(&mut self) {
        let extents = self
            .elements
            .sections
            .iter()
            .map(|section| {
                let (top, height) = section.vertical_extent();
                SectionExtent { top, height }
            })
            .collect::<Vec<_>>();
        let active = active_section(self.host.scroll_y(), self.config.section_probe_offset, &extents);
        self.state.active_section = active;

        let active_id = active.and_then(|index| self.elements.sections[index].attribute("id"));
        for link in &self.elements.nav_links {
            let href = link.attribute("href");
            let is_active = match (&active_id, href.as_deref().and_then(link_target)) {
                (Some(id), Some(target)) => id == target,
                _ => false,
            };
            link.set_class(ACTIVE_CLASS, is_active);
        }
    }

    // =============================================================
    // Progress indicators
    // =============================================================

    /// Read each bar's level, collapse it and schedule the reveal.
    pub fn animate_skill_bars(&mut self) {
        self.skill_levels = self
            .elements
            .skill_bars
            .iter()
            .map(|skill| {
                let raw = skill.level_source.attribute(PERCENT_ATTR).unwrap_or_default();
                let level = parse_skill_level(&raw);
                if level.is_none() {
                    log::warn!("skill bar has no usable {PERCENT_ATTR}: {raw:?}");
                }
                skill.bar.set_style("width", "0%");
                level
            })
            .collect();
        self.host
            .schedule(Task::SkillReveal, Duration::from_millis(self.config.skill_reveal_delay_ms));
        self.skill_reveal_pending = true;
    }

    fn reveal_skill_bars(&mut self) {
        self.skill_reveal_pending = false;
        for (skill, level) in self.elements.skill_bars.iter().zip(&self.skill_levels) {
            if let Some(level) = level {
                skill.bar.set_style("width", &css_percent(*level));
            }
        }
    }

    /// Rotate each circular indicator's mask/fill pair to its labelled percent.
    pub fn render_circular_progress(&self) {
        for circle in &self.elements.circles {
            let text = circle.label.text();
            let Some(percent) = parse_leading_int(&text) else {
                log::debug!("circular progress label is not numeric: {text:?}");
                continue;
            };
            let rotation = circle_rotation(percent);
            circle.mask.set_style("transform", &css_rotate(rotation.mask_deg));
            circle.fill.set_style("transform", &css_rotate(rotation.fill_deg));
        }
    }

    // =============================================================
    // Project filter
    // =============================================================

    /// Activate the filter button at `index` and show matching projects.
    pub fn apply_filter(&mut self, index: usize) {
        let Some(button) = self.elements.filter_buttons.get(index) else {
            log::warn!("filter button {index} out of range");
            return;
        };
        let filter = Filter::from_token(button.attribute(FILTER_ATTR).as_deref());
        for (i, other) in self.elements.filter_buttons.iter().enumerate() {
            other.set_class(ACTIVE_CLASS, i == index);
        }
        for project in &self.elements.projects {
            let category = project.attribute(CATEGORY_ATTR);
            project.set_style("display", filter.display_value(category.as_deref()));
        }
        self.state.filter = filter;
    }

    // =============================================================
    // Contact form
    // =============================================================

    /// Capture and log the form fields, then swap the form for a success
    /// panel until the reset delay elapses.
    ///
    /// Returns `false` when there is no form or a submission is already
    /// showing its success panel.
    pub fn submit_contact(&mut self) -> bool {
        let Some(form) = self.elements.contact.as_ref() else {
            return false;
        };
        if self.state.contact.in_flight() {
            log::debug!("contact submission ignored: previous submission still showing");
            return false;
        }

        let submission = ContactSubmission {
            name: form.name.value(),
            email: form.email.value(),
            subject: form.subject.value(),
            message: form.message.value(),
        };
        match serde_json::to_string(&submission) {
            Ok(json) => log::info!("contact submission: {json}"),
            Err(e) => log::warn!("contact submission not serializable: {e}"),
        }

        for group in &form.groups {
            group.set_style("display", "none");
        }
        form.submit.set_style("display", "none");
        self.success_panel = form
            .form
            .append_panel(SUCCESS_PANEL_CLASS, &success_panel_html(&submission.name));
        self.state.contact = ContactState::Sent;
        self.host
            .schedule(Task::FormReset, Duration::from_millis(self.config.form_reset_delay_ms));
        true
    }

    fn reset_contact(&mut self) {
        let Some(form) = self.elements.contact.as_ref() else {
            return;
        };
        for group in &form.groups {
            group.set_style("display", "block");
        }
        form.submit.set_style("display", "block");
        if let Some(panel) = self.success_panel.take() {
            panel.remove();
        }
        for field in form.fields() {
            field.set_value("");
        }
        self.state.contact = ContactState::Idle;
    }

    // =============================================================
    // Scheduled work
    // =============================================================

    /// Run a task the host's scheduler reports as due.
    pub fn run_task(&mut self, task: Task) {
        match task {
            Task::SkillReveal => self.reveal_skill_bars(),
            Task::FormReset => self.reset_contact(),
        }
    }

    /// Cancel pending timers and apply their end state now, so a page
    /// restored from the back/forward cache is not left half-transitioned.
    pub fn flush_pending(&mut self) {
        if self.skill_reveal_pending {
            self.host.cancel(Task::SkillReveal);
            self.run_task(Task::SkillReveal);
        }
        if self.state.contact.in_flight() {
            self.host.cancel(Task::FormReset);
            self.run_task(Task::FormReset);
        }
    }
}

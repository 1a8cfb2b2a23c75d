//! Contact form submission state.
//!
//! Submissions are never transmitted. The captured fields are logged, a
//! success panel replaces the form, and the form is restored after a delay.
//! Only one submission may be in flight at a time.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

pub const SUCCESS_PANEL_CLASS: &str = "success-message";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactState {
    #[default]
    Idle,
    /// Success panel is shown and a form reset is pending.
    Sent,
}

impl ContactState {
    pub fn in_flight(self) -> bool {
        self == Self::Sent
    }
}

/// Inner HTML of the success panel thanking `name`.
pub fn success_panel_html(name: &str) -> String {
    format!(
        "<i class=\"fas fa-check-circle\"></i>\
         <h3>Message Sent Successfully!</h3>\
         <p>Thank you for contacting me, {}. I'll get back to you soon.</p>",
        escape_html(name)
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

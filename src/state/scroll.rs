//! Scroll-derived UI flags and active-section selection.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::PageConfig;

/// Class on the header once the page has scrolled past the condense offset.
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub header_condensed: bool,
    pub scroll_top_visible: bool,
}

impl ScrollState {
    pub fn at(scroll_y: f64, config: &PageConfig) -> Self {
        Self {
            header_condensed: scroll_y > config.header_condense_offset,
            scroll_top_visible: scroll_y > config.scroll_top_reveal_offset,
        }
    }
}

/// A section's vertical range `[top, top + height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Pick the section containing `scroll_y + probe_offset`.
///
/// Sections are expected not to overlap; if they do the last match in
/// document order wins.
pub fn active_section(scroll_y: f64, probe_offset: f64, extents: &[SectionExtent]) -> Option<usize> {
    let probe = scroll_y + probe_offset;
    let mut matches = extents
        .iter()
        .enumerate()
        .filter(|(_, extent)| extent.contains(probe))
        .map(|(index, _)| index);
    let first = matches.next()?;
    let last = matches.next_back();
    if let Some(last) = last {
        log::warn!("overlapping sections at y={probe}: {first} and {last}; using {last}");
        return Some(last);
    }
    Some(first)
}

/// Extract the fragment id a nav link points at (`"#about"` -> `"about"`).
pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

use super::*;

fn extents(ranges: &[(f64, f64)]) -> Vec<SectionExtent> {
    ranges
        .iter()
        .map(|&(top, height)| SectionExtent { top, height })
        .collect()
}

// =============================================================
// ScrollState
// =============================================================

#[test]
fn top_of_page_has_no_flags() {
    let state = ScrollState::at(0.0, &PageConfig::default());
    assert_eq!(state, ScrollState::default());
}

#[test]
fn thresholds_are_strictly_greater_than() {
    let cfg = PageConfig::default();
    assert!(!ScrollState::at(50.0, &cfg).header_condensed);
    assert!(ScrollState::at(50.5, &cfg).header_condensed);
    assert!(!ScrollState::at(500.0, &cfg).scroll_top_visible);
    assert!(ScrollState::at(501.0, &cfg).scroll_top_visible);
}

#[test]
fn between_thresholds_only_header_condenses() {
    let state = ScrollState::at(200.0, &PageConfig::default());
    assert!(state.header_condensed);
    assert!(!state.scroll_top_visible);
}

#[test]
fn thresholds_follow_config() {
    let cfg = PageConfig { header_condense_offset: 10.0, scroll_top_reveal_offset: 20.0, ..PageConfig::default() };
    let state = ScrollState::at(15.0, &cfg);
    assert!(state.header_condensed);
    assert!(!state.scroll_top_visible);
}

// =============================================================
// active_section
// =============================================================

#[test]
fn probe_offset_is_added_to_scroll() {
    let sections = extents(&[(0.0, 600.0), (600.0, 800.0)]);
    assert_eq!(active_section(0.0, 100.0, &sections), Some(0));
    assert_eq!(active_section(499.0, 100.0, &sections), Some(0));
    assert_eq!(active_section(500.0, 100.0, &sections), Some(1));
}

#[test]
fn range_is_half_open() {
    let sections = extents(&[(100.0, 100.0)]);
    assert_eq!(active_section(0.0, 100.0, &sections), Some(0));
    assert_eq!(active_section(100.0, 100.0, &sections), None);
}

#[test]
fn nothing_matches_outside_all_sections() {
    let sections = extents(&[(1000.0, 200.0), (1200.0, 200.0)]);
    assert_eq!(active_section(0.0, 100.0, &sections), None);
    assert_eq!(active_section(5000.0, 100.0, &sections), None);
    assert_eq!(active_section(0.0, 100.0, &[]), None);
}

#[test]
fn overlapping_sections_pick_last_match() {
    let sections = extents(&[(0.0, 1000.0), (200.0, 400.0), (2000.0, 10.0)]);
    assert_eq!(active_section(200.0, 100.0, &sections), Some(1));
    assert_eq!(active_section(700.0, 100.0, &sections), Some(0));
}

#[test]
fn three_way_overlap_picks_last_match() {
    let sections = extents(&[(0.0, 1000.0), (100.0, 800.0), (200.0, 600.0)]);
    assert_eq!(active_section(300.0, 100.0, &sections), Some(2));
    assert_eq!(active_section(50.0, 100.0, &sections), Some(1));
}

#[test]
fn link_target_strips_fragment_marker() {
    assert_eq!(link_target("#about"), Some("about"));
    assert_eq!(link_target("#"), None);
    assert_eq!(link_target("/blog"), None);
    assert_eq!(link_target(""), None);
}

//! Progress math for skill bars and circular indicators.
//!
//! A circular indicator is two half-circle layers. The mask can reveal at
//! most half a turn; past 180 degrees it is pinned there and the fill carries
//! the remainder.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

pub const FULL_TURN_DEG: f64 = 360.0;
pub const HALF_TURN_DEG: f64 = 180.0;

/// Rotation for each layer of a circular indicator, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleRotation {
    pub mask_deg: f64,
    pub fill_deg: f64,
}

pub fn percent_to_degrees(percent: i32) -> f64 {
    f64::from(percent) * FULL_TURN_DEG / 100.0
}

pub fn circle_rotation(percent: i32) -> CircleRotation {
    let degrees = percent_to_degrees(percent);
    if degrees <= HALF_TURN_DEG {
        CircleRotation { mask_deg: degrees, fill_deg: degrees }
    } else {
        CircleRotation { mask_deg: HALF_TURN_DEG, fill_deg: degrees }
    }
}

/// Parse the leading integer of `text`, e.g. `" 75%"` -> `75`.
///
/// Leading whitespace and a single sign are accepted; trailing text is
/// ignored. Returns `None` when no digits lead the text.
pub fn parse_leading_int(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest.len(), |(i, _)| i);
    if digits_end == 0 {
        return None;
    }
    let magnitude: i32 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a skill bar's `data-percent` value.
pub fn parse_skill_level(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn css_rotate(deg: f64) -> String {
    format!("rotate({deg}deg)")
}

pub fn css_percent(value: f64) -> String {
    format!("{value}%")
}

// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Parses a CSS time value such as `"250ms"` or `"0.3s"` into milliseconds.
///
/// The number takes an optional sign and an optional fraction with at least
/// one digit on each side of the point. Surrounding whitespace is ignored.
/// Anything else yields `None`.
///
/// ```rust
/// use tactile::parse_css_time;
///
/// assert_eq!(parse_css_time(" 0.25s "), Some(250.0));
/// assert_eq!(parse_css_time("-40ms"), Some(-40.0));
/// assert_eq!(parse_css_time(".5s"), None);
/// ```
#[must_use]
pub fn parse_css_time(text: &str) -> Option<f64> {
    let text = text.trim();
    let (number, scale) = match text.strip_suffix("ms") {
        Some(number) => (number, 1.0),
        None => (text.strip_suffix('s')?, 1000.0),
    };
    if !is_css_number(number) {
        return None;
    }
    number.parse::<f64>().ok().map(|value| value * scale)
}

fn is_css_number(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(whole) && fraction.is_none_or(digits)
}

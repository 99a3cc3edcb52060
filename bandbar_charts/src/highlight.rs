// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User-controlled display state and the bar highlight policy.

extern crate alloc;

use alloc::string::String;

use peniko::color::palette::css;
use peniko::color::{Srgb, parse_color};
use peniko::{Brush, Color};

use crate::data::DataRow;

/// Fill used for bars outside the highlight range.
pub const BASE_FILL: &str = "gray";

/// Highlight color and inclusive highlight range, as entered by the user.
///
/// No validation happens here. A color that does not parse leaves highlighted bars
/// unpainted, and a `NaN` bound grays out every bar because no comparison against it holds.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    /// CSS color text for highlighted bars.
    pub color: String,
    /// Inclusive lower bound.
    pub min_range: f64,
    /// Inclusive upper bound.
    pub max_range: f64,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            color: String::from(BASE_FILL),
            min_range: 0.0,
            max_range: 100.0,
        }
    }
}

impl DisplayState {
    /// Creates a display state.
    pub fn new(color: impl Into<String>, min_range: f64, max_range: f64) -> Self {
        Self {
            color: color.into(),
            min_range,
            max_range,
        }
    }

    /// Sets the highlight color text verbatim.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets both range bounds.
    pub fn with_range(mut self, min_range: f64, max_range: f64) -> Self {
        self.min_range = min_range;
        self.max_range = max_range;
        self
    }

    /// Applies the text of the color input verbatim.
    pub fn set_color(&mut self, color: &str) {
        self.color.clear();
        self.color.push_str(color);
    }

    /// Applies the text of the minimum-range input (see [`coerce_number`]).
    pub fn set_min_range_input(&mut self, input: &str) {
        self.min_range = coerce_number(input);
    }

    /// Applies the text of the maximum-range input (see [`coerce_number`]).
    pub fn set_max_range_input(&mut self, input: &str) {
        self.max_range = coerce_number(input);
    }

    /// Returns `true` if `value` lies within `[min_range, max_range]`.
    pub fn contains(&self, value: f64) -> bool {
        self.min_range <= value && value <= self.max_range
    }
}

/// Picks the fill color text for a row.
///
/// Bounds are inclusive on both ends; anything else, including `NaN` values or bounds,
/// falls back to [`BASE_FILL`].
pub fn highlight_fill<'a>(row: &DataRow, state: &'a DisplayState) -> &'a str {
    if state.contains(row.percentage) {
        &state.color
    } else {
        BASE_FILL
    }
}

/// Resolves CSS color text into a paint.
///
/// Unparseable text yields a transparent brush: the bar keeps its geometry but paints nothing.
pub fn resolve_fill(css_color: &str) -> Brush {
    if css_color.eq_ignore_ascii_case(BASE_FILL) {
        return Brush::Solid(css::GRAY);
    }
    match parse_color(css_color.trim()) {
        Ok(c) => Brush::Solid(c.to_alpha_color::<Srgb>()),
        Err(_) => Brush::Solid(Color::TRANSPARENT),
    }
}

/// Coerces numeric-input text the way an HTML number field feeds `Number(value)`.
///
/// Blank text is `0` and `Infinity` (optionally signed) is infinite. Any other text that is
/// not a plain decimal literal is `NaN`, including the `inf` and `NaN` spellings that
/// `f64::from_str` would accept.
pub fn coerce_number(input: &str) -> f64 {
    let s = input.trim();
    if s.is_empty() {
        return 0.0;
    }
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned == "Infinity" {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let decimal = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let state = DisplayState::new("blue", 10.0, 20.0);
        assert_eq!(highlight_fill(&DataRow::new("lo", 10.0), &state), "blue");
        assert_eq!(highlight_fill(&DataRow::new("hi", 20.0), &state), "blue");
        assert_eq!(highlight_fill(&DataRow::new("below", 9.99), &state), "gray");
        assert_eq!(highlight_fill(&DataRow::new("above", 20.01), &state), "gray");
    }

    #[test]
    fn single_point_range_highlights_exact_match() {
        let state = DisplayState::new("red", 42.0, 42.0);
        assert_eq!(highlight_fill(&DataRow::new("x", 42.0), &state), "red");
    }

    #[test]
    fn nan_bounds_gray_everything() {
        let mut state = DisplayState::new("red", 0.0, 100.0);
        state.set_max_range_input("abc");
        assert!(state.max_range.is_nan());
        for v in [0.0, 50.0, 100.0] {
            assert_eq!(highlight_fill(&DataRow::new("x", v), &state), "gray");
        }
    }

    #[test]
    fn default_state_is_gray_zero_to_hundred() {
        let state = DisplayState::default();
        assert_eq!(state.color, "gray");
        assert_eq!(state.min_range, 0.0);
        assert_eq!(state.max_range, 100.0);
    }

    #[test]
    fn numeric_input_coercion() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("  "), 0.0);
        assert_eq!(coerce_number(" 12.5 "), 12.5);
        assert_eq!(coerce_number("-3"), -3.0);
        assert!(coerce_number("12%").is_nan());
        assert_eq!(coerce_number("1e2"), 100.0);
        assert_eq!(coerce_number(".5"), 0.5);
    }

    #[test]
    fn only_the_infinity_keyword_is_infinite() {
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("+Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        for text in ["inf", "infinity", "-inf", "INFINITY", "NaN", "nan"] {
            assert!(coerce_number(text).is_nan(), "{text}");
        }

        // An `inf` upper bound grays every bar instead of highlighting all of them.
        let mut state = DisplayState::new("red", 0.0, 100.0);
        state.set_max_range_input("inf");
        assert_eq!(highlight_fill(&DataRow::new("a", 50.0), &state), BASE_FILL);
    }

    #[test]
    fn fill_resolution() {
        assert_eq!(resolve_fill("gray"), Brush::Solid(css::GRAY));
        let Brush::Solid(blue) = resolve_fill("#0000ff") else {
            panic!("expected a solid brush");
        };
        assert_eq!(blue.to_rgba8(), Color::from_rgba8(0, 0, 255, 255).to_rgba8());
        assert_eq!(
            resolve_fill("not-a-color"),
            Brush::Solid(Color::TRANSPARENT)
        );
    }
}

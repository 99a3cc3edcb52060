// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: mappings from data space into plot-local coordinates.
//!
//! Both scales here follow d3 semantics (`scaleLinear` with `tickIncrement` tick steps,
//! `scaleBand`) so charts drawn with them line up with the equivalent browser rendering.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// Values outside the domain extrapolate; a degenerate domain maps everything to the
    /// start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice-ish” tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut lo, mut hi) = self.domain;
        if lo > hi {
            core::mem::swap(&mut lo, &mut hi);
        }
        let eps = (hi - lo).abs() * 1.0e-9;
        nice_ticks(lo, hi, count)
            .into_iter()
            .filter(|t| *t >= lo - eps && *t <= hi + eps)
            .collect()
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    // d3's `tickIncrement` cut points: sqrt(50), sqrt(10), sqrt(2).
    let nice = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Returns the spacing between adjacent ticks, or `0` if there are fewer than two.
pub(crate) fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

/// An ordered set of category names.
///
/// Names keep the order of their first occurrence; repeats collapse onto the first slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrdinalDomain {
    names: Arc<[String]>,
}

impl OrdinalDomain {
    /// Builds a domain from names in order, dropping repeats.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            if !out.iter().any(|n| n == name) {
                out.push(String::from(name));
            }
        }
        Self { names: out.into() }
    }

    /// Returns the slot index of `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the domain has no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in slot order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// A discrete band scale: one equal-width slot per category, plus padding.
///
/// Padding is expressed as a fraction of the step (band + gap), as in d3's `scaleBand`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleBand {
    domain: OrdinalDomain,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a band scale over `domain` with no padding.
    ///
    /// Leftover outer space is split evenly (d3's default `align(0.5)`).
    pub fn new(domain: OrdinalDomain, range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Sets inner and outer padding to the same value (d3 `band.padding`).
    pub fn with_padding(self, padding: f64) -> Self {
        self.with_padding_inner(padding).with_padding_outer(padding)
    }

    /// Sets inner padding, clamped to `[0, 1]`.
    pub fn with_padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self
    }

    /// Sets outer padding (non-negative).
    pub fn with_padding_outer(mut self, padding: f64) -> Self {
        self.padding_outer = padding.max(0.0);
        self
    }

    /// Returns the category domain.
    pub fn domain(&self) -> &OrdinalDomain {
        &self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Number of bands.
    pub fn count(&self) -> usize {
        self.domain.len()
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count() as f64;
        let span = (r1 - r0).abs();
        span / (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0)
    }

    /// Returns the width of each band.
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Returns the start position for the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let lo = r0.min(r1);
        let span = (r1 - r0).abs();
        let n = self.count() as f64;
        let step = self.step();
        let start = lo + (span - step * (n - self.padding_inner)) * 0.5;
        start + step * index as f64
    }

    /// Returns the start position of the band for `name`, if it is in the domain.
    pub fn position(&self, name: &str) -> Option<f64> {
        self.domain.index_of(name).map(|i| self.x(i))
    }
}

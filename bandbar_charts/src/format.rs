// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value with just enough decimals to distinguish ticks `step` apart.
///
/// Integral steps print without a fractional part; `-0` prints as `0`.
pub(crate) fn format_tick_with_step(v: f64, step: f64) -> String {
    let decimals = decimals_for_step(step);
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v:.decimals$}")
}

fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let exp = -step.log10().floor();
    if exp <= 0.0 {
        return 0;
    }
    let exp = exp.min(12.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to a small non-negative range"
    )]
    {
        exp as usize
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! Paint order follows the render pipeline: axes first, then bars, then bar labels.
//! Renderers sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = -20;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = -10;
/// Bars.
pub const SERIES_FILL: i32 = 0;
/// Bar labels.
pub const SERIES_LABELS: i32 = 10;

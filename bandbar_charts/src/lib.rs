// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A labeled, interactive horizontal bar chart on top of `bandbar_core`.
//!
//! The crate turns an ordered dataset of `(name, percentage)` rows plus a user-controlled
//! [`DisplayState`] into marks:
//! - **Geometry** plans the plot rectangle, a linear value scale and a band category scale.
//! - **Guides and series** (axes, bars, labels) are built as `bandbar_core::Mark`s.
//! - **Interaction** binds bars to a singleton hover tooltip on the page overlay.
//!
//! [`render`] is the pure pipeline; [`BarChartView`] owns a mount point and re-renders on
//! every input change.

#![no_std]

extern crate alloc;

mod axis;
mod bar_mark;
mod chart;
mod data;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod highlight;
mod interaction;
mod label_mark;
mod rule_mark;
mod scale;
mod tooltip;
mod view;
mod z_order;

pub use axis::{AxisOrient, AxisScale, AxisSpec, AxisStyle, AxisTick, StrokeStyle};
pub use bar_mark::{BAR_CLASS, BarMarkSpec};
pub use chart::{BarChartSpec, DrawCommands, X_AXIS_CLASS, Y_AXIS_CLASS, render};
pub use data::{CategoricalView, DataRow, Dataset, DatasetError, HostValue};
pub use geometry::{ChartGeometry, GeometrySpec, Margins};
pub use highlight::{BASE_FILL, DisplayState, coerce_number, highlight_fill, resolve_fill};
pub use interaction::{HoverTarget, InteractionLayer, hover_targets};
pub use label_mark::{BAR_TEXT_CLASS, LabelSpec};
pub use scale::{OrdinalDomain, ScaleBand, ScaleLinear};
pub use tooltip::{TOOLTIP_CLASS, Tooltip, TooltipSpec};
pub use view::BarChartView;
pub use z_order::*;

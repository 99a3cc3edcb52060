// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render pipeline.
//!
//! [`render`] is a pure function of the dataset, the display state and the chart spec. It runs
//! the stages in a fixed order: geometry, axes, bars, labels, then hover targets.

extern crate alloc;

use alloc::vec::Vec;

use bandbar_core::Mark;

use crate::axis::{AxisSpec, AxisStyle};
use crate::bar_mark::{BAR_CLASS, BarMarkSpec};
use crate::data::Dataset;
use crate::geometry::{ChartGeometry, GeometrySpec};
use crate::highlight::{DisplayState, highlight_fill, resolve_fill};
use crate::interaction::{HoverTarget, hover_targets};
use crate::label_mark::{BAR_TEXT_CLASS, LabelSpec};
use crate::tooltip::TooltipSpec;

/// Class of the value (bottom) axis marks.
pub const X_AXIS_CLASS: &str = "x-axis";
/// Class of the category (left) axis marks.
pub const Y_AXIS_CLASS: &str = "y-axis";

const X_AXIS_ID_BASE: u64 = 10;
const Y_AXIS_ID_BASE: u64 = 300_000;
const BAR_ID_BASE: u64 = 1_000_000;
const LABEL_ID_BASE: u64 = 2_000_000;

/// Everything that configures a bar chart apart from its data and display state.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartSpec {
    /// Layout constants.
    pub geometry: GeometrySpec,
    /// Styling shared by both axes.
    pub axis_style: AxisStyle,
    /// Approximate tick count of the value axis.
    pub value_ticks: usize,
    /// Bar label settings.
    pub labels: LabelSpec,
    /// Hover tooltip settings.
    pub tooltip: TooltipSpec,
}

impl Default for BarChartSpec {
    fn default() -> Self {
        Self {
            geometry: GeometrySpec::default(),
            axis_style: AxisStyle::default(),
            value_ticks: 10,
            labels: LabelSpec::default(),
            tooltip: TooltipSpec::default(),
        }
    }
}

impl BarChartSpec {
    /// Sets the layout constants.
    pub fn with_geometry(mut self, geometry: GeometrySpec) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets the axis style.
    pub fn with_axis_style(mut self, style: AxisStyle) -> Self {
        self.axis_style = style;
        self
    }

    /// Sets the value axis tick count.
    pub fn with_value_ticks(mut self, ticks: usize) -> Self {
        self.value_ticks = ticks;
        self
    }

    /// Sets the label settings.
    pub fn with_labels(mut self, labels: LabelSpec) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the tooltip settings.
    pub fn with_tooltip(mut self, tooltip: TooltipSpec) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// The bar generator used by [`render`].
    pub fn bars(&self) -> BarMarkSpec {
        BarMarkSpec::new(BAR_ID_BASE)
    }
}

/// Output of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommands {
    /// Planned geometry.
    pub geometry: ChartGeometry,
    /// Marks in pipeline order: axes, bars, labels.
    pub marks: Vec<Mark>,
    /// One hover target per bar.
    pub hover_targets: Vec<HoverTarget>,
}

impl DrawCommands {
    /// Bar marks, in dataset order.
    pub fn bars(&self) -> impl Iterator<Item = &Mark> {
        self.with_class(BAR_CLASS)
    }

    /// Label marks, in dataset order.
    pub fn labels(&self) -> impl Iterator<Item = &Mark> {
        self.with_class(BAR_TEXT_CLASS)
    }

    /// Marks carrying `class`.
    pub fn with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Mark> {
        self.marks.iter().filter(move |m| m.class == Some(class))
    }
}

/// Renders `dataset` under `state`.
///
/// Never fails: empty data yields axes only, and invalid display state degrades the bar fills.
pub fn render(dataset: &Dataset, state: &DisplayState, spec: &BarChartSpec) -> DrawCommands {
    let geometry = spec.geometry.plan(dataset);
    let rows = dataset.rows();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows = rows.len(),
        domain_max = geometry.value_scale.domain().1,
        band_width = geometry.position_scale.band_width(),
        "render pass"
    );

    let mut marks = Vec::new();

    let x_axis = AxisSpec::bottom(X_AXIS_ID_BASE, geometry.value_scale.clone())
        .with_tick_count(spec.value_ticks)
        .with_style(spec.axis_style.clone())
        .with_class(X_AXIS_CLASS);
    marks.extend(x_axis.marks(geometry.plot));

    let y_axis = AxisSpec::left(Y_AXIS_ID_BASE, geometry.position_scale.clone())
        .with_style(spec.axis_style.clone())
        .with_class(Y_AXIS_CLASS);
    marks.extend(y_axis.marks(geometry.plot));

    let bars = spec.bars();
    marks.extend(bars.marks(rows, &geometry, |row| {
        resolve_fill(highlight_fill(row, state))
    }));

    marks.extend(spec.labels.marks(LABEL_ID_BASE, rows, &geometry));

    let hover_targets = hover_targets(rows, &bars, &geometry);

    DrawCommands {
        geometry,
        marks,
        hover_targets,
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! A bar chart needs two guides: a bottom value axis driven by a linear scale and a left
//! category axis driven by a band scale. Both are expressed as a single [`AxisSpec`] with an
//! orientation; scales are plot-local and the axis offsets them by the plot origin.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use bandbar_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;

use crate::format::format_tick_with_step;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleBand, ScaleLinear, tick_step};
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Tick line length.
    pub tick_size: f64,
    /// Gap between the tick end and its label.
    pub tick_padding: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
            tick_size: 6.0,
            tick_padding: 3.0,
        }
    }
}

/// Where an axis sits relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis below the plot.
    Bottom,
    /// A vertical axis left of the plot.
    Left,
}

/// The scale an axis draws.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    /// Continuous values with generated ticks.
    Linear(ScaleLinear),
    /// One tick per category, at the band center, labelled with the category name.
    Band(ScaleBand),
}

impl From<ScaleLinear> for AxisScale {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleBand> for AxisScale {
    fn from(value: ScaleBand) -> Self {
        Self::Band(value)
    }
}

/// An axis specification.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// The plot-local scale.
    pub scale: AxisScale,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks for continuous scales.
    pub tick_count: usize,
    /// Whether to draw the axis domain line.
    pub show_domain: bool,
    /// Axis styling.
    pub style: AxisStyle,
    /// Class applied to every generated mark.
    pub class: Option<&'static str>,
}

/// One resolved tick: plot-local position along the axis and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Plot-local offset along the axis.
    pub offset: f64,
    /// Tick label.
    pub label: String,
}

impl AxisSpec {
    /// Creates an axis with default styling and 10 ticks.
    pub fn new(id_base: u64, scale: impl Into<AxisScale>, orient: AxisOrient) -> Self {
        Self {
            id_base,
            scale: scale.into(),
            orient,
            tick_count: 10,
            show_domain: true,
            style: AxisStyle::default(),
            class: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, scale: impl Into<AxisScale>) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, scale: impl Into<AxisScale>) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Enable or disable the axis domain line.
    pub fn with_domain(mut self, domain: bool) -> Self {
        self.show_domain = domain;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the class applied to generated marks.
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Resolves tick positions and labels.
    pub fn ticks(&self) -> Vec<AxisTick> {
        match &self.scale {
            AxisScale::Linear(s) => {
                let values = s.ticks(self.tick_count);
                let step = tick_step(&values);
                values
                    .into_iter()
                    .map(|v| AxisTick {
                        offset: s.map(v),
                        label: format_tick_with_step(v, step),
                    })
                    .collect()
            }
            AxisScale::Band(s) => {
                let half = 0.5 * s.band_width();
                s.domain()
                    .names()
                    .iter()
                    .enumerate()
                    .map(|(i, name)| AxisTick {
                        offset: s.x(i) + half,
                        label: name.clone(),
                    })
                    .collect()
            }
        }
    }

    fn extent(&self) -> (f64, f64) {
        let (r0, r1) = match &self.scale {
            AxisScale::Linear(s) => s.range(),
            AxisScale::Band(s) => s.range(),
        };
        (r0.min(r1), r0.max(r1))
    }

    /// Generate axis marks for the given plot rectangle (in view coordinates).
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        match self.orient {
            AxisOrient::Bottom => self.marks_bottom(plot),
            AxisOrient::Left => self.marks_left(plot),
        }
    }

    fn marks_bottom(&self, plot: Rect) -> Vec<Mark> {
        let y = plot.y1;
        let tick_size = self.style.tick_size.abs();
        let label_gap = self.style.tick_padding.max(0.0);
        let (lo, hi) = self.extent();

        let mut out = Vec::new();

        if self.show_domain {
            out.push(self.rule(RuleMarkSpec::horizontal(
                MarkId::from_raw(self.id_base),
                y,
                plot.x0 + lo,
                plot.x0 + hi,
            )));
        }

        for (i, tick) in self.ticks().into_iter().enumerate() {
            let x = plot.x0 + tick.offset;
            out.push(self.rule(RuleMarkSpec::vertical(
                MarkId::from_raw(self.id_base + 1 + i as u64),
                x,
                y,
                y + tick_size,
            )));
            out.push(self.label(
                i,
                x,
                y + tick_size + label_gap,
                tick.label,
                TextAnchor::Middle,
                TextBaseline::Hanging,
            ));
        }

        out
    }

    fn marks_left(&self, plot: Rect) -> Vec<Mark> {
        let x = plot.x0;
        let tick_size = self.style.tick_size.abs();
        let label_gap = self.style.tick_padding.max(0.0);
        let (lo, hi) = self.extent();

        let mut out = Vec::new();

        if self.show_domain {
            out.push(self.rule(RuleMarkSpec::vertical(
                MarkId::from_raw(self.id_base),
                x,
                plot.y0 + lo,
                plot.y0 + hi,
            )));
        }

        for (i, tick) in self.ticks().into_iter().enumerate() {
            let y = plot.y0 + tick.offset;
            out.push(self.rule(RuleMarkSpec::horizontal(
                MarkId::from_raw(self.id_base + 1 + i as u64),
                y,
                x - tick_size,
                x,
            )));
            out.push(self.label(
                i,
                x - tick_size - label_gap,
                y,
                tick.label,
                TextAnchor::End,
                TextBaseline::Middle,
            ));
        }

        out
    }

    fn rule(&self, rule: RuleMarkSpec) -> Mark {
        rule.with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
            .with_class(self.class)
            .mark()
    }

    fn label(
        &self,
        index: usize,
        x: f64,
        y: f64,
        text: String,
        anchor: TextAnchor,
        baseline: TextBaseline,
    ) -> Mark {
        let mut b = Mark::builder(MarkId::from_raw(self.id_base + 100_000 + index as u64))
            .text()
            .z_index(z_order::AXIS_LABELS)
            .x(x)
            .y(y)
            .content(text)
            .text_anchor(anchor)
            .text_baseline(baseline)
            .font_size(self.style.label_font_size)
            .fill_brush(self.style.label_fill.clone());
        if let Some(class) = self.class {
            b = b.class(class);
        }
        b.build()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bandbar_core::{MarkKind, MarkPayload};

    use super::*;
    use crate::scale::OrdinalDomain;

    fn texts(marks: &[Mark]) -> Vec<&str> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bottom_axis_labels_linear_ticks() {
        let plot = Rect::new(40.0, 20.0, 470.0, 50.0);
        let axis = AxisSpec::bottom(10, ScaleLinear::new((0.0, 100.0), (0.0, 430.0)));
        let marks = axis.marks(plot);
        let labels = texts(&marks);
        assert_eq!(labels.len(), 11);
        assert_eq!(labels.first().copied(), Some("0"));
        assert_eq!(labels.last().copied(), Some("100"));

        // Domain + 11 ticks + 11 labels.
        assert_eq!(marks.len(), 23);
        let last_tick = marks
            .iter()
            .filter(|m| m.kind() == MarkKind::Path)
            .filter_map(Mark::bounds)
            .map(|b| b.x1)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((last_tick - 470.0).abs() < 1e-9);
    }

    #[test]
    fn left_axis_centers_ticks_on_bands() {
        let plot = Rect::new(40.0, 20.0, 470.0, 80.0);
        let band = ScaleBand::new(OrdinalDomain::from_names(["A", "B"]), (0.0, 60.0))
            .with_padding(0.1);
        let axis = AxisSpec::left(20, band.clone()).with_class("y-axis");
        let ticks = axis.ticks();
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[1].label, "B");
        let expected = band.x(1) + band.band_width() / 2.0;
        assert!((ticks[1].offset - expected).abs() < 1e-9);

        let marks = axis.marks(plot);
        assert!(marks.iter().all(|m| m.class == Some("y-axis")));
        assert_eq!(texts(&marks), ["A", "B"]);
    }

    #[test]
    fn band_axis_without_categories_keeps_domain_line() {
        let plot = Rect::new(40.0, 20.0, 470.0, 25.0);
        let band = ScaleBand::new(OrdinalDomain::default(), (0.0, 5.0)).with_padding(0.1);
        let marks = AxisSpec::left(20, band).marks(plot);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].bounds(), Some(Rect::new(40.0, 20.0, 40.0, 25.0)));
    }

    #[test]
    fn axis_without_domain_emits_only_ticks_and_labels() {
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis = AxisSpec::bottom(1, ScaleLinear::new((0.0, 10.0), (0.0, 100.0)))
            .with_tick_count(2)
            .with_domain(false);
        let marks = axis.marks(plot);
        let ticks = axis.ticks();
        assert_eq!(marks.len(), ticks.len() * 2);
    }
}

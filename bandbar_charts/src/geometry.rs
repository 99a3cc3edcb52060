// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry planning: drawable size, plot placement, and the two chart scales.
//!
//! The plot rectangle is placed inside the view by fixed margins. Scales map into
//! plot-local coordinates (`[0, width]`, `[0, height]`); marks add [`ChartGeometry::plot`]'s
//! origin when they are generated.

use kurbo::{Point, Rect};

use crate::data::Dataset;
use crate::scale::{OrdinalDomain, ScaleBand, ScaleLinear};

/// Space reserved around the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin (holds the value axis).
    pub bottom: f64,
    /// Left margin (holds the category axis).
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
            left: 40.0,
        }
    }
}

/// Layout constants for a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometrySpec {
    /// Outer width of the chart.
    pub container_width: f64,
    /// Margins around the plot.
    pub margins: Margins,
    /// Height allotted per row, before margins are subtracted.
    pub row_height: f64,
    /// Floor for the plot height.
    pub min_height: f64,
    /// Band padding (inner and outer) of the category scale.
    pub band_padding: f64,
    /// Value-domain upper bound used when the data has no usable maximum.
    pub fallback_max: f64,
    /// Overrides the row-derived plot height when set.
    pub fixed_height: Option<f64>,
}

impl Default for GeometrySpec {
    fn default() -> Self {
        Self {
            container_width: 500.0,
            margins: Margins::default(),
            row_height: 30.0,
            min_height: 5.0,
            band_padding: 0.1,
            fallback_max: 100.0,
            fixed_height: None,
        }
    }
}

impl GeometrySpec {
    /// Sets the container width.
    pub fn with_container_width(mut self, width: f64) -> Self {
        self.container_width = width;
        self
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the per-row height.
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// Pins the plot height regardless of row count.
    pub fn with_fixed_height(mut self, height: f64) -> Self {
        self.fixed_height = Some(height);
        self
    }

    /// Sets the band padding of the category scale.
    pub fn with_band_padding(mut self, padding: f64) -> Self {
        self.band_padding = padding;
        self
    }

    /// Plot width: container width less horizontal margins.
    pub fn plot_width(&self) -> f64 {
        self.container_width - self.margins.left - self.margins.right
    }

    /// Plot height for `rows` rows: `max(min_height, rows * row_height - top - bottom)`.
    pub fn plot_height(&self, rows: usize) -> f64 {
        if let Some(h) = self.fixed_height {
            return h.max(self.min_height);
        }
        let raw = rows as f64 * self.row_height - self.margins.top - self.margins.bottom;
        raw.max(self.min_height)
    }

    /// Upper bound of the value domain.
    ///
    /// A missing or zero maximum falls back to [`GeometrySpec::fallback_max`]; negative
    /// maxima are kept as-is.
    pub fn domain_max(&self, dataset: &Dataset) -> f64 {
        match dataset.max_percentage() {
            Some(m) if m != 0.0 => m,
            _ => self.fallback_max,
        }
    }

    /// Plans geometry for `dataset`. Always succeeds.
    pub fn plan(&self, dataset: &Dataset) -> ChartGeometry {
        let width = self.plot_width();
        let height = self.plot_height(dataset.len());
        let origin = Point::new(self.margins.left, self.margins.top);
        let plot = Rect::from_origin_size(origin, (width, height));
        let view = Rect::new(
            0.0,
            0.0,
            self.container_width,
            height + self.margins.top + self.margins.bottom,
        );

        let value_scale = ScaleLinear::new((0.0, self.domain_max(dataset)), (0.0, width));
        let domain = OrdinalDomain::from_names(dataset.rows().iter().map(|r| r.name.as_str()));
        let position_scale =
            ScaleBand::new(domain, (0.0, height)).with_padding(self.band_padding);

        ChartGeometry {
            width,
            height,
            plot,
            view,
            value_scale,
            position_scale,
        }
    }
}

/// Output of the geometry planner for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Drawable width.
    pub width: f64,
    /// Drawable height.
    pub height: f64,
    /// Plot rectangle in view coordinates.
    pub plot: Rect,
    /// Outer view bounds.
    pub view: Rect,
    /// Value to plot-local x.
    pub value_scale: ScaleLinear,
    /// Category name to plot-local y.
    pub position_scale: ScaleBand,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::data::DataRow;

    fn rows(n: usize) -> Dataset {
        (0..n)
            .map(|i| DataRow::new(alloc::format!("r{i}"), 10.0))
            .collect()
    }

    #[test]
    fn width_subtracts_horizontal_margins() {
        let g = GeometrySpec::default().plan(&rows(3));
        assert_eq!(g.width, 430.0);
        assert_eq!(g.plot, Rect::new(40.0, 20.0, 470.0, 50.0));
    }

    #[test]
    fn height_has_a_floor() {
        let spec = GeometrySpec::default();
        assert_eq!(spec.plot_height(0), 5.0);
        assert_eq!(spec.plot_height(1), 5.0);
        assert_eq!(spec.plot_height(2), 5.0);
        assert_eq!(spec.plot_height(3), 30.0);
        assert_eq!(spec.plot_height(10), 240.0);
    }

    #[test]
    fn domain_falls_back_for_empty_or_zero_data() {
        let spec = GeometrySpec::default();
        assert_eq!(spec.domain_max(&Dataset::new()), 100.0);
        assert_eq!(
            spec.domain_max(&Dataset::from_rows([DataRow::new("a", 0.0)])),
            100.0
        );
        assert_eq!(
            spec.domain_max(&Dataset::from_rows([DataRow::new("a", -4.0)])),
            -4.0
        );
        assert_eq!(
            spec.domain_max(&Dataset::from_rows([
                DataRow::new("a", 3.0),
                DataRow::new("b", 70.0)
            ])),
            70.0
        );
    }

    #[test]
    fn empty_dataset_still_plans_axes() {
        let g = GeometrySpec::default().plan(&Dataset::new());
        assert_eq!(g.value_scale.domain(), (0.0, 100.0));
        assert_eq!(g.height, 5.0);
        assert_eq!(g.position_scale.count(), 0);
        assert_eq!(g.view.height(), 65.0);
    }

    #[test]
    fn custom_layout_constants_drive_the_plan() {
        let g = GeometrySpec::default()
            .with_container_width(600.0)
            .with_margins(Margins {
                top: 10.0,
                right: 10.0,
                bottom: 10.0,
                left: 50.0,
            })
            .with_row_height(40.0)
            .with_band_padding(0.0)
            .plan(&rows(4));
        assert_eq!(g.width, 540.0);
        assert_eq!(g.height, 140.0);
        assert_eq!(g.plot, Rect::new(50.0, 10.0, 590.0, 150.0));
        assert_eq!(g.view, Rect::new(0.0, 0.0, 600.0, 160.0));
        assert_eq!(g.position_scale.band_width(), 35.0);
        assert_eq!(g.position_scale.position("r0"), Some(0.0));
        assert_eq!(g.position_scale.position("r3"), Some(105.0));
    }

    #[test]
    fn fixed_height_overrides_row_count() {
        let g = GeometrySpec::default()
            .with_fixed_height(200.0)
            .plan(&rows(40));
        assert_eq!(g.height, 200.0);
        assert!(g.position_scale.band_width() < 10.0);
    }
}

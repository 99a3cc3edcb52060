// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar label generation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use bandbar_core::{Mark, MarkId, TextBaseline};
use peniko::Brush;
use peniko::color::palette::css;

use crate::data::DataRow;
use crate::geometry::ChartGeometry;

/// Mark class for bar labels.
pub const BAR_TEXT_CLASS: &str = "bar-text";

/// One text mark per row, just past the end of its bar.
///
/// A label is always emitted; its text is the row name only while the band is wider than
/// [`LabelSpec::min_band_width`], and empty otherwise. `LabelSpec` carries styling only; ids
/// are assigned by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSpec {
    /// Horizontal gap between the bar end and the label.
    pub offset: f64,
    /// Baseline shift in em units.
    pub dy_em: f64,
    /// Bands must be strictly wider than this to carry text.
    pub min_band_width: f64,
    /// Font size.
    pub font_size: f64,
    /// Text paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl Default for LabelSpec {
    fn default() -> Self {
        Self {
            offset: 5.0,
            dy_em: 0.35,
            min_band_width: 10.0,
            font_size: 10.0,
            fill: css::BLACK.into(),
            z_index: crate::z_order::SERIES_LABELS,
        }
    }
}

impl LabelSpec {
    /// Sets the legibility threshold.
    pub fn with_min_band_width(mut self, min_band_width: f64) -> Self {
        self.min_band_width = min_band_width;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Returns `true` if bands of `band_width` are wide enough for text.
    pub fn is_legible(&self, band_width: f64) -> bool {
        band_width > self.min_band_width
    }

    /// Generates the label marks; row `i` gets id `id_base + i`.
    pub fn marks(&self, id_base: u64, rows: &[DataRow], geometry: &ChartGeometry) -> Vec<Mark> {
        let band = &geometry.position_scale;
        let bw = band.band_width();
        let legible = self.is_legible(bw);

        rows.iter()
            .enumerate()
            .filter_map(|(row, data)| {
                let y = band.position(&data.name)? + bw / 2.0;
                let x = geometry.value_scale.map(data.percentage) + self.offset;
                let text = if legible {
                    data.name.clone()
                } else {
                    String::new()
                };
                Some(
                    Mark::builder(MarkId::for_row(id_base, row))
                        .text()
                        .class(BAR_TEXT_CLASS)
                        .z_index(self.z_index)
                        .x(geometry.plot.x0 + x)
                        .y(geometry.plot.y0 + y)
                        .dy_em(self.dy_em)
                        .text_baseline(TextBaseline::Alphabetic)
                        .content(text)
                        .font_size(self.font_size)
                        .fill_brush(self.fill.clone())
                        .build(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bandbar_core::MarkPayload;

    use super::*;
    use crate::data::Dataset;
    use crate::geometry::GeometrySpec;

    fn label_texts(marks: &[Mark]) -> Vec<String> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn labels_sit_past_the_bar_end_on_the_band_center() {
        let data: Dataset = (0..6)
            .map(|i| DataRow::new(alloc::format!("r{i}"), 10.0 * (i + 1) as f64))
            .collect();
        let g = GeometrySpec::default().plan(&data);
        let marks = LabelSpec::default().marks(0, data.rows(), &g);
        let MarkPayload::Text(t) = &marks[5].payload else {
            panic!("label should be text");
        };
        assert!((t.pos.x - (40.0 + g.width + 5.0)).abs() < 1e-9);
        let band = &g.position_scale;
        let center = 20.0 + band.position("r5").unwrap() + band.band_width() / 2.0;
        assert!((t.pos.y - center).abs() < 1e-9);
        assert_eq!(t.dy_em, 0.35);
        assert_eq!(t.text, "r5");
    }

    #[test]
    fn narrow_bands_keep_empty_labels() {
        // Three rows: plot height 30, band width 27 / 3.1 < 10.
        let data: Dataset = ["a", "b", "c"]
            .into_iter()
            .map(|n| DataRow::new(n, 1.0))
            .collect();
        let g = GeometrySpec::default().plan(&data);
        assert!(g.position_scale.band_width() <= 10.0);
        let marks = LabelSpec::default().marks(0, data.rows(), &g);
        assert_eq!(marks.len(), 3);
        assert!(label_texts(&marks).iter().all(String::is_empty));
    }

    #[test]
    fn threshold_is_strict() {
        let spec = LabelSpec::default();
        assert!(!spec.is_legible(10.0));
        assert!(spec.is_legible(10.000_001));
    }

    #[test]
    fn forty_rows_in_a_fixed_height_chart_lose_their_text() {
        let data: Dataset = (0..40)
            .map(|i| DataRow::new(alloc::format!("r{i}"), 2.5))
            .collect();
        let g = GeometrySpec::default()
            .with_fixed_height(300.0)
            .plan(&data);
        let marks = LabelSpec::default().marks(0, data.rows(), &g);
        assert_eq!(marks.len(), 40);
        assert!(label_texts(&marks).iter().all(String::is_empty));
    }
}

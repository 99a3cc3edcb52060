// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use bandbar_core::{Mark, MarkId};
use peniko::Brush;

use crate::data::DataRow;
use crate::geometry::ChartGeometry;

/// Mark class for bars.
pub const BAR_CLASS: &str = "bar";

/// Horizontal bars: one rectangle per row, growing right from the value axis origin.
///
/// Bar `i` gets id `id_base + i`, so identity follows dataset position rather than name.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Rendering order hint (`bandbar_core::Mark::z_index`).
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar mark spec.
    pub fn new(id_base: u64) -> Self {
        Self {
            id_base,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Returns the id of the bar for row `row`.
    pub fn id_for(&self, row: usize) -> MarkId {
        MarkId::for_row(self.id_base, row)
    }

    /// Generates one interactive rect per row.
    ///
    /// Rows whose name is missing from the position scale are skipped. Widths that map below
    /// zero (negative values) or to `NaN` collapse to zero.
    pub fn marks(
        &self,
        rows: &[DataRow],
        geometry: &ChartGeometry,
        mut fill: impl FnMut(&DataRow) -> Brush,
    ) -> Vec<Mark> {
        let band = &geometry.position_scale;
        let bw = band.band_width();
        let x0 = geometry.plot.x0 + geometry.value_scale.map(0.0);

        rows.iter()
            .enumerate()
            .filter_map(|(row, data)| {
                let y = band.position(&data.name)?;
                let w = geometry.value_scale.map(data.percentage).max(0.0);
                Some(
                    Mark::builder(self.id_for(row))
                        .rect()
                        .class(BAR_CLASS)
                        .interactive(true)
                        .z_index(self.z_index)
                        .x(x0)
                        .y(geometry.plot.y0 + y)
                        .width(w)
                        .height(bw)
                        .fill_brush(fill(data))
                        .build(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;
    use peniko::color::palette::css;

    use super::*;
    use crate::data::Dataset;
    use crate::geometry::GeometrySpec;

    #[test]
    fn bars_follow_dataset_order_and_scale() {
        let data = Dataset::from_rows([
            DataRow::new("a", 80.0),
            DataRow::new("b", 40.0),
            DataRow::new("c", 20.0),
            DataRow::new("d", 10.0),
        ]);
        let g = GeometrySpec::default().plan(&data);
        let marks = BarMarkSpec::new(1000).marks(data.rows(), &g, |_| css::GRAY.into());

        assert_eq!(marks.len(), 4);
        let rects: Vec<Rect> = marks.iter().filter_map(Mark::bounds).collect();
        assert!(rects.windows(2).all(|w| w[0].y0 < w[1].y0));
        assert!((rects[0].width() - g.width).abs() < 1e-9);
        assert!((rects[0].width() - 2.0 * rects[1].width()).abs() < 1e-9);
        assert!(rects.iter().all(|r| r.x0 == 40.0));
        assert_eq!(marks[2].id, MarkId(1002));
        assert!(marks.iter().all(|m| m.interactive));
    }

    #[test]
    fn negative_and_nan_values_collapse_to_zero_width() {
        let data = Dataset::from_rows([
            DataRow::new("a", 50.0),
            DataRow::new("neg", -10.0),
            DataRow::new("nan", f64::NAN),
        ]);
        let g = GeometrySpec::default().plan(&data);
        let marks = BarMarkSpec::new(0).marks(data.rows(), &g, |_| css::GRAY.into());
        assert_eq!(marks[1].bounds().map(|b| b.width()), Some(0.0));
        assert_eq!(marks[2].bounds().map(|b| b.width()), Some(0.0));
    }

    #[test]
    fn duplicate_names_share_a_band() {
        let data = Dataset::from_rows([DataRow::new("a", 50.0), DataRow::new("a", 25.0)]);
        let g = GeometrySpec::default().plan(&data);
        let marks = BarMarkSpec::new(0).marks(data.rows(), &g, |_| css::GRAY.into());
        assert_eq!(marks.len(), 2);
        assert_eq!(
            marks[0].bounds().map(|b| b.y0),
            marks[1].bounds().map(|b| b.y0)
        );
    }
}

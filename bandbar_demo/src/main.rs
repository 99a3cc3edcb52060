// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart demo for `bandbar_charts`.
//!
//! Drives a mounted [`BarChartView`] through display-state changes, simulated hover and host
//! updates, and writes every captured frame to `bandbar_demo.html`.

mod html;
mod svg;

use std::error::Error;

use bandbar_charts::{
    BarChartSpec, BarChartView, CategoricalView, DataRow, Dataset, DisplayState, HostValue,
};
use bandbar_core::MarkDiff;
use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Collects frames while keeping an SVG mirror of the mounted scene.
#[derive(Debug, Default)]
struct Recorder {
    svg: svg::SvgScene,
    sections: Vec<html::HtmlSection>,
}

impl Recorder {
    fn apply(&mut self, diffs: Option<Vec<MarkDiff>>) {
        if let Some(diffs) = diffs {
            self.svg.apply_diffs(&diffs);
        }
    }

    fn capture(&mut self, view: &BarChartView, title: &str, description: &str) {
        if let Some(g) = view.geometry() {
            self.svg.set_view_box(g.view);
        }
        self.sections.push(html::HtmlSection {
            title: title.to_string(),
            description: description.to_string(),
            state: view.display_state().clone(),
            svg: self.svg.to_svg_string(),
            overlay: view.overlay().iter().cloned().collect(),
        });
    }
}

fn sample_dataset() -> Dataset {
    Dataset::from_rows([
        DataRow::new("Rust", 87.0),
        DataRow::new("Go", 46.0),
        DataRow::new("TypeScript", 72.5),
        DataRow::new("Python", 64.0),
        DataRow::new("Kotlin", 38.0),
        DataRow::new("Zig", 21.0),
        DataRow::new("C++", 55.0),
        DataRow::new("Elixir", 17.5),
    ])
}

fn host_view() -> CategoricalView {
    CategoricalView {
        categories: ["north", "south", "east", "west", "central", "islands"]
            .into_iter()
            .map(|s| HostValue::Text(s.to_string()))
            .collect(),
        values: [12.0, 48.0, 30.0, 5.0, 41.0, 0.0]
            .into_iter()
            .map(HostValue::Number)
            .collect(),
    }
}

/// Page position of the center of bar `row`, if it is mounted.
fn bar_center(view: &BarChartView, row: usize) -> Option<Point> {
    let id = view.spec().bars().id_for(row);
    let bounds = view.scene()?.get(id)?.bounds()?;
    Some(bounds.center() + view.page_origin().to_vec2())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut view = BarChartView::new(BarChartSpec::default());
    let mut rec = Recorder::default();

    // Inputs that arrive before the canvas exists are kept but not drawn.
    let skipped = view.set_dataset(sample_dataset());
    info!(skipped = skipped.is_none(), "dataset set before mount");

    rec.apply(view.mount());
    rec.capture(&view, "Mounted", "Default state: every bar in range, painted gray.");

    rec.apply(view.set_color("steelblue"));
    rec.apply(view.set_min_range_input("40"));
    rec.apply(view.set_max_range_input("75"));
    rec.capture(
        &view,
        "Highlight",
        "Bars with 40 <= value <= 75 (inclusive) take the highlight color.",
    );

    if let Some(p) = bar_center(&view, 2) {
        view.pointer_move(p);
        view.advance(100.0);
        rec.capture(&view, "Hover (fading in)", "Tooltip 100 ms into its fade.");
        view.advance(150.0);
        rec.capture(&view, "Hover", "Tooltip fully faded in next to the pointer.");
    }
    if let Some(p) = bar_center(&view, 3) {
        view.pointer_move(p);
        view.advance(250.0);
        rec.capture(&view, "Hover (moved)", "Moving to another bar reuses the tooltip.");
    }
    view.pointer_move(Point::new(-10.0, -10.0));
    info!(tooltips = view.overlay().len(), "pointer left the chart");

    rec.apply(view.set_color("not-a-color"));
    rec.capture(&view, "Invalid color", "Highlighted bars silently fail to paint.");

    rec.apply(view.set_color("tomato"));
    rec.apply(view.set_min_range_input("abc"));
    rec.capture(&view, "Invalid range", "A non-numeric bound grays out every bar.");

    rec.apply(view.set_display_state(DisplayState::default().with_color("seagreen")));
    rec.apply(view.update(Some(&host_view()))?);
    rec.capture(&view, "Host update", "Data adapted from a host categorical view.");

    rec.apply(view.update(None)?);
    rec.capture(&view, "Cleared", "No host data: axes only, value domain [0, 100].");

    rec.apply(view.unmount());

    let report = html::render_report("bandbar demo", &rec.sections);
    std::fs::write("bandbar_demo.html", report)?;
    info!(frames = rec.sections.len(), "wrote bandbar_demo.html");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_capture_holds_a_single_tooltip() {
        let mut view = BarChartView::default();
        view.set_dataset(sample_dataset());
        view.mount();
        let p = bar_center(&view, 0).expect("bar 0 is mounted");
        view.pointer_move(p);
        view.pointer_move(p + kurbo::Vec2::new(1.0, 0.0));
        assert_eq!(view.overlay().len(), 1, "moving within a bar keeps one tooltip");

        let mut rec = Recorder::default();
        rec.capture(&view, "t", "d");
        assert_eq!(rec.sections[0].overlay[0].text, "Rust");
    }

    #[test]
    fn host_dataset_adapts_cleanly() {
        let data = Dataset::from_categorical(&host_view()).expect("host view is well formed");
        assert_eq!(data.len(), 6);
        assert_eq!(data.max_percentage(), Some(48.0));
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful chart component.
//!
//! [`BarChartView`] owns the current inputs, the mount point (a [`Scene`]) and the page
//! [`Overlay`] that hosts the tooltip. Every input change runs a full render pass and
//! rebuilds the scene; while unmounted, render passes are skipped.

extern crate alloc;

use alloc::vec::Vec;

use bandbar_core::{MarkDiff, MarkId, Overlay, Scene};
use kurbo::Point;

use crate::chart::{BarChartSpec, render};
use crate::data::{CategoricalView, Dataset, DatasetError};
use crate::geometry::ChartGeometry;
use crate::highlight::DisplayState;
use crate::interaction::InteractionLayer;

/// A mountable, interactive horizontal bar chart.
#[derive(Debug)]
pub struct BarChartView {
    spec: BarChartSpec,
    state: DisplayState,
    dataset: Dataset,
    canvas: Option<Scene>,
    overlay: Overlay,
    interaction: InteractionLayer,
    geometry: Option<ChartGeometry>,
    page_origin: Point,
}

impl Default for BarChartView {
    fn default() -> Self {
        Self::new(BarChartSpec::default())
    }
}

impl BarChartView {
    /// Creates an unmounted view with an empty dataset and the default display state.
    pub fn new(spec: BarChartSpec) -> Self {
        let interaction = InteractionLayer::new(spec.tooltip);
        Self {
            spec,
            state: DisplayState::default(),
            dataset: Dataset::new(),
            canvas: None,
            overlay: Overlay::new(),
            interaction,
            geometry: None,
            page_origin: Point::ZERO,
        }
    }

    /// Sets where the view's top-left corner sits in page coordinates.
    pub fn with_page_origin(mut self, origin: Point) -> Self {
        self.page_origin = origin;
        self
    }

    /// Returns `true` while a mount target exists.
    pub fn is_mounted(&self) -> bool {
        self.canvas.is_some()
    }

    /// Attaches the chart canvas and renders into it.
    pub fn mount(&mut self) -> Option<Vec<MarkDiff>> {
        if self.canvas.is_none() {
            self.canvas = Some(Scene::new());
        }
        self.redraw()
    }

    /// Detaches the chart canvas, returning exits for everything it held.
    ///
    /// The tooltip is removed as well.
    pub fn unmount(&mut self) -> Option<Vec<MarkDiff>> {
        let mut scene = self.canvas.take()?;
        self.interaction.unbind(&mut self.overlay);
        self.geometry = None;
        Some(scene.clear())
    }

    /// Replaces the dataset and redraws.
    pub fn set_dataset(&mut self, dataset: Dataset) -> Option<Vec<MarkDiff>> {
        self.dataset = dataset;
        self.redraw()
    }

    /// Replaces the display state and redraws.
    pub fn set_display_state(&mut self, state: DisplayState) -> Option<Vec<MarkDiff>> {
        self.state = state;
        self.redraw()
    }

    /// Applies the color input and redraws.
    pub fn set_color(&mut self, color: &str) -> Option<Vec<MarkDiff>> {
        self.state.set_color(color);
        self.redraw()
    }

    /// Applies the minimum-range input text and redraws.
    pub fn set_min_range_input(&mut self, input: &str) -> Option<Vec<MarkDiff>> {
        self.state.set_min_range_input(input);
        self.redraw()
    }

    /// Applies the maximum-range input text and redraws.
    pub fn set_max_range_input(&mut self, input: &str) -> Option<Vec<MarkDiff>> {
        self.state.set_max_range_input(input);
        self.redraw()
    }

    /// Host update hook.
    ///
    /// `None` means the host has no data and clears the chart. Data that fails to adapt also
    /// clears the chart; the error is handed back to the host.
    pub fn update(
        &mut self,
        view: Option<&CategoricalView>,
    ) -> Result<Option<Vec<MarkDiff>>, DatasetError> {
        let Some(view) = view else {
            return Ok(self.clear());
        };
        match Dataset::from_categorical(view) {
            Ok(dataset) => Ok(self.set_dataset(dataset)),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "host data rejected");
                self.clear();
                Err(err)
            }
        }
    }

    /// Host clear hook: renders an empty dataset.
    pub fn clear(&mut self) -> Option<Vec<MarkDiff>> {
        self.set_dataset(Dataset::new())
    }

    /// Runs a render pass and rebuilds the mounted scene.
    ///
    /// Returns `None` without doing anything when unmounted.
    pub fn redraw(&mut self) -> Option<Vec<MarkDiff>> {
        let Some(scene) = self.canvas.as_mut() else {
            #[cfg(feature = "tracing")]
            tracing::debug!("no mount target, render skipped");
            return None;
        };
        let commands = render(&self.dataset, &self.state, &self.spec);
        let diffs = scene.rebuild(commands.marks);
        self.interaction
            .bind(&mut self.overlay, commands.hover_targets);
        self.geometry = Some(commands.geometry);
        Some(diffs)
    }

    /// Pointer entered `mark` at page position `page`.
    pub fn pointer_enter(&mut self, mark: MarkId, page: Point) -> bool {
        self.interaction.pointer_enter(&mut self.overlay, mark, page)
    }

    /// Pointer left `mark`. Returns the number of tooltip elements removed.
    pub fn pointer_leave(&mut self, mark: MarkId) -> usize {
        self.interaction.pointer_leave(&mut self.overlay, mark)
    }

    /// Pointer moved to page position `page`.
    ///
    /// Hit-tests the mounted bars and synthesizes enter and leave events.
    pub fn pointer_move(&mut self, page: Point) {
        let Some(scene) = self.canvas.as_ref() else {
            return;
        };
        let local = page - self.page_origin.to_vec2();
        let hit = scene.hit_test(local);
        self.interaction.pointer_move(&mut self.overlay, hit, page);
    }

    /// Advances tooltip fades by `dt` milliseconds.
    pub fn advance(&mut self, dt: f64) {
        self.overlay.advance(dt);
    }

    /// The mounted scene.
    pub fn scene(&self) -> Option<&Scene> {
        self.canvas.as_ref()
    }

    /// The page overlay.
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Geometry of the last render pass.
    pub fn geometry(&self) -> Option<&ChartGeometry> {
        self.geometry.as_ref()
    }

    /// Hover bindings of the last render pass.
    pub fn interaction(&self) -> &InteractionLayer {
        &self.interaction
    }

    /// Current display state.
    pub fn display_state(&self) -> &DisplayState {
        &self.state
    }

    /// Current dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The chart spec.
    pub fn spec(&self) -> &BarChartSpec {
        &self.spec
    }

    /// Page origin of the view.
    pub fn page_origin(&self) -> Point {
        self.page_origin
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use alloc::vec;

    use kurbo::Vec2;

    use super::*;
    use crate::data::{DataRow, HostValue};
    use crate::tooltip::{TOOLTIP_CLASS, TooltipSpec};

    fn two_rows() -> Dataset {
        Dataset::from_rows([DataRow::new("A", 50.0), DataRow::new("B", 10.0)])
    }

    #[test]
    fn unmounted_view_skips_rendering() {
        let mut view = BarChartView::default();
        assert!(view.set_dataset(two_rows()).is_none());
        assert!(view.scene().is_none());
        assert!(view.geometry().is_none());
        assert_eq!(view.dataset().len(), 2);

        let diffs = view.mount().unwrap();
        assert!(diffs.iter().all(MarkDiff::is_enter));
        assert_eq!(view.interaction().len(), 2);
    }

    #[test]
    fn unmount_clears_scene_and_tooltip() {
        let mut view = BarChartView::default();
        view.mount();
        view.set_dataset(two_rows());
        assert!(view.pointer_enter(MarkId(1_000_000), Point::new(50.0, 50.0)));
        assert_eq!(view.overlay().count_by_class(TOOLTIP_CLASS), 1);

        let exits = view.unmount().unwrap();
        assert!(exits.iter().all(|d| !d.is_enter()));
        assert!(view.overlay().is_empty());
        assert!(!view.is_mounted());
        assert!(view.unmount().is_none());
    }

    #[test]
    fn update_adapts_host_data() {
        let mut view = BarChartView::default();
        view.mount();
        let host = CategoricalView {
            categories: vec![HostValue::Text(String::from("A")), HostValue::Number(2.0)],
            values: vec![HostValue::Number(50.0), HostValue::Number(10.0)],
        };
        assert!(view.update(Some(&host)).unwrap().is_some());
        assert_eq!(view.dataset().rows()[1].name, "2");

        view.update(None).unwrap();
        assert!(view.dataset().is_empty());
    }

    #[test]
    fn rejected_host_data_clears_the_chart() {
        let mut view = BarChartView::default();
        view.mount();
        view.set_dataset(two_rows());
        let host = CategoricalView {
            categories: vec![HostValue::Text(String::from("A"))],
            values: vec![HostValue::Text(String::from("fifty"))],
        };
        let err = view.update(Some(&host)).unwrap_err();
        assert!(matches!(err, DatasetError::NonNumericValue { row: 0, .. }));
        assert!(view.dataset().is_empty());
        assert!(view.interaction().is_empty());
    }

    #[test]
    fn pointer_move_hit_tests_relative_to_page_origin() {
        let mut view = BarChartView::default().with_page_origin(Point::new(100.0, 200.0));
        view.mount();
        let rows: Dataset = (0..6)
            .map(|i| DataRow::new(alloc::format!("r{i}"), 50.0))
            .collect();
        view.set_dataset(rows);

        let bar = view
            .scene()
            .and_then(|s| s.get(MarkId(1_000_000)))
            .and_then(|m| m.bounds())
            .unwrap();
        let page = Point::new(100.0 + bar.center().x, 200.0 + bar.center().y);
        view.pointer_move(page);
        assert_eq!(view.interaction().hovered(), Some(MarkId(1_000_000)));
        let tip = view.overlay().iter().next().unwrap();
        assert_eq!(tip.text, "r0");
        assert_eq!(tip.pos, Point::new(page.x + 5.0, page.y - 28.0));

        view.pointer_move(Point::new(0.0, 0.0));
        assert!(view.overlay().is_empty());
    }

    #[test]
    fn tooltip_spec_sets_offset_and_fade() {
        let tooltip = TooltipSpec::default()
            .with_offset(Vec2::new(12.0, 8.0))
            .with_fade(1.0, 100.0);
        let mut view = BarChartView::new(BarChartSpec::default().with_tooltip(tooltip));
        view.mount();
        view.set_dataset(two_rows());

        let bar = view.spec().bars().id_for(0);
        assert!(view.pointer_enter(bar, Point::new(50.0, 60.0)));
        let tip = view.overlay().iter().next().unwrap();
        assert_eq!(tip.pos, Point::new(62.0, 68.0));
        assert_eq!(tip.opacity, 0.0);

        view.advance(100.0);
        assert_eq!(view.overlay().iter().next().unwrap().opacity, 1.0);
    }

    #[test]
    fn input_setters_redraw_with_coerced_values() {
        let mut view = BarChartView::default();
        view.mount();
        view.set_dataset(two_rows());
        let gen_before = view.scene().map(Scene::generation);
        view.set_min_range_input("abc");
        assert!(view.display_state().min_range.is_nan());
        view.set_max_range_input("");
        assert_eq!(view.display_state().max_range, 0.0);
        view.set_color("red");
        assert_eq!(view.display_state().color, "red");
        assert_eq!(
            view.scene().map(Scene::generation),
            gen_before.map(|g| g + 3)
        );
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover handling for bars.
//!
//! Each render pass yields a set of [`HoverTarget`]s, one per drawn bar. The
//! [`InteractionLayer`] binds them by mark id and turns pointer enter/leave events into
//! tooltip show/hide calls on the page overlay.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use bandbar_core::{MarkId, Overlay};
use hashbrown::HashMap;
use kurbo::Point;

use crate::bar_mark::BarMarkSpec;
use crate::data::DataRow;
use crate::geometry::ChartGeometry;
use crate::tooltip::{Tooltip, TooltipSpec};

/// A bar that reacts to hover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverTarget {
    /// The bar's mark id.
    pub mark: MarkId,
    /// Dataset index of the row.
    pub row: usize,
    /// Tooltip text.
    pub name: String,
}

/// Returns a hover target for every row that produced a bar.
pub fn hover_targets(
    rows: &[DataRow],
    bars: &BarMarkSpec,
    geometry: &ChartGeometry,
) -> Vec<HoverTarget> {
    rows.iter()
        .enumerate()
        .filter(|(_, data)| geometry.position_scale.position(&data.name).is_some())
        .map(|(row, data)| HoverTarget {
            mark: bars.id_for(row),
            row,
            name: data.name.clone(),
        })
        .collect()
}

/// Pointer state and the tooltip it drives.
#[derive(Clone, Debug, Default)]
pub struct InteractionLayer {
    bindings: HashMap<MarkId, HoverTarget>,
    hovered: Option<MarkId>,
    tooltip: Tooltip,
}

impl InteractionLayer {
    /// Creates a layer with no bindings.
    pub fn new(spec: TooltipSpec) -> Self {
        Self {
            bindings: HashMap::new(),
            hovered: None,
            tooltip: Tooltip::new(spec),
        }
    }

    /// Replaces the bindings with those of a new render pass.
    ///
    /// The bars of the previous pass are gone, so hover state is dropped and a tooltip they
    /// left behind is removed.
    pub fn bind(&mut self, overlay: &mut Overlay, targets: impl IntoIterator<Item = HoverTarget>) {
        self.unbind(overlay);
        self.bindings
            .extend(targets.into_iter().map(|t| (t.mark, t)));
    }

    /// Drops every binding and hides the tooltip.
    pub fn unbind(&mut self, overlay: &mut Overlay) {
        self.bindings.clear();
        self.hovered = None;
        self.tooltip.hide(overlay);
    }

    /// Returns the binding for `mark`.
    pub fn target(&self, mark: MarkId) -> Option<&HoverTarget> {
        self.bindings.get(&mark)
    }

    /// Number of bound bars.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The bar currently under the pointer.
    pub fn hovered(&self) -> Option<MarkId> {
        self.hovered
    }

    /// The tooltip controller.
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Pointer entered `mark` at page position `page`.
    ///
    /// Returns `false` (and does nothing) if `mark` is not a bound bar.
    pub fn pointer_enter(&mut self, overlay: &mut Overlay, mark: MarkId, page: Point) -> bool {
        let Some(target) = self.bindings.get(&mark) else {
            return false;
        };
        self.tooltip.show(overlay, &target.name, page);
        self.hovered = Some(mark);
        true
    }

    /// Pointer left `mark`. Returns the number of tooltip elements removed.
    pub fn pointer_leave(&mut self, overlay: &mut Overlay, mark: MarkId) -> usize {
        if !self.bindings.contains_key(&mark) {
            return 0;
        }
        if self.hovered == Some(mark) {
            self.hovered = None;
        }
        self.tooltip.hide(overlay)
    }

    /// Pointer moved; `hit` is the bar under it, if any.
    ///
    /// Synthesizes a leave for the previously hovered bar and an enter for the new one when
    /// they differ. Moving within the same bar leaves the tooltip where it was placed.
    pub fn pointer_move(&mut self, overlay: &mut Overlay, hit: Option<MarkId>, page: Point) {
        let hit = hit.filter(|id| self.bindings.contains_key(id));
        if hit == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered {
            self.pointer_leave(overlay, prev);
        }
        if let Some(next) = hit {
            self.pointer_enter(overlay, next, page);
        }
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The floating hover tooltip.
//!
//! At most one tooltip element exists at a time. The controller holds the id of the element
//! it created and reuses it on repeated shows; hiding removes it (and any stray element with
//! the tooltip class) from the overlay.

use bandbar_core::{ElementId, Overlay};
use kurbo::{Point, Vec2};

/// Overlay class of the tooltip element.
pub const TOOLTIP_CLASS: &str = "tooltip";

/// Tooltip placement and fade-in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipSpec {
    /// Overlay class.
    pub class: &'static str,
    /// Offset from the pointer's page position to the element's top-left corner.
    pub offset: Vec2,
    /// Opacity reached at the end of the fade-in.
    pub opacity: f64,
    /// Fade-in duration in milliseconds.
    pub fade_ms: f64,
}

impl Default for TooltipSpec {
    fn default() -> Self {
        Self {
            class: TOOLTIP_CLASS,
            offset: Vec2::new(5.0, -28.0),
            opacity: 0.9,
            fade_ms: 200.0,
        }
    }
}

impl TooltipSpec {
    /// Sets the pointer offset.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the fade-in target opacity and duration.
    pub fn with_fade(mut self, opacity: f64, fade_ms: f64) -> Self {
        self.opacity = opacity;
        self.fade_ms = fade_ms;
        self
    }
}

/// Singleton tooltip controller.
#[derive(Clone, Debug, Default)]
pub struct Tooltip {
    spec: TooltipSpec,
    held: Option<ElementId>,
}

impl Tooltip {
    /// Creates a controller.
    pub fn new(spec: TooltipSpec) -> Self {
        Self { spec, held: None }
    }

    /// Returns the spec.
    pub fn spec(&self) -> &TooltipSpec {
        &self.spec
    }

    /// Returns the element currently shown, if any.
    pub fn element(&self) -> Option<ElementId> {
        self.held
    }

    /// Shows `text` next to the page-space pointer position.
    ///
    /// Creates the element on first use (fully transparent, then fading in) and reuses it
    /// afterwards, continuing the fade from its current opacity.
    pub fn show(&mut self, overlay: &mut Overlay, text: &str, page: Point) -> ElementId {
        let reused = self.held.filter(|id| overlay.get(*id).is_some());
        let id = match reused {
            Some(id) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(element = id.0, "tooltip reused");
                id
            }
            None => {
                let id = overlay.append(self.spec.class);
                #[cfg(feature = "tracing")]
                tracing::debug!(element = id.0, "tooltip created");
                id
            }
        };
        self.held = Some(id);

        if let Some(el) = overlay.get_mut(id) {
            el.fade_to(self.spec.opacity, self.spec.fade_ms);
            el.set_text(text);
            el.set_position(page + self.spec.offset);
        }
        id
    }

    /// Removes the tooltip. Returns the number of elements removed.
    pub fn hide(&mut self, overlay: &mut Overlay) -> usize {
        let mut removed = 0;
        if let Some(id) = self.held.take()
            && overlay.remove(id)
        {
            removed += 1;
        }
        removed += overlay.remove_by_class(self.spec.class).len();
        #[cfg(feature = "tracing")]
        if removed > 0 {
            tracing::debug!(removed, "tooltip removed");
        }
        removed
    }
}

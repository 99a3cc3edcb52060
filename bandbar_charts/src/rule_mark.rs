// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A "rule" is a straight line segment: axis domain lines and tick marks.

use bandbar_core::{Mark, MarkId};
use kurbo::BezPath;
use peniko::{Brush, Color};

use crate::z_order;

/// A rule mark spec (a stroked line segment).
#[derive(Clone, Debug)]
pub(crate) struct RuleMarkSpec {
    id: MarkId,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    stroke: Brush,
    stroke_width: f64,
    z_index: i32,
    class: Option<&'static str>,
}

impl RuleMarkSpec {
    /// Creates a new rule between two points.
    pub(crate) fn new(id: MarkId, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            id,
            x0,
            y0,
            x1,
            y1,
            stroke: Brush::default(),
            stroke_width: 1.0,
            z_index: z_order::AXIS_RULES,
            class: None,
        }
    }

    /// Creates a horizontal rule.
    pub(crate) fn horizontal(id: MarkId, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(id, x0, y, x1, y)
    }

    /// Creates a vertical rule.
    pub(crate) fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, x, y0, x, y1)
    }

    /// Sets stroke paint and width.
    pub(crate) fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    pub(crate) fn with_class(mut self, class: Option<&'static str>) -> Self {
        self.class = class;
        self
    }

    /// Generates the rule mark.
    pub(crate) fn mark(&self) -> Mark {
        let mut p = BezPath::new();
        p.move_to((self.x0, self.y0));
        p.line_to((self.x1, self.y1));
        let mut b = Mark::builder(self.id)
            .path()
            .shape(p)
            .z_index(self.z_index)
            .fill(Color::TRANSPARENT)
            .stroke_brush(self.stroke.clone())
            .stroke_width(self.stroke_width);
        if let Some(class) = self.class {
            b = b.class(class);
        }
        b.build()
    }
}

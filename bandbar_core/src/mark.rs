// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: the retained drawing primitives of a chart.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// Stable identity of a mark within a [`Scene`](crate::Scene).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives the id for the `row`-th mark of a group starting at `base`.
    ///
    /// Groups are expected to be spaced far enough apart that rows never collide.
    pub fn for_row(base: u64, row: usize) -> Self {
        Self(base.wrapping_add(row as u64))
    }
}

/// The kind of primitive a mark draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle.
    Rect,
    /// A single line of unshaped text.
    Text,
    /// An arbitrary path.
    Path,
}

/// Horizontal text anchor (SVG `text-anchor`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor position.
    Start,
    /// Text is centered on the anchor position.
    Middle,
    /// Text ends at the anchor position.
    End,
}

/// Vertical text baseline (SVG `dominant-baseline`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The alphabetic baseline.
    Alphabetic,
    /// The middle of the em box.
    Middle,
    /// The hanging baseline (text hangs below the position).
    Hanging,
    /// The ideographic baseline.
    Ideographic,
}

/// Resolved rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Resolved text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content. May be empty; an empty text mark still exists in the scene.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Baseline shift in em units (SVG `dy`).
    pub dy_em: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Resolved path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables stroking.
    pub stroke_width: f64,
}

/// Resolved geometry and paint of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle.
    Rect(RectPayload),
    /// A text run.
    Text(TextPayload),
    /// A path.
    Path(PathPayload),
}

impl MarkPayload {
    /// Returns the payload's kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Returns geometric bounds, if known without text metrics.
    ///
    /// Text marks return `None`: their extent depends on shaping.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Text(_) => None,
            Self::Path(p) => Some(p.path.bounding_box()),
        }
    }
}

/// A single retained mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Paint order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Optional style class (emitted as an SVG/HTML `class`).
    pub class: Option<&'static str>,
    /// Whether pointer hit testing considers this mark.
    pub interactive: bool,
    /// Resolved geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark. The builder defaults to a rectangle.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the mark's kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns the mark's bounds (see [`MarkPayload::bounds`]).
    pub fn bounds(&self) -> Option<Rect> {
        self.payload.bounds()
    }
}

/// Builder for [`Mark`].
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    kind: MarkKind,
    z_index: i32,
    class: Option<&'static str>,
    interactive: bool,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    text: String,
    font_size: f64,
    dy_em: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    path: BezPath,
    fill: Brush,
    stroke: Brush,
    stroke_width: f64,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            kind: MarkKind::Rect,
            z_index: 0,
            class: None,
            interactive: false,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            text: String::new(),
            font_size: 12.0,
            dy_em: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            path: BezPath::new(),
            fill: Brush::default(),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
        }
    }

    /// Builds a rectangle mark.
    pub fn rect(mut self) -> Self {
        self.kind = MarkKind::Rect;
        self
    }

    /// Builds a text mark.
    pub fn text(mut self) -> Self {
        self.kind = MarkKind::Text;
        self
    }

    /// Builds a path mark.
    pub fn path(mut self) -> Self {
        self.kind = MarkKind::Path;
        self
    }

    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the style class.
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Makes the mark a pointer hit-test target.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Sets x (rect origin or text anchor).
    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Sets y (rect origin or text anchor).
    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Sets the rectangle width.
    pub fn width(mut self, w: f64) -> Self {
        self.w = w;
        self
    }

    /// Sets the rectangle height.
    pub fn height(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Sets text content.
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the baseline shift in em units.
    pub fn dy_em(mut self, dy_em: f64) -> Self {
        self.dy_em = dy_em;
        self
    }

    /// Sets the text anchor.
    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets path geometry.
    pub fn shape(mut self, path: BezPath) -> Self {
        self.path = path;
        self
    }

    /// Sets a solid fill color.
    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Brush::Solid(color);
        self
    }

    /// Sets the fill paint.
    pub fn fill_brush(mut self, brush: impl Into<Brush>) -> Self {
        self.fill = brush.into();
        self
    }

    /// Sets the stroke paint.
    pub fn stroke_brush(mut self, brush: impl Into<Brush>) -> Self {
        self.stroke = brush.into();
        self
    }

    /// Sets the stroke width.
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        let payload = match self.kind {
            MarkKind::Rect => MarkPayload::Rect(RectPayload {
                rect: Rect::new(self.x, self.y, self.x + self.w, self.y + self.h),
                fill: self.fill,
            }),
            MarkKind::Text => MarkPayload::Text(TextPayload {
                pos: Point::new(self.x, self.y),
                text: self.text,
                font_size: self.font_size,
                dy_em: self.dy_em,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill,
            }),
            MarkKind::Path => MarkPayload::Path(PathPayload {
                path: self.path,
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width,
            }),
        };
        Mark {
            id: self.id,
            z_index: self.z_index,
            class: self.class,
            interactive: self.interactive,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn rect_builder_resolves_origin_and_size() {
        let m = Mark::builder(MarkId::from_raw(7))
            .rect()
            .x(10.0)
            .y(20.0)
            .width(30.0)
            .height(5.0)
            .build();
        assert_eq!(m.kind(), MarkKind::Rect);
        assert_eq!(m.bounds(), Some(Rect::new(10.0, 20.0, 40.0, 25.0)));
        assert!(!m.interactive);
    }

    #[test]
    fn text_marks_have_no_bounds() {
        let m = Mark::builder(MarkId::from_raw(1))
            .text()
            .content("")
            .build();
        assert_eq!(m.kind(), MarkKind::Text);
        assert_eq!(m.bounds(), None);
    }

    #[test]
    fn row_ids_are_offsets_from_base() {
        assert_eq!(MarkId::for_row(1000, 3), MarkId(1003));
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark model for `bandbar`.
//!
//! - **Marks** are resolved drawing primitives (rects, text, paths) with stable ids.
//! - A **Scene** is one chart canvas. It is rebuilt wholesale on each render pass and reports
//!   the change as a list of [`MarkDiff`]s for renderers.
//! - The **Overlay** is the page-level layer for floating elements such as tooltips.
//!
//! Rendering backends (SVG, HTML, GPU) consume marks; nothing here draws pixels.

#![no_std]

extern crate alloc;

mod diff;
mod mark;
mod overlay;
mod scene;

pub use diff::MarkDiff;
pub use mark::{
    Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload, TextAnchor,
    TextBaseline, TextPayload,
};
pub use overlay::{ElementId, Fade, Overlay, OverlayElement};
pub use scene::Scene;

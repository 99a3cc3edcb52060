// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene change records consumed by renderers.

extern crate alloc;

use alloc::boxed::Box;

use kurbo::Rect;

use crate::{MarkId, MarkKind, MarkPayload};

/// A single change to the mounted mark set.
///
/// A full rebuild produces an `Exit` for every previously mounted mark followed by an
/// `Enter` for every new one; there is no in-place update.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark was added.
    Enter {
        /// Mark identity.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Paint order.
        z_index: i32,
        /// Style class.
        class: Option<&'static str>,
        /// Bounds, if known.
        bounds: Option<Rect>,
        /// The new payload.
        new: Box<MarkPayload>,
    },
    /// A mark was removed.
    Exit {
        /// Mark identity.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Bounds the mark had, if known.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// Returns the id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Exit { id, .. } => *id,
        }
    }

    /// Returns `true` for [`MarkDiff::Enter`].
    pub fn is_enter(&self) -> bool {
        matches!(self, Self::Enter { .. })
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mounted mark set of one chart canvas.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;

use crate::{Mark, MarkDiff, MarkId};

/// A chart canvas: the set of marks currently mounted.
///
/// The scene is rebuilt wholesale on every render pass. [`Scene::rebuild`] tears down every
/// mounted mark before mounting the next set, so marks from two passes never coexist.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
    generation: u64,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed rebuilds (including clears).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of mounted marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns a mounted mark.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Returns mounted marks in paint order, `(z_index, id)`.
    pub fn marks_sorted(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.values().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Replaces every mounted mark with `marks`.
    ///
    /// Returns exits for all previously mounted marks (in paint order) followed by enters for
    /// the new marks (in the given order). If `marks` repeats an id, the last one wins.
    pub fn rebuild(&mut self, marks: impl IntoIterator<Item = Mark>) -> Vec<MarkDiff> {
        let mut out = self.teardown();

        let mut enters: Vec<MarkDiff> = Vec::new();
        for mark in marks {
            let id = mark.id;
            let diff = MarkDiff::Enter {
                id,
                kind: mark.kind(),
                z_index: mark.z_index,
                class: mark.class,
                bounds: mark.bounds(),
                new: Box::new(mark.payload.clone()),
            };
            if self.marks.insert(id, mark).is_some() {
                enters.retain(|d| d.id() != id);
            }
            enters.push(diff);
        }

        out.extend(enters);
        self.generation += 1;
        out
    }

    /// Removes every mounted mark.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        let out = self.teardown();
        self.generation += 1;
        out
    }

    /// Returns the topmost interactive mark whose bounds contain `point`.
    pub fn hit_test(&self, point: Point) -> Option<MarkId> {
        self.marks
            .values()
            .filter(|m| m.interactive)
            .filter(|m| m.bounds().is_some_and(|b| b.contains(point)))
            .max_by_key(|m| (m.z_index, m.id))
            .map(|m| m.id)
    }

    fn teardown(&mut self) -> Vec<MarkDiff> {
        let mut old: Vec<Mark> = self.marks.drain().map(|(_, m)| m).collect();
        old.sort_by_key(|m| (m.z_index, m.id));
        old.into_iter()
            .map(|m| MarkDiff::Exit {
                id: m.id,
                kind: m.kind(),
                bounds: m.bounds(),
            })
            .collect()
    }
}

// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating elements positioned in page coordinates.
//!
//! The overlay stands in for the document body: elements appended here live outside any
//! chart canvas, are positioned absolutely, and may fade their opacity over time.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use smallvec::SmallVec;

/// Identity of an overlay element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u64);

/// A running opacity transition.
///
/// Progress follows cubic-in-out easing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    /// Opacity at the start of the transition.
    pub from: f64,
    /// Opacity at the end of the transition.
    pub to: f64,
    /// Duration in milliseconds.
    pub duration: f64,
    /// Elapsed time in milliseconds.
    pub elapsed: f64,
}

impl Fade {
    /// Returns the eased opacity at the current elapsed time.
    pub fn value(&self) -> f64 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_cubic_in_out(t)
    }

    /// Returns `true` once the elapsed time reaches the duration.
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

fn ease_cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// A floating element (e.g. a tooltip `div`).
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayElement {
    /// Identity.
    pub id: ElementId,
    /// Style class, also used for lookup.
    pub class: &'static str,
    /// Text content.
    pub text: String,
    /// Page-space position of the top-left corner.
    pub pos: Point,
    /// Current opacity.
    pub opacity: f64,
    /// Running opacity transition, if any.
    pub fade: Option<Fade>,
}

impl OverlayElement {
    /// Sets the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Sets the page-space position.
    pub fn set_position(&mut self, pos: Point) {
        self.pos = pos;
    }

    /// Sets opacity immediately, cancelling any running fade.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
        self.fade = None;
    }

    /// Starts a fade from the current opacity to `to` over `duration` milliseconds.
    pub fn fade_to(&mut self, to: f64, duration: f64) {
        self.fade = Some(Fade {
            from: self.opacity,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        });
    }

    fn advance(&mut self, dt: f64) {
        let Some(fade) = &mut self.fade else {
            return;
        };
        fade.elapsed += dt.max(0.0);
        self.opacity = fade.value();
        if fade.is_done() {
            self.fade = None;
        }
    }
}

/// The page-level element layer.
#[derive(Clone, Debug, Default)]
pub struct Overlay {
    elements: Vec<OverlayElement>,
    next_id: u64,
}

impl Overlay {
    /// Creates an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new, fully transparent element with the given class.
    pub fn append(&mut self, class: &'static str) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.push(OverlayElement {
            id,
            class,
            text: String::new(),
            pos: Point::ZERO,
            opacity: 0.0,
            fade: None,
        });
        id
    }

    /// Returns an element.
    pub fn get(&self, id: ElementId) -> Option<&OverlayElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Returns an element for mutation.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut OverlayElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Removes an element. Returns `false` if it was not present.
    pub fn remove(&mut self, id: ElementId) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        self.elements.len() != before
    }

    /// Removes every element with `class`, returning the removed ids.
    pub fn remove_by_class(&mut self, class: &str) -> SmallVec<[ElementId; 2]> {
        let removed: SmallVec<[ElementId; 2]> = self
            .elements
            .iter()
            .filter(|e| e.class == class)
            .map(|e| e.id)
            .collect();
        self.elements.retain(|e| e.class != class);
        removed
    }

    /// Counts elements with `class`.
    pub fn count_by_class(&self, class: &str) -> usize {
        self.elements.iter().filter(|e| e.class == class).count()
    }

    /// Iterates elements in append order.
    pub fn iter(&self) -> impl Iterator<Item = &OverlayElement> {
        self.elements.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Advances running fades by `dt` milliseconds.
    pub fn advance(&mut self, dt: f64) {
        for e in &mut self.elements {
            e.advance(dt);
        }
    }

    /// Returns `true` while any fade is running.
    pub fn is_animating(&self) -> bool {
        self.elements.iter().any(|e| e.fade.is_some())
    }
}

// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call-recording canvas test double.
//!
//! [`RecordingCanvas`] implements [`Canvas`] by appending one
//! [`CanvasCall`] per method call, so tests can assert the *exact*
//! sequence a compositor produced: whether a save/restore pair was issued
//! at all, what matrix was concatenated, which rectangles a readback draw
//! mapped to, and so on. Call sequences are `PartialEq`, which also makes
//! idempotence checks a single slice comparison.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, Rect};

use strata_core::canvas::Canvas;
use strata_core::layer::ImageId;
use strata_core::paint::{Paint, SrcConstraint};

/// One recorded [`Canvas`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasCall {
    /// A transform-stack push.
    Save,
    /// A transform concatenation.
    Concat(Affine),
    /// A transform-stack pop.
    Restore,
    /// A whole-image draw at the origin.
    DrawImage {
        /// The image drawn.
        image: ImageId,
        /// The paint it was drawn with.
        paint: Paint,
    },
    /// A sub-rectangle image draw.
    DrawImageRect {
        /// The image drawn.
        image: ImageId,
        /// Source sub-rectangle.
        src: Rect,
        /// Destination rectangle.
        dst: Rect,
        /// The paint it was drawn with.
        paint: Paint,
        /// Edge-sampling constraint.
        constraint: SrcConstraint,
    },
}

/// A [`Canvas`] that records every call and draws nothing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    calls: Vec<CanvasCall>,
}

impl RecordingCanvas {
    /// Creates an empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded calls, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[CanvasCall] {
        &self.calls
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Returns how many of the recorded calls are transform-stack
    /// operations (save, concat, restore).
    #[must_use]
    pub fn transform_ops(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    CanvasCall::Save | CanvasCall::Concat(_) | CanvasCall::Restore
                )
            })
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.calls.push(CanvasCall::Save);
    }

    fn concat(&mut self, matrix: Affine) {
        self.calls.push(CanvasCall::Concat(matrix));
    }

    fn restore(&mut self) {
        self.calls.push(CanvasCall::Restore);
    }

    fn draw_image(&mut self, image: ImageId, paint: &Paint) {
        self.calls.push(CanvasCall::DrawImage {
            image,
            paint: *paint,
        });
    }

    fn draw_image_rect(
        &mut self,
        image: ImageId,
        src: Rect,
        dst: Rect,
        paint: &Paint,
        constraint: SrcConstraint,
    ) {
        self.calls.push(CanvasCall::DrawImageRect {
            image,
            src,
            dst,
            paint: *paint,
            constraint,
        });
    }
}

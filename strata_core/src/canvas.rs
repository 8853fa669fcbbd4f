// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Destination-surface contract.
//!
//! The compositor never talks to a concrete surface. It draws through the
//! [`Canvas`] trait, which captures the exact capability set it needs from
//! a destination:
//!
//! - **Transform stack** — [`save`](Canvas::save),
//!   [`concat`](Canvas::concat), [`restore`](Canvas::restore). The
//!   compositor's discipline is strict: every `save` it issues is matched
//!   by exactly one `restore` before the draw call returns, so a surface
//!   never observes leaked transform state.
//!
//! - **Drawing primitives** — [`draw_image`](Canvas::draw_image) (whole
//!   image at the origin) and [`draw_image_rect`](Canvas::draw_image_rect)
//!   (sub-region mapped into a destination rectangle).
//!
//! Production backends (GPU rasterizers, platform compositors) and test
//! doubles both implement this trait; `strata_harness` provides a
//! call-recording implementation for exact-sequence assertions.
//!
//! # Threading
//!
//! A canvas's transform stack is shared mutable state. Draw operations must
//! stay on the thread that owns the surface; the trait provides no internal
//! locking.

use core::fmt;

use kurbo::{Affine, Rect};

use crate::layer::ImageId;
use crate::paint::{Paint, SrcConstraint};

/// An opaque handle to a rendering context.
///
/// Contexts are acquired and validated externally; the compositor only
/// checks for presence (`Option<ContextHandle>`, where `None` models a
/// null handle) before drawing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextHandle(pub u64);

impl fmt::Debug for ContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContextHandle({})", self.0)
    }
}

/// A transform-stack-capable drawing sink.
pub trait Canvas {
    /// Pushes the current transform onto the surface's transform stack.
    fn save(&mut self);

    /// Multiplies `matrix` into the surface's current transform.
    fn concat(&mut self, matrix: Affine);

    /// Pops the transform stack, undoing everything since the matching
    /// [`save`](Self::save).
    fn restore(&mut self);

    /// Draws the whole image at the origin of the current coordinate space.
    fn draw_image(&mut self, image: ImageId, paint: &Paint);

    /// Draws the `src` sub-rectangle of `image` into the `dst` rectangle,
    /// both in the current coordinate space.
    fn draw_image_rect(
        &mut self,
        image: ImageId,
        src: Rect,
        dst: Rect,
        paint: &Paint,
        constraint: SrcConstraint,
    );
}

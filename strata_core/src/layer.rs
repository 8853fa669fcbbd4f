// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-draw layer view and its content handles.

use core::fmt;

use kurbo::Affine;

use crate::paint::BlendMode;

/// An opaque handle to a backing image.
///
/// Images are produced and managed externally (e.g. by an offscreen render
/// pass or a GPU backend). The compositor only forwards the handle to the
/// canvas; it never dereferences it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

impl fmt::Debug for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageId({})", self.0)
    }
}

/// An opaque handle to a color filter.
///
/// The layer producer composes the filter (including any color-space
/// conversion) before handing it out; the compositor passes it through to
/// the paint unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorFilterId(pub u64);

impl fmt::Debug for ColorFilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorFilterId({})", self.0)
    }
}

/// Everything the compositor reads from one layer during one draw call.
///
/// A `Layer` is a borrowed view: the producer owns the underlying resource
/// and keeps it immutable for the duration of the call. [`image`] may be
/// `None` at any instant — the offscreen render simply has not produced
/// content yet — in which case the compositor draws nothing.
///
/// [`width`] and [`height`] must be non-zero whenever [`image`] is present;
/// the producer guarantees this.
///
/// [`image`]: Self::image
/// [`width`]: Self::width
/// [`height`]: Self::height
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// Placement transform: positions the layer within its parent space.
    pub transform: Affine,
    /// Texture transform: maps normalized texture-sampling coordinates to
    /// the layer's pixel grid, in the texture source's origin convention.
    pub texture_transform: Affine,
    /// Backing image, if the offscreen render has produced one.
    pub image: Option<ImageId>,
    /// Layer width in pixels.
    pub width: u32,
    /// Layer height in pixels.
    pub height: u32,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f32,
    /// Blend mode for compositing onto the destination.
    pub blend_mode: BlendMode,
    /// Producer-composed color filter, if any.
    pub color_filter: Option<ColorFilterId>,
    /// Requests bilinear sampling instead of the default nearest.
    pub force_filter: bool,
}

impl Layer {
    /// Creates a layer view with identity transforms, full opacity, default
    /// blending, and no content.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            transform: Affine::IDENTITY,
            texture_transform: Affine::IDENTITY,
            image: None,
            width,
            height,
            opacity: 1.0,
            blend_mode: BlendMode::SourceOver,
            color_filter: None,
            force_filter: false,
        }
    }
}

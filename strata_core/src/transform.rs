// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2-D transform helpers for the compositor.
//!
//! Layer placement and texture-coordinate mapping are both plain 2-D affine
//! transforms, so this module works directly on [`kurbo::Affine`] rather
//! than introducing a matrix type of its own. It provides the two pieces of
//! matrix plumbing the compositor needs beyond ordinary composition:
//! re-basing a texture transform into the compositor's orientation and
//! scale, and inversion that degrades instead of failing.

use kurbo::Affine;

/// Vertical flip of the unit square, `(x, y) ↦ (x, 1 - y)`.
///
/// Texture sources hand out transforms over a normalized coordinate space
/// whose vertical origin is the opposite of the compositor's. Pre-applying
/// this flip to the texture transform corrects the mismatch once, for all
/// call sites.
// TODO: drop the flip (and the inversion it forces on the texture matrix)
// once texture sources can deliver transforms in the compositor's origin
// convention directly.
pub const TEXTURE_FLIP: Affine = Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, 1.0]);

/// Re-bases a texture transform from normalized, source-oriented texture
/// coordinates to texel coordinates in the compositor's orientation.
///
/// The transform is pre-flipped by [`TEXTURE_FLIP`] and conjugated by the
/// per-axis pixel scale: normalize by `(1/width, 1/height)`, apply the
/// flipped transform, re-expand by `(width, height)`. The result still maps
/// *into* sampling space; the compositor inverts it (via
/// [`invert_or_keep`]) to obtain the forward texel mapping.
///
/// `width` and `height` must be non-zero; the layer producer guarantees
/// this whenever a backing image exists.
#[must_use]
pub fn rebase_texture_transform(tex: Affine, width: u32, height: u32) -> Affine {
    let w = f64::from(width);
    let h = f64::from(height);
    Affine::scale_non_uniform(w, h) * tex * TEXTURE_FLIP * Affine::scale_non_uniform(1.0 / w, 1.0 / h)
}

/// Inverts `m`, falling back to `m` itself when it is not invertible.
///
/// Returns the (possibly fallback) matrix and whether inversion succeeded.
/// A zero or non-finite determinant counts as non-invertible. Degenerate
/// transforms produce visually wrong output, but a draw through them is
/// well defined, so callers proceed with the fallback rather than abort.
#[must_use]
pub fn invert_or_keep(m: Affine) -> (Affine, bool) {
    let det = m.determinant();
    if det == 0.0 || !det.is_finite() {
        (m, false)
    } else {
        (m.inverse(), true)
    }
}

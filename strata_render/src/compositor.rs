// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-layer draw: transform composition and the one draw call.
//!
//! Drawing a layer combines three independent mappings into one matrix:
//!
//! 1. **Texture matrix** — The layer's texture transform, re-based into
//!    the compositor's orientation and pixel scale
//!    ([`rebase_texture_transform`]) and then inverted to give the forward
//!    texel mapping. Inversion degrades instead of failing
//!    ([`invert_or_keep`]).
//! 2. **Placement** — The layer's own transform, concatenated after the
//!    texture matrix. Skipped for readback draws, which want raw texel
//!    content.
//! 3. **Destination remap** — For readback, the caller's destination
//!    rectangle and the full image rectangle are both mapped through the
//!    inverse of the final matrix, cancelling it out at the surface.
//!
//! The final matrix is applied to the canvas only for the duration of the
//! draw, through a scope guard that restores on every exit path. An exactly
//! identity matrix skips the save/restore pair entirely — the canvas
//! observes no transform-stack traffic at all in that case.

use kurbo::{Affine, Rect};

use strata_core::canvas::{Canvas, ContextHandle};
use strata_core::layer::Layer;
use strata_core::paint::{Paint, SrcConstraint};
use strata_core::transform::{invert_or_keep, rebase_texture_transform};

/// A producer whose backing layer may not exist yet.
///
/// Offscreen render passes publish their output through this trait: a
/// per-frame drawable asks for the backing layer at draw time and simply
/// gets `None` until the first offscreen render has completed.
pub trait LayerSource {
    /// Returns the current backing layer, if one has been produced.
    fn backing_layer(&self) -> Option<&Layer>;
}

/// Draws `source`'s backing layer with its own placement transform.
///
/// This is the ordinary per-frame entry point. Returns `false` when the
/// source has no backing layer yet; otherwise forwards to [`draw_layer`]
/// with no destination rectangle.
pub fn draw_backing_layer(
    context: Option<ContextHandle>,
    canvas: &mut dyn Canvas,
    source: &dyn LayerSource,
) -> bool {
    match source.backing_layer() {
        Some(layer) => draw_layer(context, canvas, layer, None),
        None => false,
    }
}

/// Draws one layer onto `canvas`.
///
/// With `dst_rect` absent, the layer is drawn under its own placement
/// transform. With `dst_rect` present (a *readback*), placement is
/// deliberately excluded and the layer's raw texel content is mapped into
/// the given rectangle in surface coordinates.
///
/// The return value is a presence signal, not a draw status: `true` iff
/// the layer had a backing image. A missing context or missing image
/// leaves the canvas completely untouched.
pub fn draw_layer(
    context: Option<ContextHandle>,
    canvas: &mut dyn Canvas,
    layer: &Layer,
    dst_rect: Option<Rect>,
) -> bool {
    if context.is_none() {
        if cfg!(debug_assertions) {
            log::debug!("attempting to draw a layer into an unsupported target");
        }
        return false;
    }
    let Some(image) = layer.image else {
        return false;
    };

    let (texture_matrix, _) = invert_or_keep(rebase_texture_transform(
        layer.texture_transform,
        layer.width,
        layer.height,
    ));

    // Readback wants the untransformed texel content, so the placement
    // transform is left out of the final matrix.
    let matrix = if dst_rect.is_some() {
        texture_matrix
    } else {
        layer.transform * texture_matrix
    };

    let paint = Paint::for_layer(layer);

    let mut scope = TransformScope::apply(canvas, matrix);
    if let Some(dst) = dst_rect {
        let (matrix_inv, _) = invert_or_keep(matrix);
        let src = Rect::new(0.0, 0.0, f64::from(layer.width), f64::from(layer.height));
        scope.canvas().draw_image_rect(
            image,
            matrix_inv.transform_rect_bbox(src),
            matrix_inv.transform_rect_bbox(dst),
            &paint,
            SrcConstraint::Fast,
        );
    } else {
        scope.canvas().draw_image(image, &paint);
    }

    true
}

/// Scoped concatenation onto a canvas's transform stack.
///
/// Acquired with the final matrix; saves and concatenates only when the
/// matrix is not exactly the identity, and the matching restore runs on
/// drop, on every exit path. An identity matrix produces no
/// transform-stack calls at all.
struct TransformScope<'a> {
    canvas: &'a mut dyn Canvas,
    saved: bool,
}

impl<'a> TransformScope<'a> {
    fn apply(canvas: &'a mut dyn Canvas, matrix: Affine) -> Self {
        let saved = matrix != Affine::IDENTITY;
        if saved {
            canvas.save();
            canvas.concat(matrix);
        }
        Self { canvas, saved }
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut *self.canvas
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        if self.saved {
            self.canvas.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kurbo::Point;
    use strata_core::layer::ImageId;
    use strata_core::paint::Sampling;
    use strata_core::transform::TEXTURE_FLIP;
    use strata_harness::{CanvasCall, RecordingCanvas};

    const CONTEXT: Option<ContextHandle> = Some(ContextHandle(1));

    fn layer_with_image() -> Layer {
        let mut layer = Layer::new(100, 50);
        layer.image = Some(ImageId(7));
        layer
    }

    #[test]
    fn missing_image_touches_nothing() {
        let mut canvas = RecordingCanvas::new();
        let layer = Layer::new(100, 50);
        assert!(!draw_layer(CONTEXT, &mut canvas, &layer, None));
        assert!(canvas.calls().is_empty());
    }

    #[test]
    fn missing_context_touches_nothing() {
        let mut canvas = RecordingCanvas::new();
        let layer = layer_with_image();
        assert!(!draw_layer(None, &mut canvas, &layer, None));
        assert!(canvas.calls().is_empty());
    }

    #[test]
    fn identity_final_matrix_skips_save_restore() {
        // A texture transform that already flips vertically cancels the
        // origin correction exactly, leaving an identity final matrix.
        let mut canvas = RecordingCanvas::new();
        let mut layer = layer_with_image();
        layer.texture_transform = TEXTURE_FLIP;

        assert!(draw_layer(CONTEXT, &mut canvas, &layer, None));
        assert_eq!(canvas.transform_ops(), 0);
        assert_eq!(
            canvas.calls(),
            &[CanvasCall::DrawImage {
                image: ImageId(7),
                paint: Paint::for_layer(&layer),
            }]
        );
    }

    #[test]
    fn non_identity_matrix_brackets_the_draw() {
        let mut canvas = RecordingCanvas::new();
        let layer = layer_with_image();

        assert!(draw_layer(CONTEXT, &mut canvas, &layer, None));
        let calls = canvas.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], CanvasCall::Save);
        assert!(matches!(calls[1], CanvasCall::Concat(_)));
        assert!(matches!(calls[2], CanvasCall::DrawImage { .. }));
        assert_eq!(calls[3], CanvasCall::Restore);
    }

    #[test]
    fn concatenated_matrix_carries_the_flip() {
        // Identity texture transform on a 100x50 layer re-bases to the
        // pixel-space flip (x, y) -> (x, 50 - y).
        let mut canvas = RecordingCanvas::new();
        let layer = layer_with_image();
        assert!(draw_layer(CONTEXT, &mut canvas, &layer, None));

        let CanvasCall::Concat(m) = canvas.calls()[1] else {
            panic!("expected a concat as the second call");
        };
        assert_eq!(m * Point::new(0.0, 0.0), Point::new(0.0, 50.0));
        assert_ne!(m, Affine::IDENTITY);
    }

    #[test]
    fn repeated_draws_are_identical() {
        let mut canvas = RecordingCanvas::new();
        let mut layer = layer_with_image();
        layer.transform = Affine::rotate(0.3) * Affine::translate((2.0, 4.0));

        assert!(draw_layer(CONTEXT, &mut canvas, &layer, None));
        let first = canvas.calls().len();
        assert!(draw_layer(CONTEXT, &mut canvas, &layer, None));

        let (a, b) = canvas.calls().split_at(first);
        assert_eq!(a, b);
    }

    #[test]
    fn singular_texture_transform_still_draws() {
        let mut canvas = RecordingCanvas::new();
        let mut layer = layer_with_image();
        layer.texture_transform = Affine::scale_non_uniform(0.0, 1.0);

        assert!(draw_layer(CONTEXT, &mut canvas, &layer, None));
        assert!(
            canvas
                .calls()
                .iter()
                .any(|c| matches!(c, CanvasCall::DrawImage { .. })),
            "degenerate matrices must degrade, not abort"
        );
    }

    #[test]
    fn paint_reflects_layer_blend_state() {
        let mut canvas = RecordingCanvas::new();
        let mut layer = layer_with_image();
        layer.opacity = 0.25;
        layer.force_filter = true;

        assert!(draw_layer(CONTEXT, &mut canvas, &layer, None));
        let Some(CanvasCall::DrawImage { paint, .. }) = canvas
            .calls()
            .iter()
            .find(|c| matches!(c, CanvasCall::DrawImage { .. }))
        else {
            panic!("expected a whole-image draw");
        };
        assert_eq!(paint.alpha, 0.25);
        assert_eq!(paint.sampling, Sampling::Linear);
    }

    #[test]
    fn readback_excludes_placement_transform() {
        let dst = Rect::new(10.0, 10.0, 20.0, 20.0);

        let mut moved = RecordingCanvas::new();
        let mut layer = layer_with_image();
        layer.transform = Affine::translate((7.0, 3.0));
        assert!(draw_layer(CONTEXT, &mut moved, &layer, Some(dst)));

        let mut unmoved = RecordingCanvas::new();
        let plain = layer_with_image();
        assert!(draw_layer(CONTEXT, &mut unmoved, &plain, Some(dst)));

        // Placement must not influence a readback...
        assert_eq!(moved.calls(), unmoved.calls());

        // ...but it does influence an ordinary draw.
        let mut moved_plain = RecordingCanvas::new();
        assert!(draw_layer(CONTEXT, &mut moved_plain, &layer, None));
        let mut unmoved_plain = RecordingCanvas::new();
        assert!(draw_layer(CONTEXT, &mut unmoved_plain, &plain, None));
        assert_ne!(moved_plain.calls(), unmoved_plain.calls());
    }

    #[test]
    fn readback_maps_rects_through_the_inverse() {
        // Final matrix is the pixel-space flip (x, y) -> (x, 50 - y), which
        // is its own inverse.
        let mut canvas = RecordingCanvas::new();
        let layer = layer_with_image();
        let dst = Rect::new(10.0, 10.0, 20.0, 20.0);

        assert!(draw_layer(CONTEXT, &mut canvas, &layer, Some(dst)));
        let Some(CanvasCall::DrawImageRect {
            src,
            dst: mapped_dst,
            constraint,
            ..
        }) = canvas
            .calls()
            .iter()
            .find(|c| matches!(c, CanvasCall::DrawImageRect { .. }))
        else {
            panic!("expected a rect draw for readback");
        };
        assert_eq!(*src, Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(*mapped_dst, Rect::new(10.0, 30.0, 20.0, 40.0));
        assert_eq!(*constraint, SrcConstraint::Fast);
    }

    #[test]
    fn readback_with_identity_matrix_passes_rects_through() {
        let mut canvas = RecordingCanvas::new();
        let mut layer = layer_with_image();
        layer.texture_transform = TEXTURE_FLIP;
        let dst = Rect::new(1.0, 2.0, 3.0, 4.0);

        assert!(draw_layer(CONTEXT, &mut canvas, &layer, Some(dst)));
        assert_eq!(
            canvas.calls(),
            &[CanvasCall::DrawImageRect {
                image: ImageId(7),
                src: Rect::new(0.0, 0.0, 100.0, 50.0),
                dst,
                paint: Paint::for_layer(&layer),
                constraint: SrcConstraint::Fast,
            }]
        );
    }

    struct StubSource {
        layer: Option<Layer>,
    }

    impl LayerSource for StubSource {
        fn backing_layer(&self) -> Option<&Layer> {
            self.layer.as_ref()
        }
    }

    #[test]
    fn backing_layer_entry_point_forwards() {
        let mut canvas = RecordingCanvas::new();
        let source = StubSource { layer: None };
        assert!(!draw_backing_layer(CONTEXT, &mut canvas, &source));
        assert!(canvas.calls().is_empty());

        let source = StubSource {
            layer: Some(layer_with_image()),
        };
        assert!(draw_backing_layer(CONTEXT, &mut canvas, &source));
        assert!(
            canvas
                .calls()
                .iter()
                .any(|c| matches!(c, CanvasCall::DrawImage { .. }))
        );
    }
}

// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-state descriptor and compositing enums.

use crate::layer::{ColorFilterId, Layer};

/// Blend mode for compositing a draw onto the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Standard source-over alpha compositing.
    #[default]
    SourceOver,
    /// Multiply blend.
    Multiply,
    /// Screen blend.
    Screen,
}

/// Image sampling quality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sampling {
    /// Nearest-neighbor sampling.
    #[default]
    Nearest,
    /// Bilinear filtering.
    Linear,
}

/// Edge behavior when drawing a sub-rectangle of an image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SrcConstraint {
    /// Sampling never reads outside the source rectangle.
    #[default]
    Strict,
    /// Performance-biased: sampling may clamp or approximate edge texels.
    Fast,
}

/// Draw state applied to one image draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    /// Alpha multiplier in `0.0..=1.0`.
    pub alpha: f32,
    /// Blend mode.
    pub blend_mode: BlendMode,
    /// Color filter handle, if any.
    pub color_filter: Option<ColorFilterId>,
    /// Sampling quality.
    pub sampling: Sampling,
}

impl Paint {
    /// Builds the paint for drawing `layer`: opacity, blend mode, and color
    /// filter are copied through, and the forced-filter flag selects
    /// bilinear sampling over the default nearest.
    #[must_use]
    pub const fn for_layer(layer: &Layer) -> Self {
        Self {
            alpha: layer.opacity,
            blend_mode: layer.blend_mode,
            color_filter: layer.color_filter,
            sampling: if layer.force_filter {
                Sampling::Linear
            } else {
                Sampling::Nearest
            },
        }
    }
}

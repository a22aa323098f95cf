//! Effect pipeline: recompute the composited result from a base image.
//!
//! ## Stage Order
//! 1. Box blur (skipped when the radius is 0)
//! 2. Rotation (skipped at 0°)
//! 3. Color filter (skipped for `FilterKind::None`)
//!
//! The order matters: blur's black border and rotation's clipping both
//! depend on pixel positions, so swapping stages changes the output.

use crate::buffer::PixelBuffer;
use crate::filters::{apply_color_filter, box_blur, rotate, InterpolationFilter};
use crate::{EffectParameters, FilterKind, Rotation};

/// Run all effects over `base` with nearest-neighbour rotation.
///
/// The input is never modified; the returned buffer is a fresh value.
pub fn apply_effects(base: &PixelBuffer, params: &EffectParameters) -> PixelBuffer {
    apply_effects_with(base, params, InterpolationFilter::Nearest)
}

/// Run all effects over `base`, resampling rotations with `filter`.
pub fn apply_effects_with(
    base: &PixelBuffer,
    params: &EffectParameters,
    filter: InterpolationFilter,
) -> PixelBuffer {
    let mut result = base.clone();

    if params.blur_radius > 0 {
        result = box_blur(&result, params.blur_radius as u32);
    }

    if params.rotation != Rotation::Deg0 {
        result = rotate(&result, params.rotation.degrees() as f64, filter);
    }

    if params.filter != FilterKind::None {
        result = apply_color_filter(&result, params.filter);
    }

    result
}

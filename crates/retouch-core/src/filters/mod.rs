//! Filter operators.
//!
//! Every operator is a pure function from one [`PixelBuffer`](crate::PixelBuffer)
//! to a new one; inputs are never mutated. The effect pipeline chains them
//! in a fixed order:
//!
//! 1. Box blur
//! 2. Rotation
//! 3. Color filter (grayscale, sepia, negative, high contrast)

mod blur;
mod color;
mod rotation;

pub use blur::box_blur;
pub use color::{
    apply_color_filter, clamp, grayscale, high_contrast, negative, sepia, HIGH_CONTRAST_FACTOR,
};
pub use rotation::{rotate, InterpolationFilter};

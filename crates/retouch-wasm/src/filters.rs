//! WASM bindings for the individual filter operators and the pipeline.
//!
//! These are stateless: each call returns a new image and leaves the input
//! untouched. Use `JsEditSession` when undo is needed.

use crate::params::JsEffectParameters;
use crate::types::JsPixelBuffer;
use retouch_core::filters::{apply_color_filter, box_blur, rotate};
use retouch_core::{
    apply_effects as core_apply_effects, FilterKind, InterpolationFilter, ParamsError,
    MAX_BLUR_RADIUS,
};
use wasm_bindgen::prelude::*;

/// Apply a box blur with the given radius (0 to 10).
///
/// Pixels closer than `radius` to an edge are left black.
#[wasm_bindgen]
pub fn apply_blur(image: &JsPixelBuffer, radius: u8) -> Result<JsPixelBuffer, JsValue> {
    blur_image(image, radius).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rotate an image clockwise about its center.
///
/// The canvas keeps its size; uncovered areas are black.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Clockwise rotation angle in degrees
/// * `use_bilinear` - Bilinear sampling, otherwise nearest neighbour
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = apply_rotation(sourceImage, 90.0, false);
/// ```
#[wasm_bindgen]
pub fn apply_rotation(image: &JsPixelBuffer, angle_degrees: f64, use_bilinear: bool) -> JsPixelBuffer {
    let filter = if use_bilinear {
        InterpolationFilter::Bilinear
    } else {
        InterpolationFilter::Nearest
    };
    JsPixelBuffer::from_buffer(rotate(image.as_buffer(), angle_degrees, filter))
}

/// Apply a color filter by label ("Grayscale", "Sepia", "Negative",
/// "High Contrast" or "None").
#[wasm_bindgen]
pub fn apply_filter(image: &JsPixelBuffer, name: &str) -> Result<JsPixelBuffer, JsValue> {
    let kind = name
        .parse::<FilterKind>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(filter_image(image, kind))
}

/// Run the full blur, rotate, filter pipeline without touching any session.
#[wasm_bindgen]
pub fn apply_effects(
    image: &JsPixelBuffer,
    params: &JsEffectParameters,
) -> Result<JsPixelBuffer, JsValue> {
    params
        .inner()
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsPixelBuffer::from_buffer(core_apply_effects(
        image.as_buffer(),
        params.inner(),
    )))
}

fn blur_image(image: &JsPixelBuffer, radius: u8) -> Result<JsPixelBuffer, ParamsError> {
    if radius > MAX_BLUR_RADIUS {
        return Err(ParamsError::BlurRadiusOutOfRange(radius));
    }
    Ok(JsPixelBuffer::from_buffer(box_blur(
        image.as_buffer(),
        radius as u32,
    )))
}

fn filter_image(image: &JsPixelBuffer, kind: FilterKind) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(apply_color_filter(image.as_buffer(), kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::{PixelBuffer, Rgb};

    fn test_image(width: u32, height: u32) -> JsPixelBuffer {
        let pixels: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsPixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_blur_zero_radius_no_change() {
        let img = test_image(10, 10);
        let result = apply_blur(&img, 0).unwrap();
        assert_eq!(result.pixels(), img.pixels());
    }

    #[test]
    fn test_blur_black_border() {
        let img = JsPixelBuffer::from_buffer(PixelBuffer::filled(10, 10, Rgb::WHITE));
        let result = apply_blur(&img, 2).unwrap();
        let pixels = result.pixels();
        assert_eq!(&pixels[..3], &[0, 0, 0]);
        let center = ((5 * 10 + 5) * 3) as usize;
        assert_eq!(&pixels[center..center + 3], &[255, 255, 255]);
    }

    #[test]
    fn test_blur_radius_limit() {
        let img = test_image(30, 30);
        assert!(blur_image(&img, MAX_BLUR_RADIUS).is_ok());
        assert_eq!(
            blur_image(&img, MAX_BLUR_RADIUS + 1).err(),
            Some(ParamsError::BlurRadiusOutOfRange(11))
        );
    }

    #[test]
    fn test_rotation_keeps_dimensions() {
        let img = test_image(40, 20);
        let result = apply_rotation(&img, 90.0, false);
        assert_eq!(result.width(), 40);
        assert_eq!(result.height(), 20);
    }

    #[test]
    fn test_rotation_full_turn() {
        let img = test_image(16, 16);
        let result = apply_rotation(&img, 360.0, false);
        assert_eq!(result.pixels(), img.pixels());
    }

    #[test]
    fn test_rotation_nearest_vs_bilinear() {
        let img = test_image(20, 20);
        let nearest = apply_rotation(&img, 30.0, false);
        let bilinear = apply_rotation(&img, 30.0, true);
        assert_eq!(nearest.width(), bilinear.width());
        assert_eq!(nearest.height(), bilinear.height());
    }

    #[test]
    fn test_filter_negative() {
        let img = JsPixelBuffer::from_buffer(PixelBuffer::filled(2, 2, Rgb::new(10, 20, 30)));
        let result = apply_filter(&img, "Negative").unwrap();
        assert_eq!(&result.pixels()[..3], &[245, 235, 225]);
    }

    #[test]
    fn test_filter_none_is_identity() {
        let img = test_image(5, 5);
        let result = apply_filter(&img, "none").unwrap();
        assert_eq!(result.pixels(), img.pixels());
    }

    #[test]
    fn test_apply_effects_identity() {
        let img = test_image(8, 8);
        let result = apply_effects(&img, &JsEffectParameters::new()).unwrap();
        assert_eq!(result.pixels(), img.pixels());
    }

    #[test]
    fn test_apply_effects_filter_only() {
        let img = test_image(8, 8);
        let mut params = JsEffectParameters::new();
        params.set_filter("Grayscale").unwrap();
        let result = apply_effects(&img, &params).unwrap();
        assert_eq!(result.pixels(), filter_image(&img, FilterKind::Grayscale).pixels());
    }
}

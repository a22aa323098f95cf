//! Per-pixel color filters.
//!
//! Each filter maps one RGB triple to another independently of its
//! neighbours, so all of them share `PixelBuffer::map_pixels`.

use crate::buffer::PixelBuffer;
use crate::FilterKind;

/// Contrast multiplier used by the high-contrast filter.
pub const HIGH_CONTRAST_FACTOR: f64 = 1.3;

/// Midpoint the contrast filter pivots around.
const CONTRAST_MIDPOINT: f64 = 128.0;

/// Apply the named color filter. `FilterKind::None` returns an identical copy.
pub fn apply_color_filter(image: &PixelBuffer, filter: FilterKind) -> PixelBuffer {
    match filter {
        FilterKind::None => image.clone(),
        FilterKind::Grayscale => grayscale(image),
        FilterKind::Sepia => sepia(image),
        FilterKind::Negative => negative(image),
        FilterKind::HighContrast => high_contrast(image),
    }
}

/// Average the three channels: `(r + g + b) / 3`, truncated.
pub fn grayscale(image: &PixelBuffer) -> PixelBuffer {
    image.map_pixels(|[r, g, b]| {
        let gray = ((r as u16 + g as u16 + b as u16) / 3) as u8;
        [gray, gray, gray]
    })
}

/// Classic sepia tone matrix.
///
/// Each output channel is truncated to an integer before clamping, so pure
/// white saturates at 255 on red and green.
pub fn sepia(image: &PixelBuffer) -> PixelBuffer {
    image.map_pixels(|[r, g, b]| {
        let (r, g, b) = (r as f64, g as f64, b as f64);
        let tr = (0.393 * r + 0.769 * g + 0.189 * b) as i32;
        let tg = (0.349 * r + 0.686 * g + 0.168 * b) as i32;
        let tb = (0.272 * r + 0.534 * g + 0.131 * b) as i32;
        [clamp(tr), clamp(tg), clamp(tb)]
    })
}

/// Invert every channel: `255 - c`.
pub fn negative(image: &PixelBuffer) -> PixelBuffer {
    image.map_pixels(|[r, g, b]| [255 - r, 255 - g, 255 - b])
}

/// Stretch channels away from mid-gray by [`HIGH_CONTRAST_FACTOR`].
///
/// Formula: `clamp(round((c - 128) * 1.3 + 128))`
pub fn high_contrast(image: &PixelBuffer) -> PixelBuffer {
    image.map_pixels(|[r, g, b]| [contrast(r), contrast(g), contrast(b)])
}

#[inline]
fn contrast(channel: u8) -> u8 {
    let v = (channel as f64 - CONTRAST_MIDPOINT) * HIGH_CONTRAST_FACTOR + CONTRAST_MIDPOINT;
    clamp(v.round() as i32)
}

/// Clamp an intermediate channel value into `0..=255`.
#[inline]
pub fn clamp(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================

//! Fixed-canvas rotation about the image center.
//!
//! Unlike a bounding-box rotation, the output keeps the input's width and
//! height. Content rotated past the canvas edges is clipped and the exposed
//! corners are black.
//!
//! # Algorithm
//!
//! Inverse mapping: for each destination pixel center we find the source
//! position it came from and sample it. With `(cx, cy)` the canvas center
//! and θ the clockwise angle (y axis pointing down):
//! ```text
//! src_x = cx + dx * cos(θ) + dy * sin(θ)
//! src_y = cy - dx * sin(θ) + dy * cos(θ)
//! ```
//! where `dx, dy` is the destination pixel center relative to `(cx, cy)`.
//!
//! Multiples of 90° use exact sine and cosine values so quarter turns are
//! pure pixel permutations on square canvases.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// Resampling filter for rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationFilter {
    /// Nearest source pixel. Lossless for quarter turns; used by the pipeline.
    #[default]
    Nearest,
    /// Bilinear blend of the 4 nearest source pixels, smoother for free angles.
    Bilinear,
}

/// Rotate `image` clockwise by `angle_degrees` about its center.
///
/// Any angle is accepted and normalized into `[0, 360)`. The output has the
/// same dimensions as the input.
pub fn rotate(image: &PixelBuffer, angle_degrees: f64, filter: InterpolationFilter) -> PixelBuffer {
    let angle = angle_degrees.rem_euclid(360.0);
    if angle.abs() < f64::EPSILON || image.is_empty() {
        return image.clone();
    }

    let (width, height) = image.dimensions();
    let (sin, cos) = sin_cos_degrees(angle);
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;

    let mut output = PixelBuffer::new(width, height);

    for dst_y in 0..height {
        for dst_x in 0..width {
            let dx = dst_x as f64 + 0.5 - cx;
            let dy = dst_y as f64 + 0.5 - cy;

            let src_x = cx + dx * cos + dy * sin;
            let src_y = cy - dx * sin + dy * cos;

            let sample = match filter {
                InterpolationFilter::Nearest => sample_nearest(image, src_x, src_y),
                InterpolationFilter::Bilinear => sample_bilinear(image, src_x, src_y),
            };
            if let Some(px) = sample {
                output.put_pixel(dst_x, dst_y, px);
            }
        }
    }

    output
}

/// Sine and cosine of an angle in `[0, 360)`, exact for quarter turns.
fn sin_cos_degrees(angle: f64) -> (f64, f64) {
    if angle == 90.0 {
        (1.0, 0.0)
    } else if angle == 180.0 {
        (0.0, -1.0)
    } else if angle == 270.0 {
        (-1.0, 0.0)
    } else {
        angle.to_radians().sin_cos()
    }
}

/// Sample the source pixel containing `(x, y)`, or `None` outside the canvas.
fn sample_nearest(image: &PixelBuffer, x: f64, y: f64) -> Option<[u8; 3]> {
    let (w, h) = (image.width() as f64, image.height() as f64);
    if x < 0.0 || y < 0.0 || x >= w || y >= h {
        return None;
    }
    Some(image.pixel(x.floor() as u32, y.floor() as u32))
}

/// Sample with bilinear interpolation between pixel centers.
///
/// Positions outside the canvas yield `None`; near the edges the missing
/// neighbours are replaced by the nearest valid row or column.
fn sample_bilinear(image: &PixelBuffer, x: f64, y: f64) -> Option<[u8; 3]> {
    let (w, h) = (image.width(), image.height());
    if x < 0.0 || y < 0.0 || x >= w as f64 || y >= h as f64 {
        return None;
    }

    // Shift to pixel-center coordinates
    let fx = (x - 0.5).max(0.0);
    let fy = (y - 0.5).max(0.0);

    let x0 = (fx.floor() as u32).min(w - 1);
    let y0 = (fy.floor() as u32).min(h - 1);
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);

    let tx = fx - x0 as f64;
    let ty = fy - y0 as f64;

    let p00 = image.pixel(x0, y0);
    let p10 = image.pixel(x1, y0);
    let p01 = image.pixel(x0, y1);
    let p11 = image.pixel(x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] as f64 * (1.0 - tx) * (1.0 - ty)
            + p10[i] as f64 * tx * (1.0 - ty)
            + p01[i] as f64 * (1.0 - tx) * ty
            + p11[i] as f64 * tx * ty;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;

    /// Create an image where every pixel is unique.
    fn test_image(width: u32, height: u32) -> PixelBuffer {
        let mut img = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                img.set(x, y, Rgb::new(x as u8, y as u8, ((x * 7 + y * 3) % 256) as u8))
                    .unwrap();
            }
        }
        img
    }

    fn px(img: &PixelBuffer, x: u32, y: u32) -> Rgb {
        img.get(x, y).unwrap()
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let img = test_image(6, 4);
        assert_eq!(rotate(&img, 0.0, InterpolationFilter::Nearest), img);
    }

    #[test]
    fn test_full_turn_is_identity() {
        let img = test_image(6, 4);
        assert_eq!(rotate(&img, 360.0, InterpolationFilter::Nearest), img);
        assert_eq!(rotate(&img, -720.0, InterpolationFilter::Nearest), img);
    }

    #[test]
    fn test_90_is_clockwise() {
        // [a b]    [c a]
        // [c d] -> [d b]
        let mut img = PixelBuffer::new(2, 2);
        let (a, b, c, d) = (
            Rgb::new(1, 0, 0),
            Rgb::new(2, 0, 0),
            Rgb::new(3, 0, 0),
            Rgb::new(4, 0, 0),
        );
        img.set(0, 0, a).unwrap();
        img.set(1, 0, b).unwrap();
        img.set(0, 1, c).unwrap();
        img.set(1, 1, d).unwrap();

        let result = rotate(&img, 90.0, InterpolationFilter::Nearest);
        assert_eq!(px(&result, 0, 0), c);
        assert_eq!(px(&result, 1, 0), a);
        assert_eq!(px(&result, 0, 1), d);
        assert_eq!(px(&result, 1, 1), b);
    }

    #[test]
    fn test_180_flips_both_axes() {
        let img = test_image(5, 3);
        let result = rotate(&img, 180.0, InterpolationFilter::Nearest);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(px(&result, x, y), px(&img, 4 - x, 2 - y));
            }
        }
    }

    #[test]
    fn test_270_is_counter_clockwise_quarter() {
        let img = test_image(4, 4);
        let result = rotate(&img, 270.0, InterpolationFilter::Nearest);
        // Counter-clockwise: dst(x, y) = src(w - 1 - y, x)
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(px(&result, x, y), px(&img, 3 - y, x));
            }
        }
    }

    #[test]
    fn test_negative_angle_matches_complement() {
        let img = test_image(6, 6);
        assert_eq!(
            rotate(&img, -90.0, InterpolationFilter::Nearest),
            rotate(&img, 270.0, InterpolationFilter::Nearest)
        );
    }

    #[test]
    fn test_two_quarter_turns_equal_half_turn_square() {
        for size in [2, 4, 5, 8] {
            let img = test_image(size, size);
            let twice = rotate(
                &rotate(&img, 90.0, InterpolationFilter::Nearest),
                90.0,
                InterpolationFilter::Nearest,
            );
            assert_eq!(twice, rotate(&img, 180.0, InterpolationFilter::Nearest));
        }
    }

    #[test]
    fn test_quarter_turn_clips_non_square() {
        // A 4x2 canvas cannot hold a 2x4 rotated image: content is lost and
        // the exposed region is black.
        let img = PixelBuffer::filled(4, 2, Rgb::WHITE);
        let result = rotate(&img, 90.0, InterpolationFilter::Nearest);
        assert_eq!(result.dimensions(), (4, 2));
        assert_eq!(px(&result, 0, 0), Rgb::BLACK);
        assert_eq!(px(&result, 3, 1), Rgb::BLACK);
        assert_eq!(px(&result, 1, 0), Rgb::WHITE);
        assert_eq!(px(&result, 2, 1), Rgb::WHITE);

        // Two quarter turns no longer match a half turn
        let twice = rotate(&result, 90.0, InterpolationFilter::Nearest);
        assert_ne!(twice, rotate(&img, 180.0, InterpolationFilter::Nearest));
    }

    #[test]
    fn test_45_degrees_exposes_black_corners() {
        let img = PixelBuffer::filled(20, 20, Rgb::WHITE);
        let result = rotate(&img, 45.0, InterpolationFilter::Nearest);
        assert_eq!(result.dimensions(), (20, 20));
        assert_eq!(px(&result, 0, 0), Rgb::BLACK);
        assert_eq!(px(&result, 19, 19), Rgb::BLACK);
        assert_eq!(px(&result, 10, 10), Rgb::WHITE);
    }

    #[test]
    fn test_bilinear_same_dimensions() {
        let img = test_image(9, 7);
        let result = rotate(&img, 15.0, InterpolationFilter::Bilinear);
        assert_eq!(result.dimensions(), (9, 7));
    }

    #[test]
    fn test_bilinear_uniform_interior() {
        let img = PixelBuffer::filled(16, 16, Rgb::new(90, 120, 30));
        let result = rotate(&img, 30.0, InterpolationFilter::Bilinear);
        assert_eq!(px(&result, 8, 8), Rgb::new(90, 120, 30));
        assert_eq!(px(&result, 0, 0), Rgb::BLACK);
    }

    #[test]
    fn test_1x1_image() {
        let img = PixelBuffer::filled(1, 1, Rgb::new(5, 6, 7));
        for angle in [90.0, 180.0, 270.0] {
            assert_eq!(rotate(&img, angle, InterpolationFilter::Nearest), img);
        }
    }

    #[test]
    fn test_empty_image() {
        let img = PixelBuffer::new(0, 0);
        let result = rotate(&img, 90.0, InterpolationFilter::Nearest);
        assert!(result.is_empty());
    }
}

//! Box blur over a square `(2r + 1)²` window.
//!
//! # Border policy
//!
//! Only pixels whose full window lies inside the image are computed. Pixels
//! within `radius` of any edge are left at the buffer default (black) instead
//! of being copied from the source, so a blurred image always carries a black
//! frame `radius` pixels wide.

use crate::buffer::PixelBuffer;

/// Apply a box blur with the given radius.
///
/// A radius of 0 returns an identical copy. If the image is too small to fit
/// a single full window (`width <= 2r` or `height <= 2r`) the result is
/// entirely black.
///
/// Any radius is accepted; sums are accumulated in `u64` so even a window
/// covering the largest addressable image cannot overflow.
pub fn box_blur(image: &PixelBuffer, radius: u32) -> PixelBuffer {
    if radius == 0 {
        return image.clone();
    }

    let (width, height) = image.dimensions();
    let mut output = PixelBuffer::new(width, height);

    let x_end = width.saturating_sub(radius);
    let y_end = height.saturating_sub(radius);
    if radius >= x_end || radius >= y_end {
        return output;
    }

    let side = 2 * radius as u64 + 1;
    let count = side * side;

    for y in radius..y_end {
        for x in radius..x_end {
            let mut sum = [0u64; 3];
            for wy in (y - radius)..=(y + radius) {
                for wx in (x - radius)..=(x + radius) {
                    let px = image.pixel(wx, wy);
                    sum[0] += px[0] as u64;
                    sum[1] += px[1] as u64;
                    sum[2] += px[2] as u64;
                }
            }
            output.put_pixel(
                x,
                y,
                [
                    (sum[0] / count) as u8,
                    (sum[1] / count) as u8,
                    (sum[2] / count) as u8,
                ],
            );
        }
    }

    output
}

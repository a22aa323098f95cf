//! Image decoding for Retouch.
//!
//! Turns PNG or JPEG bytes (or a file on disk) into a [`PixelBuffer`](crate::PixelBuffer).
//! JPEG files carrying an EXIF orientation tag are returned upright.
//!
//! All operations are synchronous; failures are reported as [`DecodeError`]
//! and never leave partial state behind.

mod reader;
mod types;

pub use reader::{decode_file, decode_image, get_orientation};
pub use types::{DecodeError, Orientation};

//! Image encoding for Retouch.
//!
//! Exports a [`PixelBuffer`](crate::PixelBuffer) as PNG, either to bytes or
//! straight to disk. Paths without a `.png` suffix get one appended before
//! writing.

mod png;

pub use png::{encode_png, with_png_extension, write_png, EncodeError};

//! PNG encoding for export.

use std::ffi::OsString;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors that can occur during PNG encoding or writing.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded file failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Encode a pixel buffer to PNG bytes.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for zero-area buffers and
/// `EncodeError::EncodingFailed` if the encoder rejects the data.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = buffer.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let mut out = Cursor::new(Vec::new());
    PngEncoder::new(&mut out)
        .write_image(buffer.as_bytes(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(out.into_inner())
}

/// Append `.png` unless the path already ends with it (case-insensitive).
///
/// Other extensions are kept: `photo.jpg` becomes `photo.jpg.png`.
pub fn with_png_extension(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let has_png_suffix = path
        .to_string_lossy()
        .to_ascii_lowercase()
        .ends_with(".png");
    if has_png_suffix {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".png");
    PathBuf::from(name)
}

/// Encode `buffer` as PNG and write it to `path`, adding a `.png` suffix if
/// missing. Returns the path actually written.
pub fn write_png(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<PathBuf, EncodeError> {
    let target = with_png_extension(path);
    let bytes = encode_png(buffer)?;
    std::fs::write(&target, bytes)
        .map_err(|e| EncodeError::IoError(format!("{}: {}", target.display(), e)))?;
    tracing::debug!("Wrote {}", target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;
    use crate::decode::decode_image;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_basic() {
        let buffer = PixelBuffer::filled(16, 8, Rgb::new(128, 64, 32));
        let bytes = encode_png(&buffer).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set(0, 0, Rgb::new(1, 2, 3)).unwrap();
        buffer.set(2, 1, Rgb::new(250, 128, 7)).unwrap();

        let decoded = decode_image(&encode_png(&buffer).unwrap()).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_encode_png_zero_dimensions() {
        let result = encode_png(&PixelBuffer::new(0, 5));
        assert!(matches!(
            result,
            Err(EncodeError::InvalidDimensions {
                width: 0,
                height: 5
            })
        ));
    }

    #[test]
    fn test_png_extension_added() {
        assert_eq!(with_png_extension("edited"), PathBuf::from("edited.png"));
        assert_eq!(
            with_png_extension("out/photo.jpg"),
            PathBuf::from("out/photo.jpg.png")
        );
    }

    #[test]
    fn test_png_extension_kept() {
        assert_eq!(with_png_extension("image.png"), PathBuf::from("image.png"));
        assert_eq!(with_png_extension("IMAGE.PNG"), PathBuf::from("IMAGE.PNG"));
        assert_eq!(with_png_extension("a/b.Png"), PathBuf::from("a/b.Png"));
    }

    #[test]
    fn test_write_png_roundtrip() {
        let dir = std::env::temp_dir().join(format!("retouch-encode-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let buffer = PixelBuffer::filled(4, 4, Rgb::new(10, 200, 30));
        let written = write_png(&buffer, dir.join("roundtrip")).unwrap();
        assert_eq!(written, dir.join("roundtrip.png"));

        let decoded = decode_image(&std::fs::read(&written).unwrap()).unwrap();
        assert_eq!(decoded, buffer);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_png_bad_directory() {
        let buffer = PixelBuffer::filled(1, 1, Rgb::WHITE);
        let result = write_png(&buffer, "/definitely/not/here/out.png");
        assert!(matches!(result, Err(EncodeError::IoError(_))));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

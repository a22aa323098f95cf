//! Retouch Core - effect pipeline and edit history
//!
//! This crate provides the core of the Retouch image editor: an RGB pixel
//! buffer, pure filter operators (blur, rotation, color filters), the
//! fixed-order effect pipeline, snapshot-based undo, and the edit session
//! that ties them together. PNG/JPEG decoding and PNG export are thin
//! wrappers over the `image` crate.

pub mod buffer;
pub mod config;
pub mod decode;
pub mod encode;
pub mod filters;
pub mod history;
pub mod pipeline;
pub mod session;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use buffer::{BufferError, PixelBuffer, Rgb};
pub use config::{ConfigError, EditorConfig, RebasePolicy};
pub use filters::InterpolationFilter;
pub use history::UndoHistory;
pub use pipeline::{apply_effects, apply_effects_with};
pub use session::{EditSession, SessionError, UndoOutcome};

/// Largest blur radius the editor accepts.
pub const MAX_BLUR_RADIUS: u8 = 10;

/// Errors for out-of-range effect parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("Blur radius {0} is out of range (0 to 10)")]
    BlurRadiusOutOfRange(u8),

    #[error("Rotation must be a multiple of 90 degrees, got {0}")]
    InvalidRotation(i32),

    #[error("Rotation index must be 0 to 3, got {0}")]
    InvalidRotationIndex(u8),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}

/// One of the four fixed rotation choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Clockwise angle in degrees.
    pub fn degrees(self) -> u32 {
        self.index() as u32 * 90
    }

    /// Position in the rotation selector (0 = 0°, 3 = 270°).
    pub fn index(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    pub fn from_index(index: u8) -> Result<Self, ParamsError> {
        Rotation::ALL
            .get(index as usize)
            .copied()
            .ok_or(ParamsError::InvalidRotationIndex(index))
    }

    /// Accepts any multiple of 90, normalized into `[0, 360)`.
    pub fn from_degrees(degrees: i32) -> Result<Self, ParamsError> {
        if degrees % 90 != 0 {
            return Err(ParamsError::InvalidRotation(degrees));
        }
        Self::from_index((degrees.rem_euclid(360) / 90) as u8)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Color filter applied as the last pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    #[default]
    None,
    Grayscale,
    Sepia,
    Negative,
    HighContrast,
}

impl FilterKind {
    pub const ALL: [FilterKind; 5] = [
        FilterKind::None,
        FilterKind::Grayscale,
        FilterKind::Sepia,
        FilterKind::Negative,
        FilterKind::HighContrast,
    ];

    /// Label shown in the filter selector.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::None => "None",
            FilterKind::Grayscale => "Grayscale",
            FilterKind::Sepia => "Sepia",
            FilterKind::Negative => "Negative",
            FilterKind::HighContrast => "High Contrast",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = ParamsError;

    /// Parses selector labels case-insensitively; spaces, dashes and
    /// underscores are ignored ("High Contrast", "high_contrast").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name().replace(' ', "").to_ascii_lowercase() == key)
            .ok_or_else(|| ParamsError::UnknownFilter(s.to_string()))
    }
}

/// The effect settings read from the UI controls for one apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectParameters {
    /// Blur radius (0 to 10, 0 = disabled)
    pub blur_radius: u8,
    /// Clockwise rotation
    pub rotation: Rotation,
    /// Color filter
    pub filter: FilterKind,
}

impl EffectParameters {
    pub fn new(blur_radius: u8, rotation: Rotation, filter: FilterKind) -> Self {
        Self {
            blur_radius,
            rotation,
            filter,
        }
    }

    /// Check the blur radius against [`MAX_BLUR_RADIUS`].
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.blur_radius > MAX_BLUR_RADIUS {
            return Err(ParamsError::BlurRadiusOutOfRange(self.blur_radius));
        }
        Ok(())
    }

    /// True when applying these parameters leaves the image unchanged.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

//! Edit session: the state machine behind the editor UI.
//!
//! ## States
//! - **No image**: only `load` is accepted; every other operation returns
//!   [`SessionError::NoImage`].
//! - **Ready**: holds a `base` image (what effects are recomputed from) and a
//!   `committed` image (what is displayed, undone and saved).
//!
//! ## Transitions
//! - `load`: `base = committed = image`, history cleared.
//! - `apply`: push `committed`, `committed = pipeline(base, params)`, then
//!   `base = committed` under [`RebasePolicy::AfterApply`].
//! - `undo`: pop into `committed` and `base`; a no-op on empty history.
//!
//! Each `apply` pushes exactly one snapshot, so a UI that applies on every
//! slider tick gets one undo step per tick.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::config::{EditorConfig, RebasePolicy};
use crate::decode::{self, DecodeError};
use crate::encode::{self, EncodeError};
use crate::history::UndoHistory;
use crate::pipeline::apply_effects_with;
use crate::{EffectParameters, ParamsError};

/// Errors reported by [`EditSession`] operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An operation other than `load` was called before any image was loaded.
    #[error("No image loaded")]
    NoImage,

    #[error("Invalid effect parameters: {0}")]
    InvalidParameters(#[from] ParamsError),

    #[error("Failed to load image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to save image: {0}")]
    Encode(#[from] EncodeError),
}

/// Result of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The previous committed image was restored.
    Restored,
    /// History was empty; nothing changed.
    Empty,
}

#[derive(Debug, Clone)]
struct LoadedImages {
    base: PixelBuffer,
    committed: PixelBuffer,
}

/// A single-image editing session with snapshot undo.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    images: Option<LoadedImages>,
    history: UndoHistory,
    config: EditorConfig,
}

impl EditSession {
    /// Create a session with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => UndoHistory::with_limit(limit),
            None => UndoHistory::new(),
        };
        Self {
            images: None,
            history,
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Start editing `image`, discarding any previous image and history.
    pub fn load(&mut self, image: PixelBuffer) {
        tracing::info!("Loaded image {}x{}", image.width(), image.height());
        self.history.clear();
        self.images = Some(LoadedImages {
            base: image.clone(),
            committed: image,
        });
    }

    /// Decode `bytes` and load the result.
    ///
    /// On failure the session is left exactly as it was.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), SessionError> {
        match decode::decode_image(bytes) {
            Ok(image) => {
                self.load(image);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to decode image: {}", e);
                Err(e.into())
            }
        }
    }

    /// Read and decode the file at `path`, then load it.
    ///
    /// On failure the session is left exactly as it was.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let path = path.as_ref();
        match decode::decode_file(path) {
            Ok(image) => {
                self.load(image);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                Err(e.into())
            }
        }
    }

    /// Recompute the image from `base` with `params` and commit it.
    ///
    /// The previously committed image is pushed onto the undo history first.
    /// Without an image this reports [`SessionError::NoImage`] whatever the
    /// parameters; invalid parameters are rejected before anything changes.
    pub fn apply(&mut self, params: &EffectParameters) -> Result<&PixelBuffer, SessionError> {
        let images = self.images.as_mut().ok_or(SessionError::NoImage)?;
        params.validate()?;

        let result = apply_effects_with(&images.base, params, self.config.rotation_filter);
        let previous = std::mem::replace(&mut images.committed, result);
        self.history.push(previous);

        if self.config.rebase == RebasePolicy::AfterApply {
            images.base = images.committed.clone();
        }

        tracing::debug!(
            "Applied blur={} rotation={} filter={} (undo depth {})",
            params.blur_radius,
            params.rotation,
            params.filter,
            self.history.len()
        );
        Ok(&images.committed)
    }

    /// Restore the committed image from before the last apply.
    pub fn undo(&mut self) -> Result<UndoOutcome, SessionError> {
        let images = self.images.as_mut().ok_or(SessionError::NoImage)?;

        let Some(snapshot) = self.history.pop() else {
            tracing::debug!("Undo requested with empty history");
            return Ok(UndoOutcome::Empty);
        };

        images.base = snapshot.clone();
        images.committed = snapshot;
        tracing::debug!("Undo (remaining depth {})", self.history.len());
        Ok(UndoOutcome::Restored)
    }

    /// The image to hand to an encoder.
    pub fn save(&self) -> Result<&PixelBuffer, SessionError> {
        self.committed().ok_or(SessionError::NoImage)
    }

    /// Encode the committed image as PNG bytes.
    pub fn save_png(&self) -> Result<Vec<u8>, SessionError> {
        let image = self.save()?;
        encode::encode_png(image).map_err(|e| {
            tracing::warn!("Failed to encode image: {}", e);
            SessionError::Encode(e)
        })
    }

    /// Write the committed image as PNG, appending `.png` to `path` if it
    /// lacks the suffix. Returns the path written.
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, SessionError> {
        let image = self.save()?;
        let target = encode::with_png_extension(path);
        match encode::write_png(image, &target) {
            Ok(written) => {
                tracing::info!("Saved {}", written.display());
                Ok(written)
            }
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", target.display(), e);
                Err(e.into())
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.images.is_some()
    }

    /// Effect controls and Save are only usable once an image is loaded.
    pub fn controls_enabled(&self) -> bool {
        self.is_loaded()
    }

    /// Undo is only meaningful with a loaded image and non-empty history.
    pub fn can_undo(&self) -> bool {
        self.is_loaded() && !self.history.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn committed(&self) -> Option<&PixelBuffer> {
        self.images.as_ref().map(|images| &images.committed)
    }

    pub fn base(&self) -> Option<&PixelBuffer> {
        self.images.as_ref().map(|images| &images.base)
    }
}

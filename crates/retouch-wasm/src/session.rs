//! Edit session WASM bindings.
//!
//! The session owns the loaded image and its undo history on the WASM side;
//! JavaScript only pulls pixels out for display.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new JsEditSession();
//! session.load(new Uint8Array(await file.arrayBuffer()));
//!
//! const params = new JsEffectParameters();
//! params.blur_radius = 3;
//! params.set_filter("Sepia");
//! const preview = session.apply(params);
//!
//! if (session.can_undo) session.undo();
//! const png = session.save_png();
//! ```

use crate::params::JsEffectParameters;
use crate::types::JsPixelBuffer;
use retouch_core::{EditSession, EditorConfig, UndoOutcome};
use wasm_bindgen::prelude::*;

/// An editing session for JavaScript
#[wasm_bindgen]
#[derive(Default)]
pub struct JsEditSession {
    inner: EditSession,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create a session with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from an `EditorConfig` JSON string.
    ///
    /// Missing fields take their defaults, e.g. `{"history_limit": 50}`.
    pub fn with_config(json: &str) -> Result<JsEditSession, JsValue> {
        let config = EditorConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: EditSession::with_config(config),
        })
    }

    /// Decode PNG or JPEG bytes and start editing them.
    ///
    /// On failure the current image and history are kept.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner
            .load_bytes(bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Start editing an already decoded image.
    pub fn load_image(&mut self, image: &JsPixelBuffer) {
        self.inner.load(image.as_buffer().clone());
    }

    /// Recompute the image with `params`, commit it and return it.
    pub fn apply(&mut self, params: &JsEffectParameters) -> Result<JsPixelBuffer, JsValue> {
        self.inner
            .apply(params.inner())
            .map(|committed| JsPixelBuffer::from_buffer(committed.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Restore the previous image. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, JsValue> {
        self.inner
            .undo()
            .map(|outcome| outcome == UndoOutcome::Restored)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    #[wasm_bindgen(getter)]
    pub fn is_loaded(&self) -> bool {
        self.inner.is_loaded()
    }

    #[wasm_bindgen(getter)]
    pub fn undo_depth(&self) -> usize {
        self.inner.undo_depth()
    }

    /// The currently displayed image, if one is loaded.
    ///
    /// Note: This copies the image out of the session.
    pub fn committed(&self) -> Option<JsPixelBuffer> {
        self.inner
            .committed()
            .map(|image| JsPixelBuffer::from_buffer(image.clone()))
    }

    /// Encode the current image as PNG bytes.
    pub fn save_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner
            .save_png()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

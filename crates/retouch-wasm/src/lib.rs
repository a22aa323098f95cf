//! Retouch WASM - WebAssembly bindings for Retouch
//!
//! This crate exposes the retouch-core edit session and filter operators to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `session` - The stateful editor: load, apply, undo, save
//! - `params` - Effect parameters mirroring the UI controls
//! - `filters` - Stateless operator bindings (blur, rotation, color filters)
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditSession, JsEffectParameters } from '@retouch/wasm';
//!
//! await init();
//!
//! const session = new JsEditSession();
//! session.load(new Uint8Array(await file.arrayBuffer()));
//! const params = new JsEffectParameters();
//! params.set_rotation_index(1);
//! const rotated = session.apply(params);
//! console.log(`Preview ${rotated.width}x${rotated.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod filters;
mod params;
mod session;
mod types;

// Re-export public types
pub use filters::{apply_blur, apply_effects, apply_filter, apply_rotation};
pub use params::JsEffectParameters;
pub use session::JsEditSession;
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Labels for the filter selector, in display order
#[wasm_bindgen]
pub fn filter_names() -> Vec<String> {
    retouch_core::FilterKind::ALL
        .iter()
        .map(|kind| kind.name().to_string())
        .collect()
}

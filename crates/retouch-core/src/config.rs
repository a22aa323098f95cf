//! Editor configuration.
//!
//! Defaults reproduce the standard editor: unbounded undo history,
//! nearest-neighbour rotation, and `base` resynced after every apply.
//! Every field is optional in JSON; missing fields take their default.
//!
//! ```json
//! { "rebase": "on_undo_or_load", "history_limit": 50, "rotation_filter": "bilinear" }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filters::InterpolationFilter;

/// Errors from parsing an [`EditorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid editor config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// When the session resyncs its `base` image to the `committed` image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebasePolicy {
    /// `base` becomes the fresh result after every apply, and the popped
    /// snapshot after every undo.
    #[default]
    AfterApply,
    /// `apply` leaves `base` untouched, so every apply recomputes from the
    /// image as it was after the last load or undo.
    OnUndoOrLoad,
}

/// Tunables for an [`EditSession`](crate::EditSession).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub rebase: RebasePolicy,
    /// Maximum undo depth; `None` keeps every snapshot.
    pub history_limit: Option<usize>,
    /// Resampling used for the rotation stage.
    pub rotation_filter: InterpolationFilter,
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

//! # Style Presets
//!
//! Named bundles of overrides, applied wholesale.
//!
//! The engine only captures and applies presets. The preset *list* (storage,
//! ordering, deletion) belongs to the hosting page, which typically keeps it
//! next to the storefront record it persists anyway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_core::OverrideMap;

/// A saved snapshot of the whole override map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub overrides: OverrideMap,
}

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Preset JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Preset {
    /// Capture the given map under a fresh id.
    pub fn capture(name: impl Into<String>, overrides: &OverrideMap) -> Self {
        let created_at = Utc::now();
        Self {
            id: format!("preset-{}", created_at.timestamp_millis()),
            name: name.into(),
            created_at,
            overrides: overrides.clone(),
        }
    }

    /// Decode a preset a hosting page loaded from storage.
    pub fn from_json(payload: &str) -> Result<Self, PresetError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Encode for the hosting page's storage layer.
    pub fn to_json(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string(self)?)
    }
}

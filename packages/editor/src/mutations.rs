//! # Override Mutations
//!
//! The command model for everything that changes the override map.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation is a semantic operation, not a
//!    raw map write
//! 2. **Infallible**: unknown element ids are tolerated by construction;
//!    there is no validation pass and no error channel
//! 3. **One history entry per mutation**: the engine snapshots the map once
//!    around each `apply`, regardless of how many keys change
//!
//! ## Merge vs. replace
//!
//! The rule is fixed globally, not per call site:
//!
//! - `SetOverride` **merges** its patch into the existing entry (patch keys
//!   win)
//! - `PasteStyle` **replaces** the destination entry wholesale
//! - `LoadPreset` **replaces** the entire map wholesale

use crate::overrides::OverrideStore;
use serde::{Deserialize, Serialize};
use vitrine_core::{OverrideMap, StyleOverride};

/// Semantic mutations over the override map.
///
/// Serializable so hosting pages can journal edits or replay them through a
/// persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Merge a style patch into one element's override.
    SetOverride {
        element_id: String,
        patch: StyleOverride,
    },

    /// Remove one element's override entirely.
    ResetOverride { element_id: String },

    /// Replace one element's override with a clipboard value.
    ///
    /// The style travels inside the mutation: it is the value captured at
    /// copy time, never a reference into the live map.
    PasteStyle {
        element_id: String,
        style: StyleOverride,
    },

    /// Replace the whole map with a preset's overrides.
    LoadPreset { overrides: OverrideMap },
}

impl Mutation {
    /// Apply this mutation to the store.
    pub fn apply(&self, store: &mut OverrideStore) {
        match self {
            Mutation::SetOverride { element_id, patch } => {
                store.merge(element_id, patch);
            }

            Mutation::ResetOverride { element_id } => {
                store.reset(element_id);
            }

            Mutation::PasteStyle { element_id, style } => {
                store.replace(element_id, style.clone());
            }

            Mutation::LoadPreset { overrides } => {
                store.replace_all(overrides.clone());
            }
        }
    }

    /// Debug name, used for tracing and history descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetOverride { .. } => "set-override",
            Mutation::ResetOverride { .. } => "reset-override",
            Mutation::PasteStyle { .. } => "paste-style",
            Mutation::LoadPreset { .. } => "load-preset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::StyleValue;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::SetOverride {
            element_id: "hero-title".to_string(),
            patch: StyleOverride::single("color", "#f00"),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_set_override_merges() {
        let mut store = OverrideStore::new(OverrideMap::new());

        Mutation::SetOverride {
            element_id: "t1".to_string(),
            patch: StyleOverride::single("color", "#f00"),
        }
        .apply(&mut store);

        Mutation::SetOverride {
            element_id: "t1".to_string(),
            patch: StyleOverride::single("fontSize", "2rem"),
        }
        .apply(&mut store);

        let style = store.get("t1");
        assert_eq!(style.get("color"), Some(&StyleValue::text("#f00")));
        assert_eq!(style.get("fontSize"), Some(&StyleValue::text("2rem")));
    }

    #[test]
    fn test_paste_replaces_whole_entry() {
        let mut store = OverrideStore::new(OverrideMap::new());
        store.merge("t1", &StyleOverride::single("color", "#f00"));
        store.merge("t1", &StyleOverride::single("margin", "4px"));

        Mutation::PasteStyle {
            element_id: "t1".to_string(),
            style: StyleOverride::single("opacity", 0.5),
        }
        .apply(&mut store);

        let style = store.get("t1");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("opacity"), Some(&StyleValue::number(0.5)));
        assert_eq!(style.get("color"), None);
    }

    #[test]
    fn test_reset_unknown_id_is_noop() {
        let mut store = OverrideStore::new(OverrideMap::new());

        Mutation::ResetOverride {
            element_id: "ghost".to_string(),
        }
        .apply(&mut store);

        assert!(store.map().is_empty());
    }
}

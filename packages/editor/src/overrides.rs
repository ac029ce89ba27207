//! # Override Store
//!
//! Canonical element-id → style-override map.
//!
//! The store is presentation-agnostic: it never validates property values
//! and never interprets them. Merge/replace semantics live in
//! [`crate::mutations`]; this module only offers the primitive map edits
//! those mutations are built from.

use vitrine_core::{OverrideMap, StyleOverride};

/// Owns the current override map for one editing session.
#[derive(Debug, Clone, Default)]
pub struct OverrideStore {
    map: OverrideMap,
}

impl OverrideStore {
    /// Create a store seeded with a previously persisted map.
    pub fn new(initial: OverrideMap) -> Self {
        Self { map: initial }
    }

    /// Merge `patch` into the entry for `element_id`; patch keys win.
    /// Creates the entry if absent.
    pub fn merge(&mut self, element_id: &str, patch: &StyleOverride) {
        self.map
            .entry(element_id.to_string())
            .or_default()
            .merge(patch);
    }

    /// Replace the whole entry for `element_id`.
    pub fn replace(&mut self, element_id: &str, style: StyleOverride) {
        self.map.insert(element_id.to_string(), style);
    }

    /// Remove the entry for `element_id`. Idempotent.
    pub fn reset(&mut self, element_id: &str) {
        self.map.remove(element_id);
    }

    /// Replace the entire map (preset load, undo/redo restore).
    pub fn replace_all(&mut self, map: OverrideMap) {
        self.map = map;
    }

    /// Current override for `element_id`, or an empty override. Never fails.
    pub fn get(&self, element_id: &str) -> StyleOverride {
        self.map.get(element_id).cloned().unwrap_or_default()
    }

    pub fn contains(&self, element_id: &str) -> bool {
        self.map.contains_key(element_id)
    }

    pub fn map(&self) -> &OverrideMap {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::StyleValue;

    #[test]
    fn test_merge_creates_entry() {
        let mut store = OverrideStore::default();
        store.merge("t1", &StyleOverride::single("color", "#f00"));

        assert!(store.contains("t1"));
        assert_eq!(store.get("t1").get("color"), Some(&StyleValue::text("#f00")));
    }

    #[test]
    fn test_get_unknown_id_returns_empty() {
        let store = OverrideStore::default();
        assert!(store.get("missing").is_empty());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut store = OverrideStore::default();
        store.merge("t1", &StyleOverride::single("color", "#f00"));

        store.reset("t1");
        assert!(!store.contains("t1"));

        // Second reset of the same id is a no-op.
        store.reset("t1");
        assert!(store.map().is_empty());
    }

    #[test]
    fn test_replace_all_swaps_map() {
        let mut store = OverrideStore::default();
        store.merge("t1", &StyleOverride::single("color", "#f00"));

        let mut next = OverrideMap::new();
        next.insert("t2".to_string(), StyleOverride::single("width", "50%"));
        store.replace_all(next);

        assert!(!store.contains("t1"));
        assert!(store.contains("t2"));
    }
}

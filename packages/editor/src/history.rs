//! # Undo/Redo History
//!
//! Snapshot-based history over the override map.
//!
//! ## Design
//!
//! - Every mutating call records a full deep snapshot of the map taken
//!   *before* the mutation, tagged with a monotonic sequence number
//! - Undo pops the most recent snapshot, parks the current map on the redo
//!   stack, and restores the popped snapshot
//! - Redo is symmetric
//! - Any new mutation clears the redo stack
//! - Depth is capped (default 50); the oldest snapshots are evicted first,
//!   so undoing past the cap stops at the oldest retained snapshot, not at
//!   the true initial state
//!
//! Full snapshots were chosen over inverse operations: the map is small
//! (tens of elements, a handful of properties each) and snapshot restore
//! cannot drift out of sync with merge/replace semantics.

use vitrine_core::OverrideMap;

/// Default maximum number of undo levels.
pub const DEFAULT_MAX_LEVELS: usize = 50;

/// One retained state of the override map.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Monotonic sequence number, unique across undo and redo entries.
    pub seq: u64,

    /// Deep copy of the map at capture time.
    pub snapshot: OverrideMap,

    /// Name of the mutation that displaced this state.
    pub description: &'static str,
}

/// Undo/redo stacks for one editing session.
#[derive(Debug)]
pub struct History {
    /// Applied states, most recent last.
    undo_stack: Vec<HistoryEntry>,

    /// Undone states, most recent last.
    redo_stack: Vec<HistoryEntry>,

    /// Maximum undo levels (0 = unlimited).
    max_levels: usize,

    next_seq: u64,
}

impl History {
    /// Create a history with the default depth cap.
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_MAX_LEVELS)
    }

    /// Create a history with a custom depth cap.
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            next_seq: 0,
        }
    }

    /// Record the pre-mutation state. Exactly one entry per mutating call.
    pub fn record(&mut self, before: OverrideMap, description: &'static str) {
        let entry = HistoryEntry {
            seq: self.bump_seq(),
            snapshot: before,
            description,
        };
        self.undo_stack.push(entry);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // A new edit invalidates the undone future.
        self.redo_stack.clear();
    }

    /// Undo one step: returns the map to restore, parking `current` on the
    /// redo stack. `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &OverrideMap) -> Option<OverrideMap> {
        let entry = self.undo_stack.pop()?;

        let parked = HistoryEntry {
            seq: self.bump_seq(),
            snapshot: current.clone(),
            description: entry.description,
        };
        self.redo_stack.push(parked);

        Some(entry.snapshot)
    }

    /// Redo one step: symmetric to [`History::undo`].
    pub fn redo(&mut self, current: &OverrideMap) -> Option<OverrideMap> {
        let entry = self.redo_stack.pop()?;

        let parked = HistoryEntry {
            seq: self.bump_seq(),
            snapshot: current.clone(),
            description: entry.description,
        };
        self.undo_stack.push(parked);

        Some(entry.snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Name of the mutation the next undo would revert.
    pub fn undo_description(&self) -> Option<&'static str> {
        self.undo_stack.last().map(|entry| entry.description)
    }

    /// Name of the mutation the next redo would reapply.
    pub fn redo_description(&self) -> Option<&'static str> {
        self.redo_stack.last().map(|entry| entry.description)
    }

    /// Drop all history (session reset).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::StyleOverride;

    fn map_with(id: &str, property: &str, value: &str) -> OverrideMap {
        let mut map = OverrideMap::new();
        map.insert(id.to_string(), StyleOverride::single(property, value));
        map
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(&OverrideMap::new()), None);
        assert_eq!(history.redo(&OverrideMap::new()), None);
    }

    #[test]
    fn test_undo_restores_recorded_state() {
        let mut history = History::new();
        let before = OverrideMap::new();
        let after = map_with("t1", "color", "#f00");

        history.record(before.clone(), "set-override");

        let restored = history.undo(&after).unwrap();
        assert_eq!(restored, before);
        assert!(history.can_redo());

        let redone = history.redo(&before).unwrap();
        assert_eq!(redone, after);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        let v1 = map_with("t1", "color", "#f00");

        history.record(OverrideMap::new(), "set-override");
        history.undo(&v1).unwrap();
        assert_eq!(history.redo_levels(), 1);

        history.record(OverrideMap::new(), "set-override");
        assert_eq!(history.redo_levels(), 0);
    }

    #[test]
    fn test_depth_cap_evicts_oldest() {
        let mut history = History::with_max_levels(2);

        history.record(map_with("t1", "color", "#111"), "set-override");
        history.record(map_with("t1", "color", "#222"), "set-override");
        history.record(map_with("t1", "color", "#333"), "set-override");

        assert_eq!(history.undo_levels(), 2);

        // The oldest retained snapshot is the #222 state, not #111.
        let current = map_with("t1", "color", "#444");
        history.undo(&current).unwrap();
        let deepest = history.undo(&map_with("t1", "color", "#333")).unwrap();
        assert_eq!(deepest, map_with("t1", "color", "#222"));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_undo_redo_level_bookkeeping() {
        let mut history = History::new();
        history.record(OverrideMap::new(), "set-override");
        history.record(map_with("t1", "color", "#f00"), "reset-override");

        assert_eq!(history.undo_levels(), 2);

        history.undo(&OverrideMap::new()).unwrap();
        history.undo(&OverrideMap::new()).unwrap();
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 2);
    }

    #[test]
    fn test_descriptions_follow_entries() {
        let mut history = History::new();
        history.record(OverrideMap::new(), "paste-style");

        assert_eq!(history.undo_description(), Some("paste-style"));
        assert_eq!(history.redo_description(), None);

        history.undo(&OverrideMap::new()).unwrap();
        assert_eq!(history.undo_description(), None);
        assert_eq!(history.redo_description(), Some("paste-style"));
    }
}

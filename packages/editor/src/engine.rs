//! # Editor Engine
//!
//! The facade the palette, drawer, and toolbars talk to.
//!
//! One engine is constructed per editing session and passed down
//! explicitly. It is never a module-level singleton: two preview frames
//! editing the same storefront each own their engine, so neither can
//! corrupt the other's history or selection.
//!
//! Every operation is a plain synchronous call from a UI event handler.
//! There is no error channel: boundary conditions (unknown ids, empty
//! stacks, empty clipboard) are silent no-ops, and callers gate their
//! buttons on the read API (`can_undo`, `copied_style`, ...) for
//! affordance, not correctness.
//!
//! ## Data flow
//!
//! ```text
//! click on marked node          toolbar control edited
//!         ↓                              ↓
//!   select_element                  set_override
//!         ↓                              ↓
//! palette shows toolbar     store updates → history records
//!                                        ↓
//!                            on_change(new map) fires
//!                                        ↓
//!                        binding layer re-applies inline styles
//! ```

use crate::clipboard::StyleClipboard;
use crate::history::History;
use crate::modes::ModeController;
use crate::mutations::Mutation;
use crate::overrides::OverrideStore;
use crate::presets::Preset;
use crate::selection::{SelectionController, SelectionState};
use vitrine_core::{ElementDescriptor, OverrideMap, StyleOverride};

/// Callback fired synchronously after every change to the override map,
/// including undo/redo restores. The binding layer re-applies inline styles
/// from here; the hosting page decides when to persist.
pub type ChangeListener = Box<dyn FnMut(&OverrideMap)>;

/// Visual-editing state engine for one session.
pub struct EditorEngine {
    store: OverrideStore,
    history: History,
    clipboard: StyleClipboard,
    selection: SelectionController,
    modes: ModeController,
    on_change: ChangeListener,
}

impl EditorEngine {
    /// Create an engine seeded with a persisted map.
    pub fn new(initial: OverrideMap, on_change: impl FnMut(&OverrideMap) + 'static) -> Self {
        Self {
            store: OverrideStore::new(initial),
            history: History::new(),
            clipboard: StyleClipboard::new(),
            selection: SelectionController::new(),
            modes: ModeController::new(),
            on_change: Box::new(on_change),
        }
    }

    /// Same, with a custom history depth.
    pub fn with_history_depth(
        initial: OverrideMap,
        max_levels: usize,
        on_change: impl FnMut(&OverrideMap) + 'static,
    ) -> Self {
        let mut engine = Self::new(initial, on_change);
        engine.history = History::with_max_levels(max_levels);
        engine
    }

    // ---- Mutation API ----

    /// Merge a style patch into one element's override.
    pub fn set_override(&mut self, element_id: &str, patch: StyleOverride) {
        self.commit(Mutation::SetOverride {
            element_id: element_id.to_string(),
            patch,
        });
    }

    /// Remove one element's override. A no-op on the map when the id is
    /// absent, but still recorded in history.
    pub fn reset_override(&mut self, element_id: &str) {
        self.commit(Mutation::ResetOverride {
            element_id: element_id.to_string(),
        });
    }

    /// Copy one element's current override into the clipboard, by value.
    pub fn copy_style(&mut self, element_id: &str) {
        self.clipboard.copy(self.store.get(element_id));
    }

    /// Replace the destination's override with the copied style. Silent
    /// no-op when the clipboard is empty, with no history entry.
    pub fn paste_style(&mut self, element_id: &str) {
        let Some(style) = self.clipboard.peek().cloned() else {
            return;
        };
        self.commit(Mutation::PasteStyle {
            element_id: element_id.to_string(),
            style,
        });
    }

    /// Replace the whole map with a preset's overrides, as one history
    /// entry.
    pub fn load_preset(&mut self, preset: &Preset) {
        self.commit(Mutation::LoadPreset {
            overrides: preset.overrides.clone(),
        });
    }

    /// Capture the current map as a named preset. Pure read; the returned
    /// preset belongs to the caller's list.
    pub fn save_preset(&self, name: impl Into<String>) -> Preset {
        Preset::capture(name, self.store.map())
    }

    /// Restore the previous map state. No-op at the stack boundary.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo(self.store.map()) {
            tracing::debug!("undo");
            self.store.replace_all(snapshot);
            (self.on_change)(self.store.map());
        }
    }

    /// Reapply the most recently undone state. No-op at the boundary.
    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo(self.store.map()) {
            tracing::debug!("redo");
            self.store.replace_all(snapshot);
            (self.on_change)(self.store.map());
        }
    }

    /// Select a marked element. Ignored outside editing mode so a selection
    /// can never exist while `is_editing` is false.
    pub fn select_element(&mut self, descriptor: ElementDescriptor) {
        if !self.modes.is_editing() {
            return;
        }
        self.selection.select(descriptor);
    }

    /// Update hover. Ignored outside editing mode.
    pub fn hover_element(&mut self, descriptor: Option<ElementDescriptor>) {
        if !self.modes.is_editing() {
            return;
        }
        self.selection.hover(descriptor);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear_selection();
    }

    /// Enter or leave editing mode. Leaving clears hover and selection in
    /// the same call, so a selected element is never observable alongside
    /// `is_editing == false`.
    pub fn set_editing_mode(&mut self, editing: bool) {
        tracing::trace!(editing, "editing mode");
        self.modes.set_editing(editing);
        if !editing {
            self.selection.clear_all();
        }
    }

    pub fn set_mobile_view(&mut self, mobile: bool) {
        self.modes.set_mobile(mobile);
    }

    pub fn toggle_preview_mode(&mut self) -> bool {
        self.modes.toggle_preview()
    }

    // ---- Read API ----

    pub fn overrides(&self) -> &OverrideMap {
        self.store.map()
    }

    /// Current override for an element, or an empty override. Never fails.
    pub fn override_for(&self, element_id: &str) -> StyleOverride {
        self.store.get(element_id)
    }

    pub fn selected_element(&self) -> Option<&ElementDescriptor> {
        self.selection.selected()
    }

    pub fn hovered_element(&self) -> Option<&ElementDescriptor> {
        self.selection.hovered()
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Name of the mutation the next undo would revert, for tooltips.
    pub fn undo_description(&self) -> Option<&'static str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&'static str> {
        self.history.redo_description()
    }

    pub fn copied_style(&self) -> Option<&StyleOverride> {
        self.clipboard.peek()
    }

    pub fn is_editing(&self) -> bool {
        self.modes.is_editing()
    }

    pub fn is_preview_mode(&self) -> bool {
        self.modes.is_preview()
    }

    pub fn is_mobile(&self) -> bool {
        self.modes.is_mobile()
    }

    /// Snapshot the map before the mutation, apply, record exactly one
    /// history entry, then notify.
    fn commit(&mut self, mutation: Mutation) {
        let before = self.store.map().clone();
        tracing::debug!(mutation = mutation.name(), "applying mutation");
        mutation.apply(&mut self.store);
        self.history.record(before, mutation.name());
        (self.on_change)(self.store.map());
    }
}

impl std::fmt::Debug for EditorEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorEngine")
            .field("overrides", &self.store.map().len())
            .field("undo_levels", &self.history.undo_levels())
            .field("redo_levels", &self.history.redo_levels())
            .field("is_editing", &self.modes.is_editing())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> EditorEngine {
        EditorEngine::new(OverrideMap::new(), |_| {})
    }

    #[test]
    fn test_engine_starts_clean() {
        let engine = engine();
        assert!(engine.overrides().is_empty());
        assert!(!engine.can_undo());
        assert!(!engine.can_redo());
        assert!(engine.copied_style().is_none());
        assert!(engine.is_editing());
    }

    #[test]
    fn test_boundary_undo_redo_are_noops() {
        let mut engine = engine();
        engine.undo();
        engine.redo();
        assert!(engine.overrides().is_empty());
    }

    #[test]
    fn test_paste_with_empty_clipboard_records_nothing() {
        let mut engine = engine();
        engine.paste_style("t1");

        assert!(engine.overrides().is_empty());
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_reset_of_absent_id_is_historied() {
        let mut engine = engine();
        engine.reset_override("ghost");

        assert!(engine.overrides().is_empty());
        assert!(engine.can_undo());
        assert_eq!(engine.undo_description(), Some("reset-override"));
    }

    #[test]
    fn test_selection_requires_editing_mode() {
        let mut engine = engine();
        engine.set_editing_mode(false);

        engine.select_element(ElementDescriptor::new(
            "t1",
            vitrine_core::EditableType::Title,
            "Title",
            vitrine_core::Geometry::default(),
        ));

        assert!(engine.selected_element().is_none());
    }
}

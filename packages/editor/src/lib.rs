//! # Vitrine Editor
//!
//! Visual-editing state engine for the Vitrine storefront builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ storefront renderer: template → marked DOM  │
//! └─────────────────────────────────────────────┘
//!                     ↓ clicks / hovers
//! ┌─────────────────────────────────────────────┐
//! │ editor: per-session editing state           │
//! │  - Override store (id → style patch)        │
//! │  - Snapshot history with undo/redo          │
//! │  - Selection + hover tracking               │
//! │  - Style clipboard, modes, presets          │
//! └─────────────────────────────────────────────┘
//!                     ↓ on_change(map)
//! ┌─────────────────────────────────────────────┐
//! │ binding: re-apply overrides after render    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The override map is the source of truth**: the rendered page is a
//!    derived view, re-stamped after every render pass
//! 2. **One engine per session**: constructed explicitly and passed down,
//!    never a global
//! 3. **Synchronous and single-writer**: every operation runs on the UI
//!    thread and returns before the caller continues
//! 4. **No exception channel**: boundary conditions are silent no-ops
//!
//! ## Usage
//!
//! ```rust
//! use vitrine_core::{OverrideMap, StyleOverride};
//! use vitrine_editor::EditorEngine;
//!
//! let mut engine = EditorEngine::new(OverrideMap::new(), |map| {
//!     // re-apply inline styles, schedule a save, ...
//!     let _ = map;
//! });
//!
//! engine.set_override("hero-title", StyleOverride::single("color", "#f00"));
//! engine.undo();
//! assert!(engine.override_for("hero-title").is_empty());
//! ```

mod clipboard;
mod engine;
mod history;
mod modes;
mod mutations;
mod overrides;
mod presets;
mod selection;
mod toolbar;

pub use clipboard::StyleClipboard;
pub use engine::{ChangeListener, EditorEngine};
pub use history::{History, HistoryEntry, DEFAULT_MAX_LEVELS};
pub use modes::ModeController;
pub use mutations::Mutation;
pub use overrides::OverrideStore;
pub use presets::{Preset, PresetError};
pub use selection::{SelectionController, SelectionState};
pub use toolbar::{toolbar_for, ToolbarKind};

// Re-export the data model for convenience
pub use vitrine_core::{
    EditableType, ElementDescriptor, Geometry, OverrideMap, StyleOverride, StyleValue,
};

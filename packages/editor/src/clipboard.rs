//! # Style Clipboard
//!
//! Single-slot, session-lived copy of one style override.
//!
//! The slot holds a value, never a reference into the live map: editing or
//! resetting the source element after a copy must not change what a later
//! paste produces. The slot carries no element id and is never persisted.

use vitrine_core::StyleOverride;

#[derive(Debug, Default)]
pub struct StyleClipboard {
    slot: Option<StyleOverride>,
}

impl StyleClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value copy, replacing any prior slot content.
    pub fn copy(&mut self, style: StyleOverride) {
        self.slot = Some(style);
    }

    /// The copied style, if any.
    pub fn peek(&self) -> Option<&StyleOverride> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Session reset. Nothing else clears the slot.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

//! # Mode Controller
//!
//! Editing / preview / mobile flags gating the engine.
//!
//! - `is_editing` gates the whole editing surface; the facade clears hover
//!   and selection atomically when it drops to `false`
//! - `is_preview` hides editing chrome while overrides stay applied
//!   ("preview as visitor")
//! - `is_mobile` switches the drawer vs. floating-palette presentation,
//!   independent of the actual viewport width

#[derive(Debug, Clone, Copy)]
pub struct ModeController {
    is_editing: bool,
    is_preview: bool,
    is_mobile: bool,
}

impl ModeController {
    /// Sessions start in editing mode, desktop presentation.
    pub fn new() -> Self {
        Self {
            is_editing: true,
            is_preview: false,
            is_mobile: false,
        }
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.is_editing = editing;
    }

    pub fn set_mobile(&mut self, mobile: bool) {
        self.is_mobile = mobile;
    }

    pub fn toggle_preview(&mut self) -> bool {
        self.is_preview = !self.is_preview;
        self.is_preview
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_preview(&self) -> bool {
        self.is_preview
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

//! # Selection Controller
//!
//! Tracks at most one hovered and one selected element.
//!
//! Hover and selection are independent: hovering a sibling while an element
//! is selected must not displace the selected element's toolbar. There is
//! no multi-select and no draft state; every edit commits instantly, so
//! replacing a selection carries no loss risk.

use vitrine_core::ElementDescriptor;

/// Collapsed view of the controller, for match-based consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionState {
    Idle,
    Hovering(ElementDescriptor),
    Selected(ElementDescriptor),
}

#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<ElementDescriptor>,
    hovered: Option<ElementDescriptor>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any prior selection immediately.
    pub fn select(&mut self, descriptor: ElementDescriptor) {
        tracing::trace!(id = %descriptor.id, "element selected");
        self.selected = Some(descriptor);
    }

    /// Update hover only; never touches the selection.
    pub fn hover(&mut self, descriptor: Option<ElementDescriptor>) {
        self.hovered = descriptor;
    }

    /// Back to idle (selection cleared, hover kept).
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Drop both hover and selection, for editing-mode exit.
    pub fn clear_all(&mut self) {
        self.selected = None;
        self.hovered = None;
    }

    pub fn selected(&self) -> Option<&ElementDescriptor> {
        self.selected.as_ref()
    }

    pub fn hovered(&self) -> Option<&ElementDescriptor> {
        self.hovered.as_ref()
    }

    /// Selection wins over hover when both are set.
    pub fn state(&self) -> SelectionState {
        if let Some(selected) = &self.selected {
            SelectionState::Selected(selected.clone())
        } else if let Some(hovered) = &self.hovered {
            SelectionState::Hovering(hovered.clone())
        } else {
            SelectionState::Idle
        }
    }
}

//! # Toolbar Dispatch
//!
//! Maps an element's type to the toolbar family that edits it.
//!
//! The presentation layer matches on [`ToolbarKind`] to pick a toolbar
//! component; the per-kind option sets (font lists, color swatches) live
//! there, not here. The match below is exhaustive over [`EditableType`] so
//! a new variant is a compile error, not a silent fallthrough.

use vitrine_core::EditableType;

/// Toolbar families the presentation layer implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarKind {
    /// Text controls: font, size, weight, alignment, color.
    Typography,
    /// Button controls: fill, radius, padding, label styling.
    Button,
    /// Image controls: fit, radius, shadow.
    Image,
    /// Card controls: surface, border, layout of the product tile.
    ProductCard,
    /// Box-model and flex controls for grouping elements.
    Layout,
    /// Icon controls: color, size.
    Icon,
    /// Divider controls: thickness, color, spacing.
    Divider,
    /// Fallback for variants without a dedicated toolbar. Currently
    /// unreachable; a test fails if a variant ever maps here so the gap is
    /// noticed instead of silently shipping a generic panel.
    Generic,
}

/// Pick the toolbar family for an element type.
pub fn toolbar_for(element_type: EditableType) -> ToolbarKind {
    match element_type {
        EditableType::Title | EditableType::Paragraph | EditableType::Text => {
            ToolbarKind::Typography
        }
        EditableType::Button => ToolbarKind::Button,
        EditableType::Image => ToolbarKind::Image,
        EditableType::ProductCard => ToolbarKind::ProductCard,
        EditableType::Container | EditableType::Section => ToolbarKind::Layout,
        EditableType::Icon => ToolbarKind::Icon,
        EditableType::Divider => ToolbarKind::Divider,
    }
}

//! # Editable Elements
//!
//! Descriptors for elements a storefront template exposes to the editor.
//!
//! A renderer marks a node as editable through the marker protocol (a type
//! tag, a stable id, an optional label). The binding layer translates a
//! click or hover on a marked node into an [`ElementDescriptor`], capturing
//! a live bounding rect for floating-UI placement. Descriptors are
//! transient: they describe a node in the current render pass and are never
//! persisted.

use serde::{Deserialize, Serialize};

/// The closed set of element kinds a storefront template can mark editable.
///
/// Serialized names match the marker protocol's type tags (`productCard`,
/// not `product_card`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditableType {
    Title,
    Paragraph,
    Button,
    Image,
    ProductCard,
    Container,
    Icon,
    Divider,
    Text,
    Section,
}

impl EditableType {
    /// Every variant, for exhaustiveness checks in tests.
    pub const ALL: [EditableType; 10] = [
        EditableType::Title,
        EditableType::Paragraph,
        EditableType::Button,
        EditableType::Image,
        EditableType::ProductCard,
        EditableType::Container,
        EditableType::Icon,
        EditableType::Divider,
        EditableType::Text,
        EditableType::Section,
    ];

    /// The marker-protocol type tag for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditableType::Title => "title",
            EditableType::Paragraph => "paragraph",
            EditableType::Button => "button",
            EditableType::Image => "image",
            EditableType::ProductCard => "productCard",
            EditableType::Container => "container",
            EditableType::Icon => "icon",
            EditableType::Divider => "divider",
            EditableType::Text => "text",
            EditableType::Section => "section",
        }
    }

    /// Parse a marker-protocol type tag.
    ///
    /// Returns `None` for unknown tags; the binding layer decides whether to
    /// skip the element or surface an error.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "title" => Some(EditableType::Title),
            "paragraph" => Some(EditableType::Paragraph),
            "button" => Some(EditableType::Button),
            "image" => Some(EditableType::Image),
            "productCard" => Some(EditableType::ProductCard),
            "container" => Some(EditableType::Container),
            "icon" => Some(EditableType::Icon),
            "divider" => Some(EditableType::Divider),
            "text" => Some(EditableType::Text),
            "section" => Some(EditableType::Section),
            _ => None,
        }
    }

    /// Default display label when the marker carries none.
    pub fn default_label(&self) -> &'static str {
        match self {
            EditableType::Title => "Title",
            EditableType::Paragraph => "Paragraph",
            EditableType::Button => "Button",
            EditableType::Image => "Image",
            EditableType::ProductCard => "Product card",
            EditableType::Container => "Container",
            EditableType::Icon => "Icon",
            EditableType::Divider => "Divider",
            EditableType::Text => "Text",
            EditableType::Section => "Section",
        }
    }
}

/// Bounding rect of a marked node at event time, in viewport pixels.
///
/// Captured for floating-palette placement only. Stale the moment the page
/// re-renders, so it is never serialized or compared for identity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A marked element as seen by the editor at event time.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDescriptor {
    /// Stable element id (the override-map key).
    pub id: String,

    /// Which toolbar family handles this element.
    pub element_type: EditableType,

    /// Display label for the palette header.
    pub label: String,

    /// Live bounding rect, transient.
    pub rect: Geometry,
}

impl ElementDescriptor {
    pub fn new(
        id: impl Into<String>,
        element_type: EditableType,
        label: impl Into<String>,
        rect: Geometry,
    ) -> Self {
        Self {
            id: id.into(),
            element_type,
            label: label.into(),
            rect,
        }
    }
}

//! # Marker Protocol
//!
//! How a renderer flags an element as editable.
//!
//! Three string-valued attributes per node: a type tag (required), a stable
//! id (strongly recommended), and an optional display label. Overrides are
//! keyed by the id, so its stability across re-renders is what keeps a
//! merchant's edits attached to the right element.

use thiserror::Error;
use vitrine_core::{EditableType, ElementDescriptor, Geometry};

/// Attribute carrying the [`EditableType`] tag.
pub const DATA_TYPE_ATTR: &str = "data-editable";

/// Attribute carrying the stable element id.
pub const DATA_ID_ATTR: &str = "data-editable-id";

/// Attribute carrying the optional display label.
pub const DATA_LABEL_ATTR: &str = "data-editable-label";

#[derive(Error, Debug, PartialEq)]
pub enum MarkerError {
    #[error("Missing data-editable attribute")]
    MissingType,

    #[error("Unknown editable type tag: {0}")]
    UnknownType(String),
}

/// A parsed marker, not yet tied to a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub element_type: EditableType,
    pub id: String,

    /// Label from the markup, if the author provided one.
    pub label: Option<String>,

    /// True when the id was synthesized because the markup carried none.
    ///
    /// Synthesized ids are NOT stable across re-renders: a re-rendered node
    /// gets a fresh timestamp id, and any override keyed to the old one is
    /// orphaned. This is a documented limitation of id-less markup, not
    /// something this layer papers over. Authors who want durable edits
    /// must supply explicit ids.
    pub synthesized: bool,
}

impl Marker {
    /// Parse the three marker attributes of one node.
    ///
    /// `now_millis` feeds fallback-id synthesis when `id` is absent; pass
    /// the event timestamp or wall clock.
    pub fn from_attrs(
        type_tag: Option<&str>,
        id: Option<&str>,
        label: Option<&str>,
        now_millis: u64,
    ) -> Result<Self, MarkerError> {
        let tag = type_tag.ok_or(MarkerError::MissingType)?;
        let element_type =
            EditableType::parse(tag).ok_or_else(|| MarkerError::UnknownType(tag.to_string()))?;

        let (id, synthesized) = match id {
            Some(id) if !id.is_empty() => (id.to_string(), false),
            _ => {
                let id = format!("{}-{}", element_type.as_str(), now_millis);
                tracing::warn!(
                    id = %id,
                    "marked element has no stable id; synthesized a volatile one"
                );
                (id, true)
            }
        };

        Ok(Self {
            element_type,
            id,
            label: label.filter(|l| !l.is_empty()).map(str::to_string),
            synthesized,
        })
    }

    /// Build the descriptor for a selection event, attaching the live rect
    /// captured from the node.
    pub fn into_descriptor(self, rect: Geometry) -> ElementDescriptor {
        let label = self
            .label
            .unwrap_or_else(|| self.element_type.default_label().to_string());
        ElementDescriptor::new(self.id, self.element_type, label, rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_marker_parses() {
        let marker = Marker::from_attrs(
            Some("productCard"),
            Some("featured-card"),
            Some("Featured product"),
            0,
        )
        .unwrap();

        assert_eq!(marker.element_type, EditableType::ProductCard);
        assert_eq!(marker.id, "featured-card");
        assert_eq!(marker.label.as_deref(), Some("Featured product"));
        assert!(!marker.synthesized);
    }

    #[test]
    fn test_missing_type_rejected() {
        let err = Marker::from_attrs(None, Some("x"), None, 0).unwrap_err();
        assert_eq!(err, MarkerError::MissingType);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = Marker::from_attrs(Some("carousel"), Some("x"), None, 0).unwrap_err();
        assert_eq!(err, MarkerError::UnknownType("carousel".to_string()));
    }

    #[test]
    fn test_missing_id_is_synthesized() {
        let marker = Marker::from_attrs(Some("button"), None, None, 1700000000123).unwrap();

        assert_eq!(marker.id, "button-1700000000123");
        assert!(marker.synthesized);
    }

    #[test]
    fn test_empty_id_is_synthesized() {
        let marker = Marker::from_attrs(Some("divider"), Some(""), None, 42).unwrap();
        assert!(marker.synthesized);
        assert_eq!(marker.id, "divider-42");
    }

    #[test]
    fn test_descriptor_falls_back_to_default_label() {
        let marker = Marker::from_attrs(Some("section"), Some("footer"), None, 0).unwrap();
        let descriptor = marker.into_descriptor(Geometry::new(0.0, 0.0, 1280.0, 240.0));

        assert_eq!(descriptor.label, "Section");
        assert_eq!(descriptor.rect.height, 240.0);
    }
}

//! # Vitrine Core
//!
//! Shared data model for the Vitrine visual editor: editable element
//! descriptors and the style-override value model.
//!
//! This crate holds plain data only. The editing engine lives in
//! `vitrine-editor`; the DOM-binding collaborator contract lives in
//! `vitrine-binding`. Both build on the types defined here.

mod element;
mod style;

pub use element::{EditableType, ElementDescriptor, Geometry};
pub use style::{
    is_known_property, OverrideMap, StyleOverride, StyleValue, KNOWN_PROPERTIES,
};

//! # Vitrine Binding
//!
//! The contract between the editing engine and whatever owns the DOM.
//!
//! The engine never touches the DOM. A hosting page implements
//! [`DomBinding`] against its renderer: it discovers marked elements,
//! forwards clicks and hovers as selection events, and re-applies the
//! current override map as inline styles after every render pass. This
//! crate supplies the marker-protocol parsing and the inline-style
//! serialization that implementation needs, plus the trait itself.
//!
//! ## The single-writer rule
//!
//! A declarative renderer may re-render a marked node at any time and wipe
//! imperatively written styles. Overrides are therefore the single writer
//! for the properties they govern and must be re-applied after every render
//! commit, idempotently; applying them once and walking away is a bug.
//! Hosts that can thread the override map through their render tree as
//! style props should prefer that over post-hoc DOM writes, which removes
//! the hazard entirely.

mod apply;
mod marker;

pub use apply::{inline_style, DomBinding};
pub use marker::{
    Marker, MarkerError, DATA_ID_ATTR, DATA_LABEL_ATTR, DATA_TYPE_ATTR,
};

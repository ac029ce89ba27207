//! # Override Application
//!
//! Inline-style serialization and the binding trait itself.
//!
//! Serialization is where the forward-compatibility story lands: the store
//! keeps unknown properties, but they are silently dropped here so a newer
//! editor's overrides degrade gracefully on an older renderer.

use vitrine_core::{is_known_property, OverrideMap, StyleOverride};

/// What a hosting page implements against its renderer.
///
/// Contract, in order of importance:
///
/// 1. `apply_overrides` runs after **every** render pass and re-stamps the
///    whole map as inline styles on every marked element. It must be
///    idempotent; the renderer may have wiped the previous application.
/// 2. `set_listeners_enabled(true)` attaches capture-phase click/hover
///    listeners to marked elements; `false` detaches them. The engine
///    flips this with editing mode.
/// 3. Marker discovery validates descriptors (geometry included) before
///    anything reaches `EditorEngine::select_element`; malformed markup is
///    this layer's problem, not the engine's.
pub trait DomBinding {
    /// Re-apply the map to every marked element. Called after each render
    /// commit and after every `on_change` notification.
    fn apply_overrides(&mut self, overrides: &OverrideMap);

    /// Attach or detach the capture-phase click/hover listeners.
    fn set_listeners_enabled(&mut self, enabled: bool);
}

/// Serialize one override as an inline-style declaration list.
///
/// Known properties are converted from the vocabulary's camelCase to CSS
/// kebab-case; unknown properties are dropped. An empty result means the
/// `style` attribute should be cleared, not left stale.
pub fn inline_style(style: &StyleOverride) -> String {
    let mut declarations = Vec::with_capacity(style.len());

    for (property, value) in style.iter() {
        if !is_known_property(property) {
            continue;
        }
        declarations.push(format!("{}: {}", camel_to_kebab(property), value));
    }

    declarations.join("; ")
}

fn camel_to_kebab(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

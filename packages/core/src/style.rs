//! # Style Overrides
//!
//! The value model for per-element style patches.
//!
//! An override is a partial mapping over a fixed CSS-like property
//! vocabulary. The engine never validates values and never interprets
//! properties; it stores what the toolbars send. Unknown keys are kept
//! as-is for forward compatibility; only the binding layer drops them
//! when serializing to inline styles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed property vocabulary the editor's toolbars write.
pub const KNOWN_PROPERTIES: [&str; 25] = [
    "color",
    "backgroundColor",
    "fontSize",
    "fontWeight",
    "fontFamily",
    "textAlign",
    "borderRadius",
    "borderColor",
    "borderWidth",
    "borderStyle",
    "opacity",
    "lineHeight",
    "padding",
    "margin",
    "width",
    "height",
    "boxShadow",
    "backgroundImage",
    "display",
    "alignItems",
    "justifyContent",
    "flexDirection",
    "letterSpacing",
    "textTransform",
    "gap",
];

/// Whether a property name belongs to the fixed vocabulary.
pub fn is_known_property(name: &str) -> bool {
    KNOWN_PROPERTIES.contains(&name)
}

/// A single style value: either CSS text or a bare number.
///
/// Numbers come from sliders (opacity, fontWeight); everything else is
/// stored as text exactly as the toolbar produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    pub fn text(value: impl Into<String>) -> Self {
        StyleValue::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

/// A partial style patch for one element.
///
/// Key order is irrelevant to semantics; `BTreeMap` keeps serialization and
/// snapshot comparison deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleOverride {
    properties: BTreeMap<String, StyleValue>,
}

impl StyleOverride {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an override with a single property, mostly for toolbars that
    /// commit one control at a time.
    pub fn single(property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        let mut style = Self::new();
        style.set(property, value);
        style
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.properties.remove(property)
    }

    /// Merge `patch` into this override; patch keys win.
    pub fn merge(&mut self, patch: &StyleOverride) {
        for (property, value) in &patch.properties {
            self.properties.insert(property.clone(), value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, StyleValue)> for StyleOverride {
    fn from_iter<T: IntoIterator<Item = (String, StyleValue)>>(iter: T) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

/// Element id → style override. Keys are unique, order irrelevant.
pub type OverrideMap = BTreeMap<String, StyleOverride>;

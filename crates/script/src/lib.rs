//! Formatted screenplay element model.
//! This crate defines the in-memory representation of screenplay content
//! after parsing but before pagination: a flat, ordered sequence of
//! immutable elements with a semantic kind and optional style overrides.

use courier_style::ElementStyle;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// --- Shared Types ---

/// A string type for element content.
pub type TextStr = String;

/// A reference-counted, read-only element. Pages never own their
/// elements; they share them through this handle.
pub type SharedElement = Arc<Element>;

/// The semantic kind of a screenplay content unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
}

impl ElementKind {
    /// Stable string tag, used as the style-table key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::SceneHeading => "scene-heading",
            ElementKind::Action => "action",
            ElementKind::Character => "character",
            ElementKind::Dialogue => "dialogue",
            ElementKind::Parenthetical => "parenthetical",
            ElementKind::Transition => "transition",
        }
    }
}

/// Metadata attached to every element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementMetadata {
    /// Stable identity assigned by the parser, if any.
    pub id: Option<TextStr>,
    /// Per-element deviations from the sheet format.
    pub style_override: Option<ElementStyle>,
}

/// One unit of screenplay content. Immutable once produced by the
/// parsing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub kind: ElementKind,
    pub text: TextStr,
    #[serde(default)]
    pub meta: ElementMetadata,
}

impl Element {
    pub fn new(kind: ElementKind, text: impl Into<TextStr>) -> Self {
        Self {
            kind,
            text: text.into(),
            meta: ElementMetadata::default(),
        }
    }

    pub fn with_style(mut self, style_override: ElementStyle) -> Self {
        self.meta.style_override = Some(style_override);
        self
    }

    /// Shared handle for handing the element to the paginator.
    pub fn shared(self) -> SharedElement {
        Arc::new(self)
    }

    pub fn kind_tag(&self) -> &'static str {
        self.kind.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_are_kebab_case() {
        assert_eq!(ElementKind::SceneHeading.as_str(), "scene-heading");
        assert_eq!(ElementKind::Dialogue.as_str(), "dialogue");
    }

    #[test]
    fn serde_tags_match_kind_tags() {
        let json = serde_json::to_string(&ElementKind::SceneHeading).unwrap();
        assert_eq!(json, r#""scene-heading""#);
    }

    #[test]
    fn element_deserializes_without_meta() {
        let element: Element =
            serde_json::from_str(r#"{ "kind": "action", "text": "They run." }"#).unwrap();
        assert_eq!(element.kind, ElementKind::Action);
        assert_eq!(element.meta, ElementMetadata::default());
    }

    #[test]
    fn identical_elements_hash_identically() {
        use std::hash::{DefaultHasher, Hash, Hasher};
        let a = Element::new(ElementKind::Action, "They run.");
        let b = Element::new(ElementKind::Action, "They run.");
        let hash = |e: &Element| {
            let mut hasher = DefaultHasher::new();
            e.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&b));
        let c = Element::new(ElementKind::Dialogue, "They run.");
        assert_ne!(hash(&a), hash(&c));
    }
}

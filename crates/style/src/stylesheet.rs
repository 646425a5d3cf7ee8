//! Sheet formats: page geometry plus the per-kind element style table.
use crate::dimension::{Margins, PageSize};
use courier_types::Rect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Formatting attributes for one element kind. All lengths are points,
/// measured from the left edge of the page content box.
///
/// Every field is optional so the struct doubles as a per-element
/// override: an unset field falls through to the kind's sheet entry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementStyle {
    /// Left indent inside the content box.
    pub indent: Option<f32>,
    /// Column width cap; unset means the rest of the content box.
    pub width: Option<f32>,
    /// Blank lines above the element. Suppressed at the top of a page.
    pub lines_before: Option<u32>,
    /// Keep this element on the same page as its successor.
    pub keep_with_next: Option<bool>,
}

impl ElementStyle {
    /// Cascade: fields set in `over` win over `self`.
    pub fn merged(&self, over: Option<&ElementStyle>) -> ElementStyle {
        let Some(over) = over else { return *self };
        ElementStyle {
            indent: over.indent.or(self.indent),
            width: over.width.or(self.width),
            lines_before: over.lines_before.or(self.lines_before),
            keep_with_next: over.keep_with_next.or(self.keep_with_next),
        }
    }

    pub fn keeps_with_next(&self) -> bool {
        self.keep_with_next.unwrap_or(false)
    }
}

fn hash_opt_f32<H: Hasher>(value: Option<f32>, state: &mut H) {
    match value {
        Some(v) => {
            1u8.hash(state);
            v.to_bits().hash(state);
        }
        None => 0u8.hash(state),
    }
}

impl Hash for ElementStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_opt_f32(self.indent, state);
        hash_opt_f32(self.width, state);
        self.lines_before.hash(state);
        self.keep_with_next.hash(state);
    }
}

impl Eq for ElementStyle {}

/// Page geometry plus the style table, keyed by element kind tag.
///
/// The default is the standard US screenplay sheet: Letter, 1in margins
/// with a 1.5in binding edge, Courier line grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetFormat {
    pub size: PageSize,
    pub margins: Margins,
    pub styles: BTreeMap<String, ElementStyle>,
}

impl SheetFormat {
    pub fn screenplay() -> Self {
        let mut styles = BTreeMap::new();
        styles.insert(
            "scene-heading".to_string(),
            ElementStyle {
                lines_before: Some(2),
                keep_with_next: Some(true),
                ..Default::default()
            },
        );
        styles.insert(
            "action".to_string(),
            ElementStyle {
                lines_before: Some(1),
                ..Default::default()
            },
        );
        styles.insert(
            "character".to_string(),
            ElementStyle {
                indent: Some(158.4),
                lines_before: Some(1),
                keep_with_next: Some(true),
                ..Default::default()
            },
        );
        styles.insert(
            "parenthetical".to_string(),
            ElementStyle {
                indent: Some(115.2),
                width: Some(144.0),
                keep_with_next: Some(true),
                ..Default::default()
            },
        );
        styles.insert(
            "dialogue".to_string(),
            ElementStyle {
                indent: Some(72.0),
                width: Some(252.0),
                ..Default::default()
            },
        );
        styles.insert(
            "transition".to_string(),
            ElementStyle {
                indent: Some(288.0),
                lines_before: Some(1),
                ..Default::default()
            },
        );

        Self {
            size: PageSize::Letter,
            margins: Margins {
                top: 72.0,
                right: 72.0,
                bottom: 72.0,
                left: 108.0,
            },
            styles,
        }
    }

    /// Base style for an element kind tag; unknown tags get an empty style.
    pub fn style_for(&self, kind: &str) -> ElementStyle {
        self.styles.get(kind).copied().unwrap_or_default()
    }

    /// The page content box, in page coordinates.
    pub fn content_rect(&self) -> Rect {
        let (width, height) = self.size.dimensions_pt();
        Rect::new(
            self.margins.left,
            self.margins.top,
            (width - self.margins.left - self.margins.right).max(0.0),
            (height - self.margins.top - self.margins.bottom).max(0.0),
        )
    }

    pub fn content_width(&self) -> f32 {
        self.content_rect().width
    }

    /// Vertical space available on one page.
    pub fn page_budget(&self) -> f32 {
        self.content_rect().height
    }
}

impl Default for SheetFormat {
    fn default() -> Self {
        Self::screenplay()
    }
}

impl Hash for SheetFormat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.margins.hash(state);
        self.styles.len().hash(state);
        for (kind, style) in &self.styles {
            kind.hash(state);
            style.hash(state);
        }
    }
}

impl Eq for SheetFormat {}

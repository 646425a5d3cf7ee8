use crate::elements::PaginationResult;
use courier_script::{Element, ElementKind, SharedElement};
use courier_style::{ElementStyle, Margins, PageSize, SheetFormat};
use std::collections::BTreeMap;

/// A sheet with an exact `budget_lines` vertical budget on the 12pt grid
/// and a measure wide enough that short test lines never wrap. The style
/// table starts empty so tests control spacing and break rules directly.
pub fn bare_format(budget_lines: u32) -> SheetFormat {
    SheetFormat {
        size: PageSize::Custom {
            width: 452.0,
            height: budget_lines as f32 * 12.0 + 24.0,
        },
        margins: Margins {
            top: 12.0,
            right: 10.0,
            bottom: 12.0,
            left: 10.0,
        },
        styles: BTreeMap::new(),
    }
}

/// An element measuring exactly `lines` grid lines, tagged with `id` so
/// tests can assert page membership.
pub fn element(id: &str, kind: ElementKind, lines: usize) -> SharedElement {
    let text = (0..lines)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let mut element = Element::new(kind, text);
    element.meta.id = Some(id.to_string());
    element.shared()
}

/// Rebuild an element with a keep-with-next override.
pub fn keep(element: SharedElement) -> SharedElement {
    let mut element = (*element).clone();
    let over = element.meta.style_override.take().unwrap_or_default();
    element.meta.style_override = Some(ElementStyle {
        keep_with_next: Some(true),
        ..over
    });
    element.shared()
}

/// Page membership by element id, for readable assertions.
pub fn page_ids(result: &PaginationResult) -> Vec<Vec<String>> {
    result
        .pages
        .iter()
        .map(|page| {
            page.elements
                .iter()
                .map(|placed| placed.element.meta.id.clone().unwrap_or_default())
                .collect()
        })
        .collect()
}

use courier_script::SharedElement;

/// An element placed on a page. `y` is relative to the top of the page
/// content box; rendering collaborators add the page margins themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedElement {
    pub element: SharedElement,
    pub y: f32,
    pub height: f32,
}

/// One page of placed elements. Pages hold shared references only and
/// are discarded wholesale on re-pagination.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub elements: Vec<PlacedElement>,
    /// Cursor position after the last placed element. May exceed the page
    /// budget only for a dedicated oversized-element page.
    pub used_height: f32,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

/// The complete output of one pagination pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaginationResult {
    pub pages: Vec<Page>,
    pub total_pages: usize,
}

impl PaginationResult {
    pub fn new(pages: Vec<Page>) -> Self {
        let total_pages = pages.len();
        Self { pages, total_pages }
    }

    /// All placed elements in reading order. Concatenating pages this way
    /// must reproduce the paginated input exactly.
    pub fn flattened(&self) -> impl Iterator<Item = &SharedElement> {
        self.pages
            .iter()
            .flat_map(|page| page.elements.iter().map(|placed| &placed.element))
    }
}

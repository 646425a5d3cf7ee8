//! Page break decisions.

use crate::algorithms::pagination::check_element_fit;
use courier_style::ElementStyle;

/// Everything the policy needs to rule on one element.
#[derive(Debug, Clone, Copy)]
pub struct BreakProbe<'a> {
    pub style: &'a ElementStyle,
    pub element_height: f32,
    pub spacing_before: f32,
    pub cursor_y: f32,
    pub budget: f32,
    pub page_is_empty: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BreakPolicy;

impl BreakPolicy {
    /// Whether the probed element must move to the next page.
    ///
    /// An element that does not fit an empty page is placed anyway: the
    /// dedicated-page rule for oversized elements guarantees progress
    /// instead of looping on an element no page can hold.
    pub fn should_break_before(&self, probe: &BreakProbe<'_>) -> bool {
        let needed = probe.spacing_before + probe.element_height;
        let analysis = check_element_fit(probe.cursor_y, needed, probe.budget);
        analysis.should_break && !probe.page_is_empty
    }

    /// Whether closing a page directly after this element would violate
    /// its break rule.
    pub fn keeps_with_next(&self, style: &ElementStyle) -> bool {
        style.keeps_with_next()
    }
}

//! The pagination state machine.
//!
//! Elements are processed strictly in order. The paginator accumulates
//! them onto an open page, asking the measurer for heights and the break
//! policy for decisions, and closes the page when a break is signaled.
//! Closing a page pulls any trailing keep-with-next run back into the
//! work queue so a scene heading or character cue is never stranded at a
//! page bottom. Re-pagination is always from scratch; the cache layer
//! exists so that scratch passes are rare.

use crate::algorithms::pagination::check_element_fit;
use crate::cache::{MeasureCacheKey, PaginationCache};
use crate::elements::{Page, PaginationResult, PlacedElement};
use crate::measure::LineMeasurer;
use crate::policy::{BreakPolicy, BreakProbe};
use courier_script::{Element, SharedElement};
use courier_style::{ElementStyle, FontMetrics, SheetFormat};
use log::{debug, warn};
use std::collections::VecDeque;
use std::hash::{DefaultHasher, Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaginatorState {
    Accumulating,
    PageClosing,
}

pub struct Paginator<'a> {
    format: &'a SheetFormat,
    measurer: LineMeasurer,
    policy: BreakPolicy,
    cache: Option<&'a PaginationCache>,
}

impl<'a> Paginator<'a> {
    pub fn new(format: &'a SheetFormat, metrics: FontMetrics) -> Self {
        Self {
            format,
            measurer: LineMeasurer::new(metrics, format.content_width()),
            policy: BreakPolicy,
            cache: None,
        }
    }

    /// Route measurements through the given cache.
    pub fn with_cache(mut self, cache: &'a PaginationCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Lay the elements into pages. Deterministic: the same input,
    /// format, and metrics always produce the same result.
    pub fn paginate(&self, elements: &[SharedElement]) -> PaginationResult {
        let budget = self.format.page_budget();
        let line_height = self.measurer.line_height();

        let mut work: VecDeque<SharedElement> = elements.iter().cloned().collect();
        let mut pages: Vec<Page> = Vec::new();
        let mut open: Vec<PlacedElement> = Vec::new();
        let mut cursor = 0.0_f32;
        let mut state = PaginatorState::Accumulating;

        while let Some(element) = work.front().cloned() {
            match state {
                PaginatorState::Accumulating => {
                    let style = self.effective_style(&element);
                    let height = self.measure_cached(&element, &style);
                    // Spacing above an element vanishes at the top of a page.
                    let spacing = if open.is_empty() {
                        0.0
                    } else {
                        style.lines_before.unwrap_or(0) as f32 * line_height
                    };

                    let probe = BreakProbe {
                        style: &style,
                        element_height: height,
                        spacing_before: spacing,
                        cursor_y: cursor,
                        budget,
                        page_is_empty: open.is_empty(),
                    };
                    if self.policy.should_break_before(&probe) {
                        state = PaginatorState::PageClosing;
                        continue;
                    }

                    if open.is_empty() && check_element_fit(0.0, height, budget).should_break {
                        warn!(
                            "[PAGINATE] {} element has a height of {:.2} which exceeds \
                             the page content height of {:.2}; placing it on a dedicated page.",
                            element.kind_tag(),
                            height,
                            budget
                        );
                    }

                    open.push(PlacedElement {
                        element: element.clone(),
                        y: cursor + spacing,
                        height,
                    });
                    cursor += spacing + height;
                    work.pop_front();
                }
                PaginatorState::PageClosing => {
                    // A trailing keep-with-next run moves to the next page
                    // with the element that triggered the break. The guard
                    // keeps at least one element on the page, so every close
                    // makes progress and no page is ever emitted empty.
                    let mut pulled: Vec<PlacedElement> = Vec::new();
                    loop {
                        let trailing_keep = match open.last() {
                            Some(last) if open.len() > 1 => {
                                self.policy.keeps_with_next(&self.effective_style(&last.element))
                            }
                            _ => false,
                        };
                        if !trailing_keep {
                            break;
                        }
                        if let Some(placed) = open.pop() {
                            pulled.push(placed);
                        }
                    }
                    if let Some(last) = open.last() {
                        if open.len() == 1
                            && self.policy.keeps_with_next(&self.effective_style(&last.element))
                        {
                            debug!(
                                "[PAGINATE] keep-with-next on {} yields: moving it would \
                                 empty the page.",
                                last.element.kind_tag()
                            );
                        }
                    }
                    // `pulled` is in reverse document order; pushing front in
                    // that order restores document order ahead of the
                    // unplaced element.
                    for placed in pulled {
                        work.push_front(placed.element);
                    }

                    let used_height = open.last().map(|p| p.y + p.height).unwrap_or(0.0);
                    pages.push(Page {
                        elements: std::mem::take(&mut open),
                        used_height,
                    });
                    cursor = 0.0;
                    state = PaginatorState::Accumulating;
                }
            }
        }

        if !open.is_empty() {
            let used_height = open.last().map(|p| p.y + p.height).unwrap_or(0.0);
            pages.push(Page {
                elements: open,
                used_height,
            });
        }

        let result = PaginationResult::new(pages);
        debug!(
            "[PAGINATE] Produced {} pages from {} elements.",
            result.total_pages,
            elements.len()
        );
        result
    }

    fn effective_style(&self, element: &Element) -> ElementStyle {
        self.format
            .style_for(element.kind_tag())
            .merged(element.meta.style_override.as_ref())
    }

    fn measure_cached(&self, element: &Element, style: &ElementStyle) -> f32 {
        let Some(cache) = self.cache else {
            return self.measurer.measure(element, style);
        };
        let key = MeasureCacheKey {
            text: element.text.clone(),
            style_hash: self.measure_key_hash(style),
        };
        if let Some(height) = cache.measurement(&key) {
            return height;
        }
        let height = self.measurer.measure(element, style);
        cache.store_measurement(key, height);
        height
    }

    /// Measurement cache key component: heights depend on the style, the
    /// metrics, and the content width, so all three participate.
    fn measure_key_hash(&self, style: &ElementStyle) -> u64 {
        let mut hasher = DefaultHasher::new();
        style.hash(&mut hasher);
        self.measurer.metrics().hash(&mut hasher);
        self.format.content_width().to_bits().hash(&mut hasher);
        hasher.finish()
    }
}

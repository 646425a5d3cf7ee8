//! Line measurement for fixed-pitch screenplay text.
//!
//! Heights come straight off the line grid: wrap the element's text into
//! the column its style allows, multiply by the line height. The measurer
//! is pure; a malformed style or degenerate metrics never fail a
//! pagination pass, they fall back to a default measure and are logged.

use courier_script::Element;
use courier_style::{ElementStyle, FontMetrics};
use log::warn;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("font metrics are unusable (char width {0:.2}, line height {1:.2})")]
    BadMetrics(f32, f32),
    #[error("indent {indent:.1}pt leaves no room in a {content_width:.1}pt content box")]
    IndentTooWide { indent: f32, content_width: f32 },
    #[error("column width {0:.1}pt is not a positive finite length")]
    BadWidth(f32),
}

pub struct LineMeasurer {
    metrics: FontMetrics,
    content_width: f32,
}

impl LineMeasurer {
    pub fn new(metrics: FontMetrics, content_width: f32) -> Self {
        Self {
            metrics,
            content_width,
        }
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn line_height(&self) -> f32 {
        if self.metrics.is_well_formed() {
            self.metrics.line_height
        } else {
            FontMetrics::courier_12().line_height
        }
    }

    /// Rendered height of `element` under `style`, in points.
    ///
    /// Deterministic for a given (element, style, metrics, content width).
    /// Inter-element spacing is the paginator's concern and is not included.
    pub fn measure(&self, element: &Element, style: &ElementStyle) -> f32 {
        let columns = match self.columns_for(style) {
            Ok(columns) => columns,
            Err(e) => {
                warn!(
                    "[MEASURE] Falling back to default measure for {} element: {}",
                    element.kind_tag(),
                    e
                );
                self.default_columns()
            }
        };
        wrap_count(&element.text, columns) as f32 * self.line_height()
    }

    /// Columns available to an element, derived from its indent/width.
    fn columns_for(&self, style: &ElementStyle) -> Result<usize, MeasureError> {
        if !self.metrics.is_well_formed() {
            return Err(MeasureError::BadMetrics(
                self.metrics.char_width,
                self.metrics.line_height,
            ));
        }

        let indent = style.indent.unwrap_or(0.0);
        if !indent.is_finite() || indent < 0.0 || indent >= self.content_width {
            return Err(MeasureError::IndentTooWide {
                indent,
                content_width: self.content_width,
            });
        }

        let available = self.content_width - indent;
        let measure = match style.width {
            Some(width) if !width.is_finite() || width <= 0.0 => {
                return Err(MeasureError::BadWidth(width));
            }
            Some(width) => width.min(available),
            None => available,
        };

        Ok(((measure / self.metrics.char_width) as usize).max(1))
    }

    fn default_columns(&self) -> usize {
        let metrics = if self.metrics.is_well_formed() {
            self.metrics
        } else {
            FontMetrics::courier_12()
        };
        let width = if self.content_width.is_finite() && self.content_width > 0.0 {
            self.content_width
        } else {
            432.0
        };
        ((width / metrics.char_width) as usize).max(1)
    }
}

/// Number of grid lines `text` occupies when word-wrapped to `columns`
/// characters. Words wider than the measure are broken hard; an empty
/// element still occupies one line.
pub fn wrap_count(text: &str, columns: usize) -> usize {
    let columns = columns.max(1);
    let mut lines = 0;

    for paragraph in text.split('\n') {
        lines += 1;
        let mut current = 0usize;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            let needed = if current == 0 {
                word_len
            } else {
                current + 1 + word_len
            };
            if needed <= columns {
                current = needed;
                continue;
            }
            if word_len <= columns {
                lines += 1;
                current = word_len;
                continue;
            }
            // Hard break: the word alone is wider than the measure.
            if current > 0 {
                lines += 1;
                current = 0;
            }
            let mut remaining = word_len;
            while remaining > columns {
                remaining -= columns;
                lines += 1;
            }
            current = remaining;
        }
    }

    lines.max(1)
}

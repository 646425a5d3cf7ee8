//! Fixed-pitch font metrics.
//!
//! Screenplay layout is line-grid based: a single monospaced face at a
//! single size, so the metrics collapse to one character advance and one
//! line height. The `version` tag is bumped by the formatting layer
//! whenever the underlying face changes, so cached pagination results
//! keyed on these metrics go stale correctly.
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontMetrics {
    /// Horizontal advance of one character, in points.
    pub char_width: f32,
    /// Vertical advance of one line, in points.
    pub line_height: f32,
    /// Identity of the measured face; participates in fingerprints.
    pub version: u32,
}

impl FontMetrics {
    /// Courier 12pt, the screenplay standard: 10 characters per inch,
    /// 6 lines per inch.
    pub fn courier_12() -> Self {
        Self {
            char_width: 7.2,
            line_height: 12.0,
            version: 1,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.char_width.is_finite()
            && self.char_width > 0.0
            && self.line_height.is_finite()
            && self.line_height > 0.0
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::courier_12()
    }
}

impl Hash for FontMetrics {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.char_width.to_bits().hash(state);
        self.line_height.to_bits().hash(state);
        self.version.hash(state);
    }
}

impl Eq for FontMetrics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{DefaultHasher, Hash, Hasher};

    fn hash_of(metrics: &FontMetrics) -> u64 {
        let mut hasher = DefaultHasher::new();
        metrics.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn default_metrics_are_well_formed() {
        assert!(FontMetrics::default().is_well_formed());
    }

    #[test]
    fn rejects_degenerate_metrics() {
        let metrics = FontMetrics {
            char_width: 0.0,
            ..FontMetrics::courier_12()
        };
        assert!(!metrics.is_well_formed());

        let metrics = FontMetrics {
            line_height: f32::NAN,
            ..FontMetrics::courier_12()
        };
        assert!(!metrics.is_well_formed());
    }

    #[test]
    fn version_changes_the_hash() {
        let a = FontMetrics::courier_12();
        let b = FontMetrics { version: 2, ..a };
        assert_ne!(hash_of(&a), hash_of(&b));
    }
}

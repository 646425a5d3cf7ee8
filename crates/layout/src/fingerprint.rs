//! Content+format fingerprints for cached pagination results.

use courier_script::SharedElement;
use courier_style::{FontMetrics, SheetFormat};
use std::hash::{DefaultHasher, Hash, Hasher};

/// A content-derived key identifying one (document, format, metrics)
/// combination. Any edit to the source elements, the sheet format, or
/// the font metrics changes the fingerprint, which is the cache's only
/// invalidation mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

pub fn fingerprint_document(
    elements: &[SharedElement],
    format: &SheetFormat,
    metrics: &FontMetrics,
) -> Fingerprint {
    let mut hasher = DefaultHasher::new();
    elements.len().hash(&mut hasher);
    for element in elements {
        element.hash(&mut hasher);
    }
    format.hash(&mut hasher);
    metrics.hash(&mut hasher);
    Fingerprint(hasher.finish())
}

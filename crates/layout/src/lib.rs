pub mod algorithms;
pub mod cache;
pub mod config;
pub mod elements;
pub mod fingerprint;
pub mod measure;
pub mod paginator;
pub mod policy;

pub use self::cache::{MeasureCacheKey, PaginationCache};
pub use self::config::LayoutConfig;
pub use self::elements::{Page, PaginationResult, PlacedElement};
pub use self::fingerprint::{Fingerprint, fingerprint_document};
pub use self::measure::{LineMeasurer, MeasureError};
pub use self::paginator::Paginator;
pub use self::policy::{BreakPolicy, BreakProbe};

// Re-export geometry types used by collaborators to prevent type mismatches
pub use courier_types::{Rect, Size};

#[cfg(test)]
mod test_utils;

//! Screenplay pagination engine.
//!
//! `courier` lays an ordered sequence of formatted screenplay elements
//! into fixed-size pages. Parsing and rendering live in collaborating
//! components; this crate owns measurement, break policy, page
//! assembly, result caching, and the per-document background
//! repagination session.

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::PaginationSession;

// Re-export the engine surface so collaborators depend on one crate.
pub use courier_layout::{
    BreakPolicy, BreakProbe, Fingerprint, LayoutConfig, LineMeasurer, MeasureError, Page,
    PaginationCache, PaginationResult, Paginator, PlacedElement, fingerprint_document,
};
pub use courier_script::{Element, ElementKind, ElementMetadata, SharedElement, TextStr};
pub use courier_style::{
    ElementStyle, FontMetrics, Margins, PageSize, SheetFormat, StyleError,
};
pub use courier_types::{Rect, Size};

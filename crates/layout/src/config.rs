#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// The maximum number of entries held in the engine's caches (memoized
    /// pagination results and per-run measurements) before a table is reset.
    ///
    /// - **Higher values**: more repagination passes served from cache, but
    ///   higher memory usage.
    /// - **Lower values**: lower memory usage, but more full recomputes
    ///   after format or metrics churn.
    ///
    /// Defaults to `256`.
    pub cache_capacity: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 256,
        }
    }
}

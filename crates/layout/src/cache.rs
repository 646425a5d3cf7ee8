use crate::config::LayoutConfig;
use crate::elements::PaginationResult;
use crate::fingerprint::Fingerprint;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

// --- Cache Keys ---

#[derive(Hash, PartialEq, Eq, Clone)]
pub struct MeasureCacheKey {
    pub text: String,
    pub style_hash: u64,
}

// --- The Manager ---

/// Manages the long-lived caches for the pagination engine.
///
/// Result entries are `Arc`-shared, so replacement is copy-on-write: a
/// renderer holding a result keeps reading its snapshot while a fresh
/// pass is inserted. A poisoned table reads as a miss and is rebuilt by
/// the next pass; cache trouble is never surfaced to the caller.
pub struct PaginationCache {
    results: RwLock<HashMap<Fingerprint, Arc<PaginationResult>>>,
    measurements: RwLock<HashMap<MeasureCacheKey, f32>>,
    capacity: usize,
}

impl PaginationCache {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
            measurements: RwLock::new(HashMap::new()),
            capacity: config.cache_capacity.max(1),
        }
    }

    pub fn get(&self, fingerprint: Fingerprint) -> Option<Arc<PaginationResult>> {
        self.results.read().ok()?.get(&fingerprint).cloned()
    }

    pub fn put(&self, fingerprint: Fingerprint, result: Arc<PaginationResult>) {
        if let Ok(mut table) = self.results.write() {
            if table.len() >= self.capacity && !table.contains_key(&fingerprint) {
                table.clear();
            }
            table.insert(fingerprint, result);
        }
    }

    pub fn measurement(&self, key: &MeasureCacheKey) -> Option<f32> {
        self.measurements.read().ok()?.get(key).copied()
    }

    pub fn store_measurement(&self, key: MeasureCacheKey, height: f32) {
        if let Ok(mut table) = self.measurements.write() {
            if table.len() >= self.capacity.saturating_mul(64) {
                table.clear();
            }
            table.insert(key, height);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut c) = self.results.write() {
            c.clear();
        }
        if let Ok(mut c) = self.measurements.write() {
            c.clear();
        }
    }
}

impl Default for PaginationCache {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

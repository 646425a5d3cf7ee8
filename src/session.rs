//! Per-document background repagination.
//!
//! The session is the explicit context object between an editing
//! surface and the pagination engine:
//!
//! ```text
//! editor -> submit() -> channel -> worker -> paginate -> watch slot
//!    |                     |  (coalesce + cancel)          |
//! edit snapshots      newest edit wins              renderers observe
//! ```
//!
//! Edits are queued over an `async-channel`; the single worker collapses
//! the queue to the newest snapshot before doing any work, so pagination
//! runs only after edits settle. Every submission bumps a generation
//! counter, and a pass whose generation is stale by completion time is
//! discarded rather than merged. Results are published copy-on-write:
//! an `Arc` into a `watch` slot, so renderers never observe a partially
//! built result.

use crate::error::SessionError;
use courier_layout::{LayoutConfig, PaginationCache, PaginationResult, Paginator, fingerprint_document};
use courier_script::SharedElement;
use courier_style::{FontMetrics, SheetFormat};
use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tokio::task;

struct EditRequest {
    generation: u64,
    elements: Vec<SharedElement>,
    format: SheetFormat,
    metrics: FontMetrics,
}

/// A per-document pagination context. Owns the background worker, the
/// result cache, and the published-latest slot. Lifecycle is explicit:
/// [`PaginationSession::spawn`] to start, [`PaginationSession::close`]
/// to tear down.
pub struct PaginationSession {
    sender: async_channel::Sender<EditRequest>,
    latest: watch::Receiver<Option<Arc<PaginationResult>>>,
    generation: Arc<AtomicU64>,
    worker: Option<task::JoinHandle<()>>,
}

impl PaginationSession {
    /// Start the session worker. Must be called from within a Tokio
    /// runtime; the heavy pagination passes run on the blocking pool.
    pub fn spawn(config: LayoutConfig) -> Self {
        let (sender, receiver) = async_channel::unbounded();
        let (publisher, latest) = watch::channel(None);
        let generation = Arc::new(AtomicU64::new(0));
        let cache = Arc::new(PaginationCache::new(config));

        let worker = task::spawn(run_worker(
            receiver,
            publisher,
            Arc::clone(&generation),
            cache,
        ));

        Self {
            sender,
            latest,
            generation,
            worker: Some(worker),
        }
    }

    /// Queue a fresh document snapshot for pagination. Returns
    /// immediately; the result appears in [`PaginationSession::latest`]
    /// once a pass for a still-current snapshot completes. Any in-flight
    /// pass for an older snapshot becomes stale and is discarded.
    pub fn submit(
        &self,
        elements: Vec<SharedElement>,
        format: SheetFormat,
        metrics: FontMetrics,
    ) -> Result<(), SessionError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.sender
            .try_send(EditRequest {
                generation,
                elements,
                format,
                metrics,
            })
            .map_err(|_| SessionError::Closed)
    }

    /// The most recently published result, if any pass has completed.
    pub fn latest(&self) -> Option<Arc<PaginationResult>> {
        self.latest.borrow().clone()
    }

    /// A receiver that wakes whenever a new result is published.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<PaginationResult>>> {
        self.latest.clone()
    }

    /// Stop accepting edits, drain the queue, and wait for the worker.
    pub async fn close(mut self) -> Result<(), SessionError> {
        self.sender.close();
        if let Some(worker) = self.worker.take() {
            worker
                .await
                .map_err(|e| SessionError::Worker(e.to_string()))?;
        }
        Ok(())
    }
}

async fn run_worker(
    receiver: async_channel::Receiver<EditRequest>,
    publisher: watch::Sender<Option<Arc<PaginationResult>>>,
    generation: Arc<AtomicU64>,
    cache: Arc<PaginationCache>,
) {
    info!("[SESSION] Pagination worker started.");
    while let Ok(mut request) = receiver.recv().await {
        // Let edits settle: collapse the queue to the newest snapshot
        // before doing any work.
        while let Ok(newer) = receiver.try_recv() {
            debug!(
                "[SESSION] Edit #{} superseded by #{} before pagination.",
                request.generation, newer.generation
            );
            request = newer;
        }
        if request.generation != generation.load(Ordering::SeqCst) {
            debug!("[SESSION] Skipping stale edit #{}.", request.generation);
            continue;
        }

        let fingerprint =
            fingerprint_document(&request.elements, &request.format, &request.metrics);
        if let Some(hit) = cache.get(fingerprint) {
            debug!(
                "[SESSION] Edit #{} served from cache ({} pages).",
                request.generation, hit.total_pages
            );
            publisher.send_replace(Some(hit));
            continue;
        }

        let EditRequest {
            generation: edit_generation,
            elements,
            format,
            metrics,
        } = request;
        let pass_cache = Arc::clone(&cache);
        let pass = task::spawn_blocking(move || {
            Paginator::new(&format, metrics)
                .with_cache(&pass_cache)
                .paginate(&elements)
        })
        .await;

        match pass {
            Ok(result) => {
                if generation.load(Ordering::SeqCst) != edit_generation {
                    debug!(
                        "[SESSION] Discarding stale pagination pass #{}.",
                        edit_generation
                    );
                    continue;
                }
                let result = Arc::new(result);
                cache.put(fingerprint, Arc::clone(&result));
                debug!(
                    "[SESSION] Published pagination pass #{} ({} pages).",
                    edit_generation, result.total_pages
                );
                publisher.send_replace(Some(result));
            }
            Err(e) => warn!("[SESSION] Pagination pass #{} failed: {}.", edit_generation, e),
        }
    }
    info!("[SESSION] Pagination worker shutting down.");
}

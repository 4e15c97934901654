//! Offline queue replay
//!
//! One pass over both queues: every entry is re-sent once, entries the
//! backend accepts are removed by their queued-at timestamp, everything else
//! stays for the next pass. There is no backoff and no retry limit.
//!
//! Delivery is at-least-once: if removal fails after the backend accepted
//! an entry, the entry is sent again on the next pass.

use crate::config::ApiConfig;
use crate::forms::{FormKind, QueuedApplication};
use crate::queue::{OfflineQueue, QueueEntry};
use crate::storage::KeyValueStore;
use crate::transport::{ApiResponse, Backend, TransportError, TransportResult};
use crate::Result;
use tracing::{debug, error, info, warn};

/// Per-queue result of a sync pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueSyncReport {
    /// Timestamps of entries the backend accepted and that were removed
    pub delivered: Vec<i64>,
    /// Timestamps of entries left in the queue
    pub retained: Vec<i64>,
}

impl QueueSyncReport {
    fn record(&mut self, queued_at: i64, delivered: bool) {
        if delivered {
            self.delivered.push(queued_at);
        } else {
            self.retained.push(queued_at);
        }
    }
}

/// Result of [`sync_offline_queues`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Contact queue
    pub contacts: QueueSyncReport,
    /// Application queue
    pub applications: QueueSyncReport,
    /// Queues that could not be read at all; the other queue still syncs
    pub unreadable: Vec<String>,
}

impl SyncReport {
    /// Entries delivered across both queues
    pub fn delivered_count(&self) -> usize {
        self.contacts.delivered.len() + self.applications.delivered.len()
    }

    /// Entries still pending across both queues
    pub fn retained_count(&self) -> usize {
        self.contacts.retained.len() + self.applications.retained.len()
    }

    /// Whether nothing was pending when the pass started
    pub fn is_empty(&self) -> bool {
        self.delivered_count() == 0 && self.retained_count() == 0
    }

    /// One-line summary for notifications
    pub fn summary(&self) -> String {
        format!(
            "Synced {} queued submission(s), {} still pending",
            self.delivered_count(),
            self.retained_count()
        )
    }
}

/// Re-send every queued submission once
///
/// The queues are snapshotted when the pass starts; entries queued while it
/// runs are left for the next pass. Each queue is read on its own: an
/// unreadable list is recorded in [`SyncReport::unreadable`] and skipped,
/// and undecodable entries inside a list stay queued without being sent.
pub async fn sync_offline_queues<B, S>(
    backend: &B,
    queue: &OfflineQueue<S>,
    config: &ApiConfig,
) -> Result<SyncReport>
where
    B: Backend,
    S: KeyValueStore,
{
    let mut report = SyncReport::default();

    match queue.pending_contacts() {
        Ok(entries) => {
            for entry in entries {
                let result = backend.post_contact(config, &entry.item).await;
                let delivered = settle(queue, FormKind::Contact, entry.queued_at, result);
                report.contacts.record(entry.queued_at, delivered);
            }
        }
        Err(e) => {
            error!("Skipping contact queue: {}", e);
            report.unreadable.push(e.to_string());
        }
    }

    match queue.pending_applications() {
        Ok(entries) => {
            for entry in entries {
                let result = send_application(backend, config, &entry).await;
                let delivered = settle(queue, FormKind::Application, entry.queued_at, result);
                report.applications.record(entry.queued_at, delivered);
            }
        }
        Err(e) => {
            error!("Skipping application queue: {}", e);
            report.unreadable.push(e.to_string());
        }
    }

    if !report.is_empty() {
        info!("{}", report.summary());
    }
    Ok(report)
}

async fn send_application<B: Backend>(
    backend: &B,
    config: &ApiConfig,
    entry: &QueueEntry<QueuedApplication>,
) -> TransportResult<ApiResponse> {
    let application = &entry.item.application;

    if !entry.item.has_resume() {
        return backend.post_application_json(config, application).await;
    }

    match entry.item.resume() {
        Ok(resume) => backend.post_application(config, application, resume.as_ref()).await,
        Err(e) => {
            // Unreadable attachment: the entry stays queued untouched
            error!("Sync application error for {}: {}", entry.queued_at, e);
            Err(TransportError::Request(e.to_string()))
        }
    }
}

/// Remove an accepted entry; returns whether it counts as delivered
fn settle<S: KeyValueStore>(
    queue: &OfflineQueue<S>,
    kind: FormKind,
    queued_at: i64,
    result: TransportResult<ApiResponse>,
) -> bool {
    match result {
        Ok(response) if response.success => match queue.remove(kind, queued_at) {
            Ok(_) => {
                debug!("Synced {} entry {}", kind.name(), queued_at);
                true
            }
            Err(e) => {
                warn!("Delivered {} entry {} but could not remove it: {}", kind.name(), queued_at, e);
                false
            }
        },
        Ok(response) => {
            debug!(
                "Backend refused {} entry {}: {}",
                kind.name(),
                queued_at,
                response.error.unwrap_or_default()
            );
            false
        }
        Err(e) => {
            warn!("Sync {} failed for {}: {}", kind.name(), queued_at, e);
            false
        }
    }
}

//! Offline submission queue
//!
//! This module keeps submissions that could not reach the backend:
//! - One JSON list per form kind, stored under a fixed key
//! - Entries identified by their queued-at timestamp
//! - Removal only after the backend confirmed acceptance
//!
//! Lists are read, modified and written back on every operation. Two
//! processes sharing one store can race (double send or lost entry); the
//! queue makes no attempt to lock across processes.

use crate::forms::{ContactSubmission, FormKind, JobApplication, QueuedApplication, ResumeFile};
use crate::storage::KeyValueStore;
use crate::{Error, Result};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON key of the queued-at timestamp inside an entry
pub const QUEUED_AT_KEY: &str = "_queued_at";

/// Queued item with its timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry<T> {
    /// Enqueue time (Unix milliseconds), unique within its list
    #[serde(rename = "_queued_at")]
    pub queued_at: i64,
    /// The submission itself
    #[serde(flatten)]
    pub item: T,
}

/// Offline queue repository over a key/value store
#[derive(Debug, Clone)]
pub struct OfflineQueue<S> {
    store: S,
}

impl<S: KeyValueStore> OfflineQueue<S> {
    /// Create a queue over `store`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_raw(&self, kind: FormKind) -> Result<Vec<Value>> {
        let Some(text) = self.store.get_item(kind.storage_key())? else {
            return Ok(Vec::new());
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&text).map_err(|e| {
            Error::Queue(format!("Corrupt {} queue: {}", kind.name(), e))
        })
    }

    fn write_raw(&self, kind: FormKind, entries: &[Value]) -> Result<()> {
        let text = serde_json::to_string(entries)?;
        self.store.set_item(kind.storage_key(), &text)
    }

    /// Append an item to a queue, returning its queued-at timestamp
    pub fn enqueue<T: Serialize>(&self, kind: FormKind, item: &T) -> Result<i64> {
        let mut entries = self.read_raw(kind)?;

        // Bump past the newest entry so timestamps stay unique within a list
        let newest = entries.iter().filter_map(queued_at_of).max();
        let now = Utc::now().timestamp_millis();
        let queued_at = match newest {
            Some(newest) if newest >= now => newest + 1,
            _ => now,
        };

        let entry = serde_json::to_value(QueueEntry { queued_at, item })?;
        if !entry.is_object() {
            return Err(Error::Queue(format!(
                "Cannot queue a non-object {} item",
                kind.name()
            )));
        }
        entries.push(entry);
        self.write_raw(kind, &entries)?;

        tracing::info!("Queued {} submission {} for later delivery", kind.name(), queued_at);
        Ok(queued_at)
    }

    /// Queue a contact submission
    pub fn enqueue_contact(&self, submission: &ContactSubmission) -> Result<i64> {
        self.enqueue(FormKind::Contact, submission)
    }

    /// Queue a job application, inlining the resume as a data URL
    pub fn enqueue_application(&self, application: &JobApplication, resume: Option<&ResumeFile>) -> Result<i64> {
        self.enqueue(
            FormKind::Application,
            &QueuedApplication::new(application.clone(), resume),
        )
    }

    /// All entries of a queue, in enqueue order
    ///
    /// Entries that do not decode (missing or non-integer `_queued_at`,
    /// wrong field types) are skipped with a warning and left in storage.
    /// Only an unreadable list is an error.
    pub fn list_pending<T: DeserializeOwned>(&self, kind: FormKind) -> Result<Vec<QueueEntry<T>>> {
        let mut entries = Vec::new();
        for (index, value) in self.read_raw(kind)?.into_iter().enumerate() {
            match serde_json::from_value(value) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!("Skipping undecodable {} entry #{}: {}", kind.name(), index, e);
                }
            }
        }
        Ok(entries)
    }

    /// Pending contact submissions
    pub fn pending_contacts(&self) -> Result<Vec<QueueEntry<ContactSubmission>>> {
        self.list_pending(FormKind::Contact)
    }

    /// Pending job applications
    pub fn pending_applications(&self) -> Result<Vec<QueueEntry<QueuedApplication>>> {
        self.list_pending(FormKind::Application)
    }

    /// Remove the entry with the given timestamp
    ///
    /// Re-reads the stored list first, so entries queued since a sync pass
    /// started are kept. Returns whether an entry was removed.
    pub fn remove(&self, kind: FormKind, queued_at: i64) -> Result<bool> {
        let mut entries = self.read_raw(kind)?;
        let before = entries.len();
        entries.retain(|entry| queued_at_of(entry) != Some(queued_at));

        if entries.len() == before {
            return Ok(false);
        }

        self.write_raw(kind, &entries)?;
        tracing::debug!("Removed {} entry {} from offline queue", kind.name(), queued_at);
        Ok(true)
    }

    /// Number of entries in a queue
    pub fn size(&self, kind: FormKind) -> Result<usize> {
        Ok(self.read_raw(kind)?.len())
    }

    /// Number of entries across both queues
    pub fn total_size(&self) -> Result<usize> {
        let mut total = 0;
        for kind in FormKind::all() {
            total += self.size(kind)?;
        }
        Ok(total)
    }

    /// Drop every entry of a queue
    pub fn clear(&self, kind: FormKind) -> Result<()> {
        self.store.remove_item(kind.storage_key())
    }
}

fn queued_at_of(entry: &Value) -> Option<i64> {
    entry.get(QUEUED_AT_KEY).and_then(Value::as_i64)
}

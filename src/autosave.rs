//! Write-coalescing autosave queue.
//!
//! Keystrokes schedule a content write for a specific document id; a later
//! keystroke for the same document replaces the pending content and pushes
//! its deadline back. Writes leave the queue either when their deadline has
//! passed ([`WriteQueue::take_due`]) or all at once on teardown
//! ([`WriteQueue::drain`]). The queue only decides *what* to write and
//! *when*; the caller performs the write.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::record::{find_record, record_position, remove_record, Record};

/// Whether a document has content waiting to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Clean,
    Editing,
}

/// Latest unsaved content for one document.
#[derive(Debug, Clone, PartialEq, Eq, Record)]
#[record(collection = "pending_writes")]
pub struct PendingWrite {
    #[record(id)]
    pub document_id: String,
    pub content: String,
    /// When the first unsaved edit in this window was made.
    pub first_edit_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct WriteQueue {
    debounce: chrono::Duration,
    pending: Vec<PendingWrite>,
}

impl WriteQueue {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce: chrono::Duration::from_std(debounce).unwrap_or(chrono::Duration::MAX),
            pending: Vec::new(),
        }
    }

    /// Queue `content` for `document_id`, returning the new deadline.
    pub fn schedule(
        &mut self,
        document_id: &str,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DateTime<Utc> {
        let due_at = now.checked_add_signed(self.debounce).unwrap_or(DateTime::<Utc>::MAX_UTC);
        let content = content.into();
        match record_position(&self.pending, document_id) {
            Some(index) => {
                let write = &mut self.pending[index];
                write.content = content;
                write.due_at = due_at;
            }
            None => self.pending.push(PendingWrite {
                document_id: document_id.to_string(),
                content,
                first_edit_at: now,
                due_at,
            }),
        }
        due_at
    }

    /// Remove and return every write whose deadline is at or before `now`.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<PendingWrite> {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|write| write.due_at <= now);
        self.pending = waiting;
        due
    }

    /// Remove and return the pending write for one document, regardless of deadline.
    pub fn take(&mut self, document_id: &str) -> Option<PendingWrite> {
        remove_record(&mut self.pending, document_id)
    }

    /// Remove and return everything.
    pub fn drain(&mut self) -> Vec<PendingWrite> {
        std::mem::take(&mut self.pending)
    }

    /// Drop a pending write without performing it.
    pub fn cancel(&mut self, document_id: &str) -> bool {
        self.take(document_id).is_some()
    }

    pub fn state(&self, document_id: &str) -> EditState {
        if find_record(&self.pending, document_id).is_some() {
            EditState::Editing
        } else {
            EditState::Clean
        }
    }

    pub fn pending(&self, document_id: &str) -> Option<&PendingWrite> {
        find_record(&self.pending, document_id)
    }

    /// Earliest deadline among pending writes.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.iter().map(|write| write.due_at).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

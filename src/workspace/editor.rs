use chrono::{DateTime, Utc};

use super::Workspace;
use crate::autosave::{EditState, PendingWrite};
use crate::bus::DocumentEvent;
use crate::model::{CursorPosition, DocumentPatch, ScrollPosition};
use crate::storage::keys::{LAST_CURSOR_POSITION, LAST_SCROLL_POSITION};
use crate::storage::{Storage, TypedStorage};

impl<S: Storage> Workspace<S> {
    /// Record a keystroke in the active document. False when nothing is active.
    pub fn edit(&mut self, content: impl Into<String>, now: DateTime<Utc>) -> bool {
        match self.active.clone() {
            Some(id) => self.edit_document(&id, content, now),
            None => false,
        }
    }

    /// Queue new content for `document_id`. The write lands on that document
    /// even if another one is active by the time it is flushed.
    pub fn edit_document(
        &mut self,
        document_id: &str,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> bool {
        if !self.registry.contains(document_id) {
            tracing::warn!(document_id, "edit for unknown document");
            return false;
        }
        self.writes.schedule(document_id, content, now);
        true
    }

    /// Write every pending edit whose debounce window has passed.
    pub fn flush_due(&mut self, now: DateTime<Utc>) -> usize {
        let due = self.writes.take_due(now);
        self.apply_writes(due)
    }

    /// Write every pending edit now.
    pub fn flush_all(&mut self) -> usize {
        let pending = self.writes.drain();
        self.apply_writes(pending)
    }

    pub(crate) fn flush_active(&mut self) {
        let Some(id) = self.active.as_deref() else {
            return;
        };
        if let Some(write) = self.writes.take(id) {
            self.apply_writes(vec![write]);
        }
    }

    fn apply_writes(&mut self, writes: Vec<PendingWrite>) -> usize {
        let mut applied = 0;
        for write in writes {
            if !self
                .registry
                .update(&write.document_id, DocumentPatch::content(write.content))
            {
                continue;
            }
            applied += 1;
            self.publish(DocumentEvent::DocumentContentChanged {
                document_id: write.document_id,
            });
        }
        applied
    }

    pub fn edit_state(&self, document_id: &str) -> EditState {
        self.writes.state(document_id)
    }

    /// Content the editor should show: the pending edit if any, else the stored body.
    pub fn current_content(&self, document_id: &str) -> Option<&str> {
        self.writes
            .pending(document_id)
            .map(|write| write.content.as_str())
            .or_else(|| self.registry.find_by_id(document_id).map(|doc| doc.content.as_str()))
    }

    /// Remember the caret for one document. Only the latest document is kept.
    pub fn save_cursor(&self, document_id: &str, position: u64) -> bool {
        let cursor = CursorPosition {
            document_id: document_id.to_string(),
            position,
            timestamp: self.clock.now().timestamp_millis(),
        };
        self.storage.save_logged(&LAST_CURSOR_POSITION, &cursor)
    }

    /// Saved caret for `document_id`; a position saved for another document is ignored.
    pub fn cursor_for(&self, document_id: &str) -> Option<CursorPosition> {
        self.storage
            .load_logged(&LAST_CURSOR_POSITION)
            .filter(|cursor| cursor.document_id == document_id)
    }

    pub fn clear_cursor(&self) -> bool {
        self.storage.remove_logged(LAST_CURSOR_POSITION.name())
    }

    /// Remember the scroll offset as a fraction of the document (clamped to 0..=1).
    pub fn save_scroll(&self, document_id: &str, percentage: f64) -> bool {
        let scroll = ScrollPosition {
            document_id: document_id.to_string(),
            scroll_percentage: percentage.clamp(0.0, 1.0),
            timestamp: self.clock.now().timestamp_millis(),
        };
        self.storage.save_logged(&LAST_SCROLL_POSITION, &scroll)
    }

    pub fn scroll_for(&self, document_id: &str) -> Option<ScrollPosition> {
        self.storage
            .load_logged(&LAST_SCROLL_POSITION)
            .filter(|scroll| scroll.document_id == document_id)
    }
}

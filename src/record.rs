//! Records - values identified by a string id inside a stored list.
//!
//! Every list the editor persists (`documents`, `documentTabs`, per-document
//! version histories) is a flat JSON array looked up by id. The helpers here
//! are the only lookup logic; there is no index and no uniqueness check beyond
//! the id itself.
//!
//! ```ignore
//! use markpad::Record;
//!
//! #[derive(Clone, Serialize, Deserialize, Record)]
//! #[record(collection = "documentTabs")]
//! struct DocumentTab {
//!     pub id: String,
//!     pub title: String,
//! }
//! ```

pub use markpad_macros::Record;

/// A value with a stable string identity.
pub trait Record {
    /// Name of the collection this record is stored in.
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this record.
    fn id(&self) -> &str;
}

/// First record with the given id.
pub fn find_record<'a, R: Record>(records: &'a [R], id: &str) -> Option<&'a R> {
    records.iter().find(|record| record.id() == id)
}

/// Mutable reference to the first record with the given id.
pub fn find_record_mut<'a, R: Record>(records: &'a mut [R], id: &str) -> Option<&'a mut R> {
    records.iter_mut().find(|record| record.id() == id)
}

/// Index of the first record with the given id.
pub fn record_position<R: Record>(records: &[R], id: &str) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}

/// Replace the record with the same id, or append it. Returns true if it replaced.
pub fn upsert_record<R: Record>(records: &mut Vec<R>, record: R) -> bool {
    match record_position(records, record.id()) {
        Some(index) => {
            records[index] = record;
            true
        }
        None => {
            records.push(record);
            false
        }
    }
}

/// Remove every record with the given id, returning the first one removed.
pub fn remove_record<R: Record>(records: &mut Vec<R>, id: &str) -> Option<R> {
    let index = record_position(records, id)?;
    let removed = records.remove(index);
    records.retain(|record| record.id() != id);
    Some(removed)
}

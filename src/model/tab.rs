use serde::{Deserialize, Serialize};

use crate::record::Record;

/// An open editor tab. Session state only, keyed by document id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "documentTabs")]
pub struct DocumentTab {
    pub id: String,
    pub title: String,
}

impl DocumentTab {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

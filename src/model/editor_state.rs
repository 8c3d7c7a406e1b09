use serde::{Deserialize, Serialize};

/// Last caret offset, remembered for one document at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPosition {
    pub document_id: String,
    pub position: u64,
    /// Unix milliseconds.
    pub timestamp: i64,
}

/// Last scroll offset as a fraction of the document height (0.0..=1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollPosition {
    pub document_id: String,
    pub scroll_percentage: f64,
    /// Unix milliseconds.
    pub timestamp: i64,
}

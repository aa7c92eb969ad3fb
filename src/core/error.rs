//! Error types for level analysis

use thiserror::Error;

/// Main error type for classification and chain linking.
///
/// Every variant except `Io`/`Json` aborts processing of the current level;
/// the content (or upstream stage) that caused it must be fixed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid block tag id: {0}")]
    InvalidTag(u8),

    #[error("no connection item for instance \"{0}\"")]
    MissingItem(String),

    #[error("item \"{0}\" links to multiple output items")]
    MultipleOutputs(String),

    #[error("item \"{0}\" links to multiple input items")]
    MultipleInputs(String),

    #[error("loop in linked items, starting at \"{0}\"")]
    LoopDetected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

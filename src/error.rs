//! Error types for html2text.
//!
//! Conversion itself never fails; these errors come from the edges around it
//! (parsing an options mapping, reading input in the CLI).

/// Error type for html2text operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The options mapping could not be parsed.
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for html2text operations.
pub type Result<T> = std::result::Result<T, Error>;

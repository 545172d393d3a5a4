//! Error types for transcript export

use thiserror::Error;

/// Errors that can occur while turning a request into a document model
///
/// Any of these aborts the whole assembly; no partial document is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The request or its options are not shaped as expected
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The transcript has no messages
    #[error("No messages provided")]
    EmptyTranscript,

    /// A single message could not be turned into blocks
    #[error("Formatting failure: {0}")]
    FormattingFailure(String),
}

impl ExportError {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ExportError::InvalidRequest(_) => "invalid_request",
            ExportError::EmptyTranscript => "empty_transcript",
            ExportError::FormattingFailure(_) => "formatting_failure",
        }
    }
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

//! tgdoc-core - Chat transcripts to styled documents
//!
//! Core library for tgdoc. Takes an ordered chat transcript and a set of
//! rendering flags and produces a [`DocumentModel`]: page geometry plus an
//! ordered list of styled paragraph blocks, ready for a serializer.
//!
//! # Example
//!
//! ```
//! use tgdoc_core::{export_document, ExportRequest, Settings};
//!
//! let request = ExportRequest::from_json_str(r#"{
//!     "messages": [
//!         {"from": "Alice", "dateMs": 1709647500000, "text": "Hello"},
//!         {"from": "Bob", "dateMs": 1709647560000, "text": "Hi!"}
//!     ],
//!     "opts": {"header": true, "dates": true}
//! }"#)?;
//!
//! let doc = export_document(&request, &Settings::default())?;
//! assert_eq!(doc.blocks[1].plain_text(),
//!     "Platform: Telegram | Participants: Alice, Bob | 5 Mar 2024");
//! # Ok::<(), tgdoc_core::ExportError>(())
//! ```

pub mod assemble;
pub mod container;
pub mod dates;
pub mod error;
pub mod format;
pub mod options;
pub mod settings;
pub mod transcript;

use serde_json::Value;
use tgdoc_model::DocumentModel;

// Re-export main types and functions
pub use assemble::Assembler;
pub use container::build_document;
pub use dates::{BritishDates, DateFormatter};
pub use error::{ExportError, Result};
pub use options::ExportOptions;
pub use settings::{DateSettings, DocumentSettings, Settings};
pub use transcript::{ExportRequest, Message};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the document for a decoded request using configured settings
pub fn export_document(request: &ExportRequest, settings: &Settings) -> Result<DocumentModel> {
    let dates = BritishDates::from_settings(&settings.dates)?;
    export_with(&request.messages, &request.opts, &settings.document, &dates)
}

/// Build a document with an explicit date formatter
///
/// An empty transcript is rejected before the options are even looked at.
pub fn export_with(
    messages: &[Message],
    raw_opts: &Value,
    labels: &DocumentSettings,
    dates: &dyn DateFormatter,
) -> Result<DocumentModel> {
    if messages.is_empty() {
        return Err(ExportError::EmptyTranscript);
    }
    let options = ExportOptions::resolve(raw_opts)?;
    let blocks = Assembler::new(labels, dates).assemble(messages, &options)?;
    Ok(build_document(blocks))
}

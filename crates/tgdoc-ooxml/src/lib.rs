//! # tgdoc-ooxml
//!
//! OOXML (Office Open XML) generation for tgdoc.
//!
//! This crate provides functionality to:
//! - Serialize a `tgdoc_model::DocumentModel` into a DOCX package
//! - Open DOCX packages and read their paragraphs back
//!
//! ## Example: Inspecting a Document
//!
//! ```no_run
//! use tgdoc_ooxml::{Document, OoxmlArchive};
//!
//! let archive = OoxmlArchive::open("chat_transcript.docx")?;
//! let document = Document::from_archive(&archive)?;
//!
//! for paragraph in &document.paragraphs {
//!     println!("{}", paragraph.plain_text());
//! }
//! # Ok::<(), tgdoc_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod document;
pub mod error;
pub mod writer;

pub use archive::OoxmlArchive;
pub use document::{Document, Paragraph, Run};
pub use error::{OoxmlError, Result};
pub use writer::{DocxWriter, DOCX_CONTENT_TYPE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

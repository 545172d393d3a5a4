//! tgdoc CLI - Command-line interface library
//!
//! This library provides the CLI functionality for tgdoc:
//! - Export: Convert a chat export request (JSON) to DOCX
//! - Inspect: Print the paragraphs of a DOCX file
//!
//! # Library Usage
//!
//! ```ignore
//! use tgdoc_cli::{export_command, ExportFormat};
//!
//! let written = export_command(&input, &out_dir, None, ExportFormat::Docx, None)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Export a transcript request to ./chat_transcript.docx
//! tgdoc export request.json
//!
//! # Dump the assembled document model as JSON
//! tgdoc export request.json --format json --output build/
//!
//! # List the paragraphs of a generated file
//! tgdoc inspect chat_transcript.docx
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{export_command, inspect_command, sanitize_filename};
pub use app::{run_cli, ExportFormat, DEFAULT_BASE_NAME};

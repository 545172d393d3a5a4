//! tgdoc-model - Styled document model
//!
//! This crate provides the serializer-neutral types the transcript assembler
//! produces: styled text runs, paragraph blocks and the page-level document
//! root. Values are built once with consuming builder methods and never
//! mutated afterwards.

pub mod block;
pub mod document;
pub mod run;

pub use block::{Alignment, Block, Border, BorderStyle};
pub use document::{DocumentModel, Margins};
pub use run::{StyledRun, DEFAULT_FONT};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

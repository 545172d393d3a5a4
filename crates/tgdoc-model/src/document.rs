//! Document root
//!
//! The root pairs page geometry with the ordered block sequence. It is the
//! complete description a serializer needs.

use serde::{Deserialize, Serialize};

use crate::block::Block;

/// Page margins in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    /// Same margin on all four sides
    pub fn uniform(twips: u32) -> Self {
        Self {
            top: twips,
            right: twips,
            bottom: twips,
            left: twips,
        }
    }
}

/// A complete, serializer-ready document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentModel {
    /// Page width in twips
    pub page_width: u32,
    /// Page height in twips
    pub page_height: u32,
    /// Page margins
    pub margins: Margins,
    /// Content blocks in reading order
    pub blocks: Vec<Block>,
}

impl DocumentModel {
    /// Check if the document has no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

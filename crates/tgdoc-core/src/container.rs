//! Document container
//!
//! Wraps assembled blocks with the fixed page geometry.

use tgdoc_model::{Block, DocumentModel, Margins};

/// US Letter width in twips (8.5in)
pub const PAGE_WIDTH: u32 = 12240;

/// US Letter height in twips (11in)
pub const PAGE_HEIGHT: u32 = 15840;

/// Margin on every side in twips (1in)
pub const PAGE_MARGIN: u32 = 1440;

/// Build the document root around an ordered block sequence
pub fn build_document(blocks: Vec<Block>) -> DocumentModel {
    DocumentModel {
        page_width: PAGE_WIDTH,
        page_height: PAGE_HEIGHT,
        margins: Margins::uniform(PAGE_MARGIN),
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgdoc_model::StyledRun;

    #[test]
    fn test_geometry_is_constant() {
        let empty = build_document(Vec::new());
        let full = build_document(vec![Block::from_run(StyledRun::new("x")); 50]);
        assert_eq!(empty.page_width, full.page_width);
        assert_eq!(empty.margins, full.margins);
        assert_eq!((full.page_width, full.page_height), (12240, 15840));
        assert_eq!(full.margins, Margins::uniform(1440));
        assert_eq!(full.len(), 50);
    }
}

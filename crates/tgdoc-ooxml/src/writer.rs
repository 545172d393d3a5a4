//! DOCX Writer
//!
//! This module writes a `tgdoc_model::DocumentModel` to a DOCX package. The
//! package is built from scratch (no template) and contains only the parts
//! Word needs to open it: content types, package and document
//! relationships, a minimal style sheet and the document body.
//!
//! # Example
//!
//! ```
//! use tgdoc_model::{Block, DocumentModel, Margins, StyledRun};
//! use tgdoc_ooxml::DocxWriter;
//!
//! let doc = DocumentModel {
//!     page_width: 12240,
//!     page_height: 15840,
//!     margins: Margins::uniform(1440),
//!     blocks: vec![Block::from_run(StyledRun::new("Hello").bold())],
//! };
//! let bytes = DocxWriter::generate(&doc)?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), tgdoc_ooxml::OoxmlError>(())
//! ```

use std::io::Cursor;

use tgdoc_model::{Alignment, Block, BorderStyle, DocumentModel, StyledRun, DEFAULT_FONT};
use tracing::debug;

use crate::archive::OoxmlArchive;
use crate::error::Result;

/// MIME type of a generated file
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

/// DOCX Writer for generating DOCX files from a document model
pub struct DocxWriter {
    /// XML output buffer
    output: String,
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxWriter {
    /// Create a new DocxWriter
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Generate DOCX bytes for a document
    pub fn generate(doc: &DocumentModel) -> Result<Vec<u8>> {
        let archive = Self::new().build_archive(doc);
        let mut buffer = Cursor::new(Vec::new());
        archive.write_to(&mut buffer)?;
        let bytes = buffer.into_inner();
        debug!(blocks = doc.blocks.len(), bytes = bytes.len(), "generated docx");
        Ok(bytes)
    }

    /// Assemble every package part in memory
    pub fn build_archive(mut self, doc: &DocumentModel) -> OoxmlArchive {
        let mut archive = OoxmlArchive::new();
        archive.set_string("[Content_Types].xml", CONTENT_TYPES_XML);
        archive.set_string("_rels/.rels", PACKAGE_RELS_XML);
        archive.set_string("word/_rels/document.xml.rels", DOCUMENT_RELS_XML);
        archive.set_string("word/styles.xml", generate_styles_xml());
        archive.set_string("word/document.xml", self.generate_document_xml(doc));
        archive
    }

    /// Generate the complete document.xml content
    pub fn generate_document_xml(&mut self, doc: &DocumentModel) -> String {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        );
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        for block in &doc.blocks {
            self.generate_paragraph(block);
        }

        self.generate_section_properties(doc);

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    /// Generate XML for a paragraph
    fn generate_paragraph(&mut self, block: &Block) {
        self.output.push_str("<w:p>\n");
        self.output.push_str("<w:pPr>\n");

        // Child order follows CT_PPr: pBdr, spacing, ind, jc
        if let Some(border) = &block.border_left {
            self.output.push_str(&format!(
                "<w:pBdr><w:left w:val=\"{}\" w:sz=\"{}\" w:space=\"{}\" w:color=\"{}\"/></w:pBdr>\n",
                border_value(border.style),
                border.size_eighth_points,
                border.space_points,
                escape_xml(&border.color_hex)
            ));
        }
        self.output.push_str(&format!(
            "<w:spacing w:before=\"{}\" w:after=\"{}\"/>\n",
            block.spacing_before, block.spacing_after
        ));
        if block.indent_left > 0 {
            self.output
                .push_str(&format!("<w:ind w:left=\"{}\"/>\n", block.indent_left));
        }
        if let Some(jc) = justification(block.alignment) {
            self.output.push_str(&format!("<w:jc w:val=\"{}\"/>\n", jc));
        }

        self.output.push_str("</w:pPr>\n");

        for run in &block.runs {
            self.generate_run(run);
        }

        self.output.push_str("</w:p>\n");
    }

    /// Generate XML for a single run
    fn generate_run(&mut self, run: &StyledRun) {
        self.output.push_str("<w:r>\n");
        self.output.push_str("<w:rPr>\n");

        // Child order follows CT_RPr: rFonts, b, i, color, sz, szCs
        let font = escape_xml(&run.font_name);
        self.output.push_str(&format!(
            "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:cs=\"{0}\"/>\n",
            font
        ));
        if run.bold {
            self.output.push_str("<w:b/>\n");
        }
        if run.italics {
            self.output.push_str("<w:i/>\n");
        }
        if let Some(color) = &run.color_hex {
            self.output
                .push_str(&format!("<w:color w:val=\"{}\"/>\n", escape_xml(color)));
        }
        self.output.push_str(&format!(
            "<w:sz w:val=\"{0}\"/>\n<w:szCs w:val=\"{0}\"/>\n",
            run.size_half_points
        ));

        self.output.push_str("</w:rPr>\n");
        self.output.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>\n",
            escape_xml(&run.text)
        ));
        self.output.push_str("</w:r>\n");
    }

    /// Generate the trailing section properties (page size and margins)
    fn generate_section_properties(&mut self, doc: &DocumentModel) {
        let m = &doc.margins;
        self.output.push_str("<w:sectPr>\n");
        self.output.push_str(&format!(
            "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>\n",
            doc.page_width, doc.page_height
        ));
        self.output.push_str(&format!(
            "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"708\" w:footer=\"708\" w:gutter=\"0\"/>\n",
            m.top, m.right, m.bottom, m.left
        ));
        self.output.push_str("</w:sectPr>\n");
    }
}

/// Minimal style sheet: document defaults and the Normal paragraph style
fn generate_styles_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:docDefaults>
    <w:rPrDefault><w:rPr><w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault>
    <w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
</w:styles>"#,
        DEFAULT_FONT
    )
}

fn border_value(style: BorderStyle) -> &'static str {
    match style {
        BorderStyle::Single => "single",
        BorderStyle::Double => "double",
        BorderStyle::Dotted => "dotted",
    }
}

fn justification(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::Left => None,
        Alignment::Center => Some("center"),
        Alignment::Right => Some("right"),
    }
}

/// Escape special XML characters, dropping characters XML 1.0 forbids
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if (c as u32) < 0x20 || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            c => escaped.push(c),
        }
    }
    escaped
}

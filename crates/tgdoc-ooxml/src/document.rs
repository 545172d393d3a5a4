//! Document content parsing (word/document.xml)
//!
//! Reads generated documents back into paragraphs and runs. Only the
//! properties the writer emits are recovered; anything else is skipped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::archive::OoxmlArchive;
use crate::error::{OoxmlError, Result};

/// A parsed Word document body
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Body paragraphs in order
    pub paragraphs: Vec<Paragraph>,
}

/// A paragraph with the layout properties tgdoc writes
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    /// Text runs
    pub runs: Vec<Run>,
    /// Justification value (`w:jc`), `None` for left
    pub alignment: Option<String>,
    /// Left indent in twips
    pub indent_left: u32,
}

/// A text run with formatting
#[derive(Debug, Clone, Default)]
pub struct Run {
    /// The text content
    pub text: String,
    /// Whether the text is bold
    pub bold: bool,
    /// Whether the text is italic
    pub italic: bool,
    /// Hex color, if set
    pub color: Option<String>,
    /// Size in half-points, if set
    pub size: Option<u32>,
}

impl Document {
    /// Parse the body of a document from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        // Don't trim text - preserve whitespace in runs
        reader.config_mut().trim_text(false);

        let mut paragraphs = Vec::new();
        let mut buf = Vec::new();

        let mut current_para: Option<Paragraph> = None;
        let mut current_run: Option<Run> = None;
        let mut in_text_element = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"p" => current_para = Some(Paragraph::default()),
                    b"r" if current_para.is_some() => current_run = Some(Run::default()),
                    b"t" => in_text_element = true,
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => {
                    apply_property(e, current_para.as_mut(), current_run.as_mut());
                }
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"t" => in_text_element = false,
                    b"r" => {
                        if let (Some(run), Some(para)) = (current_run.take(), current_para.as_mut())
                        {
                            para.runs.push(run);
                        }
                    }
                    b"p" => {
                        if let Some(para) = current_para.take() {
                            paragraphs.push(para);
                        }
                    }
                    _ => {}
                },
                Ok(Event::Text(ref e)) => {
                    if in_text_element {
                        if let Some(ref mut run) = current_run {
                            let text = e.unescape().unwrap_or_default();
                            run.text.push_str(&text);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(Document { paragraphs })
    }

    /// Parse `word/document.xml` out of an archive
    pub fn from_archive(archive: &OoxmlArchive) -> Result<Self> {
        Self::parse(archive.document_xml()?)
    }

    /// Get plain text content, one paragraph per line
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Paragraph {
    /// Get plain text of this paragraph
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Record a self-closing property element on the open paragraph or run
fn apply_property(e: &BytesStart, para: Option<&mut Paragraph>, run: Option<&mut Run>) {
    match (e.local_name().as_ref(), run, para) {
        (b"b", Some(run), _) => run.bold = is_on(e),
        (b"i", Some(run), _) => run.italic = is_on(e),
        (b"color", Some(run), _) => run.color = get_attr(e, b"w:val"),
        (b"sz", Some(run), _) => run.size = get_attr(e, b"w:val").and_then(|v| v.parse().ok()),
        (b"jc", None, Some(para)) => para.alignment = get_attr(e, b"w:val"),
        (b"ind", None, Some(para)) => {
            para.indent_left = get_attr(e, b"w:left")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0)
        }
        _ => {}
    }
}

/// Toggle properties are on unless `w:val` says otherwise
fn is_on(e: &BytesStart) -> bool {
    !matches!(get_attr(e, b"w:val").as_deref(), Some("0" | "false" | "off"))
}

/// Get attribute value by name
fn get_attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
}

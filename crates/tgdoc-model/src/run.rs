//! Styled text runs
//!
//! A run is the smallest span of text sharing one set of visual attributes.

use serde::{Deserialize, Serialize};

/// Font used when a run does not name one
pub const DEFAULT_FONT: &str = "Calibri";

/// Default run size in half-points (11pt)
pub const DEFAULT_SIZE_HALF_POINTS: u32 = 22;

/// A span of text with uniform formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledRun {
    /// The text content
    pub text: String,
    /// Bold weight
    pub bold: bool,
    /// Italic emphasis
    pub italics: bool,
    /// Font size in half-points
    pub size_half_points: u32,
    /// RGB color as six hex digits, `None` for automatic
    pub color_hex: Option<String>,
    /// Font family name
    pub font_name: String,
}

impl StyledRun {
    /// Create a plain run in the default font and size
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italics: false,
            size_half_points: DEFAULT_SIZE_HALF_POINTS,
            color_hex: None,
            font_name: DEFAULT_FONT.to_string(),
        }
    }

    /// Make the run bold
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make the run italic
    pub fn italics(mut self) -> Self {
        self.italics = true;
        self
    }

    /// Set the size in half-points
    pub fn size(mut self, half_points: u32) -> Self {
        self.size_half_points = half_points;
        self
    }

    /// Set the text color (six hex digits, case is normalized to upper)
    pub fn color(mut self, hex: &str) -> Self {
        self.color_hex = Some(hex.to_ascii_uppercase());
        self
    }

    /// Set the font family
    pub fn font(mut self, name: impl Into<String>) -> Self {
        self.font_name = name.into();
        self
    }
}

//! Paragraph blocks
//!
//! A block is one paragraph of the output document: an ordered list of runs
//! plus layout attributes. All lengths are in twentieths of a point (twips)
//! unless stated otherwise.

use serde::{Deserialize, Serialize};

use crate::run::StyledRun;

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Flush left (document default)
    #[default]
    Left,
    /// Centered
    Center,
    /// Flush right
    Right,
}

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// A single solid line
    #[default]
    Single,
    /// A double line
    Double,
    /// A dotted line
    Dotted,
}

/// A paragraph edge border
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    /// Line style
    pub style: BorderStyle,
    /// Line width in eighths of a point
    pub size_eighth_points: u32,
    /// RGB color as six hex digits
    pub color_hex: String,
    /// Gap between border and text, in points
    pub space_points: u32,
}

impl Border {
    /// Create a single-line border
    pub fn single(size_eighth_points: u32, color_hex: &str, space_points: u32) -> Self {
        Self {
            style: BorderStyle::Single,
            size_eighth_points,
            color_hex: color_hex.to_ascii_uppercase(),
            space_points,
        }
    }
}

/// A paragraph block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Runs in reading order
    pub runs: Vec<StyledRun>,
    /// Horizontal alignment
    pub alignment: Alignment,
    /// Left indent in twips
    pub indent_left: u32,
    /// Optional left border
    pub border_left: Option<Border>,
    /// Space before the paragraph in twips
    pub spacing_before: u32,
    /// Space after the paragraph in twips
    pub spacing_after: u32,
}

impl Block {
    /// Create a left-aligned block with no indent or spacing
    pub fn new(runs: Vec<StyledRun>) -> Self {
        Self {
            runs,
            ..Default::default()
        }
    }

    /// Create a block holding a single run
    pub fn from_run(run: StyledRun) -> Self {
        Self::new(vec![run])
    }

    /// Set alignment
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set left indent in twips
    pub fn indent_left(mut self, twips: u32) -> Self {
        self.indent_left = twips;
        self
    }

    /// Attach a left border
    pub fn border_left(mut self, border: Border) -> Self {
        self.border_left = Some(border);
        self
    }

    /// Set space before and after, in twips
    pub fn spacing(mut self, before: u32, after: u32) -> Self {
        self.spacing_before = before;
        self.spacing_after = after;
        self
    }

    /// Concatenated text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

//! Block formatting
//!
//! One pure function per semantic unit of a transcript. None of these carry
//! state between calls; the assembler decides which ones run and in what
//! order.

use tgdoc_model::{Alignment, Block, Border, StyledRun};

use crate::dates::DateFormatter;
use crate::error::{ExportError, Result};
use crate::options::ExportOptions;
use crate::settings::DocumentSettings;
use crate::transcript::Message;

/// Maximum reply preview length in characters
pub const REPLY_PREVIEW_CHARS: usize = 120;

/// Appended to a truncated reply preview
pub const ELLIPSIS: char = '\u{2026}';

/// Indent for everything nested under a message header (0.5in)
pub const BODY_INDENT: u32 = 720;

/// Fallback name for a file attachment without a usable path segment
pub const FALLBACK_FILE_NAME: &str = "File";

/// Title and metadata blocks
///
/// Returns nothing when `enabled` is false. The date range compares the
/// calendar dates of the first and last message and collapses to a single
/// date when they match.
pub fn format_header_blocks(
    messages: &[Message],
    enabled: bool,
    labels: &DocumentSettings,
    dates: &dyn DateFormatter,
) -> Result<Vec<Block>> {
    if !enabled {
        return Ok(Vec::new());
    }
    let (Some(first), Some(last)) = (messages.first(), messages.last()) else {
        return Err(ExportError::EmptyTranscript);
    };

    let title = Block::from_run(StyledRun::new(labels.title.as_str()).bold().size(28)).spacing(0, 120);

    let range = if dates.format_date(first.date_ms)? == dates.format_date(last.date_ms)? {
        dates.format_short_date(first.date_ms)?
    } else {
        format!(
            "{} \u{2013} {}",
            dates.format_short_date(first.date_ms)?,
            dates.format_short_date(last.date_ms)?
        )
    };

    let metadata = Block::from_run(
        StyledRun::new(format!(
            "Platform: {} | Participants: {} | {}",
            labels.platform,
            participants(messages).join(", "),
            range
        ))
        .size(20)
        .color("444444"),
    )
    .spacing(0, 240);

    Ok(vec![title, metadata])
}

/// Distinct senders in order of first appearance
pub fn participants(messages: &[Message]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for message in messages {
        if !seen.contains(&message.from.as_str()) {
            seen.push(&message.from);
        }
    }
    seen
}

/// Centered divider announcing a new calendar date
pub fn format_date_divider_block(date_label: &str) -> Block {
    Block::from_run(
        StyledRun::new(format!("\u{2014}\u{2014}\u{2014} {} \u{2014}\u{2014}\u{2014}", date_label))
            .italics()
            .size(18)
            .color("888888"),
    )
    .align(Alignment::Center)
    .spacing(240, 160)
}

/// Sender line with optional time, edited and forwarded markers
///
/// The forwarded marker has no option flag and is shown whenever the
/// message carries a forward source.
pub fn format_message_header_block(
    message: &Message,
    options: &ExportOptions,
    dates: &dyn DateFormatter,
) -> Result<Block> {
    let mut runs = vec![StyledRun::new(message.from.as_str()).bold().size(22)];

    if options.time {
        let time = dates.format_time(message.date_ms)?;
        runs.push(StyledRun::new(format!("  {}", time)).size(20).color("999999"));
    }
    if options.edited && message.edited {
        runs.push(marker("  (edited)"));
    }
    if let Some(source) = message.forwarded_from() {
        runs.push(marker(format!("  \u{21A9} fwd: {}", source)));
    }

    Ok(Block::new(runs).spacing(160, 60))
}

fn marker(text: impl Into<String>) -> StyledRun {
    StyledRun::new(text).italics().size(18).color("AAAAAA")
}

/// Quoted context of the message being replied to
///
/// Fails when the reply author is present but the quoted text is missing.
pub fn format_reply_block(message: &Message) -> Result<Block> {
    let author = message.reply_from().ok_or_else(|| {
        ExportError::FormattingFailure(format!("reply from {} has no author", message.from))
    })?;
    let text = message.reply_text.as_deref().ok_or_else(|| {
        ExportError::FormattingFailure(format!(
            "reply to {} in message from {} has no text",
            author, message.from
        ))
    })?;

    Ok(Block::new(vec![
        StyledRun::new(format!("{}: ", author))
            .bold()
            .italics()
            .size(18)
            .color("888888"),
        StyledRun::new(truncate_preview(text))
            .italics()
            .size(18)
            .color("888888"),
    ])
    .indent_left(BODY_INDENT)
    .border_left(Border::single(6, "CCCCCC", 8))
    .spacing(0, 60))
}

/// Cut text to the preview length, marking the cut with an ellipsis
pub fn truncate_preview(text: &str) -> String {
    match text.char_indices().nth(REPLY_PREVIEW_CHARS) {
        Some((cut, _)) => {
            let mut preview = text[..cut].to_string();
            preview.push(ELLIPSIS);
            preview
        }
        None => text.to_string(),
    }
}

/// One indented block per line of the message body
///
/// Empty lines become a single space so they keep their height. The last
/// line gets wider trailing space to separate it from the next message.
pub fn format_body_blocks(text: Option<&str>) -> Vec<Block> {
    let Some(text) = text else {
        return Vec::new();
    };

    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let line = if line.is_empty() { " " } else { line };
            let after = if i == last { 120 } else { 40 };
            Block::from_run(StyledRun::new(line).size(21).color("222222"))
                .indent_left(BODY_INDENT)
                .spacing(0, after)
        })
        .collect()
}

/// Placeholders for a photo and a file attachment
pub fn format_media_blocks(message: &Message, enabled: bool) -> Vec<Block> {
    if !enabled {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    if message.photo {
        blocks.push(media_note("[Photo attachment]".to_string()));
    }
    if let Some(file) = message.file() {
        blocks.push(media_note(format!("[File: {}]", file_display_name(file))));
    }
    blocks
}

fn media_note(text: String) -> Block {
    Block::from_run(StyledRun::new(text).italics().size(19).color("999999"))
        .indent_left(BODY_INDENT)
        .spacing(0, 100)
}

/// Final `/`-separated segment of a file reference
pub fn file_display_name(file: &str) -> &str {
    file.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_FILE_NAME)
}

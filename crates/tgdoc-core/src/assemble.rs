//! Transcript assembly
//!
//! Walks the transcript once, in order, and drives the block formatter.
//! The only state carried from one message to the next is the last date
//! label a divider was emitted for.

use tgdoc_model::Block;
use tracing::debug;

use crate::dates::DateFormatter;
use crate::error::{ExportError, Result};
use crate::format::{
    format_body_blocks, format_date_divider_block, format_header_blocks, format_media_blocks,
    format_message_header_block, format_reply_block,
};
use crate::options::ExportOptions;
use crate::settings::DocumentSettings;
use crate::transcript::Message;

/// Turns a transcript into an ordered block sequence
///
/// Holds only borrowed, immutable configuration, so one assembler can be
/// shared across threads and reused for any number of transcripts.
#[derive(Clone, Copy)]
pub struct Assembler<'a> {
    labels: &'a DocumentSettings,
    dates: &'a dyn DateFormatter,
}

impl<'a> Assembler<'a> {
    /// Create an assembler with header labels and a date formatter
    pub fn new(labels: &'a DocumentSettings, dates: &'a dyn DateFormatter) -> Self {
        Self { labels, dates }
    }

    /// Assemble every block for the transcript
    ///
    /// Header blocks come first, then each message's blocks in transcript
    /// order. Fails with [`ExportError::EmptyTranscript`] before doing any
    /// formatting when there are no messages.
    pub fn assemble(&self, messages: &[Message], options: &ExportOptions) -> Result<Vec<Block>> {
        if messages.is_empty() {
            return Err(ExportError::EmptyTranscript);
        }

        let mut blocks = format_header_blocks(messages, options.header, self.labels, self.dates)?;
        let mut last_date_label: Option<String> = None;
        let mut dividers = 0usize;

        for message in messages {
            if options.dates {
                let label = self.dates.format_date(message.date_ms)?;
                if last_date_label.as_deref() != Some(label.as_str()) {
                    blocks.push(format_date_divider_block(&label));
                    last_date_label = Some(label);
                    dividers += 1;
                }
            }

            blocks.extend(self.message_blocks(message, options)?);
        }

        debug!(
            messages = messages.len(),
            dividers,
            blocks = blocks.len(),
            "assembled transcript"
        );
        Ok(blocks)
    }

    /// Blocks for one message, excluding any date divider
    pub fn message_blocks(&self, message: &Message, options: &ExportOptions) -> Result<Vec<Block>> {
        let mut blocks = vec![format_message_header_block(message, options, self.dates)?];

        if options.reply && message.reply_from().is_some() {
            blocks.push(format_reply_block(message)?);
        }
        blocks.extend(format_body_blocks(message.text.as_deref()));
        blocks.extend(format_media_blocks(message, options.media));

        Ok(blocks)
    }
}

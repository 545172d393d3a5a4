//! Calendar formatting
//!
//! The assembler never touches a clock or locale directly. It asks a
//! [`DateFormatter`] for labels, so callers can swap calendars, timezones or
//! languages without changing layout policy.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::error::{ExportError, Result};
use crate::settings::DateSettings;

/// Turns epoch milliseconds into display labels
pub trait DateFormatter: Send + Sync {
    /// Long calendar date with no time component, e.g. `5 March 2024`
    ///
    /// Two timestamps fall on the same calendar day exactly when their
    /// long labels are equal.
    fn format_date(&self, epoch_ms: i64) -> Result<String>;

    /// Abbreviated calendar date, e.g. `5 Mar 2024`
    fn format_short_date(&self, epoch_ms: i64) -> Result<String>;

    /// Time of day, e.g. `14:05`
    fn format_time(&self, epoch_ms: i64) -> Result<String>;
}

/// British English day-month-year labels at a fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct BritishDates {
    offset: FixedOffset,
}

impl BritishDates {
    /// Labels in UTC
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// Labels at the given offset east of UTC
    pub fn with_offset_minutes(minutes: i32) -> Result<Self> {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ExportError::InvalidRequest(format!("invalid UTC offset: {} minutes", minutes))
            })?;
        Ok(Self { offset })
    }

    /// Build from the `[dates]` settings section
    pub fn from_settings(settings: &DateSettings) -> Result<Self> {
        Self::with_offset_minutes(settings.utc_offset_minutes)
    }

    fn local(&self, epoch_ms: i64) -> Result<DateTime<FixedOffset>> {
        DateTime::from_timestamp_millis(epoch_ms)
            .map(|utc| utc.with_timezone(&self.offset))
            .ok_or_else(|| {
                ExportError::FormattingFailure(format!("timestamp out of range: {}", epoch_ms))
            })
    }
}

impl Default for BritishDates {
    fn default() -> Self {
        Self::utc()
    }
}

impl DateFormatter for BritishDates {
    fn format_date(&self, epoch_ms: i64) -> Result<String> {
        Ok(self.local(epoch_ms)?.format("%-d %B %Y").to_string())
    }

    fn format_short_date(&self, epoch_ms: i64) -> Result<String> {
        Ok(self.local(epoch_ms)?.format("%-d %b %Y").to_string())
    }

    fn format_time(&self, epoch_ms: i64) -> Result<String> {
        Ok(self.local(epoch_ms)?.format("%H:%M").to_string())
    }
}

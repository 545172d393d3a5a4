//! Export settings
//!
//! Process-level configuration loaded from `tgdoc.toml`. Every section is
//! optional; missing values fall back to the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};

/// Default title block text
pub const DEFAULT_TITLE: &str = "Chat Log \u{2014} Documentation Record";

/// Default platform label in the metadata block
pub const DEFAULT_PLATFORM: &str = "Telegram";

/// Largest accepted UTC offset, in minutes
const MAX_OFFSET_MINUTES: i32 = 23 * 60 + 59;

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Header labels
    pub document: DocumentSettings,
    /// Calendar and clock settings
    pub dates: DateSettings,
}

/// Labels used by the header blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// Title block text
    pub title: String,
    /// Platform label in the metadata block
    pub platform: String,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
        }
    }
}

/// Timezone used when turning timestamps into dates and times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DateSettings {
    /// Offset from UTC in minutes (east positive)
    pub utc_offset_minutes: i32,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(toml_str)
            .map_err(|e| ExportError::InvalidRequest(format!("invalid settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            ExportError::InvalidRequest(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        let offset = self.dates.utc_offset_minutes;
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&offset) {
            return Err(ExportError::InvalidRequest(format!(
                "utc_offset_minutes out of range: {}",
                offset
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.document.title, DEFAULT_TITLE);
        assert_eq!(settings.document.platform, "Telegram");
        assert_eq!(settings.dates.utc_offset_minutes, 0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml_str(
            r#"
[document]
platform = "Signal"

[dates]
utc_offset_minutes = 120
"#,
        )
        .unwrap();
        assert_eq!(settings.document.platform, "Signal");
        assert_eq!(settings.document.title, DEFAULT_TITLE);
        assert_eq!(settings.dates.utc_offset_minutes, 120);
    }

    #[test]
    fn test_offset_out_of_range() {
        let err = Settings::from_toml_str("[dates]\nutc_offset_minutes = 1440\n").unwrap_err();
        assert_eq!(err.kind(), "invalid_request");
    }

    #[test]
    fn test_bad_toml() {
        let err = Settings::from_toml_str("[document\n").unwrap_err();
        assert_eq!(err.kind(), "invalid_request");
    }
}

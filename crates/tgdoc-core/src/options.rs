//! Rendering options
//!
//! Resolves the raw `opts` value of a request into a typed flag set.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ExportError, Result};

/// Feature flags controlling which optional blocks are rendered
///
/// Flags are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Title and metadata blocks at the top
    pub header: bool,
    /// Date dividers between calendar days
    pub dates: bool,
    /// Time of day next to the sender
    pub time: bool,
    /// "(edited)" marker on edited messages
    pub edited: bool,
    /// Quoted reply context
    pub reply: bool,
    /// Photo and file placeholders
    pub media: bool,
}

impl ExportOptions {
    /// Every flag enabled
    pub fn all() -> Self {
        Self {
            header: true,
            dates: true,
            time: true,
            edited: true,
            reply: true,
            media: true,
        }
    }

    /// Resolve options from a raw JSON value
    ///
    /// The value must be an object. Recognized flags that are missing or
    /// cannot be read as a boolean resolve to `false`; unknown keys are
    /// ignored.
    pub fn resolve(raw: &Value) -> Result<Self> {
        let Value::Object(map) = raw else {
            return Err(ExportError::InvalidRequest(
                "opts must be an object".to_string(),
            ));
        };

        Ok(Self {
            header: flag(map, "header"),
            dates: flag(map, "dates"),
            time: flag(map, "time"),
            edited: flag(map, "edited"),
            reply: flag(map, "reply"),
            media: flag(map, "media"),
        })
    }
}

fn flag(map: &Map<String, Value>, key: &str) -> bool {
    match map.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

//! Transcript input types
//!
//! This module defines the chat messages the assembler consumes and the
//! export request envelope they arrive in. Decoding is lenient about
//! optional fields and strict about the shape of required ones.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{ExportError, Result};

/// One chat message
///
/// Messages are taken as already ordered by `date_ms`; nothing here sorts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// Sender display name
    pub from: String,
    /// Send time in milliseconds since the Unix epoch
    #[serde(rename = "dateMs")]
    pub date_ms: i64,
    /// Message body, `None` for media-only messages
    #[serde(default)]
    pub text: Option<String>,
    /// Whether the message was edited after sending
    #[serde(default)]
    pub edited: bool,
    /// Original author when the message was forwarded
    #[serde(default)]
    pub forwarded_from: Option<String>,
    /// Author of the message being replied to
    #[serde(default, rename = "replyFrom")]
    pub reply_from: Option<String>,
    /// Text of the message being replied to
    #[serde(default, rename = "replyText")]
    pub reply_text: Option<String>,
    /// Whether a photo is attached
    #[serde(default)]
    pub photo: bool,
    /// Path or name of an attached file
    #[serde(default)]
    pub file: Option<String>,
}

impl Message {
    /// Create a text message
    pub fn new(from: impl Into<String>, date_ms: i64, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            date_ms,
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Forward source, ignoring empty strings
    pub fn forwarded_from(&self) -> Option<&str> {
        non_empty(&self.forwarded_from)
    }

    /// Reply author, ignoring empty strings
    pub fn reply_from(&self) -> Option<&str> {
        non_empty(&self.reply_from)
    }

    /// Attached file reference, ignoring empty strings
    pub fn file(&self) -> Option<&str> {
        non_empty(&self.file)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// A decoded export request
///
/// `opts` is kept raw so the option resolver owns its validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    /// Messages in transcript order
    pub messages: Vec<Message>,
    /// Raw rendering options
    pub opts: Value,
    /// Requested base name of the output artifact
    pub filename: Option<String>,
}

impl ExportRequest {
    /// Decode a request from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ExportError::InvalidRequest(format!("malformed JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Decode a request from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut body) = value else {
            return Err(ExportError::InvalidRequest(
                "request body must be an object".to_string(),
            ));
        };

        let messages = match body.remove("messages") {
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    serde_json::from_value::<Message>(item).map_err(|e| {
                        ExportError::InvalidRequest(format!("message {}: {}", i, e))
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => {
                return Err(ExportError::InvalidRequest(
                    "messages must be an array".to_string(),
                ))
            }
            None => return Err(ExportError::InvalidRequest("messages is required".to_string())),
        };

        let opts = body.remove("opts").unwrap_or(Value::Null);

        let filename = match body.remove("filename") {
            Some(Value::String(name)) => Some(name),
            Some(Value::Null) | None => None,
            Some(other) => {
                warn!(value = %other, "ignoring non-string filename");
                None
            }
        };

        Ok(Self {
            messages,
            opts,
            filename,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_message() {
        let msg: Message = serde_json::from_value(json!({
            "from": "Alice",
            "dateMs": 1_700_000_000_000i64,
            "text": "hi",
            "edited": true,
            "forwarded_from": "Carol",
            "replyFrom": "Bob",
            "replyText": "earlier",
            "photo": true,
            "file": "docs/report.pdf"
        }))
        .unwrap();
        assert_eq!(msg.from, "Alice");
        assert_eq!(msg.date_ms, 1_700_000_000_000);
        assert!(msg.edited && msg.photo);
        assert_eq!(msg.forwarded_from(), Some("Carol"));
        assert_eq!(msg.reply_from(), Some("Bob"));
        assert_eq!(msg.reply_text.as_deref(), Some("earlier"));
        assert_eq!(msg.file(), Some("docs/report.pdf"));
    }

    #[test]
    fn test_decode_minimal_message() {
        let msg: Message = serde_json::from_value(json!({"from": "A", "dateMs": 0})).unwrap();
        assert_eq!(msg.text, None);
        assert!(!msg.edited);
        assert!(!msg.photo);
        assert_eq!(msg.reply_from(), None);
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let msg = Message {
            forwarded_from: Some(String::new()),
            reply_from: Some(String::new()),
            file: Some(String::new()),
            ..Message::new("A", 0, "x")
        };
        assert_eq!(msg.forwarded_from(), None);
        assert_eq!(msg.reply_from(), None);
        assert_eq!(msg.file(), None);
    }

    #[test]
    fn test_request_from_json() {
        let req = ExportRequest::from_json_str(
            r#"{"messages":[{"from":"A","dateMs":1}],"opts":{"header":true},"filename":"log"}"#,
        )
        .unwrap();
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.opts, json!({"header": true}));
        assert_eq!(req.filename.as_deref(), Some("log"));
    }

    #[test]
    fn test_request_empty_messages_decodes() {
        let req = ExportRequest::from_value(json!({"messages": []})).unwrap();
        assert!(req.messages.is_empty());
        assert_eq!(req.opts, Value::Null);
    }

    #[test]
    fn test_request_rejects_non_object() {
        let err = ExportRequest::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(err.kind(), "invalid_request");
    }

    #[test]
    fn test_request_rejects_missing_messages() {
        let err = ExportRequest::from_value(json!({"opts": {}})).unwrap_err();
        assert_eq!(err, ExportError::InvalidRequest("messages is required".into()));
    }

    #[test]
    fn test_request_rejects_non_array_messages() {
        let err = ExportRequest::from_value(json!({"messages": "nope"})).unwrap_err();
        assert_eq!(err.kind(), "invalid_request");
    }

    #[test]
    fn test_request_reports_bad_message_index() {
        let err = ExportRequest::from_value(json!({
            "messages": [{"from": "A", "dateMs": 1}, {"dateMs": 2}]
        }))
        .unwrap_err();
        match err {
            ExportError::InvalidRequest(detail) => assert!(detail.starts_with("message 1:")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_request_malformed_json() {
        let err = ExportRequest::from_json_str("{not json").unwrap_err();
        assert_eq!(err.kind(), "invalid_request");
    }

    #[test]
    fn test_request_ignores_non_string_filename() {
        let req = ExportRequest::from_value(json!({"messages": [], "filename": 42})).unwrap();
        assert_eq!(req.filename, None);
    }
}

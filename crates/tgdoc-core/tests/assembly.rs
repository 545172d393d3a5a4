//! Assembly behaviour tests
//!
//! Scenario tests on whole transcripts plus property tests over generated
//! ones.

use proptest::prelude::*;
use serde_json::json;

use tgdoc_core::format::{truncate_preview, BODY_INDENT, ELLIPSIS};
use tgdoc_core::{
    export_document, export_with, Assembler, BritishDates, DateFormatter, DocumentSettings,
    ExportError, ExportOptions, ExportRequest, Message, Settings,
};
use tgdoc_model::{Alignment, Block};

// 2024-03-05 14:05 UTC
const MAR_5: i64 = 1_709_647_500_000;
const HOUR: i64 = 3_600_000;

fn assemble(messages: &[Message], options: ExportOptions) -> Result<Vec<Block>, ExportError> {
    let labels = DocumentSettings::default();
    let dates = BritishDates::utc();
    Assembler::new(&labels, &dates).assemble(messages, &options)
}

fn texts(blocks: &[Block]) -> Vec<String> {
    blocks.iter().map(|b| b.plain_text()).collect()
}

#[test]
fn test_alice_and_bob_same_day() {
    let request = ExportRequest::from_value(json!({
        "messages": [
            {"from": "Alice", "dateMs": MAR_5, "text": "Morning\nAnyone here?"},
            {"from": "Bob", "dateMs": MAR_5 + HOUR, "text": "Yes"}
        ],
        "opts": {"header": true, "dates": true, "time": false,
                 "edited": false, "reply": false, "media": false}
    }))
    .unwrap();

    let doc = export_document(&request, &Settings::default()).unwrap();

    assert_eq!(
        texts(&doc.blocks),
        vec![
            "Chat Log \u{2014} Documentation Record",
            "Platform: Telegram | Participants: Alice, Bob | 5 Mar 2024",
            "\u{2014}\u{2014}\u{2014} 5 March 2024 \u{2014}\u{2014}\u{2014}",
            "Alice",
            "Morning",
            "Anyone here?",
            "Bob",
            "Yes",
        ]
    );
    assert!(!doc.blocks[1].plain_text().contains('\u{2013}'));
}

#[test]
fn test_null_text_with_all_options_is_header_only() {
    let msg = Message {
        text: None,
        ..Message::new("Alice", MAR_5, "")
    };
    let labels = DocumentSettings::default();
    let dates = BritishDates::utc();
    let blocks = Assembler::new(&labels, &dates)
        .message_blocks(&msg, &ExportOptions::all())
        .unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].runs[0].text, "Alice");
}

#[test]
fn test_empty_transcript_fails() {
    let err = assemble(&[], ExportOptions::all()).unwrap_err();
    assert_eq!(err, ExportError::EmptyTranscript);

    let err = export_with(
        &[],
        &json!({}),
        &DocumentSettings::default(),
        &BritishDates::utc(),
    )
    .unwrap_err();
    assert_eq!(err, ExportError::EmptyTranscript);
}

#[test]
fn test_full_message_ordering() {
    let msg = Message {
        edited: true,
        forwarded_from: Some("Channel".into()),
        reply_from: Some("Bob".into()),
        reply_text: Some("question".into()),
        photo: true,
        file: Some("files/notes.txt".into()),
        ..Message::new("Alice", MAR_5, "answer")
    };
    let blocks = assemble(&[msg], ExportOptions::all()).unwrap();
    assert_eq!(
        texts(&blocks),
        vec![
            "Chat Log \u{2014} Documentation Record",
            "Platform: Telegram | Participants: Alice | 5 Mar 2024",
            "\u{2014}\u{2014}\u{2014} 5 March 2024 \u{2014}\u{2014}\u{2014}",
            "Alice  14:05  (edited)  \u{21A9} fwd: Channel",
            "Bob: question",
            "answer",
            "[Photo attachment]",
            "[File: notes.txt]",
        ]
    );
}

#[test]
fn test_date_grouping_is_consecutive_not_distinct() {
    let day = 24 * HOUR;
    let msgs = vec![
        Message::new("A", MAR_5, "1"),
        Message::new("A", MAR_5 + day, "2"),
        Message::new("A", MAR_5 + 2 * day, "3"),
    ];
    let opts = ExportOptions {
        dates: true,
        ..Default::default()
    };
    let blocks = assemble(&msgs, opts).unwrap();
    let dividers = blocks.iter().filter(|b| b.alignment == Alignment::Center).count();
    assert_eq!(dividers, 3);
}

#[test]
fn test_custom_formatter_is_used() {
    struct Fixed;
    impl DateFormatter for Fixed {
        fn format_date(&self, epoch_ms: i64) -> tgdoc_core::Result<String> {
            Ok(format!("day {}", epoch_ms / 10))
        }
        fn format_short_date(&self, epoch_ms: i64) -> tgdoc_core::Result<String> {
            Ok(format!("d{}", epoch_ms / 10))
        }
        fn format_time(&self, _epoch_ms: i64) -> tgdoc_core::Result<String> {
            Ok("noon".to_string())
        }
    }

    let msgs = vec![Message::new("A", 1, "x"), Message::new("A", 25, "y")];
    let doc = export_with(
        &msgs,
        &json!({"header": true, "dates": true, "time": true}),
        &DocumentSettings::default(),
        &Fixed,
    )
    .unwrap();
    assert!(doc.blocks[1].plain_text().ends_with("| d0 \u{2013} d2"));
    assert_eq!(doc.blocks[3].plain_text(), "A  noon");
}

fn arb_transcript() -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec((0usize..3, 0i64..30, prop::option::of("[a-z ]{0,12}")), 1..25).prop_map(
        |entries| {
            let senders = ["Alice", "Bob", "Carol"];
            let mut at = MAR_5;
            entries
                .into_iter()
                .map(|(who, gap_hours, text)| {
                    at += gap_hours * HOUR;
                    Message {
                        text,
                        ..Message::new(senders[who], at, "")
                    }
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_divider_count_matches_date_runs(msgs in arb_transcript(), dates_on in any::<bool>()) {
        let opts = ExportOptions { dates: dates_on, ..Default::default() };
        let blocks = assemble(&msgs, opts).unwrap();
        let dividers = blocks.iter().filter(|b| b.alignment == Alignment::Center).count();

        let formatter = BritishDates::utc();
        let mut labels: Vec<String> = msgs
            .iter()
            .map(|m| formatter.format_date(m.date_ms).unwrap())
            .collect();
        labels.dedup();

        let expected = if dates_on { labels.len() } else { 0 };
        prop_assert_eq!(dividers, expected);
    }

    #[test]
    fn prop_body_blocks_are_messages_times_lines(n in 1usize..15, k in 1usize..6) {
        let body = (0..k).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let msgs: Vec<Message> = (0..n)
            .map(|i| Message::new("Alice", MAR_5 + i as i64, body.clone()))
            .collect();
        let blocks = assemble(&msgs, ExportOptions::default()).unwrap();
        let body_blocks = blocks.iter().filter(|b| b.indent_left == BODY_INDENT).count();
        prop_assert_eq!(body_blocks, n * k);
        prop_assert_eq!(blocks.len(), n * (k + 1));
    }

    #[test]
    fn prop_assembly_is_idempotent(
        msgs in arb_transcript(),
        header in any::<bool>(),
        dates_on in any::<bool>(),
        time in any::<bool>()
    ) {
        let opts = ExportOptions { header, dates: dates_on, time, ..ExportOptions::all() };
        prop_assert_eq!(assemble(&msgs, opts).unwrap(), assemble(&msgs, opts).unwrap());
    }

    #[test]
    fn prop_truncation_length(text in "\\PC{0,200}") {
        let len = text.chars().count();
        let preview = truncate_preview(&text);
        if len <= 120 {
            prop_assert_eq!(preview, text);
        } else {
            prop_assert_eq!(preview.chars().count(), 121);
            prop_assert!(preview.ends_with(ELLIPSIS));
        }
    }
}

//! End-to-end tests for the export parsing pipeline.

use chatsift::prelude::*;
use chrono::{Datelike, Local, Timelike};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const MIXED_EXPORT: &str = "\
[8/24/25, 2:30:45 PM] Alice: check this https://example.com/x
random noise line without structure
[8/24/25, 2:31:00 PM] Alice: no content in this one
24/08/25, 14:30 - Bob: see <attached: photo.jpg>
24/08/25, 14:32 - Bob: http://a.com and https://b.com/page
[8/24/25, 2:33:00 PM] Carol: holiday album https://pics.example.com and IMG_1.png";

#[test]
fn test_mixed_export_item_sequence() {
    let parser = WhatsAppParser::new();
    let items = parser.parse_str(MIXED_EXPORT);

    let contents: Vec<&str> = items.iter().map(|i| i.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            "https://example.com/x",
            "<attached: photo.jpg>",
            "http://a.com",
            "https://b.com/page",
            "https://pics.example.com",
            "IMG_1.png",
        ]
    );

    // Links precede media within Carol's line.
    assert_eq!(items[4].kind, ItemKind::Link);
    assert_eq!(items[5].kind, ItemKind::Media);
    assert_eq!(items[4].sender, "Carol");
    assert_eq!(items[4].timestamp, items[5].timestamp);
}

#[test]
fn test_bracketed_line_full_item() {
    let items = WhatsAppParser::new()
        .parse_str("[8/24/25, 2:30:45 PM] Alice: check this https://example.com/x");
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.kind, ItemKind::Link);
    assert_eq!(item.content, "https://example.com/x");
    assert_eq!(item.sender, "Alice");
    assert_eq!(item.source, "whatsapp");
    let ts = item.timestamp;
    assert_eq!(
        (ts.year(), ts.month(), ts.day(), ts.hour(), ts.minute(), ts.second()),
        (2025, 8, 24, 14, 30, 45)
    );
}

#[test]
fn test_dashed_line_media_item() {
    let items =
        WhatsAppParser::new().parse_str("24/08/25, 14:30 - Bob: see <attached: photo.jpg>");
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.kind, ItemKind::Media);
    assert!(item.is_media);
    assert!(item.content.contains("photo.jpg"));
    assert_eq!(item.sender, "Bob");
    let ts = item.timestamp;
    assert_eq!(
        (ts.year(), ts.month(), ts.day(), ts.hour(), ts.minute()),
        (2025, 8, 24, 14, 30)
    );
}

#[test]
fn test_line_without_colon_structure_yields_nothing() {
    let parser = WhatsAppParser::new();
    assert!(parser.parse_str("no colon structure here https://a.com").is_empty());
    assert!(parser.parse_str("[8/24/25] https://no-sender.com").is_empty());
}

#[test]
fn test_unparseable_dashed_date_falls_back_to_now() {
    // Day 32 matches the line layout but fails date validation.
    let parser = WhatsAppParser::new();
    let before = Local::now().naive_local();
    let items = parser.parse_str("32/13/25, 14:30 - Bob: https://example.com");
    let after = Local::now().naive_local();
    assert_eq!(items.len(), 1);
    assert!(items[0].timestamp >= before && items[0].timestamp <= after);
}

#[test]
fn test_unreadable_bracketed_date_falls_back_to_now() {
    let parser = WhatsAppParser::new();
    let before = Local::now().naive_local();
    let items = parser.parse_str("[sometime last week] Alice: https://example.com");
    let after = Local::now().naive_local();
    assert_eq!(items.len(), 1);
    assert!(items[0].timestamp >= before && items[0].timestamp <= after);
}

#[test]
fn test_reparse_is_idempotent() {
    let parser = WhatsAppParser::new();
    let first = parser.parse_str(MIXED_EXPORT);
    let second = parser.parse_str(MIXED_EXPORT);
    assert_eq!(first, second);
}

#[test]
fn test_parse_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(MIXED_EXPORT.as_bytes()).unwrap();

    let parser = WhatsAppParser::new();
    let items = parser.parse(file.path()).unwrap();
    assert_eq!(items.len(), 6);
}

#[test]
fn test_parse_missing_file_is_io_error() {
    let parser = WhatsAppParser::new();
    let err = parser.parse("no/such/export.txt".as_ref()).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_crlf_line_endings() {
    let text = "[8/24/25, 2:30 PM] Alice: https://a.com\r\n24/08/25, 14:30 - Bob: https://b.com\r\n";
    let items = WhatsAppParser::new().parse_str(text);
    assert_eq!(items.len(), 2);
}

#[test]
fn test_json_output_roundtrip() {
    let items = WhatsAppParser::new().parse_str(MIXED_EXPORT);

    let file = NamedTempFile::new().unwrap();
    write_json(&items, file.path()).unwrap();
    let back: Vec<ParsedItem> = serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
    assert_eq!(back, items);
}

#[test]
fn test_custom_source_tag_applies_to_all_items() {
    let items = parse_export(MIXED_EXPORT, "whatsapp-business");
    assert!(!items.is_empty());
    assert!(items.iter().all(|i| i.source == "whatsapp-business"));
}

#[test]
fn test_content_type_mapping() {
    let items = WhatsAppParser::new()
        .parse_str("[x] Alice: https://a.com and <attached: b.png>");
    assert_eq!(items[0].content_type(), "link");
    assert_eq!(items[1].content_type(), "image");
}

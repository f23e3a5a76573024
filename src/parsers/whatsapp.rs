//! `WhatsApp` TXT export parser.
//!
//! Exported chats are plain text, one message per line, but the line layout
//! differs between platforms and locales. Two layouts are supported, tried in
//! fixed priority order with the first match winning:
//!
//! 1. Bracketed: `[8/24/25, 2:30:45 PM] Sender: Message` (common on Android)
//! 2. Dashed: `24/08/25, 14:30 - Sender: Message` (common on iOS)
//!
//! A line matching neither layout is dropped silently; a matched line with no
//! extractable URL or media reference contributes nothing. The parser never
//! fails — a bulk import must not abort on one malformed line.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::ParserConfig;
use crate::datetime::normalize_timestamp;
use crate::extract::extract_fragments;
use crate::item::{ItemKind, ParsedItem};
use crate::parser::ExportParser;

/// One supported line layout: a capture pattern producing exactly
/// (timestamp, sender, body).
///
/// The table is data, not a trait hierarchy — adding a layout means adding a
/// row, not new dispatch machinery.
struct LineLayout {
    pattern: &'static str,
}

/// Layouts in priority order; the bracketed form is tried first.
///
/// The bracketed capture keeps its brackets so the date normalizer can
/// recognize the shape. Sender capture stops at the first colon; bodies are
/// free text and may contain further colons.
const LINE_LAYOUTS: &[LineLayout] = &[
    // [8/24/25, 2:30:45 PM] Sender: Message
    LineLayout {
        pattern: r"^(\[[^\[\]]*\])\s([^:]+):\s?(.*)$",
    },
    // 24/08/25, 14:30 - Sender: Message
    LineLayout {
        pattern: r"^(\d{1,2}/\d{1,2}/\d{2,4},?\s\d{1,2}:\d{2})\s-\s([^:]+):\s?(.*)$",
    },
];

fn layout_regexes() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        LINE_LAYOUTS
            .iter()
            .map(|layout| Regex::new(layout.pattern).unwrap())
            .collect()
    })
}

/// A classified export line, borrowed from the input.
///
/// Intermediate product of line matching: the raw timestamp text (format
/// still unknown), the sender display name, and the message body that the
/// content detectors scan next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Timestamp text exactly as it appeared, brackets included for the
    /// bracketed layout.
    pub raw_timestamp: &'a str,
    /// Display name of the message author.
    pub sender: &'a str,
    /// Message body; may contain several extractable fragments.
    pub body: &'a str,
}

impl<'a> ParsedLine<'a> {
    /// Classifies one export line, trying each layout in priority order.
    ///
    /// Returns `None` for lines matching no layout, or whose captures do not
    /// decompose into exactly the three expected fields.
    pub fn match_line(line: &'a str) -> Option<Self> {
        layout_regexes().iter().find_map(|regex| {
            let caps = regex.captures(line)?;
            Some(ParsedLine {
                raw_timestamp: caps.get(1)?.as_str(),
                sender: caps.get(2)?.as_str().trim(),
                body: caps.get(3)?.as_str(),
            })
        })
    }
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatsift::parsers::WhatsAppParser;
/// use chatsift::parser::ExportParser;
///
/// let parser = WhatsAppParser::new();
/// let items = parser.parse_str("[8/24/25, 2:30 PM] Alice: https://example.com/x");
/// assert_eq!(items[0].content, "https://example.com/x");
/// ```
pub struct WhatsAppParser {
    config: ParserConfig,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Single pass over the export text, one line at a time.
    ///
    /// The timestamp is normalized once per matched line, so every item a
    /// line yields shares the same instant (including the "now" fallback).
    fn parse_text(&self, text: &str) -> Vec<ParsedItem> {
        let mut items = Vec::new();

        for line in text.lines() {
            let Some(parsed) = ParsedLine::match_line(line) else {
                continue;
            };

            let fragments = extract_fragments(
                parsed.body,
                self.config.detect_links,
                self.config.detect_media,
            );
            if fragments.is_empty() {
                continue;
            }

            let timestamp = normalize_timestamp(parsed.raw_timestamp);
            for fragment in fragments {
                let item = match fragment.kind {
                    ItemKind::Link => ParsedItem::link(
                        fragment.text,
                        self.config.source.as_str(),
                        timestamp,
                        parsed.sender,
                    ),
                    ItemKind::Media => ParsedItem::media(
                        fragment.text,
                        self.config.source.as_str(),
                        timestamp,
                        parsed.sender,
                    ),
                };
                items.push(item);
            }
        }

        items
    }
}

impl Default for WhatsAppParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportParser for WhatsAppParser {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn source(&self) -> &str {
        &self.config.source
    }

    fn parse_str(&self, text: &str) -> Vec<ParsedItem> {
        self.parse_text(text)
    }
}

/// Parses export text with a given platform tag.
///
/// Convenience wrapper over [`WhatsAppParser`] for one-shot use.
pub fn parse_export(text: &str, source: &str) -> Vec<ParsedItem> {
    WhatsAppParser::with_config(ParserConfig::new().with_source(source)).parse_str(text)
}

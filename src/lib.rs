//! # chatsift
//!
//! A Rust library for sifting saved content — shared links and media
//! references — out of WhatsApp chat exports.
//!
//! ## Overview
//!
//! Messaging apps let users dump a conversation to plain text, and those
//! dumps are where shared links and photos go to die. chatsift runs a
//! single-pass pipeline over export text and produces typed, timestamped
//! [`ParsedItem`] records ready for a saved-content store:
//!
//! 1. Split the text into lines
//! 2. Match each line against known export layouts (bracketed and dashed)
//! 3. Detect URLs and media references in matched message bodies
//! 4. Normalize the raw timestamp, falling back to "now" when unreadable
//!
//! Parsing never fails: unmatched lines are dropped, unreadable timestamps
//! degrade to the current time, and a matched line with nothing extractable
//! simply contributes zero items.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatsift::prelude::*;
//!
//! let export = "\
//! [8/24/25, 2:30:45 PM] Alice: check this https://example.com/x
//! 24/08/25, 14:30 - Bob: see <attached: photo.jpg>";
//!
//! let parser = WhatsAppParser::new();
//! let items = parser.parse_str(export);
//!
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0].kind, ItemKind::Link);
//! assert_eq!(items[1].kind, ItemKind::Media);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — the [`ExportParser`](parser::ExportParser) trait
//! - [`parsers`] — [`WhatsAppParser`](parsers::WhatsAppParser) and the line
//!   layout table
//! - [`extract`] — URL and media detection within message bodies
//! - [`datetime`] — timestamp normalization with "now" fallback
//! - [`item`] — [`ParsedItem`] and [`ItemKind`]
//! - [`config`] — [`ParserConfig`](config::ParserConfig) (platform tag,
//!   detector toggles)
//! - [`output`] — JSON/JSONL writers for parse results
//! - [`error`] — [`SiftError`] for the file-reading and writing edges

pub mod config;
pub mod datetime;
pub mod error;
pub mod extract;
pub mod item;
pub mod output;
pub mod parser;
pub mod parsers;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use error::{Result, SiftError};
pub use item::{ItemKind, ParsedItem};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ParserConfig;
    pub use crate::error::{Result, SiftError};
    pub use crate::item::{ItemKind, ParsedItem};
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::parser::ExportParser;
    pub use crate::parsers::{WhatsAppParser, parse_export};
}

//! Unified parser trait for chat exports.
//!
//! [`ExportParser`] is the seam between the parsing engine and the import
//! workflow around it: the caller reads the export file (or hands over the
//! decoded text directly), the parser returns the ordered item sequence, and
//! the caller persists the items wherever it keeps saved content.
//!
//! # Example
//!
//! ```rust
//! use chatsift::parser::ExportParser;
//! use chatsift::parsers::WhatsAppParser;
//!
//! let parser = WhatsAppParser::new();
//! let items = parser.parse_str("[8/24/25, 2:30 PM] Alice: https://example.com");
//! assert_eq!(items.len(), 1);
//! ```

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::item::ParsedItem;

/// A parser that turns export text into saved-content items.
///
/// Parsing proper is infallible: malformed lines are dropped and bad
/// timestamps degrade to the current time, so [`parse_str`] always succeeds
/// with a (possibly empty) sequence. Only the file-reading convenience
/// wrapper can fail.
///
/// [`parse_str`]: ExportParser::parse_str
pub trait ExportParser {
    /// Human-readable name of the export format (e.g. `"WhatsApp"`).
    fn name(&self) -> &'static str;

    /// Platform tag stamped onto produced items.
    fn source(&self) -> &str;

    /// Parses the full decoded text of an export.
    ///
    /// Returns items in input order; within one line, links come before
    /// media fragments. Never fails and never panics.
    fn parse_str(&self, text: &str) -> Vec<ParsedItem>;

    /// Reads a file as UTF-8 text and parses it.
    fn parse(&self, path: &Path) -> Result<Vec<ParsedItem>> {
        let text = fs::read_to_string(path)?;
        Ok(self.parse_str(&text))
    }
}

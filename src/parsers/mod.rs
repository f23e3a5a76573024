//! Export parsers.
//!
//! Currently a single parser, [`WhatsAppParser`]. The per-format matching
//! machinery lives with it as a data-driven table, so structurally similar
//! export formats can be added without new dispatch plumbing.

mod whatsapp;

pub use whatsapp::{ParsedLine, WhatsAppParser, parse_export};

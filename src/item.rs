//! Typed content items extracted from chat exports.
//!
//! This module provides [`ParsedItem`], the normalized representation of a
//! single saved-content fragment (a shared link or a media reference) pulled
//! out of an export line, plus [`ItemKind`] describing which of the two it is.
//!
//! # Overview
//!
//! An item consists of:
//! - **What was found**: `kind` and `content`
//! - **Where it came from**: `source` (platform tag) and `sender`
//! - **When**: `timestamp` — always present; the parser substitutes the
//!   current wall-clock time when an export timestamp cannot be interpreted
//!
//! # Examples
//!
//! ```
//! use chatsift::item::{ItemKind, ParsedItem};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2025, 8, 24)
//!     .unwrap()
//!     .and_hms_opt(14, 30, 0)
//!     .unwrap();
//! let item = ParsedItem::link("https://example.com/x", "whatsapp", ts, "Alice");
//!
//! assert_eq!(item.kind, ItemKind::Link);
//! assert!(!item.is_media);
//! assert_eq!(item.content_type(), "link");
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The kind of content fragment an item carries.
///
/// Serializes as lowercase (`"link"` / `"media"`). For the downstream item
/// store, which distinguishes `link` and `image` content types, use
/// [`ItemKind::content_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// An HTTP/HTTPS URL found in a message body.
    Link,
    /// A media reference: an `<attached: ...>` marker or a bare media filename.
    Media,
}

impl ItemKind {
    /// Returns the downstream content type for this kind.
    ///
    /// Media references map to `"image"` to match the item store's vocabulary.
    pub fn content_type(self) -> &'static str {
        match self {
            ItemKind::Link => "link",
            ItemKind::Media => "image",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Link => write!(f, "link"),
            ItemKind::Media => write!(f, "media"),
        }
    }
}

/// A single content fragment extracted from a chat export.
///
/// One export line can yield several items (for example a message containing
/// two URLs), all sharing the same `sender` and `timestamp`. Items are
/// immutable once produced; the parser allocates fresh output on every call.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `kind` | [`ItemKind`] | Whether this is a link or a media reference |
/// | `content` | `String` | The URL, or the matched media token |
/// | `source` | `String` | Platform tag of the originating export |
/// | `timestamp` | `NaiveDateTime` | Message time, or parse-time "now" |
/// | `sender` | `String` | Display name of the message author |
/// | `is_media` | `bool` | `true` exactly when `kind` is [`ItemKind::Media`] |
///
/// The timestamp is never optional: when the export's timestamp text cannot
/// be interpreted, the parser falls back to the current local wall-clock time
/// rather than dropping the item or failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    /// Whether this item is a link or a media reference.
    pub kind: ItemKind,

    /// The extracted content.
    ///
    /// For links, the exact URL substring as it appeared in the message.
    /// For media, the matched token: either the whole `<attached: ...>`
    /// marker or the trailing filename.
    pub content: String,

    /// Tag identifying the originating export platform.
    ///
    /// Configurable per parser invocation; defaults to `"whatsapp"`.
    pub source: String,

    /// When the message was sent, in local wall-clock time.
    ///
    /// Falls back to the time of parsing when the export timestamp is
    /// missing or malformed.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author, carried through from the export.
    pub sender: String,

    /// Flag distinguishing media items from links in flat serialized output.
    #[serde(default)]
    pub is_media: bool,
}

impl ParsedItem {
    /// Creates a link item.
    pub fn link(
        content: impl Into<String>,
        source: impl Into<String>,
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            kind: ItemKind::Link,
            content: content.into(),
            source: source.into(),
            timestamp,
            sender: sender.into(),
            is_media: false,
        }
    }

    /// Creates a media item.
    pub fn media(
        content: impl Into<String>,
        source: impl Into<String>,
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            kind: ItemKind::Media,
            content: content.into(),
            source: source.into(),
            timestamp,
            sender: sender.into(),
            is_media: true,
        }
    }

    /// Returns the downstream content type (`"link"` or `"image"`).
    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }

    /// Returns `true` if this item carries a URL.
    pub fn is_link(&self) -> bool {
        self.kind == ItemKind::Link
    }
}

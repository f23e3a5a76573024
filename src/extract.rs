//! Content detection within matched message bodies.
//!
//! Two independent detectors run over every matched line:
//!
//! - **URLs**: every `http(s)://` substring up to the next whitespace.
//! - **Media references**: every `<attached: ...>` marker, plus a bare
//!   token with a known media extension at the end of the body.
//!
//! They are deliberately not mutually exclusive — a message can share a link
//! and reference a photo at the same time — so a single body can contribute
//! fragments of both kinds. Within one body, link fragments are emitted
//! before media fragments.

use std::sync::OnceLock;

use regex::Regex;

use crate::item::ItemKind;

/// Extensions recognized as media files, matched case-insensitively.
pub const MEDIA_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "mp4", "mov", "avi"];

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+").unwrap())
}

fn media_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<attached:\s*[^>]+>|[^\s<>]+\.(?:jpg|jpeg|png|gif|mp4|mov|avi)$").unwrap()
    })
}

/// A content fragment found inside one message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Link or media.
    pub kind: ItemKind,
    /// The matched substring, borrowed from the body.
    pub text: &'a str,
}

/// Returns every URL substring in the body, left to right.
pub fn extract_urls(body: &str) -> Vec<&str> {
    url_regex().find_iter(body).map(|m| m.as_str()).collect()
}

/// Returns every media reference in the body, left to right.
///
/// A match is either a whole `<attached: ...>` marker or a trailing filename
/// token ending in one of [`MEDIA_EXTENSIONS`].
pub fn extract_media(body: &str) -> Vec<&str> {
    media_regex().find_iter(body).map(|m| m.as_str()).collect()
}

/// Runs the enabled detectors over a body and collects typed fragments,
/// links first, then media.
pub fn extract_fragments(body: &str, detect_links: bool, detect_media: bool) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    if detect_links {
        fragments.extend(extract_urls(body).into_iter().map(|text| Fragment {
            kind: ItemKind::Link,
            text,
        }));
    }
    if detect_media {
        fragments.extend(extract_media(body).into_iter().map(|text| Fragment {
            kind: ItemKind::Media,
            text,
        }));
    }
    fragments
}

//! Configuration types for export parsing.
//!
//! [`ParserConfig`] controls the platform tag stamped onto produced items and
//! which content detectors run. The tag is explicit configuration rather than
//! a hidden constant so the same pipeline can serve structurally similar
//! export formats later.
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::ParserConfig;
//! use chatsift::parsers::WhatsAppParser;
//!
//! let config = ParserConfig::new()
//!     .with_source("whatsapp-business")
//!     .with_detect_media(false);
//!
//! let parser = WhatsAppParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Default platform tag stamped onto parsed items.
pub const DEFAULT_SOURCE: &str = "whatsapp";

/// Configuration for export parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Platform tag copied into every produced item (default: `"whatsapp"`).
    pub source: String,

    /// Run the URL detector on matched message bodies (default: true).
    pub detect_links: bool,

    /// Run the media detector on matched message bodies (default: true).
    pub detect_media: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            detect_links: true,
            detect_media: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the platform tag stamped onto produced items.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Enables or disables URL detection.
    #[must_use]
    pub fn with_detect_links(mut self, enabled: bool) -> Self {
        self.detect_links = enabled;
        self
    }

    /// Enables or disables media detection.
    #[must_use]
    pub fn with_detect_media(mut self, enabled: bool) -> Self {
        self.detect_media = enabled;
        self
    }
}

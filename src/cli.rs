//! Command-line interface definition using clap.

use clap::{Parser, ValueEnum};

/// Sift saved links and media references out of a WhatsApp chat export.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift chat.txt
    chatsift chat.txt -o saved_items.json
    chatsift chat.txt --format jsonl
    chatsift chat.txt --source whatsapp-business")]
pub struct Args {
    /// Path to the exported chat text file
    pub input: String,

    /// Path to output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Platform tag stamped onto parsed items
    #[arg(long, default_value = "whatsapp")]
    pub source: String,

    /// Skip URL detection
    #[arg(long)]
    pub no_links: bool,

    /// Skip media-reference detection
    #[arg(long)]
    pub no_media: bool,
}

/// Output format options.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

//! JSONL (JSON Lines) output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::item::ParsedItem;

/// Converts items to JSONL: one compact JSON object per line.
pub fn to_jsonl(items: &[ParsedItem]) -> Result<String> {
    let mut out = String::new();
    for item in items {
        out.push_str(&serde_json::to_string(item)?);
        out.push('\n');
    }
    Ok(out)
}

/// Writes items to a file in JSONL format.
pub fn write_jsonl(items: &[ParsedItem], output_path: &Path) -> Result<()> {
    let jsonl = to_jsonl(items)?;
    let mut file = File::create(output_path)?;
    file.write_all(jsonl.as_bytes())?;
    Ok(())
}

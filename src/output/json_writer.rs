//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::item::ParsedItem;

/// Converts items to a pretty-printed JSON array.
///
/// # Format
/// ```json
/// [
///   {"kind": "link", "content": "https://example.com", ...}
/// ]
/// ```
pub fn to_json(items: &[ParsedItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Writes items to a file as a JSON array.
pub fn write_json(items: &[ParsedItem], output_path: &Path) -> Result<()> {
    let json = to_json(items)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

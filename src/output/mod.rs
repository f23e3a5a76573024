//! Output writers for parse results.
//!
//! Parsed items serialize directly via serde; these helpers cover the two
//! shapes the surrounding import tooling consumes:
//!
//! - **JSON** — a pretty-printed array, for inspection and one-shot imports
//! - **JSONL** — one item per line, for piping into downstream stores
//!
//! Each format has a `to_*` string converter and a `write_*` file wrapper.

mod json_writer;
mod jsonl_writer;

pub use json_writer::{to_json, write_json};
pub use jsonl_writer::{to_jsonl, write_jsonl};

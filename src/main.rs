//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use chatsift::cli::{Args, OutputFormat};
use chatsift::config::ParserConfig;
use chatsift::output::{to_json, to_jsonl, write_json, write_jsonl};
use chatsift::parser::ExportParser;
use chatsift::parsers::WhatsAppParser;
use chatsift::SiftError;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SiftError> {
    let args = Args::parse();

    let input = Path::new(&args.input);
    if input.extension().and_then(|e| e.to_str()) != Some("txt") {
        return Err(SiftError::invalid_format_at(
            "WhatsApp TXT",
            "expected a .txt chat export",
            input,
        ));
    }

    let config = ParserConfig::new()
        .with_source(args.source)
        .with_detect_links(!args.no_links)
        .with_detect_media(!args.no_media);

    let parser = WhatsAppParser::with_config(config);
    let items = parser.parse(input)?;

    eprintln!("Found {} items in {}", items.len(), args.input);

    match (&args.output, args.format) {
        (Some(path), OutputFormat::Json) => write_json(&items, Path::new(path))?,
        (Some(path), OutputFormat::Jsonl) => write_jsonl(&items, Path::new(path))?,
        (None, OutputFormat::Json) => println!("{}", to_json(&items)?),
        (None, OutputFormat::Jsonl) => print!("{}", to_jsonl(&items)?),
    }

    if let Some(path) = &args.output {
        eprintln!("Wrote {} output to {}", args.format, path);
    }

    Ok(())
}

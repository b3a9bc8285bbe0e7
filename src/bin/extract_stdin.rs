//! Reads one HTML page from stdin and prints its main text.
//!
//! With `--json`, prints `{"content": ..., "content_error": ...}` instead.
//! Exits with status 2 when the page has no main content container.

use std::io::{self, Read};
use std::process::ExitCode;

use founders_sample::{extract_main_text, Extraction};
use serde::Serialize;

#[derive(Serialize)]
struct Output<'a> {
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_error: Option<&'a founders_sample::ExtractionFailure>,
}

fn main() -> ExitCode {
    let json = std::env::args().skip(1).any(|arg| arg == "--json");

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        return ExitCode::FAILURE;
    }

    let extraction = extract_main_text(&html, "stdin");

    if json {
        let output = Output {
            content: extraction.content(),
            content_error: extraction.failure(),
        };
        match serde_json::to_string(&output) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("Failed to serialize output: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match &extraction {
            Extraction::Text(text) => println!("{text}"),
            Extraction::Failed(failure) => eprintln!("{failure}"),
        }
    }

    if extraction.is_text() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

//! # founders-sample
//!
//! Builds reproducible text samples from the Founders Online archive.
//!
//! A run loads the archive's metadata export, picks a seeded random (or
//! prefix) subset of records, fetches each record's permalink, extracts the
//! document transcription as plain text, and writes the records with an added
//! `content` field to `sample_{max_items}_{seed}.json`.
//!
//! ## Quick Start
//!
//! ```rust
//! use founders_sample::{extract_main_text_str, Extraction};
//!
//! let html = r##"<div class="innerdiv docbody">
//!     <p>Dear Sir<a class="ptr" href="#fn1">1</a>I have the honor</p>
//!     <p>Your most obedient servant</p>
//! </div>"##;
//!
//! let extraction = extract_main_text_str(html);
//! assert_eq!(
//!     extraction,
//!     Extraction::Text("Dear Sir I have the honor\nYour most obedient servant".into())
//! );
//! ```
//!
//! ## Extraction rules
//!
//! - The page is decoded from its bytes alone (statistical detection).
//! - Only the first `div.innerdiv.docbody` is considered.
//! - Footnote anchors (`a.ptr`) become word breaks.
//! - Each `p` becomes one whitespace-normalised line; empty paragraphs stay
//!   as blank lines.

mod error;
mod extract;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page fetching.
pub mod fetch;

/// Metadata loading and record mutation.
pub mod metadata;

/// Run configuration.
pub mod options;

/// Load, sample, fetch, extract, write.
pub mod pipeline;

/// Seeded record sampling.
pub mod sampler;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{clean_paragraph, extract_main_text, extract_main_text_str};
pub use fetch::{HttpFetcher, Page, PageFetcher};
pub use metadata::{load_metadata, MetadataRecord};
pub use options::{output_path, Options};
pub use patterns::FOOTNOTE_MARKER;
pub use pipeline::{run, run_with_fetcher, RunSummary};
pub use result::{Extraction, ExtractionFailure};
pub use sampler::sample;

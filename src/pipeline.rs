//! The sampling run: load → sample → fetch and extract each record → write.
//!
//! Everything runs on the calling thread, one record at a time, in sample
//! order. The output file is written once, after every record is processed.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::extract::extract_main_text;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::metadata::{load_metadata, MetadataRecord};
use crate::options::Options;
use crate::result::{Extraction, ExtractionFailure};
use crate::sampler::sample;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the sample was written.
    pub output_path: PathBuf,
    /// Records processed.
    pub processed: usize,
    /// Records that yielded text.
    pub extracted: usize,
    /// Records that carry a failure.
    pub failed: usize,
}

/// Run with the default HTTP fetcher.
///
/// # Errors
///
/// Returns an error if the metadata cannot be loaded, a record has no
/// permalink, a fetch fails (unless `continue_on_error`), or the output
/// cannot be written. Nothing is written on error.
pub fn run(options: &Options) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new(options.timeout)?;
    run_with_fetcher(options, &fetcher)
}

/// Run against any page source.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with_fetcher<F: PageFetcher + ?Sized>(
    options: &Options,
    fetcher: &F,
) -> Result<RunSummary> {
    let records = load_metadata(&options.metadata_path)?;
    let mut subset = sample(&records, options.max_items, options.randomize, options.seed);
    drop(records);

    info!(
        sampled = subset.len(),
        randomize = options.randomize,
        seed = options.seed,
        "processing sample"
    );

    let (extracted, failed) = process_records(&mut subset, fetcher, options.continue_on_error)?;

    let output_path = options.output_path();
    write_output(&output_path, &subset)?;
    info!("Processed data saved to {}", output_path.display());

    Ok(RunSummary {
        output_path,
        processed: subset.len(),
        extracted,
        failed,
    })
}

/// Fetch and extract every record in order, storing each outcome on it.
///
/// Returns `(extracted, failed)` counts.
///
/// # Errors
///
/// A record without a permalink always aborts. Transport errors abort
/// unless `continue_on_error` is set, in which case they are recorded as
/// [`ExtractionFailure::Transport`].
pub fn process_records<F: PageFetcher + ?Sized>(
    records: &mut [MetadataRecord],
    fetcher: &F,
    continue_on_error: bool,
) -> Result<(usize, usize)> {
    let total = records.len();
    let mut extracted = 0;
    let mut failed = 0;

    for (index, record) in records.iter_mut().enumerate() {
        let url = record
            .permalink()
            .ok_or(Error::MissingPermalink { index })?
            .to_string();
        info!("[{}/{total}] {url}", index + 1);

        let extraction = match process_item(fetcher, &url) {
            Ok(extraction) => extraction,
            Err(e) if continue_on_error => {
                warn!(url = %url, error = %e, "fetch failed, continuing");
                ExtractionFailure::Transport {
                    detail: e.to_string(),
                }
                .into()
            }
            Err(e) => return Err(e),
        };

        if extraction.is_text() {
            extracted += 1;
        } else {
            failed += 1;
        }
        record.set_extraction(&extraction)?;
    }

    Ok((extracted, failed))
}

/// Fetch one page and extract its main text.
///
/// A non-200 status short-circuits to [`ExtractionFailure::HttpStatus`]
/// without looking at the body.
///
/// # Errors
///
/// Returns the fetcher's error when no response was obtained.
pub fn process_item<F: PageFetcher + ?Sized>(fetcher: &F, url: &str) -> Result<Extraction> {
    let page = fetcher.fetch(url)?;
    if !page.is_ok() {
        return Ok(ExtractionFailure::HttpStatus { code: page.status }.into());
    }
    Ok(extract_main_text(&page.body, url))
}

/// Write records as a pretty-printed JSON array (2-space indent, UTF-8,
/// non-ASCII left as is). The parent directory is created if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub fn write_output(path: &Path, records: &[MetadataRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

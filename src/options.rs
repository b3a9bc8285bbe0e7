//! Configuration options for a sampling run.
//!
//! The `Options` struct controls which records are sampled, where they are
//! read from and written to, and how transport failures are treated.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default location of the Founders Online metadata export.
pub const DEFAULT_METADATA_PATH: &str = "data/raw/founders-online-metadata.json";

/// Default directory for sample files.
pub const DEFAULT_OUTPUT_DIR: &str = "data/processed";

/// Configuration options for a sampling run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use founders_sample::Options;
///
/// let options = Options {
///     max_items: 50,
///     seed: 7,
///     ..Options::default()
/// };
/// assert_eq!(
///     options.output_path(),
///     std::path::Path::new("data/processed/sample_50_7.json")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Draw a seeded random sample instead of taking a prefix.
    ///
    /// Default: `true`
    pub randomize: bool,

    /// Upper bound on the number of records sampled.
    ///
    /// Default: `1000`
    pub max_items: usize,

    /// Seed for the sampler's generator. Also part of the output file name.
    ///
    /// Default: `42`
    pub seed: u64,

    /// Metadata JSON file to sample from.
    ///
    /// Default: `data/raw/founders-online-metadata.json`
    pub metadata_path: PathBuf,

    /// Directory the sample file is written into. Created if missing.
    ///
    /// Default: `data/processed`
    pub output_dir: PathBuf,

    /// Per-request timeout.
    ///
    /// `None` means no timeout at all: a request waits until the server
    /// answers or the connection drops.
    ///
    /// Default: `None`
    pub timeout: Option<Duration>,

    /// Record transport errors on the item and keep going.
    ///
    /// When `false`, the first transport error aborts the run and nothing
    /// is written.
    ///
    /// Default: `false`
    pub continue_on_error: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            randomize: true,
            max_items: 1000,
            seed: 42,
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: None,
            continue_on_error: false,
        }
    }
}

impl Options {
    /// `{output_dir}/sample_{max_items}_{seed}.json`
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        output_path(&self.output_dir, self.max_items, self.seed)
    }
}

/// Build the sample file path for a given size and seed.
#[must_use]
pub fn output_path(output_dir: &Path, max_items: usize, seed: u64) -> PathBuf {
    output_dir.join(format!("sample_{max_items}_{seed}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert!(options.randomize);
        assert_eq!(options.max_items, 1000);
        assert_eq!(options.seed, 42);
        assert!(options.timeout.is_none());
        assert!(!options.continue_on_error);
    }

    #[test]
    fn output_path_uses_size_and_seed() {
        let options = Options::default();
        assert_eq!(
            options.output_path(),
            Path::new("data/processed").join("sample_1000_42.json")
        );
    }

    #[test]
    fn output_path_in_custom_dir() {
        let path = output_path(Path::new("/tmp/out"), 5, 0);
        assert_eq!(path, Path::new("/tmp/out/sample_5_0.json"));
    }
}

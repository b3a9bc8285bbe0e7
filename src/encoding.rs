//! Character encoding detection and transcoding.
//!
//! Archive pages are decoded by looking at the bytes themselves rather than
//! trusting `Content-Type` headers or `<meta charset>` declarations. Detection
//! is statistical (`chardetng`); decoding goes through `encoding_rs`.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// Detect character encoding from raw page bytes.
///
/// Feeds the whole buffer to a character-distribution detector. Valid UTF-8
/// containing non-ASCII text is reported as UTF-8; pure ASCII is reported as
/// an ASCII-compatible legacy encoding, which decodes identically.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Transcode page bytes to a UTF-8 string.
///
/// Malformed sequences are replaced with U+FFFD rather than failing. A byte
/// order mark, when present, takes precedence over the detected encoding.
///
/// # Examples
///
/// ```
/// use founders_sample::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// let utf8_str = transcode_to_utf8(html);
/// assert!(utf8_str.contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);
    tracing::trace!(encoding = encoding.name(), "detected page encoding");

    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    decoded.into_owned()
}

//! CSS selectors and tokens used by the extractor.
//!
//! Founders Online document pages wrap the transcription in a
//! `<div class="innerdiv docbody">` and mark footnote references with
//! `<a class="ptr">`.

/// Main content container: a `div` with both `innerdiv` and `docbody` classes.
pub const MAIN_CONTENT_SELECTOR: &str = "div.innerdiv.docbody";

/// Footnote reference anchors inside the container.
pub const FOOTNOTE_SELECTOR: &str = "a.ptr";

/// Paragraphs collected from the container.
pub const PARAGRAPH_SELECTOR: &str = "p";

/// Placeholder text swapped in for each footnote anchor.
///
/// Replaced by a single space after paragraph text is gathered, so words on
/// either side of a removed footnote do not fuse.
pub const FOOTNOTE_MARKER: &str = "FOOTNOTE_MARKER";

/// Elements whose text content is never visible.
pub const INVISIBLE_TEXT_TAGS: &[&str] = &["script", "style", "template"];

//! Main-text extraction for Founders Online document pages.
//!
//! The transcription lives in a single `div.innerdiv.docbody`. Footnote
//! anchors are swapped for a placeholder before paragraph text is read, then
//! each paragraph is whitespace-normalised and the paragraphs are joined one
//! per line.

use tracing::debug;

use crate::dom::{self, Document};
use crate::encoding;
use crate::patterns::{
    FOOTNOTE_MARKER, FOOTNOTE_SELECTOR, MAIN_CONTENT_SELECTOR, PARAGRAPH_SELECTOR,
};
use crate::result::{Extraction, ExtractionFailure};

/// Decode raw page bytes and extract the main text.
///
/// `source_url` is only used for logging.
#[must_use]
pub fn extract_main_text(html: &[u8], source_url: &str) -> Extraction {
    let decoded = encoding::transcode_to_utf8(html);
    let extraction = extract_main_text_str(&decoded);

    match &extraction {
        Extraction::Text(text) => debug!(
            url = source_url,
            bytes = html.len(),
            lines = text.lines().count(),
            "extracted main text"
        ),
        Extraction::Failed(failure) => debug!(url = source_url, %failure, "no main text"),
    }

    extraction
}

/// Extract the main text from an already-decoded HTML document.
#[must_use]
pub fn extract_main_text_str(html: &str) -> Extraction {
    let document = dom::parse(html);
    extract_document(&document)
}

pub(crate) fn extract_document(document: &Document) -> Extraction {
    let Some(container) = dom::find_first(document, MAIN_CONTENT_SELECTOR) else {
        return ExtractionFailure::MissingContainer.into();
    };

    dom::replace_with_text(
        &dom::query_selector_all(&container, FOOTNOTE_SELECTOR),
        FOOTNOTE_MARKER,
    );

    // Paragraphs that clean down to nothing are kept as blank lines.
    let paragraphs: Vec<String> = dom::query_selector_all(&container, PARAGRAPH_SELECTOR)
        .iter()
        .map(|p| clean_paragraph(&dom::stripped_text(&p)))
        .collect();

    Extraction::Text(paragraphs.join("\n"))
}

/// Turn footnote placeholders into spaces and collapse whitespace runs.
#[must_use]
pub fn clean_paragraph(raw: &str) -> String {
    raw.replace(FOOTNOTE_MARKER, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_paragraph_collapses_whitespace() {
        assert_eq!(
            clean_paragraph("  multiple   spaces\n\tand tabs "),
            "multiple spaces and tabs"
        );
    }

    #[test]
    fn clean_paragraph_splits_on_marker() {
        assert_eq!(clean_paragraph("HelloFOOTNOTE_MARKERworld"), "Hello world");
        assert_eq!(clean_paragraph("FOOTNOTE_MARKER"), "");
    }

    #[test]
    fn footnote_anchor_becomes_space() {
        let html = r#"<div class="innerdiv docbody"><p>Hello<a class="ptr">1</a>world</p></div>"#;
        assert_eq!(extract_main_text_str(html), Extraction::Text("Hello world".into()));
    }

    #[test]
    fn missing_container() {
        let html = "<html><body><div class=\"docbody\"><p>Text</p></div></body></html>";
        assert_eq!(
            extract_main_text_str(html),
            Extraction::Failed(ExtractionFailure::MissingContainer)
        );
    }

    #[test]
    fn container_without_paragraphs_is_empty_text() {
        let html = r#"<div class="innerdiv docbody"><span>loose text</span></div>"#;
        assert_eq!(extract_main_text_str(html), Extraction::Text(String::new()));
    }

    #[test]
    fn only_first_container_is_used() {
        let html = r#"
            <div class="innerdiv docbody"><p>First</p></div>
            <div class="innerdiv docbody"><p>Second</p></div>
        "#;
        assert_eq!(extract_main_text_str(html), Extraction::Text("First".into()));
    }

    #[test]
    fn bytes_entry_point_decodes() {
        let html = "<div class=\"innerdiv docbody\"><p>Gouverneur Morris à Paris</p></div>";
        let extraction = extract_main_text(html.as_bytes(), "https://example.org/doc");
        assert_eq!(extraction.text(), Some("Gouverneur Morris à Paris"));
    }
}

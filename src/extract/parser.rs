//! HTML parsing front end for headline extraction.
//!
//! Markup is handed to `scraper` (html5ever underneath), which applies the
//! browser recovery rules: unclosed tags are closed, stray end tags are
//! dropped and misnested formatting elements are reparented. Tag structure
//! therefore never fails to parse. The only failure is at the decoding
//! boundary, when the raw page bytes are not UTF-8.

use scraper::{ElementRef, Html};
use thiserror::Error;
use tracing::{debug, instrument};

/// The page bytes could not be turned into text, so no tree was built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("markup is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding {
        valid_up_to: usize,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// A parsed page.
///
/// Owns the whole node tree; [`CandidateElement`](super::matcher::CandidateElement)s
/// borrow from it and cannot outlive it.
#[derive(Debug)]
pub struct DocumentTree {
    html: Html,
}

impl DocumentTree {
    /// The `<html>` element. Always present, html5ever synthesizes it.
    pub fn root_element(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// The underlying `scraper` document.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Number of markup errors html5ever recovered from.
    pub fn recovered_errors(&self) -> usize {
        self.html.errors.len()
    }
}

/// Strictly decode page bytes as UTF-8.
pub fn decode(bytes: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|source| ParseError::InvalidEncoding {
        valid_up_to: source.valid_up_to(),
        source,
    })
}

/// Build a tree from already-decoded markup. Never fails.
#[instrument(level = "debug", skip_all, fields(bytes = markup.len()))]
pub fn parse(markup: &str) -> DocumentTree {
    let html = Html::parse_document(markup);
    debug!(recovered = html.errors.len(), "Parsed HTML document");
    DocumentTree { html }
}

/// Decode then parse raw page bytes.
pub fn parse_bytes(bytes: &[u8]) -> Result<DocumentTree, ParseError> {
    decode(bytes).map(parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recovers_from_unclosed_tags() {
        let tree = parse("<div><p>one<p>two<span>three</div></b>");
        let text: String = tree.root_element().text().collect();
        assert_eq!(text, "onetwothree");
        assert!(tree.recovered_errors() > 0);
    }

    #[test]
    fn test_parse_empty_input_still_has_root() {
        let tree = parse("");
        assert_eq!(tree.root_element().value().name(), "html");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let bytes = b"<a class=\"CardBasic__title\">caf\xe9</a>";
        match decode(bytes) {
            Err(ParseError::InvalidEncoding { valid_up_to, .. }) => assert_eq!(valid_up_to, 31),
            other => panic!("expected encoding error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_bytes_accepts_utf8() {
        let tree = parse_bytes("<p>Café</p>".as_bytes()).unwrap();
        let text: String = tree.root_element().text().collect();
        assert_eq!(text, "Café");
    }
}

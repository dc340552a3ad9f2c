//! Headline extraction engine.
//!
//! Raw page markup goes through three stages:
//!
//! 1. [`parser`]: bytes are decoded and parsed into a [`DocumentTree`]
//! 2. [`matcher`]: the tree is walked and headline-bearing elements selected
//! 3. [`normalize`]: each selected element is flattened to a single line
//!
//! Extraction holds no state between calls, so pages can be processed in
//! parallel as long as each call gets its own markup.
//!
//! An empty result is not an error. It usually means CNN changed its markup
//! and none of the [`matcher::HEADLINE_PATTERNS`] apply any more; callers
//! decide how to report that.

pub mod matcher;
pub mod normalize;
pub mod parser;

use tracing::{debug, instrument};
use url::Url;

use crate::models::HeadlineLink;

pub use matcher::{CandidateElement, HEADLINE_PATTERNS, Pattern, match_headlines};
pub use normalize::{clean_text, normalize};
pub use parser::{DocumentTree, ParseError, decode, parse, parse_bytes};

/// Extract headlines from already-decoded markup.
pub fn extract_headlines_from_str(markup: &str) -> Vec<String> {
    let tree = parse(markup);
    match_headlines(&tree).iter().map(normalize).collect()
}

/// Extract headlines from raw page bytes.
///
/// # Errors
///
/// [`ParseError`] when the bytes are not valid UTF-8. Nothing is extracted
/// in that case.
#[instrument(level = "debug", skip_all, fields(bytes = markup.len()))]
pub fn extract_headlines(markup: &[u8]) -> Result<Vec<String>, ParseError> {
    let headlines = extract_headlines_from_str(decode(markup)?);
    debug!(count = headlines.len(), "Extracted headlines");
    Ok(headlines)
}

/// Extract headlines together with their links.
///
/// Yields one entry per headline from [`extract_headlines`], in the same
/// order. Each `href` is resolved against `page_url`.
pub fn extract_headline_links(markup: &[u8], page_url: &Url) -> Result<Vec<HeadlineLink>, ParseError> {
    let tree = parse_bytes(markup)?;
    let links = match_headlines(&tree)
        .iter()
        .map(|candidate| HeadlineLink {
            title: normalize(candidate),
            url: candidate
                .href()
                .and_then(|href| page_url.join(href.trim()).ok())
                .map(String::from),
        })
        .collect();
    Ok(links)
}

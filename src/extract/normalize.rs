//! Flatten a headline element into one clean line of text.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Node;

use super::matcher::CandidateElement;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new("[\r\n]").expect("static regex"));

/// Collect the text of a candidate's subtree in document order.
///
/// Text nested inside child elements is appended as is, with nothing
/// inserted between fragments. A `<br>` contributes a line feed, which
/// [`clean_text`] later turns into a space.
pub fn node_text(candidate: &CandidateElement<'_>) -> String {
    let mut out = String::new();
    for node in candidate.element().descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if element.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
    out
}

/// Replace every CR and LF with a space, then trim surrounding whitespace.
pub fn clean_text(text: &str) -> String {
    LINE_BREAK.replace_all(text, " ").trim().to_string()
}

/// The final headline string for a candidate.
pub fn normalize(candidate: &CandidateElement<'_>) -> String {
    clean_text(&node_text(candidate))
}

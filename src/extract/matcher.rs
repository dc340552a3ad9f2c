//! Headline element selection.
//!
//! CNN has shipped several card layouts over the years and a category page
//! can mix them. Each layout is described by a [`Pattern`] and the patterns
//! are OR-ed together. Patterns only look at tag names and class substrings,
//! never at ids or URLs.
//!
//! Class matching is a plain substring test on the raw `class` attribute.
//! CNN appends modifier suffixes (`CardBasic__title--small`) and mixes in
//! other classes, so splitting into tokens would miss real headlines. It
//! also means a class such as `MyCardBasic__titleWrapper` matches.

use scraper::{ElementRef, node::Element};
use tracing::{debug, instrument};

use super::parser::DocumentTree;

/// One markup variant a headline can be found in.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    /// Local tag name, lowercase.
    pub tag: &'static str,
    /// The `class` attribute must contain at least one of these.
    pub class_contains: &'static [&'static str],
    /// Select the `<a>` children of the matching element instead of the
    /// element itself.
    pub anchor_child: bool,
}

impl Pattern {
    pub fn matches(&self, element: &Element) -> bool {
        element.name() == self.tag
            && element
                .attr("class")
                .is_some_and(|class| self.class_contains.iter().any(|needle| class.contains(needle)))
    }
}

/// Card layouts currently known to carry headlines.
pub const HEADLINE_PATTERNS: &[Pattern] = &[
    // Card-based layout: the title link carries the class.
    Pattern {
        tag: "a",
        class_contains: &["CardBasic__title", "CardHero__title"],
        anchor_child: false,
    },
    // Older "cd" layout: <h3 class="cd__headline"><a>...</a></h3>
    Pattern {
        tag: "h3",
        class_contains: &["cd__headline"],
        anchor_child: true,
    },
];

/// A node selected as carrying a headline. Borrows the tree it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateElement<'a> {
    element: ElementRef<'a>,
}

impl<'a> CandidateElement<'a> {
    pub fn element(&self) -> ElementRef<'a> {
        self.element
    }

    /// Raw `href` of the candidate, when it is a link.
    pub fn href(&self) -> Option<&'a str> {
        self.element.value().attr("href")
    }
}

/// Whether `element` is selected by any pattern in `patterns`.
fn is_selected(element: ElementRef<'_>, patterns: &[Pattern]) -> bool {
    let direct = patterns
        .iter()
        .filter(|p| !p.anchor_child)
        .any(|p| p.matches(element.value()));
    if direct {
        return true;
    }

    element.value().name() == "a"
        && element
            .parent()
            .and_then(ElementRef::wrap)
            .is_some_and(|parent| {
                patterns
                    .iter()
                    .filter(|p| p.anchor_child)
                    .any(|p| p.matches(parent.value()))
            })
}

/// Select candidates with an explicit pattern set.
///
/// The tree is walked once in document order, so results from different
/// patterns interleave by position and an element matched by several
/// patterns appears once.
pub fn match_with<'a>(tree: &'a DocumentTree, patterns: &[Pattern]) -> Vec<CandidateElement<'a>> {
    tree.html()
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| is_selected(*element, patterns))
        .map(|element| CandidateElement { element })
        .collect()
}

/// Select headline candidates using [`HEADLINE_PATTERNS`].
#[instrument(level = "debug", skip_all)]
pub fn match_headlines(tree: &DocumentTree) -> Vec<CandidateElement<'_>> {
    let candidates = match_with(tree, HEADLINE_PATTERNS);
    debug!(count = candidates.len(), "Matched headline candidates");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::parser::parse;

    fn matched_text(markup: &str) -> Vec<String> {
        let tree = parse(markup);
        match_headlines(&tree)
            .iter()
            .map(|c| c.element().text().collect())
            .collect()
    }

    #[test]
    fn test_card_classes_match_by_substring() {
        let html = r#"
            <a class="CardHero__title">Hero</a>
            <a class="CardBasic__title-modifier">Basic</a>
            <a class="CardBasic">Not a title</a>
        "#;
        assert_eq!(matched_text(html), vec!["Hero", "Basic"]);
    }

    #[test]
    fn test_cd_headline_selects_child_anchor() {
        let html = r#"<h3 class="cd__headline t1"><a href="/x">Inner</a></h3>"#;
        let tree = parse(html);
        let found = match_headlines(&tree);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].element().value().name(), "a");
        assert_eq!(found[0].href(), Some("/x"));
    }

    #[test]
    fn test_cd_headline_without_anchor_selects_nothing() {
        assert!(matched_text(r#"<h3 class="cd__headline">No link</h3>"#).is_empty());
    }

    #[test]
    fn test_cd_headline_ignores_nested_anchor() {
        let html = r#"<h3 class="cd__headline"><span><a href="/deep">Deep</a></span></h3>"#;
        assert!(matched_text(html).is_empty());
    }

    #[test]
    fn test_other_heading_levels_do_not_match() {
        let html = r#"<h2 class="cd__headline"><a>Two</a></h2><div class="cd__headline"><a>Div</a></div>"#;
        assert!(matched_text(html).is_empty());
    }

    #[test]
    fn test_results_interleave_in_document_order() {
        let html = r#"
            <h3 class="cd__headline"><a>first</a></h3>
            <a class="CardBasic__title">second</a>
            <h3 class="cd__headline"><a>third</a></h3>
            <a class="CardHero__title">fourth</a>
        "#;
        assert_eq!(matched_text(html), vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_element_matching_both_patterns_is_selected_once() {
        let html = r#"<h3 class="cd__headline"><a class="CardBasic__title">Both</a></h3>"#;
        assert_eq!(matched_text(html), vec!["Both"]);
    }

    #[test]
    fn test_superstring_class_currently_matches() {
        // Substring matching accepts unrelated classes that embed a pattern.
        let html = r#"<a class="MyCardBasic__titleWrapper">Wrapper</a>"#;
        assert_eq!(matched_text(html), vec!["Wrapper"]);
    }

    #[test]
    fn test_class_match_is_case_sensitive() {
        assert!(matched_text(r#"<a class="cardbasic__title">lower</a>"#).is_empty());
    }

    #[test]
    fn test_uppercase_tags_are_normalized() {
        let html = r#"<H3 CLASS="cd__headline"><A HREF="/y">Shout</A></H3>"#;
        assert_eq!(matched_text(html), vec!["Shout"]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        assert!(matched_text("<p>nothing here</p>").is_empty());
    }

    #[test]
    fn test_custom_pattern_set() {
        const PATTERNS: &[Pattern] = &[Pattern {
            tag: "span",
            class_contains: &["title"],
            anchor_child: false,
        }];
        let tree = parse(r#"<span class="x-title">a</span><a class="CardBasic__title">b</a>"#);
        let found = match_with(&tree, PATTERNS);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].element().text().collect::<String>(), "a");
    }
}

//! Data models for extracted headlines and the category report.
//!
//! - [`HeadlineLink`]: a headline with the URL it points to
//! - [`CategoryHeadlines`]: what was extracted from one category page
//! - [`HeadlineReport`]: every category of a run, in the order scraped

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A headline together with its link.
///
/// `url` is absolute, resolved against the category page. It is `None` when
/// the element had no `href` or the value could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeadlineLink {
    pub title: String,
    pub url: Option<String>,
}

/// Headlines extracted from a single category page.
///
/// Serializes as a bare JSON array of either strings or link objects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CategoryHeadlines {
    Titles(Vec<String>),
    Links(Vec<HeadlineLink>),
}

impl CategoryHeadlines {
    pub fn len(&self) -> usize {
        match self {
            CategoryHeadlines::Titles(titles) => titles.len(),
            CategoryHeadlines::Links(links) => links.len(),
        }
    }

    /// Zero headlines usually means the page markup drifted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Category name to headlines, kept in insertion order.
///
/// Serialized as a JSON object whose keys follow the order categories were
/// added, not alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlineReport {
    categories: Vec<(String, CategoryHeadlines)>,
}

impl HeadlineReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category. A repeated name replaces the earlier entry in place.
    pub fn insert(&mut self, category: impl Into<String>, headlines: CategoryHeadlines) {
        let category = category.into();
        match self.categories.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => *existing = headlines,
            None => self.categories.push((category, headlines)),
        }
    }

    pub fn get(&self, category: &str) -> Option<&CategoryHeadlines> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, headlines)| headlines)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total headline count across all categories.
    pub fn headline_count(&self) -> usize {
        self.categories.iter().map(|(_, h)| h.len()).sum()
    }
}

impl Serialize for HeadlineReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, headlines) in &self.categories {
            map.serialize_entry(name, headlines)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_keeps_insertion_order() {
        let mut report = HeadlineReport::new();
        report.insert("style", CategoryHeadlines::Titles(vec!["s".into()]));
        report.insert("entertainment", CategoryHeadlines::Titles(vec![]));
        report.insert("business", CategoryHeadlines::Titles(vec!["b1".into(), "b2".into()]));

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"style":["s"],"entertainment":[],"business":["b1","b2"]}"#);
        assert_eq!(
            report.categories().collect::<Vec<_>>(),
            vec!["style", "entertainment", "business"]
        );
        assert_eq!(report.headline_count(), 3);
    }

    #[test]
    fn test_insert_replaces_existing_category() {
        let mut report = HeadlineReport::new();
        report.insert("style", CategoryHeadlines::Titles(vec!["old".into()]));
        report.insert("business", CategoryHeadlines::Titles(vec![]));
        report.insert("style", CategoryHeadlines::Titles(vec!["new".into()]));

        assert_eq!(report.len(), 2);
        assert_eq!(
            report.get("style"),
            Some(&CategoryHeadlines::Titles(vec!["new".into()]))
        );
        assert_eq!(report.categories().next(), Some("style"));
    }

    #[test]
    fn test_links_serialize_as_objects() {
        let headlines = CategoryHeadlines::Links(vec![HeadlineLink {
            title: "Title".into(),
            url: Some("https://cnn.com/a".into()),
        }]);
        let json = serde_json::to_string(&headlines).unwrap();
        assert_eq!(json, r#"[{"title":"Title","url":"https://cnn.com/a"}]"#);
    }

    #[test]
    fn test_empty_category_headlines() {
        assert!(CategoryHeadlines::Titles(vec![]).is_empty());
        assert!(CategoryHeadlines::Links(vec![]).is_empty());
        assert!(!CategoryHeadlines::Titles(vec!["x".into()]).is_empty());
    }
}

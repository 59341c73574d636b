//! Teletext document model.
//!
//! The endpoint returns `{"data": {<page_id>: {"subpages": [..], "text": {..}}}}`.
//! Page order in `data` defines navigation order, so the page map is
//! deserialized into an ordered list instead of a hash map.

use crate::error::AppError;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// A single numbered page and its lettered subpages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Subpage letters in display order. Empty when the page has a single screen.
    #[serde(default)]
    pub subpages: Vec<String>,
    /// Raw envelope-wrapped content keyed by page id plus optional subpage letter.
    #[serde(default)]
    pub text: HashMap<String, String>,
}

impl PageRecord {
    /// Returns the first listed subpage, if any.
    pub fn first_subpage(&self) -> Option<&str> {
        self.subpages.first().map(String::as_str)
    }

    /// Returns the raw text stored under `key`.
    pub fn raw_text(&self, key: &str) -> Option<&str> {
        self.text.get(key).map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct TeletextResponse {
    #[serde(deserialize_with = "deserialize_ordered_pages")]
    data: Vec<(String, PageRecord)>,
}

fn deserialize_ordered_pages<'de, D>(deserializer: D) -> Result<Vec<(String, PageRecord)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedPages;

    impl<'de> Visitor<'de> for OrderedPages {
        type Value = Vec<(String, PageRecord)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of page identifiers to page records")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pages = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((id, record)) = access.next_entry::<String, PageRecord>()? {
                pages.push((id, record));
            }
            Ok(pages)
        }
    }

    deserializer.deserialize_map(OrderedPages)
}

/// Parsed teletext: page records plus the navigation order of their ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Teletext {
    order: Vec<String>,
    pages: HashMap<String, PageRecord>,
}

impl Teletext {
    /// Parses a raw JSON document.
    ///
    /// `source_name` (URL or file path) is only used in error messages.
    ///
    /// # Errors
    /// * `AppError::MalformedJson` - The text is not valid JSON
    /// * `AppError::UnexpectedStructure` - Valid JSON without the expected `data` shape
    pub fn from_json(raw: &str, source_name: &str) -> Result<Self, AppError> {
        let response: TeletextResponse = serde_json::from_str(raw).map_err(|e| {
            if e.is_data() {
                AppError::unexpected_structure(source_name, e.to_string())
            } else {
                AppError::malformed_json(source_name, e.to_string())
            }
        })?;

        let teletext = Self::from_pages(response.data);
        debug!(
            "Parsed {} teletext pages from {}",
            teletext.len(),
            source_name
        );
        Ok(teletext)
    }

    /// Builds a document from pages in navigation order.
    ///
    /// A repeated page id keeps its first position and its last record.
    pub fn from_pages(pages: impl IntoIterator<Item = (String, PageRecord)>) -> Self {
        let mut teletext = Teletext::default();
        for (id, record) in pages {
            if teletext.pages.insert(id.clone(), record).is_some() {
                warn!("Duplicate page {id} in teletext document, keeping last record");
            } else {
                teletext.order.push(id);
            }
        }
        teletext
    }

    /// Page ids in document order.
    pub fn page_ids(&self) -> &[String] {
        &self.order
    }

    pub fn page(&self, id: &str) -> Option<&PageRecord> {
        self.pages.get(id)
    }

    /// Iterates pages in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageRecord)> {
        self.order
            .iter()
            .filter_map(|id| self.pages.get(id).map(|record| (id.as_str(), record)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "data": {
            "102": {"subpages": [], "text": {"102": "<pre>second</pre>"}},
            "100": {"subpages": ["A", "B"], "text": {"100A": "<pre>a</pre>", "100B": "<pre>b</pre>"}},
            "101": {"subpages": [], "text": {"101": "<pre>third</pre>"}}
        }
    }"#;

    #[test]
    fn test_page_order_follows_document() {
        let teletext = Teletext::from_json(SAMPLE, "sample.json").unwrap();
        assert_eq!(teletext.page_ids(), ["102", "100", "101"]);
        assert_eq!(teletext.len(), 3);
    }

    #[test]
    fn test_page_record_lookup() {
        let teletext = Teletext::from_json(SAMPLE, "sample.json").unwrap();
        let page = teletext.page("100").unwrap();
        assert_eq!(page.first_subpage(), Some("A"));
        assert_eq!(page.raw_text("100B"), Some("<pre>b</pre>"));
        assert_eq!(page.raw_text("100C"), None);
        assert_eq!(teletext.page("101").unwrap().first_subpage(), None);
    }

    #[test]
    fn test_iter_follows_order() {
        let teletext = Teletext::from_json(SAMPLE, "sample.json").unwrap();
        let ids: Vec<&str> = teletext.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["102", "100", "101"]);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let teletext = Teletext::from_json(r#"{"data": {"100": {}}}"#, "sample.json").unwrap();
        let page = teletext.page("100").unwrap();
        assert!(page.subpages.is_empty());
        assert!(page.text.is_empty());
    }

    #[test]
    fn test_duplicate_page_keeps_first_position() {
        let teletext = Teletext::from_pages(vec![
            ("100".to_string(), PageRecord::default()),
            ("101".to_string(), PageRecord::default()),
            (
                "100".to_string(),
                PageRecord {
                    subpages: vec!["A".to_string()],
                    text: HashMap::new(),
                },
            ),
        ]);
        assert_eq!(teletext.page_ids(), ["100", "101"]);
        assert_eq!(teletext.page("100").unwrap().subpages, vec!["A"]);
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let result = Teletext::from_json("{\"data\": {", "broken.json");
        match result {
            Err(AppError::MalformedJson { source_name, .. }) => {
                assert_eq!(source_name, "broken.json")
            }
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn test_html_body_is_malformed_json() {
        let result = Teletext::from_json("<html>Service down</html>", "https://example.com/");
        assert!(matches!(result, Err(AppError::MalformedJson { .. })));
    }

    #[test]
    fn test_missing_data_is_unexpected_structure() {
        let result = Teletext::from_json(r#"{"pages": {}}"#, "other.json");
        assert!(matches!(result, Err(AppError::UnexpectedStructure { .. })));
    }

    #[test]
    fn test_wrong_subpage_type_is_unexpected_structure() {
        let result = Teletext::from_json(r#"{"data": {"100": {"subpages": "A"}}}"#, "other.json");
        assert!(matches!(result, Err(AppError::UnexpectedStructure { .. })));
    }
}

use serde::{ser::SerializeMap, Serialize, Serializer};

use super::{
    category::{categorize, Category},
    page_summary::PageSummary,
    raw_item::RawItem,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryKind {
    Website,
    Search,
}

impl SummaryKind {
    fn key(&self) -> &'static str {
        match self {
            SummaryKind::Website => "website_summary",
            SummaryKind::Search => "search_summary",
        }
    }
}

/// Serializes as a map whose first key is the summary, then every category in
/// [`Category::ALL`] order, empty buckets included.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedResult {
    pub summary_kind: SummaryKind,
    pub summary: Option<PageSummary>,
    buckets: [Vec<RawItem>; 10],
}

impl CategorizedResult {
    pub fn new(summary_kind: SummaryKind, summary: Option<PageSummary>) -> Self {
        CategorizedResult {
            summary_kind,
            summary,
            buckets: Default::default(),
        }
    }

    pub fn from_items(
        summary_kind: SummaryKind,
        summary: Option<PageSummary>,
        items: Vec<RawItem>,
    ) -> Self {
        let mut result = CategorizedResult::new(summary_kind, summary);
        for item in items {
            let category = categorize(&item.title);
            result.push(category, item);
        }
        result
    }

    pub fn push(&mut self, category: Category, item: RawItem) {
        self.buckets[category.index()].push(item);
    }

    pub fn bucket(&self, category: Category) -> &[RawItem] {
        &self.buckets[category.index()]
    }

    pub fn total_items(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

impl Serialize for CategorizedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + Category::ALL.len()))?;
        map.serialize_entry(self.summary_kind.key(), &self.summary)?;
        for category in Category::ALL {
            map.serialize_entry(category.as_str(), self.bucket(category))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{CategorizedResult, SummaryKind};
    use crate::domain::{category::Category, raw_item::RawItem};

    fn item(title: &str) -> RawItem {
        RawItem {
            title: title.to_string(),
            source_label: "Example".to_string(),
            snippet: title.to_string(),
            link: "https://example.org".to_string(),
        }
    }

    #[test]
    fn every_item_lands_in_one_bucket() {
        let items = vec![
            item("GPT-5 rumors"),
            item("Weather today"),
            item("Hiring: backend"),
            item("Why Rust"),
            item("More weather"),
        ];
        let result = CategorizedResult::from_items(SummaryKind::Website, None, items);

        assert_eq!(result.total_items(), 5);
        assert_eq!(result.bucket(Category::Ai).len(), 1);
        assert_eq!(result.bucket(Category::Jobs).len(), 1);
        assert_eq!(result.bucket(Category::Programming).len(), 1);
        let other: Vec<&str> = result
            .bucket(Category::Other)
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(other, vec!["Weather today", "More weather"]);
    }

    #[test]
    fn serializes_summary_first_and_all_categories() {
        let result = CategorizedResult::new(SummaryKind::Search, None);
        let json = serde_json::to_string(&result).unwrap();

        assert_eq!(
            json,
            r#"{"search_summary":null,"Tech":[],"AI":[],"Startups":[],"Tutorials":[],"Open Source":[],"Programming":[],"Web":[],"Security":[],"Jobs":[],"Other":[]}"#
        );
    }

    #[test]
    fn items_expose_source_label_as_company() {
        let result =
            CategorizedResult::from_items(SummaryKind::Website, None, vec![item("Weather")]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["Other"][0]["company"], "Example");
        assert!(json["Other"][0].get("source_label").is_none());
    }
}

use scraper::Html;

use crate::domain::{
    categorized_result::{CategorizedResult, SummaryKind},
    page_summary::PageSummary,
    raw_item::{RawItem, PLACEHOLDER_LINK},
};

use super::{
    html::{element_text, sel},
    Fetcher, ScrapeError,
};

const MAX_RESULTS: usize = 15;
const NO_TITLE: &str = "No title";
const NO_DESCRIPTION: &str = "No description available";
const UNKNOWN_SOURCE: &str = "Unknown source";

pub fn build_search_url(url_template: &str, query: &str) -> String {
    url_template.replace("{query}", &query.replace(' ', "+"))
}

pub fn parse_search_results(document: &Html) -> Vec<RawItem> {
    let title_selector = sel("a.result__a");
    let snippet_selector = sel("a.result__snippet");
    let source_selector = sel("span.result__url");

    document
        .select(&sel("div.result"))
        .take(MAX_RESULTS)
        .filter_map(|result| {
            let title_tag = result.select(&title_selector).next();
            let title = title_tag
                .map(element_text)
                .unwrap_or(NO_TITLE.to_string());
            if title.is_empty() || title == NO_TITLE {
                return None;
            }

            let link = title_tag
                .and_then(|a_tag| a_tag.value().attr("href"))
                .unwrap_or(PLACEHOLDER_LINK)
                .to_string();
            let snippet = result
                .select(&snippet_selector)
                .next()
                .map(element_text)
                .unwrap_or(NO_DESCRIPTION.to_string());
            let source = result
                .select(&source_selector)
                .next()
                .map(element_text)
                .unwrap_or(UNKNOWN_SOURCE.to_string());

            Some(RawItem {
                title,
                source_label: source,
                snippet,
                link,
            })
        })
        .collect()
}

fn no_results_item(query: &str) -> RawItem {
    RawItem {
        title: format!("No results found for '{}'", query),
        source_label: "Search Engine".to_string(),
        snippet: "Try rephrasing your search query or use more specific keywords.".to_string(),
        link: PLACEHOLDER_LINK.to_string(),
    }
}

async fn search_items(
    fetcher: &dyn Fetcher,
    url_template: &str,
    query: &str,
) -> Result<Vec<RawItem>, ScrapeError> {
    let search_url = build_search_url(url_template, query);
    let html_content = fetcher
        .fetch(&search_url)
        .await
        .map_err(|e| ScrapeError::Search {
            query: query.to_string(),
            reason: e.to_string(),
        })?;

    let html_document = Html::parse_document(&html_content);
    let mut items = parse_search_results(&html_document);
    log::info!("Found {} search results for: {}", items.len(), query);

    if items.is_empty() {
        items.push(no_results_item(query));
    }

    Ok(items)
}

fn search_summary(query: &str, found: usize) -> PageSummary {
    PageSummary {
        title: format!("Search Results: {}", query),
        description: format!(
            "Found {} web results for your search query. Results are automatically categorized based on content.",
            found
        ),
        site_type: "Web Search Results".to_string(),
        language: "en".to_string(),
        author: "Multiple Sources".to_string(),
        publisher: "Search Engine".to_string(),
        site_name: "AI-Powered Search".to_string(),
        ..PageSummary::new(&format!("search:{}", query), "Web Search")
    }
}

fn search_error_summary(query: &str, error: &ScrapeError) -> PageSummary {
    let reason = match error {
        ScrapeError::Search { reason, .. } => reason.clone(),
        other => other.to_string(),
    };

    PageSummary {
        title: "Search Error".to_string(),
        description: format!("Unable to complete search for '{}'. Error: {}", query, reason),
        site_type: "Error".to_string(),
        language: "en".to_string(),
        ..PageSummary::new(&format!("search:{}", query), "Search")
    }
}

pub async fn search_web(
    fetcher: &dyn Fetcher,
    url_template: &str,
    query: &str,
) -> CategorizedResult {
    log::info!("Performing web search for: {}", query);

    match search_items(fetcher, url_template, query).await {
        Ok(items) => {
            let summary = search_summary(query, items.len());
            CategorizedResult::from_items(SummaryKind::Search, Some(summary), items)
        }
        Err(e) => {
            log::error!("Error during web search: {}", e);
            CategorizedResult::new(SummaryKind::Search, Some(search_error_summary(query, &e)))
        }
    }
}

use scraper::{ElementRef, Html, Node, Selector};

use super::ScrapeError;

const HIDDEN_TAGS: [&str; 2] = ["script", "style"];

pub fn sel(css: &'static str) -> Selector {
    Selector::parse(css).expect("hard-coded selector should parse")
}

pub fn parse_selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(css.to_string()))
}

pub fn element_text(element: ElementRef) -> String {
    element
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| HIDDEN_TAGS.contains(&e.name()))
            })
        })
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(text.trim()),
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .collect()
}

pub fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text)
}

pub fn first_href(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|a_tag| a_tag.value().attr("href"))
        .map(|href| href.to_string())
}

pub fn meta_content(document: &Html, attr: &str, value: &str) -> Option<String> {
    document
        .select(&sel("meta"))
        .find(|meta| meta.value().attr(attr) == Some(value))
        .and_then(|meta| meta.value().attr("content"))
        .filter(|content| !content.is_empty())
        .map(|content| content.to_string())
}

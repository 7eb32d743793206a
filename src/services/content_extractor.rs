use scraper::{ElementRef, Html};

use crate::domain::raw_item::{
    clip_snippet, resolve_link, truncate_snippet, RawItem, PLACEHOLDER_LINK,
};

use super::html::{element_text, first_href, first_text, sel};

const MAX_BLOCKS: usize = 10;
const MAX_HEADINGS: usize = 15;
const MAX_LINKS: usize = 20;
const MIN_LINK_TEXT_LEN: usize = 3;
const CLASS_PATTERNS: [&str; 5] = ["post", "article", "item", "content", "card"];
const NO_TITLE: &str = "No title";
const NO_DESCRIPTION: &str = "No description";

pub struct ExtractionContext<'a> {
    pub document: &'a Html,
    pub page_title: &'a str,
    pub origin: &'a str,
}

impl ExtractionContext<'_> {
    fn item(&self, title: String, snippet: String, link: Option<String>) -> RawItem {
        let link = link.unwrap_or_else(|| PLACEHOLDER_LINK.to_string());
        RawItem {
            title,
            source_label: self.page_title.to_string(),
            snippet,
            link: resolve_link(&link, self.origin),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    ArticleTags,
    ClassPatterns,
    Headings,
    LinkDump,
}

impl Strategy {
    pub const ORDER: [Strategy; 4] = [
        Strategy::ArticleTags,
        Strategy::ClassPatterns,
        Strategy::Headings,
        Strategy::LinkDump,
    ];

    pub fn extract(&self, ctx: &ExtractionContext) -> Vec<RawItem> {
        match self {
            Strategy::ArticleTags => from_article_tags(ctx),
            Strategy::ClassPatterns => from_class_patterns(ctx),
            Strategy::Headings => from_headings(ctx),
            Strategy::LinkDump => from_links(ctx),
        }
    }
}

pub fn extract_items(ctx: &ExtractionContext) -> (Option<Strategy>, Vec<RawItem>) {
    for strategy in Strategy::ORDER {
        let items = strategy.extract(ctx);
        if !items.is_empty() {
            log::info!("{:?} strategy found {} items", strategy, items.len());
            return (Some(strategy), items);
        }
    }

    log::info!("No extraction strategy matched {}", ctx.origin);
    (None, vec![])
}

fn from_article_tags(ctx: &ExtractionContext) -> Vec<RawItem> {
    let heading_selector = sel("h1, h2, h3");

    ctx.document
        .select(&sel("article"))
        .take(MAX_BLOCKS)
        .filter_map(|article| {
            let title = first_text(article, &heading_selector).unwrap_or(NO_TITLE.to_string());
            block_item(ctx, article, title)
        })
        .collect()
}

fn from_class_patterns(ctx: &ExtractionContext) -> Vec<RawItem> {
    let heading_selector = sel("h1, h2, h3, h4");

    ctx.document
        .select(&sel("div[class]"))
        .filter(|div| {
            let class = div.value().attr("class").unwrap_or_default().to_lowercase();
            CLASS_PATTERNS.iter().any(|pattern| class.contains(pattern))
        })
        .take(MAX_BLOCKS)
        .filter_map(|div| {
            // Content divs without a heading of their own are layout, not items
            let title = first_text(div, &heading_selector)?;
            block_item(ctx, div, title)
        })
        .collect()
}

fn block_item(ctx: &ExtractionContext, block: ElementRef, title: String) -> Option<RawItem> {
    let link = first_href(block, &sel("a"));
    let snippet = truncate_snippet(&element_text(block));

    match title.is_empty() || snippet.is_empty() {
        true => None,
        false => Some(ctx.item(title, snippet, link)),
    }
}

fn from_headings(ctx: &ExtractionContext) -> Vec<RawItem> {
    let a_tag_selector = sel("a");

    ctx.document
        .select(&sel("h2, h3"))
        .take(MAX_HEADINGS)
        .filter_map(|heading| {
            let title = element_text(heading);
            if title.is_empty() {
                return None;
            }

            // Short paragraphs are kept whole instead of always getting a trailing "..."
            let snippet = next_paragraph(ctx.document, heading)
                .map(|p| truncate_snippet(&element_text(p)))
                .unwrap_or(NO_DESCRIPTION.to_string());

            let link = heading
                .parent()
                .and_then(ElementRef::wrap)
                .and_then(|parent| first_href(parent, &a_tag_selector));

            Some(ctx.item(title, snippet, link))
        })
        .collect()
}

fn next_paragraph<'a>(document: &'a Html, element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .skip_while(|node| node.id() != element.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "p")
}

fn from_links(ctx: &ExtractionContext) -> Vec<RawItem> {
    ctx.document
        .select(&sel("a"))
        .take(MAX_LINKS)
        .filter_map(|a_tag| {
            let title = element_text(a_tag);
            if title.chars().count() <= MIN_LINK_TEXT_LEN {
                return None;
            }

            let snippet = clip_snippet(&title);
            let link = a_tag.value().attr("href").map(|href| href.to_string());
            Some(ctx.item(title, snippet, link))
        })
        .collect()
}

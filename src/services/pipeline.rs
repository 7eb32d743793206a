use std::sync::Arc;

use scraper::Html;

use crate::{
    configuration::ScraperSettings,
    domain::{
        categorized_result::{CategorizedResult, SummaryKind},
        page_summary::PageSummary,
        raw_item::RawItem,
        site_profile::{find_profile, SiteProfile},
    },
};

use super::{
    content_extractor::{extract_items, ExtractionContext},
    detect_login_required,
    html::{element_text, sel},
    metadata_extractor::extract_website_summary,
    search_web,
    site_scraper::extract_listings,
    Fetcher, Renderer,
};

const UNKNOWN_PAGE_TITLE: &str = "Unknown";

pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    match url.starts_with("http://") || url.starts_with("https://") {
        true => url.to_string(),
        false => format!("https://{}", url),
    }
}

pub struct ContentPipeline {
    fetcher: Arc<dyn Fetcher>,
    renderer: Arc<dyn Renderer>,
    settings: ScraperSettings,
}

impl ContentPipeline {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        renderer: Arc<dyn Renderer>,
        settings: ScraperSettings,
    ) -> Self {
        ContentPipeline {
            fetcher,
            renderer,
            settings,
        }
    }

    pub async fn scrape_url(&self, url: &str) -> CategorizedResult {
        let url = normalize_url(url);

        let (items, website_summary) = match find_profile(&self.settings.sites, &url) {
            Some(profile) => self.scrape_rendered_site(&url, profile).await,
            None => self.extract_text_from_url(&url).await,
        };

        let result = CategorizedResult::from_items(SummaryKind::Website, website_summary, items);
        log::info!("Categorized {} items from {}", result.total_items(), url);

        result
    }

    pub async fn search(&self, query: &str) -> CategorizedResult {
        search_web(
            self.fetcher.as_ref(),
            &self.settings.search_url_template,
            query,
        )
        .await
    }

    async fn extract_text_from_url(&self, url: &str) -> (Vec<RawItem>, Option<PageSummary>) {
        let html_content = match self.fetcher.fetch(url).await {
            Ok(html_content) => {
                log::info!("Successfully fetched {}", url);
                html_content
            }
            Err(e) => {
                if e.status().is_some_and(|status| detect_login_required(url, "", status)) {
                    log::warn!("{} requires login", url);
                }
                log::error!("Error fetching {}: {}", url, e);
                return (vec![], None);
            }
        };

        if detect_login_required(url, &html_content, 200) {
            log::warn!("{} looks like it requires login, extracting anyway", url);
        }

        let document = Html::parse_document(&html_content);

        let website_summary = extract_website_summary(&document, url);
        log::info!(
            "Website summary: {} - {}",
            website_summary.title,
            website_summary.site_type
        );

        let page_title = document
            .select(&sel("title"))
            .next()
            .map(element_text)
            .unwrap_or(UNKNOWN_PAGE_TITLE.to_string());

        let ctx = ExtractionContext {
            document: &document,
            page_title: &page_title,
            origin: url,
        };
        let (_, items) = extract_items(&ctx);
        log::info!("Extracted {} items from {}", items.len(), url);

        (items, Some(website_summary))
    }

    async fn scrape_rendered_site(
        &self,
        url: &str,
        profile: &SiteProfile,
    ) -> (Vec<RawItem>, Option<PageSummary>) {
        log::info!("Scraping {} with a browser session", profile.name);

        let page_source = match self.renderer.render(url, &profile.ready_marker).await {
            Ok(page_source) => page_source,
            Err(e) => {
                log::error!("Error scraping {}: {}", profile.name, e);
                return (vec![], Some(PageSummary::unavailable(url)));
            }
        };

        let document = Html::parse_document(&page_source);
        let website_summary = extract_website_summary(&document, url);

        match extract_listings(&document, profile) {
            Ok(items) => {
                log::info!(
                    "Successfully scraped {} listings from {}",
                    items.len(),
                    profile.name
                );
                (items, Some(website_summary))
            }
            Err(e) => {
                log::error!("Error reading listings from {}: {}", profile.name, e);
                (vec![], Some(website_summary))
            }
        }
    }
}

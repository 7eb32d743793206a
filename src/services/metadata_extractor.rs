use scraper::Html;
use url::Url;

use crate::domain::{
    page_summary::{classify_site, PageSummary, NO_DESCRIPTION},
    raw_item::truncate_with_ellipsis,
};

use super::html::{element_text, meta_content, sel};

const DESCRIPTION_PARAGRAPHS: usize = 5;
const MIN_PARAGRAPH_LEN: usize = 50;
const MAX_PARAGRAPH_LEN: usize = 500;
const DESCRIPTION_LEN: usize = 300;

pub fn extract_website_summary(document: &Html, url: &str) -> PageSummary {
    let parsed_url = Url::parse(url).ok();
    let domain = parsed_url.as_ref().map(authority).unwrap_or_default();

    let mut summary = PageSummary::new(url, &domain);

    if let Some(title_tag) = document.select(&sel("title")).next() {
        summary.title = element_text(title_tag);
    }

    summary.description = meta_content(document, "property", "og:description")
        .or_else(|| meta_content(document, "name", "description"))
        .or_else(|| meta_content(document, "name", "twitter:description"))
        .or_else(|| description_from_paragraphs(document))
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let html_lang = document
        .select(&sel("html"))
        .next()
        .and_then(|html_tag| html_tag.value().attr("lang"))
        .filter(|lang| !lang.is_empty())
        .map(|lang| lang.to_string());
    if let Some(language) =
        html_lang.or_else(|| meta_content(document, "http-equiv", "content-language"))
    {
        summary.language = language;
    }

    if let Some(author) = meta_content(document, "name", "author")
        .or_else(|| meta_content(document, "property", "article:author"))
    {
        summary.author = author;
    }
    if let Some(publisher) = meta_content(document, "property", "article:publisher") {
        summary.publisher = publisher;
    }

    summary.favicon = find_favicon_href(document)
        .and_then(|href| normalize_favicon(&href, parsed_url.as_ref()));

    summary.image = meta_content(document, "property", "og:image")
        .or_else(|| meta_content(document, "name", "twitter:image"));
    summary.theme_color = meta_content(document, "name", "theme-color");

    summary.site_type = classify_site(url, &summary.title, &summary.description).to_string();

    summary.site_name = meta_content(document, "property", "og:site_name").unwrap_or(domain);
    summary.keywords = meta_content(document, "name", "keywords");
    summary.copyright = meta_content(document, "name", "copyright");
    summary.app_name = meta_content(document, "name", "application-name");

    summary
}

fn description_from_paragraphs(document: &Html) -> Option<String> {
    document
        .select(&sel("p"))
        .take(DESCRIPTION_PARAGRAPHS)
        .map(element_text)
        .find(|text| (MIN_PARAGRAPH_LEN..MAX_PARAGRAPH_LEN).contains(&text.chars().count()))
        .map(|text| truncate_with_ellipsis(&text, DESCRIPTION_LEN))
}

fn find_favicon_href(document: &Html) -> Option<String> {
    document
        .select(&sel(r#"link[rel~="icon"]"#))
        .next()
        .or_else(|| {
            document
                .select(&sel(r#"link[rel="shortcut icon"]"#))
                .next()
        })
        .and_then(|link| link.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(|href| href.to_string())
}

/// `//host/x` and `/x` become absolute, absolute links pass through, anything
/// else is dropped.
pub fn normalize_favicon(href: &str, page_url: Option<&Url>) -> Option<String> {
    if href.starts_with("//") {
        Some(format!("https:{}", href))
    } else if href.starts_with('/') {
        page_url.map(|u| format!("{}://{}{}", u.scheme(), authority(u), href))
    } else if href.starts_with("http") {
        Some(href.to_string())
    } else {
        None
    }
}

fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use scraper::Html;
    use url::Url;

    use super::{extract_website_summary, normalize_favicon};

    #[test]
    fn favicon_normalization() {
        let page = Url::parse("https://site.com/page").unwrap();

        assert_eq!(
            normalize_favicon("//cdn.example.com/f.ico", Some(&page)),
            Some("https://cdn.example.com/f.ico".to_string())
        );
        assert_eq!(
            normalize_favicon("/f.ico", Some(&page)),
            Some("https://site.com/f.ico".to_string())
        );
        assert_eq!(
            normalize_favicon("https://x.com/f.ico", Some(&page)),
            Some("https://x.com/f.ico".to_string())
        );
        assert_eq!(normalize_favicon("f.ico", Some(&page)), None);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let document = Html::parse_document("");
        let summary = extract_website_summary(&document, "https://example.org/path");

        assert_eq!(summary.title, "Unknown Website");
        assert_eq!(summary.description, "No description available");
        assert_eq!(summary.domain, "example.org");
        assert_eq!(summary.site_name, "example.org");
        assert_eq!(summary.language, "Not specified");
        assert_eq!(summary.author, "Not specified");
        assert_eq!(summary.publisher, "Not specified");
        assert_eq!(summary.site_type, "General Website");
        assert!(summary.favicon.is_none());
        assert!(summary.image.is_none());
        assert!(summary.keywords.is_none());

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("favicon").is_none());
        assert_eq!(json["type"], "General Website");
    }

    #[test]
    fn reads_meta_tags_in_priority_order() {
        let document = Html::parse_document(
            r##"<html lang="en-GB"><head>
                <title> Example Store </title>
                <meta name="description" content="Plain description">
                <meta property="og:description" content="Buy things in our shop">
                <meta name="twitter:description" content="Twitter description">
                <meta name="author" content="Jane">
                <meta property="article:author" content="Someone else">
                <meta property="article:publisher" content="Example Media">
                <meta property="og:site_name" content="Example">
                <meta name="twitter:image" content="https://example.org/t.png">
                <meta name="theme-color" content="#ffffff">
                <meta name="keywords" content="a, b">
                <meta name="copyright" content="2024 Example">
                <meta name="application-name" content="Example App">
                <link rel="shortcut icon" href="/favicon.ico">
            </head><body></body></html>"##,
        );
        let summary = extract_website_summary(&document, "https://example.org:8443/store");

        assert_eq!(summary.title, "Example Store");
        assert_eq!(summary.description, "Buy things in our shop");
        assert_eq!(summary.language, "en-GB");
        assert_eq!(summary.author, "Jane");
        assert_eq!(summary.publisher, "Example Media");
        assert_eq!(summary.site_name, "Example");
        assert_eq!(summary.domain, "example.org:8443");
        assert_eq!(
            summary.favicon.as_deref(),
            Some("https://example.org:8443/favicon.ico")
        );
        assert_eq!(summary.image.as_deref(), Some("https://example.org/t.png"));
        assert_eq!(summary.theme_color.as_deref(), Some("#ffffff"));
        assert_eq!(summary.keywords.as_deref(), Some("a, b"));
        assert_eq!(summary.copyright.as_deref(), Some("2024 Example"));
        assert_eq!(summary.app_name.as_deref(), Some("Example App"));
        assert_eq!(summary.site_type, "E-commerce");
    }

    #[test]
    fn description_falls_back_to_paragraphs() {
        let long = "x".repeat(450);
        let document = Html::parse_document(&format!(
            "<body><p>Too short.</p><p>{}</p><p>{}</p></body>",
            long,
            "y".repeat(60)
        ));
        let summary = extract_website_summary(&document, "https://example.org");

        assert_eq!(summary.description, format!("{}...", "x".repeat(300)));
    }

    #[test]
    fn paragraph_length_window_is_half_open() {
        let document = Html::parse_document(&format!(
            "<body><p>{}</p><p>{}</p><p>{}</p></body>",
            "a".repeat(49),
            "b".repeat(500),
            "c".repeat(50)
        ));
        let summary = extract_website_summary(&document, "https://example.org");

        assert_eq!(summary.description, "c".repeat(50));
    }

    #[test]
    fn only_first_five_paragraphs_are_considered() {
        let short: String = (0..5).map(|_| "<p>tiny</p>").collect();
        let document = Html::parse_document(&format!(
            "<body>{}<p>{}</p></body>",
            short,
            "d".repeat(80)
        ));
        let summary = extract_website_summary(&document, "https://example.org");

        assert_eq!(summary.description, "No description available");
    }

    #[test]
    fn language_from_content_language_meta() {
        let document = Html::parse_document(
            r#"<head><meta http-equiv="content-language" content="de"></head>"#,
        );
        let summary = extract_website_summary(&document, "https://example.org");

        assert_eq!(summary.language, "de");
    }
}

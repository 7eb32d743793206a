use serde::Serialize;

pub const PLACEHOLDER_LINK: &str = "#";
const SNIPPET_LEN: usize = 100;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawItem {
    pub title: String,
    #[serde(rename = "company")]
    pub source_label: String,
    pub snippet: String,
    pub link: String,
}

pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

pub fn truncate_snippet(text: &str) -> String {
    truncate_with_ellipsis(text, SNIPPET_LEN)
}

pub fn clip_snippet(text: &str) -> String {
    text.chars().take(SNIPPET_LEN).collect()
}

/// Root-relative links are appended to the origin string as-is, they are not
/// joined against the origin's base.
pub fn resolve_link(link: &str, origin: &str) -> String {
    if link.starts_with("http") {
        link.to_string()
    } else if link.starts_with('/') {
        format!("{}{}", origin, link)
    } else {
        origin.to_string()
    }
}

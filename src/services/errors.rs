use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to render {url}: {reason}")]
    Render { url: String, reason: String },
    #[error("search for '{query}' failed: {reason}")]
    Search { query: String, reason: String },
    #[error("invalid selector `{0}`")]
    Selector(String),
}

impl ScrapeError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ScrapeError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

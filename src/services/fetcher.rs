use async_trait::async_trait;
use reqwest::Client;

use crate::configuration::ScraperSettings;

use super::ScrapeError;

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &ScraperSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.fetch_timeout())
            .build()?;

        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        res.text().await.map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Fetcher, HttpFetcher};
    use crate::{configuration::ScraperSettings, services::ScrapeError};

    #[tokio::test]
    async fn refused_connection_is_a_fetch_error() {
        let fetcher = HttpFetcher::new(&ScraperSettings::default()).unwrap();

        let result = fetcher.fetch("http://127.0.0.1:1/").await;

        assert!(matches!(result, Err(ScrapeError::Fetch { .. })));
    }
}

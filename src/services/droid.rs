use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::prelude::*;

use crate::configuration::ScraperSettings;

use super::ScrapeError;

#[async_trait]
pub trait Renderer: Send + Sync {
    /// Loads `url` and waits until an element with class `ready_marker` exists.
    async fn render(&self, url: &str, ready_marker: &str) -> Result<String, ScrapeError>;
}

pub struct Droid {
    webdriver_url: String,
    wait_timeout: Duration,
    poll_interval: Duration,
    settle_delay: Duration,
}

impl Droid {
    pub fn new(settings: &ScraperSettings) -> Self {
        Droid {
            webdriver_url: settings.webdriver_url.clone(),
            wait_timeout: settings.render_timeout(),
            poll_interval: settings.render_poll_interval(),
            settle_delay: settings.settle_delay(),
        }
    }

    async fn start_session(&self) -> WebDriverResult<WebDriver> {
        let caps = DesiredCapabilities::chrome();
        let driver = WebDriver::new(self.webdriver_url.as_str(), caps).await?;
        driver.maximize_window().await?;

        Ok(driver)
    }

    async fn load(
        &self,
        driver: &WebDriver,
        url: &str,
        ready_marker: &str,
    ) -> WebDriverResult<String> {
        driver.goto(url).await?;

        driver
            .query(By::ClassName(ready_marker))
            .wait(self.wait_timeout, self.poll_interval)
            .first()
            .await?;

        log::info!("Page loaded, waiting for listings to settle");
        tokio::time::sleep(self.settle_delay).await;

        driver.source().await
    }
}

#[async_trait]
impl Renderer for Droid {
    async fn render(&self, url: &str, ready_marker: &str) -> Result<String, ScrapeError> {
        let driver = self
            .start_session()
            .await
            .map_err(|e| ScrapeError::Render {
                url: url.to_string(),
                reason: format!("could not start browser session: {}", e),
            })?;

        log::info!("Opening {} in browser session", url);
        let page_source = self.load(&driver, url, ready_marker).await;

        // The session is released whether or not loading succeeded
        if let Err(e) = driver.quit().await {
            log::error!("Failed to quit browser session: {:?}", e);
        }

        page_source.map_err(|e| ScrapeError::Render {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

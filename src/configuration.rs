use std::time::Duration;

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::site_profile::{default_site_profiles, SiteProfile};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub scraper: ScraperSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone)]
pub struct ScraperSettings {
    pub user_agent: String,
    pub fetch_timeout_secs: u64,
    pub webdriver_url: String,
    pub render_timeout_secs: u64,
    pub render_poll_millis: u64,
    pub settle_delay_millis: u64,
    /// `{query}` is replaced with the `+`-joined search terms.
    pub search_url_template: String,
    #[serde(default = "default_site_profiles")]
    pub sites: Vec<SiteProfile>,
}

impl ScraperSettings {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    pub fn render_poll_interval(&self) -> Duration {
        Duration::from_millis(self.render_poll_millis)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_millis)
    }
}

impl Default for ScraperSettings {
    fn default() -> Self {
        ScraperSettings {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
            fetch_timeout_secs: 10,
            webdriver_url: "http://localhost:4444".to_string(),
            render_timeout_secs: 15,
            render_poll_millis: 500,
            settle_delay_millis: 2000,
            search_url_template: "https://html.duckduckgo.com/html/?q={query}".to_string(),
            sites: default_site_profiles(),
        }
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::{Environment, ScraperSettings};

    #[test]
    fn default_timeouts() {
        let settings = ScraperSettings::default();

        assert_eq!(settings.fetch_timeout().as_secs(), 10);
        assert_eq!(settings.render_timeout().as_secs(), 15);
        assert_eq!(settings.sites.len(), 1);
    }

    #[test]
    fn environment_parsing() {
        assert!(Environment::try_from("LOCAL".to_string()).is_ok());
        assert!(Environment::try_from("production".to_string()).is_ok());
        assert!(Environment::try_from("staging".to_string()).is_err());
    }
}

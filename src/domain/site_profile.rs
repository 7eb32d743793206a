use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteProfile {
    pub name: String,
    pub host: String,
    pub ready_marker: String,
    pub listing_selectors: Vec<String>,
    pub title_selector: String,
    pub company_selector: String,
    pub default_company: String,
    pub experience_selector: String,
    pub default_experience: String,
    pub salary_selector: String,
    pub default_salary: String,
    pub link_selector: String,
    pub link_base: String,
    pub max_items: usize,
}

impl SiteProfile {
    pub fn naukri() -> Self {
        SiteProfile {
            name: "Naukri.com".to_string(),
            host: "naukri.com".to_string(),
            ready_marker: "jobTuple".to_string(),
            listing_selectors: vec!["div.jobTuple".to_string(), "article.jobCard".to_string()],
            title_selector: "h2.jobTitle, a.jobTitle, span.jobTitle".to_string(),
            company_selector: "span.companyName, a.companyName".to_string(),
            default_company: "Naukri.com".to_string(),
            experience_selector: "span.experience, span.exp".to_string(),
            default_experience: "N/A".to_string(),
            salary_selector: "span.salary, span.salaryText".to_string(),
            default_salary: "Not disclosed".to_string(),
            link_selector: "a.jobTitle, h2.jobTitle a".to_string(),
            link_base: "https://www.naukri.com".to_string(),
            max_items: 20,
        }
    }

    pub fn matches(&self, url: &str) -> bool {
        let host = self.host.to_lowercase();
        match Url::parse(url) {
            Ok(parsed_url) => match parsed_url.host_str() {
                Some(any_host) => {
                    let any_host = any_host.to_lowercase();
                    any_host == host || any_host.ends_with(&format!(".{}", host))
                }
                None => false,
            },
            Err(_) => false,
        }
    }

    /// Listing links are made absolute against `link_base`, including bare
    /// relative paths and fragments.
    pub fn absolute_link(&self, link: &str) -> String {
        if link.starts_with("http") {
            link.to_string()
        } else if link.starts_with('/') {
            format!("{}{}", self.link_base, link)
        } else {
            format!("{}/{}", self.link_base, link)
        }
    }
}

pub fn default_site_profiles() -> Vec<SiteProfile> {
    vec![SiteProfile::naukri()]
}

pub fn find_profile<'a>(profiles: &'a [SiteProfile], url: &str) -> Option<&'a SiteProfile> {
    profiles.iter().find(|profile| profile.matches(url))
}

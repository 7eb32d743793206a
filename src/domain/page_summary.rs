use serde::Serialize;

pub const UNKNOWN_TITLE: &str = "Unknown Website";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const GENERAL_WEBSITE: &str = "General Website";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSummary {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub site_type: String,
    pub domain: String,
    pub language: String,
    pub author: String,
    pub publisher: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    pub site_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
}

impl PageSummary {
    pub fn new(url: &str, domain: &str) -> Self {
        PageSummary {
            title: UNKNOWN_TITLE.to_string(),
            description: NO_DESCRIPTION.to_string(),
            url: url.to_string(),
            site_type: GENERAL_WEBSITE.to_string(),
            domain: domain.to_string(),
            language: NOT_SPECIFIED.to_string(),
            author: NOT_SPECIFIED.to_string(),
            publisher: NOT_SPECIFIED.to_string(),
            favicon: None,
            image: None,
            theme_color: None,
            site_name: domain.to_string(),
            keywords: None,
            copyright: None,
            app_name: None,
        }
    }

    pub fn unavailable(url: &str) -> Self {
        PageSummary {
            title: "Unable to extract title".to_string(),
            description: "Unable to extract description due to scraping error".to_string(),
            site_type: "Unknown".to_string(),
            ..PageSummary::new(url, "")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Url,
    Title,
    Description,
}

pub struct SiteTypeRule {
    pub site_type: &'static str,
    pub needles: &'static [(Field, &'static str)],
}

/// Ordered, first match wins. Needles are matched against lower-cased fields.
pub const SITE_TYPE_RULES: &[SiteTypeRule] = &[
    SiteTypeRule {
        site_type: "Job Portal",
        needles: &[
            (Field::Url, "naukri.com"),
            (Field::Url, "indeed.com"),
            (Field::Url, "linkedin.com/jobs"),
        ],
    },
    SiteTypeRule {
        site_type: "Social Media Platform",
        needles: &[
            (Field::Url, "instagram.com"),
            (Field::Url, "facebook.com"),
            (Field::Url, "twitter.com"),
            (Field::Url, "x.com"),
        ],
    },
    SiteTypeRule {
        site_type: "News Website",
        needles: &[
            (Field::Url, "news"),
            (Field::Title, "news"),
            (Field::Url, "bbc.com"),
            (Field::Url, "cnn.com"),
        ],
    },
    SiteTypeRule {
        site_type: "Blog/Article Platform",
        needles: &[
            (Field::Url, "blog"),
            (Field::Url, "medium.com"),
            (Field::Url, "wordpress.com"),
        ],
    },
    SiteTypeRule {
        site_type: "Code Repository",
        needles: &[(Field::Url, "github.com"), (Field::Url, "gitlab.com")],
    },
    SiteTypeRule {
        site_type: "Q&A Platform",
        needles: &[
            (Field::Url, "stackoverflow.com"),
            (Field::Url, "stackexchange.com"),
        ],
    },
    SiteTypeRule {
        site_type: "Video Platform",
        needles: &[
            (Field::Url, "youtube.com"),
            (Field::Url, "vimeo.com"),
            (Field::Description, "video"),
        ],
    },
    SiteTypeRule {
        site_type: "E-commerce",
        needles: &[
            (Field::Description, "shop"),
            (Field::Description, "buy"),
            (Field::Description, "product"),
            (Field::Description, "store"),
            (Field::Description, "cart"),
            (Field::Description, "ecommerce"),
        ],
    },
    SiteTypeRule {
        site_type: "Educational Platform",
        needles: &[
            (Field::Description, "learn"),
            (Field::Description, "course"),
            (Field::Description, "tutorial"),
            (Field::Description, "education"),
            (Field::Description, "university"),
            (Field::Description, "school"),
        ],
    },
    SiteTypeRule {
        site_type: "Technology Website",
        needles: &[
            (Field::Description, "tech"),
            (Field::Description, "technology"),
            (Field::Description, "developer"),
            (Field::Description, "programming"),
            (Field::Description, "code"),
        ],
    },
    SiteTypeRule {
        site_type: "Encyclopedia",
        needles: &[(Field::Url, "wikipedia.org")],
    },
];

pub fn classify_site(url: &str, title: &str, description: &str) -> &'static str {
    let url = url.to_lowercase();
    let title = title.to_lowercase();
    let description = description.to_lowercase();

    SITE_TYPE_RULES
        .iter()
        .find(|rule| {
            rule.needles.iter().any(|(field, needle)| {
                let haystack = match field {
                    Field::Url => &url,
                    Field::Title => &title,
                    Field::Description => &description,
                };
                haystack.contains(needle)
            })
        })
        .map(|rule| rule.site_type)
        .unwrap_or(GENERAL_WEBSITE)
}

use scraper::{ElementRef, Html, Selector};

use crate::domain::{
    raw_item::{RawItem, PLACEHOLDER_LINK},
    site_profile::SiteProfile,
};

use super::{
    html::{first_href, first_text, parse_selector},
    ScrapeError,
};

struct ListingSelectors {
    title: Selector,
    company: Selector,
    experience: Selector,
    salary: Selector,
    link: Selector,
}

impl ListingSelectors {
    fn from_profile(profile: &SiteProfile) -> Result<Self, ScrapeError> {
        Ok(ListingSelectors {
            title: parse_selector(&profile.title_selector)?,
            company: parse_selector(&profile.company_selector)?,
            experience: parse_selector(&profile.experience_selector)?,
            salary: parse_selector(&profile.salary_selector)?,
            link: parse_selector(&profile.link_selector)?,
        })
    }
}

pub fn extract_listings(
    document: &Html,
    profile: &SiteProfile,
) -> Result<Vec<RawItem>, ScrapeError> {
    let selectors = ListingSelectors::from_profile(profile)?;

    let mut listings: Vec<ElementRef> = vec![];
    for css in profile.listing_selectors.iter() {
        listings = document.select(&parse_selector(css)?).collect();
        if !listings.is_empty() {
            break;
        }
    }
    log::info!("Found {} listings on {}", listings.len(), profile.name);

    let items = listings
        .into_iter()
        .take(profile.max_items)
        .filter_map(|listing| listing_item(listing, profile, &selectors))
        .collect();

    Ok(items)
}

fn listing_item(
    listing: ElementRef,
    profile: &SiteProfile,
    selectors: &ListingSelectors,
) -> Option<RawItem> {
    let title = first_text(listing, &selectors.title).filter(|t| !t.is_empty())?;

    let company =
        first_text(listing, &selectors.company).unwrap_or(profile.default_company.clone());
    let experience =
        first_text(listing, &selectors.experience).unwrap_or(profile.default_experience.clone());
    let salary = first_text(listing, &selectors.salary).unwrap_or(profile.default_salary.clone());
    let link = first_href(listing, &selectors.link).unwrap_or(PLACEHOLDER_LINK.to_string());

    Some(RawItem {
        title,
        source_label: company,
        snippet: format!("Experience: {} | Salary: {}", experience, salary),
        link: profile.absolute_link(&link),
    })
}

pub mod content_extractor;
pub mod droid;
pub mod errors;
pub mod fetcher;
pub mod html;
pub mod login_detector;
pub mod metadata_extractor;
pub mod pipeline;
pub mod site_scraper;
pub mod web_search;

pub use droid::*;
pub use errors::*;
pub use fetcher::*;
pub use login_detector::*;
pub use pipeline::*;
pub use web_search::*;

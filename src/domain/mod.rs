pub mod categorized_result;
pub mod category;
pub mod page_summary;
pub mod raw_item;
pub mod site_profile;

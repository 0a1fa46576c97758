//! Shared fixtures for integration tests

#![allow(dead_code)]

use editlock_core::{ContextData, SiteInfo, User};

pub const EDITOR: &str = "sitecore\\editor";
pub const ADMIN: &str = "sitecore\\admin";
pub const SITE: &str = "website";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn workflow_site() -> SiteInfo {
    SiteInfo::new(SITE, true)
}

pub fn plain_site() -> SiteInfo {
    SiteInfo::new(SITE, false)
}

pub fn editor_context(site: Option<SiteInfo>) -> ContextData {
    ContextData::new(site, User::new(EDITOR))
}

pub fn admin_context(site: Option<SiteInfo>) -> ContextData {
    ContextData::new(site, User::administrator(ADMIN))
}

pub fn display_date_key() -> String {
    workflow_site().cookie_key("sc_date")
}

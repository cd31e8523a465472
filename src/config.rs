//! Application-level configuration constants.

use f1_stats::ApiClient;

// UI Behavior
pub use f1_stats::defaults::{MAX_PAGE_BUTTONS, SEARCH_DEBOUNCE_MS, YEAR_DEBOUNCE_MS};

// Backend location
pub const DEFAULT_API_BASE: &str = "";
pub const API_BASE_META: &str = "f1-api-base";

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Info;

/// Client for the backend; a `<meta name="f1-api-base">` tag overrides the
/// same-origin default.
pub fn api_client() -> ApiClient {
    let from_meta = gloo_utils::document()
        .query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .filter(|base| !base.trim().is_empty());
    ApiClient::new(from_meta.unwrap_or_else(|| DEFAULT_API_BASE.to_string()))
}

/// Qualifying formats offered by the race filters and the add-race form.
pub const QUALIFYING_FORMATS: [&str; 6] = [
    "KNOCKOUT",
    "ONE_SESSION",
    "TWO_SESSION",
    "FOUR_LAPS",
    "AGGREGATE",
    "SPRINT_SHOOTOUT",
];

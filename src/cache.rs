//! Thread-local cache of race results.
//!
//! Opening the same race twice on the races page reuses the rows fetched the
//! first time. The cache lives as long as the page does; navigating away
//! reloads the bundle and starts empty.

use f1_stats::models::RaceResult;
use std::cell::RefCell;
use std::collections::HashMap;

/// Cache key: race id as it appears in the URL.
pub type CacheKey = String;

thread_local! {
    pub static RACE_RESULTS: RefCell<HashMap<CacheKey, Vec<RaceResult>>> =
        RefCell::new(HashMap::new());
}

pub fn cached_results(race_id: &str) -> Option<Vec<RaceResult>> {
    RACE_RESULTS.with(|c| c.borrow().get(race_id).cloned())
}

pub fn store_results(race_id: &str, rows: Vec<RaceResult>) {
    RACE_RESULTS.with(|c| {
        c.borrow_mut().insert(race_id.to_string(), rows);
    });
}

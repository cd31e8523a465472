//! Browser front end for the F1 statistics service: records, REST client and
//! the page state that does not depend on the DOM.

pub mod api;
pub mod compare;
pub mod draft;
pub mod filters;
pub mod format;
pub mod models;
pub mod pagination;
pub mod routes;

pub use api::{ApiClient, ApiError, Query};
pub use compare::{CompareState, Metric, Side};
pub use draft::{FormError, SavedData};
pub use filters::FilterError;
pub use pagination::PageNav;
pub use routes::Page;

/// Defaults shared by the pages.
pub mod defaults {
    /// Typeahead keystrokes are debounced this long before querying.
    pub const SEARCH_DEBOUNCE_MS: u32 = 250;
    /// Year inputs on the compare page wait this long before validating.
    pub const YEAR_DEBOUNCE_MS: u32 = 300;
    /// Numbered buttons in the pagination bar.
    pub const MAX_PAGE_BUTTONS: u32 = 5;
}

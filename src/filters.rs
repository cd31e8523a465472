//! Filter forms of the list pages.
//!
//! Fields hold the raw text of the form inputs; `validate` checks them before
//! a fetch and `to_query` turns them into the query string the list endpoint
//! expects. Blank fields are left out of the query.

use crate::api::Query;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").unwrap());
static YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    InvalidDate { field: &'static str, value: String },
    DateRange,
    InvalidYear { field: &'static str, value: String },
    YearRange,
    InvalidNumber { field: &'static str, value: String },
    LapsRange,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidDate { field, value } => {
                write!(f, "{} must be a date in YYYY-MM-DD format (got \"{}\")", field, value)
            }
            FilterError::DateRange => write!(f, "Date from must not be after date to"),
            FilterError::InvalidYear { field, value } => {
                write!(f, "{} must be a four-digit year (got \"{}\")", field, value)
            }
            FilterError::YearRange => write!(f, "Year from must not be after year to"),
            FilterError::InvalidNumber { field, value } => {
                write!(f, "{} must be a positive whole number (got \"{}\")", field, value)
            }
            FilterError::LapsRange => write!(f, "Minimum laps must not exceed maximum laps"),
        }
    }
}

impl std::error::Error for FilterError {}

/// `YYYY-MM-DD` with a plausible month and day.
pub fn is_iso_date(value: &str) -> bool {
    DATE_REGEX.is_match(value.trim())
}

/// Exactly four digits.
pub fn is_year(value: &str) -> bool {
    YEAR_REGEX.is_match(value.trim())
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn check_date(value: &str, field: &'static str) -> Result<Option<String>, FilterError> {
    match present(value) {
        None => Ok(None),
        Some(v) if DATE_REGEX.is_match(v) => Ok(Some(v.to_string())),
        Some(v) => Err(FilterError::InvalidDate {
            field,
            value: v.to_string(),
        }),
    }
}

fn check_year(value: &str, field: &'static str) -> Result<Option<u16>, FilterError> {
    match present(value) {
        None => Ok(None),
        Some(v) if YEAR_REGEX.is_match(v) => v.parse().map(Some).map_err(|_| {
            FilterError::InvalidYear {
                field,
                value: v.to_string(),
            }
        }),
        Some(v) => Err(FilterError::InvalidYear {
            field,
            value: v.to_string(),
        }),
    }
}

fn check_count(value: &str, field: &'static str, min: u32) -> Result<Option<u32>, FilterError> {
    match present(value) {
        None => Ok(None),
        Some(v) => match v.parse::<u32>() {
            Ok(n) if n >= min => Ok(Some(n)),
            _ => Err(FilterError::InvalidNumber {
                field,
                value: v.to_string(),
            }),
        },
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverFilters {
    pub name: String,
    pub nationality: String,
}

impl DriverFilters {
    pub fn is_empty(&self) -> bool {
        present(&self.name).is_none() && present(&self.nationality).is_none()
    }

    pub fn to_query(&self, page: u32) -> Query {
        Query::page(page)
            .with("name", self.name.as_str())
            .with("nationality", self.nationality.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorFilters {
    pub name: String,
    pub nationality: String,
    pub champs_min: String,
}

impl ConstructorFilters {
    pub fn validate(&self) -> Result<(), FilterError> {
        check_count(&self.champs_min, "Minimum championships", 0)?;
        Ok(())
    }

    pub fn to_query(&self, page: u32) -> Query {
        Query::page(page)
            .with("name", self.name.as_str())
            .with("nationality", self.nationality.as_str())
            .with("min_championships", self.champs_min.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RaceFilters {
    pub year: String,
    pub round: String,
    pub date_from: String,
    pub date_to: String,
    pub official_name: String,
    pub qualifying_format: String,
    pub laps_min: String,
    pub laps_max: String,
    pub is_real_only: bool,
}

impl RaceFilters {
    pub fn validate(&self) -> Result<(), FilterError> {
        check_year(&self.year, "Year")?;
        check_count(&self.round, "Round", 1)?;

        // ISO dates compare correctly as strings
        let from = check_date(&self.date_from, "Date from")?;
        let to = check_date(&self.date_to, "Date to")?;
        if let (Some(from), Some(to)) = (&from, &to) {
            if from > to {
                return Err(FilterError::DateRange);
            }
        }

        let laps_min = check_count(&self.laps_min, "Minimum laps", 0)?;
        let laps_max = check_count(&self.laps_max, "Maximum laps", 0)?;
        if let (Some(min), Some(max)) = (laps_min, laps_max) {
            if min > max {
                return Err(FilterError::LapsRange);
            }
        }
        Ok(())
    }

    pub fn to_query(&self, page: u32) -> Query {
        let mut query = Query::page(page)
            .with("year", self.year.as_str())
            .with("round", self.round.as_str())
            .with("official_name", self.official_name.as_str())
            .with("qualifying_format", self.qualifying_format.as_str())
            .with("date_from", self.date_from.as_str())
            .with("date_to", self.date_to.as_str())
            .with("laps_min", self.laps_min.as_str())
            .with("laps_max", self.laps_max.as_str());
        if self.is_real_only {
            query.push("is_real", "true");
        }
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsFilters {
    pub year_from: String,
    pub year_to: String,
    pub qualifying_format: String,
}

impl StatsFilters {
    pub fn validate(&self) -> Result<(), FilterError> {
        let from = check_year(&self.year_from, "Year from")?;
        let to = check_year(&self.year_to, "Year to")?;
        match (from, to) {
            (Some(from), Some(to)) if from > to => Err(FilterError::YearRange),
            _ => Ok(()),
        }
    }

    pub fn to_query(&self, page: u32) -> Query {
        Query::page(page)
            .with("year_from", self.year_from.as_str())
            .with("year_to", self.year_to.as_str())
            .with("qualifying_format", self.qualifying_format.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn races() -> RaceFilters {
        RaceFilters::default()
    }

    #[test]
    fn blank_filters_only_send_the_page() {
        assert_eq!(DriverFilters::default().to_query(1).encode(), "page=1");
        assert_eq!(races().to_query(3).encode(), "page=3");
        assert!(DriverFilters::default().is_empty());
    }

    #[test]
    fn blank_typeahead_query_asks_for_the_first_page() {
        let constructors = ConstructorFilters {
            name: String::new(),
            ..Default::default()
        };
        let races = RaceFilters {
            official_name: "  ".into(),
            ..Default::default()
        };
        assert_eq!(constructors.to_query(1).encode(), "page=1");
        assert_eq!(races.to_query(1).encode(), "page=1");
        assert_eq!(races.to_query(1).get("official_name"), None);
    }

    #[test]
    fn driver_query_trims_and_encodes() {
        let filters = DriverFilters {
            name: "  Max Verstappen ".into(),
            nationality: String::new(),
        };
        assert_eq!(filters.to_query(2).encode(), "page=2&name=Max%20Verstappen");
    }

    #[test]
    fn constructor_championships_must_be_a_number() {
        let mut filters = ConstructorFilters::default();
        filters.champs_min = "two".into();
        assert!(matches!(
            filters.validate(),
            Err(FilterError::InvalidNumber { .. })
        ));
        filters.champs_min = "2".into();
        assert!(filters.validate().is_ok());
        assert_eq!(filters.to_query(1).get("min_championships"), Some("2"));
    }

    #[test]
    fn race_dates_are_checked() {
        let mut filters = races();
        filters.date_from = "2023/01/01".into();
        assert!(matches!(
            filters.validate(),
            Err(FilterError::InvalidDate { field: "Date from", .. })
        ));

        filters.date_from = "2023-06-01".into();
        filters.date_to = "2023-01-01".into();
        assert_eq!(filters.validate(), Err(FilterError::DateRange));

        filters.date_to = "2023-12-31".into();
        assert!(filters.validate().is_ok());
    }

    #[test]
    fn race_laps_and_round_are_checked() {
        let mut filters = races();
        filters.laps_min = "70".into();
        filters.laps_max = "50".into();
        assert_eq!(filters.validate(), Err(FilterError::LapsRange));

        let mut filters = races();
        filters.round = "0".into();
        assert!(filters.validate().is_err());

        let mut filters = races();
        filters.year = "23".into();
        assert!(matches!(
            filters.validate(),
            Err(FilterError::InvalidYear { .. })
        ));
    }

    #[test]
    fn real_only_adds_flag() {
        let mut filters = races();
        filters.is_real_only = true;
        filters.year = "2023".into();
        let query = filters.to_query(1);
        assert_eq!(query.get("is_real"), Some("true"));
        assert_eq!(query.get("year"), Some("2023"));
    }

    #[test]
    fn stats_year_range() {
        let filters = StatsFilters {
            year_from: "2010".into(),
            year_to: "2000".into(),
            qualifying_format: String::new(),
        };
        assert_eq!(filters.validate(), Err(FilterError::YearRange));
        assert_eq!(
            FilterError::YearRange.to_string(),
            "Year from must not be after year to"
        );
    }
}

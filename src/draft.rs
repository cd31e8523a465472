//! Draft of the add-data page.
//!
//! Each section (constructor, driver, race) is either a custom entry typed
//! into a form, or an existing record picked through the typeahead. Saved
//! sections sit in [`SavedData`] until "Submit Data" posts the custom ones,
//! constructor first, then driver, then race.

use crate::filters::{is_iso_date, is_year};
use crate::format::{number, DASH};
use crate::models::{Constructor, Driver, Race};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Custom,
    Existing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedKind {
    Constructor,
    Driver,
    Race,
}

impl SavedKind {
    pub const ALL: [SavedKind; 3] = [SavedKind::Constructor, SavedKind::Driver, SavedKind::Race];

    pub fn noun(self) -> &'static str {
        match self {
            SavedKind::Constructor => "constructor",
            SavedKind::Driver => "driver",
            SavedKind::Race => "race",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SavedKind::Constructor => "Constructor",
            SavedKind::Driver => "Driver",
            SavedKind::Race => "Race",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    Required(&'static str),
    InvalidNumber { field: &'static str, value: String },
    InvalidDate { field: &'static str, value: String },
    InvalidYear(String),
    NoSelection(SavedKind),
    NothingSaved,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Required(field) => write!(f, "{} is required", field),
            FormError::InvalidNumber { field, value } => {
                write!(f, "{} must be a non-negative number (got \"{}\")", field, value)
            }
            FormError::InvalidDate { field, value } => {
                write!(f, "{} must be a date in YYYY-MM-DD format (got \"{}\")", field, value)
            }
            FormError::InvalidYear(value) => {
                write!(f, "Year must be a four-digit year (got \"{}\")", value)
            }
            FormError::NoSelection(kind) => {
                write!(f, "Please select a {} from the list", kind.noun())
            }
            FormError::NothingSaved => {
                write!(f, "No data to submit. Please save at least one section first.")
            }
        }
    }
}

impl std::error::Error for FormError {}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    optional(value).ok_or(FormError::Required(field))
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Non-negative integer; blank falls back to `default` or is an error.
fn count(value: &str, field: &'static str, default: Option<i64>) -> Result<i64, FormError> {
    match optional(value) {
        None => default.ok_or(FormError::Required(field)),
        Some(v) => match v.parse::<i64>() {
            Ok(n) if n >= 0 => Ok(n),
            _ => Err(FormError::InvalidNumber { field, value: v }),
        },
    }
}

fn decimal(value: &str, field: &'static str, default: Option<f64>) -> Result<f64, FormError> {
    match optional(value) {
        None => default.ok_or(FormError::Required(field)),
        Some(v) => match v.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
            _ => Err(FormError::InvalidNumber { field, value: v }),
        },
    }
}

fn date(value: &str, field: &'static str) -> Result<Option<String>, FormError> {
    match optional(value) {
        None => Ok(None),
        Some(v) if is_iso_date(&v) => Ok(Some(v)),
        Some(v) => Err(FormError::InvalidDate { field, value: v }),
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Custom entries

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorForm {
    pub name: String,
    pub country_id: String,
    pub best_championship_position: String,
    pub total_championship_wins: String,
    pub total_race_starts: String,
    pub total_podiums: String,
    pub total_points: String,
    pub total_pole_positions: String,
}

/// Body of `POST /api/add-constructor`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewConstructor {
    pub country_id: String,
    pub name: String,
    pub best_championship_position: Option<String>,
    pub total_championship_wins: i64,
    pub total_race_starts: i64,
    pub total_podiums: i64,
    pub total_points: f64,
    pub total_pole_positions: i64,
}

impl ConstructorForm {
    pub fn parse(&self) -> Result<NewConstructor, FormError> {
        Ok(NewConstructor {
            country_id: required(&self.country_id, "Country")?,
            name: required(&self.name, "Name")?,
            best_championship_position: optional(&self.best_championship_position),
            total_championship_wins: count(&self.total_championship_wins, "Championship wins", None)?,
            total_race_starts: count(&self.total_race_starts, "Race starts", None)?,
            total_podiums: count(&self.total_podiums, "Podiums", None)?,
            total_points: decimal(&self.total_points, "Points", None)?,
            total_pole_positions: count(&self.total_pole_positions, "Pole positions", None)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverForm {
    pub name: String,
    pub abbreviation: String,
    pub permanent_number: String,
    pub gender: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub country_of_birth_country_id: String,
    pub nationality_country_id: String,
    pub best_championship_position: String,
    pub best_race_result: String,
    pub total_championship_wins: String,
    pub total_race_starts: String,
    pub total_race_wins: String,
    pub total_race_laps: String,
    pub total_podiums: String,
    pub total_points: String,
    pub total_pole_positions: String,
}

/// Body of `POST /api/add-driver`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDriver {
    pub name: String,
    pub abbreviation: Option<String>,
    pub permanent_number: Option<i64>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub country_of_birth_country_id: String,
    pub nationality_country_id: String,
    pub best_championship_position: Option<String>,
    pub best_race_result: Option<String>,
    pub total_championship_wins: i64,
    pub total_race_starts: i64,
    pub total_race_wins: i64,
    pub total_race_laps: i64,
    pub total_podiums: i64,
    pub total_points: f64,
    pub total_pole_positions: i64,
}

impl DriverForm {
    /// Career totals default to zero when left blank.
    pub fn parse(&self) -> Result<NewDriver, FormError> {
        let permanent_number = match optional(&self.permanent_number) {
            Some(_) => Some(count(&self.permanent_number, "Permanent number", None)?),
            None => None,
        };
        Ok(NewDriver {
            name: required(&self.name, "Name")?,
            abbreviation: optional(&self.abbreviation).map(|a| a.to_uppercase()),
            permanent_number,
            gender: optional(&self.gender),
            date_of_birth: date(&self.date_of_birth, "Date of birth")?,
            place_of_birth: optional(&self.place_of_birth),
            country_of_birth_country_id: required(
                &self.country_of_birth_country_id,
                "Country of birth",
            )?,
            nationality_country_id: required(&self.nationality_country_id, "Nationality")?,
            best_championship_position: optional(&self.best_championship_position),
            best_race_result: optional(&self.best_race_result),
            total_championship_wins: count(&self.total_championship_wins, "Championship wins", Some(0))?,
            total_race_starts: count(&self.total_race_starts, "Race starts", Some(0))?,
            total_race_wins: count(&self.total_race_wins, "Race wins", Some(0))?,
            total_race_laps: count(&self.total_race_laps, "Race laps", Some(0))?,
            total_podiums: count(&self.total_podiums, "Podiums", Some(0))?,
            total_points: decimal(&self.total_points, "Points", Some(0.0))?,
            total_pole_positions: count(&self.total_pole_positions, "Pole positions", Some(0))?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RaceForm {
    pub circuit_id: String,
    pub official_name: String,
    pub year: String,
    pub round: String,
    pub date: String,
    pub qualifying_format: String,
    pub laps: String,
    pub qualifying_date: String,
}

/// Body of `POST /api/add-race`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRace {
    pub circuit_id: String,
    pub official_name: String,
    pub year: i64,
    pub round: i64,
    pub date: String,
    pub qualifying_format: String,
    pub laps: i64,
    pub qualifying_date: Option<String>,
}

impl RaceForm {
    pub fn parse(&self) -> Result<NewRace, FormError> {
        let year = required(&self.year, "Year")?;
        if !is_year(&year) {
            return Err(FormError::InvalidYear(year));
        }
        let round = count(&self.round, "Round", None)?;
        if round == 0 {
            return Err(FormError::InvalidNumber {
                field: "Round",
                value: self.round.trim().to_string(),
            });
        }
        Ok(NewRace {
            circuit_id: required(&self.circuit_id, "Circuit")?,
            official_name: required(&self.official_name, "Official name")?,
            year: count(&year, "Year", None)?,
            round,
            date: date(&self.date, "Date")?.ok_or(FormError::Required("Date"))?,
            qualifying_format: required(&self.qualifying_format, "Qualifying format")?,
            laps: count(&self.laps, "Laps", None)?,
            qualifying_date: date(&self.qualifying_date, "Qualifying date")?,
        })
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Existing records

#[derive(Debug, Clone, PartialEq)]
pub struct ExistingConstructor {
    pub id: String,
    pub name: String,
    pub country_name: String,
    pub best_championship_position: Option<String>,
    pub total_championship_wins: i64,
    pub total_race_starts: i64,
    pub total_podiums: i64,
    pub total_points: f64,
    pub total_pole_positions: i64,
}

impl From<&Constructor> for ExistingConstructor {
    fn from(c: &Constructor) -> Self {
        Self {
            id: c.id.clone(),
            name: c.display_name().to_string(),
            country_name: c.nationality.clone().unwrap_or_else(|| DASH.to_string()),
            best_championship_position: c.best_championship_position.clone(),
            total_championship_wins: c.total_championship_wins.unwrap_or(0),
            total_race_starts: c.total_race_starts.unwrap_or(0),
            total_podiums: c.total_podiums.unwrap_or(0),
            total_points: c.total_points.unwrap_or(0.0),
            total_pole_positions: c.total_pole_positions.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExistingDriver {
    pub id: String,
    pub name: String,
    pub nationality: String,
    pub date_of_birth: Option<String>,
    pub total_championship_wins: i64,
    pub total_race_starts: i64,
    pub total_podiums: i64,
    pub total_points: f64,
    pub total_pole_positions: i64,
}

impl From<&Driver> for ExistingDriver {
    fn from(d: &Driver) -> Self {
        Self {
            id: d.id.clone(),
            name: d.display_name().to_string(),
            nationality: d.nationality.clone().unwrap_or_else(|| DASH.to_string()),
            date_of_birth: d.date_of_birth.clone(),
            total_championship_wins: d.total_championship_wins.unwrap_or(0),
            total_race_starts: d.total_race_starts.unwrap_or(0),
            total_podiums: d.total_podiums.unwrap_or(0),
            total_points: d.total_points.unwrap_or(0.0),
            total_pole_positions: d.total_pole_positions.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExistingRace {
    pub id: String,
    pub official_name: String,
    pub year: Option<i64>,
    pub round: Option<i64>,
    pub date: Option<String>,
    pub circuit_name: String,
    pub qualifying_format: Option<String>,
    pub laps: Option<i64>,
}

impl From<&Race> for ExistingRace {
    fn from(r: &Race) -> Self {
        Self {
            id: r.id.map(|id| id.to_string()).unwrap_or_default(),
            official_name: r.title(),
            year: r.year,
            round: r.round,
            date: r.date.clone(),
            circuit_name: r
                .circuit_name
                .clone()
                .unwrap_or_else(|| DASH.to_string()),
            qualifying_format: r.qualifying_format.clone(),
            laps: r.laps,
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// The draft

#[derive(Debug, Clone, PartialEq)]
pub enum Saved<C, E> {
    Custom(C),
    Existing(E),
}

impl<C, E> Saved<C, E> {
    pub fn is_custom(&self) -> bool {
        matches!(self, Saved::Custom(_))
    }
}

pub type SavedConstructor = Saved<NewConstructor, ExistingConstructor>;
pub type SavedDriver = Saved<NewDriver, ExistingDriver>;
pub type SavedRace = Saved<NewRace, ExistingRace>;

/// What clicking the summary block's trash button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAction {
    Remove,
    DeleteFromDb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryBlock {
    pub kind: SavedKind,
    pub title: String,
    pub rows: Vec<(&'static str, String)>,
    pub action: BlockAction,
}

/// One step of a submission, in posting order.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    AddConstructor(NewConstructor),
    AddDriver(NewDriver),
    AddRace(NewRace),
    KeepExisting(SavedKind),
}

impl Step {
    pub fn kind(&self) -> SavedKind {
        match self {
            Step::AddConstructor(_) => SavedKind::Constructor,
            Step::AddDriver(_) => SavedKind::Driver,
            Step::AddRace(_) => SavedKind::Race,
            Step::KeepExisting(kind) => *kind,
        }
    }

    pub fn done_message(&self) -> String {
        match self {
            Step::KeepExisting(kind) => format!("Existing {} selected.", kind.noun()),
            other => format!("{} added successfully!", other.kind().title()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedData {
    pub constructor: Option<SavedConstructor>,
    pub driver: Option<SavedDriver>,
    pub race: Option<SavedRace>,
}

impl SavedData {
    pub fn is_empty(&self) -> bool {
        self.constructor.is_none() && self.driver.is_none() && self.race.is_none()
    }

    pub fn remove(&mut self, kind: SavedKind) {
        match kind {
            SavedKind::Constructor => self.constructor = None,
            SavedKind::Driver => self.driver = None,
            SavedKind::Race => self.race = None,
        }
    }

    /// The steps "Submit Data" has to run: constructor, driver, race.
    pub fn submission_steps(&self) -> Result<Vec<Step>, FormError> {
        if self.is_empty() {
            return Err(FormError::NothingSaved);
        }
        let mut steps = Vec::new();
        match &self.constructor {
            Some(Saved::Custom(c)) => steps.push(Step::AddConstructor(c.clone())),
            Some(Saved::Existing(_)) => steps.push(Step::KeepExisting(SavedKind::Constructor)),
            None => {}
        }
        match &self.driver {
            Some(Saved::Custom(d)) => steps.push(Step::AddDriver(d.clone())),
            Some(Saved::Existing(_)) => steps.push(Step::KeepExisting(SavedKind::Driver)),
            None => {}
        }
        match &self.race {
            Some(Saved::Custom(r)) => steps.push(Step::AddRace(r.clone())),
            Some(Saved::Existing(_)) => steps.push(Step::KeepExisting(SavedKind::Race)),
            None => {}
        }
        Ok(steps)
    }

    /// Turns a posted custom entry into an existing one carrying its new id.
    pub fn record_created(&mut self, kind: SavedKind, id: String) {
        match kind {
            SavedKind::Constructor => {
                if let Some(Saved::Custom(c)) = &self.constructor {
                    self.constructor = Some(Saved::Existing(ExistingConstructor {
                        id,
                        name: c.name.clone(),
                        country_name: c.country_id.clone(),
                        best_championship_position: c.best_championship_position.clone(),
                        total_championship_wins: c.total_championship_wins,
                        total_race_starts: c.total_race_starts,
                        total_podiums: c.total_podiums,
                        total_points: c.total_points,
                        total_pole_positions: c.total_pole_positions,
                    }));
                }
            }
            SavedKind::Driver => {
                if let Some(Saved::Custom(d)) = &self.driver {
                    self.driver = Some(Saved::Existing(ExistingDriver {
                        id,
                        name: d.name.clone(),
                        nationality: DASH.to_string(),
                        date_of_birth: d.date_of_birth.clone(),
                        total_championship_wins: d.total_championship_wins,
                        total_race_starts: d.total_race_starts,
                        total_podiums: d.total_podiums,
                        total_points: d.total_points,
                        total_pole_positions: d.total_pole_positions,
                    }));
                }
            }
            SavedKind::Race => {
                if let Some(Saved::Custom(r)) = &self.race {
                    self.race = Some(Saved::Existing(ExistingRace {
                        id,
                        official_name: r.official_name.clone(),
                        year: Some(r.year),
                        round: Some(r.round),
                        date: Some(r.date.clone()),
                        circuit_name: r.circuit_id.clone(),
                        qualifying_format: Some(r.qualifying_format.clone()),
                        laps: Some(r.laps),
                    }));
                }
            }
        }
    }

    /// Id of the saved driver when it is a record already in the database.
    pub fn deletable_driver(&self) -> Option<&str> {
        match &self.driver {
            Some(Saved::Existing(d)) if !d.id.is_empty() => Some(&d.id),
            _ => None,
        }
    }

    pub fn summary(&self) -> Vec<SummaryBlock> {
        let mut blocks = Vec::new();
        let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| DASH.to_string());

        if let Some(saved) = &self.constructor {
            let (mode, rows) = match saved {
                Saved::Custom(c) => (
                    "custom",
                    vec![
                        ("Name", c.name.clone()),
                        ("Country", c.country_id.clone()),
                        ("Best pos", opt(&c.best_championship_position)),
                        ("Wins", c.total_championship_wins.to_string()),
                        ("Starts", c.total_race_starts.to_string()),
                        ("Podiums", c.total_podiums.to_string()),
                        ("Points", number(Some(c.total_points))),
                        ("Poles", c.total_pole_positions.to_string()),
                    ],
                ),
                Saved::Existing(c) => (
                    "existing",
                    vec![
                        ("Name", c.name.clone()),
                        ("Country", c.country_name.clone()),
                        ("Best pos", opt(&c.best_championship_position)),
                        ("Wins", c.total_championship_wins.to_string()),
                        ("Starts", c.total_race_starts.to_string()),
                        ("Podiums", c.total_podiums.to_string()),
                        ("Points", number(Some(c.total_points))),
                        ("Poles", c.total_pole_positions.to_string()),
                    ],
                ),
            };
            blocks.push(SummaryBlock {
                kind: SavedKind::Constructor,
                title: format!("Constructor ({})", mode),
                rows,
                action: BlockAction::Remove,
            });
        }

        if let Some(saved) = &self.driver {
            let block = match saved {
                Saved::Custom(d) => SummaryBlock {
                    kind: SavedKind::Driver,
                    title: "Driver (custom)".to_string(),
                    rows: vec![
                        ("Name", d.name.clone()),
                        ("DOB", opt(&d.date_of_birth)),
                        ("Wins", d.total_championship_wins.to_string()),
                        ("Starts", d.total_race_starts.to_string()),
                        ("Podiums", d.total_podiums.to_string()),
                        ("Points", number(Some(d.total_points))),
                        ("Poles", d.total_pole_positions.to_string()),
                    ],
                    action: BlockAction::Remove,
                },
                Saved::Existing(d) => SummaryBlock {
                    kind: SavedKind::Driver,
                    title: "Driver (existing)".to_string(),
                    rows: vec![
                        ("Name", d.name.clone()),
                        ("Nationality", d.nationality.clone()),
                        ("DOB", opt(&d.date_of_birth)),
                        ("Wins", d.total_championship_wins.to_string()),
                        ("Starts", d.total_race_starts.to_string()),
                        ("Podiums", d.total_podiums.to_string()),
                        ("Points", number(Some(d.total_points))),
                        ("Poles", d.total_pole_positions.to_string()),
                        ("ID", d.id.clone()),
                    ],
                    action: BlockAction::DeleteFromDb,
                },
            };
            blocks.push(block);
        }

        if let Some(saved) = &self.race {
            let (mode, rows) = match saved {
                Saved::Custom(r) => (
                    "custom",
                    vec![
                        ("Name", r.official_name.clone()),
                        ("Circuit", r.circuit_id.clone()),
                        ("Year", r.year.to_string()),
                        ("Round", r.round.to_string()),
                        ("Date", r.date.clone()),
                        ("Format", r.qualifying_format.clone()),
                        ("Laps", r.laps.to_string()),
                    ],
                ),
                Saved::Existing(r) => (
                    "existing",
                    vec![
                        ("Name", r.official_name.clone()),
                        ("Circuit", r.circuit_name.clone()),
                        ("Year", opt(&r.year.map(|y| y.to_string()))),
                        ("Round", opt(&r.round.map(|n| n.to_string()))),
                        ("Date", opt(&r.date)),
                        ("Format", opt(&r.qualifying_format)),
                        ("Laps", opt(&r.laps.map(|l| l.to_string()))),
                    ],
                ),
            };
            blocks.push(SummaryBlock {
                kind: SavedKind::Race,
                title: format!("Race ({})", mode),
                rows,
                action: BlockAction::Remove,
            });
        }

        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constructor_form() -> ConstructorForm {
        ConstructorForm {
            name: "Apex GP".into(),
            country_id: "united-kingdom".into(),
            best_championship_position: String::new(),
            total_championship_wins: "0".into(),
            total_race_starts: "24".into(),
            total_podiums: "3".into(),
            total_points: "112.5".into(),
            total_pole_positions: "1".into(),
        }
    }

    fn driver_form() -> DriverForm {
        DriverForm {
            name: "Sonny Hayes".into(),
            abbreviation: "hay".into(),
            date_of_birth: "1970-04-01".into(),
            country_of_birth_country_id: "united-states-of-america".into(),
            nationality_country_id: "united-states-of-america".into(),
            ..Default::default()
        }
    }

    fn race_form() -> RaceForm {
        RaceForm {
            circuit_id: "silverstone".into(),
            official_name: "Apex Grand Prix".into(),
            year: "2025".into(),
            round: "12".into(),
            date: "2025-07-06".into(),
            qualifying_format: "KNOCKOUT".into(),
            laps: "52".into(),
            qualifying_date: String::new(),
        }
    }

    #[test]
    fn constructor_form_parses() {
        let c = constructor_form().parse().unwrap();
        assert_eq!(c.total_points, 112.5);
        assert_eq!(c.best_championship_position, None);

        let mut form = constructor_form();
        form.total_podiums = String::new();
        assert_eq!(form.parse(), Err(FormError::Required("Podiums")));
        form.total_podiums = "-1".into();
        assert!(matches!(form.parse(), Err(FormError::InvalidNumber { field: "Podiums", .. })));
    }

    #[test]
    fn driver_totals_default_to_zero() {
        let d = driver_form().parse().unwrap();
        assert_eq!(d.total_race_starts, 0);
        assert_eq!(d.total_points, 0.0);
        assert_eq!(d.abbreviation.as_deref(), Some("HAY"));
        assert_eq!(d.permanent_number, None);

        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["nationality_country_id"], "united-states-of-america");
        assert!(json["gender"].is_null());

        let mut form = driver_form();
        form.date_of_birth = "01/04/1970".into();
        assert!(matches!(form.parse(), Err(FormError::InvalidDate { .. })));
    }

    #[test]
    fn race_form_checks_year_round_and_date() {
        assert_eq!(race_form().parse().unwrap().laps, 52);

        let mut form = race_form();
        form.year = "25".into();
        assert_eq!(form.parse(), Err(FormError::InvalidYear("25".into())));

        let mut form = race_form();
        form.round = "0".into();
        assert!(form.parse().is_err());

        let mut form = race_form();
        form.date = String::new();
        assert_eq!(form.parse(), Err(FormError::Required("Date")));
    }

    #[test]
    fn empty_draft_has_nothing_to_submit() {
        let draft = SavedData::default();
        assert_eq!(draft.submission_steps(), Err(FormError::NothingSaved));
        assert!(draft.summary().is_empty());
    }

    #[test]
    fn steps_follow_constructor_driver_race_order() {
        let mut draft = SavedData::default();
        draft.race = Some(Saved::Custom(race_form().parse().unwrap()));
        draft.driver = Some(Saved::Existing(ExistingDriver::from(&Driver {
            id: "lewis-hamilton".into(),
            name: Some("Lewis Hamilton".into()),
            ..Default::default()
        })));
        draft.constructor = Some(Saved::Custom(constructor_form().parse().unwrap()));

        let kinds: Vec<SavedKind> = draft
            .submission_steps()
            .unwrap()
            .iter()
            .map(Step::kind)
            .collect();
        assert_eq!(kinds, SavedKind::ALL.to_vec());

        let steps = draft.submission_steps().unwrap();
        assert_eq!(steps[0].done_message(), "Constructor added successfully!");
        assert_eq!(steps[1].done_message(), "Existing driver selected.");
    }

    #[test]
    fn created_entries_become_existing() {
        let mut draft = SavedData::default();
        draft.constructor = Some(Saved::Custom(constructor_form().parse().unwrap()));
        draft.driver = Some(Saved::Custom(driver_form().parse().unwrap()));
        assert!(draft.deletable_driver().is_none());

        draft.record_created(SavedKind::Constructor, "apex-gp".into());
        draft.record_created(SavedKind::Driver, "sonny-hayes".into());

        match &draft.constructor {
            Some(Saved::Existing(c)) => {
                assert_eq!(c.id, "apex-gp");
                assert_eq!(c.total_race_starts, 24);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(draft.deletable_driver(), Some("sonny-hayes"));
        assert_eq!(
            draft.submission_steps().unwrap(),
            vec![
                Step::KeepExisting(SavedKind::Constructor),
                Step::KeepExisting(SavedKind::Driver)
            ]
        );

        let blocks = draft.summary();
        assert_eq!(blocks[0].title, "Constructor (existing)");
        assert_eq!(blocks[0].action, BlockAction::Remove);
        assert_eq!(blocks[1].action, BlockAction::DeleteFromDb);
        assert!(blocks[1].rows.contains(&("ID", "sonny-hayes".to_string())));
    }

    #[test]
    fn removed_slot_ignores_a_late_created_id() {
        let mut draft = SavedData::default();
        draft.constructor = Some(Saved::Custom(constructor_form().parse().unwrap()));
        draft.driver = Some(Saved::Custom(driver_form().parse().unwrap()));
        let steps = draft.submission_steps().unwrap();
        assert_eq!(steps.len(), 2);

        // Constructor removed while its POST is still in flight.
        draft.remove(SavedKind::Constructor);
        draft.record_created(SavedKind::Constructor, "7".into());
        draft.record_created(SavedKind::Driver, "sonny-hayes".into());

        assert_eq!(draft.constructor, None);
        assert_eq!(draft.deletable_driver(), Some("sonny-hayes"));
        assert_eq!(draft.summary().len(), 1);
    }

    #[test]
    fn removing_one_block_keeps_the_rest() {
        let mut draft = SavedData::default();
        draft.constructor = Some(Saved::Custom(constructor_form().parse().unwrap()));
        draft.race = Some(Saved::Custom(race_form().parse().unwrap()));
        draft.remove(SavedKind::Constructor);
        let blocks = draft.summary();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, SavedKind::Race);
        assert_eq!(blocks[0].title, "Race (custom)");
    }
}

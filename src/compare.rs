//! Selection state of the driver comparison page.
//!
//! The page walks each side through circuit → year → race → constructor →
//! driver. Changing any step throws away everything after it on that side
//! (a new circuit throws away both sides). The network calls live in the UI;
//! this module hands out lookups describing what to fetch and accepts the
//! answers back.
//!
//! Every lookup carries a [`Ticket`]. A reset bumps the side's generation, so
//! an answer that comes back after its step was reset no longer matches and
//! is dropped.

use crate::format::DASH;
use crate::models::{
    CircuitOption, CompareRequest, Comparison, ConstructorOption, DriverComparison, DriverOption,
    RaceId, RaceInfo,
};
use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn key(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Side::Left => "Driver 1",
            Side::Right => "Driver 2",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompareError {
    NoCircuit,
    NoRace { circuit: String, year: u16 },
    ValidationFailed,
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::NoCircuit => write!(f, "Please select a circuit first"),
            CompareError::NoRace { circuit, year } => {
                write!(f, "No race found at {} in {}", circuit, year)
            }
            CompareError::ValidationFailed => write!(f, "Failed to validate race"),
        }
    }
}

impl std::error::Error for CompareError {}

/// Identifies the step an async answer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub side: Side,
    generation: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearLookup {
    pub ticket: Ticket,
    pub circuit_id: String,
    pub year: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorLookup {
    pub ticket: Ticket,
    pub race_id: RaceId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverLookup {
    pub ticket: Ticket,
    pub race_id: RaceId,
    pub constructor_id: String,
}

/// A chosen list entry: the id sent to the backend and the text shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideSelection {
    pub year_text: String,
    pub year: Option<u16>,
    pub race: Option<RaceInfo>,
    pub constructors: Vec<ConstructorOption>,
    pub constructors_loaded: bool,
    pub constructor_query: String,
    pub constructor: Option<Choice>,
    pub drivers: Vec<DriverOption>,
    pub drivers_loaded: bool,
    pub driver: Option<Choice>,
    pub error: Option<CompareError>,
    pub validating: bool,
    generation: u32,
}

impl SideSelection {
    fn ticket(&self, side: Side) -> Ticket {
        Ticket {
            side,
            generation: self.generation,
        }
    }

    fn clear_constructor(&mut self) {
        self.constructor = None;
        self.drivers.clear();
        self.drivers_loaded = false;
        self.driver = None;
        self.generation = self.generation.wrapping_add(1);
    }

    fn clear_race(&mut self) {
        self.year = None;
        self.race = None;
        self.constructors.clear();
        self.constructors_loaded = false;
        self.constructor_query.clear();
        self.error = None;
        self.validating = false;
        self.clear_constructor();
    }

    fn clear_all(&mut self) {
        self.year_text.clear();
        self.clear_race();
    }

    pub fn race_id(&self) -> Option<RaceId> {
        self.race.as_ref().map(|r| r.id)
    }

    /// Both a driver and a race: this side can be compared.
    pub fn is_ready(&self) -> bool {
        self.driver.is_some() && self.race.is_some()
    }

    pub fn show_summary(&self) -> bool {
        self.driver.is_some()
    }

    pub fn summary(&self) -> SideSummary {
        SideSummary {
            year: self
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| DASH.to_string()),
            constructor: self
                .constructor
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| DASH.to_string()),
            driver: self
                .driver
                .as_ref()
                .map(|d| d.name.clone())
                .unwrap_or_else(|| DASH.to_string()),
        }
    }

    /// Constructors whose short or full name contains the typed query.
    pub fn visible_constructors(&self) -> Vec<&ConstructorOption> {
        let query = self.constructor_query.trim().to_lowercase();
        self.constructors
            .iter()
            .filter(|c| {
                query.is_empty()
                    || c.name.to_lowercase().contains(&query)
                    || c.full_name.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SideSummary {
    pub year: String,
    pub constructor: String,
    pub driver: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareState {
    pub circuit: Option<CircuitOption>,
    pub left: SideSelection,
    pub right: SideSelection,
}

impl CompareState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, side: Side) -> &SideSelection {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideSelection {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// The side a ticket points at, unless it was reset since.
    fn current(&mut self, ticket: Ticket) -> Option<&mut SideSelection> {
        let selection = self.side_mut(ticket.side);
        if selection.generation == ticket.generation {
            Some(selection)
        } else {
            debug!("dropping stale answer for {} side", ticket.side.key());
            None
        }
    }

    /// Year inputs only show once a circuit is chosen.
    pub fn years_visible(&self) -> bool {
        self.circuit.is_some()
    }

    pub fn select_circuit(&mut self, circuit: CircuitOption) {
        debug!("circuit selected: {}", circuit.id);
        self.circuit = Some(circuit);
        self.left.clear_all();
        self.right.clear_all();
    }

    /// Stores the typed year and clears the rest of the side. Returns the
    /// year to validate once the text is exactly four digits.
    pub fn input_year(&mut self, side: Side, text: &str) -> Option<u16> {
        let selection = self.side_mut(side);
        selection.clear_race();
        selection.year_text = text.to_string();
        if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
            text.parse().ok()
        } else {
            None
        }
    }

    pub fn begin_year_validation(
        &mut self,
        side: Side,
        year: u16,
    ) -> Result<YearLookup, CompareError> {
        let Some(circuit_id) = self.circuit.as_ref().map(|c| c.id.clone()) else {
            self.side_mut(side).error = Some(CompareError::NoCircuit);
            return Err(CompareError::NoCircuit);
        };
        let selection = self.side_mut(side);
        selection.error = None;
        selection.validating = true;
        Ok(YearLookup {
            ticket: selection.ticket(side),
            circuit_id,
            year,
        })
    }

    /// Records the lookup answer. With a race, asks for its constructors.
    pub fn race_validated(
        &mut self,
        lookup: &YearLookup,
        race: Option<RaceInfo>,
    ) -> Option<ConstructorLookup> {
        let circuit = self
            .circuit
            .as_ref()
            .map(CircuitOption::label)
            .unwrap_or_default();
        let selection = self.current(lookup.ticket)?;
        selection.validating = false;
        match race {
            Some(race) => {
                let race_id = race.id;
                selection.year = Some(lookup.year);
                selection.race = Some(race);
                selection.error = None;
                Some(ConstructorLookup {
                    ticket: lookup.ticket,
                    race_id,
                })
            }
            None => {
                selection.error = Some(CompareError::NoRace {
                    circuit,
                    year: lookup.year,
                });
                None
            }
        }
    }

    pub fn race_validation_failed(&mut self, lookup: &YearLookup) {
        if let Some(selection) = self.current(lookup.ticket) {
            selection.validating = false;
            selection.error = Some(CompareError::ValidationFailed);
        }
    }

    pub fn constructors_loaded(
        &mut self,
        lookup: &ConstructorLookup,
        constructors: Vec<ConstructorOption>,
    ) {
        if let Some(selection) = self.current(lookup.ticket) {
            selection.constructors = constructors;
            selection.constructors_loaded = true;
        }
    }

    /// Typing in the constructor search drops the chosen constructor and driver.
    pub fn input_constructor_query(&mut self, side: Side, query: &str) {
        let selection = self.side_mut(side);
        selection.constructor_query = query.to_string();
        selection.clear_constructor();
    }

    pub fn select_constructor(&mut self, side: Side, id: &str) -> Option<DriverLookup> {
        let selection = self.side_mut(side);
        let race_id = selection.race_id()?;
        let name = selection
            .constructors
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())?;
        selection.clear_constructor();
        selection.constructor_query = name.clone();
        selection.constructor = Some(Choice {
            id: id.to_string(),
            name,
        });
        Some(DriverLookup {
            ticket: selection.ticket(side),
            race_id,
            constructor_id: id.to_string(),
        })
    }

    pub fn drivers_loaded(&mut self, lookup: &DriverLookup, drivers: Vec<DriverOption>) {
        if let Some(selection) = self.current(lookup.ticket) {
            selection.drivers = drivers;
            selection.drivers_loaded = true;
        }
    }

    /// An empty id (the placeholder option) clears the driver.
    pub fn select_driver(&mut self, side: Side, id: &str) {
        let selection = self.side_mut(side);
        selection.driver = selection
            .drivers
            .iter()
            .find(|d| !id.is_empty() && d.id == id)
            .map(|d| Choice {
                id: d.id.clone(),
                name: d.label(),
            });
    }

    pub fn is_ready(&self) -> bool {
        self.left.is_ready() && self.right.is_ready()
    }

    pub fn comparison_request(&self) -> Option<CompareRequest> {
        if !self.is_ready() {
            return None;
        }
        let circuit = self.circuit.as_ref()?;
        let left_driver = self.left.driver.as_ref()?;
        let right_driver = self.right.driver.as_ref()?;
        Some(CompareRequest {
            circuit_id: circuit.id.clone(),
            driver_1_id: left_driver.id.clone(),
            race_1_id: self.left.race_id()?,
            driver_2_id: right_driver.id.clone(),
            race_2_id: self.right.race_id()?,
        })
    }
}

/// Stats that get a winner highlight in the results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    FinishPosition,
    GridPosition,
    Points,
    CircuitWins,
    CircuitPodiums,
    CircuitAvgFinish,
    ChampionshipPosition,
    SeasonPoints,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::FinishPosition,
        Metric::GridPosition,
        Metric::Points,
        Metric::CircuitWins,
        Metric::CircuitPodiums,
        Metric::CircuitAvgFinish,
        Metric::ChampionshipPosition,
        Metric::SeasonPoints,
    ];

    pub fn lower_is_better(self) -> bool {
        matches!(
            self,
            Metric::FinishPosition
                | Metric::GridPosition
                | Metric::CircuitAvgFinish
                | Metric::ChampionshipPosition
        )
    }

    pub fn value(self, driver: &DriverComparison) -> Option<f64> {
        let race = &driver.race_performance;
        let history = &driver.circuit_history;
        let season = &driver.season_stats;
        match self {
            Metric::FinishPosition => race.finish_position.map(|v| v as f64),
            Metric::GridPosition => race.grid_position.map(|v| v as f64),
            Metric::Points => race.points,
            Metric::CircuitWins => history.wins.map(|v| v as f64),
            Metric::CircuitPodiums => history.podiums.map(|v| v as f64),
            Metric::CircuitAvgFinish => history.avg_finish,
            Metric::ChampionshipPosition => season.championship_position.map(|v| v as f64),
            Metric::SeasonPoints => season.season_points,
        }
    }

    /// The side that wins this metric; `None` on a tie or a missing value.
    pub fn better_side(
        self,
        left: Option<&DriverComparison>,
        right: Option<&DriverComparison>,
    ) -> Option<Side> {
        let a = left.and_then(|d| self.value(d))?;
        let b = right.and_then(|d| self.value(d))?;
        if a == b {
            return None;
        }
        let left_wins = if self.lower_is_better() { a < b } else { a > b };
        Some(if left_wins { Side::Left } else { Side::Right })
    }
}

impl Comparison {
    pub fn driver(&self, side: Side) -> Option<&DriverComparison> {
        match side {
            Side::Left => self.driver_1.as_ref(),
            Side::Right => self.driver_2.as_ref(),
        }
    }

    /// Does `side` win `metric`?
    pub fn wins(&self, metric: Metric, side: Side) -> bool {
        metric.better_side(self.driver_1.as_ref(), self.driver_2.as_ref()) == Some(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CircuitHistory, RacePerformance, SeasonStats};

    fn monza() -> CircuitOption {
        CircuitOption {
            id: "monza".into(),
            full_name: "Autodromo Nazionale Monza".into(),
            country_name: "Italy".into(),
        }
    }

    fn race(id: RaceId) -> RaceInfo {
        RaceInfo {
            id,
            official_name: Some("Italian Grand Prix".into()),
            date: Some("2023-09-03".into()),
            laps: Some(51),
        }
    }

    fn constructors() -> Vec<ConstructorOption> {
        vec![
            ConstructorOption {
                id: "ferrari".into(),
                name: "Ferrari".into(),
                full_name: "Scuderia Ferrari".into(),
            },
            ConstructorOption {
                id: "red-bull".into(),
                name: "Red Bull".into(),
                full_name: "Oracle Red Bull Racing".into(),
            },
        ]
    }

    fn drivers() -> Vec<DriverOption> {
        vec![
            DriverOption {
                id: "charles-leclerc".into(),
                name: "Charles Leclerc".into(),
                full_name: None,
                abbreviation: Some("LEC".into()),
            },
            DriverOption {
                id: "carlos-sainz".into(),
                name: "Carlos Sainz".into(),
                full_name: None,
                abbreviation: None,
            },
        ]
    }

    /// Walks one side all the way to a chosen driver.
    fn fill_side(state: &mut CompareState, side: Side, year: &str, race_id: RaceId) {
        let year = state.input_year(side, year).unwrap();
        let lookup = state.begin_year_validation(side, year).unwrap();
        let constructors_lookup = state.race_validated(&lookup, Some(race(race_id))).unwrap();
        state.constructors_loaded(&constructors_lookup, constructors());
        let drivers_lookup = state.select_constructor(side, "ferrari").unwrap();
        assert_eq!(drivers_lookup.race_id, race_id);
        state.drivers_loaded(&drivers_lookup, drivers());
        state.select_driver(side, "charles-leclerc");
    }

    #[test]
    fn full_walk_builds_request() {
        let mut state = CompareState::new();
        state.select_circuit(monza());
        fill_side(&mut state, Side::Left, "2023", 1100);
        assert!(!state.is_ready());
        assert!(state.comparison_request().is_none());

        fill_side(&mut state, Side::Right, "2019", 1010);
        assert!(state.is_ready());
        let request = state.comparison_request().unwrap();
        assert_eq!(request.circuit_id, "monza");
        assert_eq!(request.driver_1_id, "charles-leclerc");
        assert_eq!(request.race_1_id, 1100);
        assert_eq!(request.race_2_id, 1010);

        let summary = state.left.summary();
        assert_eq!(summary.year, "2023");
        assert_eq!(summary.constructor, "Ferrari");
        assert_eq!(summary.driver, "Charles Leclerc (LEC)");
    }

    #[test]
    fn new_circuit_resets_both_sides() {
        let mut state = CompareState::new();
        state.select_circuit(monza());
        fill_side(&mut state, Side::Left, "2023", 1100);
        fill_side(&mut state, Side::Right, "2019", 1010);

        state.select_circuit(CircuitOption {
            id: "spa".into(),
            full_name: "Circuit de Spa-Francorchamps".into(),
            country_name: "Belgium".into(),
        });

        for side in Side::BOTH {
            let s = state.side(side);
            assert!(s.year_text.is_empty());
            assert!(s.year.is_none());
            assert!(s.race.is_none());
            assert!(s.constructors.is_empty());
            assert!(!s.constructors_loaded);
            assert!(s.constructor.is_none());
            assert!(s.drivers.is_empty());
            assert!(s.driver.is_none());
            assert!(!s.show_summary());
        }
        assert!(!state.is_ready());
        assert!(state.years_visible());
    }

    #[test]
    fn year_needs_four_digits() {
        let mut state = CompareState::new();
        state.select_circuit(monza());
        assert_eq!(state.input_year(Side::Left, "202"), None);
        assert_eq!(state.input_year(Side::Left, "20a3"), None);
        assert_eq!(state.input_year(Side::Left, "20231"), None);
        assert_eq!(state.input_year(Side::Left, "2023"), Some(2023));
        assert_eq!(state.left.year_text, "2023");
    }

    #[test]
    fn retyping_the_year_clears_the_side() {
        let mut state = CompareState::new();
        state.select_circuit(monza());
        fill_side(&mut state, Side::Left, "2023", 1100);
        fill_side(&mut state, Side::Right, "2019", 1010);

        state.input_year(Side::Left, "202");
        assert!(state.left.race.is_none());
        assert!(state.left.driver.is_none());
        assert!(!state.is_ready());
        assert!(state.right.is_ready());
    }

    #[test]
    fn validation_without_circuit_fails() {
        let mut state = CompareState::new();
        let err = state.begin_year_validation(Side::Left, 2023).unwrap_err();
        assert_eq!(err.to_string(), "Please select a circuit first");
        assert_eq!(state.left.error, Some(CompareError::NoCircuit));
    }

    #[test]
    fn missing_race_reports_circuit_and_year() {
        let mut state = CompareState::new();
        state.select_circuit(monza());
        let year = state.input_year(Side::Right, "1950").unwrap();
        let lookup = state.begin_year_validation(Side::Right, year).unwrap();
        assert!(state.right.validating);
        assert!(state.race_validated(&lookup, None).is_none());
        assert!(!state.right.validating);
        assert_eq!(
            state.right.error.as_ref().unwrap().to_string(),
            "No race found at Autodromo Nazionale Monza (Italy) in 1950"
        );

        let lookup = state.begin_year_validation(Side::Right, year).unwrap();
        state.race_validation_failed(&lookup);
        assert_eq!(state.right.error, Some(CompareError::ValidationFailed));
    }

    #[test]
    fn stale_answers_are_dropped() {
        let mut state = CompareState::new();
        state.select_circuit(monza());
        let year = state.input_year(Side::Left, "2023").unwrap();
        let lookup = state.begin_year_validation(Side::Left, year).unwrap();

        // user keeps typing before the answer arrives
        state.input_year(Side::Left, "202");
        assert!(state.race_validated(&lookup, Some(race(1100))).is_none());
        assert!(state.left.race.is_none());

        let year = state.input_year(Side::Left, "2023").unwrap();
        let lookup = state.begin_year_validation(Side::Left, year).unwrap();
        let constructors_lookup = state.race_validated(&lookup, Some(race(1100))).unwrap();
        state.select_circuit(monza());
        state.constructors_loaded(&constructors_lookup, constructors());
        assert!(state.left.constructors.is_empty());
        assert!(!state.left.constructors_loaded);
    }

    #[test]
    fn driver_list_for_a_replaced_constructor_is_dropped() {
        let mut state = CompareState::new();
        state.select_circuit(monza());
        let year = state.input_year(Side::Left, "2023").unwrap();
        let lookup = state.begin_year_validation(Side::Left, year).unwrap();
        let c = state.race_validated(&lookup, Some(race(1100))).unwrap();
        state.constructors_loaded(&c, constructors());

        let ferrari = state.select_constructor(Side::Left, "ferrari").unwrap();
        let red_bull = state.select_constructor(Side::Left, "red-bull").unwrap();
        assert_eq!(red_bull.constructor_id, "red-bull");

        state.drivers_loaded(&ferrari, drivers());
        assert!(state.left.drivers.is_empty());
        assert!(!state.left.drivers_loaded);

        state.drivers_loaded(&red_bull, drivers());
        assert_eq!(state.left.drivers.len(), 2);
        assert!(state.left.drivers_loaded);
        assert_eq!(state.left.constructor.as_ref().unwrap().name, "Red Bull");
    }

    #[test]
    fn driver_list_after_typing_in_constructor_search_is_dropped() {
        let mut state = CompareState::new();
        state.select_circuit(monza());
        let year = state.input_year(Side::Left, "2023").unwrap();
        let lookup = state.begin_year_validation(Side::Left, year).unwrap();
        let c = state.race_validated(&lookup, Some(race(1100))).unwrap();
        state.constructors_loaded(&c, constructors());

        let ferrari = state.select_constructor(Side::Left, "ferrari").unwrap();
        state.input_constructor_query(Side::Left, "Ferr");
        state.drivers_loaded(&ferrari, drivers());
        assert!(state.left.drivers.is_empty());
        assert!(!state.left.drivers_loaded);
        assert!(state.left.constructor.is_none());

        let again = state.select_constructor(Side::Left, "ferrari").unwrap();
        state.drivers_loaded(&again, drivers());
        assert!(state.left.drivers_loaded);
        state.select_driver(Side::Left, "charles-leclerc");
        assert_eq!(state.left.summary().driver, "Charles Leclerc (LEC)");
    }

    #[test]
    fn constructor_search_filters_and_resets_driver() {
        let mut state = CompareState::new();
        state.select_circuit(monza());
        fill_side(&mut state, Side::Left, "2023", 1100);

        state.input_constructor_query(Side::Left, "ORACLE");
        let visible = state.left.visible_constructors();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "red-bull");
        assert!(state.left.constructor.is_none());
        assert!(state.left.driver.is_none());
        assert!(!state.left.drivers_loaded);

        state.input_constructor_query(Side::Left, "");
        assert_eq!(state.left.visible_constructors().len(), 2);
    }

    #[test]
    fn driver_label_and_placeholder() {
        let mut state = CompareState::new();
        state.select_circuit(monza());
        fill_side(&mut state, Side::Left, "2023", 1100);
        state.select_driver(Side::Left, "carlos-sainz");
        assert_eq!(
            state.left.driver.as_ref().unwrap().name,
            "Carlos Sainz (N/A)"
        );
        state.select_driver(Side::Left, "");
        assert!(state.left.driver.is_none());
        assert_eq!(state.left.summary().driver, "-");
    }

    #[test]
    fn unknown_constructor_is_ignored() {
        let mut state = CompareState::new();
        state.select_circuit(monza());
        let year = state.input_year(Side::Left, "2023").unwrap();
        let lookup = state.begin_year_validation(Side::Left, year).unwrap();
        let c = state.race_validated(&lookup, Some(race(1))).unwrap();
        state.constructors_loaded(&c, constructors());
        assert!(state.select_constructor(Side::Left, "mclaren").is_none());
    }

    fn driver(finish: Option<i64>, points: Option<f64>, avg_finish: Option<f64>) -> DriverComparison {
        DriverComparison {
            race_performance: RacePerformance {
                finish_position: finish,
                points,
                ..Default::default()
            },
            circuit_history: CircuitHistory {
                avg_finish,
                ..Default::default()
            },
            season_stats: SeasonStats::default(),
            ..Default::default()
        }
    }

    #[test]
    fn metric_winners() {
        let a = driver(Some(1), Some(25.0), Some(4.5));
        let b = driver(Some(3), Some(15.0), Some(3.0));
        assert_eq!(
            Metric::FinishPosition.better_side(Some(&a), Some(&b)),
            Some(Side::Left)
        );
        assert_eq!(Metric::Points.better_side(Some(&a), Some(&b)), Some(Side::Left));
        assert_eq!(
            Metric::CircuitAvgFinish.better_side(Some(&a), Some(&b)),
            Some(Side::Right)
        );
        // missing on one side or a tie: no highlight
        assert_eq!(Metric::GridPosition.better_side(Some(&a), Some(&b)), None);
        assert_eq!(Metric::Points.better_side(Some(&a), None), None);
        let c = driver(Some(1), None, None);
        assert_eq!(Metric::FinishPosition.better_side(Some(&a), Some(&c)), None);

        let comparison = Comparison {
            circuit: None,
            driver_1: Some(a),
            driver_2: Some(b),
        };
        assert!(comparison.wins(Metric::Points, Side::Left));
        assert!(!comparison.wins(Metric::Points, Side::Right));
    }
}

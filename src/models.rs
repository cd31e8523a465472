//! Records mirrored from the backend's JSON responses.
//!
//! Nothing here enforces invariants beyond what decoding needs: every field
//! the pages can live without is optional, and numeric columns accept either
//! JSON numbers or numeric strings (Postgres decimals arrive as strings).

use serde::{Deserialize, Serialize};

pub type RaceId = i64;

/// Lenient decoders shared by the models.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Bool(bool),
        Int(i64),
        Float(f64),
        Text(String),
    }

    pub fn f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Option::<Scalar>::deserialize(d)? {
            Some(Scalar::Int(v)) => Some(v as f64),
            Some(Scalar::Float(v)) if v.is_finite() => Some(v),
            Some(Scalar::Text(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        })
    }

    pub fn i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        Ok(match Option::<Scalar>::deserialize(d)? {
            Some(Scalar::Int(v)) => Some(v),
            Some(Scalar::Float(v)) if v.fract() == 0.0 && v.is_finite() => Some(v as i64),
            Some(Scalar::Text(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        })
    }

    /// Ids and free text that some endpoints send as numbers.
    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Scalar>::deserialize(d)? {
            Some(Scalar::Text(s)) => Some(s),
            Some(Scalar::Int(v)) => Some(v.to_string()),
            Some(Scalar::Float(v)) => Some(v.to_string()),
            Some(Scalar::Bool(_)) | None => None,
        })
    }

    pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        Ok(i64(d)?.unwrap_or_default())
    }

    pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(text(d)?.unwrap_or_default())
    }

    /// Flags stored as booleans, 0/1 or "true"/"false".
    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(match Option::<Scalar>::deserialize(d)? {
            Some(Scalar::Bool(b)) => b,
            Some(Scalar::Int(v)) => v != 0,
            Some(Scalar::Float(v)) => v != 0.0,
            Some(Scalar::Text(s)) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "t" | "1" | "yes"),
            None => false,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    #[serde(deserialize_with = "lenient::i64")]
    pub current_page: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_pages: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_count: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn current(&self) -> u32 {
        self.current_page.unwrap_or(1).max(1) as u32
    }

    pub fn total(&self) -> u32 {
        self.total_pages.unwrap_or(1).max(1) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Driver {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub abbreviation: Option<String>,
    #[serde(deserialize_with = "lenient::i64")]
    pub permanent_number: Option<i64>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub best_championship_position: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub best_race_result: Option<String>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_championship_wins: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_race_starts: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_race_wins: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_race_laps: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_podiums: Option<i64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub total_points: Option<f64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_pole_positions: Option<i64>,
}

impl Driver {
    /// Short name first, then full name, then the id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.full_name.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Constructor {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub nationality: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub best_championship_position: Option<String>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_championship_wins: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_race_starts: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_race_wins: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_podiums: Option<i64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub total_points: Option<f64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_pole_positions: Option<i64>,
}

impl Constructor {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.full_name.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.id)
    }
}

/// A race row. The detail endpoint joins the circuit columns in, list
/// endpoints leave them empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Race {
    #[serde(deserialize_with = "lenient::i64")]
    pub id: Option<RaceId>,
    #[serde(deserialize_with = "lenient::i64")]
    pub year: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub round: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    pub official_name: Option<String>,
    pub qualifying_format: Option<String>,
    #[serde(deserialize_with = "lenient::i64")]
    pub laps: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub qualifying_date: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_real: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub circuit_id: Option<String>,
    pub circuit_name: Option<String>,
    pub country_name: Option<String>,
    pub circuit_place_name: Option<String>,
    pub circuit_country: Option<String>,
    #[serde(deserialize_with = "lenient::f64")]
    pub circuit_length: Option<f64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub circuit_turns: Option<i64>,
    pub circuit_direction: Option<String>,
    pub circuit_type: Option<String>,
    #[serde(deserialize_with = "lenient::i64")]
    pub circuit_total_races: Option<i64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub circuit_latitude: Option<f64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub circuit_longitude: Option<f64>,
}

impl Race {
    pub fn title(&self) -> String {
        self.official_name
            .clone()
            .or_else(|| self.circuit_name.clone())
            .unwrap_or_else(|| match self.round {
                Some(round) => format!("Round {}", round),
                None => "Race".to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Circuit {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub place_name: Option<String>,
    pub country_name: Option<String>,
    #[serde(deserialize_with = "lenient::f64")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub length: Option<f64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub turns: Option<i64>,
    pub direction: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient::i64")]
    pub total_races_held: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitRace {
    #[serde(deserialize_with = "lenient::i64")]
    pub id: Option<RaceId>,
    #[serde(deserialize_with = "lenient::i64")]
    pub round: Option<i64>,
    pub official_name: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_real: bool,
    #[serde(deserialize_with = "lenient::i64")]
    pub participant_count: Option<i64>,
}

/// One `race_data` row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceResult {
    #[serde(deserialize_with = "lenient::i64")]
    pub race_id: Option<RaceId>,
    #[serde(deserialize_with = "lenient::i64")]
    pub position_display_order: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub driver_number: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub driver_id: Option<String>,
    pub driver_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub constructor_id: Option<String>,
    pub constructor_name: Option<String>,
    #[serde(deserialize_with = "lenient::i64")]
    pub race_grid_position_number: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub race_qualification_position_number: Option<i64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub race_points: Option<f64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub race_pole_position: bool,
}

impl RaceResult {
    pub fn driver_label(&self) -> String {
        self.driver_name
            .clone()
            .or_else(|| self.driver_id.clone())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn constructor_label(&self) -> String {
        self.constructor_name
            .clone()
            .or_else(|| self.constructor_id.clone())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Sort rows by their display order; rows without one go last.
pub fn sort_by_display_order(rows: &mut [RaceResult]) {
    rows.sort_by_key(|r| r.position_display_order.unwrap_or(i64::MAX));
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverStanding {
    #[serde(deserialize_with = "lenient::i64")]
    pub position_number: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub driver_id: Option<String>,
    pub driver_name: Option<String>,
    pub nationality: Option<String>,
    #[serde(deserialize_with = "lenient::f64")]
    pub points: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructorStanding {
    #[serde(deserialize_with = "lenient::i64")]
    pub position_number: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub constructor_id: Option<String>,
    pub constructor_name: Option<String>,
    pub country_name: Option<String>,
    #[serde(deserialize_with = "lenient::f64")]
    pub points: Option<f64>,
}

/// One row of the races-by-year statistics table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct YearStats {
    #[serde(deserialize_with = "lenient::i64")]
    pub year: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub race_count: Option<i64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub avg_laps: Option<f64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub sprint_races: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub knockout_races: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub one_session_races: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub two_session_races: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub four_laps_races: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub aggregate_races: Option<i64>,
}

// ──────────────────────────────────────────────────────────────────────────────
// Compare page records

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitOption {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub full_name: String,
    pub country_name: String,
}

impl CircuitOption {
    pub fn label(&self) -> String {
        format!("{} ({})", self.full_name, self.country_name)
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.full_name.to_lowercase().contains(&query)
            || self.country_name.to_lowercase().contains(&query)
    }
}

/// The race returned by the circuit/year validation lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceInfo {
    #[serde(deserialize_with = "lenient::int")]
    pub id: RaceId,
    pub official_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::i64")]
    pub laps: Option<i64>,
}

impl RaceInfo {
    pub fn details(&self) -> String {
        format!(
            "{} • {} laps",
            self.date.as_deref().unwrap_or("-"),
            self.laps.map(|l| l.to_string()).unwrap_or_else(|| "-".to_string())
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructorOption {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverOption {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub name: String,
    pub full_name: Option<String>,
    pub abbreviation: Option<String>,
}

impl DriverOption {
    pub fn label(&self) -> String {
        let abbreviation = self
            .abbreviation
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or("N/A");
        format!("{} ({})", self.name, abbreviation)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonCircuit {
    pub name: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
    #[serde(deserialize_with = "lenient::f64")]
    pub length: Option<f64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub turns: Option<i64>,
}

impl ComparisonCircuit {
    pub fn details(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        parts.extend(self.location.clone().filter(|s| !s.is_empty()));
        parts.extend(self.country.clone().filter(|s| !s.is_empty()));
        if let Some(length) = self.length.filter(|l| *l != 0.0) {
            parts.push(format!("{}km", length));
        }
        if let Some(turns) = self.turns.filter(|t| *t != 0) {
            parts.push(format!("{} turns", turns));
        }
        parts.join(" • ")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverInfo {
    #[serde(deserialize_with = "lenient::text")]
    pub number: Option<String>,
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub constructor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RacePerformance {
    #[serde(deserialize_with = "lenient::i64")]
    pub year: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub finish_position: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub grid_position: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub qualifying_position: Option<i64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub points: Option<f64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub positions_gained: Option<i64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub pole: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitHistory {
    #[serde(deserialize_with = "lenient::i64")]
    pub total_races: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub wins: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub podiums: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub poles: Option<i64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub avg_finish: Option<f64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub best_finish: Option<i64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub avg_points: Option<f64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub total_points: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonStats {
    #[serde(deserialize_with = "lenient::i64")]
    pub championship_position: Option<i64>,
    #[serde(deserialize_with = "lenient::f64")]
    pub season_points: Option<f64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub season_wins: Option<i64>,
    #[serde(deserialize_with = "lenient::i64")]
    pub season_podiums: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverComparison {
    pub info: DriverInfo,
    pub race_performance: RacePerformance,
    pub circuit_history: CircuitHistory,
    pub season_stats: SeasonStats,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comparison {
    pub circuit: Option<ComparisonCircuit>,
    pub driver_1: Option<DriverComparison>,
    pub driver_2: Option<DriverComparison>,
}

/// Body of `POST /api/compare-drivers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub circuit_id: String,
    pub driver_1_id: String,
    pub race_1_id: RaceId,
    pub driver_2_id: String,
    pub race_2_id: RaceId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_decimal_strings_and_missing_fields() {
        let driver: Driver = serde_json::from_str(
            r#"{"id": "max-verstappen", "name": "Max Verstappen",
                "total_points": "3023.50", "total_race_wins": 63,
                "date_of_birth": "1997-09-30"}"#,
        )
        .unwrap();
        assert_eq!(driver.total_points, Some(3023.5));
        assert_eq!(driver.total_race_wins, Some(63));
        assert_eq!(driver.total_podiums, None);
        assert_eq!(driver.display_name(), "Max Verstappen");
    }

    #[test]
    fn numeric_ids_become_strings() {
        let c: CircuitOption =
            serde_json::from_str(r#"{"id": 14, "full_name": "Monza", "country_name": "Italy"}"#)
                .unwrap();
        assert_eq!(c.id, "14");
        assert_eq!(c.label(), "Monza (Italy)");
    }

    #[test]
    fn flags_accept_several_encodings() {
        let rows: Vec<RaceResult> = serde_json::from_str(
            r#"[{"race_pole_position": true}, {"race_pole_position": 0},
                {"race_pole_position": "true"}, {}]"#,
        )
        .unwrap();
        let poles: Vec<bool> = rows.iter().map(|r| r.race_pole_position).collect();
        assert_eq!(poles, vec![true, false, true, false]);
    }

    #[test]
    fn circuit_matches_name_or_country() {
        let c = CircuitOption {
            id: "monza".into(),
            full_name: "Autodromo Nazionale Monza".into(),
            country_name: "Italy".into(),
        };
        assert!(c.matches("monza"));
        assert!(c.matches("ITA"));
        assert!(c.matches("  "));
        assert!(!c.matches("spa"));
    }

    #[test]
    fn driver_option_label_falls_back_to_na() {
        let mut d = DriverOption {
            id: "1".into(),
            name: "Lewis Hamilton".into(),
            full_name: None,
            abbreviation: Some("HAM".into()),
        };
        assert_eq!(d.label(), "Lewis Hamilton (HAM)");
        d.abbreviation = None;
        assert_eq!(d.label(), "Lewis Hamilton (N/A)");
    }

    #[test]
    fn comparison_circuit_details_skip_missing_parts() {
        let c = ComparisonCircuit {
            name: Some("Monza".into()),
            location: Some("Monza".into()),
            country: None,
            length: Some(5.793),
            turns: None,
        };
        assert_eq!(c.details(), "Monza • 5.793km");
    }

    #[test]
    fn results_sort_by_display_order() {
        let mut rows: Vec<RaceResult> = serde_json::from_str(
            r#"[{"position_display_order": 3}, {}, {"position_display_order": "1"}]"#,
        )
        .unwrap();
        sort_by_display_order(&mut rows);
        let order: Vec<Option<i64>> = rows.iter().map(|r| r.position_display_order).collect();
        assert_eq!(order, vec![Some(1), Some(3), None]);
    }

    #[test]
    fn pagination_clamps_to_one() {
        let p: Pagination = serde_json::from_str(r#"{"current_page": 0}"#).unwrap();
        assert_eq!(p.current(), 1);
        assert_eq!(p.total(), 1);
    }
}

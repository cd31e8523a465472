//! REST client for the statistics backend.
//!
//! Every endpoint the pages talk to is one async method on [`ApiClient`].
//! Requests go through the browser `fetch`; bodies are decoded straight from
//! the `JsValue` with `serde-wasm-bindgen`.

use crate::filters::{ConstructorFilters, DriverFilters, RaceFilters, StatsFilters};
use crate::models::*;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, bad URL).
    Network(String),
    /// The server answered with a non-2xx status.
    Status { status: u16, message: String },
    /// The body was not the JSON shape we expected.
    Decode(String),
    /// A `{"success": false, "error": ...}` envelope.
    Rejected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, message } if message.is_empty() => {
                write!(f, "HTTP error! status: {}", status)
            }
            ApiError::Status { message, .. } => write!(f, "{}", message),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            ApiError::Rejected(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(msg)
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        ApiError::Decode(value.to_string())
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Query strings

/// Ordered query parameters; blank values are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(page: u32) -> Self {
        Self::new().with("page", page.max(1).to_string())
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            self.pairs.push((key.to_string(), trimmed.to_string()));
        }
    }

    pub fn push_opt<T: ToString>(&mut self, key: &str, value: Option<T>) {
        if let Some(v) = value {
            self.push(key, v.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(target_arch = "wasm32")]
pub fn encode_component(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

/// Same character set `encodeURIComponent` leaves alone.
#[cfg(not(target_arch = "wasm32"))]
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

// ──────────────────────────────────────────────────────────────────────────────
// Response envelopes

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DriverPage {
    pub drivers: Vec<Driver>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConstructorPage {
    pub constructors: Vec<Constructor>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RacePage {
    pub races: Vec<Race>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RaceDataPage {
    pub race_data: Vec<RaceResult>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsPage {
    pub data: Vec<YearStats>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize)]
struct Standings<T> {
    #[serde(default)]
    standings: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CircuitRaces {
    races: Vec<CircuitRace>,
}

/// `{"success": bool, "error": str, ...payload}` as the compare endpoints send it.
#[derive(Debug, Clone, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    payload: T,
}

impl<T> Envelope<T> {
    fn into_result(self, fallback: &str) -> Result<T, ApiError> {
        if self.success {
            Ok(self.payload)
        } else {
            Err(ApiError::Rejected(
                self.error.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CircuitsPayload {
    circuits: Vec<CircuitOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RacePayload {
    race: Option<RaceInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConstructorsPayload {
    constructors: Vec<ConstructorOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DriversPayload {
    drivers: Vec<DriverOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ComparisonPayload {
    comparison: Comparison,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Created {
    #[serde(deserialize_with = "crate::models::lenient::text")]
    constructor_id: Option<String>,
    #[serde(deserialize_with = "crate::models::lenient::text")]
    driver_id: Option<String>,
    #[serde(deserialize_with = "crate::models::lenient::text")]
    race_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Acknowledged {
    success: Option<bool>,
    error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    /// `base` is prepended to every `/api/...` path; empty means same origin.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str, query: &Query) -> String {
        if query.is_empty() {
            format!("{}{}", self.base, path)
        } else {
            format!("{}{}?{}", self.base, path, query.encode())
        }
    }

    async fn send(&self, method: &str, url: &str, body: Option<String>) -> Result<Response, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = body.as_ref() {
            opts.set_body(&JsValue::from_str(body));
        }
        let request = Request::new_with_str_and_init(url, &opts)?;
        request.headers().set("Accept", "application/json")?;
        if body.is_some() {
            request.headers().set("Content-Type", "application/json")?;
        }

        debug!("{} {}", method, url);
        let value = JsFuture::from(gloo_utils::window().fetch_with_request(&request)).await?;
        let response: Response = value.dyn_into()?;
        Ok(response)
    }

    async fn read_json(response: &Response) -> Result<JsValue, ApiError> {
        Ok(JsFuture::from(response.json()?).await?)
    }

    /// Turns a non-2xx response into `ApiError::Status`, keeping the body's
    /// `error` message when the server sent one.
    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = match Self::read_json(&response).await {
            Ok(value) => serde_wasm_bindgen::from_value::<ErrorBody>(value)
                .ok()
                .and_then(|b| b.error.or(b.message))
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        warn!("request failed with status {}: {}", status, message);
        Err(ApiError::Status { status, message })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T, ApiError> {
        let url = self.url(path, &query);
        let response = Self::check(self.send("GET", &url, None).await?).await?;
        let value = Self::read_json(&response).await?;
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError> {
        let url = self.url(path, &Query::new());
        let body = match body {
            Some(b) => Some(serde_json::to_string(b).map_err(|e| ApiError::Decode(e.to_string()))?),
            None => None,
        };
        let response = Self::check(self.send("POST", &url, body).await?).await?;
        let value = Self::read_json(&response).await?;
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    // ── List pages ───────────────────────────────────────────────────────────

    pub async fn list_drivers(&self, filters: &DriverFilters, page: u32) -> Result<DriverPage, ApiError> {
        self.get("/api/drivers", filters.to_query(page)).await
    }

    pub async fn driver(&self, id: &str) -> Result<Driver, ApiError> {
        self.get(&format!("/api/drivers/{}", encode_component(id)), Query::new())
            .await
    }

    pub async fn list_constructors(
        &self,
        filters: &ConstructorFilters,
        page: u32,
    ) -> Result<ConstructorPage, ApiError> {
        self.get("/api/constructors", filters.to_query(page)).await
    }

    pub async fn constructor(&self, id: &str) -> Result<Constructor, ApiError> {
        self.get(&format!("/api/constructors/{}", encode_component(id)), Query::new())
            .await
    }

    pub async fn list_races(&self, filters: &RaceFilters, page: u32) -> Result<RacePage, ApiError> {
        self.get("/api/races", filters.to_query(page)).await
    }

    pub async fn race(&self, id: &str) -> Result<Race, ApiError> {
        self.get(&format!("/api/races/{}", encode_component(id)), Query::new())
            .await
    }

    pub async fn race_data(
        &self,
        race_id: Option<&str>,
        page: u32,
        is_real: Option<bool>,
    ) -> Result<RaceDataPage, ApiError> {
        let mut query = Query::new();
        query.push_opt("race_id", race_id);
        query.push("page", page.max(1).to_string());
        query.push_opt("is_real", is_real);
        self.get("/api/race_data", query).await
    }

    pub async fn driver_standings(&self, race_id: &str) -> Result<Vec<DriverStanding>, ApiError> {
        let path = format!("/api/races/{}/driver-standings", encode_component(race_id));
        let body: Standings<DriverStanding> = self.get(&path, Query::new()).await?;
        Ok(body.standings)
    }

    pub async fn constructor_standings(&self, race_id: &str) -> Result<Vec<ConstructorStanding>, ApiError> {
        let path = format!("/api/races/{}/constructor-standings", encode_component(race_id));
        let body: Standings<ConstructorStanding> = self.get(&path, Query::new()).await?;
        Ok(body.standings)
    }

    pub async fn circuit(&self, id: &str) -> Result<Circuit, ApiError> {
        self.get(&format!("/api/circuits/{}", encode_component(id)), Query::new())
            .await
    }

    pub async fn circuit_races(&self, id: &str) -> Result<Vec<CircuitRace>, ApiError> {
        let path = format!("/api/circuits/{}/races", encode_component(id));
        let body: CircuitRaces = self.get(&path, Query::new()).await?;
        Ok(body.races)
    }

    pub async fn race_stats(&self, filters: &StatsFilters, page: u32) -> Result<StatsPage, ApiError> {
        self.get("/api/stats/races-by-year", filters.to_query(page)).await
    }

    // ── Compare page ─────────────────────────────────────────────────────────

    pub async fn circuits(&self) -> Result<Vec<CircuitOption>, ApiError> {
        let envelope: Envelope<CircuitsPayload> = self.get("/api/circuits", Query::new()).await?;
        // Some deployments omit `success` on this endpoint.
        if !envelope.success && envelope.error.is_none() {
            return Ok(envelope.payload.circuits);
        }
        Ok(envelope.into_result("No circuits available")?.circuits)
    }

    /// `Ok(None)` when the backend has no race for that circuit and year.
    pub async fn validate_race(&self, circuit_id: &str, year: u16) -> Result<Option<RaceInfo>, ApiError> {
        let query = Query::new()
            .with("circuit_id", circuit_id)
            .with("year", year.to_string());
        let envelope: Envelope<RacePayload> = self.get("/api/validate-race", query).await?;
        if envelope.success {
            Ok(envelope.payload.race)
        } else {
            debug!(
                "no race at circuit {} in {}: {}",
                circuit_id,
                year,
                envelope.error.as_deref().unwrap_or("-")
            );
            Ok(None)
        }
    }

    pub async fn constructors_by_race(&self, race_id: RaceId) -> Result<Vec<ConstructorOption>, ApiError> {
        let query = Query::new().with("race_id", race_id.to_string());
        let envelope: Envelope<ConstructorsPayload> =
            self.get("/api/constructors-by-race", query).await?;
        Ok(envelope.into_result("Failed to load constructors")?.constructors)
    }

    pub async fn drivers_by_race_constructor(
        &self,
        race_id: RaceId,
        constructor_id: &str,
    ) -> Result<Vec<DriverOption>, ApiError> {
        let query = Query::new()
            .with("race_id", race_id.to_string())
            .with("constructor_id", constructor_id);
        let envelope: Envelope<DriversPayload> =
            self.get("/api/drivers-by-race-constructor", query).await?;
        Ok(envelope.into_result("Failed to load drivers")?.drivers)
    }

    pub async fn compare_drivers(&self, request: &CompareRequest) -> Result<Comparison, ApiError> {
        let envelope: Envelope<ComparisonPayload> =
            self.post("/api/compare-drivers", Some(request)).await?;
        Ok(envelope.into_result("Failed to compare drivers")?.comparison)
    }

    // ── Add data page ────────────────────────────────────────────────────────

    pub async fn add_constructor<B: Serialize>(&self, payload: &B) -> Result<String, ApiError> {
        let created: Created = self.post("/api/add-constructor", Some(payload)).await?;
        created
            .constructor_id
            .ok_or_else(|| ApiError::Decode("missing constructor_id".to_string()))
    }

    pub async fn add_driver<B: Serialize>(&self, payload: &B) -> Result<String, ApiError> {
        let created: Created = self.post("/api/add-driver", Some(payload)).await?;
        created
            .driver_id
            .ok_or_else(|| ApiError::Decode("missing driver_id".to_string()))
    }

    pub async fn add_race<B: Serialize>(&self, payload: &B) -> Result<String, ApiError> {
        let created: Created = self.post("/api/add-race", Some(payload)).await?;
        created
            .race_id
            .ok_or_else(|| ApiError::Decode("missing race_id".to_string()))
    }

    pub async fn delete_driver(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/delete-driver/{}", encode_component(id));
        let ack: Acknowledged = self.post::<_, ()>(&path, None).await?;
        if ack.success == Some(false) {
            return Err(ApiError::Rejected(
                ack.error.unwrap_or_else(|| "Delete failed".to_string()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_skips_blank_values_and_encodes() {
        let mut q = Query::page(2);
        q.push("name", "  ");
        q.push("official_name", "GRAN PREMIO D'ITALIA & co");
        q.push_opt("is_real", Some(true));
        q.push_opt::<u32>("round", None);
        assert_eq!(
            q.encode(),
            "page=2&official_name=GRAN%20PREMIO%20D'ITALIA%20%26%20co&is_real=true"
        );
        assert_eq!(q.get("is_real"), Some("true"));
        assert_eq!(q.get("name"), None);
    }

    #[test]
    fn non_ascii_is_percent_encoded_as_utf8() {
        assert_eq!(encode_component("São Paulo"), "S%C3%A3o%20Paulo");
    }

    #[test]
    fn url_joins_base_path_and_query() {
        let client = ApiClient::new("https://stats.example/");
        assert_eq!(
            client.url("/api/drivers", &Query::page(1).with("name", "max")),
            "https://stats.example/api/drivers?page=1&name=max"
        );
        assert_eq!(ApiClient::new("").url("/api/circuits", &Query::new()), "/api/circuits");
    }

    #[test]
    fn envelopes_map_failures_to_rejected() {
        let ok: Envelope<DriversPayload> = serde_json::from_str(
            r#"{"success": true, "drivers": [{"id": "hamilton", "name": "Lewis Hamilton", "abbreviation": "HAM"}]}"#,
        )
        .unwrap();
        let drivers = ok.into_result("x").unwrap().drivers;
        assert_eq!(drivers[0].label(), "Lewis Hamilton (HAM)");

        let failed: Envelope<DriversPayload> =
            serde_json::from_str(r#"{"success": false, "error": "Missing race_id"}"#).unwrap();
        assert_eq!(
            failed.into_result("x").unwrap_err(),
            ApiError::Rejected("Missing race_id".into())
        );

        let bare: Envelope<DriversPayload> = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(
            bare.into_result("Failed to load drivers").unwrap_err().to_string(),
            "Failed to load drivers"
        );
    }

    #[test]
    fn comparison_payload_decodes() {
        let env: Envelope<ComparisonPayload> = serde_json::from_str(
            r#"{"success": true, "comparison": {
                "circuit": {"name": "Monza", "country": "Italy", "length": "5.793", "turns": 11},
                "driver_1": {"info": {"number": 44, "name": "Lewis Hamilton"},
                             "race_performance": {"finish_position": 2, "pole": true},
                             "circuit_history": {"avg_finish": "3.40"}},
                "driver_2": null}}"#,
        )
        .unwrap();
        let comparison = env.into_result("x").unwrap().comparison;
        let d1 = comparison.driver_1.unwrap();
        assert_eq!(d1.info.number.as_deref(), Some("44"));
        assert!(d1.race_performance.pole);
        assert_eq!(d1.circuit_history.avg_finish, Some(3.4));
        assert!(comparison.driver_2.is_none());
        assert_eq!(comparison.circuit.unwrap().length, Some(5.793));
    }

    #[test]
    fn created_ids_accept_numbers() {
        let created: Created = serde_json::from_str(r#"{"race_id": 1203}"#).unwrap();
        assert_eq!(created.race_id.as_deref(), Some("1203"));
        assert!(created.driver_id.is_none());
    }

    #[test]
    fn status_error_display_prefers_server_message() {
        let bare = ApiError::Status { status: 500, message: String::new() };
        assert_eq!(bare.to_string(), "HTTP error! status: 500");
        let msg = ApiError::Status { status: 400, message: "Missing circuit_id or year".into() };
        assert_eq!(msg.to_string(), "Missing circuit_id or year");
    }
}

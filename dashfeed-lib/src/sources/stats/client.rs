//! Stats API client
//!
//! Minimal client for the NBA stats endpoints. Every endpoint answers with a list of
//! tabular result sets (`headers` plus `rowSet`), so cells are looked up by column name.

use crate::Result;
use crate::sources::http;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// The stats site rejects requests that do not look like they come from its own web pages.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

const LEAGUE_ID: &str = "00";
const SEASON_TYPE: &str = "Regular Season";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub result_sets: Vec<ResultSet>,
}

/// One table from a stats response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Index of the named column
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| app_err!("result set '{}' has no '{name}' column", self.name))
    }
}

/// Read a cell as text.
pub fn cell_str(row: &[Value], index: usize) -> Result<&str> {
    match row.get(index) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(app_err!("expected text in column {index}, found {other}")),
        None => Err(app_err!("row has no column {index}")),
    }
}

/// Read a cell as a non-negative count. Missing values (`null`) count as zero.
pub fn cell_count(row: &[Value], index: usize) -> Result<u32> {
    match row.get(index) {
        Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| app_err!("expected a count in column {index}, found {n}")),
        Some(other) => Err(app_err!("expected a count in column {index}, found {other}")),
        None => Err(app_err!("row has no column {index}")),
    }
}

/// Read a cell as an identifier.
pub fn cell_id(row: &[Value], index: usize) -> Result<u64> {
    match row.get(index) {
        Some(Value::Number(n)) => n.as_u64().ok_or_else(|| app_err!("expected an identifier in column {index}, found {n}")),
        Some(Value::String(s)) => s.parse::<u64>().into_app_err_with(|| format!("parsing identifier '{s}' in column {index}")),
        Some(other) => Err(app_err!("expected an identifier in column {index}, found {other}")),
        None => Err(app_err!("row has no column {index}")),
    }
}

/// Read a minutes-played cell, either a plain number or an `MM:SS` clock string.
pub fn cell_minutes(row: &[Value], index: usize) -> Result<f64> {
    match row.get(index) {
        Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| app_err!("expected minutes in column {index}, found {n}")),
        Some(Value::String(s)) => parse_clock_minutes(s),
        Some(other) => Err(app_err!("expected minutes in column {index}, found {other}")),
        None => Err(app_err!("row has no column {index}")),
    }
}

fn parse_clock_minutes(s: &str) -> Result<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0.0);
    }

    let (minutes, seconds) = s.split_once(':').unwrap_or((s, "0"));
    let minutes: f64 = minutes.trim().parse::<f64>().into_app_err_with(|| format!("parsing minutes played '{s}'"))?;
    let seconds: f64 = seconds.trim().parse::<f64>().into_app_err_with(|| format!("parsing minutes played '{s}'"))?;
    Ok(minutes + seconds / 60.0)
}

/// Stats API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,
}

impl Client {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        let _ = headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        let _ = headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
        let _ = headers.insert(HeaderName::from_static("x-nba-stats-origin"), HeaderValue::from_static("stats"));
        let _ = headers.insert(HeaderName::from_static("x-nba-stats-token"), HeaderValue::from_static("true"));

        Ok(Self {
            client: http::build_client(BROWSER_USER_AGENT, headers, timeout)?,
            base_url,
        })
    }

    /// Every player known to the league, as of the given season
    pub async fn all_players(&self, season: &str) -> Result<ResultSet> {
        let mut url = http::endpoint(&self.base_url, "commonallplayers")?;
        let _ = url
            .query_pairs_mut()
            .append_pair("LeagueID", LEAGUE_ID)
            .append_pair("Season", season)
            .append_pair("IsOnlyCurrentSeason", "0");

        self.result_set(&url, "CommonAllPlayers").await
    }

    /// A player's regular-season game log for one season, in the order the source returns it
    pub async fn player_game_log(&self, player_id: u64, season: &str) -> Result<ResultSet> {
        let mut url = http::endpoint(&self.base_url, "playergamelog")?;
        let _ = url
            .query_pairs_mut()
            .append_pair("PlayerID", &player_id.to_string())
            .append_pair("Season", season)
            .append_pair("SeasonType", SEASON_TYPE);

        self.result_set(&url, "PlayerGameLog").await
    }

    /// Fetch a stats response and pick the named result set, falling back to the first one.
    async fn result_set(&self, url: &Url, name: &str) -> Result<ResultSet> {
        let resp = http::get(&self.client, url).await?;
        let body: StatsResponse = resp.json().await.into_app_err_with(|| format!("decoding response from {url}"))?;

        let mut sets = body.result_sets;
        let index = sets.iter().position(|set| set.name == name).unwrap_or(0);
        if index >= sets.len() {
            return Err(app_err!("response from {url} contains no result sets"));
        }

        Ok(sets.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_set_deserialize() {
        let body = json!({
            "resource": "playergamelog",
            "resultSets": [{
                "name": "PlayerGameLog",
                "headers": ["GAME_DATE", "PTS"],
                "rowSet": [["OCT 31, 2024", 30]]
            }]
        });

        let resp: StatsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.result_sets.len(), 1);
        assert_eq!(resp.result_sets[0].name, "PlayerGameLog");
        assert_eq!(resp.result_sets[0].row_set.len(), 1);
    }

    #[test]
    fn test_column_lookup_is_case_insensitive() {
        let set = ResultSet {
            name: "PlayerGameLog".into(),
            headers: vec!["Game_ID".into(), "GAME_DATE".into()],
            row_set: vec![],
        };

        assert_eq!(set.column("GAME_ID").unwrap(), 0);
        assert_eq!(set.column("game_date").unwrap(), 1);
        let _ = set.column("PTS").unwrap_err();
    }

    #[test]
    fn test_cell_str() {
        let row = vec![json!("LAL vs. LAC"), json!(3)];
        assert_eq!(cell_str(&row, 0).unwrap(), "LAL vs. LAC");
        let _ = cell_str(&row, 1).unwrap_err();
        let _ = cell_str(&row, 2).unwrap_err();
    }

    #[test]
    fn test_cell_count() {
        let row = vec![json!(12), json!(null), json!(-1), json!("7")];
        assert_eq!(cell_count(&row, 0).unwrap(), 12);
        assert_eq!(cell_count(&row, 1).unwrap(), 0);
        let _ = cell_count(&row, 2).unwrap_err();
        let _ = cell_count(&row, 3).unwrap_err();
    }

    #[test]
    fn test_cell_id_accepts_number_or_text() {
        let row = vec![json!(1_629_029), json!("1629029")];
        assert_eq!(cell_id(&row, 0).unwrap(), 1_629_029);
        assert_eq!(cell_id(&row, 1).unwrap(), 1_629_029);
    }

    #[test]
    fn test_cell_id_rejects_non_numeric_text() {
        let row = vec![json!("LUKA"), json!("-5")];
        let err = cell_id(&row, 0).unwrap_err();
        assert!(format!("{err:#}").contains("LUKA"));
        let _ = cell_id(&row, 1).unwrap_err();
    }

    #[test]
    fn test_cell_minutes_number() {
        let row = vec![json!(35)];
        assert!((cell_minutes(&row, 0).unwrap() - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cell_minutes_clock_string() {
        let row = vec![json!("34:30"), json!(""), json!("36")];
        assert!((cell_minutes(&row, 0).unwrap() - 34.5).abs() < f64::EPSILON);
        assert!(cell_minutes(&row, 1).unwrap().abs() < f64::EPSILON);
        assert!((cell_minutes(&row, 2).unwrap() - 36.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cell_minutes_invalid() {
        let row = vec![json!("abc"), json!(true), json!("34:xx")];
        let _ = cell_minutes(&row, 0).unwrap_err();
        let _ = cell_minutes(&row, 1).unwrap_err();
        let err = cell_minutes(&row, 2).unwrap_err();
        assert!(format!("{err:#}").contains("34:xx"));
    }

    #[test]
    fn test_client_new() {
        let base = Url::parse("https://stats.nba.com/stats").unwrap();
        let _client = Client::new(base, Duration::from_secs(5)).unwrap();
    }
}

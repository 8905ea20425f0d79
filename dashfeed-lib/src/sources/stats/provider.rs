use super::client::{Client, ResultSet, cell_count, cell_id, cell_minutes, cell_str};
use super::{PlayerId, RawGameRecord};
use crate::Result;
use core::time::Duration;
use ohno::{EnrichableExt, app_err, bail};
use url::Url;

const LOG_TARGET: &str = "     stats";

#[derive(Debug, Clone)]
pub struct Provider {
    client: Client,
}

impl Provider {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::new(base_url.clone(), timeout)?,
        })
    }

    /// Fetch every game the named player played in the given seasons.
    ///
    /// Seasons are fetched one after another and concatenated in the order given; games within
    /// a season keep the order the source returns them in. A failure on any season fails the
    /// whole fetch.
    pub async fn get_game_stats(&self, player_name: &str, seasons: &[String]) -> Result<Vec<RawGameRecord>> {
        let Some(lookup_season) = seasons.last() else {
            bail!("no seasons requested for player '{player_name}'");
        };

        let player_id = self.find_player(player_name, lookup_season).await?;
        log::debug!(target: LOG_TARGET, "Resolved '{player_name}' to player {player_id}");

        let mut games = Vec::new();
        for season in seasons {
            log::info!(target: LOG_TARGET, "Fetching game stats for {player_name} for season {season}");

            let season_games = self
                .get_season_games(player_id, season)
                .await
                .map_err(|e| e.enrich_with(|| format!("fetching season {season} for player '{player_name}'")))?;

            log::debug!(target: LOG_TARGET, "Received {} game(s) for season {season}", season_games.len());
            games.extend(season_games);
        }

        log::info!(target: LOG_TARGET, "Fetched {} game(s) for {player_name} across {} season(s)", games.len(), seasons.len());
        Ok(games)
    }

    /// Resolve a player's display name to their identifier.
    pub async fn find_player(&self, player_name: &str, season: &str) -> Result<PlayerId> {
        log::debug!(target: LOG_TARGET, "Looking up player '{player_name}'");

        let players = self.client.all_players(season).await?;
        find_player_in(&players, player_name)?.ok_or_else(|| app_err!("player '{player_name}' not found"))
    }

    pub async fn get_season_games(&self, player_id: PlayerId, season: &str) -> Result<Vec<RawGameRecord>> {
        let game_log = self.client.player_game_log(player_id.0, season).await?;
        parse_game_log(&game_log, season)
    }
}

/// Find the first player whose display name matches, ignoring case, spacing, and accents.
fn find_player_in(players: &ResultSet, player_name: &str) -> Result<Option<PlayerId>> {
    let id_col = players.column("PERSON_ID")?;
    let name_col = players.column("DISPLAY_FIRST_LAST")?;
    let wanted = fold_name(player_name);

    for row in &players.row_set {
        if fold_name(cell_str(row, name_col)?) == wanted {
            return Ok(Some(PlayerId(cell_id(row, id_col)?)));
        }
    }

    Ok(None)
}

/// Convert a game log result set into raw game records for one season.
fn parse_game_log(game_log: &ResultSet, season: &str) -> Result<Vec<RawGameRecord>> {
    let date_col = game_log.column("GAME_DATE")?;
    let matchup_col = game_log.column("MATCHUP")?;
    let minutes_col = game_log.column("MIN")?;
    let fgm_col = game_log.column("FGM")?;
    let fga_col = game_log.column("FGA")?;
    let fta_col = game_log.column("FTA")?;
    let reb_col = game_log.column("REB")?;
    let ast_col = game_log.column("AST")?;
    let pts_col = game_log.column("PTS")?;

    game_log
        .row_set
        .iter()
        .map(|row| {
            Ok(RawGameRecord {
                game_date: cell_str(row, date_col)?.to_string(),
                points: cell_count(row, pts_col)?,
                rebounds: cell_count(row, reb_col)?,
                assists: cell_count(row, ast_col)?,
                minutes: cell_minutes(row, minutes_col)?,
                field_goals_made: cell_count(row, fgm_col)?,
                field_goals_attempted: cell_count(row, fga_col)?,
                free_throws_attempted: cell_count(row, fta_col)?,
                matchup: cell_str(row, matchup_col)?.to_string(),
                season: season.to_string(),
            })
        })
        .collect()
}

/// Lowercase a name, collapse its whitespace, and strip the Latin diacritics common in player names.
fn fold_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase().chars().map(fold_char).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

const fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => 'i',
        'ĺ' | 'ľ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ŕ' | 'ř' => 'r',
        'ś' | 'ş' | 'š' => 's',
        'ţ' | 'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn players() -> ResultSet {
        ResultSet {
            name: "CommonAllPlayers".into(),
            headers: vec!["PERSON_ID".into(), "DISPLAY_LAST_COMMA_FIRST".into(), "DISPLAY_FIRST_LAST".into()],
            row_set: vec![
                vec![json!(201_939), json!("Curry, Stephen"), json!("Stephen Curry")],
                vec![json!(1_629_029), json!("Dončić, Luka"), json!("Luka Dončić")],
                vec![json!(203_999), json!("Jokić, Nikola"), json!("Nikola Jokić")],
            ],
        }
    }

    fn game_log() -> ResultSet {
        ResultSet {
            name: "PlayerGameLog".into(),
            headers: ["SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP", "WL", "MIN", "FGM", "FGA", "FTA", "REB", "AST", "PTS"]
                .into_iter()
                .map(String::from)
                .collect(),
            row_set: vec![
                vec![
                    json!("22023"),
                    json!(1_629_029),
                    json!("0022300061"),
                    json!("OCT 25, 2023"),
                    json!("DAL @ SAS"),
                    json!("W"),
                    json!(36),
                    json!(13),
                    json!(25),
                    json!(5),
                    json!(12),
                    json!(8),
                    json!(33),
                ],
                vec![
                    json!("22023"),
                    json!(1_629_029),
                    json!("0022300076"),
                    json!("OCT 27, 2023"),
                    json!("DAL vs. BKN"),
                    json!("W"),
                    json!("37:30"),
                    json!(17),
                    json!(28),
                    json!(8),
                    json!(6),
                    json!(9),
                    json!(49),
                ],
            ],
        }
    }

    #[test]
    fn test_fold_name_strips_diacritics_and_case() {
        assert_eq!(fold_name("Luka Dončić"), "luka doncic");
        assert_eq!(fold_name("  LUKA   doncic "), "luka doncic");
        assert_eq!(fold_name("Nikola Jokić"), "nikola jokic");
    }

    #[test]
    fn test_find_player_with_accents() {
        let id = find_player_in(&players(), "Luka Doncic").unwrap();
        assert_eq!(id, Some(PlayerId(1_629_029)));
    }

    #[test]
    fn test_find_player_exact_name() {
        let id = find_player_in(&players(), "Stephen Curry").unwrap();
        assert_eq!(id, Some(PlayerId(201_939)));
    }

    #[test]
    fn test_find_player_missing() {
        let id = find_player_in(&players(), "Michael Jordan").unwrap();
        assert_eq!(id, None);
    }

    #[test]
    fn test_find_player_missing_column() {
        let mut set = players();
        set.headers[2] = "NAME".into();
        let _ = find_player_in(&set, "Luka Doncic").unwrap_err();
    }

    #[test]
    fn test_parse_game_log() {
        let games = parse_game_log(&game_log(), "2023-24").unwrap();
        assert_eq!(games.len(), 2);

        let first = &games[0];
        assert_eq!(first.game_date, "OCT 25, 2023");
        assert_eq!(first.matchup, "DAL @ SAS");
        assert_eq!(first.points, 33);
        assert_eq!(first.rebounds, 12);
        assert_eq!(first.assists, 8);
        assert_eq!(first.field_goals_made, 13);
        assert_eq!(first.field_goals_attempted, 25);
        assert_eq!(first.free_throws_attempted, 5);
        assert!((first.minutes - 36.0).abs() < f64::EPSILON);
        assert_eq!(first.season, "2023-24");

        let second = &games[1];
        assert_eq!(second.points, 49);
        assert!((second.minutes - 37.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_game_log_preserves_order() {
        let games = parse_game_log(&game_log(), "2023-24").unwrap();
        let dates: Vec<_> = games.iter().map(|g| g.game_date.as_str()).collect();
        assert_eq!(dates, ["OCT 25, 2023", "OCT 27, 2023"]);
    }

    #[test]
    fn test_parse_game_log_missing_column() {
        let mut set = game_log();
        set.headers.retain(|h| h != "FTA");
        let _ = parse_game_log(&set, "2023-24").unwrap_err();
    }

    #[test]
    fn test_parse_empty_game_log() {
        let mut set = game_log();
        set.row_set.clear();
        assert!(parse_game_log(&set, "2023-24").unwrap().is_empty());
    }
}

use super::dates::standardize_date_to_iso;
use super::precision::round_to_precision;
use crate::Result;
use crate::sources::stats::RawGameRecord;
use ohno::EnrichableExt;

/// Weight of a free-throw attempt relative to a field-goal attempt in true shooting.
const FREE_THROW_WEIGHT: f64 = 0.44;

/// One game in canonical form, ready to fan out into metric data points
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGameStat {
    /// ISO-8601 calendar date
    pub date: String,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub minutes: f64,
    /// Field goals made over attempted, in `0..=1`
    pub fg_pct: f64,
    /// True-shooting percentage, in `0..=1` for realistic box scores
    pub ts_pct: f64,
    /// Short code of the opponent, e.g. `LAC`
    pub opposing_team: String,
    pub season: String,
}

impl NormalizedGameStat {
    /// Round every float field to the published precision.
    pub fn lower_precision(&mut self) {
        for value in [
            &mut self.points,
            &mut self.rebounds,
            &mut self.assists,
            &mut self.minutes,
            &mut self.fg_pct,
            &mut self.ts_pct,
        ] {
            *value = round_to_precision(*value);
        }
    }
}

/// Field goals made over attempted, or zero when nothing was attempted.
#[must_use]
pub fn field_goal_pct(made: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        return 0.0;
    }

    f64::from(made) / f64::from(attempted)
}

/// Points over twice the true shooting attempts, or zero when there were none.
#[must_use]
pub fn true_shooting_pct(points: u32, field_goals_attempted: u32, free_throws_attempted: u32) -> f64 {
    let attempts = 2.0 * (f64::from(field_goals_attempted) + FREE_THROW_WEIGHT * f64::from(free_throws_attempted));
    if attempts <= 0.0 {
        return 0.0;
    }

    f64::from(points) / attempts
}

/// Opponent code from a matchup string.
///
/// The opponent is always the last token, whether the game was at home (`DAL vs. LAC`)
/// or away (`DAL @ LAC`).
#[must_use]
pub fn opposing_team(matchup: &str) -> &str {
    matchup.split_whitespace().next_back().unwrap_or_default()
}

/// Convert one raw game into canonical form, with derived metrics and rounded floats.
///
/// # Errors
///
/// Returns an error if the game's date cannot be parsed.
pub fn normalize_game(raw: &RawGameRecord) -> Result<NormalizedGameStat> {
    let date = standardize_date_to_iso(&raw.game_date).map_err(|e| e.enrich_with(|| format!("normalizing game '{}'", raw.matchup)))?;

    let mut stat = NormalizedGameStat {
        date,
        points: f64::from(raw.points),
        rebounds: f64::from(raw.rebounds),
        assists: f64::from(raw.assists),
        minutes: raw.minutes,
        fg_pct: field_goal_pct(raw.field_goals_made, raw.field_goals_attempted),
        ts_pct: true_shooting_pct(raw.points, raw.field_goals_attempted, raw.free_throws_attempted),
        opposing_team: opposing_team(&raw.matchup).to_string(),
        season: raw.season.clone(),
    };

    stat.lower_precision();
    Ok(stat)
}

/// Convert a table of raw games, keeping their order.
///
/// # Errors
///
/// Returns an error if any game's date cannot be parsed.
pub fn normalize_games(raw: &[RawGameRecord]) -> Result<Vec<NormalizedGameStat>> {
    raw.iter().map(normalize_game).collect()
}

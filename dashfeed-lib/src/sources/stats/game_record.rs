use core::fmt::{Display, Formatter};

/// League-wide identifier of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u64);

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One game played, as the stats source reports it
#[derive(Debug, Clone, PartialEq)]
pub struct RawGameRecord {
    /// Game date in the source's format, e.g. `OCT 31, 2024`
    pub game_date: String,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub minutes: f64,
    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub free_throws_attempted: u32,
    /// Home/away and opponent, e.g. `DAL vs. LAC` or `DAL @ LAC`
    pub matchup: String,
    /// Season the game belongs to, e.g. `2023-24`
    pub season: String,
}

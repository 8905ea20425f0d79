//! Pure transforms from raw source records into canonical rows
//!
//! Nothing here performs I/O. Raw game records become [`NormalizedGameStat`] rows with
//! ISO-8601 dates, derived shooting percentages, and floats rounded to
//! [`DECIMAL_PLACES`] decimals. Raw commit dates become one [`CommitCountRecord`] per
//! calendar date.
//!
//! Date standardization and precision lowering are exposed on their own so they can be
//! reused and tested independently of the row types.

mod commit_counts;
mod dates;
mod game_stats;
mod precision;

pub use commit_counts::{CommitCountRecord, aggregate_commit_dates};
pub use game_stats::{NormalizedGameStat, normalize_games};

#[cfg(any(debug_assertions, test))]
pub use dates::standardize_date_to_iso;
#[cfg(any(debug_assertions, test))]
pub use game_stats::{field_goal_pct, normalize_game, opposing_team, true_shooting_pct};
#[cfg(any(debug_assertions, test))]
pub use precision::{DECIMAL_PLACES, round_to_precision};

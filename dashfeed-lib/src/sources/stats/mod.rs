//! Game-by-game box scores from the NBA stats API.

mod client;
mod game_record;
mod provider;

pub use game_record::{PlayerId, RawGameRecord};
pub use provider::Provider;

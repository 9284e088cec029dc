pub mod api;
pub mod dates;
pub mod grouping;
pub mod models;

pub use api::{fetch_games, fetch_team_games, select_games};
pub use grouping::{group_games_by_date, sort_by_start_time};
pub use models::{Game, GamesByDate};

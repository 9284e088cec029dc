pub mod game;

pub use game::Game;

use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Games bucketed by calendar date. Buckets iterate in date order; games keep
/// the order they were discovered in.
pub type GamesByDate = BTreeMap<NaiveDate, Vec<Game>>;

use crate::data_fetcher::dates::{compare_start_times, parse_game_date};
use crate::data_fetcher::models::{Game, GamesByDate};
use tracing::warn;

/// Buckets games by calendar date.
///
/// Every game with a parsable date lands in exactly one bucket; games whose
/// date cannot be parsed are logged and left out. Within a bucket games keep
/// their input order.
pub fn group_games_by_date(games: &[Game]) -> GamesByDate {
    let mut games_by_date = GamesByDate::new();
    for game in games {
        match parse_game_date(&game.date) {
            Ok(date) => games_by_date.entry(date).or_default().push(game.clone()),
            Err(e) => warn!("Skipping game {}: {e}", game.id),
        }
    }
    games_by_date
}

/// Sorts games by start time, keeping the input order for equal times.
pub fn sort_by_start_time(games: &mut [Game]) {
    games.sort_by(|a, b| compare_start_times(&a.start_time, &b.start_time));
}

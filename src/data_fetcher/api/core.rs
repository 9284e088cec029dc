use crate::config::Config;
use crate::data_fetcher::api::fetch_utils::fetch;
use crate::data_fetcher::api::urls::build_team_matches_url;
use crate::data_fetcher::dates::parse_game_date;
use crate::data_fetcher::models::Game;
use crate::error::AppError;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

/// Fetches every game of one team from the league service.
#[instrument(skip(client, config))]
pub async fn fetch_team_games(
    client: &Client,
    config: &Config,
    team: &str,
) -> Result<Vec<Game>, AppError> {
    let url = build_team_matches_url(&config.api_base_url, &config.team_guid_prefix, team);
    let games: Vec<Game> = fetch(client, &url).await?;
    debug!("Fetched {} games for team {team}", games.len());
    Ok(games)
}

/// Keeps the games played at one of `venue_ids` on `date`.
///
/// Games with an unparsable date are logged and skipped.
pub fn select_games(games: Vec<Game>, venue_ids: &[String], date: NaiveDate) -> Vec<Game> {
    games
        .into_iter()
        .filter(|game| {
            if !venue_ids.contains(&game.venue_id) {
                debug!("No match for venue {} (game {})", game.venue_id, game.id);
                return false;
            }
            match parse_game_date(&game.date) {
                Ok(game_date) => game_date == date,
                Err(e) => {
                    warn!("Skipping game {}: {e}", game.id);
                    false
                }
            }
        })
        .collect()
}

/// Fetches the games of `teams` played at one of `venue_ids` on `date`.
///
/// Teams are queried one after another. A team whose request or payload
/// fails is logged by name and contributes nothing; the remaining teams are
/// still queried. The result keeps team order and may be empty.
#[instrument(skip(client, config, teams, venue_ids))]
pub async fn fetch_games(
    client: &Client,
    config: &Config,
    teams: &[String],
    venue_ids: &[String],
    date: NaiveDate,
) -> Vec<Game> {
    let mut games = Vec::new();

    for team in teams {
        match fetch_team_games(client, config, team).await {
            Ok(team_games) => {
                let selected = select_games(team_games, venue_ids, date);
                for game in &selected {
                    info!(
                        "Game on selected date: {} {} vs {} at {}",
                        game.id, game.home_team, game.away_team, game.venue_name
                    );
                }
                games.extend(selected);
            }
            Err(e) => error!("Error fetching games for team {team}: {e}"),
        }
    }

    info!("Total games found: {}", games.len());
    games
}

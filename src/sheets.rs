//! Validated request to generated documents
//!
//! Shared by the web form and the one-shot command line mode: validate the
//! selection, fetch the matching games, then render both document types.

use crate::config::Config;
use crate::constants::messages;
use crate::data_fetcher::dates::parse_form_date;
use crate::data_fetcher::{fetch_games, group_games_by_date};
use crate::documents::{
    DocumentRenderer, generate_changing_room_document, generate_referee_documents,
};
use crate::error::AppError;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, instrument};

/// Raw form input. Teams and venues may repeat; the date is `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SheetForm {
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub venues: Vec<String>,
    #[serde(default)]
    pub date: String,
}

/// A selection that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRequest {
    pub teams: Vec<String>,
    /// League identifiers of the selected venues.
    pub venue_ids: Vec<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetOutcome {
    /// Nothing matched the selection; no files were written.
    NoGames,
    Generated {
        changing_room: String,
        referee_payments: Vec<String>,
    },
}

impl SheetOutcome {
    /// All generated file names, changing-room sheet first.
    pub fn file_names(&self) -> Vec<&str> {
        match self {
            SheetOutcome::NoGames => Vec::new(),
            SheetOutcome::Generated {
                changing_room,
                referee_payments,
            } => std::iter::once(changing_room.as_str())
                .chain(referee_payments.iter().map(String::as_str))
                .collect(),
        }
    }
}

impl SheetForm {
    /// Checks the selection in form order and maps venue names to ids.
    ///
    /// Errors are [`AppError::InvalidInput`] carrying the message to show.
    /// Venue names the configuration doesn't know are ignored.
    pub fn validate(&self, config: &Config) -> Result<SheetRequest, AppError> {
        let teams: Vec<String> = self
            .teams
            .iter()
            .map(|team| team.trim())
            .filter(|team| !team.is_empty())
            .map(str::to_string)
            .collect();
        if teams.is_empty() {
            return Err(AppError::invalid_input(messages::NO_TEAMS));
        }

        let venues: Vec<String> = self
            .venues
            .iter()
            .map(|venue| venue.trim().to_string())
            .filter(|venue| !venue.is_empty())
            .collect();
        if venues.is_empty() {
            return Err(AppError::invalid_input(messages::NO_VENUES));
        }

        if self.date.trim().is_empty() {
            return Err(AppError::invalid_input(messages::NO_DATE));
        }
        let date = parse_form_date(&self.date)
            .map_err(|_| AppError::invalid_input(messages::INVALID_DATE))?;

        Ok(SheetRequest {
            teams,
            venue_ids: config.venue_ids_for_names(&venues),
            date,
        })
    }
}

/// Fetches the selected games and renders both document types into the
/// output directory.
#[instrument(skip(client, config, renderer))]
pub async fn generate_sheets(
    client: &Client,
    config: &Config,
    renderer: &dyn DocumentRenderer,
    request: &SheetRequest,
) -> Result<SheetOutcome, AppError> {
    let games = fetch_games(
        client,
        config,
        &request.teams,
        &request.venue_ids,
        request.date,
    )
    .await;

    if games.is_empty() {
        info!("No games found for {}", request.date);
        return Ok(SheetOutcome::NoGames);
    }

    let output_dir = Path::new(&config.output_dir);
    if !output_dir.exists() {
        tokio::fs::create_dir_all(output_dir).await?;
    }

    let games_by_date = group_games_by_date(&games);
    let changing_room =
        generate_changing_room_document(config, renderer, &games_by_date, request.date).await?;
    let referee_payments = generate_referee_documents(config, renderer, &games_by_date).await?;

    Ok(SheetOutcome::Generated {
        changing_room,
        referee_payments,
    })
}

//! Matchday sheets for a basketball club
//!
//! This library fetches a club's games from the league web service and turns
//! the games of one day into printable documents: a changing-room sheet and
//! one referee payment form per game.
//!
//! # Examples
//!
//! ```rust,no_run
//! use matchday_sheets::config::Config;
//! use matchday_sheets::data_fetcher::api::create_http_client_with_timeout;
//! use matchday_sheets::documents::HtmlRenderer;
//! use matchday_sheets::error::AppError;
//! use matchday_sheets::sheets::{SheetForm, generate_sheets};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load(None).await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let form = SheetForm {
//!         teams: vec!["HSE++1".to_string()],
//!         venues: vec!["Lubbeek".to_string()],
//!         date: "2025-02-01".to_string(),
//!     };
//!     let request = form.validate(&config)?;
//!
//!     let outcome = generate_sheets(&client, &config, &HtmlRenderer, &request).await?;
//!     for file_name in outcome.file_names() {
//!         println!("{file_name}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod documents;
pub mod error;
pub mod logging;
pub mod sheets;
pub mod testing_utils;
pub mod web;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{Game, GamesByDate, fetch_games, group_games_by_date};
pub use documents::team_names::split_team_name;
pub use error::AppError;
pub use sheets::{SheetForm, SheetOutcome, SheetRequest, generate_sheets};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

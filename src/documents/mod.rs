//! Printable documents built from grouped games

pub mod changing_room;
pub mod html;
pub mod referee_payment;
pub mod renderer;
pub mod rooms;
pub mod team_names;

pub use changing_room::generate_changing_room_document;
pub use referee_payment::generate_referee_documents;
pub use renderer::{CommandRenderer, DocumentRenderer, HtmlRenderer, renderer_from_config};

use crate::constants::layout::UNKNOWN_VENUE;
use crate::data_fetcher::dates::format_file_date;
use crate::data_fetcher::models::Game;
use chrono::NaiveDate;

/// Venue name shown for a group of games: the first game's venue.
pub fn venue_label(games: &[Game]) -> &str {
    games
        .first()
        .map(|game| game.venue_name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_VENUE)
}

/// Output file name `{prefix}-{venue}-{DD-MM-YYYY}.{extension}`.
///
/// Every venue character outside `[A-Za-z0-9._-]` becomes an underscore, so
/// the name stays inside the output directory and can be used as a URL path
/// segment without encoding.
pub fn document_file_name(prefix: &str, venue: &str, date: NaiveDate, extension: &str) -> String {
    let venue: String = venue
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{prefix}-{venue}-{}.{extension}", format_file_date(date))
}

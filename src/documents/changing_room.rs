//! Changing-room assignment sheet
//!
//! One landscape A4 page listing every game of the selected date in start
//! time order, with the rooms each side uses and the club colours
//! alternating per row.

use crate::config::Config;
use crate::constants::file_prefixes;
use crate::constants::layout::{SINGLE_LINE_HEIGHT, WRAPPED_LINE_HEIGHT};
use crate::data_fetcher::grouping::sort_by_start_time;
use crate::data_fetcher::models::{Game, GamesByDate};
use crate::documents::html::{escape_html, html_document};
use crate::documents::renderer::DocumentRenderer;
use crate::documents::rooms::assign_rooms;
use crate::documents::team_names::{team_name_html, wraps};
use crate::documents::{document_file_name, venue_label};
use crate::error::AppError;
use chrono::NaiveDate;
use std::fmt::Write;
use std::path::Path;
use tracing::{info, instrument};

const TITLE: &str = "KLEEDKAMERS BASKET";
const SHARED_ROOMS_NOTICE: &str = "Gedeelde kleedkamers: Blijf niet langer aanwezig dan nodig.";
const TAKE_BELONGINGS_NOTICE: &str = "Neem AL je spullen mee naar de wedstrijd!";

const PAGE_STYLE: &str = r#"@page {
    size: A4 landscape;
    margin: 0;
}
body {
    margin: 0;
    padding-bottom: 100px;
    font-family: Impact, sans-serif;
}"#;

/// Line height of a row: reduced when either team name needs two lines.
pub fn row_line_height(game: &Game) -> &'static str {
    if wraps(&game.home_team) || wraps(&game.away_team) {
        WRAPPED_LINE_HEIGHT
    } else {
        SINGLE_LINE_HEIGHT
    }
}

fn render_rows(config: &Config, games: &[Game]) -> String {
    let mut rows = String::new();
    for (index, game) in games.iter().enumerate() {
        let rooms = assign_rooms(config.room_scheme_for(&game.venue_id), index);
        let _ = write!(
            rows,
            r#"
<tr style="border-top: solid 1px #000; border-bottom: solid 1px #000; line-height: {line_height};">
    <td style="width: 5%; color: {home_color};">{home_room}</td>
    <td style="width: 45%; color: {home_color}; border-right: 1px solid black;">{home_team}</td>
    <td style="width: 5%; color: {away_color};">{away_room}</td>
    <td style="width: 45%; color: {away_color};">{away_team}</td>
</tr>"#,
            line_height = row_line_height(game),
            home_color = rooms.home_color,
            away_color = rooms.away_color,
            home_room = rooms.home_room,
            away_room = rooms.away_room,
            home_team = team_name_html(&game.home_team),
            away_team = team_name_html(&game.away_team),
        );
    }
    rows
}

/// Builds the sheet markup for games already sorted by start time.
pub fn render_changing_room_markup(config: &Config, games: &[Game], date: NaiveDate) -> String {
    let venue = venue_label(games);
    let body = format!(
        r#"<div style="page-break-before: always;">
    <div style="display: flex; justify-content: left; margin-top: 25px; margin-bottom: 25px;">
        <img src="{logo}" alt="Club Logo" style="width:100px; margin-top: 10px;"/>
        <div style="text-align: center; color: red; font-size: 108px; font-weight: bold;">&nbsp; {TITLE}</div>
    </div>
    <table style="width: 100%; border-collapse: collapse; text-align: center; font-weight: bold; font-size: 45px;">{rows}
    </table>
</div>
<div style="page-break-after: always; position: relative;">
    <div style="position: relative; height: 100px; page-break-inside: avoid;">
        <div style="text-align: left; color: grey; font-size: 10px; font-weight: bold; position: absolute; bottom: 0; right: 10px;">
            {date} - {venue}
        </div>
        <div style="text-align: center; color: red; font-size: 40px; font-weight: bold; position: absolute; bottom: 40px; left: 50px;">
            {SHARED_ROOMS_NOTICE}<br />
        </div>
        <div style="text-align: center; color: red; font-size: 40px; font-weight: bold; position: absolute; bottom: 0; left: 50px;">
            {TAKE_BELONGINGS_NOTICE}
        </div>
    </div>
</div>"#,
        logo = escape_html(&config.logo_url),
        rows = render_rows(config, games),
        date = date.format("%Y-%m-%d"),
        venue = escape_html(venue),
    );

    html_document(
        r#"<link href="https://fonts.googleapis.com/css2?family=Impact&display=swap" rel="stylesheet">"#,
        PAGE_STYLE,
        &body,
    )
}

/// Renders the changing-room sheet for `date` into the output directory and
/// returns the file name.
///
/// Fails with [`AppError::NoGamesForDate`] when there is no bucket for the
/// date.
#[instrument(skip(config, renderer, games_by_date))]
pub async fn generate_changing_room_document(
    config: &Config,
    renderer: &dyn DocumentRenderer,
    games_by_date: &GamesByDate,
    date: NaiveDate,
) -> Result<String, AppError> {
    let mut games = games_by_date
        .get(&date)
        .filter(|games| !games.is_empty())
        .cloned()
        .ok_or_else(|| AppError::NoGamesForDate {
            date: date.to_string(),
        })?;
    sort_by_start_time(&mut games);

    let markup = render_changing_room_markup(config, &games, date);
    let file_name = document_file_name(
        file_prefixes::CHANGING_ROOM,
        venue_label(&games),
        date,
        renderer.extension(),
    );
    renderer
        .render(&markup, &Path::new(&config.output_dir).join(&file_name))
        .await?;

    info!("Changing room sheet generated successfully: {file_name}");
    Ok(file_name)
}

//! Referee payment forms, one page per game and one document per date

use crate::config::Config;
use crate::constants::file_prefixes;
use crate::data_fetcher::grouping::sort_by_start_time;
use crate::data_fetcher::models::{Game, GamesByDate};
use crate::documents::html::{escape_html, html_document};
use crate::documents::renderer::DocumentRenderer;
use crate::documents::{document_file_name, venue_label};
use crate::error::AppError;
use std::fmt::Write;
use std::path::Path;
use tracing::{info, instrument};

const PAGE_STYLE: &str = "body { font-family: Arial, sans-serif; }";

const AMOUNT_CELL: &str = r#"<td style="text-align: center; padding: 15px 0; width: 120px; border: solid 1px #000;"> , </td>"#;

fn letterhead(config: &Config) -> String {
    config
        .organization
        .letterhead
        .iter()
        .map(|line| {
            format!(
                r#"<div style="font-size: 12px; color: gray;">{}</div>"#,
                escape_html(line)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ")
}

fn officials_row(label: &str, name: Option<&str>) -> String {
    format!(
        r#"<tr>
        <td style="padding: 15px 0;">{label}</td>
        <td style="padding: 15px 0;">{name}</td>
        {AMOUNT_CELL}
        {AMOUNT_CELL}
        {AMOUNT_CELL}
    </tr>"#,
        name = escape_html(name.unwrap_or_default()),
    )
}

fn signature_block(name: Option<&str>, placeholder: &str, extra_style: &str) -> String {
    format!(
        r#"<div style="display: inline-block; width: 43.5%; border: 1px solid black; height: 120px; padding: 10px; text-align: left; vertical-align: bottom;{extra_style}">
            Voor ontvangst
            <br style="margin-bottom: 10px;" />
            <span style="display: block; margin-top: 80px;">{signer}</span>
        </div>"#,
        signer = escape_html(name.unwrap_or(placeholder)),
    )
}

/// Builds the payment form page of one game.
pub fn render_game_page(config: &Config, game: &Game) -> String {
    let first = game.first_official();
    let second = game.second_official();

    format!(
        r#"<div style="page-break-after: always;">
    <div style="display: flex; justify-content: space-between;">
        <img src="{logo}" alt="Club Logo" style="width:100px;"/>
        <div>
            {letterhead}
        </div>
    </div>
    <h2 style="text-align: center; font-weight: bold; text-decoration: underline;">Wedstrijd Basketbal Vlaanderen</h2>
    <table style="width: 100%; border-collapse: collapse; line-height: 2;">
        <tr><td>Wedstrijd nummer:</td><td>{id}</td></tr>
        <tr><td>Datum:</td><td>{date}</td></tr>
        <tr><td>Start uur:</td><td>{start}</td></tr>
        <tr><td>Thuisploeg:</td><td>{home}</td></tr>
        <tr><td>Uitploeg:</td><td>{away}</td></tr>
    </table>
    <h2 style="text-align: center; font-weight: bold; text-decoration: underline;">Vergoeding scheidsrechters</h2>
    <table style="width: 100%; border-collapse: collapse;">
    <tr>
        <th></th>
        <th>Naam</th>
        <th style="text-align: center; width: 120px;">Reiskosten</th>
        <th style="text-align: center; width: 120px;">Vergoeding</th>
        <th style="text-align: center; width: 120px;">Totaal</th>
    </tr>
    {first_row}
    {second_row}
    </table>
    <div style="text-align: center; margin-top: 30px;">
        {first_signature}
        {second_signature}
    </div>
    <div style="text-align: center; color: gray; font-size: 8px; position: absolute; bottom: 0px; width: 100%;">
        {footer}
    </div>
</div>"#,
        logo = escape_html(&config.logo_url),
        letterhead = letterhead(config),
        id = escape_html(&game.id),
        date = escape_html(&game.date),
        start = escape_html(&game.start_time),
        home = escape_html(&game.home_team),
        away = escape_html(&game.away_team),
        first_row = officials_row("1e", first),
        second_row = officials_row("2e", second),
        first_signature = signature_block(first, "Scheidsrechter 1:", ""),
        second_signature = signature_block(second, "Scheidsrechter 2:", " margin-left: 5%;"),
        footer = escape_html(&config.organization.footer),
    )
}

/// Builds the document for one date: a page per game in the given order.
pub fn render_referee_markup(config: &Config, games: &[Game]) -> String {
    let mut pages = String::new();
    for game in games {
        let _ = writeln!(pages, "{}", render_game_page(config, game));
    }
    html_document("", PAGE_STYLE, &pages)
}

/// Renders one referee payment document per date bucket and returns the
/// file names in date order.
#[instrument(skip_all)]
pub async fn generate_referee_documents(
    config: &Config,
    renderer: &dyn DocumentRenderer,
    games_by_date: &GamesByDate,
) -> Result<Vec<String>, AppError> {
    let mut file_names = Vec::with_capacity(games_by_date.len());

    for (date, games) in games_by_date {
        if games.is_empty() {
            continue;
        }
        let mut games = games.clone();
        sort_by_start_time(&mut games);

        let markup = render_referee_markup(config, &games);
        let file_name = document_file_name(
            file_prefixes::REFEREE_PAYMENT,
            venue_label(&games),
            *date,
            renderer.extension(),
        );
        renderer
            .render(&markup, &Path::new(&config.output_dir).join(&file_name))
            .await?;

        info!("Referee payment forms generated successfully for {date}: {file_name}");
        file_names.push(file_name);
    }

    Ok(file_names)
}

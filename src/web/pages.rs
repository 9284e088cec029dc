//! HTML pages served by the web interface

use crate::config::Config;
use crate::documents::html::{escape_html, html_document};
use crate::sheets::SheetOutcome;
use std::fmt::Write;

const PAGE_STYLE: &str = r#"body { font-family: Arial, sans-serif; margin: 2em auto; max-width: 40em; }
.alert { padding: 0.75em 1em; margin-bottom: 1em; border-radius: 4px; }
.alert-danger { background: #f8d7da; color: #721c24; }
.alert-info { background: #d1ecf1; color: #0c5460; }
fieldset { margin-bottom: 1em; }
label { display: inline-block; min-width: 8em; }"#;

/// Category of a message shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Danger,
    Info,
}

impl FlashLevel {
    fn css_class(self) -> &'static str {
        match self {
            FlashLevel::Danger => "alert-danger",
            FlashLevel::Info => "alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Danger,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            message: message.into(),
        }
    }
}

fn checkboxes(name: &str, values: impl Iterator<Item = impl AsRef<str>>) -> String {
    let mut html = String::new();
    for value in values {
        let value = escape_html(value.as_ref());
        let _ = writeln!(
            html,
            r#"<label><input type="checkbox" name="{name}" value="{value}"> {value}</label>"#
        );
    }
    html
}

/// The selection form, optionally with a message above it.
pub fn form_page(config: &Config, flash: Option<&Flash>) -> String {
    let alert = flash
        .map(|flash| {
            format!(
                r#"<div class="alert {}">{}</div>"#,
                flash.level.css_class(),
                escape_html(&flash.message)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"<h1>Wedstrijdbladen</h1>
{alert}
<form method="post" action="/">
<fieldset><legend>Teams</legend>
{teams}</fieldset>
<fieldset><legend>Locaties</legend>
{venues}</fieldset>
<fieldset><legend>Datum</legend>
<input type="date" name="date">
</fieldset>
<button type="submit">Genereer</button>
</form>"#,
        teams = checkboxes("teams", config.teams.iter()),
        venues = checkboxes("venues", config.venues.iter().map(|venue| &venue.name)),
    );

    html_document("<title>Wedstrijdbladen</title>", PAGE_STYLE, &body)
}

/// Download links for every generated document.
pub fn result_page(outcome: &SheetOutcome) -> String {
    let mut links = String::new();
    for file_name in outcome.file_names() {
        let name = escape_html(file_name);
        let _ = writeln!(links, r#"<li><a href="/download/{name}">{name}</a></li>"#);
    }

    let body = format!(
        r#"<h1>Documenten</h1>
<ul>
{links}</ul>
<p><a href="/">Terug</a></p>"#
    );

    html_document("<title>Documenten</title>", PAGE_STYLE, &body)
}

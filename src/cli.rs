use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Matchday sheets for a basketball club
///
/// Fetches the club's games from the league web service and prints the
/// changing-room sheet and the referee payment forms for a game day.
///
/// By default a small web server is started where teams, venues and a date
/// can be picked. With --date the documents are generated once and the
/// program exits.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Path to the configuration file. Defaults to the platform config directory.
    #[arg(long = "config", short = 'c', help_heading = "Configuration")]
    pub config: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Address the web server listens on, e.g. 0.0.0.0:5000
    #[arg(long = "bind", short = 'b', help_heading = "Server")]
    pub bind: Option<String>,

    /// Directory generated documents are written to and served from
    #[arg(long = "output-dir", short = 'o', help_heading = "Server")]
    pub output_dir: Option<String>,

    /// Generate documents for this date (YYYY-MM-DD) and exit without
    /// starting the server.
    #[arg(long = "date", short = 'd', help_heading = "One-shot")]
    pub date: Option<String>,

    /// Team to include in one-shot mode. Repeat for more teams; defaults to
    /// every configured team.
    #[arg(long = "team", short = 't', help_heading = "One-shot")]
    pub teams: Vec<String>,

    /// Venue name to include in one-shot mode. Repeat for more venues;
    /// defaults to every configured venue.
    #[arg(long = "venue", short = 'v', help_heading = "One-shot")]
    pub venues: Vec<String>,

    /// Enable debug logging for this crate.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// True when documents should be generated once instead of serving.
    pub fn is_one_shot(&self) -> bool {
        self.date.is_some()
    }
}

//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers, fixed strings and default
//! settings so that layout rules and configuration defaults live in one place.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default address the web server binds to
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Default directory for generated documents, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "generated_pdfs";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "matchday_sheets.log";

/// League web service defaults
pub mod league {
    /// Base URL of the league data service
    pub const API_BASE_URL: &str = "http://vblcb.wisseq.eu/VBLCB_WebService/data";

    /// Club prefix prepended to every team identifier in the `teamguid` query
    pub const TEAM_GUID_PREFIX: &str = "BVBL1447";

    /// Endpoint listing all games of one team
    pub const TEAM_MATCHES_PATH: &str = "TeamMatchesByGuid";
}

/// Accepted date formats
pub mod dates {
    /// Day-month-year, the format the league service normally returns
    pub const DAY_MONTH_YEAR: &str = "%d-%m-%Y";

    /// Year-month-day, used by some records and by the submission form
    pub const YEAR_MONTH_DAY: &str = "%Y-%m-%d";
}

/// Layout rules shared by the generated documents
pub mod layout {
    /// Team names longer than this many characters are wrapped onto two lines
    pub const TEAM_NAME_WRAP_LIMIT: usize = 25;

    /// Marker joining the two lines of a wrapped team name
    pub const LINE_BREAK_MARKER: &str = "<br/>";

    /// Club navy, used for the home side on even rows
    pub const PRIMARY_COLOR: &str = "#002b5c";

    /// Club green, used for the home side on odd rows
    pub const SECONDARY_COLOR: &str = "#96c11f";

    /// Row line height when at least one team name wraps
    pub const WRAPPED_LINE_HEIGHT: &str = "1.25";

    /// Row line height when both team names fit on one line
    pub const SINGLE_LINE_HEIGHT: &str = "2.5";

    /// Fallback when a game carries no venue name
    pub const UNKNOWN_VENUE: &str = "Unknown";
}

/// Environment variable names
pub mod env_vars {
    /// Override for the league service base URL
    pub const API_URL: &str = "MATCHDAY_API_URL";

    /// Override for the output directory
    pub const OUTPUT_DIR: &str = "MATCHDAY_OUTPUT_DIR";

    /// Override for the server bind address
    pub const BIND: &str = "MATCHDAY_BIND";

    /// Override for the log file path
    pub const LOG_FILE: &str = "MATCHDAY_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "MATCHDAY_HTTP_TIMEOUT";
}

/// Messages shown on the form page
pub mod messages {
    pub const NO_TEAMS: &str = "Please select at least one team.";
    pub const NO_VENUES: &str = "Please select at least one venue.";
    pub const NO_DATE: &str = "Please select a date.";
    pub const INVALID_DATE: &str = "Invalid date format.";
    pub const NO_GAMES: &str = "No games found for the selected criteria.";
    /// Prefix of the message shown when rendering fails
    pub const GENERATION_FAILED: &str = "Error generating documents";
}

/// File name prefixes of the generated documents
pub mod file_prefixes {
    pub const CHANGING_ROOM: &str = "Kleedkamer";
    pub const REFEREE_PAYMENT: &str = "Refs";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_colors_are_distinct_hex() {
        assert_ne!(layout::PRIMARY_COLOR, layout::SECONDARY_COLOR);
        for color in [layout::PRIMARY_COLOR, layout::SECONDARY_COLOR] {
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
        }
    }

    #[test]
    fn test_env_var_names_share_prefix() {
        for name in [
            env_vars::API_URL,
            env_vars::OUTPUT_DIR,
            env_vars::BIND,
            env_vars::LOG_FILE,
            env_vars::HTTP_TIMEOUT,
        ] {
            assert!(name.starts_with("MATCHDAY_"), "{name}");
        }
    }
}

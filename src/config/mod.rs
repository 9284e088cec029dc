use crate::constants::{self, env_vars, league};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// How changing rooms are labelled at a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomScheme {
    /// Two room pairs used in turn: home A/B, away 1/2.
    Paired,
    /// Rooms are not numbered at this venue; labels stay empty.
    Unlabeled,
    /// Home side "T", away side "U" on every row.
    #[default]
    Fixed,
}

/// A venue the club plays at. The id is the league's `accGUID`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rooms: RoomScheme,
}

/// Letterhead and footer printed on the referee payment forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationConfig {
    pub letterhead: Vec<String>,
    pub footer: String,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        OrganizationConfig {
            letterhead: vec![
                "Hageland United vzw".to_string(),
                "Grotendries 27".to_string(),
                "3210 Lubbeek".to_string(),
                "BTW: BE 0889.419.625".to_string(),
                "IBAN: BE08 0015 2119 4113".to_string(),
            ],
            footer: "Hageland United vzw | Grotendries 27 - 3210 Lubbeek | BTW: BE0889.419.625 | IBAN: BE08 0015 2119 4113 | RPR Leuven".to_string(),
        }
    }
}

/// External markup-to-PDF converter. Without a command the markup itself is
/// written as printable HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RendererConfig {
    /// Program and arguments; `{output}` is replaced with the target path and
    /// the markup is written to the program's stdin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the league data service, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Club prefix prepended to team identifiers in the team query.
    #[serde(default = "default_team_guid_prefix")]
    pub team_guid_prefix: String,
    /// Logo shown on every generated page.
    #[serde(default = "default_logo_url")]
    pub logo_url: String,
    /// Directory generated documents are written to and served from.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Address the web server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Teams offered in the form, as suffixes of the club prefix.
    #[serde(default = "default_teams")]
    pub teams: Vec<String>,
    #[serde(default)]
    pub organization: OrganizationConfig,
    #[serde(default)]
    pub renderer: RendererConfig,
    #[serde(default = "default_venues")]
    pub venues: Vec<VenueConfig>,
}

fn default_api_base_url() -> String {
    league::API_BASE_URL.to_string()
}

fn default_team_guid_prefix() -> String {
    league::TEAM_GUID_PREFIX.to_string()
}

fn default_logo_url() -> String {
    "https://hagelandunited.be/wp-content/uploads/2022/06/HagelandUnited_150x150.png".to_string()
}

fn default_output_dir() -> String {
    constants::DEFAULT_OUTPUT_DIR.to_string()
}

fn default_bind_address() -> String {
    constants::DEFAULT_BIND_ADDRESS.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_teams() -> Vec<String> {
    [
        "HSE++1", "HSE++2", "DSE++1", "DSE++2", "J18++1", "J18++2", "J16++1", "J16++2", "G14++1",
        "G14++2", "G12++1", "G12++2", "G10++1", "G10++2", "G08++1", "M16++1", "M16++2", "M14++1",
        "M14++2", "M12++1",
    ]
    .iter()
    .map(|team| team.to_string())
    .collect()
}

fn default_venues() -> Vec<VenueConfig> {
    vec![
        VenueConfig {
            id: "BVBL500419".to_string(),
            name: "Boutersem".to_string(),
            rooms: RoomScheme::Paired,
        },
        VenueConfig {
            id: "BVBL500075".to_string(),
            name: "Lubbeek".to_string(),
            rooms: RoomScheme::Unlabeled,
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            team_guid_prefix: default_team_guid_prefix(),
            logo_url: default_logo_url(),
            output_dir: default_output_dir(),
            bind_address: default_bind_address(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            teams: default_teams(),
            organization: OrganizationConfig::default(),
            renderer: RendererConfig::default(),
            venues: default_venues(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the default config file
    /// location when no path is given. A missing default file yields the
    /// built-in defaults; a missing explicit file is an error.
    /// Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `MATCHDAY_API_URL` - Override league service base URL
    /// - `MATCHDAY_OUTPUT_DIR` - Override output directory
    /// - `MATCHDAY_BIND` - Override server bind address
    /// - `MATCHDAY_LOG_FILE` - Override log file path
    /// - `MATCHDAY_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load(path: Option<&str>) -> Result<Self, AppError> {
        let mut config = match path {
            Some(path) => Self::load_from_path(path).await?,
            None => {
                let config_path = get_config_path();
                if Path::new(&config_path).exists() {
                    Self::load_from_path(&config_path).await?
                } else {
                    Config::default()
                }
            }
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_url) = std::env::var(env_vars::API_URL) {
            self.api_base_url = api_url;
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Ok(bind) = std::env::var(env_vars::BIND) {
            self.bind_address = bind;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub fn display(&self, source: &str) {
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{source}");
        println!("────────────────────────────────────");
        println!("League API:");
        println!("{}", self.api_base_url);
        println!("Team prefix: {}", self.team_guid_prefix);
        println!("HTTP Timeout: {} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Teams:");
        println!("{}", self.teams.join(", "));
        println!("────────────────────────────────────");
        println!("Venues:");
        for venue in &self.venues {
            println!("{} ({}, rooms: {:?})", venue.name, venue.id, venue.rooms);
        }
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", self.output_dir);
        println!("Renderer:");
        match &self.renderer.command {
            Some(command) => println!("{}", command.join(" ")),
            None => println!("HTML (built-in)"),
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{}/{}", get_log_dir_path(), constants::LOG_FILE_NAME);
            println!("(Default location)");
        }
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it doesn't exist. A trailing slash on the API URL is
    /// dropped so URLs can be joined with a single `/`.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let mut normalized = self.clone();
        normalized.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        let content = toml::to_string_pretty(&normalized)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without applying
    /// environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn venue_by_id(&self, venue_id: &str) -> Option<&VenueConfig> {
        self.venues.iter().find(|venue| venue.id == venue_id)
    }

    /// Maps venue display names to their identifiers. Unknown names are ignored.
    pub fn venue_ids_for_names(&self, names: &[String]) -> Vec<String> {
        self.venues
            .iter()
            .filter(|venue| names.iter().any(|name| *name == venue.name))
            .map(|venue| venue.id.clone())
            .collect()
    }

    /// Room scheme for a venue id; venues missing from the configuration use
    /// the fixed T/U labels.
    pub fn room_scheme_for(&self, venue_id: &str) -> RoomScheme {
        self.venue_by_id(venue_id)
            .map(|venue| venue.rooms)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_base_url = "https://api.example.com/data"
output_dir = "/srv/sheets"
teams = ["HSE++1", "DSE++1"]

[[venues]]
id = "V1"
name = "Main Hall"
rooms = "paired"

[[venues]]
id = "V2"
name = "Small Hall"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com/data");
        assert_eq!(config.output_dir, "/srv/sheets");
        assert_eq!(config.teams, vec!["HSE++1", "DSE++1"]);
        assert_eq!(config.venues.len(), 2);
        assert_eq!(config.venues[0].rooms, RoomScheme::Paired);
        assert_eq!(config.venues[1].rooms, RoomScheme::Fixed);
        // Unspecified fields fall back to defaults
        assert_eq!(config.team_guid_prefix, league::TEAM_GUID_PREFIX);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert!(config.renderer.command.is_none());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let mut original = Config::default();
        original.api_base_url = "https://api.example.com/data/".to_string();
        original.log_file_path = Some("/custom/log/path".to_string());
        original.renderer.command = Some(vec![
            "weasyprint".to_string(),
            "-".to_string(),
            "{output}".to_string(),
        ]);

        original.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.api_base_url, "https://api.example.com/data");
        assert_eq!(loaded.log_file_path, original.log_file_path);
        assert_eq!(loaded.renderer, original.renderer);
        assert_eq!(loaded.venues, original.venues);
        assert_eq!(loaded.teams, original.teams);
        assert_eq!(loaded.organization, original.organization);
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(!toml_string.contains("log_file_path"));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(deserialized.log_file_path, None);
        assert_eq!(deserialized.venues, config.venues);
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let invalid_content = r#"
api_base_url = "https://api.example.com"
teams = ["A", "unclosed
"#;
        let result: Result<Config, _> = toml::from_str(invalid_content);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_explicit_missing_config_is_an_error() {
        let result = Config::load(Some("/nonexistent/path/config.toml")).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_venue_lookups() {
        let config = Config::default();

        assert_eq!(
            config.venue_ids_for_names(&["Lubbeek".to_string(), "Nowhere".to_string()]),
            vec!["BVBL500075".to_string()]
        );
        assert!(config.venue_ids_for_names(&[]).is_empty());
        assert_eq!(config.room_scheme_for("BVBL500419"), RoomScheme::Paired);
        assert_eq!(config.room_scheme_for("BVBL500075"), RoomScheme::Unlabeled);
        assert_eq!(config.room_scheme_for("BVBL999999"), RoomScheme::Fixed);
        assert_eq!(
            config.venue_by_id("BVBL500419").map(|v| v.name.as_str()),
            Some("Boutersem")
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_environment_variable_override() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy().to_string();

        tokio::fs::write(
            &config_path,
            "api_base_url = \"https://file.example.com\"\noutput_dir = \"/file/out\"\n",
        )
        .await
        .unwrap();

        unsafe {
            std::env::set_var(env_vars::API_URL, "https://env.example.com");
            std::env::set_var(env_vars::OUTPUT_DIR, "/env/out");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "7");
        }

        let result = Config::load(Some(&config_path_str)).await;

        unsafe {
            std::env::remove_var(env_vars::API_URL);
            std::env::remove_var(env_vars::OUTPUT_DIR);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        let config = result.unwrap();
        assert_eq!(config.api_base_url, "https://env.example.com");
        assert_eq!(config.output_dir, "/env/out");
        assert_eq!(config.http_timeout_seconds, 7);

        // load_from_path does not look at the environment
        let file_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(file_config.api_base_url, "https://file.example.com");
    }
}

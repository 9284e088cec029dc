use super::Config;
use crate::error::AppError;
use std::collections::HashSet;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must use http:// or https://
/// - At least one team and one venue must be configured
/// - Venue ids and venue names must be unique and non-empty
/// - Output directory cannot be empty
/// - HTTP timeout must be positive
/// - A renderer command, when given, needs a program name
/// - If log file path is provided, it cannot be empty and its parent directory must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !config.api_base_url.starts_with("http://") && !config.api_base_url.starts_with("https://")
    {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    if config.teams.is_empty() {
        return Err(AppError::config_error("At least one team must be configured"));
    }

    if config.teams.iter().any(|team| team.trim().is_empty()) {
        return Err(AppError::config_error("Team identifiers cannot be empty"));
    }

    if config.venues.is_empty() {
        return Err(AppError::config_error(
            "At least one venue must be configured",
        ));
    }

    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for venue in &config.venues {
        if venue.id.is_empty() || venue.name.is_empty() {
            return Err(AppError::config_error(
                "Venue id and name cannot be empty",
            ));
        }
        if !ids.insert(venue.id.as_str()) {
            return Err(AppError::config_error(format!(
                "Duplicate venue id '{}'",
                venue.id
            )));
        }
        if !names.insert(venue.name.as_str()) {
            return Err(AppError::config_error(format!(
                "Duplicate venue name '{}'",
                venue.name
            )));
        }
    }

    if config.output_dir.is_empty() {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(command) = &config.renderer.command
        && command.first().is_none_or(|program| program.trim().is_empty())
    {
        return Err(AppError::config_error(
            "Renderer command must name a program",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

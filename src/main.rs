// src/main.rs
use clap::Parser;
use matchday_sheets::cli::Args;
use matchday_sheets::config::Config;
use matchday_sheets::constants::messages;
use matchday_sheets::data_fetcher::api::create_http_client_with_timeout;
use matchday_sheets::documents::{DocumentRenderer, renderer_from_config};
use matchday_sheets::error::AppError;
use matchday_sheets::logging::setup_logging;
use matchday_sheets::sheets::{SheetForm, SheetOutcome, generate_sheets};
use matchday_sheets::web::{self, AppState};
use reqwest::Client;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

/// Generates the documents for `--date` and prints where they were written.
async fn run_once(
    args: &Args,
    config: &Config,
    client: &Client,
    renderer: &dyn DocumentRenderer,
) -> Result<(), AppError> {
    let teams = if args.teams.is_empty() {
        config.teams.clone()
    } else {
        args.teams.clone()
    };
    let venues = if args.venues.is_empty() {
        config.venues.iter().map(|venue| venue.name.clone()).collect()
    } else {
        args.venues.clone()
    };
    let form = SheetForm {
        teams,
        venues,
        date: args.date.clone().unwrap_or_default(),
    };

    let request = form.validate(config)?;
    match generate_sheets(client, config, renderer, &request).await? {
        SheetOutcome::NoGames => println!("{}", messages::NO_GAMES),
        outcome => {
            for file_name in outcome.file_names() {
                println!("{}", Path::new(&config.output_dir).join(file_name).display());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).await?;
    if let Some(bind) = &args.bind {
        config.bind_address = bind.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    config.validate()?;

    if args.list_config {
        let source = match &args.config {
            Some(path) => path.clone(),
            None if Path::new(&Config::get_config_path()).exists() => Config::get_config_path(),
            None => format!("{} (not found, using defaults)", Config::get_config_path()),
        };
        config.display(&source);
        return Ok(());
    }

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    info!("Logs are being written to: {log_file_path}");

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let renderer = renderer_from_config(&config.renderer)?;

    if args.is_one_shot() {
        return run_once(&args, &config, &client, renderer.as_ref()).await;
    }

    let state = AppState {
        config: Arc::new(config),
        client,
        renderer,
    };
    web::run(state, shutdown_signal()).await
}

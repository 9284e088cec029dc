use crate::constants::messages;
use crate::error::AppError;
use crate::sheets::{SheetForm, SheetOutcome, generate_sheets};
use crate::web::AppState;
use crate::web::pages::{Flash, form_page, result_page};
use axum::Json;
use axum::extract::{Path as UrlPath, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::Form;
use serde_json::{Value, json};
use std::path::Path;
use tracing::{error, info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(form_page(&state.config, None))
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<SheetForm>) -> Response {
    let request = match form.validate(&state.config) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected submission: {e}");
            let page = form_page(&state.config, Some(&Flash::danger(e.to_string())));
            return (StatusCode::BAD_REQUEST, Html(page)).into_response();
        }
    };

    match generate_sheets(
        &state.client,
        &state.config,
        state.renderer.as_ref(),
        &request,
    )
    .await
    {
        Ok(SheetOutcome::NoGames) => {
            Html(form_page(&state.config, Some(&Flash::info(messages::NO_GAMES)))).into_response()
        }
        Ok(outcome) => {
            info!("Generated {}", outcome.file_names().join(", "));
            Html(result_page(&outcome)).into_response()
        }
        Err(e) => {
            error!("Error generating documents: {e}");
            let message = format!("{}: {e}", messages::GENERATION_FAILED);
            let page = form_page(&state.config, Some(&Flash::danger(message)));
            (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
        }
    }
}

/// Rejects names that could address anything outside the output directory.
fn validate_download_name(filename: &str) -> Result<(), AppError> {
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
        || filename.contains('\0')
    {
        return Err(AppError::InvalidFileName(filename.to_string()));
    }
    Ok(())
}

fn content_type_for(filename: &str) -> &'static str {
    match Path::new(filename).extension().and_then(|ext| ext.to_str()) {
        Some("pdf") => "application/pdf",
        Some("html") => "text/html; charset=utf-8",
        _ => "application/octet-stream",
    }
}

pub async fn download(
    State(state): State<AppState>,
    UrlPath(filename): UrlPath<String>,
) -> Result<Response, AppError> {
    validate_download_name(&filename)?;

    let path = Path::new(&state.config.output_dir).join(&filename);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::FileNotFound(filename));
        }
        Err(e) => return Err(e.into()),
    };

    let headers = [
        (header::CONTENT_TYPE, content_type_for(&filename).to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

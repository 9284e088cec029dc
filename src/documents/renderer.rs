//! Turning document markup into files on disk
//!
//! Generation builds HTML markup; a [`DocumentRenderer`] decides what ends up
//! in the output directory. The built-in [`HtmlRenderer`] writes printable
//! HTML. [`CommandRenderer`] hands the markup to an external converter such as
//! `weasyprint - {output}` and produces PDF files.

use crate::config::RendererConfig;
use crate::error::AppError;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, error, instrument, warn};

/// Placeholder in a renderer command that is replaced with the output path.
pub const OUTPUT_PLACEHOLDER: &str = "{output}";

#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// File extension of the produced documents, without the dot.
    fn extension(&self) -> &'static str;

    /// Renders `markup` into the file at `path`.
    async fn render(&self, markup: &str, path: &Path) -> Result<(), AppError>;
}

/// Writes the markup as a printable HTML file.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

#[async_trait]
impl DocumentRenderer for HtmlRenderer {
    fn extension(&self) -> &'static str {
        "html"
    }

    async fn render(&self, markup: &str, path: &Path) -> Result<(), AppError> {
        tokio::fs::write(path, markup)
            .await
            .map_err(|e| AppError::render_error(file_label(path), e.to_string()))
    }
}

/// Pipes the markup to an external markup-to-PDF converter.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    program: String,
    args: Vec<String>,
}

impl CommandRenderer {
    /// Builds a renderer from a program followed by its arguments.
    pub fn new(command: &[String]) -> Result<Self, AppError> {
        let (program, args) = command
            .split_first()
            .filter(|(program, _)| !program.trim().is_empty())
            .ok_or_else(|| AppError::config_error("Renderer command must name a program"))?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn args_for(&self, path: &Path) -> Vec<String> {
        let output = path.to_string_lossy();
        self.args
            .iter()
            .map(|arg| arg.replace(OUTPUT_PLACEHOLDER, &output))
            .collect()
    }
}

#[async_trait]
impl DocumentRenderer for CommandRenderer {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    #[instrument(skip(self, markup), fields(program = %self.program))]
    async fn render(&self, markup: &str, path: &Path) -> Result<(), AppError> {
        let file = file_label(path);
        let args = self.args_for(path);
        debug!("Running renderer: {} {}", self.program, args.join(" "));

        let result = run_converter(&self.program, &args, markup).await;
        if let Err(message) = result {
            error!("Renderer failed for {file}: {message}");
            // Never leave a truncated document behind for download
            if path.exists()
                && let Err(e) = tokio::fs::remove_file(path).await
            {
                error!("Failed to remove partial output {file}: {e}");
            }
            return Err(AppError::render_error(file, message));
        }

        Ok(())
    }
}

async fn run_converter(program: &str, args: &[String], markup: &str) -> Result<(), String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("failed to start {program}: {e}"))?;

    let stdin = child.stdin.take();
    let write_markup = async move {
        if let Some(mut stdin) = stdin {
            // A converter may exit before reading all input; its exit status decides
            if let Err(e) = stdin.write_all(markup.as_bytes()).await {
                warn!("Failed to write markup to {program}: {e}");
            }
            // Dropping stdin closes it and signals end of input
        }
    };

    // stderr must be drained while the markup is still being written
    let ((), output) = tokio::join!(write_markup, child.wait_with_output());
    let output = output.map_err(|e| format!("failed to wait for {program}: {e}"))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(format!("{} ({})", output.status, stderr.trim()))
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Builds the renderer selected by the configuration.
pub fn renderer_from_config(
    config: &RendererConfig,
) -> Result<Arc<dyn DocumentRenderer>, AppError> {
    match &config.command {
        Some(command) => Ok(Arc::new(CommandRenderer::new(command)?)),
        None => Ok(Arc::new(HtmlRenderer)),
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    load_settings, HttpAnalysisService, SubmissionController, UiState, UploadFile,
};
use report::{ExportSink, FileSink, GeneratedAt, ReportRenderer, ViewerSink};
use shared::domain::{Industry, Language};
use tracing_subscriber::EnvFilter;

mod text;

#[derive(Parser, Debug)]
#[command(name = "finhealth", about = "Submit a financial document for analysis")]
struct Args {
    /// CSV, Excel or PDF document to analyze.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Services, Manufacturing, Retail or Technology.
    #[arg(long)]
    industry: Option<Industry>,
    /// en, ta, hi or ml.
    #[arg(long)]
    lang: Option<Language>,
    #[arg(long)]
    analysis_url: Option<String>,
    /// Request timeout in seconds; 0 waits forever.
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Write the English report here (a file path or an existing directory).
    #[arg(long)]
    export: Option<PathBuf>,
    /// Open the exported report in the system viewer for printing.
    #[arg(long, requires = "export")]
    open: bool,
    /// Print the raw analysis JSON instead of the dashboard.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = &args.analysis_url {
        settings.set_analysis_url(url)?;
    }
    if let Some(secs) = args.timeout_secs {
        settings.request_timeout_secs = secs;
    }

    let mut state = UiState::new(
        args.industry.unwrap_or(settings.default_industry),
        args.lang.unwrap_or(settings.default_language),
    );
    if let Some(path) = &args.file {
        let file = UploadFile::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        state.select_file(file)?;
    }

    let service = HttpAnalysisService::from_settings(&settings)
        .context("failed to build HTTP client")?;
    match settings.request_timeout() {
        Some(timeout) => tracing::debug!(?timeout, "request timeout configured"),
        None => tracing::warn!("request timeout disabled; an unresponsive backend blocks forever"),
    }
    let mut controller = SubmissionController::new(service, state);

    let result = match controller.submit().await {
        Ok(result) => result.clone(),
        Err(err) => {
            let notice = err.user_notice();
            return Err(anyhow::Error::new(err).context(notice));
        }
    };

    let renderer = ReportRenderer::default();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let view = renderer.dashboard(&result, controller.state.selected_language());
        print!("{}", text::render(&view));
    }

    if let Some(target) = args.export {
        let document = renderer.document(&result, GeneratedAt::now());
        let sink = if target.is_dir() {
            FileSink::in_dir(&target, &document)
        } else {
            FileSink::new(target)
        };
        if args.open {
            ViewerSink::new(sink.clone()).deliver(&document)?;
        } else {
            sink.deliver(&document)?;
        }
        println!("English report written to {}", sink.path().display());
    }

    Ok(())
}

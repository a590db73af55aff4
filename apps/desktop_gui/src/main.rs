use std::path::PathBuf;

use clap::Parser;
use client_core::{load_settings, HttpAnalysisService};
use crossbeam_channel::bounded;
use eframe::egui;
use report::ReportRenderer;
use shared::domain::{Industry, Language};
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{FinHealthApp, StartupConfig};

const APP_NAME: &str = "FinHealth AI";

#[derive(Parser, Debug)]
#[command(name = "finhealth-gui", about = "FinHealth AI desktop dashboard")]
struct Args {
    #[arg(long)]
    analysis_url: Option<String>,
    /// Request timeout in seconds; 0 waits forever.
    #[arg(long)]
    timeout_secs: Option<u64>,
    #[arg(long)]
    industry: Option<Industry>,
    #[arg(long)]
    lang: Option<Language>,
    /// Font with Tamil, Devanagari and Malayalam glyphs.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = &args.analysis_url {
        settings.set_analysis_url(url)?;
    }
    if let Some(secs) = args.timeout_secs {
        settings.request_timeout_secs = secs;
    }
    if let Some(industry) = args.industry {
        settings.default_industry = industry;
    }
    if let Some(language) = args.lang {
        settings.default_language = language;
    }
    let startup = StartupConfig {
        settings,
        font: args.font,
    };

    let service = HttpAnalysisService::from_settings(&startup.settings)?;
    tracing::info!(url = service.analysis_url(), "analysis service configured");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, service);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1180.0, 820.0])
            .with_min_inner_size([860.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            if let Some(font) = &startup.font {
                if let Err(err) = ui::theme::install_fallback_font(&cc.egui_ctx, font) {
                    tracing::warn!(font = %font.display(), "failed to load fallback font: {err}");
                }
            }
            Ok(Box::new(FinHealthApp::new(
                &startup,
                ReportRenderer::default(),
                cmd_tx,
                ui_rx,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop GUI failed: {err}"))
}

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use client_core::{ClientSettings, NoticeSeverity, UiState, UploadFile};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use report::{
    render_controls, ExportError, ExportSink, FileSink, GeneratedAt, ReportRenderer, ViewerSink,
};
use shared::domain::{Industry, Language};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{category_label, UiEvent};
use crate::controller::orchestration::start_analysis;
use crate::ui::{dashboard, theme};

const UPLOAD_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls", "pdf"];

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub settings: ClientSettings,
    /// TTF/OTF used as glyph fallback for the Indic label tables.
    pub font: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

pub struct FinHealthApp {
    state: UiState,
    renderer: ReportRenderer,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    analysis_url: String,
    status: String,
    status_banner: Option<StatusBanner>,
    theme_applied: bool,
}

impl FinHealthApp {
    pub fn new(
        startup: &StartupConfig,
        renderer: ReportRenderer,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        let settings = &startup.settings;
        Self {
            state: UiState::new(settings.default_industry, settings.default_language),
            renderer,
            cmd_tx,
            ui_rx,
            analysis_url: settings.analysis_url.clone(),
            status: "Backend worker starting...".to_string(),
            status_banner: None,
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::AnalysisFinished(outcome) => {
                    match self.state.complete_submission(outcome) {
                        Ok(result) => {
                            self.status = format!(
                                "Analysis complete: {} ({}/100)",
                                result.display.risk_level, result.metrics.credit_score
                            );
                        }
                        Err(err) => {
                            self.status =
                                format!("{} error: {err}", category_label(err.category()));
                        }
                    }
                }
                UiEvent::BackendUnavailable(message) => {
                    self.status = "Backend worker unavailable".to_string();
                    self.status_banner = Some(StatusBanner {
                        severity: StatusBannerSeverity::Error,
                        message,
                    });
                }
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.theme_applied {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = theme::visuals_for_palette(&self.renderer.theme().dashboard);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.interact_size = egui::vec2(40.0, 30.0);
        ctx.set_style(style);
        self.theme_applied = true;
    }

    fn pick_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Financial documents", UPLOAD_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        match UploadFile::read(&path) {
            Ok(file) => {
                let name = file.name.clone();
                if let Err(err) = self.state.select_file(file) {
                    self.status = err.user_notice();
                } else {
                    self.status = format!("Selected {name}");
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "failed to read upload: {err}");
                self.status_banner = Some(StatusBanner {
                    severity: StatusBannerSeverity::Error,
                    message: format!("Could not read {}: {err}", path.display()),
                });
            }
        }
    }

    fn export_report(&mut self) {
        let Some(result) = self.state.last_result() else {
            return;
        };
        let document = self.renderer.document(result, GeneratedAt::now());
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(document.suggested_file_name())
            .add_filter("HTML report", &["html"])
            .save_file()
        else {
            return;
        };

        let sink = ViewerSink::new(FileSink::new(path));
        self.status_banner = Some(export_banner(sink.path(), sink.deliver(&document)));
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        let controls = render_controls(
            self.state.selected_file().map(|file| file.name.as_str()),
            self.state.is_submitting(),
            self.state.selected_language(),
        );
        let palette = &self.renderer.theme().dashboard;

        ui.horizontal(|ui| {
            ui.vertical(|ui| dashboard::show_header(ui, &controls.header, palette));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut language = self.state.selected_language();
                egui::ComboBox::from_id_salt("language_select")
                    .selected_text(language.native_name())
                    .show_ui(ui, |ui| {
                        for option in Language::ALL {
                            ui.selectable_value(&mut language, *option, option.native_name());
                        }
                    });
                if language != self.state.selected_language() {
                    tracing::debug!(%language, "display language changed");
                    self.state.set_language(language);
                }
            });
        });
        ui.add_space(10.0);

        let mut choose_clicked = false;
        let mut analyze_clicked = false;
        ui.horizontal(|ui| {
            let upload_text = egui::RichText::new(&controls.upload_label);
            let upload_text = if controls.file_selected {
                upload_text.color(theme::color(palette.positive)).strong()
            } else {
                upload_text
            };
            choose_clicked = ui
                .add_enabled(controls.analyze_enabled, egui::Button::new(upload_text))
                .clicked();

            let mut industry = self.state.selected_industry();
            egui::ComboBox::from_id_salt("industry_select")
                .selected_text(industry.to_string())
                .show_ui(ui, |ui| {
                    for option in Industry::ALL {
                        ui.selectable_value(&mut industry, *option, option.to_string());
                    }
                });
            if industry != self.state.selected_industry() {
                self.state.set_industry(industry);
            }

            analyze_clicked = ui
                .add_enabled(
                    controls.analyze_enabled,
                    egui::Button::new(egui::RichText::new(controls.analyze_label).strong()),
                )
                .clicked();
            if self.state.is_submitting() {
                ui.spinner();
            }
        });

        if choose_clicked {
            self.pick_file();
        }
        if analyze_clicked {
            start_analysis(&self.cmd_tx, &mut self.state);
        }
    }

    fn show_banners(&mut self, ui: &mut egui::Ui) {
        let notice = self.state.notice().map(|notice| {
            let severity = match notice.severity {
                NoticeSeverity::Advisory => StatusBannerSeverity::Info,
                NoticeSeverity::Error => StatusBannerSeverity::Error,
            };
            (severity, notice.message.clone())
        });
        if let Some((severity, message)) = notice {
            if banner(ui, severity, &message) {
                self.state.dismiss_notice();
            }
        }
        if let Some(status_banner) = &self.status_banner {
            if banner(ui, status_banner.severity, &status_banner.message) {
                self.status_banner = None;
            }
        }
    }

    fn show_main(&mut self, ctx: &egui::Context) {
        let language = self.state.selected_language();
        let footer = report::dashboard::footer(report::Labels::for_language(language));

        egui::TopBottomPanel::top("controls_panel")
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(20, 14)),
            )
            .show(ctx, |ui| {
                self.show_controls(ui);
                self.show_banners(ui);
            });

        egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(egui::RichText::new(footer).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(egui::RichText::new(&self.status).weak());
                    ui.small(egui::RichText::new(&self.analysis_url).weak());
                });
            });
        });

        let view = self
            .state
            .last_result()
            .map(|result| self.renderer.dashboard(result, language));
        let export_enabled = !self.state.is_submitting();
        let mut export_clicked = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match &view {
                Some(view) => {
                    export_clicked = dashboard::show_dashboard(
                        ui,
                        view,
                        &self.renderer.theme().dashboard,
                        export_enabled,
                    );
                }
                None => {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(report::Labels::for_language(language).upload_idle)
                                .weak(),
                        );
                    });
                }
            });
        });

        if export_clicked {
            self.export_report();
        }
    }
}

fn export_banner(path: &Path, outcome: Result<(), ExportError>) -> StatusBanner {
    match outcome {
        Ok(()) => StatusBanner {
            severity: StatusBannerSeverity::Info,
            message: format!(
                "Report saved to {} and opened for printing.",
                path.display()
            ),
        },
        Err(err) => {
            tracing::warn!("report export failed: {err}");
            StatusBanner {
                severity: StatusBannerSeverity::Error,
                message: err.to_string(),
            }
        }
    }
}

/// Returns true when dismissed.
fn banner(ui: &mut egui::Ui, severity: StatusBannerSeverity, message: &str) -> bool {
    let (fill, stroke) = match severity {
        StatusBannerSeverity::Info => (
            egui::Color32::from_rgb(38, 62, 99),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(88, 122, 178)),
        ),
        StatusBannerSeverity::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
        ),
    };

    let mut dismissed = false;
    ui.add_space(8.0);
    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    dismissed
}

impl eframe::App for FinHealthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);
        self.show_main(ctx);
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use client_core::{Phase, SubmitError};
    use crossbeam_channel::bounded;
    use shared::protocol::{AnalysisResult, CanonicalReport, DisplayReport, FinancialMetrics};

    use super::*;

    fn result(display_risk: &str) -> AnalysisResult {
        AnalysisResult {
            metrics: FinancialMetrics {
                revenue: 1_000_000.0,
                expense: 750_000.0,
                profit: 250_000.0,
                profit_margin: 25.0,
                credit_score: 78,
                working_capital: 250_000.0,
            },
            canonical: CanonicalReport {
                risk_level: "Low Risk".to_string(),
                benchmark_status: "AI Analyzed".to_string(),
                cost_suggestions: vec!["Reduce overhead".to_string()],
                investor_report: "Solid performance.".to_string(),
            },
            display: DisplayReport {
                risk_level: display_risk.to_string(),
                benchmark_status: None,
                cost_suggestions: Vec::new(),
                investor_report: String::new(),
            },
        }
    }

    fn app() -> (FinHealthApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(16);
        let mut startup = StartupConfig::default();
        startup.settings.default_language = Language::Ta;
        let app = FinHealthApp::new(&startup, ReportRenderer::default(), cmd_tx, ui_rx);
        (app, cmd_rx, ui_tx)
    }

    fn submit(app: &mut FinHealthApp) {
        app.state
            .select_file(UploadFile::new("q1.pdf", b"%PDF".to_vec()))
            .expect("select");
        start_analysis(&app.cmd_tx, &mut app.state);
    }

    #[test]
    fn starts_with_configured_language() {
        let (app, _cmd_rx, _ui_tx) = app();
        assert_eq!(app.state.selected_language(), Language::Ta);
        assert_eq!(app.state.phase(), Phase::Idle);
    }

    #[test]
    fn finished_analysis_lowers_flag_and_stores_result() {
        let (mut app, cmd_rx, ui_tx) = app();
        submit(&mut app);
        let BackendCommand::Analyze { request } = cmd_rx.try_recv().expect("queued");
        assert_eq!(request.language, Language::Ta);

        ui_tx
            .send(UiEvent::AnalysisFinished(Ok(result("குறைந்த இடர்"))))
            .expect("event");
        app.process_ui_events();

        assert_eq!(app.state.phase(), Phase::DisplayingResult);
        assert!(app.status.contains("குறைந்த இடர்"), "{}", app.status);
        assert!(!app.status.contains("Low Risk"));
    }

    #[test]
    fn failed_analysis_keeps_previous_dashboard() {
        let (mut app, _cmd_rx, ui_tx) = app();
        submit(&mut app);
        ui_tx
            .send(UiEvent::AnalysisFinished(Ok(result("first"))))
            .expect("event");
        app.process_ui_events();

        start_analysis(&app.cmd_tx, &mut app.state);
        ui_tx
            .send(UiEvent::AnalysisFinished(Err(SubmitError::TimedOut)))
            .expect("event");
        app.process_ui_events();

        assert!(!app.state.is_submitting());
        assert_eq!(
            app.state.last_result().map(|r| r.display.risk_level.as_str()),
            Some("first")
        );
        assert!(app.status.starts_with("Connection error"));
        assert_eq!(
            app.state.notice().map(|n| n.severity),
            Some(NoticeSeverity::Error)
        );
    }

    #[test]
    fn export_banner_reports_open_failure_as_error() {
        let path = Path::new("/tmp/finhealth-report.html");

        let saved = export_banner(path, Ok(()));
        assert_eq!(saved.severity, StatusBannerSeverity::Info);
        assert!(saved.message.contains("/tmp/finhealth-report.html"));

        let failed = export_banner(
            path,
            Err(ExportError::Open {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no viewer"),
            }),
        );
        assert_eq!(failed.severity, StatusBannerSeverity::Error);
        assert!(failed.message.contains("no viewer"));
    }

    #[test]
    fn backend_startup_failure_raises_error_banner() {
        let (mut app, _cmd_rx, ui_tx) = app();
        ui_tx
            .send(UiEvent::BackendUnavailable("no runtime".to_string()))
            .expect("event");
        app.process_ui_events();

        let banner = app.status_banner.expect("banner");
        assert_eq!(banner.severity, StatusBannerSeverity::Error);
        assert_eq!(banner.message, "no runtime");
    }
}

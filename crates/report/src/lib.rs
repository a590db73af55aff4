//! Pure transformations of an analysis result: a localized dashboard view
//! tree and an English export document. No I/O except through `ExportSink`.

use shared::{domain::Language, protocol::AnalysisResult};

pub mod dashboard;
pub mod document;
pub mod export;
pub mod format;
pub mod labels;
pub mod theme;

pub use dashboard::{render_controls, ControlsView, DashboardView, RiskTone};
pub use document::{ExportDocument, GeneratedAt};
pub use export::{ExportError, ExportSink, FileSink, ViewerSink};
pub use labels::Labels;
pub use theme::Theme;

/// Renders with an injected theme.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    theme: Theme,
}

impl ReportRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn dashboard(&self, result: &AnalysisResult, language: Language) -> DashboardView {
        dashboard::build(result, language, &self.theme)
    }

    pub fn document(&self, result: &AnalysisResult, generated_at: GeneratedAt) -> ExportDocument {
        document::build(result, generated_at, &self.theme.print)
    }
}

pub fn render_dashboard(result: &AnalysisResult, language: Language) -> DashboardView {
    ReportRenderer::default().dashboard(result, language)
}

pub fn render_document(result: &AnalysisResult, generated_at: GeneratedAt) -> ExportDocument {
    ReportRenderer::default().document(result, generated_at)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

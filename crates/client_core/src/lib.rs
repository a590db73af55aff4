use async_trait::async_trait;
use shared::protocol::AnalysisResult;
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod state;
pub mod transport;

pub use config::{load_settings, ClientSettings, SettingsError};
pub use error::SubmitError;
pub use state::{AnalysisRequest, Notice, NoticeSeverity, Phase, UiState, UploadFile};
pub use transport::HttpAnalysisService;

/// The remote analysis backend. Implementations perform exactly one request
/// per call and never retry.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, SubmitError>;
}

#[async_trait]
impl<S: AnalysisService + ?Sized> AnalysisService for std::sync::Arc<S> {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, SubmitError> {
        (**self).analyze(request).await
    }
}

/// Owns the session state and drives a submission end to end.
pub struct SubmissionController<S: AnalysisService> {
    service: S,
    pub state: UiState,
}

impl<S: AnalysisService> SubmissionController<S> {
    pub fn new(service: S, state: UiState) -> Self {
        Self { service, state }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Validates the selection, issues a single request and applies its
    /// outcome. On failure `state.last_result()` is unchanged.
    pub async fn submit(&mut self) -> Result<&AnalysisResult, SubmitError> {
        let request = self.state.begin_submission()?;
        let file_name = request.file.name.clone();

        let outcome = self.service.analyze(request).await;
        match &outcome {
            Ok(result) => info!(
                file = %file_name,
                credit_score = result.metrics.credit_score,
                risk = %result.canonical.risk_level,
                "analysis completed"
            ),
            Err(err) => warn!(
                file = %file_name,
                category = ?err.category(),
                "analysis failed: {err}"
            ),
        }
        self.state.complete_submission(outcome)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

//! UI/backend events and banner classification for the desktop GUI.

use client_core::SubmitError;
use shared::{error::ErrorCategory, protocol::AnalysisResult};

pub enum UiEvent {
    Info(String),
    /// Outcome of one `BackendCommand::Analyze`.
    AnalysisFinished(Result<AnalysisResult, SubmitError>),
    /// The worker could not start; no command will ever be answered.
    BackendUnavailable(String),
}

pub fn category_label(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::Input => "Input",
        ErrorCategory::Transport => "Connection",
        ErrorCategory::Rejected => "Rejected",
        ErrorCategory::Service => "Service",
        ErrorCategory::Malformed => "Malformed response",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_kind_gets_a_distinct_banner_label() {
        let errors = [
            SubmitError::NoFileSelected,
            SubmitError::Unreachable("refused".to_string()),
            SubmitError::Rejected {
                status: 400,
                message: "File error".to_string(),
            },
            SubmitError::ServiceFailure {
                status: 502,
                message: "bad gateway".to_string(),
            },
            SubmitError::MalformedResponse("eof".to_string()),
        ];
        let labels: Vec<_> = errors
            .iter()
            .map(|err| category_label(err.category()))
            .collect();
        let mut unique = labels.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());
    }
}

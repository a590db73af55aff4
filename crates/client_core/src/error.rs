use shared::error::{ContractViolation, ErrorCategory};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("an analysis request is already in flight")]
    AlreadySubmitting,
    #[error("selected file cannot be uploaded: {0}")]
    InvalidUpload(String),
    #[error("analysis service unreachable: {0}")]
    Unreachable(String),
    #[error("analysis request timed out")]
    TimedOut,
    #[error("analysis service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("analysis service failed ({status}): {message}")]
    ServiceFailure { status: u16, message: String },
    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),
}

impl SubmitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SubmitError::NoFileSelected
            | SubmitError::AlreadySubmitting
            | SubmitError::InvalidUpload(_) => ErrorCategory::Input,
            SubmitError::Unreachable(_) | SubmitError::TimedOut => ErrorCategory::Transport,
            SubmitError::Rejected { .. } => ErrorCategory::Rejected,
            SubmitError::ServiceFailure { .. } => ErrorCategory::Service,
            SubmitError::MalformedResponse(_) => ErrorCategory::Malformed,
        }
    }

    /// Message shown to the user. Kept short; the `Display` text carries the
    /// details for logs.
    pub fn user_notice(&self) -> String {
        match self {
            SubmitError::NoFileSelected => "Please select a file first!".to_string(),
            SubmitError::AlreadySubmitting => {
                "An analysis is already running; wait for it to finish.".to_string()
            }
            SubmitError::InvalidUpload(reason) => {
                format!("The selected file cannot be uploaded: {reason}")
            }
            SubmitError::Unreachable(_) => {
                "Connection failed. Ensure backend is running.".to_string()
            }
            SubmitError::TimedOut => "The analysis service did not respond in time.".to_string(),
            SubmitError::Rejected { message, .. } => {
                format!("The analysis service rejected this file: {message}")
            }
            SubmitError::ServiceFailure { status, .. } => {
                format!("The analysis service failed ({status}). Please retry.")
            }
            SubmitError::MalformedResponse(_) => {
                "The analysis service returned malformed data.".to_string()
            }
        }
    }

    /// True for failures caught before any request was issued.
    pub fn is_local(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmitError::TimedOut
        } else if err.is_decode() {
            SubmitError::MalformedResponse(err.to_string())
        } else {
            SubmitError::Unreachable(err.to_string())
        }
    }
}

impl From<ContractViolation> for SubmitError {
    fn from(value: ContractViolation) -> Self {
        SubmitError::MalformedResponse(value.to_string())
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(value: serde_json::Error) -> Self {
        SubmitError::MalformedResponse(value.to_string())
    }
}

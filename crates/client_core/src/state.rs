//! Interaction state of one analysis session and its reducer-style transitions.
//!
//! The state is owned by a single flow (the UI thread in the desktop app, the
//! controller in the CLI). Network I/O never happens here; `begin_submission`
//! hands out the request and `complete_submission` folds the outcome back in.

use std::{fmt, fs, path::Path};

use shared::{
    domain::{Industry, Language},
    protocol::AnalysisResult,
};

use crate::error::SubmitError;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A document picked by the user, loaded into memory at selection time.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = mime_guess::from_path(&name)
            .first_raw()
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        Self {
            name,
            content_type,
            bytes,
        }
    }

    pub fn read(path: &Path) -> std::io::Result<Self> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(name, bytes))
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Outbound request. Only `UiState::begin_submission` builds one, so a
/// request always carries a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub file: UploadFile,
    pub industry: Industry,
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Advisory,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
}

impl Notice {
    fn from_error(err: &SubmitError) -> Self {
        let severity = if err.is_local() {
            NoticeSeverity::Advisory
        } else {
            NoticeSeverity::Error
        };
        Self {
            severity,
            message: err.user_notice(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileSelected,
    Submitting,
    DisplayingResult,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    selected_file: Option<UploadFile>,
    selected_industry: Industry,
    selected_language: Language,
    is_submitting: bool,
    last_result: Option<AnalysisResult>,
    notice: Option<Notice>,
}

impl UiState {
    pub fn new(industry: Industry, language: Language) -> Self {
        Self {
            selected_industry: industry,
            selected_language: language,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_submitting {
            Phase::Submitting
        } else if self.last_result.is_some() {
            Phase::DisplayingResult
        } else if self.selected_file.is_some() {
            Phase::FileSelected
        } else {
            Phase::Idle
        }
    }

    pub fn selected_file(&self) -> Option<&UploadFile> {
        self.selected_file.as_ref()
    }

    pub fn selected_industry(&self) -> Industry {
        self.selected_industry
    }

    pub fn selected_language(&self) -> Language {
        self.selected_language
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Replaces the selected file. Refused while a request is in flight.
    pub fn select_file(&mut self, file: UploadFile) -> Result<(), SubmitError> {
        if self.is_submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        tracing::debug!(file = %file.name, size = file.size(), "file selected");
        self.selected_file = Some(file);
        Ok(())
    }

    pub fn set_industry(&mut self, industry: Industry) {
        self.selected_industry = industry;
    }

    /// Switching language never touches `last_result`; the dashboard keeps
    /// showing the text the backend localized for the previous request.
    pub fn set_language(&mut self, language: Language) {
        self.selected_language = language;
    }

    /// Validates the preconditions and raises the in-flight flag.
    pub fn begin_submission(&mut self) -> Result<AnalysisRequest, SubmitError> {
        if self.is_submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        let Some(file) = self.selected_file.clone() else {
            let err = SubmitError::NoFileSelected;
            self.notice = Some(Notice::from_error(&err));
            return Err(err);
        };

        self.is_submitting = true;
        self.notice = None;
        Ok(AnalysisRequest {
            file,
            industry: self.selected_industry,
            language: self.selected_language,
        })
    }

    /// Lowers the in-flight flag and applies the outcome. A failure leaves
    /// `last_result` exactly as it was.
    pub fn complete_submission(
        &mut self,
        outcome: Result<AnalysisResult, SubmitError>,
    ) -> Result<&AnalysisResult, SubmitError> {
        self.is_submitting = false;
        match outcome {
            Ok(result) => {
                self.notice = None;
                Ok(self.last_result.insert(result))
            }
            Err(err) => {
                self.notice = Some(Notice::from_error(&err));
                Err(err)
            }
        }
    }
}

//! Backend commands queued from UI to backend worker.

use client_core::AnalysisRequest;

pub enum BackendCommand {
    /// Exactly one request per command. The UI raised the in-flight flag
    /// before queuing it.
    Analyze { request: AnalysisRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Analyze { .. } => "analyze",
        }
    }
}

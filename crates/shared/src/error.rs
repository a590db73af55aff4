use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse grouping of failures, used to pick banner wording in front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Caught locally before any request was issued.
    Input,
    /// The service could not be reached or did not answer in time.
    Transport,
    /// The service answered and refused the submitted file.
    Rejected,
    /// The service failed while processing.
    Service,
    /// The service answered with a body that does not match the contract.
    Malformed,
}

/// Error body returned by the analysis service, e.g. `{"error": "File error"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    pub error: String,
}

impl ServiceErrorBody {
    /// Extracts a human-readable message from a raw error response body.
    /// Falls back to the trimmed body text when it is not the JSON shape.
    pub fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<ServiceErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) => {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "no details provided".to_string()
                } else {
                    trimmed.chars().take(200).collect()
                }
            }
        }
    }
}

/// Broken invariant detected while validating an inbound analysis result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractViolation {
    #[error("field `{field}` is not a finite number")]
    NonFinite { field: &'static str },
    #[error("credit_score {0} is outside [0, 100]")]
    CreditScoreOutOfRange(u32),
}

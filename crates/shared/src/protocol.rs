use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;

/// Risk tag the backend uses for the high-risk class. Branching compares
/// against this, never against the localized label.
pub const HIGH_RISK_SENTINEL: &str = "High Risk";

/// Multipart field names of the analysis request.
pub mod fields {
    pub const FILE: &str = "file";
    pub const INDUSTRY: &str = "industry";
    pub const LANG: &str = "lang";
}

/// Numeric part of the analysis. Amounts are in the caller's currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    pub revenue: f64,
    pub expense: f64,
    pub profit: f64,
    /// Percentage, e.g. `25.0` for 25 %.
    pub profit_margin: f64,
    pub credit_score: u32,
    pub working_capital: f64,
}

/// Language-neutral text. Stable across requested languages; used for export
/// and for branching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalReport {
    #[serde(rename = "risk_level_en")]
    pub risk_level: String,
    #[serde(rename = "benchmark_status_en")]
    pub benchmark_status: String,
    #[serde(rename = "cost_suggestions_en")]
    pub cost_suggestions: Vec<String>,
    #[serde(rename = "investor_report_en")]
    pub investor_report: String,
}

impl CanonicalReport {
    pub fn is_high_risk(&self) -> bool {
        self.risk_level.trim() == HIGH_RISK_SENTINEL
    }
}

/// Backend-localized text for the language the request was made in. Only the
/// on-screen dashboard reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayReport {
    #[serde(rename = "risk_level_display")]
    pub risk_level: String,
    #[serde(
        rename = "benchmark_status_display",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub benchmark_status: Option<String>,
    #[serde(rename = "cost_suggestions_display")]
    pub cost_suggestions: Vec<String>,
    #[serde(rename = "investor_report_display")]
    pub investor_report: String,
}

/// Response of `POST /analyze`. The three parts are flattened on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub metrics: FinancialMetrics,
    #[serde(flatten)]
    pub canonical: CanonicalReport,
    #[serde(flatten)]
    pub display: DisplayReport,
}

impl AnalysisResult {
    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ContractViolation> {
        let m = &self.metrics;
        for (field, value) in [
            ("revenue", m.revenue),
            ("expense", m.expense),
            ("profit", m.profit),
            ("profit_margin", m.profit_margin),
            ("working_capital", m.working_capital),
        ] {
            if !value.is_finite() {
                return Err(ContractViolation::NonFinite { field });
            }
        }
        if m.credit_score > 100 {
            return Err(ContractViolation::CreditScoreOutOfRange(m.credit_score));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND_BODY: &str = r#"{
        "revenue": 1000000.0,
        "expense": 750000.0,
        "profit": 250000.0,
        "working_capital": 250000.0,
        "profit_margin": 25.0,
        "credit_score": 78,
        "risk_level_display": "कम जोखिम",
        "cost_suggestions_display": ["ओवरहेड कम करें"],
        "investor_report_display": "उत्कृष्ट प्रदर्शन।",
        "risk_level_en": "Low Risk",
        "benchmark_status_en": "AI Analyzed",
        "cost_suggestions_en": ["Reduce overhead"],
        "investor_report_en": "Solid performance."
    }"#;

    #[test]
    fn parses_backend_shape_into_grouped_parts() {
        let result: AnalysisResult = serde_json::from_str(BACKEND_BODY).expect("parse");
        assert_eq!(result.metrics.credit_score, 78);
        assert_eq!(result.canonical.risk_level, "Low Risk");
        assert_eq!(result.display.risk_level, "कम जोखिम");
        assert_eq!(result.display.benchmark_status, None);
        assert_eq!(result.canonical.cost_suggestions, vec!["Reduce overhead"]);
        assert!(!result.canonical.is_high_risk());
        result.validate().expect("valid");
    }

    #[test]
    fn missing_canonical_field_is_rejected() {
        let body = BACKEND_BODY.replace(r#""risk_level_en": "Low Risk","#, "");
        assert!(serde_json::from_str::<AnalysisResult>(&body).is_err());
    }

    #[test]
    fn credit_score_above_hundred_violates_contract() {
        let body = BACKEND_BODY.replace(r#""credit_score": 78"#, r#""credit_score": 140"#);
        let result: AnalysisResult = serde_json::from_str(&body).expect("parse");
        assert_eq!(
            result.validate(),
            Err(ContractViolation::CreditScoreOutOfRange(140))
        );
    }
}

//! Localized on-screen dashboard.
//!
//! Text comes from the label table and the backend's `*_display` fields only.
//! The canonical risk tag is consulted for the badge tone and nothing else.

use shared::{domain::Language, protocol::AnalysisResult};

use crate::{
    format,
    labels::Labels,
    theme::{Accent, BadgeColors, Theme},
};

pub const PRODUCT_NAME: &str = "FinHealth AI";
pub const EDITION_BADGE: &str = "ENTERPRISE EDITION";
pub const MISSING_VALUE: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTone {
    High,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskBadge {
    pub text: String,
    pub tone: RiskTone,
    pub colors: BadgeColors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCard {
    pub heading: &'static str,
    pub rows: Vec<DetailRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketCard {
    pub heading: &'static str,
    pub risk_label: &'static str,
    pub risk_badge: RiskBadge,
    pub benchmark_label: &'static str,
    pub benchmark_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationsView {
    pub heading: &'static str,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestorSummaryView {
    pub heading: &'static str,
    pub export_label: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub language: Language,
    pub header: HeaderView,
    pub headline: [MetricCard; 3],
    pub health: HealthCard,
    pub market: MarketCard,
    pub recommendations: RecommendationsView,
    pub investor_summary: InvestorSummaryView,
    pub footer: String,
}

/// Upload box and analyze button, which exist before any result does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsView {
    pub header: HeaderView,
    pub upload_label: String,
    pub file_selected: bool,
    pub analyze_label: &'static str,
    pub analyze_enabled: bool,
    pub footer: String,
}

pub fn header(labels: &Labels) -> HeaderView {
    HeaderView {
        badge: EDITION_BADGE,
        title: PRODUCT_NAME,
        subtitle: labels.subtitle,
    }
}

pub fn footer(labels: &Labels) -> String {
    format!("{PRODUCT_NAME} • 2026 Enterprise Edition • {}", labels.footer)
}

pub fn render_controls(
    file_name: Option<&str>,
    is_submitting: bool,
    language: Language,
) -> ControlsView {
    let labels = Labels::for_language(language);
    ControlsView {
        header: header(labels),
        upload_label: file_name.unwrap_or(labels.upload_idle).to_string(),
        file_selected: file_name.is_some(),
        analyze_label: if is_submitting {
            labels.btn_processing
        } else {
            labels.btn_analyze
        },
        analyze_enabled: !is_submitting,
        footer: footer(labels),
    }
}

pub(crate) fn build(result: &AnalysisResult, language: Language, theme: &Theme) -> DashboardView {
    let labels = Labels::for_language(language);
    let palette = &theme.dashboard;
    let metrics = &result.metrics;
    let display = &result.display;

    let tone = if result.canonical.is_high_risk() {
        RiskTone::High
    } else {
        RiskTone::Low
    };
    let colors = match tone {
        RiskTone::High => palette.high_risk,
        RiskTone::Low => palette.low_risk,
    };

    DashboardView {
        language,
        header: header(labels),
        headline: [
            MetricCard {
                label: labels.l_revenue,
                value: format::currency(metrics.revenue),
                accent: palette.revenue_accent,
            },
            MetricCard {
                label: labels.l_profit,
                value: format::currency(metrics.profit),
                accent: palette.profit_accent,
            },
            MetricCard {
                label: labels.l_score,
                value: format::score(metrics.credit_score),
                accent: palette.score_accent,
            },
        ],
        health: HealthCard {
            heading: labels.h_health,
            rows: vec![
                DetailRow {
                    label: labels.l_expense,
                    value: format::currency(metrics.expense),
                    highlighted: false,
                },
                DetailRow {
                    label: labels.l_margin,
                    value: format::percent(metrics.profit_margin),
                    highlighted: true,
                },
                DetailRow {
                    label: labels.l_wc,
                    value: format::currency(metrics.working_capital),
                    highlighted: false,
                },
            ],
        },
        market: MarketCard {
            heading: labels.h_market,
            risk_label: labels.l_risk,
            risk_badge: RiskBadge {
                text: display.risk_level.clone(),
                tone,
                colors,
            },
            benchmark_label: labels.l_bench,
            benchmark_value: display
                .benchmark_status
                .clone()
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
        },
        recommendations: RecommendationsView {
            heading: labels.h_recs,
            items: display.cost_suggestions.clone(),
        },
        investor_summary: InvestorSummaryView {
            heading: labels.h_report,
            export_label: labels.btn_pdf,
            body: display.investor_report.clone(),
        },
        footer: footer(labels),
    }
}

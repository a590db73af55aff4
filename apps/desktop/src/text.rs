//! Plain-text painter for the dashboard view tree.

use std::fmt::Write as _;

use report::{DashboardView, RiskTone};

pub fn render(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", view.header.title, view.header.badge);
    let _ = writeln!(out, "{}", view.header.subtitle);
    out.push('\n');

    for card in &view.headline {
        let _ = writeln!(out, "{:<24} {}", card.label, card.value);
    }
    out.push('\n');

    let _ = writeln!(out, "{}", view.health.heading);
    for row in &view.health.rows {
        let _ = writeln!(out, "  {:<22} {}", row.label, row.value);
    }
    out.push('\n');

    let market = &view.market;
    let marker = match market.risk_badge.tone {
        RiskTone::High => "(!)",
        RiskTone::Low => "(ok)",
    };
    let _ = writeln!(out, "{}", market.heading);
    let _ = writeln!(
        out,
        "  {:<22} {} {marker}",
        market.risk_label, market.risk_badge.text
    );
    let _ = writeln!(
        out,
        "  {:<22} {}",
        market.benchmark_label, market.benchmark_value
    );
    out.push('\n');

    let _ = writeln!(out, "{}", view.recommendations.heading);
    for (i, item) in view.recommendations.items.iter().enumerate() {
        let _ = writeln!(out, "  {}. {item}", i + 1);
    }
    out.push('\n');

    let _ = writeln!(out, "{}", view.investor_summary.heading);
    for line in view.investor_summary.body.lines() {
        let _ = writeln!(out, "  {line}");
    }
    out.push('\n');
    let _ = writeln!(out, "{}", view.footer);
    out
}

//! English-only printable report.
//!
//! Reads the numeric metrics and the canonical `*_en` fields, never the
//! localized ones, so the output does not depend on the UI language. The
//! generation time is the only non-pure input; it is captured once by the
//! caller and formatted once here.

use chrono::{DateTime, FixedOffset, Local};
use html_escape::encode_text;
use shared::protocol::AnalysisResult;

use crate::{format, theme::PrintPalette};

pub const DOCUMENT_TITLE: &str = "FinHealth Report";
pub const REPORT_HEADING: &str = "FinHealth AI – Executive Intelligence Report";
pub const RECOMMENDATIONS_HEADING: &str = "Strategic Recommendations";
pub const SUMMARY_HEADING: &str = "Investor Executive Summary";

/// Wall-clock instant a document is generated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedAt(pub DateTime<FixedOffset>);

impl GeneratedAt {
    pub fn now() -> Self {
        Self(Local::now().fixed_offset())
    }

    /// `en-US` locale style, e.g. `3/7/2026, 4:05:09 PM`.
    pub fn display(&self) -> String {
        self.0.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub generated_at: GeneratedAt,
    pub html: String,
}

impl ExportDocument {
    pub fn suggested_file_name(&self) -> String {
        format!(
            "finhealth-report-{}.html",
            self.generated_at.0.format("%Y%m%d-%H%M%S")
        )
    }
}

struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
        }
    }

    fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    fn text(&mut self, s: &str) {
        self.buf.push_str(&encode_text(s));
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// The eight scalar rows, in print order.
pub fn metric_rows(result: &AnalysisResult) -> [(&'static str, String); 8] {
    let m = &result.metrics;
    let c = &result.canonical;
    [
        ("Revenue", format::currency(m.revenue)),
        ("Expense", format::currency(m.expense)),
        ("Net Profit", format::currency(m.profit)),
        ("Profit Margin", format::percent(m.profit_margin)),
        ("Credit Score", format::score(m.credit_score)),
        ("Risk Level", c.risk_level.clone()),
        ("Working Capital", format::currency(m.working_capital)),
        ("Industry Benchmark", c.benchmark_status.clone()),
    ]
}

fn stylesheet(p: &PrintPalette) -> String {
    format!(
        "body {{ font-family: {font}; padding: 50px; color: {text}; }}\n\
         .header {{ border-bottom: 2px solid {rule}; padding-bottom: 20px; margin-bottom: 30px; }}\n\
         h1 {{ color: {title}; margin: 0; font-size: 28px; }}\n\
         .meta {{ color: {meta}; font-size: 14px; margin-top: 5px; }}\n\
         table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}\n\
         td, th {{ border: 1px solid {border}; padding: 12px 15px; text-align: left; }}\n\
         tr:nth-child(even) {{ background-color: {zebra}; }}\n\
         .label {{ font-weight: bold; background: {label}; width: 30%; }}\n\
         .profit {{ color: {profit}; font-weight: bold; }}\n\
         .rec-box {{ background: {callout}; padding: 20px; border-radius: 8px; margin-top: 30px; border-left: 5px solid {rule}; }}\n\
         .rec-box li {{ margin-bottom: 8px; }}\n\
         pre.summary {{ white-space: pre-wrap; font-family: {font}; line-height: 1.6; color: {summary}; }}\n",
        font = p.font_stack,
        text = p.text.to_css(),
        rule = p.rule.to_css(),
        title = p.title.to_css(),
        meta = p.meta.to_css(),
        border = p.border.to_css(),
        zebra = p.zebra_fill.to_css(),
        label = p.label_fill.to_css(),
        profit = p.profit.to_css(),
        callout = p.callout_fill.to_css(),
        summary = p.summary_text.to_css(),
    )
}

pub(crate) fn build(
    result: &AnalysisResult,
    generated_at: GeneratedAt,
    palette: &PrintPalette,
) -> ExportDocument {
    let timestamp = generated_at.display();
    let mut w = Html::new();

    w.push("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>");
    w.text(DOCUMENT_TITLE);
    w.push("</title>\n<style>\n");
    w.push(stylesheet(palette));
    w.push("</style>\n</head>\n<body>\n");

    w.push("<div class=\"header\">\n<h1>");
    w.text(REPORT_HEADING);
    w.push("</h1>\n<div class=\"meta\">Generated ");
    w.text(&timestamp);
    w.push("</div>\n</div>\n");

    w.push("<table>\n");
    for (label, value) in metric_rows(result) {
        w.push("<tr><td class=\"label\">");
        w.text(label);
        w.push(if label == "Net Profit" {
            "</td><td class=\"profit\">"
        } else {
            "</td><td>"
        });
        w.text(&value);
        w.push("</td></tr>\n");
    }
    w.push("</table>\n");

    w.push("<div class=\"rec-box\">\n<h3>");
    w.text(RECOMMENDATIONS_HEADING);
    w.push("</h3>\n<ul>\n");
    for suggestion in &result.canonical.cost_suggestions {
        w.push("<li>");
        w.text(suggestion);
        w.push("</li>\n");
    }
    w.push("</ul>\n</div>\n");

    w.push("<h3>");
    w.text(SUMMARY_HEADING);
    w.push("</h3>\n<pre class=\"summary\">");
    w.text(&result.canonical.investor_report);
    w.push("</pre>\n</body>\n</html>\n");

    ExportDocument {
        generated_at,
        html: w.finish(),
    }
}

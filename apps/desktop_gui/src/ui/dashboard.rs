//! Painters for the report view trees.

use eframe::egui;
use report::{
    dashboard::{DetailRow, HeaderView, MetricCard, RiskBadge},
    theme::DashboardPalette,
    DashboardView,
};

use crate::ui::theme::color;

pub fn show_header(ui: &mut egui::Ui, header: &HeaderView, palette: &DashboardPalette) {
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new(header.title).strong().size(26.0));
        egui::Frame::NONE
            .fill(color(palette.revenue_accent.from))
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::symmetric(6, 2))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(header.badge)
                        .small()
                        .strong()
                        .color(egui::Color32::WHITE),
                );
            });
    });
    ui.label(egui::RichText::new(header.subtitle).color(color(palette.muted_text)));
}

fn panel<R>(
    ui: &mut egui::Ui,
    palette: &DashboardPalette,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(color(palette.panel))
        .corner_radius(14.0)
        .inner_margin(egui::Margin::symmetric(16, 14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui)
        })
        .inner
}

fn section_heading(ui: &mut egui::Ui, heading: &str) {
    ui.label(egui::RichText::new(heading).strong().size(17.0));
    ui.add_space(6.0);
}

fn metric_card(ui: &mut egui::Ui, card: &MetricCard) {
    egui::Frame::NONE
        .fill(color(card.accent.from))
        .stroke(egui::Stroke::new(2.0, color(card.accent.to)))
        .corner_radius(14.0)
        .inner_margin(egui::Margin::symmetric(16, 14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(card.label).color(egui::Color32::WHITE));
            ui.label(
                egui::RichText::new(&card.value)
                    .strong()
                    .size(28.0)
                    .color(egui::Color32::WHITE),
            );
        });
}

fn detail_rows(ui: &mut egui::Ui, id: &str, rows: &[DetailRow], palette: &DashboardPalette) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([24.0, 8.0])
        .show(ui, |ui| {
            for row in rows {
                ui.label(egui::RichText::new(row.label).color(color(palette.muted_text)));
                let value = egui::RichText::new(&row.value).strong();
                if row.highlighted {
                    ui.label(value.color(color(palette.positive)));
                } else {
                    ui.label(value);
                }
                ui.end_row();
            }
        });
}

fn risk_badge(ui: &mut egui::Ui, badge: &RiskBadge) {
    egui::Frame::NONE
        .fill(color(badge.colors.fill))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(&badge.text)
                    .strong()
                    .color(color(badge.colors.text)),
            );
        });
}

/// Paints the result area. Returns true when the export button was clicked.
pub fn show_dashboard(
    ui: &mut egui::Ui,
    view: &DashboardView,
    palette: &DashboardPalette,
    export_enabled: bool,
) -> bool {
    ui.columns(3, |columns| {
        for (column, card) in columns.iter_mut().zip(view.headline.iter()) {
            metric_card(column, card);
        }
    });
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        panel(&mut columns[0], palette, |ui| {
            section_heading(ui, view.health.heading);
            detail_rows(ui, "health_rows", &view.health.rows, palette);
        });
        panel(&mut columns[1], palette, |ui| {
            let market = &view.market;
            section_heading(ui, market.heading);
            egui::Grid::new("market_rows")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(market.risk_label).color(color(palette.muted_text)),
                    );
                    risk_badge(ui, &market.risk_badge);
                    ui.end_row();
                    ui.label(
                        egui::RichText::new(market.benchmark_label)
                            .color(color(palette.muted_text)),
                    );
                    ui.label(egui::RichText::new(&market.benchmark_value).strong());
                    ui.end_row();
                });
        });
    });
    ui.add_space(12.0);

    panel(ui, palette, |ui| {
        section_heading(ui, view.recommendations.heading);
        for item in &view.recommendations.items {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("•").color(color(palette.positive)));
                ui.label(item);
            });
        }
    });
    ui.add_space(12.0);

    panel(ui, palette, |ui| {
        let summary = &view.investor_summary;
        let mut export_clicked = false;
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(summary.heading).strong().size(17.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                export_clicked = ui
                    .add_enabled(export_enabled, egui::Button::new(summary.export_label))
                    .clicked();
            });
        });
        ui.add_space(6.0);
        egui::Frame::NONE
            .fill(color(palette.background))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(&summary.body).monospace());
            });
        export_clicked
    })
}

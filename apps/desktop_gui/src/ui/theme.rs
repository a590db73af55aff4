//! egui conversions for the report palette.

use std::{fs, path::Path, sync::Arc};

use eframe::egui;
use report::theme::{DashboardPalette, Rgba};

pub fn color(rgba: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba.0, rgba.1, rgba.2, rgba.3)
}

pub fn visuals_for_palette(palette: &DashboardPalette) -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(color(palette.text));
    visuals.window_fill = color(palette.background);
    visuals.panel_fill = color(palette.background);
    visuals.extreme_bg_color = color(palette.background);
    visuals.faint_bg_color = color(palette.panel);
    visuals.hyperlink_color = color(palette.revenue_accent.from);
    visuals.selection.bg_fill = color(palette.revenue_accent.from);
    visuals.widgets.active.bg_fill = color(palette.revenue_accent.from);
    visuals.widgets.hovered.bg_fill = color(palette.revenue_accent.to).gamma_multiply(0.85);
    visuals.window_corner_radius = egui::CornerRadius::same(12);
    visuals.menu_corner_radius = egui::CornerRadius::same(12);
    visuals
}

/// Registers an extra font as fallback for every family. The bundled egui
/// fonts carry no Tamil, Devanagari or Malayalam glyphs.
pub fn install_fallback_font(ctx: &egui::Context, path: &Path) -> anyhow::Result<()> {
    let bytes = fs::read(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "fallback".to_string());

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.clone(), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(name.clone());
    }
    ctx.set_fonts(fonts);
    tracing::info!(font = %path.display(), "fallback font installed");
    Ok(())
}

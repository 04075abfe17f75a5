//! Status bar UI rendering
//!
//! Shows process memory and the last measuring pass of the visible page.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::state::Page;
use crate::utils::{format_memory_mb, format_pass_report, get_current_memory_mb};
use rellipsis::Phase;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        match state.page {
            Page::Home | Page::About => {
                let engine = match state.page {
                    Page::About => state.about.engine(),
                    _ => state.playground.widget().engine(),
                };
                let pass_text = match (engine.phase(), engine.last_report()) {
                    (Phase::Measuring { .. }, _) => "Measuring…".to_string(),
                    (_, Some(report)) => format_pass_report(report),
                    (_, None) => "No pass yet".to_string(),
                };
                ui.label(RichText::new(pass_text).strong());
            }
            Page::Report => {
                ui.label(RichText::new(format!(
                    "Seed: {} | Cards: {} | Truncated: {}",
                    state.report.seed(),
                    crate::state::CARD_COUNT,
                    state.report.truncated_count()
                )).strong());
            }
        }
    });
}

//! Report page: generated cards, each with its own row budget.

use eframe::egui;
use crate::app::AppState;

/// Result of user interaction with the Report page
pub enum ReportInteraction {
    ReshuffleRequested,
}

pub fn render_report_page(ui: &mut egui::Ui, state: &mut AppState) -> Option<ReportInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("Report");
        if ui.button("🎲 Reshuffle").clicked() {
            interaction = Some(ReportInteraction::ReshuffleRequested);
        }
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in state.report.entries_mut() {
            egui::Frame::group(ui.style())
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.strong(&entry.card.title);
                        ui.label(egui::RichText::new(format!("{} rows", entry.card.rows)).weak());
                    });
                    entry.widget.show(ui);
                });
            ui.add_space(6.0);
        }
    });

    interaction
}

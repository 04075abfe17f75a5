//! Panel orchestration and layout management.
//!
//! Lays out the header, the status bar and the current page, and funnels
//! their interactions back to the application.

use crate::app::AppState;
use crate::state::Page;
use crate::ui::{about_page, header, home_page, report_page, status_bar};
use std::path::PathBuf;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(PathBuf),
    /// User dismissed the error message
    ErrorDismissed,
    /// User picked a built-in sample for the playground
    SampleSelected(usize),
    /// User asked for a new set of report cards
    ReshuffleRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::ErrorDismissed => PanelInteraction::ErrorDismissed,
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let page_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(page_frame)
            .show(ctx, |ui| match state.page {
                Page::Home => {
                    if let Some(home_page::HomeInteraction::SampleSelected(index)) =
                        home_page::render_home_page(ui, state)
                    {
                        interaction = Some(PanelInteraction::SampleSelected(index));
                    }
                }
                Page::About => about_page::render_about_page(ui, state),
                Page::Report => {
                    if let Some(report_page::ReportInteraction::ReshuffleRequested) =
                        report_page::render_report_page(ui, state)
                    {
                        interaction = Some(PanelInteraction::ReshuffleRequested);
                    }
                }
            });

        interaction
    }
}

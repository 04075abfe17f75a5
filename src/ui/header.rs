//! Header panel UI rendering
//!
//! Handles the top bar with page tabs, the open-file button and the theme
//! selector.

use eframe::egui;
use egui::Color32;
use std::path::PathBuf;
use crate::app::AppState;
use crate::io::CONTENT_EXTENSIONS;
use crate::state::{Page, ThemeChoice};

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a content file to open
    OpenFileRequested(PathBuf),
    /// User dismissed the error message
    ErrorDismissed,
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        for page in Page::ALL {
            ui.selectable_value(&mut state.page, page, page.title());
        }

        ui.separator();

        if ui.button("📁 Open Content").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Content Files", CONTENT_EXTENSIONS)
                .add_filter("HTML", &["html", "htm"])
                .add_filter("Text", &["txt"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if let Some(path) = &state.loaded_file {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(egui::RichText::new(name).weak())
                .on_hover_text(path.display().to_string());
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut current_theme = state.theme.current();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(current_theme.name())
                .show_ui(ui, |ui| {
                    for theme in ThemeChoice::ALL {
                        ui.selectable_value(&mut current_theme, theme, theme.name());
                    }
                });

            if state.theme.set_theme(current_theme) {
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.horizontal(|ui| {
            ui.colored_label(Color32::RED, err);
            if ui.small_button("✖").clicked() {
                interaction = Some(HeaderInteraction::ErrorDismissed);
            }
        });
    }

    interaction
}

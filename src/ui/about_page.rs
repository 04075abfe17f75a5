//! About page: the widget on a static HTML sample.

use eframe::egui;
use crate::app::AppState;

pub fn render_about_page(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("About this demo");
    ui.separator();
    ui.set_max_width(560.0);
    state.about.show(ui);
}

//! Home page: the live playground.
//!
//! Controls on the left edit the draft props; the preview on the right shows
//! the widget in a resizable frame so width-driven recomputes can be tried.

use eframe::egui;
use crate::app::AppState;
use crate::samples::SAMPLES;
use crate::state::MAX_ROWS;
use rellipsis::validate_markup;

/// Result of user interaction with the Home page
pub enum HomeInteraction {
    /// User picked a built-in sample (index into the catalogue)
    SampleSelected(usize),
}

pub fn render_home_page(ui: &mut egui::Ui, state: &mut AppState) -> Option<HomeInteraction> {
    let mut interaction = None;

    egui::SidePanel::left("playground_controls")
        .default_width(320.0)
        .resizable(true)
        .show_inside(ui, |ui| {
            interaction = render_controls(ui, state);
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        ui.heading("Preview");
        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Frame::group(ui.style())
                .inner_margin(8.0)
                .show(ui, |ui| {
                    let response = state.playground.widget_mut().show(ui);
                    if response.toggled {
                        log::debug!("playground affordance toggled");
                    }
                });
        });
    });

    state.playground.sync(ui.ctx());
    interaction
}

fn render_controls(ui: &mut egui::Ui, state: &mut AppState) -> Option<HomeInteraction> {
    let mut interaction = None;

    ui.heading("Props");
    ui.separator();

    egui::ComboBox::from_label("Sample")
        .selected_text("Load…")
        .show_ui(ui, |ui| {
            for (index, sample) in SAMPLES.iter().enumerate() {
                if ui.selectable_label(false, sample.name).clicked() {
                    interaction = Some(HomeInteraction::SampleSelected(index));
                }
            }
        });

    let mut custom = state.playground.custom_affordance();
    if ui.checkbox(&mut custom, "Custom affordance").changed() {
        state.playground.set_custom_affordance(custom);
    }

    let draft = state.playground.draft_mut();
    egui::Grid::new("props_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Rows");
            ui.add(egui::Slider::new(&mut draft.rows, 1..=MAX_ROWS));
            ui.end_row();

            ui.label("Expand label");
            ui.text_edit_singleline(&mut draft.expand_label);
            ui.end_row();

            ui.label("Collapse label");
            ui.text_edit_singleline(&mut draft.collapse_label);
            ui.end_row();

            ui.label("Ellipsis mark");
            ui.text_edit_singleline(&mut draft.ellipsis_mark);
            ui.end_row();

            ui.label("HTML");
            ui.checkbox(&mut draft.is_html, "");
            ui.end_row();
        });

    if draft.is_html {
        if let Err(err) = validate_markup(&draft.content) {
            ui.colored_label(ui.visuals().warn_fg_color, format!("⚠ {err}"))
                .on_hover_text("Shown anyway: unmatched closers are ignored, open tags are closed.");
        }
    }

    ui.separator();
    ui.label("Content");
    egui::ScrollArea::vertical().id_salt("content_editor").show(ui, |ui| {
        ui.add(
            egui::TextEdit::multiline(&mut draft.content)
                .desired_width(f32::INFINITY)
                .desired_rows(12)
                .code_editor(),
        );
    });

    interaction
}

//! Theme application and persistence coordination.

use crate::app::settings_coordinator::{SettingsCoordinator, THEME_KEY};
use crate::app::AppState;

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current theme to the egui context.
    ///
    /// Visuals are only replaced when they differ, so text colors read by the
    /// ellipsis probes stay stable between frames.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let visuals = state.theme.current().visuals();
        if ctx.style().visuals.dark_mode != visuals.dark_mode {
            ctx.set_visuals(visuals);
        }
    }

    /// Writes the theme to storage if it changed since the last save.
    pub fn persist_if_changed(storage: &mut dyn eframe::Storage, state: &mut AppState) {
        if state.theme.is_dirty() {
            SettingsCoordinator::save_setting(storage, THEME_KEY, &state.theme.current());
            state.theme.mark_saved();
        }
    }
}

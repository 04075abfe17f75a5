//! Text Ellipsis demo GUI application
//!
//! Hosts the `rellipsis` widget in an egui window with three pages:
//! - Home: live playground for every prop, with editable content
//! - About: an HTML sample
//! - Report: seeded, generated cards with different row budgets

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Page, playground, report and theme state
//! - `io/` - Content file loading
//! - `samples` - Built-in sample content and the report generator
//! - `utils/` - Formatting helpers
//! - `ui/` - Panel and page rendering

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod io;
mod app;
mod samples;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator, SettingsCoordinator, PLAYGROUND_KEY, PAGE_KEY};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point. An optional first argument names a content
/// file to load into the playground.
fn main() -> eframe::Result {
    env_logger::init();

    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Text Ellipsis"),
        ..Default::default()
    };

    eframe::run_native(
        "Text Ellipsis",
        options,
        Box::new(move |cc| Ok(Box::new(EllipsisDemoApp::new(cc, initial_file)))),
    )
}

/// The demo application. Most work is delegated:
/// - `ApplicationCoordinator` handles file loading and samples
/// - `ThemeCoordinator` handles theme application and persistence
/// - `PanelManager` handles UI panel layout and rendering
struct EllipsisDemoApp {
    /// Centralized application state
    state: AppState,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl EllipsisDemoApp {
    /// Creates the app with settings restored from persistent storage.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let settings = SettingsCoordinator::load_settings(cc.storage);
        log::debug!("restored settings: page {:?}, theme {:?}", settings.page, settings.theme);

        Self {
            state: AppState::with_settings(settings),
            pending_file_load: initial_file,
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, path);
            }
            PanelInteraction::ErrorDismissed => {
                ApplicationCoordinator::dismiss_error(&mut self.state);
            }
            PanelInteraction::SampleSelected(index) => {
                if let Some(sample) = samples::SAMPLES.get(index) {
                    ApplicationCoordinator::load_sample(&mut self.state, sample);
                }
            }
            PanelInteraction::ReshuffleRequested => {
                self.state.report.reshuffle();
            }
        }
    }
}

impl eframe::App for EllipsisDemoApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::persist_if_changed(storage, &mut self.state);
        SettingsCoordinator::save_setting(storage, PLAYGROUND_KEY, self.state.playground.draft());
        SettingsCoordinator::save_setting(storage, PAGE_KEY, &self.state.page);
    }

    /// Main update loop:
    /// 1. Apply theme
    /// 2. Load initial file if specified via command line
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist the theme as soon as it changes (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            ThemeCoordinator::persist_if_changed(storage, &mut self.state);
        }

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, path);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}

//! Centralized application state for the ellipsis demo.
//!
//! Composes the focused state components; each page owns the widgets it
//! shows so their recompute state survives switching pages.

use crate::app::settings_coordinator::DemoSettings;
use crate::samples::ABOUT_HTML;
use crate::state::{Page, PlaygroundState, ReportState, ThemeState};
use rellipsis::{EllipsisProps, TextEllipsis};
use std::path::PathBuf;

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Page shown in the central panel
    pub page: Page,

    /// Home page playground
    pub playground: PlaygroundState,

    /// About page widget
    pub about: TextEllipsis,

    /// Report page cards
    pub report: ReportState,

    /// Theme state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// File the playground content was last loaded from
    pub loaded_file: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::with_settings(DemoSettings::default())
    }

    /// Creates a new AppState from settings restored from storage.
    pub fn with_settings(settings: DemoSettings) -> Self {
        Self {
            page: settings.page,
            playground: PlaygroundState::new(settings.playground),
            about: TextEllipsis::new(EllipsisProps::html(ABOUT_HTML).with_rows(4)),
            report: ReportState::new(),
            theme: ThemeState::with_theme(settings.theme),
            error_message: None,
            loaded_file: None,
        }
    }
}

//! Application-level coordination and workflow management.
//!
//! Handles operations that touch more than one state component: opening
//! content files, switching samples and reporting errors.

use crate::app::AppState;
use crate::io::load_content;
use crate::samples::Sample;
use crate::state::Page;
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Loads a content file into the playground and switches to it.
    ///
    /// Failures leave the current content in place and show the error in the
    /// header.
    pub fn open_file(state: &mut AppState, path: PathBuf) {
        match load_content(&path) {
            Ok(loaded) => {
                state.playground.load_content(loaded.text, loaded.is_html);
                state.loaded_file = Some(loaded.path);
                state.page = Page::Home;
                state.error_message = None;
            }
            Err(err) => {
                log::warn!("{err:#}");
                state.error_message = Some(format!("Error loading content: {:#}", err));
            }
        }
    }

    /// Replaces the playground content with a built-in sample.
    pub fn load_sample(state: &mut AppState, sample: &Sample) {
        state.playground.load_content(sample.text.to_string(), sample.is_html);
        state.loaded_file = None;
        state.error_message = None;
    }

    pub fn dismiss_error(state: &mut AppState) {
        state.error_message = None;
    }
}

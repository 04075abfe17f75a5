//! Theme selection state.
//!
//! The demo offers egui's light and dark visuals; the choice is persisted
//! through the settings coordinator.

use serde::{Deserialize, Serialize};

/// Available visual themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeChoice {
    Light,
    #[default]
    Dark,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 2] = [ThemeChoice::Light, ThemeChoice::Dark];

    pub fn name(self) -> &'static str {
        match self {
            ThemeChoice::Light => "Light",
            ThemeChoice::Dark => "Dark",
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            ThemeChoice::Light => egui::Visuals::light(),
            ThemeChoice::Dark => egui::Visuals::dark(),
        }
    }
}

/// State related to visual theme.
#[derive(Debug, Default)]
pub struct ThemeState {
    current: ThemeChoice,
    /// Set when the choice changed and has not been written to storage yet
    dirty: bool,
}

impl ThemeState {
    pub fn with_theme(current: ThemeChoice) -> Self {
        Self {
            current,
            dirty: false,
        }
    }

    // ===== Theme Queries =====

    pub fn current(&self) -> ThemeChoice {
        self.current
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ===== Theme Mutations =====

    /// Sets the current theme. Returns true if it changed.
    pub fn set_theme(&mut self, theme: ThemeChoice) -> bool {
        if theme == self.current {
            return false;
        }
        self.current = theme;
        self.dirty = true;
        true
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_theme_marks_dirty() {
        let mut state = ThemeState::default();
        assert_eq!(state.current(), ThemeChoice::Dark);
        assert!(!state.set_theme(ThemeChoice::Dark));
        assert!(!state.is_dirty());

        assert!(state.set_theme(ThemeChoice::Light));
        assert!(state.is_dirty());
        state.mark_saved();
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_theme_choice_serializes_by_name() {
        assert_eq!(serde_json::to_string(&ThemeChoice::Light).unwrap(), "\"Light\"");
        let parsed: ThemeChoice = serde_json::from_str("\"Dark\"").unwrap();
        assert_eq!(parsed, ThemeChoice::Dark);
    }
}

//! State management modules for the ellipsis demo.
//!
//! This module contains state-only logic (no UI concerns):
//! - Navigation state (current page)
//! - Playground state (editable props and the Home page widget)
//! - Report state (generated cards)
//! - Theme state (light or dark visuals)

mod navigation;
mod playground_state;
mod report_state;
mod theme_state;

pub use navigation::Page;
pub use playground_state::{PlaygroundState, MAX_ROWS};
pub use report_state::{ReportEntry, ReportState, CARD_COUNT};
pub use theme_state::{ThemeChoice, ThemeState};

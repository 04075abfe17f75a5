//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the ellipsis demo:
//! - Header panel (page tabs, open-file button, theme selector)
//! - Home page (playground controls and preview)
//! - About page (HTML sample)
//! - Report page (generated cards)
//! - Status bar (last pass and memory)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod home_page;
pub mod about_page;
pub mod report_page;
pub mod status_bar;
pub mod panel_manager;

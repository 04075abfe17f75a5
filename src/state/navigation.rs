//! Page navigation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    About,
    Report,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::About, Page::Report];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "🏠 Home",
            Page::About => "ℹ About",
            Page::Report => "📋 Report",
        }
    }
}

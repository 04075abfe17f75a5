//! State of the Home page playground.
//!
//! The controls edit a draft copy of the props; the widget only sees the
//! draft when it differs from what it already has, so typing schedules one
//! measuring pass per change rather than one per frame.

use rellipsis::{EllipsisProps, TextEllipsis};

/// Rows offered by the rows slider.
pub const MAX_ROWS: u32 = 20;

pub struct PlaygroundState {
    /// Props as edited by the controls
    draft: EllipsisProps,
    /// Widget showing the last applied props
    widget: TextEllipsis,
    /// Replace the affordance link with a custom rendered one
    custom_affordance: bool,
}

impl PlaygroundState {
    pub fn new(props: EllipsisProps) -> Self {
        Self {
            widget: TextEllipsis::new(props.clone()),
            draft: props,
            custom_affordance: false,
        }
    }

    // ===== Queries =====

    pub fn draft(&self) -> &EllipsisProps {
        &self.draft
    }

    pub fn widget(&self) -> &TextEllipsis {
        &self.widget
    }

    pub fn custom_affordance(&self) -> bool {
        self.custom_affordance
    }

    // ===== Mutations =====

    pub fn draft_mut(&mut self) -> &mut EllipsisProps {
        &mut self.draft
    }

    pub fn widget_mut(&mut self) -> &mut TextEllipsis {
        &mut self.widget
    }

    /// Replaces the content, e.g. with a loaded file or a sample.
    pub fn load_content(&mut self, text: String, is_html: bool) {
        self.draft.content = text;
        self.draft.is_html = is_html;
    }

    /// Switches between the default link and the custom renderer. The
    /// widget is rebuilt; it keeps no state worth carrying over.
    pub fn set_custom_affordance(&mut self, enabled: bool) {
        if enabled == self.custom_affordance {
            return;
        }
        self.custom_affordance = enabled;
        let widget = TextEllipsis::new(self.draft.clone());
        self.widget = if enabled {
            widget.with_affordance_renderer(|is_expanded| {
                let text = if is_expanded { "▲ show less" } else { "▼ show more" };
                egui::RichText::new(text).strong().into()
            })
        } else {
            widget
        };
    }

    /// Hands the draft to the widget if it changed.
    pub fn sync(&mut self, ctx: &egui::Context) {
        self.draft.rows = self.draft.rows.clamp(1, MAX_ROWS);
        if &self.draft != self.widget.engine().props() {
            self.widget.set_props(self.draft.clone(), ctx);
        }
    }
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self::new(EllipsisProps::default())
    }
}

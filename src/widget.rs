//! The text-ellipsis egui widget.
//!
//! Holds an [`Ellipsis`] across frames. Every `show` reads the container
//! width, drives the recompute schedule with a probe host built from the
//! same `Ui`, and renders the display state with the affordance behind it.

use crate::egui_probe::EguiProbeHost;
use crate::engine::Ellipsis;
use crate::props::EllipsisProps;
use crate::rich_text::{self, RichStyle};

/// Builds the clickable part of the affordance from `is_expanded`.
pub type AffordanceRenderer = Box<dyn Fn(bool) -> egui::WidgetText>;

/// What happened during one `show`.
pub struct EllipsisResponse {
    /// Response covering the content and the affordance.
    pub response: egui::Response,
    /// The affordance was clicked and the expanded state flipped.
    pub toggled: bool,
    /// A fit pass ran and was committed this frame.
    pub recomputed: bool,
}

pub struct TextEllipsis {
    engine: Ellipsis,
    renderer: Option<AffordanceRenderer>,
}

impl TextEllipsis {
    pub fn new(props: EllipsisProps) -> Self {
        Self {
            engine: Ellipsis::new(props),
            renderer: None,
        }
    }

    /// Replaces the default link text (expand or collapse label).
    pub fn with_affordance_renderer(mut self, renderer: impl Fn(bool) -> egui::WidgetText + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Updates the inputs; a pass is scheduled only if they changed.
    pub fn set_props(&mut self, props: EllipsisProps, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        if self.engine.set_props(props, now) {
            ctx.request_repaint();
        }
    }

    pub fn engine(&self) -> &Ellipsis {
        &self.engine
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> EllipsisResponse {
        let now = ui.input(|i| i.time);
        self.engine.set_container_width(ui.available_width(), now);

        let mut host = EguiProbeHost::from_ui(ui);
        let recomputed = self.engine.poll(now, &mut host);
        if let Some(delay) = self.engine.due_in(now) {
            ui.ctx().request_repaint_after(delay);
        }

        let style = RichStyle::from_ui(ui);
        let display = self.engine.display();
        let props = self.engine.props();
        let job = rich_text::content_job(
            display.visible_text(),
            props.is_html,
            &style,
            ui.available_width(),
        );

        let mut clicked = false;
        let inner = ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.add(egui::Label::new(job));

            if !display.shows_affordance() {
                return;
            }
            if !display.is_expanded() {
                ui.label(egui::RichText::new(&props.ellipsis_mark).color(style.link_color));
            } else {
                ui.label(" ");
            }
            let text = match &self.renderer {
                Some(render) => render(display.is_expanded()),
                None => egui::WidgetText::from(self.engine.action_label()),
            };
            clicked = ui.add(egui::Link::new(text)).clicked();
        });

        if clicked {
            self.engine.toggle_expanded();
            ui.ctx().request_repaint();
        }

        EllipsisResponse {
            response: inner.response,
            toggled: clicked,
            recomputed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(ctx: &egui::Context, time: f64, widget: &mut TextEllipsis) -> bool {
        let input = egui::RawInput {
            time: Some(time),
            ..Default::default()
        };
        let mut recomputed = false;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                recomputed |= widget.show(ui).recomputed;
            });
        });
        recomputed
    }

    #[test]
    fn test_widget_truncates_after_delay() {
        let ctx = egui::Context::default();
        let content = "a fairly long sentence that keeps going ".repeat(200);
        let mut widget = TextEllipsis::new(EllipsisProps::new(content.clone()).with_rows(1));

        assert!(!frame(&ctx, 0.0, &mut widget));
        assert_eq!(widget.engine().display().visible_text(), content);

        assert!(frame(&ctx, 0.5, &mut widget));
        assert!(widget.engine().display().is_truncated());
        assert!(widget.engine().display().visible_text().len() < content.len());
    }

    #[test]
    fn test_short_content_has_no_affordance() {
        let ctx = egui::Context::default();
        let mut widget = TextEllipsis::new(EllipsisProps::new("tiny"));
        frame(&ctx, 0.0, &mut widget);
        frame(&ctx, 0.5, &mut widget);
        assert!(!widget.engine().display().shows_affordance());
        assert_eq!(widget.engine().display().visible_text(), "tiny");
    }
}

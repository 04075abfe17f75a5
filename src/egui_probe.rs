//! Probes backed by egui's text layout.
//!
//! A probe here is a `LayoutJob` laid out through the container's painter.
//! Laying out a galley paints nothing, so the probe never shows up on
//! screen; unmounting just drops the job.

use crate::error::EllipsisError;
use crate::rich_text::{self, RichStyle};
use crate::traits::{ProbeHost, ProbeSurface};
use egui::text::LayoutJob;

/// Snapshot of a container's width and typography, taken from a `Ui`.
pub struct EguiProbeHost {
    painter: Option<egui::Painter>,
    style: RichStyle,
    wrap_width: f32,
    line_height: Option<f32>,
    mounted: usize,
}

impl EguiProbeHost {
    /// Reads the container from the `Ui` the content is about to be added to.
    pub fn from_ui(ui: &egui::Ui) -> Self {
        Self {
            painter: Some(ui.painter().clone()),
            style: RichStyle::from_ui(ui),
            wrap_width: ui.available_width(),
            line_height: Some(ui.text_style_height(&egui::TextStyle::Body)),
            mounted: 0,
        }
    }

    /// Overrides the wrap width, e.g. to leave room for a scroll bar.
    pub fn with_wrap_width(mut self, wrap_width: f32) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    pub fn wrap_width(&self) -> f32 {
        self.wrap_width
    }

    pub fn mounted(&self) -> usize {
        self.mounted
    }
}

impl ProbeHost for EguiProbeHost {
    type Probe = EguiProbe;

    fn mount_probe(&mut self) -> Result<EguiProbe, EllipsisError> {
        let painter = self
            .painter
            .clone()
            .ok_or(EllipsisError::ContainerUnavailable)?;
        if !(self.wrap_width.is_finite() && self.wrap_width > 0.0) {
            return Err(EllipsisError::ZeroWidth {
                width: self.wrap_width,
            });
        }

        self.mounted += 1;
        Ok(EguiProbe {
            painter,
            style: self.style.clone(),
            wrap_width: self.wrap_width,
            line_height: self.line_height,
            job: LayoutJob::default(),
        })
    }

    fn unmount_probe(&mut self, probe: &mut EguiProbe) {
        probe.job = LayoutJob::default();
        self.mounted = self.mounted.saturating_sub(1);
    }
}

pub struct EguiProbe {
    painter: egui::Painter,
    style: RichStyle,
    wrap_width: f32,
    line_height: Option<f32>,
    job: LayoutJob,
}

impl ProbeSurface for EguiProbe {
    fn set_text(&mut self, text: &str) {
        self.job = rich_text::plain_job(text, &self.style, self.wrap_width);
    }

    fn set_html(&mut self, html: &str) {
        self.job = rich_text::html_job(html, &self.style, self.wrap_width);
    }

    fn append_affordance(&mut self, affordance: &str) {
        rich_text::append_affordance(&mut self.job, affordance, &self.style);
    }

    fn height(&mut self) -> f32 {
        if self.job.text.is_empty() {
            return 0.0;
        }
        self.painter.layout_job(self.job.clone()).size().y
    }

    fn line_height(&self) -> Option<f32> {
        self.line_height
    }
}

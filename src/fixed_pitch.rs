//! Fixed-pitch measuring backend.
//!
//! Every visible character takes one cell. Lines break at whitespace,
//! words wider than a line break anywhere, whitespace collapses, and the
//! affordance moves to the next line as a whole when it does not fit.
//! Used for headless runs and for tests, where egui's font metrics would
//! make expected cut points depend on bundled font data.

use crate::error::EllipsisError;
use crate::markup::{scan, TagKind, Token};
use crate::traits::{ProbeHost, ProbeSurface};
use crate::DEFAULT_LINE_HEIGHT;
use serde::{Deserialize, Serialize};

/// Elements whose start and end force a line break.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "dl", "dt", "dd", "footer", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "li", "ol", "p", "pre", "section", "table", "tr", "ul",
];

/// Typography of a fixed-pitch container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedPitchStyle {
    /// Content box width in pixels.
    pub width: f32,
    pub char_width: f32,
    /// `None` models a line height that could not be read.
    pub line_height: Option<f32>,
    /// Top plus bottom padding in pixels.
    pub padding_y: f32,
}

impl FixedPitchStyle {
    /// A container `columns` cells wide with 8px cells and 24px lines.
    pub fn columns(columns: usize) -> Self {
        Self {
            width: columns as f32 * 8.0,
            char_width: 8.0,
            line_height: Some(DEFAULT_LINE_HEIGHT),
            padding_y: 0.0,
        }
    }

    pub fn with_line_height(mut self, line_height: Option<f32>) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_padding_y(mut self, padding_y: f32) -> Self {
        self.padding_y = padding_y;
        self
    }
}

/// Hands out fixed-pitch probes and keeps count of the mounted ones.
#[derive(Debug, Default)]
pub struct FixedPitchHost {
    style: Option<FixedPitchStyle>,
    mounted: usize,
    mounts: usize,
}

impl FixedPitchHost {
    pub fn new(style: FixedPitchStyle) -> Self {
        Self {
            style: Some(style),
            mounted: 0,
            mounts: 0,
        }
    }

    /// A host whose container is not laid out yet.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn set_style(&mut self, style: Option<FixedPitchStyle>) {
        self.style = style;
    }

    /// Probes currently mounted. Zero between passes.
    pub fn mounted(&self) -> usize {
        self.mounted
    }

    /// Probes mounted over the host's lifetime.
    pub fn mounts(&self) -> usize {
        self.mounts
    }
}

impl ProbeHost for FixedPitchHost {
    type Probe = FixedPitchProbe;

    fn mount_probe(&mut self) -> Result<FixedPitchProbe, EllipsisError> {
        let style = self.style.ok_or(EllipsisError::ContainerUnavailable)?;
        if !(style.width.is_finite() && style.width > 0.0) {
            return Err(EllipsisError::ZeroWidth { width: style.width });
        }

        let columns = ((style.width / style.char_width.max(f32::EPSILON)).floor() as usize).max(1);
        self.mounted += 1;
        self.mounts += 1;

        Ok(FixedPitchProbe {
            style,
            columns,
            items: Vec::new(),
        })
    }

    fn unmount_probe(&mut self, probe: &mut FixedPitchProbe) {
        probe.items.clear();
        self.mounted = self.mounted.saturating_sub(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Glyph,
    Space,
    /// `<br>`: always starts a new line.
    HardBreak,
    /// Block boundary: starts a new line unless already at line start.
    BlockBreak,
    /// Unbreakable run of this many cells.
    Atomic(usize),
}

/// A fixed-pitch probe. Content is kept as layout items only.
#[derive(Debug, Clone)]
pub struct FixedPitchProbe {
    style: FixedPitchStyle,
    columns: usize,
    items: Vec<Item>,
}

impl FixedPitchProbe {
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of laid out lines for the current content.
    pub fn line_count(&self) -> usize {
        let mut breaker = LineBreaker::new(self.columns);
        let mut i = 0;
        while i < self.items.len() {
            match self.items[i] {
                Item::Glyph => {
                    let word = self.items[i..]
                        .iter()
                        .take_while(|item| **item == Item::Glyph)
                        .count();
                    breaker.word(word);
                    i += word;
                    continue;
                }
                Item::Space => breaker.space(),
                Item::HardBreak => breaker.hard_break(),
                Item::BlockBreak => breaker.block_break(),
                Item::Atomic(width) => breaker.atomic(width),
            }
            i += 1;
        }
        breaker.lines
    }

    fn push_text(&mut self, text: &str) {
        self.items.extend(text.chars().map(|c| {
            if c.is_whitespace() && c != '\u{a0}' {
                Item::Space
            } else {
                Item::Glyph
            }
        }));
    }
}

impl ProbeSurface for FixedPitchProbe {
    fn set_text(&mut self, text: &str) {
        self.items.clear();
        self.push_text(text);
    }

    fn set_html(&mut self, html: &str) {
        self.items.clear();
        let markup = scan(html);
        for token in markup.tokens() {
            match token {
                Token::Tag(tag) => match &tag.kind {
                    TagKind::SelfClosing { name } if name == "br" => self.items.push(Item::HardBreak),
                    TagKind::Open { name } | TagKind::Close { name } | TagKind::SelfClosing { name }
                        if BLOCK_ELEMENTS.contains(&name.as_str()) =>
                    {
                        self.items.push(Item::BlockBreak)
                    }
                    _ => {}
                },
                Token::Text { len, .. } if *len > 1 && markup.token_text(token).starts_with('&') => {
                    // Character references render as one glyph.
                    self.items.push(Item::Glyph)
                }
                Token::Text { .. } => self.push_text(markup.token_text(token)),
            }
        }
    }

    fn append_affordance(&mut self, affordance: &str) {
        self.items.push(Item::Atomic(affordance.chars().count()));
    }

    fn height(&mut self) -> f32 {
        let line_height = self.style.line_height.unwrap_or(DEFAULT_LINE_HEIGHT);
        self.line_count() as f32 * line_height + self.style.padding_y
    }

    fn line_height(&self) -> Option<f32> {
        self.style.line_height
    }
}

/// Greedy line breaking over cell widths.
struct LineBreaker {
    columns: usize,
    lines: usize,
    column: usize,
    pending_break: bool,
    after_space: bool,
}

impl LineBreaker {
    fn new(columns: usize) -> Self {
        Self {
            columns,
            lines: 0,
            column: 0,
            pending_break: false,
            after_space: false,
        }
    }

    /// Opens the first line, or the line a pending break asked for.
    fn start_content(&mut self) {
        if self.lines == 0 {
            self.lines = 1;
        } else if self.pending_break {
            self.lines += 1;
            self.column = 0;
        }
        self.pending_break = false;
    }

    fn word(&mut self, width: usize) {
        self.start_content();
        self.after_space = false;
        if self.column + width <= self.columns {
            self.column += width;
            return;
        }
        if self.column > 0 {
            self.lines += 1;
        }
        let mut rest = width;
        while rest > self.columns {
            rest -= self.columns;
            self.lines += 1;
        }
        self.column = rest;
    }

    fn space(&mut self) {
        // Collapsed at line start and after another space; hangs at line end.
        if self.lines == 0 || self.pending_break || self.column == 0 || self.after_space {
            return;
        }
        self.after_space = true;
        if self.column < self.columns {
            self.column += 1;
        }
    }

    fn hard_break(&mut self) {
        if self.lines == 0 {
            self.lines = 1;
        } else if self.pending_break {
            // Consecutive breaks leave empty lines behind.
            self.lines += 1;
        }
        self.column = 0;
        self.pending_break = true;
        self.after_space = false;
    }

    fn block_break(&mut self) {
        if self.column > 0 {
            self.pending_break = true;
            self.after_space = false;
        }
    }

    fn atomic(&mut self, width: usize) {
        self.start_content();
        self.after_space = false;
        if self.column + width <= self.columns {
            self.column += width;
        } else {
            if self.column > 0 {
                self.lines += 1;
            }
            self.column = width;
        }
    }
}

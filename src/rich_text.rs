//! Turning content into egui layout jobs.
//!
//! The probe and the widget build their galleys here so that what gets
//! measured is exactly what gets painted.

use crate::markup::{scan, TagKind, Token};
use egui::text::LayoutJob;
use egui::{Color32, FontFamily, FontId, Stroke, TextFormat};

const NBSP: char = '\u{a0}';

/// Elements that start on a new line.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "dl", "dt", "dd", "footer", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "li", "ol", "p", "pre", "section", "table", "tr", "ul",
];

/// Typography of the container, read from the egui style.
#[derive(Debug, Clone, PartialEq)]
pub struct RichStyle {
    pub font_id: FontId,
    pub text_color: Color32,
    pub strong_color: Color32,
    pub weak_color: Color32,
    pub link_color: Color32,
    pub code_background: Color32,
}

impl RichStyle {
    pub fn from_ui(ui: &egui::Ui) -> Self {
        let visuals = ui.visuals();
        Self {
            font_id: egui::TextStyle::Body.resolve(ui.style()),
            text_color: visuals.text_color(),
            strong_color: visuals.strong_text_color(),
            weak_color: visuals.weak_text_color(),
            link_color: visuals.hyperlink_color,
            code_background: visuals.code_bg_color,
        }
    }

    fn base_format(&self) -> TextFormat {
        TextFormat {
            font_id: self.font_id.clone(),
            color: self.text_color,
            ..Default::default()
        }
    }
}

/// Job for plain text or an HTML fragment, wrapped at `wrap_width`.
pub fn content_job(content: &str, is_html: bool, style: &RichStyle, wrap_width: f32) -> LayoutJob {
    if is_html {
        html_job(content, style, wrap_width)
    } else {
        plain_job(content, style, wrap_width)
    }
}

pub fn plain_job(text: &str, style: &RichStyle, wrap_width: f32) -> LayoutJob {
    let mut job = empty_job(wrap_width);
    job.append(text, 0.0, style.base_format());
    job
}

/// Lays out an HTML fragment with a handful of inline styles: bold, italic,
/// underline, strikethrough, code and links. Unknown tags are ignored and
/// whitespace collapses the way it does in a browser.
pub fn html_job(html: &str, style: &RichStyle, wrap_width: f32) -> LayoutJob {
    let mut job = empty_job(wrap_width);
    let mut inline = InlineState::default();
    let mut pending = String::new();
    let mut after_space = true;
    let markup = scan(html);

    for token in markup.tokens() {
        let Token::Tag(tag) = token else {
            let raw = markup.token_text(token);
            match decode_entity(raw) {
                Some(c) => {
                    pending.push(c);
                    after_space = false;
                }
                None => collapse_whitespace(raw, &mut pending, &mut after_space),
            }
            continue;
        };

        // Text so far keeps the format it was written under.
        flush(&mut job, &mut pending, inline.format(style));

        match &tag.kind {
            TagKind::SelfClosing { name } if name == "br" => {
                job.append("\n", 0.0, style.base_format());
                after_space = true;
            }
            TagKind::Open { name } => {
                if BLOCK_ELEMENTS.contains(&name.as_str()) {
                    after_space |= line_break(&mut job, style);
                    if name == "li" {
                        job.append("• ", 0.0, style.base_format());
                        after_space = true;
                    }
                }
                inline.enter(name);
            }
            TagKind::Close { name } => {
                if BLOCK_ELEMENTS.contains(&name.as_str()) {
                    after_space |= line_break(&mut job, style);
                }
                inline.leave(name);
            }
            TagKind::SelfClosing { .. } | TagKind::Other => {}
        }
    }

    flush(&mut job, &mut pending, inline.format(style));
    job
}

/// Appends the "ellipsis + action" span. Spaces become non-breaking so the
/// span wraps as a unit.
pub fn append_affordance(job: &mut LayoutJob, affordance: &str, style: &RichStyle) {
    let text: String = affordance
        .chars()
        .map(|c| if c == ' ' { NBSP } else { c })
        .collect();
    let format = TextFormat {
        color: style.link_color,
        ..style.base_format()
    };
    job.append(&text, 0.0, format);
}

/// Decodes a character reference such as `&amp;` or `&#x27;`.
pub fn decode_entity(raw: &str) -> Option<char> {
    let body = raw.strip_prefix('&')?.strip_suffix(';')?;
    if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(code);
    }
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(NBSP),
        "hellip" => Some('…'),
        "mdash" => Some('—'),
        "ndash" => Some('–'),
        "copy" => Some('©'),
        _ => None,
    }
}

fn empty_job(wrap_width: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.wrap.max_width = wrap_width;
    job
}

/// Starts a new line unless the job is empty or already at line start.
fn line_break(job: &mut LayoutJob, style: &RichStyle) -> bool {
    if job.text.is_empty() || job.text.ends_with('\n') {
        return false;
    }
    job.append("\n", 0.0, style.base_format());
    true
}

fn flush(job: &mut LayoutJob, pending: &mut String, format: TextFormat) {
    if !pending.is_empty() {
        job.append(pending, 0.0, format);
        pending.clear();
    }
}

fn collapse_whitespace(raw: &str, out: &mut String, after_space: &mut bool) {
    for c in raw.chars() {
        if c.is_whitespace() && c != NBSP {
            if !*after_space {
                out.push(' ');
                *after_space = true;
            }
        } else {
            out.push(c);
            *after_space = false;
        }
    }
}

/// Nesting depth of each inline style.
#[derive(Debug, Default)]
struct InlineState {
    strong: u32,
    italic: u32,
    underline: u32,
    strike: u32,
    code: u32,
    link: u32,
    small: u32,
}

impl InlineState {
    fn counter(&mut self, name: &str) -> Option<&mut u32> {
        match name {
            "b" | "strong" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(&mut self.strong),
            "i" | "em" | "cite" => Some(&mut self.italic),
            "u" | "ins" => Some(&mut self.underline),
            "s" | "del" | "strike" => Some(&mut self.strike),
            "code" | "kbd" | "tt" => Some(&mut self.code),
            "a" => Some(&mut self.link),
            "small" => Some(&mut self.small),
            _ => None,
        }
    }

    fn enter(&mut self, name: &str) {
        if let Some(depth) = self.counter(name) {
            *depth += 1;
        }
    }

    fn leave(&mut self, name: &str) {
        if let Some(depth) = self.counter(name) {
            *depth = depth.saturating_sub(1);
        }
    }

    fn format(&self, style: &RichStyle) -> TextFormat {
        let mut format = style.base_format();
        if self.strong > 0 {
            format.color = style.strong_color;
        }
        if self.small > 0 {
            format.color = style.weak_color;
        }
        if self.italic > 0 {
            format.italics = true;
        }
        if self.code > 0 {
            format.font_id = FontId::new(style.font_id.size, FontFamily::Monospace);
            format.background = style.code_background;
        }
        if self.link > 0 {
            format.color = style.link_color;
            format.underline = Stroke::new(1.0, style.link_color);
        } else if self.underline > 0 {
            format.underline = Stroke::new(1.0, format.color);
        }
        if self.strike > 0 {
            format.strikethrough = Stroke::new(1.0, format.color);
        }
        format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> RichStyle {
        RichStyle {
            font_id: FontId::proportional(14.0),
            text_color: Color32::GRAY,
            strong_color: Color32::WHITE,
            weak_color: Color32::DARK_GRAY,
            link_color: Color32::LIGHT_BLUE,
            code_background: Color32::BLACK,
        }
    }

    #[test]
    fn test_decode_entity() {
        assert_eq!(decode_entity("&amp;"), Some('&'));
        assert_eq!(decode_entity("&#39;"), Some('\''));
        assert_eq!(decode_entity("&#x27;"), Some('\''));
        assert_eq!(decode_entity("&bogus;"), None);
        assert_eq!(decode_entity("a"), None);
    }

    #[test]
    fn test_html_text_is_flattened() {
        let job = html_job("<p>Hello   <b>bold</b>\n world</p><p>next</p>", &style(), 100.0);
        assert_eq!(job.text, "Hello bold world\nnext\n");
    }

    #[test]
    fn test_br_and_entities() {
        let job = html_job("a&lt;b<br>c&amp;d", &style(), 100.0);
        assert_eq!(job.text, "a<b\nc&d");
    }

    #[test]
    fn test_bold_section_uses_strong_color() {
        let job = html_job("x<b>y</b>z", &style(), 100.0);
        let colors: Vec<_> = job.sections.iter().map(|s| s.format.color).collect();
        assert_eq!(colors, vec![Color32::GRAY, Color32::WHITE, Color32::GRAY]);
    }

    #[test]
    fn test_affordance_does_not_break() {
        let mut job = plain_job("text", &style(), 100.0);
        append_affordance(&mut job, "... show more", &style());
        assert_eq!(job.text, "text...\u{a0}show\u{a0}more");
        assert_eq!(job.wrap.max_width, 100.0);
    }
}

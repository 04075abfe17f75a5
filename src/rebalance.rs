//! Rebuilding truncated HTML that stays well-formed.
//!
//! A cut is expressed in visible units. The rebuilt fragment keeps every
//! tag that precedes the cut in its original position and then closes
//! whatever the cut left open, innermost first.

use crate::markup::{Markup, TagKind, Token};

/// Names of elements opened but not yet closed while walking a fragment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OpenTagStack {
    names: Vec<String>,
}

impl OpenTagStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one tag. Openers push, closers drop the most recent matching
    /// opener. Closers with no matching opener are ignored. Void and
    /// self-closing tags never touch the stack.
    pub fn apply(&mut self, kind: &TagKind) {
        match kind {
            TagKind::Open { name } => self.names.push(name.clone()),
            TagKind::Close { name } => {
                if let Some(pos) = self.names.iter().rposition(|open| open == name) {
                    self.names.remove(pos);
                }
            }
            TagKind::SelfClosing { .. } | TagKind::Other => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Open names in opening order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Appends `</name>` for every open element, last opened first.
    pub fn close_all(&self, out: &mut String) {
        for name in self.names.iter().rev() {
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

/// Rebuilds the first `visible` units of `markup` as a balanced fragment.
///
/// Tags are copied verbatim and cost nothing. The walk stops as soon as the
/// budget is spent, so a tag sitting right after the cut is not copied.
pub fn rebuild_prefix(markup: &Markup<'_>, visible: usize) -> String {
    let mut out = String::with_capacity(markup.source().len().min(visible * 4 + 16));
    let mut stack = OpenTagStack::new();
    let mut consumed = 0;

    for token in markup.tokens() {
        if consumed >= visible {
            break;
        }
        match token {
            Token::Tag(tag) => {
                out.push_str(&tag.tag);
                stack.apply(&tag.kind);
            }
            Token::Text { .. } => {
                out.push_str(markup.token_text(token));
                consumed += 1;
            }
        }
    }

    stack.close_all(&mut out);
    out
}

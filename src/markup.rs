//! Markup scanning for HTML-bearing content.
//!
//! A small state machine splits content into tags and visible units. It
//! is not an HTML parser: it only knows enough to find tag boundaries
//! (including `>` inside quoted attribute values and comments), name the
//! tag, and tell opening, closing and self-closing tags apart.
//!
//! A visible unit is a single `char` of text, or a whole character
//! reference such as `&amp;` so a cut never lands inside an entity.

use crate::error::MarkupError;

/// Elements that never take children and never get a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "br", "hr", "img", "input", "link", "meta", "area", "base", "col", "embed", "keygen",
    "param", "source", "track", "wbr",
];

/// Longest character reference body we accept, not counting the `&`, the
/// `#`/`#x` prefix or the `;`.
const MAX_ENTITY_LEN: usize = 32;

/// Returns true if `name` (lowercase) is a void element.
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// What a scanned tag does to the open-tag stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagKind {
    Open { name: String },
    Close { name: String },
    SelfClosing { name: String },
    /// Comments, doctype and processing instructions.
    Other,
}

/// A tag found in the content, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPosition {
    /// Byte offset of the `<` in the content.
    pub index: usize,
    /// Raw tag text, copied verbatim into rebuilt fragments.
    pub tag: String,
    pub is_self_closing: bool,
    pub kind: TagKind,
}

impl TagPosition {
    /// Byte offset one past the closing `>`.
    pub fn end(&self) -> usize {
        self.index + self.tag.len()
    }
}

/// One piece of scanned content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Tag(TagPosition),
    /// A visible unit spanning `len` bytes starting at `index`.
    Text { index: usize, len: usize },
}

/// Content split into tags and visible units.
#[derive(Debug, Clone)]
pub struct Markup<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    visible_len: usize,
}

impl<'a> Markup<'a> {
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of visible units, the search range for HTML fitting.
    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    /// Tags in ascending index order.
    pub fn tags(&self) -> impl Iterator<Item = &TagPosition> + '_ {
        self.tokens.iter().filter_map(|token| match token {
            Token::Tag(tag) => Some(tag),
            Token::Text { .. } => None,
        })
    }

    /// Text of one token as it appears in the source.
    pub fn token_text(&self, token: &Token) -> &'a str {
        match token {
            Token::Tag(tag) => &self.source[tag.index..tag.end()],
            Token::Text { index, len } => &self.source[*index..*index + *len],
        }
    }
}

/// Scans `source` into tags and visible units.
pub fn scan(source: &str) -> Markup<'_> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut visible_len = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'<' {
            if let Some(tag) = scan_tag(source, i) {
                i = tag.end();
                tokens.push(Token::Tag(tag));
                continue;
            }
        }

        let len = if bytes[i] == b'&' {
            entity_len(source, i)
        } else {
            None
        }
        .unwrap_or_else(|| char_len_at(source, i));

        tokens.push(Token::Text { index: i, len });
        visible_len += 1;
        i += len;
    }

    Markup {
        source,
        tokens,
        visible_len,
    }
}

/// Content with every tag removed.
pub fn strip_tags(source: &str) -> String {
    let markup = scan(source);
    markup
        .tokens()
        .iter()
        .filter(|token| matches!(token, Token::Text { .. }))
        .map(|token| markup.token_text(token))
        .collect()
}

/// Strict well-formedness check for callers that want to reject bad markup
/// before handing it to the engine.
///
/// Closing tags must close the innermost open element, every non-void
/// element must be closed, and anything that starts like a tag must end
/// like one.
pub fn validate_markup(source: &str) -> Result<(), MarkupError> {
    let markup = scan(source);
    let mut stack: Vec<(&str, usize)> = Vec::new();

    for token in markup.tokens() {
        match token {
            Token::Tag(tag) => match &tag.kind {
                TagKind::Open { name } => stack.push((name.as_str(), tag.index)),
                TagKind::Close { name } => match stack.last() {
                    Some((open, _)) if *open == name.as_str() => {
                        stack.pop();
                    }
                    _ => {
                        return Err(MarkupError::UnmatchedClose {
                            name: name.clone(),
                            offset: tag.index,
                        })
                    }
                },
                TagKind::SelfClosing { .. } | TagKind::Other => {}
            },
            Token::Text { index, .. } => {
                if looks_like_tag_start(source, *index) {
                    return Err(MarkupError::UnterminatedTag { offset: *index });
                }
            }
        }
    }

    match stack.first() {
        Some((name, offset)) => Err(MarkupError::Unclosed {
            name: name.to_string(),
            offset: *offset,
        }),
        None => Ok(()),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    TagOpen,
    TagName,
    InTag,
    Quoted(u8),
    Comment,
}

/// Runs the tag state machine from the `<` at `start`. Returns `None` if the
/// text there is not a tag (literal `<`) or never terminates.
fn scan_tag(source: &str, start: usize) -> Option<TagPosition> {
    let bytes = source.as_bytes();
    let mut state = State::TagOpen;
    let mut closing = false;
    let mut other = false;
    let mut name_start = 0;
    let mut name_end = 0;
    let mut i = start + 1;

    while i < bytes.len() {
        let b = bytes[i];
        match state {
            State::TagOpen => match b {
                b'/' if !closing => closing = true,
                b if b.is_ascii_alphabetic() => {
                    name_start = i;
                    state = State::TagName;
                }
                b'!' if !closing => {
                    if bytes[i..].starts_with(b"!--") {
                        state = State::Comment;
                        i += 3;
                        continue;
                    }
                    other = true;
                    state = State::InTag;
                }
                b'?' if !closing => {
                    other = true;
                    state = State::InTag;
                }
                _ => return None,
            },
            State::TagName => {
                if !(b.is_ascii_alphanumeric() || b == b'-' || b == b':' || b == b'_') {
                    name_end = i;
                    state = State::InTag;
                    // Reprocess this byte in the attribute state.
                    continue;
                }
            }
            State::InTag => match b {
                b'>' => {
                    let end = i + 1;
                    return Some(make_tag(source, start, end, closing, other, name_start, name_end));
                }
                b'"' | b'\'' => state = State::Quoted(b),
                _ => {}
            },
            State::Quoted(quote) => {
                if b == quote {
                    state = State::InTag;
                }
            }
            State::Comment => {
                if bytes[i..].starts_with(b"-->") {
                    let end = i + 3;
                    return Some(make_tag(source, start, end, false, true, 0, 0));
                }
            }
        }
        i += 1;
    }

    None
}

fn make_tag(
    source: &str,
    start: usize,
    end: usize,
    closing: bool,
    other: bool,
    name_start: usize,
    name_end: usize,
) -> TagPosition {
    let raw = &source[start..end];
    let name = source[name_start..name_end].to_ascii_lowercase();

    let kind = if other {
        TagKind::Other
    } else if closing {
        TagKind::Close { name }
    } else if raw.trim_end_matches('>').trim_end().ends_with('/') || is_void_element(&name) {
        TagKind::SelfClosing { name }
    } else {
        TagKind::Open { name }
    };

    TagPosition {
        index: start,
        tag: raw.to_string(),
        is_self_closing: !matches!(kind, TagKind::Open { .. } | TagKind::Close { .. }),
        kind,
    }
}

/// Byte length of a character reference starting at the `&` at `start`.
fn entity_len(source: &str, start: usize) -> Option<usize> {
    let rest = &source.as_bytes()[start + 1..];
    let (body, numeric_hex) = match rest {
        [b'#', b'x' | b'X', tail @ ..] => (tail, Some(true)),
        [b'#', tail @ ..] => (tail, Some(false)),
        tail => (tail, None),
    };
    let prefix = rest.len() - body.len();

    let digits = body
        .iter()
        .take(MAX_ENTITY_LEN)
        .take_while(|b| match numeric_hex {
            Some(true) => b.is_ascii_hexdigit(),
            Some(false) => b.is_ascii_digit(),
            None => b.is_ascii_alphanumeric(),
        })
        .count();

    if digits == 0 || body.get(digits) != Some(&b';') {
        return None;
    }

    // & + prefix + digits + ;
    Some(1 + prefix + digits + 1)
}

fn char_len_at(source: &str, i: usize) -> usize {
    source[i..].chars().next().map_or(1, char::len_utf8)
}

fn looks_like_tag_start(source: &str, i: usize) -> bool {
    let rest = &source.as_bytes()[i..];
    match rest {
        [b'<', b, ..] if b.is_ascii_alphabetic() || *b == b'!' || *b == b'?' => true,
        [b'<', b'/', b, ..] => b.is_ascii_alphabetic(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TagKind> {
        scan(source).tags().map(|t| t.kind.clone()).collect()
    }

    #[test]
    fn test_plain_text_has_no_tags() {
        let markup = scan("Hello world");
        assert_eq!(markup.visible_len(), 11);
        assert_eq!(markup.tags().count(), 0);
    }

    #[test]
    fn test_tags_and_positions() {
        let markup = scan("<b>Bold text</b> and more");
        let tags: Vec<_> = markup.tags().collect();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].index, 0);
        assert_eq!(tags[0].tag, "<b>");
        assert_eq!(tags[1].index, 12);
        assert_eq!(tags[1].tag, "</b>");
        assert_eq!(markup.visible_len(), "Bold text and more".len());
    }

    #[test]
    fn test_quoted_gt_does_not_end_tag() {
        let source = r#"<a title="a > b" href='x>y'>link</a>"#;
        let markup = scan(source);
        let first = markup.tags().next().unwrap();
        assert_eq!(first.tag, r#"<a title="a > b" href='x>y'>"#);
        assert_eq!(strip_tags(source), "link");
    }

    #[test]
    fn test_self_closing_detection() {
        assert_eq!(
            kinds("<br><img src=\"a.png\"/><span/><p>"),
            vec![
                TagKind::SelfClosing { name: "br".into() },
                TagKind::SelfClosing { name: "img".into() },
                TagKind::SelfClosing { name: "span".into() },
                TagKind::Open { name: "p".into() },
            ]
        );
        let markup = scan("<BR>");
        assert!(markup.tags().next().unwrap().is_self_closing);
    }

    #[test]
    fn test_names_are_lowercased() {
        assert_eq!(
            kinds("<DIV class=x></Div>"),
            vec![
                TagKind::Open { name: "div".into() },
                TagKind::Close { name: "div".into() },
            ]
        );
    }

    #[test]
    fn test_comments_and_doctype() {
        let source = "<!DOCTYPE html><!-- a > b -->text";
        assert_eq!(kinds(source), vec![TagKind::Other, TagKind::Other]);
        assert_eq!(strip_tags(source), "text");
    }

    #[test]
    fn test_comments_with_multibyte_text() {
        assert_eq!(strip_tags("a<!--ü-->b"), "ab");

        let markup = scan("<!-- 注释 -->展开");
        assert_eq!(kinds("<!-- 注释 -->展开"), vec![TagKind::Other]);
        assert_eq!(markup.tags().next().unwrap().tag, "<!-- 注释 -->");
        assert_eq!(markup.visible_len(), 2);
        assert_eq!(validate_markup("<p><!-- é --></p>"), Ok(()));
    }

    #[test]
    fn test_entity_body_length_limit() {
        let body = "a".repeat(MAX_ENTITY_LEN);
        let at_limit = format!("&{body};");
        assert_eq!(scan(&at_limit).visible_len(), 1);

        let too_long = format!("&{body}a;");
        assert_eq!(scan(&too_long).visible_len(), too_long.len());
    }

    #[test]
    fn test_literal_angle_brackets_are_text() {
        assert_eq!(strip_tags("a < b and 3<4"), "a < b and 3<4");
        assert_eq!(strip_tags("unterminated <b class="), "unterminated <b class=");
    }

    #[test]
    fn test_entities_are_single_units() {
        let markup = scan("a&amp;b&#39;c&#x27;d&nope e");
        // a, &amp;, b, &#39;, c, &#x27;, d, then "&nope e" char by char
        assert_eq!(markup.visible_len(), 7 + 7);
        assert_eq!(strip_tags("x&lt;y"), "x&lt;y");
    }

    #[test]
    fn test_multibyte_text_units() {
        let markup = scan("<i>展开全文</i>");
        assert_eq!(markup.visible_len(), 4);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert_eq!(validate_markup("<p>a<br><b>b</b></p>"), Ok(()));
    }

    #[test]
    fn test_validate_reports_problems() {
        assert_eq!(
            validate_markup("a</b>"),
            Err(MarkupError::UnmatchedClose { name: "b".into(), offset: 1 })
        );
        assert_eq!(
            validate_markup("<p><i>x</p>"),
            Err(MarkupError::UnmatchedClose { name: "p".into(), offset: 7 })
        );
        assert_eq!(
            validate_markup("<div>x"),
            Err(MarkupError::Unclosed { name: "div".into(), offset: 0 })
        );
        assert_eq!(
            validate_markup("x <span class="),
            Err(MarkupError::UnterminatedTag { offset: 2 })
        );
    }
}

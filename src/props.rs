//! Inputs of the text-ellipsis component.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ROWS: u32 = 5;
pub const DEFAULT_EXPAND_LABEL: &str = "expand";
pub const DEFAULT_COLLAPSE_LABEL: &str = "collapse";
pub const DEFAULT_ELLIPSIS_MARK: &str = "...";

/// What to show and how much room it gets.
///
/// # Trust boundary
///
/// With `is_html` set, `content` is laid out and rendered as markup as-is.
/// Nothing here sanitizes it; content from untrusted sources must be
/// cleaned by the caller first. Callers that want malformed markup
/// rejected rather than normalized can run
/// [`crate::markup::validate_markup`] before handing it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipsisProps {
    pub content: String,
    /// Row budget, at least 1.
    pub rows: u32,
    pub expand_label: String,
    pub collapse_label: String,
    pub ellipsis_mark: String,
    pub is_html: bool,
}

impl Default for EllipsisProps {
    fn default() -> Self {
        Self {
            content: String::new(),
            rows: DEFAULT_ROWS,
            expand_label: DEFAULT_EXPAND_LABEL.to_string(),
            collapse_label: DEFAULT_COLLAPSE_LABEL.to_string(),
            ellipsis_mark: DEFAULT_ELLIPSIS_MARK.to_string(),
            is_html: false,
        }
    }
}

impl EllipsisProps {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn html(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_html: true,
            ..Self::default()
        }
    }

    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_expand_label(mut self, label: impl Into<String>) -> Self {
        self.expand_label = label.into();
        self
    }

    pub fn with_collapse_label(mut self, label: impl Into<String>) -> Self {
        self.collapse_label = label.into();
        self
    }

    pub fn with_ellipsis_mark(mut self, mark: impl Into<String>) -> Self {
        self.ellipsis_mark = mark.into();
        self
    }

    /// Text of the span measured after every candidate prefix.
    pub fn affordance(&self) -> String {
        format!("{}{}", self.ellipsis_mark, self.expand_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = EllipsisProps::new("x");
        assert_eq!(props.rows, 5);
        assert_eq!(props.affordance(), "...expand");
        assert!(!props.is_html);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let props: EllipsisProps = serde_json::from_str(r#"{"content":"hi","rows":2}"#).unwrap();
        assert_eq!(props.rows, 2);
        assert_eq!(props.collapse_label, "collapse");
    }
}

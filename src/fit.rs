//! Fit search: the longest prefix that fits the row budget.
//!
//! Both modes run the same binary search over a length. Plain text counts
//! characters; HTML counts visible units and rebuilds a balanced fragment
//! for every candidate before measuring it.

use crate::error::EllipsisError;
use crate::markup::scan;
use crate::props::EllipsisProps;
use crate::rebalance::rebuild_prefix;
use crate::traits::{ProbeGuard, ProbeHost, ProbeSurface};

/// Line height used when the container's cannot be read.
pub const DEFAULT_LINE_HEIGHT: f32 = 24.0;

/// Extra half row that absorbs rounding in measured heights.
const ROW_SLACK: f32 = 0.5;

/// Pixel budget derived from a row count and a line height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderBudget {
    pub rows: u32,
    pub line_height: f32,
}

impl RenderBudget {
    /// Rows are clamped to at least 1. A missing, non-finite or non-positive
    /// line height becomes [`DEFAULT_LINE_HEIGHT`].
    pub fn new(rows: u32, line_height: Option<f32>) -> Self {
        Self {
            rows: rows.max(1),
            line_height: line_height
                .filter(|h| h.is_finite() && *h > 0.0)
                .unwrap_or(DEFAULT_LINE_HEIGHT),
        }
    }

    pub fn max_height(&self) -> f32 {
        (self.rows as f32 + ROW_SLACK) * self.line_height
    }
}

/// Where to cut, in visible characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitResult {
    pub cut_index: usize,
    /// False when the whole content already fits and no search ran.
    pub truncated: bool,
}

/// A finished fit search.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub result: FitResult,
    /// Content to show while collapsed: the full content when not truncated,
    /// otherwise the plain prefix or the rebalanced HTML fragment.
    pub text: String,
    /// Probe measurements taken, full-content check included.
    pub probes: usize,
}

impl FitOutcome {
    fn untruncated(content: &str, visible_len: usize, probes: usize) -> Self {
        Self {
            result: FitResult {
                cut_index: visible_len,
                truncated: false,
            },
            text: content.to_string(),
            probes,
        }
    }
}

/// Runs one complete pass: mount a probe, measure, unmount.
///
/// Empty content returns without touching the host.
pub fn compute_fit<H>(host: &mut H, props: &EllipsisProps) -> Result<FitOutcome, EllipsisError>
where
    H: ProbeHost + ?Sized,
{
    if props.content.is_empty() {
        return Ok(FitOutcome::untruncated("", 0, 0));
    }

    let mut probe = ProbeGuard::mount(host)?;
    let budget = RenderBudget::new(props.rows, probe.line_height());
    let affordance = props.affordance();

    let outcome = if props.is_html {
        fit_html(&mut *probe, &props.content, &affordance, budget.max_height())
    } else {
        fit_plain(&mut *probe, &props.content, &affordance, budget.max_height())
    };

    log::debug!(
        "fit pass: rows={} line_height={} max_height={} cut={} truncated={} probes={}",
        budget.rows,
        budget.line_height,
        budget.max_height(),
        outcome.result.cut_index,
        outcome.result.truncated,
        outcome.probes
    );

    Ok(outcome)
}

/// Fits plain text. Cut points are `char` boundaries.
pub fn fit_plain<P>(probe: &mut P, content: &str, affordance: &str, max_height: f32) -> FitOutcome
where
    P: ProbeSurface + ?Sized,
{
    let boundaries: Vec<usize> = content
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(content.len()))
        .collect();
    let len = boundaries.len() - 1;

    if len == 0 {
        return FitOutcome::untruncated(content, 0, 0);
    }

    probe.set_text(content);
    if probe.height() <= max_height {
        return FitOutcome::untruncated(content, len, 1);
    }

    let (best, probes) = search_longest(len, |mid| {
        probe.set_text(&content[..boundaries[mid]]);
        probe.append_affordance(affordance);
        let height = probe.height();
        log::trace!("plain candidate {mid}/{len}: height {height}");
        height <= max_height
    });

    let cut_index = best.unwrap_or(0);
    FitOutcome {
        result: FitResult {
            cut_index,
            truncated: true,
        },
        text: content[..boundaries[cut_index]].to_string(),
        probes: probes + 1,
    }
}

/// Fits an HTML fragment. Cut points are visible units; every candidate is
/// rebuilt with its open tags closed before it is measured.
pub fn fit_html<P>(probe: &mut P, content: &str, affordance: &str, max_height: f32) -> FitOutcome
where
    P: ProbeSurface + ?Sized,
{
    let markup = scan(content);
    let len = markup.visible_len();

    if content.is_empty() {
        return FitOutcome::untruncated(content, 0, 0);
    }

    probe.set_html(content);
    if probe.height() <= max_height {
        return FitOutcome::untruncated(content, len, 1);
    }

    let (best, probes) = search_longest(len, |mid| {
        let fragment = rebuild_prefix(&markup, mid);
        probe.set_html(&fragment);
        probe.append_affordance(affordance);
        let height = probe.height();
        log::trace!("html candidate {mid}/{len}: height {height}");
        height <= max_height
    });

    let cut_index = best.unwrap_or(0);
    FitOutcome {
        result: FitResult {
            cut_index,
            truncated: true,
        },
        text: rebuild_prefix(&markup, cut_index),
        probes: probes + 1,
    }
}

/// Largest `n` in `0..=len` with `fits(n)`, assuming `fits` is monotone.
/// Returns the winner (if any) and the number of calls made.
fn search_longest(len: usize, mut fits: impl FnMut(usize) -> bool) -> (Option<usize>, usize) {
    let mut low = 0;
    let mut high = len;
    let mut best = None;
    let mut calls = 0;

    while low <= high {
        let mid = low + (high - low) / 2;
        calls += 1;
        if fits(mid) {
            best = Some(mid);
            low = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            high = mid - 1;
        }
    }

    (best, calls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_pitch::{FixedPitchHost, FixedPitchStyle};

    #[test]
    fn test_budget_defaults() {
        let budget = RenderBudget::new(0, None);
        assert_eq!(budget.rows, 1);
        assert_eq!(budget.max_height(), 36.0);

        assert_eq!(RenderBudget::new(2, Some(f32::NAN)).line_height, DEFAULT_LINE_HEIGHT);
        assert_eq!(RenderBudget::new(2, Some(-3.0)).line_height, DEFAULT_LINE_HEIGHT);
        assert_eq!(RenderBudget::new(2, Some(20.0)).max_height(), 50.0);
    }

    #[test]
    fn test_search_longest() {
        assert_eq!(search_longest(100, |n| n <= 37).0, Some(37));
        assert_eq!(search_longest(100, |_| true).0, Some(100));
        assert_eq!(search_longest(100, |_| false).0, None);
        assert_eq!(search_longest(0, |_| true).0, Some(0));

        let (_, calls) = search_longest(1024, |n| n <= 500);
        assert!(calls <= 11, "expected O(log n) calls, got {calls}");
    }

    #[test]
    fn test_plain_cut() {
        let mut host = FixedPitchHost::new(FixedPitchStyle::columns(10));
        let props = EllipsisProps::new("Hello world")
            .with_rows(1)
            .with_ellipsis_mark("…")
            .with_expand_label("more");
        let outcome = compute_fit(&mut host, &props).unwrap();
        assert_eq!(outcome.result, FitResult { cut_index: 5, truncated: true });
        assert_eq!(outcome.text, "Hello");
        assert_eq!(host.mounted(), 0);
    }

    #[test]
    fn test_plain_fits_without_search() {
        let mut host = FixedPitchHost::new(FixedPitchStyle::columns(40));
        let outcome = compute_fit(&mut host, &EllipsisProps::new("short")).unwrap();
        assert!(!outcome.result.truncated);
        assert_eq!(outcome.text, "short");
        assert_eq!(outcome.probes, 1);
    }

    #[test]
    fn test_empty_content_skips_host() {
        let mut host = FixedPitchHost::detached();
        let outcome = compute_fit(&mut host, &EllipsisProps::new("")).unwrap();
        assert!(!outcome.result.truncated);
        assert_eq!(host.mounts(), 0);
    }

    #[test]
    fn test_affordance_taller_than_budget() {
        // Padding eats most of the budget, so even the bare affordance overflows.
        let mut host = FixedPitchHost::new(FixedPitchStyle::columns(3).with_padding_y(20.0));
        let props = EllipsisProps::new("abc def ghi").with_rows(1);
        let outcome = compute_fit(&mut host, &props).unwrap();
        assert_eq!(outcome.result, FitResult { cut_index: 0, truncated: true });
        assert_eq!(outcome.text, "");
    }

    #[test]
    fn test_html_cut_closes_tags() {
        let mut host = FixedPitchHost::new(FixedPitchStyle::columns(12));
        let props = EllipsisProps::html("<b>Bold text</b> and more")
            .with_rows(1)
            .with_ellipsis_mark("…")
            .with_expand_label("more");
        let outcome = compute_fit(&mut host, &props).unwrap();
        assert_eq!(outcome.result, FitResult { cut_index: 7, truncated: true });
        assert_eq!(outcome.text, "<b>Bold te</b>");

        // A shorter affordance lets the cut move past the source closer.
        let props = props.with_expand_label("");
        let outcome = compute_fit(&mut host, &props).unwrap();
        assert_eq!(outcome.result.cut_index, 11);
        assert_eq!(outcome.text, "<b>Bold text</b> a");
    }

    #[test]
    fn test_multibyte_plain_cut() {
        let mut host = FixedPitchHost::new(FixedPitchStyle::columns(6));
        let props = EllipsisProps::new("展开全文展开全文展开全文")
            .with_rows(1)
            .with_ellipsis_mark("…")
            .with_expand_label("");
        let outcome = compute_fit(&mut host, &props).unwrap();
        assert_eq!(outcome.result.cut_index, 5);
        assert_eq!(outcome.text, "展开全文展");
    }

    #[test]
    fn test_unmeasurable_container() {
        let mut host = FixedPitchHost::detached();
        let err = compute_fit(&mut host, &EllipsisProps::new("text")).unwrap_err();
        assert_eq!(err, EllipsisError::ContainerUnavailable);
        assert_eq!(host.mounted(), 0);
    }
}

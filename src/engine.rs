//! Recompute scheduling and display state for one text-ellipsis instance.
//!
//! State flows `Idle -> Measuring -> Settled`. Any input change goes back to
//! `Measuring`: the full content is shown right away and the fit pass runs
//! once [`RECOMPUTE_DELAY`] has elapsed, so the container has been laid out
//! with the new content before it is measured.
//!
//! Every change bumps a generation counter. A pass carries the generation
//! it started under in a [`RecomputeTicket`], and its result is only
//! committed if nothing changed in the meantime.

use crate::error::EllipsisError;
use crate::fit::{compute_fit, FitOutcome};
use crate::props::EllipsisProps;
use crate::traits::ProbeHost;
use std::time::{Duration, Instant};

/// Delay between an input change and the measuring pass.
pub const RECOMPUTE_DELAY: Duration = Duration::from_millis(100);

/// Container width changes smaller than this do not trigger a pass.
const WIDTH_EPSILON: f32 = 0.5;

/// Where an instance is in its recompute cycle. Times are in seconds on the
/// caller's clock (egui's `InputState::time`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Measuring { generation: u64, due: f64 },
    Settled,
}

/// Identifies the input generation a pass was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecomputeTicket {
    generation: u64,
}

impl RecomputeTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What the render path shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    content: String,
    truncated_text: String,
    is_truncated: bool,
    is_expanded: bool,
}

impl DisplayState {
    fn showing_full(content: &str, is_expanded: bool) -> Self {
        Self {
            content: content.to_string(),
            truncated_text: String::new(),
            is_truncated: false,
            is_expanded,
        }
    }

    /// Full content when expanded or not truncated, the fitted prefix
    /// otherwise.
    pub fn visible_text(&self) -> &str {
        if self.is_expanded || !self.is_truncated {
            &self.content
        } else {
            &self.truncated_text
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.is_truncated
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    /// The affordance is only rendered when something was cut.
    pub fn shows_affordance(&self) -> bool {
        self.is_truncated
    }
}

/// Diagnostics for the most recent committed pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PassReport {
    pub generation: u64,
    pub outcome: Result<FitOutcome, EllipsisError>,
    pub elapsed: Duration,
}

/// One text-ellipsis instance: inputs, schedule and display state.
#[derive(Debug, Clone)]
pub struct Ellipsis {
    props: EllipsisProps,
    container_width: Option<f32>,
    display: DisplayState,
    phase: Phase,
    generation: u64,
    last_report: Option<PassReport>,
}

impl Ellipsis {
    pub fn new(props: EllipsisProps) -> Self {
        let display = DisplayState::showing_full(&props.content, false);
        Self {
            props,
            container_width: None,
            display,
            phase: Phase::Idle,
            generation: 0,
            last_report: None,
        }
    }

    pub fn props(&self) -> &EllipsisProps {
        &self.props
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_report(&self) -> Option<&PassReport> {
        self.last_report.as_ref()
    }

    /// Result of the most recent committed pass.
    pub fn last_outcome(&self) -> Option<&Result<FitOutcome, EllipsisError>> {
        self.last_report.as_ref().map(|report| &report.outcome)
    }

    /// Replaces the inputs. Returns true if that started a new pass.
    pub fn set_props(&mut self, props: EllipsisProps, now: f64) -> bool {
        if props == self.props {
            return false;
        }
        self.props = props;
        self.begin_recompute(now);
        true
    }

    /// Records the container's laid out width. Returns true if the change
    /// started a new pass.
    pub fn set_container_width(&mut self, width: f32, now: f64) -> bool {
        let changed = match self.container_width {
            Some(previous) => (previous - width).abs() >= WIDTH_EPSILON,
            None => true,
        };
        self.container_width = Some(width);
        let started = changed && self.phase != Phase::Idle;
        if started {
            self.begin_recompute(now);
        }
        started
    }

    /// Starts a new generation: show the full content now, measure once the
    /// delay has passed. Any pass still holding an older ticket goes stale.
    pub fn begin_recompute(&mut self, now: f64) -> RecomputeTicket {
        self.generation += 1;
        self.display = DisplayState::showing_full(&self.props.content, self.display.is_expanded);
        self.phase = Phase::Measuring {
            generation: self.generation,
            due: now + RECOMPUTE_DELAY.as_secs_f64(),
        };
        log::trace!("recompute scheduled, generation {}", self.generation);
        RecomputeTicket {
            generation: self.generation,
        }
    }

    /// Seconds until the scheduled pass is due, if one is pending.
    pub fn due_in(&self, now: f64) -> Option<Duration> {
        match self.phase {
            Phase::Measuring { due, .. } => Some(Duration::from_secs_f64((due - now).max(0.0))),
            Phase::Idle | Phase::Settled => None,
        }
    }

    /// Drives the schedule. Call once per frame; returns true when a pass
    /// was run and committed.
    pub fn poll<H>(&mut self, now: f64, host: &mut H) -> bool
    where
        H: ProbeHost + ?Sized,
    {
        match self.phase {
            Phase::Idle => {
                self.begin_recompute(now);
                false
            }
            Phase::Measuring { generation, due } if now >= due => {
                let ticket = RecomputeTicket { generation };
                let report = self.run_pass(ticket, host);
                self.commit(ticket, report)
            }
            Phase::Measuring { .. } | Phase::Settled => false,
        }
    }

    /// Measures the current inputs. Does not touch the display state.
    pub fn run_pass<H>(&self, ticket: RecomputeTicket, host: &mut H) -> PassReport
    where
        H: ProbeHost + ?Sized,
    {
        let started = Instant::now();
        let outcome = compute_fit(host, &self.props);
        PassReport {
            generation: ticket.generation,
            outcome,
            elapsed: started.elapsed(),
        }
    }

    /// Applies a pass result if its ticket is still current. Failed passes
    /// settle on the full content, untruncated.
    pub fn commit(&mut self, ticket: RecomputeTicket, report: PassReport) -> bool {
        let current = matches!(
            self.phase,
            Phase::Measuring { generation, .. } if generation == ticket.generation
        );
        if !current {
            log::debug!(
                "discarding stale pass for generation {} (current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        let is_expanded = self.display.is_expanded;
        self.display = match &report.outcome {
            Ok(outcome) if outcome.result.truncated => DisplayState {
                content: self.props.content.clone(),
                truncated_text: outcome.text.clone(),
                is_truncated: true,
                is_expanded,
            },
            Ok(_) => DisplayState::showing_full(&self.props.content, is_expanded),
            Err(err) => {
                log::debug!("ellipsis pass skipped, showing full content: {err}");
                DisplayState::showing_full(&self.props.content, is_expanded)
            }
        };
        self.phase = Phase::Settled;
        self.last_report = Some(report);
        true
    }

    /// Flips between the fitted prefix and the full content. Reuses the last
    /// pass; nothing is measured.
    pub fn toggle_expanded(&mut self) {
        self.display.is_expanded = !self.display.is_expanded;
    }

    /// Label of the clickable part of the affordance.
    pub fn action_label(&self) -> &str {
        if self.display.is_expanded {
            &self.props.collapse_label
        } else {
            &self.props.expand_label
        }
    }
}

//! Generated report cards for the Report page.

use crate::samples::{ReportCard, ReportGenerator};
use rellipsis::{EllipsisProps, TextEllipsis};

/// Number of cards on the Report page.
pub const CARD_COUNT: usize = 12;

pub struct ReportEntry {
    pub card: ReportCard,
    pub widget: TextEllipsis,
}

pub struct ReportState {
    seed: u64,
    entries: Vec<ReportEntry>,
}

impl ReportState {
    pub fn new() -> Self {
        Self::with_seed(ReportGenerator::new().seed())
    }

    pub fn with_seed(seed: u64) -> Self {
        let entries = ReportGenerator::with_seed(seed)
            .generate(CARD_COUNT)
            .into_iter()
            .map(|card| {
                let props = if card.is_html {
                    EllipsisProps::html(card.body.clone())
                } else {
                    EllipsisProps::new(card.body.clone())
                };
                ReportEntry {
                    widget: TextEllipsis::new(props.with_rows(card.rows)),
                    card,
                }
            })
            .collect();
        Self { seed, entries }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn entries_mut(&mut self) -> &mut [ReportEntry] {
        &mut self.entries
    }

    /// Regenerates every card from the next seed.
    pub fn reshuffle(&mut self) {
        *self = Self::with_seed(self.seed.wrapping_add(1));
    }

    /// Cards currently showing a truncated prefix.
    pub fn truncated_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| {
                let display = entry.widget.engine().display();
                display.is_truncated() && !display.is_expanded()
            })
            .count()
    }
}

impl Default for ReportState {
    fn default() -> Self {
        Self::new()
    }
}

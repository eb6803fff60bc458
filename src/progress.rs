//! Progress bar shown while the pairs are scanned

use crate::selection::{total_pairs, SelectionObserver};
use indicatif::{ProgressBar, ProgressStyle};

/// Drives an `indicatif` bar from the selector's row callbacks
pub struct PairProgress {
    bar: ProgressBar,
}

impl PairProgress {
    /// Creates a bar sized for every pair among `points` points
    pub fn new(points: usize) -> Self {
        let bar = ProgressBar::new(total_pairs(points));
        let style = ProgressStyle::default_bar()
            .template("{wide_bar} {pos}/{len} pairs ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>=");
        bar.set_style(style);

        Self { bar }
    }

    /// A bar that never draws, for tests and `--no-progress`
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn finish(&self, evaluated: u64) {
        self.bar
            .finish_with_message(format!("Evaluated {evaluated} pairs"));
    }
}

impl SelectionObserver for PairProgress {
    fn on_row_complete(&mut self, _row: usize, evaluated: u64) {
        self.bar.set_position(evaluated);
    }
}

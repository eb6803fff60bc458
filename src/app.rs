//! Ties loading, selection and saving together for the command line

use crate::config::RunConfig;
use crate::models::{Point, Selection};
use crate::points_io::{generate_points, load_points, save_pairs, save_points};
use crate::progress::PairProgress;
use crate::selection::{total_pairs, ClosestPairs};
use crate::trace::TraceRecorder;
use anyhow::Context as _;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The closest-pairs command-line application
pub struct ClosestPairsApp {
    config: RunConfig,
}

impl ClosestPairsApp {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Generates points into the input file when asked to
    fn prepare_input(&self) -> anyhow::Result<()> {
        let Some(n) = self.config.num_points else {
            return Ok(());
        };

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let points = generate_points(n, &mut rng)?;
        save_points(&self.config.input, &points)?;
        log::info!(
            "Generated {} points into {}",
            points.len(),
            self.config.input.display()
        );

        Ok(())
    }

    fn load(&self) -> anyhow::Result<Vec<Point>> {
        let points = load_points(&self.config.input)?;
        log::info!(
            "Loaded {} points from {}",
            points.len(),
            self.config.input.display()
        );
        Ok(points)
    }

    fn select(&self, points: &[Point]) -> anyhow::Result<Selection> {
        let selector = ClosestPairs::try_from(self.config.num_pairs)?;

        let available = total_pairs(points.len());
        if crate::conv_num!(u64, selector.count(), u64::MAX) > available {
            log::warn!(
                "Asked for {} pairs but {} points only form {}",
                selector.count(),
                points.len(),
                available
            );
        }

        let progress = self
            .config
            .progress
            .then(|| PairProgress::new(points.len()));
        let tracer = self.config.trace_dir.as_ref().map(|_| TraceRecorder::new());
        let mut observer = (progress, tracer);

        log::debug!(
            "Selecting {} closest pairs among {} candidates",
            selector.count(),
            available
        );
        let selection = selector.select_observed(points, &mut observer);

        let (progress, tracer) = observer;
        if let Some(progress) = progress {
            progress.finish(selection.evaluated_pairs);
        }

        if let (Some(mut tracer), Some(dir)) = (tracer, self.config.trace_dir.as_ref()) {
            tracer.finish();
            let path = tracer
                .write_report(dir)
                .context("Failed to write trace report")?;
            log::info!("Trace report written to {}", path.display());
        }

        Ok(selection)
    }

    /// Runs one full pass: generate, load, select, report and save
    pub fn run(&self) -> anyhow::Result<Selection> {
        self.prepare_input()
            .context("Failed to generate input points")?;

        let points = self.load()?;
        let selection = self.select(&points)?;

        println!("Evaluated Pairs: {}", selection.evaluated_pairs);
        println!("Insertion Shifts: {}", selection.insertion_shifts);

        save_pairs(&self.config.output, &selection.pairs)?;
        log::info!(
            "Saved {} closest pairs to {}",
            selection.len(),
            self.config.output.display()
        );

        Ok(selection)
    }
}

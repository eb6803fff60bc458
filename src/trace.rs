//! Algorithm-level tracing for a selection run
//!
//! [`TraceRecorder`] watches the scan through [`SelectionObserver`] and
//! writes a plain-text report once the run is over.

use crate::error::{Error, Result};
use crate::models::Pair;
use crate::selection::{Insertion, SelectionObserver};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Name of the report written inside the trace directory
pub const REPORT_FILE: &str = "closest_pairs.trace";

/// How many insertion events are kept for the report by default
pub const DEFAULT_EVENT_LIMIT: usize = 10_000;

/// One accepted candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionEvent {
    /// Position of the pair in enumeration order
    pub index: u64,
    pub pair: Pair,
    pub insertion: Insertion,
}

/// Collects counters and insertion events while the selector runs
#[derive(Debug, Clone)]
pub struct TraceRecorder {
    started: Instant,
    finished: Option<Duration>,
    evaluated: u64,
    inserted: u64,
    shifts: u64,
    rows: usize,
    slot_hits: Vec<u64>,
    events: Vec<InsertionEvent>,
    event_limit: usize,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::with_event_limit(DEFAULT_EVENT_LIMIT)
    }

    /// Creates a recorder that keeps at most `event_limit` insertion events
    pub fn with_event_limit(event_limit: usize) -> Self {
        Self {
            started: Instant::now(),
            finished: None,
            evaluated: 0,
            inserted: 0,
            shifts: 0,
            rows: 0,
            slot_hits: Vec::new(),
            events: Vec::new(),
            event_limit,
        }
    }

    /// Pairs scored so far
    pub const fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Candidates that made it into the buffer
    pub const fn inserted(&self) -> u64 {
        self.inserted
    }

    /// Candidates that were scored and dropped
    pub const fn rejected(&self) -> u64 {
        self.evaluated - self.inserted
    }

    pub const fn shifts(&self) -> u64 {
        self.shifts
    }

    /// How often each buffer slot received a candidate
    pub fn slot_hits(&self) -> &[u64] {
        &self.slot_hits
    }

    pub fn events(&self) -> &[InsertionEvent] {
        &self.events
    }

    /// Stops the clock; later calls keep the first reading
    pub fn finish(&mut self) {
        if self.finished.is_none() {
            self.finished = Some(self.started.elapsed());
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.finished.unwrap_or_else(|| self.started.elapsed())
    }

    /// Renders the report to any writer
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "closest-pairs trace")?;
        writeln!(writer, "elapsed: {:?}", self.elapsed())?;
        writeln!(writer, "rows scanned: {}", self.rows)?;
        writeln!(writer, "evaluated pairs: {}", self.evaluated)?;
        writeln!(writer, "inserted candidates: {}", self.inserted)?;
        writeln!(writer, "rejected candidates: {}", self.rejected())?;
        writeln!(writer, "insertion shifts: {}", self.shifts)?;

        writeln!(writer)?;
        writeln!(writer, "insertions per slot:")?;
        for (slot, hits) in self.slot_hits.iter().enumerate() {
            writeln!(writer, "  {slot:>6}: {hits}")?;
        }

        writeln!(writer)?;
        writeln!(writer, "insertions:")?;
        for event in &self.events {
            writeln!(
                writer,
                "  #{} {} -> slot {} ({} shifts)",
                event.index, event.pair, event.insertion.slot, event.insertion.shifts
            )?;
        }

        let omitted = self.inserted.saturating_sub(crate::conv_num!(u64, self.events.len(), 0));
        if omitted > 0 {
            writeln!(writer, "  ... {omitted} more")?;
        }

        writer.flush()
    }

    /// Creates `dir` if needed and writes the report into it
    ///
    /// # Returns
    /// The path of the written report
    pub fn write_report(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| Error::file(dir, e))?;

        let path = dir.join(REPORT_FILE);
        let file = File::create(&path).map_err(|e| Error::file(&path, e))?;
        self.write_to(BufWriter::new(file))
            .map_err(|e| Error::file(&path, e))?;

        Ok(path)
    }
}

impl Default for TraceRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionObserver for TraceRecorder {
    fn on_evaluated(&mut self, _index: u64, _pair: &Pair) {
        self.evaluated += 1;
    }

    fn on_inserted(&mut self, index: u64, pair: &Pair, insertion: Insertion) {
        log::trace!(
            "pair #{index} [{pair}] -> slot {} ({} shifts)",
            insertion.slot,
            insertion.shifts
        );

        self.inserted += 1;
        self.shifts += insertion.shifts;

        if self.slot_hits.len() <= insertion.slot {
            self.slot_hits.resize(insertion.slot + 1, 0);
        }
        self.slot_hits[insertion.slot] += 1;

        if self.events.len() < self.event_limit {
            self.events.push(InsertionEvent {
                index,
                pair: *pair,
                insertion,
            });
        }
    }

    fn on_row_complete(&mut self, _row: usize, _evaluated: u64) {
        self.rows += 1;
    }
}

use crate::error::Error;
use crate::models::{Pair, Point, Selection};
use crate::selection::{BoundedBuffer, SelectionObserver};

/// Number of unordered pairs among `n` points
pub fn total_pairs(n: usize) -> u64 {
    let n = crate::conv_num!(u64, n, u64::MAX);
    n.saturating_mul(n.saturating_sub(1)) / 2
}

/// Selects the `m` closest pairs of a point sequence by Manhattan distance
///
/// Every unordered pair `(P[i], P[j])` with `i < j` is scored exactly once,
/// row by row, and folded into a [`BoundedBuffer`] of capacity `m`. The scan
/// order decides ties: of two pairs at the same distance, the one met first
/// ranks first and is never displaced by the other.
///
/// # Example
/// ```
/// use closest_pairs::{ClosestPairs, Point};
///
/// let points = [Point::new(0, 0), Point::new(1, 1), Point::new(5, 5), Point::new(0, 1)];
/// let selection = ClosestPairs::new(2).select(&points);
///
/// assert_eq!(selection.pairs[0].to_string(), "1, (0,0), (0,1)");
/// assert_eq!(selection.pairs[1].to_string(), "1, (1,1), (0,1)");
/// assert_eq!(selection.evaluated_pairs, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosestPairs {
    count: usize,
}

impl ClosestPairs {
    /// Creates a selector that keeps at most `count` pairs
    pub const fn new(count: usize) -> Self {
        Self { count }
    }

    /// The number of pairs this selector keeps at most
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Runs the selection without observing it
    pub fn select(&self, points: &[Point]) -> Selection {
        self.select_observed(points, &mut ())
    }

    /// Runs the selection, reporting progress to `observer`
    ///
    /// # Returns
    /// The occupied prefix of the buffer (`min(m, n * (n - 1) / 2)` pairs,
    /// ascending by distance) together with the number of evaluated pairs
    /// and insertion shifts.
    pub fn select_observed<O>(&self, points: &[Point], observer: &mut O) -> Selection
    where
        O: SelectionObserver + ?Sized,
    {
        let mut buffer = BoundedBuffer::new(self.count);
        buffer.reserve(crate::conv_num!(usize, total_pairs(points.len()), usize::MAX));

        let mut evaluated_pairs = 0u64;
        let mut insertion_shifts = 0u64;

        for (i, &first) in points.iter().enumerate() {
            let rest = &points[i + 1..];
            if rest.is_empty() {
                break;
            }

            for &second in rest {
                let candidate = Pair::between(first, second);
                observer.on_evaluated(evaluated_pairs, &candidate);

                if let Some(insertion) = buffer.offer(candidate) {
                    insertion_shifts += insertion.shifts;
                    observer.on_inserted(evaluated_pairs, &candidate, insertion);
                }

                evaluated_pairs += 1;
            }

            observer.on_row_complete(i, evaluated_pairs);
        }

        Selection {
            pairs: buffer.into_pairs(),
            evaluated_pairs,
            insertion_shifts,
        }
    }
}

impl TryFrom<i64> for ClosestPairs {
    type Error = Error;

    /// Validates a signed pair count, rejecting negative values
    fn try_from(count: i64) -> Result<Self, Self::Error> {
        let count = usize::try_from(count).map_err(|_| Error::InvalidCount(count))?;
        Ok(Self::new(count))
    }
}

/// Shorthand for `ClosestPairs::new(m).select(points)`
pub fn closest_pairs(points: &[Point], m: usize) -> Selection {
    ClosestPairs::new(m).select(points)
}

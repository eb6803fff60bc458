use crate::models::Pair;
use crate::selection::Insertion;

/// Hooks called while the selector scans the pairs
///
/// Every method has an empty default, so implementors only override what
/// they need. Observers see the scan but cannot change its outcome.
pub trait SelectionObserver {
    /// Called for every scored pair; `index` counts from zero in
    /// enumeration order
    fn on_evaluated(&mut self, _index: u64, _pair: &Pair) {}

    /// Called after a candidate was stored in the result buffer
    fn on_inserted(&mut self, _index: u64, _pair: &Pair, _insertion: Insertion) {}

    /// Called after all pairs starting at input index `row` were scored;
    /// `evaluated` is the running total so far
    fn on_row_complete(&mut self, _row: usize, _evaluated: u64) {}
}

impl SelectionObserver for () {}

impl<O: SelectionObserver + ?Sized> SelectionObserver for &mut O {
    fn on_evaluated(&mut self, index: u64, pair: &Pair) {
        (**self).on_evaluated(index, pair);
    }

    fn on_inserted(&mut self, index: u64, pair: &Pair, insertion: Insertion) {
        (**self).on_inserted(index, pair, insertion);
    }

    fn on_row_complete(&mut self, row: usize, evaluated: u64) {
        (**self).on_row_complete(row, evaluated);
    }
}

impl<O: SelectionObserver> SelectionObserver for Option<O> {
    fn on_evaluated(&mut self, index: u64, pair: &Pair) {
        if let Some(observer) = self {
            observer.on_evaluated(index, pair);
        }
    }

    fn on_inserted(&mut self, index: u64, pair: &Pair, insertion: Insertion) {
        if let Some(observer) = self {
            observer.on_inserted(index, pair, insertion);
        }
    }

    fn on_row_complete(&mut self, row: usize, evaluated: u64) {
        if let Some(observer) = self {
            observer.on_row_complete(row, evaluated);
        }
    }
}

impl<A: SelectionObserver, B: SelectionObserver> SelectionObserver for (A, B) {
    fn on_evaluated(&mut self, index: u64, pair: &Pair) {
        self.0.on_evaluated(index, pair);
        self.1.on_evaluated(index, pair);
    }

    fn on_inserted(&mut self, index: u64, pair: &Pair, insertion: Insertion) {
        self.0.on_inserted(index, pair, insertion);
        self.1.on_inserted(index, pair, insertion);
    }

    fn on_row_complete(&mut self, row: usize, evaluated: u64) {
        self.0.on_row_complete(row, evaluated);
        self.1.on_row_complete(row, evaluated);
    }
}

//! Synchronous shared-counter strategy.

use crate::{Aggregation, Meter, OperationKind, SharedTally, Tally};

/// Accounts each event in place, under a lock, on the evaluating thread.
///
/// Totals are exact and observable through [`CounterMeter::tally`] at any
/// point during a run.
#[derive(Debug)]
pub struct CounterMeter {
    tally: SharedTally,
    aggregation: Aggregation,
}

impl CounterMeter {
    pub fn new(aggregation: Aggregation) -> Self {
        CounterMeter {
            tally: SharedTally::new(),
            aggregation,
        }
    }

    /// Handle to the live totals.
    pub fn tally(&self) -> SharedTally {
        self.tally.clone()
    }

    pub fn finish(self) -> Tally {
        self.tally.snapshot()
    }
}

impl Meter for CounterMeter {
    #[inline]
    fn record(&self, kind: OperationKind) {
        self.tally.with(|tally| tally.record(kind, &self.aggregation));
    }
}

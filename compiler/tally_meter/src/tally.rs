//! Accumulated accounting and the aggregation policy.

use crate::{OperationKind, WeightTable};

/// How events are turned into work units.
#[derive(Clone, Debug, PartialEq)]
pub enum Aggregation {
    /// Every event weighs 1.0.
    Count,
    /// Each event weighs its kind's calibrated cost.
    Weighted(WeightTable),
}

impl Aggregation {
    #[inline]
    pub fn weight_of(&self, kind: OperationKind) -> f64 {
        match self {
            Aggregation::Count => 1.0,
            Aggregation::Weighted(table) => table.weight(kind),
        }
    }
}

impl Default for Aggregation {
    fn default() -> Self {
        Aggregation::Weighted(WeightTable::default())
    }
}

/// Totals accumulated by a meter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tally {
    events: u64,
    work: f64,
    per_kind: [u64; OperationKind::COUNT],
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account one event of `kind`.
    #[inline]
    pub fn record(&mut self, kind: OperationKind, aggregation: &Aggregation) {
        self.events += 1;
        self.work += aggregation.weight_of(kind);
        self.per_kind[kind.index()] += 1;
    }

    /// Total number of events.
    pub fn events(&self) -> u64 {
        self.events
    }

    /// Weighted work total.
    pub fn work(&self) -> f64 {
        self.work
    }

    /// Number of events of one kind.
    pub fn count(&self, kind: OperationKind) -> u64 {
        self.per_kind[kind.index()]
    }

    /// Kinds with at least one event, in wire-code order.
    pub fn nonzero(&self) -> impl Iterator<Item = (OperationKind, u64)> + '_ {
        OperationKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|&(_, count)| count > 0)
    }
}

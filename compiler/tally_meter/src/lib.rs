//! Operation metering for the Tally evaluator.
//!
//! The evaluator reports each metered operation through [`Meter::record`].
//! Two strategies implement it:
//!
//! - [`CounterMeter`] updates a shared [`Tally`] synchronously.
//! - [`StreamMeter`] sends events to a consumer thread that aggregates them.
//!
//! Both apply the same [`Aggregation`] policy and produce identical totals
//! for the same sequence of events. [`MeterConfig`] picks one at session
//! start; [`ActiveMeter`] holds whichever was chosen.

mod counter;
mod errors;
mod kind;
mod shared;
mod stream;
mod tally;
mod weights;

pub use counter::CounterMeter;
pub use errors::{MeterError, WeightConfigError};
pub use kind::{OperationEvent, OperationKind};
pub use shared::SharedTally;
pub use stream::StreamMeter;
pub use tally::{Aggregation, Tally};
pub use weights::WeightTable;

/// Sink for metering events.
pub trait Meter {
    /// Account one completed operation.
    fn record(&self, kind: OperationKind);
}

/// Discards every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullMeter;

impl Meter for NullMeter {
    #[inline]
    fn record(&self, _kind: OperationKind) {}
}

/// Which accounting strategy a session uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MeterStrategy {
    /// [`CounterMeter`].
    #[default]
    Sync,
    /// [`StreamMeter`], with an optional channel capacity.
    Stream { capacity: Option<usize> },
    /// [`NullMeter`].
    Off,
}

/// Metering configuration for one session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeterConfig {
    pub strategy: MeterStrategy,
    pub aggregation: Aggregation,
}

impl MeterConfig {
    pub fn new(strategy: MeterStrategy, aggregation: Aggregation) -> Self {
        MeterConfig {
            strategy,
            aggregation,
        }
    }

    /// Start the configured meter.
    pub fn start(self) -> Result<ActiveMeter, MeterError> {
        let meter = match self.strategy {
            MeterStrategy::Sync => ActiveMeter::Counter(CounterMeter::new(self.aggregation)),
            MeterStrategy::Stream { capacity } => {
                ActiveMeter::Stream(StreamMeter::spawn(capacity, self.aggregation)?)
            }
            MeterStrategy::Off => ActiveMeter::Null(NullMeter),
        };
        Ok(meter)
    }
}

/// The meter a session is running with.
#[derive(Debug)]
pub enum ActiveMeter {
    Counter(CounterMeter),
    Stream(StreamMeter),
    Null(NullMeter),
}

impl ActiveMeter {
    /// Flush outstanding events and return the final totals.
    ///
    /// A [`NullMeter`] reports an empty tally.
    pub fn finish(self) -> Result<Tally, MeterError> {
        match self {
            ActiveMeter::Counter(meter) => Ok(meter.finish()),
            ActiveMeter::Stream(meter) => meter.finish(),
            ActiveMeter::Null(_) => Ok(Tally::new()),
        }
    }
}

impl Meter for ActiveMeter {
    #[inline]
    fn record(&self, kind: OperationKind) {
        match self {
            ActiveMeter::Counter(meter) => meter.record(kind),
            ActiveMeter::Stream(meter) => meter.record(kind),
            ActiveMeter::Null(meter) => meter.record(kind),
        }
    }
}

impl From<CounterMeter> for ActiveMeter {
    fn from(meter: CounterMeter) -> Self {
        ActiveMeter::Counter(meter)
    }
}

impl From<StreamMeter> for ActiveMeter {
    fn from(meter: StreamMeter) -> Self {
        ActiveMeter::Stream(meter)
    }
}

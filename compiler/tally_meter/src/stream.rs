//! Asynchronous event-stream strategy.
//!
//! The evaluating thread sends one [`OperationEvent`] per metered operation
//! over a crossbeam channel. A dedicated consumer thread receives events in
//! send order and folds them into a [`Tally`]. [`StreamMeter::finish`] closes
//! the channel and joins the consumer, so every event sent before it is
//! counted.
//!
//! With a bounded channel, `record` blocks while the buffer is full. That is
//! the only point where a slow consumer can stall evaluation.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};

use crate::{Aggregation, Meter, MeterError, OperationEvent, OperationKind, Tally};

/// Event-stream meter with a consumer thread.
#[derive(Debug)]
pub struct StreamMeter {
    sender: Sender<OperationEvent>,
    consumer: JoinHandle<Tally>,
    /// Set once a send has failed; later events are dropped silently.
    disconnected: AtomicBool,
    dropped: AtomicU64,
}

impl StreamMeter {
    /// Start a consumer applying `aggregation`.
    ///
    /// `capacity` of `None` gives an unbounded channel. `Some(0)` is a
    /// rendezvous channel where every send waits for the consumer.
    pub fn spawn(capacity: Option<usize>, aggregation: Aggregation) -> Result<Self, MeterError> {
        Self::spawn_with(capacity, move |events| consume(&events, &aggregation))
    }

    /// Start the meter with a custom consumer body.
    ///
    /// The consumer owns the receiving end and returns its totals once the
    /// channel closes. Returning early, or dropping the receiver, is seen by
    /// the evaluator as a disconnected consumer.
    pub fn spawn_with<F>(capacity: Option<usize>, consumer: F) -> Result<Self, MeterError>
    where
        F: FnOnce(Receiver<OperationEvent>) -> Tally + Send + 'static,
    {
        let (sender, receiver) = match capacity {
            Some(cap) => channel::bounded(cap),
            None => channel::unbounded(),
        };

        let consumer = thread::Builder::new()
            .name("tally-meter".to_string())
            .spawn(move || consumer(receiver))
            .map_err(MeterError::Spawn)?;

        tracing::debug!(?capacity, "meter consumer started");

        Ok(StreamMeter {
            sender,
            consumer,
            disconnected: AtomicBool::new(false),
            dropped: AtomicU64::new(0),
        })
    }

    /// Close the stream, wait for the consumer to drain it, and return the
    /// final totals.
    pub fn finish(self) -> Result<Tally, MeterError> {
        let StreamMeter {
            sender,
            consumer,
            disconnected,
            dropped,
        } = self;

        drop(sender);
        let tally = consumer.join().map_err(|_| MeterError::ConsumerPanicked)?;

        if disconnected.into_inner() {
            return Err(MeterError::ConsumerDisconnected {
                dropped: dropped.into_inner(),
            });
        }

        tracing::debug!(events = tally.events(), "meter consumer drained");
        Ok(tally)
    }
}

impl Meter for StreamMeter {
    fn record(&self, kind: OperationKind) {
        if self.disconnected.load(Ordering::Relaxed) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
        if self.sender.send(OperationEvent::from(kind)).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            if !self.disconnected.swap(true, Ordering::Relaxed) {
                tracing::warn!("meter consumer disconnected; counting stops");
            }
        }
    }
}

/// Consumer body: receive until every sender is gone.
fn consume(events: &Receiver<OperationEvent>, aggregation: &Aggregation) -> Tally {
    let mut tally = Tally::new();
    for event in events {
        tally.record(event.kind, aggregation);
    }
    tally
}

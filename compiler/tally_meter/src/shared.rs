//! Thread-safe shared tally handle.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Tally;

/// A [`Tally`] shared between the meter and any observer.
///
/// Cloning yields another handle to the same tally.
pub struct SharedTally(Arc<Mutex<Tally>>);

impl SharedTally {
    pub fn new() -> Self {
        SharedTally(Arc::new(Mutex::new(Tally::new())))
    }

    /// Run `f` with exclusive access.
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&mut Tally) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// Copy of the current totals.
    pub fn snapshot(&self) -> Tally {
        self.0.lock().clone()
    }
}

impl Default for SharedTally {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SharedTally {
    fn clone(&self) -> Self {
        SharedTally(Arc::clone(&self.0))
    }
}

impl fmt::Debug for SharedTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedTally({:?})", &*self.0.lock())
    }
}

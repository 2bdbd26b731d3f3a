use oscstep_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a run once a fixed number of events has been observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    limit: usize,
    seen: usize,
}

impl StopAfter {
    /// Creates an observer that stops the run at the `limit`-th event.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, seen: 0 }
    }

    /// Returns the number of events observed.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.limit).then(A::stop_early)
    }
}

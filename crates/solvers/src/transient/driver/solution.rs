/// Indicates how the driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached or passed the final time.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// A reported `(time, state)` pair from one successful advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<const N: usize> {
    /// The step number (1 for the first advance).
    pub step: usize,

    /// The time reached.
    pub time: f64,

    /// The state at `time`.
    pub state: [f64; N],
}

/// The result of a driver run.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// How the driver terminated.
    pub status: Status,

    /// One record per successful advance, in order.
    pub history: Vec<Record<N>>,

    /// Number of successful advances.
    pub steps: usize,
}

impl<const N: usize> Solution<N> {
    /// Returns the last reported record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record<N>> {
        self.history.last()
    }
}

/// Event emitted by the driver after each successful advance.
///
/// Steps are numbered from 1; there is no event for the initial state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// The step number (1 for the first advance).
    pub step: usize,

    /// The time reached by the integrator.
    pub time: f64,

    /// The state at `time`.
    pub state: [f64; N],
}

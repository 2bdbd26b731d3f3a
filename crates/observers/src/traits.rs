//! Capability traits for driver-agnostic observers.
//!
//! These traits abstract over driver-specific event and action types, enabling
//! observers to work generically across drivers.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry the time reached
//! - [`HasState`] — events that carry the state at that time
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use oscstep_core::Observer;
//! use oscstep_observers::traits::{CanStopEarly, HasState};
//!
//! struct Ceiling {
//!     limit: f64,
//! }
//!
//! impl<E: HasState<2>, A: CanStopEarly> Observer<E, A> for Ceiling {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.state()[0] > self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use oscstep_solvers::transient::driver;

/// An event that carries the time reached.
pub trait HasTime {
    /// Returns the time for this event.
    fn time(&self) -> f64;
}

/// An event that carries an `N`-component state.
pub trait HasState<const N: usize> {
    /// Returns the state for this event.
    fn state(&self) -> &[f64; N];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the driver early.
    fn stop_early() -> Self;
}

// --- driver::Event ---

impl<const N: usize> HasTime for driver::Event<N> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl<const N: usize> HasState<N> for driver::Event<N> {
    fn state(&self) -> &[f64; N] {
        &self.state
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for driver::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

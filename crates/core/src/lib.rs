//! Core traits and types for oscstep.
//!
//! This crate defines the shared abstractions that integrators, drivers, and
//! observers build on:
//!
//! - [`OdeSystem`] — the right-hand side `dy/dt = f(t, y)` of an ODE system
//! - [`Integrator`] — an adaptive stepper that advances a state to a target time
//! - [`StateVector`] — a fixed-size real-valued state container
//! - [`Tolerances`] — the relative/absolute error bounds for an integrator
//! - [`Observer`] — receives driver events and optionally returns control actions

mod integrator;
mod observer;
mod state;
mod system;
mod tolerances;

pub use integrator::Integrator;
pub use observer::Observer;
pub use state::StateVector;
pub use system::OdeSystem;
pub use tolerances::{ToleranceError, Tolerances};

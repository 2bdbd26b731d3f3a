//! Integrators and drivers for oscstep.
//!
//! - [`integrator`] — adaptive [`Integrator`] handles backed by embedded
//!   Runge–Kutta pairs
//! - [`transient`] — drivers that step an integrator through a reporting
//!   schedule and emit one record per step
//!
//! [`Integrator`]: oscstep_core::Integrator

pub mod integrator;
pub mod transient;

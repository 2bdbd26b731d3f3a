//! Drivers for transient runs.
//!
//! A driver owns the state and an [`Integrator`] handle, requests the
//! integrator to advance through a schedule of reporting times, and reports
//! each reached state to an observer.
//!
//! # Drivers
//!
//! - [`driver`] — fixed reporting increments from a start time to a final time
//!
//! [`Integrator`]: oscstep_core::Integrator

pub mod driver;

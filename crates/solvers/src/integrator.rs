//! Adaptive integrator handles.
//!
//! Each integrator in this module implements [`Integrator`] for a system that
//! implements [`OdeSystem`].
//!
//! # Integrators
//!
//! - [`dopri`] — Dormand–Prince 5(4) and 8(5,3) pairs with adaptive step-size
//!   control
//!
//! [`Integrator`]: oscstep_core::Integrator
//! [`OdeSystem`]: oscstep_core::OdeSystem

pub mod dopri;

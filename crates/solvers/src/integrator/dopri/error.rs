use ode_solvers::dop_shared::IntegrationError;
use thiserror::Error;

/// Errors that can occur when creating a [`Dopri`](super::Dopri) integrator.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CreateError {
    #[error("initial time must be finite, got {0}")]
    Time(f64),

    #[error("initial state component {index} must be finite, got {value}")]
    State { index: usize, value: f64 },
}

/// Errors that can occur while a [`Dopri`](super::Dopri) integrator advances.
#[derive(Debug, Error)]
pub enum Error {
    #[error("target t={target} is not ahead of current time t={time}")]
    InvalidTarget { time: f64, target: f64 },

    #[error("tolerances are fixed once integration has started (t={time})")]
    TolerancesLocked { time: f64 },

    #[error("integration from t={time} to t={target} failed: {source}")]
    Integration {
        time: f64,
        target: f64,
        #[source]
        source: IntegrationError,
    },

    #[error("no solution produced between t={time} and t={target}")]
    NoOutput { time: f64, target: f64 },

    #[error("solution is not finite at t={target}")]
    NonFinite { target: f64 },
}

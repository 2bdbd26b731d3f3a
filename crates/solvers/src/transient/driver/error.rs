use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a driver run.
///
/// Every error is fatal: the run stops at the first failure and the integrator
/// and state are released before the error is returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create integrator at t={time}")]
    Create {
        time: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("failed to set tolerances")]
    Tolerances(#[source] Box<dyn StdError + Send + Sync>),

    #[error("integrator failed at t={time} (step {step}, target t={target})")]
    Step {
        step: usize,
        time: f64,
        target: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("integrator did not advance past t={time} (step {step}, reached t={reached})")]
    Stalled { step: usize, time: f64, reached: f64 },
}

impl Error {
    pub(crate) fn create<E: StdError + Send + Sync + 'static>(time: f64, err: E) -> Self {
        Self::Create {
            time,
            source: Box::new(err),
        }
    }

    pub(crate) fn tolerances<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Tolerances(Box::new(err))
    }

    pub(crate) fn step<E: StdError + Send + Sync + 'static>(
        step: usize,
        time: f64,
        target: f64,
        err: E,
    ) -> Self {
        Self::Step {
            step,
            time,
            target,
            source: Box::new(err),
        }
    }

    /// Returns the time at which the run failed.
    #[must_use]
    pub fn time(&self) -> Option<f64> {
        match self {
            Self::Create { time, .. } | Self::Step { time, .. } | Self::Stalled { time, .. } => {
                Some(*time)
            }
            Self::Tolerances(_) => None,
        }
    }
}

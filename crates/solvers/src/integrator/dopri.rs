//! Dormand–Prince integrators backed by the `ode_solvers` crate.
//!
//! [`Dopri`] wraps an [`OdeSystem`] into an [`Integrator`] handle. Each call to
//! [`advance`](Integrator::advance) runs an embedded Runge–Kutta pair from the
//! handle's current time to the requested target, choosing internal step sizes
//! to satisfy the configured [`Tolerances`]. The handle reports the target time
//! as reached, matching a "normal" output mode where the solution is delivered
//! at exactly the requested time.
//!
//! # Example
//!
//! ```ignore
//! use oscstep_core::{Integrator, Tolerances};
//! use oscstep_solvers::integrator::dopri::{Dopri, Method};
//!
//! let system = |_t: f64, y: &[f64; 2]| [y[1], -y[0]];
//! let mut state = [1.0, 0.0];
//!
//! let mut dopri = Dopri::new(system, Method::Dopri5, 0.0, &state)?;
//! dopri.set_tolerances(Tolerances::new(1e-8, 1e-10)?)?;
//! let t = dopri.advance(1.0, &mut state)?;
//! ```

mod error;

pub use error::{CreateError, Error};

use log::{debug, trace};
use ode_solvers::{SVector, System};
use oscstep_core::{Integrator, OdeSystem, Tolerances};

/// Supported embedded Runge–Kutta pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Adaptive Dormand–Prince 5(4) Runge–Kutta method.
    ///
    /// An explicit embedded method that computes both 5th and 4th order
    /// solutions to estimate local truncation error. A good general-purpose
    /// choice for non-stiff problems.
    #[default]
    Dopri5,

    /// Adaptive Dormand–Prince 8(5,3) Runge–Kutta method.
    ///
    /// A higher-order embedded method that is typically more expensive per
    /// step than `Dopri5` but needs fewer steps at tight tolerances.
    Dop853,
}

/// Work counters accumulated over the life of a [`Dopri`] handle.
///
/// Counters saturate at `u64::MAX` instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of successful calls to `advance`.
    pub advances: u64,

    /// Number of internal steps accepted by the error controller.
    pub accepted_steps: u64,

    /// Number of internal steps rejected by the error controller.
    pub rejected_steps: u64,

    /// Number of right-hand side evaluations.
    pub evaluations: u64,
}

impl Stats {
    fn record(&mut self, run: &ode_solvers::dop_shared::Stats) {
        self.advances = self.advances.saturating_add(1);
        self.accepted_steps = self
            .accepted_steps
            .saturating_add(u64::from(run.accepted_steps));
        self.rejected_steps = self
            .rejected_steps
            .saturating_add(u64::from(run.rejected_steps));
        self.evaluations = self.evaluations.saturating_add(u64::from(run.num_eval));
    }
}

/// An adaptive Dormand–Prince integrator handle for an `N`-dimensional system.
pub struct Dopri<S, const N: usize> {
    system: S,
    method: Method,
    time: f64,
    tolerances: Tolerances,
    started: bool,
    stats: Stats,
}

impl<S: OdeSystem<N>, const N: usize> Dopri<S, N> {
    /// Creates an integrator for `system` starting at `t0`.
    ///
    /// The integrator uses [`Tolerances::default`] until
    /// [`set_tolerances`](Integrator::set_tolerances) is called.
    ///
    /// # Errors
    ///
    /// Returns a [`CreateError`] if `t0` or any component of `initial` is not
    /// finite.
    pub fn new(
        system: S,
        method: Method,
        t0: f64,
        initial: &[f64; N],
    ) -> Result<Self, CreateError> {
        if !t0.is_finite() {
            return Err(CreateError::Time(t0));
        }
        if let Some((index, &value)) = initial.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(CreateError::State { index, value });
        }

        debug!("created {method:?} integrator at t={t0}");

        Ok(Self {
            system,
            method,
            time: t0,
            tolerances: Tolerances::default(),
            started: false,
            stats: Stats::default(),
        })
    }
}

impl<S, const N: usize> Dopri<S, N> {
    /// Returns the time the integrator has reached.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the integration method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the tolerances in effect.
    #[must_use]
    pub fn tolerances(&self) -> Tolerances {
        self.tolerances
    }

    /// Returns the work counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }
}

impl<S: OdeSystem<N>, const N: usize> Integrator<N> for Dopri<S, N> {
    type Error = Error;

    fn set_tolerances(&mut self, tolerances: Tolerances) -> Result<(), Self::Error> {
        if self.started {
            return Err(Error::TolerancesLocked { time: self.time });
        }
        self.tolerances = tolerances;
        Ok(())
    }

    fn advance(&mut self, target: f64, state: &mut [f64; N]) -> Result<f64, Self::Error> {
        let time = self.time;
        if !target.is_finite() || target <= time {
            return Err(Error::InvalidTarget { time, target });
        }
        self.started = true;

        let rhs = Rhs {
            system: &self.system,
        };
        let y_start: SVector<f64, N> = (*state).into();
        let rel_tol = self.tolerances.relative();
        let abs_tol = self.tolerances.absolute();
        let integration_error = |source| Error::Integration {
            time,
            target,
            source,
        };

        // A zero output spacing records every accepted step; the last one is
        // the solution at `target`.
        let (stats, y_end) = match self.method {
            Method::Dopri5 => {
                let mut stepper =
                    ode_solvers::Dopri5::new(rhs, time, target, 0.0, y_start, rel_tol, abs_tol);
                let stats = stepper.integrate().map_err(integration_error)?;
                (stats, stepper.y_out().last().copied())
            }
            Method::Dop853 => {
                let mut stepper =
                    ode_solvers::Dop853::new(rhs, time, target, 0.0, y_start, rel_tol, abs_tol);
                let stats = stepper.integrate().map_err(integration_error)?;
                (stats, stepper.y_out().last().copied())
            }
        };

        let y_end: [f64; N] = y_end.ok_or(Error::NoOutput { time, target })?.into();
        if y_end.iter().any(|v| !v.is_finite()) {
            return Err(Error::NonFinite { target });
        }

        *state = y_end;
        self.time = target;
        self.stats.record(&stats);

        trace!(
            "advanced t={time} -> t={target} ({} accepted, {} rejected)",
            stats.accepted_steps, stats.rejected_steps
        );

        Ok(target)
    }
}

impl<S, const N: usize> Drop for Dopri<S, N> {
    fn drop(&mut self) {
        debug!(
            "releasing {:?} integrator at t={}: {:?}",
            self.method, self.time, self.stats
        );
    }
}

/// Internal wrapper that adapts an [`OdeSystem`] into an `ode_solvers` system.
struct Rhs<'a, S> {
    system: &'a S,
}

impl<S: OdeSystem<N>, const N: usize> System<f64, SVector<f64, N>> for Rhs<'_, S> {
    fn system(&self, x: f64, y: &SVector<f64, N>, dy: &mut SVector<f64, N>) {
        let y: [f64; N] = (*y).into();
        *dy = self.system.derivative(x, &y).into();
    }
}

//! Fixed-increment driver for adaptive integrators.
//!
//! The driver steps an [`Integrator`] from `t0` toward `tf`, requesting a
//! target every `dt`. The integrator is free to take whatever internal steps it
//! needs; the driver only asks for monotonically increasing targets and
//! reports the state it gets back:
//!
//! ```text
//! t = t0
//! while t < tf:
//!     k += 1
//!     t = integrator.advance(t0 + k * dt, state)
//!     report (t, state)
//!     if t passed its target: k = last k with t0 + k * dt <= t
//! ```
//!
//! The final report may land past `tf`, since the loop condition is checked
//! before each request and the last target is not clamped.
//!
//! # Example
//!
//! ```ignore
//! use oscstep_solvers::{integrator::dopri::{Dopri, Method}, transient::driver};
//!
//! let schedule = driver::Schedule::new(0.0, 2.0, 0.01)?;
//! let solution = driver::solve_unobserved(
//!     |t0, y0| Dopri::new(system, Method::Dopri5, t0, y0),
//!     &schedule,
//!     tolerances,
//!     StateVector::new(initial),
//! )?;
//!
//! for record in &solution.history {
//!     println!("t={}: {:?}", record.time, record.state);
//! }
//! ```

mod action;
mod error;
mod event;
mod schedule;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use schedule::{MAX_STEPS, Schedule, ScheduleError};
pub use solution::{Record, Solution, Status};

use std::{error::Error as StdError, ops::DerefMut};

use log::{debug, trace, warn};
use oscstep_core::{Integrator, Observer, Tolerances};

/// Runs an integrator through a reporting schedule.
///
/// # Algorithm
///
/// 1. Create the integrator at `t0` from the initial state.
/// 2. Set the tolerances.
/// 3. While the current time is less than `tf`:
///    - Request an advance to the next scheduled target `t0 + k * dt`.
///    - Require the reached time to be strictly greater than the current one.
///    - If the integrator went past its target, resume from the first
///      scheduled target after the reached time.
///    - Record `(time, state)` and emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 4. Return the solution with one record per successful advance.
///
/// The driver owns both the integrator and `state`. Each is dropped exactly
/// once before this function returns, whether the run completes, stops early,
/// or fails.
///
/// # Errors
///
/// Returns an error, without retrying, if creating the integrator fails, if
/// setting the tolerances fails, or on the first advance that fails or does
/// not move time forward. Observers have already seen every record made
/// before the failure.
pub fn solve<C, I, E, V, Obs, const N: usize>(
    create: C,
    schedule: &Schedule,
    tolerances: Tolerances,
    mut state: V,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    C: FnOnce(f64, &[f64; N]) -> Result<I, E>,
    I: Integrator<N>,
    E: StdError + Send + Sync + 'static,
    V: DerefMut<Target = [f64; N]>,
    Obs: Observer<Event<N>, Action>,
{
    let t0 = schedule.t0();
    let tf = schedule.tf();

    let mut integrator = create(t0, &*state).map_err(|err| Error::create(t0, err))?;
    integrator
        .set_tolerances(tolerances)
        .map_err(Error::tolerances)?;

    debug!(
        "driving t={t0} -> t={tf} every {} (rtol={}, atol={})",
        schedule.dt(),
        tolerances.relative(),
        tolerances.absolute()
    );

    let mut history = Vec::new();
    let mut time = t0;
    let mut step = 0;
    let mut index = 0;

    while time < tf {
        step += 1;
        index += 1;
        let target = schedule.target(index);

        let reached = integrator.advance(target, &mut *state).map_err(|err| {
            warn!("advance to t={target} failed at t={time}: {err}");
            Error::step(step, time, target, err)
        })?;

        if reached.is_nan() || reached <= time {
            return Err(Error::Stalled {
                step,
                time,
                reached,
            });
        }
        time = reached;
        if reached > target && reached < tf {
            index = schedule.index_at(reached);
            trace!("overshot t={target} to t={reached}, resuming after target {index}");
        }

        let record = Record {
            step,
            time,
            state: *state,
        };
        history.push(record);

        let event = Event {
            step,
            time,
            state: record.state,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("stopped by observer at t={time} after {step} steps");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }
    }

    debug!("completed {step} steps, final t={time}");

    Ok(Solution {
        status: Status::Complete,
        history,
        steps: step,
    })
}

/// Runs an integrator through a reporting schedule without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<C, I, E, V, const N: usize>(
    create: C,
    schedule: &Schedule,
    tolerances: Tolerances,
    state: V,
) -> Result<Solution<N>, Error>
where
    C: FnOnce(f64, &[f64; N]) -> Result<I, E>,
    I: Integrator<N>,
    E: StdError + Send + Sync + 'static,
    V: DerefMut<Target = [f64; N]>,
{
    solve(create, schedule, tolerances, state, ())
}

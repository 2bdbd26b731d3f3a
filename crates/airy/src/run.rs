use std::io::{self, Write};

use log::info;
use oscstep_core::{Observer, StateVector};
use oscstep_observers::LinePrinter;
use oscstep_solvers::{
    integrator::dopri::{Dopri, Method},
    transient::driver::{self, Action, Event, Solution},
};
use thiserror::Error;

use crate::{AiryEquation, ConfigError, RunConfig, special};

/// Errors that can occur during an Airy run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Driver(#[from] driver::Error),

    #[error("failed to write output")]
    Output(#[source] io::Error),
}

impl RunError {
    /// Returns the time at which integration failed, if it got that far.
    #[must_use]
    pub fn time(&self) -> Option<f64> {
        match self {
            Self::Driver(err) => err.time(),
            Self::Config(_) | Self::Output(_) => None,
        }
    }
}

/// Integrates the Airy equation from `(Ai(t0), Ai'(t0))` and writes one line
/// per reported step to `writer`.
///
/// # Errors
///
/// Returns an error if the config is invalid, if the integrator cannot be
/// created or fails on any step, or if writing the output fails.
pub fn run<W: Write>(config: &RunConfig, writer: W) -> Result<Solution<2>, RunError> {
    let schedule = config.schedule()?;
    let tolerances = config.tolerances()?;
    let method = Method::from(config.method);

    let initial = StateVector::new(special::initial_state(schedule.t0()));
    info!(
        "integrating y'' = t*y with {method:?} from t={} to t={} every {}, y0 = {:?}",
        schedule.t0(),
        schedule.tf(),
        schedule.dt(),
        *initial
    );

    let mut printer = LinePrinter::<_, 2>::new(writer);
    if let Some(digits) = config.precision {
        printer = printer.precision(digits);
    }

    let result = driver::solve(
        |t0: f64, y0: &[f64; 2]| Dopri::new(AiryEquation, method, t0, y0),
        &schedule,
        tolerances,
        initial,
        |event: &Event<2>| -> Option<Action> { printer.observe(event) },
    );
    let flushed = printer.finish();

    let solution = result?;
    flushed.map_err(RunError::Output)?;

    info!("completed {} steps ({:?})", solution.steps, solution.status);
    Ok(solution)
}

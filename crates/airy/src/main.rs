//! # Airy equation run
//!
//! Integrates `y'' = t·y` from `(Ai(t0), Ai'(t0))` and prints the state at
//! every reporting step.
//!
//! ```sh
//! cargo run --bin airy -- --tf 2 --dt 0.01
//! RUST_LOG=debug cargo run --bin airy -- --config airy.toml
//! ```

use std::{error::Error as StdError, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::error;
use oscstep_airy::{ConfigError, MethodName, RunConfig, RunError, run};

#[derive(Debug, Parser)]
#[command(name = "airy")]
#[command(about = "Integrate the Airy equation y'' = t*y from Ai initial conditions")]
#[command(version)]
struct Cli {
    /// TOML config file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start time.
    #[arg(long, allow_negative_numbers = true)]
    t0: Option<f64>,

    /// Final time.
    #[arg(long, allow_negative_numbers = true)]
    tf: Option<f64>,

    /// Reporting increment.
    #[arg(long)]
    dt: Option<f64>,

    /// Relative tolerance.
    #[arg(long)]
    rtol: Option<f64>,

    /// Absolute tolerance.
    #[arg(long)]
    atol: Option<f64>,

    /// Integration method.
    #[arg(long, value_enum)]
    method: Option<MethodName>,

    /// Decimal places in printed output.
    #[arg(long)]
    precision: Option<usize>,
}

impl Cli {
    /// Loads the config file, if any, and applies flag overrides.
    fn resolve(&self) -> Result<RunConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(t0) = self.t0 {
            config.t0 = t0;
        }
        if let Some(tf) = self.tf {
            config.tf = tf;
        }
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
        if let Some(rtol) = self.rtol {
            config.rtol = rtol;
        }
        if let Some(atol) = self.atol {
            config.atol = atol;
        }
        if let Some(method) = self.method {
            config.method = method;
        }
        if self.precision.is_some() {
            config.precision = self.precision;
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(err) => {
            report(&err);
            return ExitCode::from(2);
        }
    };

    match run(&config, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(t) = err.time() {
                error!("run aborted at t={t}");
            }
            report(&err);
            if matches!(err, RunError::Config(_)) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Prints an error and its chain of causes to stderr.
fn report(err: &dyn StdError) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

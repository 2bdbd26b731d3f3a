//! Run configuration.
//!
//! A [`RunConfig`] is read from an optional TOML file and then overridden by
//! command-line flags. Every field has a default, so an empty file (or no
//! file) is a valid configuration:
//!
//! ```toml
//! t0 = 0.0
//! tf = 2.0
//! dt = 0.01
//! rtol = 1.0e-6
//! atol = 1.0e-8
//! method = "dopri5"
//! precision = 6
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use oscstep_core::{ToleranceError, Tolerances};
use oscstep_solvers::{
    integrator::dopri::Method,
    transient::driver::{Schedule, ScheduleError},
};
use serde::Deserialize;
use thiserror::Error;

/// Integration method names accepted in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MethodName {
    /// Dormand–Prince 5(4).
    #[default]
    Dopri5,

    /// Dormand–Prince 8(5,3).
    Dop853,
}

impl From<MethodName> for Method {
    fn from(name: MethodName) -> Self {
        match name {
            MethodName::Dopri5 => Method::Dopri5,
            MethodName::Dop853 => Method::Dop853,
        }
    }
}

/// Configuration for one Airy run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Start time.
    pub t0: f64,

    /// Final time. The last report may land past it.
    pub tf: f64,

    /// Reporting increment.
    pub dt: f64,

    /// Relative tolerance.
    pub rtol: f64,

    /// Absolute tolerance.
    pub atol: f64,

    /// Integration method.
    pub method: MethodName,

    /// Decimal places in printed output; shortest round-trip form if unset.
    pub precision: Option<usize>,
}

/// Errors that can occur when loading or validating a [`RunConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("invalid tolerances: {0}")]
    Tolerances(#[from] ToleranceError),
}

impl Default for RunConfig {
    fn default() -> Self {
        let tolerances = Tolerances::default();
        Self {
            t0: 0.0,
            tf: 2.0,
            dt: 0.01,
            rtol: tolerances.relative(),
            atol: tolerances.absolute(),
            method: MethodName::default(),
            precision: None,
        }
    }
}

impl RunConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or has
    /// unknown or mistyped fields.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns the validated reporting schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Schedule`] if the times or increment are invalid.
    pub fn schedule(&self) -> Result<Schedule, ConfigError> {
        Ok(Schedule::new(self.t0, self.tf, self.dt)?)
    }

    /// Returns the validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerances`] if either tolerance is invalid.
    pub fn tolerances(&self) -> Result<Tolerances, ConfigError> {
        Ok(Tolerances::new(self.rtol, self.atol)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let config = RunConfig::default();
        assert_eq!(config, RunConfig::from_toml_str("").unwrap());

        let schedule = config.schedule().unwrap();
        assert_relative_eq!(schedule.t0(), 0.0);
        assert_relative_eq!(schedule.tf(), 2.0);
        assert_relative_eq!(schedule.dt(), 0.01);
        assert_eq!(config.tolerances().unwrap(), Tolerances::new(1e-6, 1e-8).unwrap());
        assert_eq!(Method::from(config.method), Method::Dopri5);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = RunConfig::from_toml_str(
            r#"
            tf = 5.0
            method = "dop853"
            precision = 4
            "#,
        )
        .unwrap();

        assert_relative_eq!(config.tf, 5.0);
        assert_relative_eq!(config.dt, 0.01);
        assert_eq!(config.method, MethodName::Dop853);
        assert_eq!(config.precision, Some(4));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = RunConfig::from_toml_str("t_end = 3.0").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let config = RunConfig::from_toml_str("tf = -1.0").unwrap();
        assert!(matches!(
            config.schedule(),
            Err(ConfigError::Schedule(ScheduleError::Empty))
        ));

        let config = RunConfig::from_toml_str("rtol = -1.0").unwrap();
        assert!(matches!(
            config.tolerances(),
            Err(ConfigError::Tolerances(ToleranceError::Relative))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = RunConfig::load(Path::new("/nonexistent/airy.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

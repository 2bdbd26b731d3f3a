use thiserror::Error;

/// Relative and absolute error tolerances for an adaptive integrator.
///
/// An integrator accepts a step when its local error estimate for each
/// component `i` stays within `absolute + relative * |y_i|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    relative: f64,
    absolute: f64,
}

/// Errors that can occur when validating tolerances.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceError {
    #[error("relative tolerance must be finite and non-negative")]
    Relative,

    #[error("absolute tolerance must be finite and non-negative")]
    Absolute,

    #[error("relative and absolute tolerances cannot both be zero")]
    BothZero,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            relative: 1e-6,
            absolute: 1e-8,
        }
    }
}

impl Tolerances {
    /// Creates validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite, or if
    /// both are zero.
    pub fn new(relative: f64, absolute: f64) -> Result<Self, ToleranceError> {
        if !relative.is_finite() || relative < 0.0 {
            return Err(ToleranceError::Relative);
        }
        if !absolute.is_finite() || absolute < 0.0 {
            return Err(ToleranceError::Absolute);
        }
        if relative == 0.0 && absolute == 0.0 {
            return Err(ToleranceError::BothZero);
        }

        Ok(Self { relative, absolute })
    }

    /// Returns the relative tolerance.
    #[must_use]
    pub fn relative(&self) -> f64 {
        self.relative
    }

    /// Returns the absolute tolerance.
    #[must_use]
    pub fn absolute(&self) -> f64 {
        self.absolute
    }
}

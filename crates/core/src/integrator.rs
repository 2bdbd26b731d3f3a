use crate::Tolerances;

/// An adaptive integrator handle that advances an ODE state in time.
///
/// The handle is created for a particular system, start time, and initial
/// state (see the concrete integrator's constructor), configured once with
/// [`set_tolerances`](Integrator::set_tolerances), and then asked repeatedly
/// to [`advance`](Integrator::advance) to increasing target times. How it gets
/// there (step sizes, trial steps, error control) is up to the integrator.
///
/// Any resources held by the handle are released when it is dropped.
pub trait Integrator<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sets the relative and absolute tolerances.
    ///
    /// Tolerances are fixed once integration begins.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the tolerances cannot be applied, for example
    /// because the integrator has already advanced.
    fn set_tolerances(&mut self, tolerances: Tolerances) -> Result<(), Self::Error>;

    /// Advances `state` from the integrator's current time to `target`.
    ///
    /// On success `state` holds the solution at the returned time, which is
    /// the time actually reached.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the integrator fails to reach `target`.
    /// The contents of `state` are unspecified after a failure.
    fn advance(&mut self, target: f64, state: &mut [f64; N]) -> Result<f64, Self::Error>;
}

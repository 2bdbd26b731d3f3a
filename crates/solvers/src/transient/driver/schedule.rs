use thiserror::Error;

/// Largest number of reporting steps a schedule may span.
pub const MAX_STEPS: usize = u32::MAX as usize;

/// Reporting schedule for a driver run: from `t0` to `tf` in increments of `dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    t0: f64,
    tf: f64,
    dt: f64,
}

/// Errors that can occur when validating a schedule.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("start and final times must be finite")]
    NonFiniteTime,

    #[error("final time must be greater than start time")]
    Empty,

    #[error("reporting increment must be finite and positive")]
    Increment,

    #[error("schedule spans more than {MAX_STEPS} reporting steps")]
    TooManySteps,
}

impl Schedule {
    /// Creates a validated schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if either time is non-finite, if `tf <= t0`, if `dt`
    /// is not finite and positive, or if reaching `tf` takes more than
    /// [`MAX_STEPS`] increments.
    pub fn new(t0: f64, tf: f64, dt: f64) -> Result<Self, ScheduleError> {
        if !t0.is_finite() || !tf.is_finite() {
            return Err(ScheduleError::NonFiniteTime);
        }
        if tf <= t0 {
            return Err(ScheduleError::Empty);
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ScheduleError::Increment);
        }
        #[allow(clippy::cast_precision_loss)]
        let limit = MAX_STEPS as f64;
        if (tf - t0) / dt > limit {
            return Err(ScheduleError::TooManySteps);
        }

        Ok(Self { t0, tf, dt })
    }

    /// Returns the start time.
    #[must_use]
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Returns the final time.
    #[must_use]
    pub fn tf(&self) -> f64 {
        self.tf
    }

    /// Returns the reporting increment.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the target time for the `step`-th advance.
    ///
    /// Targets are computed from `t0` rather than accumulated, so rounding
    /// does not drift over long runs.
    #[must_use]
    pub fn target(&self, step: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let k = step as f64;
        self.t0 + k * self.dt
    }

    /// Returns the number of advances a run makes when every advance lands
    /// on its target.
    ///
    /// The last target may pass `tf`; it is never clamped.
    #[must_use]
    pub fn expected_steps(&self) -> usize {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mut steps = ((self.tf - self.t0) / self.dt).ceil() as usize;

        // Correct for rounding in the division.
        while self.target(steps) < self.tf {
            steps += 1;
        }
        while steps > 1 && self.target(steps - 1) >= self.tf {
            steps -= 1;
        }
        steps
    }

    /// Returns the index of the last target at or before `time`, or zero if
    /// `time` precedes the first target.
    ///
    /// The index never exceeds [`expected_steps`](Self::expected_steps).
    #[must_use]
    pub fn index_at(&self, time: f64) -> usize {
        if time.is_nan() || time < self.t0 {
            return 0;
        }
        let last = self.expected_steps();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mut index = (((time - self.t0) / self.dt).floor() as usize).min(last);

        while index < last && self.target(index + 1) <= time {
            index += 1;
        }
        while index > 0 && self.target(index) > time {
            index -= 1;
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn targets_are_multiples_of_dt() {
        let schedule = Schedule::new(1.0, 2.0, 0.25).unwrap();
        assert_relative_eq!(schedule.target(0), 1.0);
        assert_relative_eq!(schedule.target(1), 1.25);
        assert_relative_eq!(schedule.target(4), 2.0);
    }

    #[test]
    fn expected_steps_rounds_up() {
        assert_eq!(Schedule::new(0.0, 2.0, 0.01).unwrap().expected_steps(), 200);
        assert_eq!(Schedule::new(0.0, 1.0, 0.3).unwrap().expected_steps(), 4);
        assert_eq!(Schedule::new(0.0, 1.0, 5.0).unwrap().expected_steps(), 1);
        assert_eq!(
            Schedule::new(0.0, 1.0, 1e-9).unwrap().expected_steps(),
            1_000_000_000
        );
    }

    #[test]
    fn rejects_schedules_with_too_many_steps() {
        assert_eq!(
            Schedule::new(0.0, 1.0, 1e-300),
            Err(ScheduleError::TooManySteps)
        );
        assert_eq!(
            Schedule::new(-1e308, 1e308, 1.0),
            Err(ScheduleError::TooManySteps)
        );
        assert!(Schedule::new(0.0, 2.0, 1e-9).is_ok());
    }

    #[test]
    fn index_at_finds_the_last_target_not_after_a_time() {
        let schedule = Schedule::new(0.0, 1.0, 0.1).unwrap();
        assert_eq!(schedule.index_at(-1.0), 0);
        assert_eq!(schedule.index_at(0.0), 0);
        assert_eq!(schedule.index_at(0.05), 0);
        assert_eq!(schedule.index_at(0.2), 2);
        assert_eq!(schedule.index_at(0.6), 5);
        assert_eq!(schedule.index_at(0.65), 6);
        assert_eq!(schedule.index_at(1e300), 10);
    }

    #[test]
    fn rejects_invalid_schedules() {
        assert_eq!(
            Schedule::new(f64::NAN, 1.0, 0.1),
            Err(ScheduleError::NonFiniteTime)
        );
        assert_eq!(
            Schedule::new(0.0, f64::INFINITY, 0.1),
            Err(ScheduleError::NonFiniteTime)
        );
        assert_eq!(Schedule::new(1.0, 1.0, 0.1), Err(ScheduleError::Empty));
        assert_eq!(Schedule::new(2.0, 1.0, 0.1), Err(ScheduleError::Empty));
        assert_eq!(Schedule::new(0.0, 1.0, 0.0), Err(ScheduleError::Increment));
        assert_eq!(Schedule::new(0.0, 1.0, -0.1), Err(ScheduleError::Increment));
    }
}

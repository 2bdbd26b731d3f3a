/// The right-hand side of a first-order ODE system with `N` state variables.
///
/// An `OdeSystem` maps the independent variable `t` and the current state `y`
/// to the derivative `dy/dt`. Integrators may call it any number of times,
/// including repeatedly at the same `t` during trial steps, so implementations
/// must not rely on call order or carry mutable state between calls.
///
/// Closures of the form `Fn(f64, &[f64; N]) -> [f64; N]` implement this trait,
/// which lets any context the derivative needs be captured directly.
///
/// # Example
///
/// ```
/// use oscstep_core::OdeSystem;
///
/// let omega = 2.0;
/// let oscillator = move |_t: f64, y: &[f64; 2]| [y[1], -omega * omega * y[0]];
///
/// assert_eq!(oscillator.derivative(0.0, &[1.0, 0.0]), [0.0, -4.0]);
/// ```
pub trait OdeSystem<const N: usize> {
    /// Returns the derivative of `y` at `t`.
    fn derivative(&self, t: f64, y: &[f64; N]) -> [f64; N];
}

impl<F, const N: usize> OdeSystem<N> for F
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    fn derivative(&self, t: f64, y: &[f64; N]) -> [f64; N] {
        self(t, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Decay {
        rate: f64,
    }

    impl OdeSystem<1> for Decay {
        fn derivative(&self, _t: f64, y: &[f64; 1]) -> [f64; 1] {
            [-self.rate * y[0]]
        }
    }

    fn evaluate<S: OdeSystem<1>>(system: &S, t: f64, y: f64) -> f64 {
        system.derivative(t, &[y])[0]
    }

    #[test]
    fn struct_system() {
        let decay = Decay { rate: 0.5 };
        assert_eq!(evaluate(&decay, 0.0, 4.0), -2.0);
    }

    #[test]
    fn closure_system_captures_context() {
        let offset = 3.0;
        let system = move |t: f64, y: &[f64; 1]| [t + y[0] + offset];
        assert_eq!(evaluate(&system, 1.0, 2.0), 6.0);
    }
}

use std::ops::{Deref, DerefMut};

/// A fixed-size, real-valued state container.
///
/// `StateVector` owns the `N` components of an ODE state. It derefs to
/// `[f64; N]`, so it can be indexed and handed to an [`Integrator`] as the
/// in/out state of an advance.
///
/// [`Integrator`]: crate::Integrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector<const N: usize>([f64; N]);

impl<const N: usize> StateVector<N> {
    /// Creates a state vector from its components.
    #[must_use]
    pub const fn new(components: [f64; N]) -> Self {
        Self(components)
    }

    /// Returns the number of components.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if the vector has no components.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Consumes the vector and returns its components.
    #[must_use]
    pub const fn into_inner(self) -> [f64; N] {
        self.0
    }
}

impl<const N: usize> Default for StateVector<N> {
    fn default() -> Self {
        Self([0.0; N])
    }
}

impl<const N: usize> From<[f64; N]> for StateVector<N> {
    fn from(components: [f64; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<StateVector<N>> for [f64; N] {
    fn from(state: StateVector<N>) -> Self {
        state.0
    }
}

impl<const N: usize> Deref for StateVector<N> {
    type Target = [f64; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for StateVector<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_access() {
        let mut state = StateVector::new([1.0, 2.0]);
        assert_eq!(state[0], 1.0);
        assert_eq!(state[1], 2.0);

        state[1] = 5.0;
        assert_eq!(state.into_inner(), [1.0, 5.0]);
    }

    #[test]
    fn length_is_fixed() {
        let state: StateVector<3> = StateVector::default();
        assert_eq!(state.len(), 3);
        assert!(!state.is_empty());
        assert_eq!(*state, [0.0; 3]);
    }

    #[test]
    fn finiteness() {
        assert!(StateVector::from([0.0, -1.0]).is_finite());
        assert!(!StateVector::from([f64::NAN, 1.0]).is_finite());
        assert!(!StateVector::from([0.0, f64::INFINITY]).is_finite());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn out_of_range_index_panics() {
        let state = StateVector::new([1.0, 2.0]);
        let i = std::hint::black_box(state.len());
        let _value = state[i];
    }

    #[test]
    fn writes_through_deref_mut() {
        fn double<const N: usize>(y: &mut [f64; N]) {
            y.iter_mut().for_each(|v| *v *= 2.0);
        }

        let mut state = StateVector::new([1.5, -2.0]);
        double(&mut *state);
        assert_eq!(<[f64; 2]>::from(state), [3.0, -4.0]);
    }
}

use oscstep_core::OdeSystem;

/// The Airy equation `y'' = t·y` as a first-order system.
///
/// With state `[u1, u2] = [y, y']` the derivative is `[u2, t·u1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AiryEquation;

impl OdeSystem<2> for AiryEquation {
    fn derivative(&self, t: f64, y: &[f64; 2]) -> [f64; 2] {
        let [u1, u2] = *y;
        [u2, t * u1]
    }
}

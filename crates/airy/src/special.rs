//! The Airy function `Ai` and its derivative for real arguments.
//!
//! Both are evaluated from the Maclaurin series
//!
//! ```text
//! Ai(x)  = c1·f(x)  − c2·g(x)
//! Ai'(x) = c1·f'(x) − c2·g'(x)
//!
//! f(x) = Σ 3^k (1/3)_k x^(3k)   / (3k)!
//! g(x) = Σ 3^k (2/3)_k x^(3k+1) / (3k+1)!
//! ```
//!
//! with `c1 = Ai(0)` and `c2 = −Ai'(0)`. The series converge for every `x`,
//! but away from the origin the terms grow far larger than the result and
//! cancel. Results are near machine precision for `|x| ≤ 2` and keep at least
//! eight significant digits over [`ACCURATE_RANGE`]. Past `x ≈ 8` most digits
//! are lost, and for large `|x|` the terms overflow to NaN.

use std::ops::RangeInclusive;

use log::warn;

/// `Ai(0) = 1 / (3^(2/3) Γ(2/3))`.
pub const AI_0: f64 = 3.550_280_538_878_172_4e-1;

/// `Ai'(0) = −1 / (3^(1/3) Γ(1/3))`.
pub const AI_PRIME_0: f64 = -2.588_194_037_928_068e-1;

/// Arguments for which the series keeps at least eight significant digits.
pub const ACCURATE_RANGE: RangeInclusive<f64> = -8.0..=5.0;

const MAX_TERMS: usize = 500;

/// Partial sums of the two series and their derivatives.
struct Series {
    f: f64,
    g: f64,
    df: f64,
    dg: f64,
}

fn series(x: f64) -> Series {
    let x3 = x * x * x;

    let mut f_term = 1.0;
    let mut g_term = x;
    let mut df_term = 0.5 * x * x;
    let mut dg_term = 1.0;

    let mut sums = Series {
        f: f_term,
        g: g_term,
        df: df_term,
        dg: dg_term,
    };

    for k in 0..MAX_TERMS {
        #[allow(clippy::cast_precision_loss)]
        let k = 3.0 * k as f64;

        f_term *= x3 / ((k + 2.0) * (k + 3.0));
        g_term *= x3 / ((k + 3.0) * (k + 4.0));
        df_term *= x3 / ((k + 3.0) * (k + 5.0));
        dg_term *= x3 / ((k + 1.0) * (k + 3.0));

        sums.f += f_term;
        sums.g += g_term;
        sums.df += df_term;
        sums.dg += dg_term;

        let converged = [
            (f_term, sums.f),
            (g_term, sums.g),
            (df_term, sums.df),
            (dg_term, sums.dg),
        ]
        .iter()
        .all(|(term, sum)| term.abs() <= f64::EPSILON * sum.abs());

        if converged {
            break;
        }
    }

    sums
}

/// Returns `Ai(x)`.
///
/// Returns NaN if `x` is NaN.
#[must_use]
pub fn airy_ai(x: f64) -> f64 {
    let s = series(x);
    AI_0 * s.f + AI_PRIME_0 * s.g
}

/// Returns `Ai'(x)`.
///
/// Returns NaN if `x` is NaN.
#[must_use]
pub fn airy_ai_prime(x: f64) -> f64 {
    let s = series(x);
    AI_0 * s.df + AI_PRIME_0 * s.dg
}

/// Returns the state `[Ai(t0), Ai'(t0)]` whose Airy-equation solution is `Ai`.
///
/// Logs a warning when `t0` is outside [`ACCURATE_RANGE`]. The values are
/// still returned; they may be inaccurate or NaN.
#[must_use]
pub fn initial_state(t0: f64) -> [f64; 2] {
    if !ACCURATE_RANGE.contains(&t0) {
        warn!(
            "t0={t0} is outside {ACCURATE_RANGE:?}; Ai(t0) and Ai'(t0) may be inaccurate"
        );
    }
    [airy_ai(t0), airy_ai_prime(t0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn values_at_origin() {
        assert_eq!(airy_ai(0.0), AI_0);
        assert_eq!(airy_ai_prime(0.0), AI_PRIME_0);
        assert_eq!(initial_state(0.0), [AI_0, AI_PRIME_0]);
    }

    #[test]
    fn origin_constants() {
        assert_relative_eq!(AI_0, 0.355_028_053_9, max_relative = 1e-10);
        assert_relative_eq!(AI_PRIME_0, -0.258_819_403_8, max_relative = 1e-10);
    }

    #[test]
    fn tabulated_values() {
        // (x, Ai(x), Ai'(x))
        let table = [
            (1.0, 0.135_292_416_312_881_4, -0.159_147_441_296_793_3),
            (2.0, 0.034_924_130_423_274_38, -0.053_090_384_433_653_7),
            (-2.0, 0.227_407_428_201_685_6, 0.618_259_020_741_691),
        ];

        for (x, ai, ai_prime) in table {
            assert_relative_eq!(airy_ai(x), ai, max_relative = 1e-12);
            assert_relative_eq!(airy_ai_prime(x), ai_prime, max_relative = 1e-12);
        }
    }

    #[test]
    fn negative_argument() {
        assert_relative_eq!(airy_ai(-1.0), 0.535_560_883_292_352_1, max_relative = 1e-12);
        assert_abs_diff_eq!(airy_ai_prime(-1.0), -0.010_160_567_116_645_21, epsilon = 1e-14);
    }

    #[test]
    fn satisfies_the_airy_equation() {
        // Ai''(x) = x·Ai(x), checked with a central difference of Ai'.
        let h = 1e-5;
        for x in [-1.3, -0.2, 0.7, 1.9] {
            let second = (airy_ai_prime(x + h) - airy_ai_prime(x - h)) / (2.0 * h);
            assert_abs_diff_eq!(second, x * airy_ai(x), epsilon = 1e-8);
        }
    }

    #[test]
    fn accurate_over_the_documented_range() {
        // (x, Ai(x), Ai'(x)) at both ends of the range.
        let table = [
            (-8.0, -0.052_705_050_356_386_2, 0.935_560_938_198_306_6),
            (5.0, 1.083_444_281_360_744_2e-4, -2.474_138_908_684_624_8e-4),
        ];

        for (x, ai, ai_prime) in table {
            assert!(ACCURATE_RANGE.contains(&x));
            let [u1, u2] = initial_state(x);
            assert_relative_eq!(u1, ai, max_relative = 1e-8);
            assert_relative_eq!(u2, ai_prime, max_relative = 1e-8);
        }
    }

    #[test]
    fn outside_the_range_still_returns_values() {
        assert!(!ACCURATE_RANGE.contains(&200.0));
        let [u1, u2] = initial_state(200.0);
        assert!(u1.is_nan() && u2.is_nan());
    }

    #[test]
    fn nan_propagates() {
        assert!(airy_ai(f64::NAN).is_nan());
        assert!(airy_ai_prime(f64::NAN).is_nan());
    }
}

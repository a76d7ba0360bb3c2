//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Combines the reliability of bisection with the speed of the secant
/// method and inverse quadratic interpolation. Given a bracket with a
/// sign change, convergence is guaranteed within the iteration cap;
/// this is the fallback stage when Newton-Raphson diverges on an
/// irregular flow pattern.
///
/// Requires: `f(a) * f(b) < 0` (opposite signs at endpoints)
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - Lower bound of the bracket
/// * `b` - Upper bound of the bracket
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or an error if the bracket shows
/// no sign change.
///
/// # Example
///
/// ```rust
/// use cashflows_math::solvers::{brent, SolverConfig};
///
/// // Rate where -100 grows to 150 over three periods
/// let f = |r: f64| -100.0 + 150.0 * (1.0 + r).powi(-3);
///
/// let result = brent(f, -0.9, 100.0, &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-9);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    // Check that root is bracketed
    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    // Keep b as the best estimate: |f(b)| <= |f(a)|
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        if fb.abs() < config.tolerance || (b - a).abs() < config.tolerance {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        // Candidate step: inverse quadratic interpolation when all three
        // function values are distinct, secant otherwise, and bisection
        // whenever the interpolated point falls outside the safe region.
        let mut s = 0.0;
        let mut bisect = true;

        if (fa - fc).abs() > 1e-15 && (fb - fc).abs() > 1e-15 {
            let r = fb / fc;
            let p = fa / fc;
            let q = fa / fb;
            s = b
                - (q * (q - r) * (b - a) + (1.0 - r) * (b - c) * p)
                    / ((q - 1.0) * (r - 1.0) * (p - 1.0));
            let mid = (a + b) / 2.0;
            if s > mid.min(b) && s < mid.max(b) && (s - b).abs() < e.abs() / 2.0 {
                bisect = false;
            }
        } else if (fb - fa).abs() > 1e-15 {
            s = b - fb * (b - a) / (fb - fa);
            let mid = (a + b) / 2.0;
            if s > mid.min(b) && s < mid.max(b) && (s - b).abs() < e.abs() / 2.0 {
                bisect = false;
            }
        }

        if bisect {
            s = (a + b) / 2.0;
            e = b - a;
            d = e;
        } else {
            e = d;
            d = s - b;
        }

        // Shift the previous best estimate out before evaluating
        c = b;
        fc = fb;

        let fs = f(s);
        if fa * fs < 0.0 {
            b = s;
            fb = fs;
        } else {
            a = s;
            fa = fs;
        }

        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fb.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_wide_rate_bracket() {
        // A discount equation over the full fallback bracket
        let f = |r: f64| -100.0 + 110.0 / (1.0 + r);

        let result = brent(f, -0.999999999, 100.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.10, epsilon = 1e-8);
    }

    #[test]
    fn test_negative_rate_root() {
        // Losing stream: -100 then +90 one period later, rate = -10%
        let f = |r: f64| -100.0 + 90.0 / (1.0 + r);

        let result = brent(f, -0.999999999, 100.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, -0.10, epsilon = 1e-8);
    }

    #[test]
    fn test_invalid_bracket() {
        // Only inflows: no sign change anywhere in the bracket
        let f = |r: f64| 50.0 * (1.0 + r).powi(-2);

        let result = brent(f, -0.999999999, 100.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_converges_within_cap() {
        let f = |x: f64| x * x * x - x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert!(f(result.root).abs() < 1e-10);
        assert!(result.iterations < 30);
    }
}

//! Root-finding algorithms.
//!
//! This module provides the two numerical solvers the return engine
//! composes into its two-stage strategy:
//!
//! - [`newton_raphson`]: Fast quadratic convergence when a derivative
//!   is available; may diverge for pathological flow patterns
//! - [`brent`]: Robust bracketing method combining bisection, secant,
//!   and inverse quadratic interpolation; guaranteed to converge on a
//!   sign change
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Brent | Fast (superlinear) | Guaranteed | Bracket |
//!
//! Both solvers are iteration-capped: exceeding the cap is a
//! `ConvergenceFailed` error, never an unbounded loop.
//!
//! # Example
//!
//! ```rust
//! use cashflows_math::solvers::{newton_raphson, SolverConfig};
//!
//! // Find the rate where -100 + 110/(1+r) = 0  (a 10% return)
//! let f = |r: f64| -100.0 + 110.0 / (1.0 + r);
//! let df = |r: f64| -110.0 / ((1.0 + r) * (1.0 + r));
//!
//! let result = newton_raphson(f, df, 0.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.10).abs() < 1e-10);
//! ```

mod brent;
mod newton;

pub use brent::brent;
pub use newton::newton_raphson;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

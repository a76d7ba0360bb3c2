//! # Cashflows Math
//!
//! Root-finding utilities for the Cashflows return-analytics library.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson for fast local search, Brent's method
//!   for guaranteed bracketed convergence
//!
//! The return engine composes the two into its two-stage IRR strategy:
//! a derivative-based local search first, a bracketed fallback when the
//! local search diverges.
//!
//! ## Design Philosophy
//!
//! - **Bounded Work**: Every solver is iteration-capped; failure to
//!   converge is a typed error, never an unbounded loop
//! - **Numerical Stability**: Divergence and non-finite iterates fail
//!   fast with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{brent, newton_raphson, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};

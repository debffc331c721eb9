//! # lt-math
//!
//! Mathematical utilities for lattice valuation: floating-point comparison,
//! the normal and binomial distributions (via `statrs`), and the closed-form
//! Black-Scholes formulas used as reference values for tree prices.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Closed-form Black-Scholes prices.
pub mod black_scholes;

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_scholes::{black_scholes_digital_price, black_scholes_price, OptionType};
pub use comparison::{aligned_multiple, close, EPSILON};
pub use distributions::{normal_cdf, BinomialDistribution};

//! # latticelib
//!
//! Backward-induction valuation of European, American and Bermudan options
//! on recombining binomial and trinomial lattices.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `lt-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! latticelib = "0.1"
//! ```
//!
//! ```rust
//! use latticelib::methods::{BinomialModel, ModelParameters};
//! use latticelib::products::{payoff, BermudanOption, ExerciseSchedule};
//!
//! let params = ModelParameters::new(1.0, 0.02, 0.7, 3.5, 300)?;
//! let model = BinomialModel::cox_ross_rubinstein(&params)?;
//! let schedule = ExerciseSchedule::new(vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5])?;
//! let option = BermudanOption::new(schedule, payoff::put(1.0));
//!
//! let history = option.option_data(&model)?;
//! assert_eq!(history.len(), 7);
//! assert!(option.value(&model)? > 0.4);
//! # Ok::<(), latticelib::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use lt_core as core;

/// Distributions, comparison helpers and closed-form Black-Scholes prices.
pub use lt_math as math;

/// Time grids, the lattice contract and concrete lattices.
pub use lt_methods as methods;

/// Payoffs, exercise schedules and valuation engines.
pub use lt_products as products;

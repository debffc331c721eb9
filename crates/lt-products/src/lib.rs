//! # lt-products
//!
//! Option valuation by backward induction on any [`TreeModel`] lattice.
//!
//! # Modules
//!
//! * [`european`] — discounted expectation, plus the one-shot binomial formula
//! * [`barrier`] — European knock-out inside a `(lower, upper)` band
//! * [`american`] — early exercise at every lattice step
//! * [`bermudan`] — early exercise on a schedule of dates
//! * [`history`] — per-step values, exercise values, continuation values and
//!   decisions recorded by the early-exercise engines
//! * [`payoff`] — common payoff functions
//! * [`scan`] — parallel valuation over several step counts
//!
//! ```
//! use lt_methods::{BinomialModel, ModelParameters};
//! use lt_products::{payoff, AmericanOption, EuropeanOption};
//!
//! let params = ModelParameters::new(1.0, 0.02, 0.7, 3.5, 100).unwrap();
//! let model = BinomialModel::cox_ross_rubinstein(&params).unwrap();
//! let european = EuropeanOption::new(3.5, payoff::put(1.0)).value(&model).unwrap();
//! let american = AmericanOption::new(3.5, payoff::put(1.0)).value(&model).unwrap();
//! assert!(american > european);
//! ```
//!
//! [`TreeModel`]: lt_methods::TreeModel

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// American options.
pub mod american;

/// European knock-out barrier options.
pub mod barrier;

/// Bermudan options.
pub mod bermudan;

/// European options.
pub mod european;

/// Exercise/wait decisions.
pub mod exercise;

/// Exercise history of an early-exercise valuation.
pub mod history;

/// Payoff functions.
pub mod payoff;

/// Exercise-date schedules.
pub mod schedule;

/// Parallel scans over the number of lattice steps.
pub mod scan;

mod induction;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use american::AmericanOption;
pub use barrier::EuropeanBarrierOption;
pub use bermudan::BermudanOption;
pub use european::EuropeanOption;
pub use exercise::ExerciseDecision;
pub use history::ExerciseHistory;
pub use scan::scan_steps;
pub use schedule::ExerciseSchedule;

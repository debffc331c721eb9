//! # lt-methods
//!
//! Time grids and recombining lattices.
//!
//! # Modules
//!
//! * [`time_grid`] — strictly increasing time grids
//! * [`lattice`] — the [`TreeModel`] contract plus binomial and trinomial
//!   lattices

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice models and the capability contract valuation engines consume.
pub mod lattice;

/// Uniform and non-uniform time grids.
pub mod time_grid;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{
    check_rollback_index, check_time_index, BinomialKind, BinomialModel, ModelParameters,
    TreeModel, TrinomialModel, TIME_ALIGNMENT_TOLERANCE,
};
pub use time_grid::TimeGrid;

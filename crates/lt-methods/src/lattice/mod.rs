//! Recombining lattices and the capability contract valuation engines use.
//!
//! # Overview
//!
//! * [`TreeModel`] — what a lattice must provide to be priced on: node
//!   values (optionally transformed by a payoff) at a time index, and the
//!   discounted conditional expectation of a value vector one step back
//! * [`BinomialModel`] — Cox-Ross-Rubinstein, Jarrow-Rudd and Leisen-Reimer
//! * [`TrinomialModel`] — Boyle's trinomial lattice
//! * [`ModelParameters`] — spot, rate, volatility, horizon, step count
//!
//! Node vectors are ordered from the highest asset value to the lowest.

pub mod binomial_model;
pub mod parameters;
pub mod trinomial_model;

pub use binomial_model::{BinomialKind, BinomialModel};
pub use parameters::ModelParameters;
pub use trinomial_model::TrinomialModel;

use lt_core::{errors::Error, Real, Result, Size, Time};
use lt_math::comparison::aligned_multiple;

use crate::TimeGrid;

/// Relative tolerance, in units of the time step, within which a time is
/// considered to lie on the lattice grid.
pub const TIME_ALIGNMENT_TOLERANCE: Real = 1e-6;

/// Capability contract of a recombining lattice.
///
/// Valuation engines depend only on this trait. The transition structure of
/// a lattice enters the induction solely through
/// [`conditional_expectation`](TreeModel::conditional_expectation).
pub trait TreeModel {
    /// Fixed step between consecutive grid times.
    fn time_step(&self) -> Time;

    /// Number of steps; valid time indices are `0..=number_of_steps()`.
    fn number_of_steps(&self) -> Size;

    /// Number of distinct nodes at time index `i`.
    fn node_count(&self, i: Size) -> Size;

    /// Asset values at time index `i`, highest first.
    ///
    /// Fails with [`Error::InvalidTime`] if `i > number_of_steps()`.
    fn values_at_time_index(&self, i: Size) -> Result<Vec<Real>>;

    /// Discounted risk-neutral expectation at index `i` of `values_at_next`,
    /// a vector defined on the nodes of index `i + 1`.
    ///
    /// The result has exactly `node_count(i)` entries. Fails with
    /// [`Error::InvalidTime`] if `i >= number_of_steps()` and with
    /// [`Error::DimensionMismatch`] if `values_at_next` does not have
    /// `node_count(i + 1)` entries.
    fn conditional_expectation(&self, values_at_next: &[Real], i: Size) -> Result<Vec<Real>>;

    /// Lattice horizon.
    fn last_time(&self) -> Time {
        self.time_step() * self.number_of_steps() as Time
    }

    /// Grid index of time `t`.
    ///
    /// Fails with [`Error::InvalidTime`] if `t` is not a multiple of the time
    /// step (up to [`TIME_ALIGNMENT_TOLERANCE`]) or lies past the horizon.
    fn time_index(&self, t: Time) -> Result<Size> {
        let dt = self.time_step();
        let i = aligned_multiple(t, dt, TIME_ALIGNMENT_TOLERANCE).ok_or_else(|| {
            Error::InvalidTime(format!("time {t} is not on the lattice grid of step {dt}"))
        })?;
        check_time_index(i, self.number_of_steps())?;
        Ok(i)
    }

    /// Asset values at time `t`.
    fn values_at_time(&self, t: Time) -> Result<Vec<Real>> {
        self.values_at_time_index(self.time_index(t)?)
    }

    /// `f` applied to every asset value at time index `i`.
    fn transformed_values_at_time_index(
        &self,
        i: Size,
        f: &dyn Fn(Real) -> Real,
    ) -> Result<Vec<Real>> {
        Ok(self.values_at_time_index(i)?.into_iter().map(f).collect())
    }

    /// `f` applied to every asset value at time `t`.
    fn transformed_values_at_time(&self, t: Time, f: &dyn Fn(Real) -> Real) -> Result<Vec<Real>> {
        self.transformed_values_at_time_index(self.time_index(t)?, f)
    }

    /// Uniform grid `0, dt, …, last_time()`.
    fn time_grid(&self) -> Result<TimeGrid> {
        TimeGrid::from_start(0.0, self.number_of_steps(), self.time_step())
    }
}

/// [`Error::InvalidTime`] unless `i <= number_of_steps`.
pub fn check_time_index(i: Size, number_of_steps: Size) -> Result<()> {
    if i > number_of_steps {
        return Err(Error::InvalidTime(format!(
            "time index {i} beyond the lattice horizon of {number_of_steps} steps"
        )));
    }
    Ok(())
}

/// [`Error::InvalidTime`] unless a conditional expectation can be taken from
/// index `i + 1` back to `i`.
pub fn check_rollback_index(i: Size, number_of_steps: Size) -> Result<()> {
    if i >= number_of_steps {
        return Err(Error::InvalidTime(format!(
            "no conditional expectation from index {} on a lattice of {number_of_steps} steps",
            i + 1
        )));
    }
    Ok(())
}

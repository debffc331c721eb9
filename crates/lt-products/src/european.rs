//! European options: no early exercise.

use std::fmt;

use lt_core::{check_dimension, Real, Result, Time};
use lt_methods::{BinomialModel, TreeModel};
use tracing::debug;

use crate::induction::{discounted_expectation, payoff_values};

/// A European option paying `payoff(S_T)` at `maturity`.
#[derive(Clone)]
pub struct EuropeanOption<F> {
    maturity: Time,
    payoff: F,
}

impl<F> fmt::Debug for EuropeanOption<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EuropeanOption")
            .field("maturity", &self.maturity)
            .finish_non_exhaustive()
    }
}

impl<F> EuropeanOption<F>
where
    F: Fn(Real) -> Real,
{
    /// Option with the given maturity and payoff.
    pub fn new(maturity: Time, payoff: F) -> Self {
        Self { maturity, payoff }
    }

    /// Maturity.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Value at time zero by backward induction on `model`.
    ///
    /// The maturity must lie on the lattice grid.
    pub fn value<M>(&self, model: &M) -> Result<Real>
    where
        M: TreeModel + ?Sized,
    {
        let n = model.time_index(self.maturity)?;
        let terminal = payoff_values(model, n, &self.payoff)?;
        let value = discounted_expectation(model, n, terminal)?;
        debug!(product = "european", steps = n, value, "valued");
        Ok(value)
    }

    /// Value at time zero as the discounted scalar product of the maturity
    /// payoffs with the terminal node probabilities of a binomial lattice.
    ///
    /// Agrees with [`EuropeanOption::value`] on the same lattice.
    pub fn value_direct(&self, model: &BinomialModel) -> Result<Real> {
        let n = model.time_index(self.maturity)?;
        let payoffs = payoff_values(model, n, &self.payoff)?;
        let probabilities = model.node_probabilities_at_time_index(n)?;
        check_dimension(n, payoffs.len(), probabilities.len())?;
        let expectation: Real = payoffs.iter().zip(&probabilities).map(|(v, p)| v * p).sum();
        let value = model.discount().powi(n as i32) * expectation;
        debug!(product = "european", steps = n, value, "valued with terminal probabilities");
        Ok(value)
    }
}

//! European options knocked out outside a band `(lower, upper)`.
//!
//! The band is monitored on the lattice: at maturity the value is
//! `payoff(S) · 1{lower < S < upper}` and at each earlier index the
//! continuation value is zeroed on nodes outside the band, the root
//! included.

use std::fmt;

use lt_core::{errors::Error, Real, Result, Time};
use lt_methods::TreeModel;
use tracing::debug;

use crate::induction::{payoff_values, roll_back, root_value};

/// A double knock-out European option.
#[derive(Clone)]
pub struct EuropeanBarrierOption<F> {
    maturity: Time,
    payoff: F,
    lower: Real,
    upper: Real,
}

impl<F> fmt::Debug for EuropeanBarrierOption<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EuropeanBarrierOption")
            .field("maturity", &self.maturity)
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish_non_exhaustive()
    }
}

impl<F> EuropeanBarrierOption<F>
where
    F: Fn(Real) -> Real,
{
    /// Knock-out option alive while `lower < S < upper`.
    ///
    /// `upper` may be `Real::INFINITY`. Fails with
    /// [`Error::InvalidArgument`] unless `lower < upper`.
    pub fn new(maturity: Time, payoff: F, lower: Real, upper: Real) -> Result<Self> {
        if lower.is_nan() || upper.is_nan() || lower >= upper {
            return Err(Error::InvalidArgument(format!(
                "barrier band ({lower}, {upper}) is empty"
            )));
        }
        Ok(Self {
            maturity,
            payoff,
            lower,
            upper,
        })
    }

    /// Lower barrier.
    pub fn lower(&self) -> Real {
        self.lower
    }

    /// Upper barrier.
    pub fn upper(&self) -> Real {
        self.upper
    }

    fn alive(&self, s: Real) -> bool {
        self.lower < s && s < self.upper
    }

    /// Value at time zero by backward induction on `model`.
    pub fn value<M>(&self, model: &M) -> Result<Real>
    where
        M: TreeModel + ?Sized,
    {
        let n = model.time_index(self.maturity)?;
        let knocked = |s: Real| if self.alive(s) { (self.payoff)(s) } else { 0.0 };
        let mut values = payoff_values(model, n, &knocked)?;
        for i in (0..n).rev() {
            let continuation = roll_back(model, &values, i)?;
            let spots = model.values_at_time_index(i)?;
            values = continuation
                .into_iter()
                .zip(spots)
                .map(|(v, s)| if self.alive(s) { v } else { 0.0 })
                .collect();
        }
        let value = root_value(&values)?;
        debug!(product = "european barrier", steps = n, value, "valued");
        Ok(value)
    }
}

//! Valuation over several lattice step counts.
//!
//! Each step count is one independent valuation, so they run in parallel
//! with `rayon`. The induction within one valuation stays sequential.

use lt_core::{Real, Result, Size};
use rayon::prelude::*;
use tracing::debug;

/// Evaluate `value(n)` for every `n` in `steps`, in parallel.
///
/// Results come back in the order of `steps`. If any valuation fails, the
/// error of the first failing entry in that order is returned.
///
/// ```
/// use lt_methods::{BinomialModel, ModelParameters};
/// use lt_products::{payoff, scan_steps, EuropeanOption};
///
/// let option = EuropeanOption::new(1.0, payoff::call(100.0));
/// let prices = scan_steps(&[10, 20, 40], |n| {
///     let params = ModelParameters::new(100.0, 0.05, 0.2, 1.0, n)?;
///     option.value(&BinomialModel::cox_ross_rubinstein(&params)?)
/// })
/// .unwrap();
/// assert_eq!(prices.len(), 3);
/// assert_eq!(prices[2].0, 40);
/// ```
pub fn scan_steps<F>(steps: &[Size], value: F) -> Result<Vec<(Size, Real)>>
where
    F: Fn(Size) -> Result<Real> + Sync,
{
    debug!(count = steps.len(), "scanning step counts");
    let results: Vec<Result<(Size, Real)>> = steps
        .par_iter()
        .map(|&n| value(n).map(|v| (n, v)))
        .collect();
    results.into_iter().collect()
}

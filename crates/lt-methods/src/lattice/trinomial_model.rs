//! Boyle's recombining trinomial lattice.
//!
//! Each node moves up by `u = e^{σ√(2dt)}`, stays, or moves down by `1/u`.
//! Time index `i` therefore has `2i + 1` nodes; node `j` holds
//! `S0 · u^(i−j)`, highest first. With `a = e^{r dt/2}` and
//! `b = e^{σ√(dt/2)}` the branch probabilities are
//!
//! ```text
//! pu = ((a − 1/b) / (b − 1/b))²
//! pd = ((b − a)   / (b − 1/b))²
//! pm = 1 − pu − pd
//! ```

use lt_core::{check_dimension, ensure, DiscountFactor, Probability, Real, Result, Size, Time};
use tracing::debug;

use super::{check_rollback_index, check_time_index, ModelParameters, TreeModel};

/// A recombining trinomial lattice for a lognormal asset (Boyle, 1986).
#[derive(Debug, Clone)]
pub struct TrinomialModel {
    params: ModelParameters,
    dt: Time,
    up: Real,
    pu: Probability,
    pm: Probability,
    pd: Probability,
    discount: DiscountFactor,
}

impl TrinomialModel {
    /// Boyle lattice for the given dynamics and step count.
    pub fn boyle(params: &ModelParameters) -> Result<Self> {
        params.validate()?;
        let dt = params.time_step();
        let sigma = params.volatility();
        let up = (sigma * (2.0 * dt).sqrt()).exp();

        let a = (0.5 * params.risk_free_rate() * dt).exp();
        let b = (sigma * (0.5 * dt).sqrt()).exp();
        let spread = b - 1.0 / b;
        let pu = ((a - 1.0 / b) / spread).powi(2);
        let pd = ((b - a) / spread).powi(2);
        let pm = 1.0 - pu - pd;
        ensure!(
            [pu, pm, pd].iter().all(|p| (0.0..=1.0).contains(p)),
            "Boyle: invalid probabilities pu = {pu}, pm = {pm}, pd = {pd} (try more steps)"
        );

        debug!(
            steps = params.number_of_steps(),
            up,
            pu,
            pm,
            pd,
            "built trinomial lattice"
        );
        Ok(Self {
            params: *params,
            dt,
            up,
            pu,
            pm,
            pd,
            discount: (-params.risk_free_rate() * dt).exp(),
        })
    }

    /// Parameters of the lattice.
    pub fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    /// Up factor `u`; the down factor is `1/u`.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Branch probabilities `(pu, pm, pd)`.
    pub fn probabilities(&self) -> (Probability, Probability, Probability) {
        (self.pu, self.pm, self.pd)
    }

    /// One-step discount factor `e^{−r dt}`.
    pub fn discount(&self) -> DiscountFactor {
        self.discount
    }
}

impl TreeModel for TrinomialModel {
    fn time_step(&self) -> Time {
        self.dt
    }

    fn number_of_steps(&self) -> Size {
        self.params.number_of_steps()
    }

    fn node_count(&self, i: Size) -> Size {
        2 * i + 1
    }

    fn values_at_time_index(&self, i: Size) -> Result<Vec<Real>> {
        check_time_index(i, self.number_of_steps())?;
        let spot = self.params.spot();
        let top = i as i32;
        Ok((0..self.node_count(i))
            .map(|j| spot * self.up.powi(top - j as i32))
            .collect())
    }

    fn conditional_expectation(&self, values_at_next: &[Real], i: Size) -> Result<Vec<Real>> {
        check_rollback_index(i, self.number_of_steps())?;
        check_dimension(i + 1, self.node_count(i + 1), values_at_next.len())?;
        Ok(values_at_next
            .windows(3)
            .map(|w| self.discount * (self.pu * w[0] + self.pm * w[1] + self.pd * w[2]))
            .collect())
    }
}

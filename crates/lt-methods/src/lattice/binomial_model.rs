//! Recombining binomial lattices.
//!
//! | Variant | Constructor | Reference |
//! |---|---|---|
//! | Cox-Ross-Rubinstein | [`BinomialModel::cox_ross_rubinstein`] | Cox, Ross & Rubinstein (1979) |
//! | Jarrow-Rudd | [`BinomialModel::jarrow_rudd`] | Jarrow & Rudd (1983) |
//! | Leisen-Reimer | [`BinomialModel::leisen_reimer`] | Leisen & Reimer (1996) |
//!
//! Node `j` at time index `i` holds `S0 · u^(i−j) · d^j`, so index `i` has
//! `i + 1` nodes ordered from the highest value to the lowest. In every
//! variant the up-probability is the one matching the risk-neutral drift,
//! `q = (e^{r dt} − d) / (u − d)`.

use std::fmt;

use lt_core::{check_dimension, ensure, DiscountFactor, Probability, Real, Result, Size, Time};
use lt_math::distributions::BinomialDistribution;
use tracing::debug;

use super::{check_rollback_index, check_time_index, ModelParameters, TreeModel};

/// Which construction produced a [`BinomialModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinomialKind {
    /// Equal and opposite log-jumps `±σ√dt`.
    CoxRossRubinstein,
    /// Log-jumps `(r − σ²/2)dt ± σ√dt`.
    JarrowRudd,
    /// Strike-centred lattice built from the Peizer-Pratt inversion.
    LeisenReimer,
}

impl fmt::Display for BinomialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinomialKind::CoxRossRubinstein => write!(f, "Cox-Ross-Rubinstein"),
            BinomialKind::JarrowRudd => write!(f, "Jarrow-Rudd"),
            BinomialKind::LeisenReimer => write!(f, "Leisen-Reimer"),
        }
    }
}

/// A recombining binomial lattice for a lognormal asset.
#[derive(Debug, Clone)]
pub struct BinomialModel {
    kind: BinomialKind,
    params: ModelParameters,
    dt: Time,
    up: Real,
    down: Real,
    q: Probability,
    discount: DiscountFactor,
}

impl BinomialModel {
    // ── Named constructors ───────────────────────────────────────────────

    /// Cox-Ross-Rubinstein lattice: `u = e^{σ√dt}`, `d = 1/u`.
    pub fn cox_ross_rubinstein(params: &ModelParameters) -> Result<Self> {
        params.validate()?;
        let dt = params.time_step();
        let up = (params.volatility() * dt.sqrt()).exp();
        Self::from_factors(BinomialKind::CoxRossRubinstein, *params, up, 1.0 / up)
    }

    /// Jarrow-Rudd lattice: `u, d = e^{(r − σ²/2)dt ± σ√dt}`.
    pub fn jarrow_rudd(params: &ModelParameters) -> Result<Self> {
        params.validate()?;
        let dt = params.time_step();
        let sigma = params.volatility();
        let drift = (params.risk_free_rate() - 0.5 * sigma * sigma) * dt;
        let jump = sigma * dt.sqrt();
        Self::from_factors(
            BinomialKind::JarrowRudd,
            *params,
            (drift + jump).exp(),
            (drift - jump).exp(),
        )
    }

    /// Leisen-Reimer lattice centred on `strike`.
    ///
    /// The Peizer-Pratt inversion needs an odd number of steps; an even
    /// step count is bumped to the next odd one, which shortens the time
    /// step accordingly.
    pub fn leisen_reimer(params: &ModelParameters, strike: Real) -> Result<Self> {
        params.validate()?;
        ensure!(
            strike.is_finite() && strike > 0.0,
            "strike must be positive, got {strike}"
        );
        let steps = params.number_of_steps();
        let odd_steps = if steps % 2 == 0 { steps + 1 } else { steps };
        let params = params.with_number_of_steps(odd_steps)?;

        let t = params.last_time();
        let sigma = params.volatility();
        let std_dev = sigma * t.sqrt();
        let drift = params.risk_free_rate() + 0.5 * sigma * sigma;
        let d1 = ((params.spot() / strike).ln() + drift * t) / std_dev;
        let d2 = d1 - std_dev;

        let q = peizer_pratt_2(d2, odd_steps);
        let q_dash = peizer_pratt_2(d1, odd_steps);
        ensure!(
            q > 0.0 && q < 1.0,
            "Leisen-Reimer: degenerate up-probability {q}"
        );
        let growth = (params.risk_free_rate() * params.time_step()).exp();
        let up = growth * q_dash / q;
        let down = (growth - q * up) / (1.0 - q);
        Self::from_factors(BinomialKind::LeisenReimer, params, up, down)
    }

    fn from_factors(
        kind: BinomialKind,
        params: ModelParameters,
        up: Real,
        down: Real,
    ) -> Result<Self> {
        let dt = params.time_step();
        ensure!(up > down && down > 0.0, "{kind}: need u > d > 0, got u = {up}, d = {down}");
        let q = ((params.risk_free_rate() * dt).exp() - down) / (up - down);
        ensure!(
            (0.0..=1.0).contains(&q),
            "{kind}: invalid up-probability {q} (try more steps)"
        );
        let discount = (-params.risk_free_rate() * dt).exp();
        debug!(
            lattice = %kind,
            steps = params.number_of_steps(),
            up,
            down,
            q,
            "built binomial lattice"
        );
        Ok(Self {
            kind,
            params,
            dt,
            up,
            down,
            q,
            discount,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Construction that produced this lattice.
    pub fn kind(&self) -> BinomialKind {
        self.kind
    }

    /// Parameters actually used (the step count may differ from the request
    /// for Leisen-Reimer).
    pub fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    /// Up factor `u`.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down factor `d`.
    pub fn down(&self) -> Real {
        self.down
    }

    /// Risk-neutral probability of an up move.
    pub fn up_probability(&self) -> Probability {
        self.q
    }

    /// One-step discount factor `e^{−r dt}`.
    pub fn discount(&self) -> DiscountFactor {
        self.discount
    }

    /// Risk-neutral probability of reaching each node at time index `i`.
    ///
    /// Node `j` is reached after `i − j` up moves, so its probability is
    /// `C(i, i−j) q^(i−j) (1−q)^j`.
    pub fn node_probabilities_at_time_index(&self, i: Size) -> Result<Vec<Probability>> {
        check_time_index(i, self.params.number_of_steps())?;
        if i == 0 {
            return Ok(vec![1.0]);
        }
        let dist = BinomialDistribution::new(self.q, i as u64)?;
        Ok((0..=i).map(|j| dist.pmf((i - j) as u64)).collect())
    }

    /// Risk-neutral probability of reaching each node at maturity.
    pub fn terminal_probabilities(&self) -> Result<Vec<Probability>> {
        self.node_probabilities_at_time_index(self.params.number_of_steps())
    }
}

impl TreeModel for BinomialModel {
    fn time_step(&self) -> Time {
        self.dt
    }

    fn number_of_steps(&self) -> Size {
        self.params.number_of_steps()
    }

    fn node_count(&self, i: Size) -> Size {
        i + 1
    }

    fn values_at_time_index(&self, i: Size) -> Result<Vec<Real>> {
        check_time_index(i, self.number_of_steps())?;
        let spot = self.params.spot();
        Ok((0..=i)
            .map(|j| spot * self.up.powi((i - j) as i32) * self.down.powi(j as i32))
            .collect())
    }

    fn conditional_expectation(&self, values_at_next: &[Real], i: Size) -> Result<Vec<Real>> {
        check_rollback_index(i, self.number_of_steps())?;
        check_dimension(i + 1, self.node_count(i + 1), values_at_next.len())?;
        Ok(values_at_next
            .windows(2)
            .map(|w| self.discount * (self.q * w[0] + (1.0 - self.q) * w[1]))
            .collect())
    }
}

// ─── Helper functions ─────────────────────────────────────────────────────────

/// Peizer-Pratt Method 2 inversion.
///
/// Maps a normal quantile `z` to a probability `p ∈ [0, 1]` for an `n`-step
/// binomial approximation. Requires `n` to be odd.
fn peizer_pratt_2(z: Real, n: usize) -> Real {
    let nf = n as Real;
    let r = z / (nf + 1.0 / 3.0 + 0.1 / (nf + 1.0));
    let ex = (-r * r * (nf + 1.0 / 6.0)).exp();
    0.5 + z.signum() * 0.5 * (1.0 - ex).sqrt()
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lt_core::Error;

    fn params(steps: usize) -> ModelParameters {
        ModelParameters::new(100.0, 0.05, 0.2, 1.0, steps).unwrap()
    }

    #[test]
    fn crr_factors_are_reciprocal() {
        let model = BinomialModel::cox_ross_rubinstein(&params(50)).unwrap();
        assert_abs_diff_eq!(model.up() * model.down(), 1.0, epsilon = 1e-14);
        assert_eq!(model.kind(), BinomialKind::CoxRossRubinstein);
    }

    #[test]
    fn node_values_are_ordered_high_to_low() {
        let model = BinomialModel::cox_ross_rubinstein(&params(4)).unwrap();
        let v = model.values_at_time_index(4).unwrap();
        assert_eq!(v.len(), 5);
        assert!(v.windows(2).all(|w| w[0] > w[1]));
        assert_abs_diff_eq!(v[2], 100.0, epsilon = 1e-10);
        assert_eq!(model.values_at_time_index(0).unwrap(), vec![100.0]);
    }

    #[test]
    fn conditional_expectation_of_constant_is_discounted_constant() {
        for model in [
            BinomialModel::cox_ross_rubinstein(&params(20)).unwrap(),
            BinomialModel::jarrow_rudd(&params(20)).unwrap(),
            BinomialModel::leisen_reimer(&params(20), 95.0).unwrap(),
        ] {
            let next = vec![3.0; model.node_count(11)];
            let ce = model.conditional_expectation(&next, 10).unwrap();
            assert_eq!(ce.len(), 11);
            for v in ce {
                assert_abs_diff_eq!(v, 3.0 * model.discount(), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn conditional_expectation_reproduces_forward() {
        // E[S_{i+1} | S_i] e^{-r dt} = S_i under the risk-neutral measure
        let model = BinomialModel::jarrow_rudd(&params(30)).unwrap();
        let next = model.values_at_time_index(8).unwrap();
        let ce = model.conditional_expectation(&next, 7).unwrap();
        let current = model.values_at_time_index(7).unwrap();
        for (a, b) in ce.iter().zip(&current) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-10);
        }
    }

    #[test]
    fn conditional_expectation_rejects_wrong_length() {
        let model = BinomialModel::cox_ross_rubinstein(&params(10)).unwrap();
        let err = model.conditional_expectation(&[1.0; 5], 5).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                index: 6,
                expected: 7,
                found: 5
            }
        );
        assert!(matches!(
            model.conditional_expectation(&[1.0; 12], 10),
            Err(Error::InvalidTime(_))
        ));
    }

    #[test]
    fn values_past_horizon_are_invalid_time() {
        let model = BinomialModel::cox_ross_rubinstein(&params(10)).unwrap();
        assert!(matches!(
            model.values_at_time_index(11),
            Err(Error::InvalidTime(_))
        ));
    }

    #[test]
    fn leisen_reimer_uses_odd_step_count() {
        let model = BinomialModel::leisen_reimer(&params(50), 100.0).unwrap();
        assert_eq!(model.number_of_steps(), 51);
        assert_abs_diff_eq!(model.last_time(), 1.0, epsilon = 1e-12);
        assert_eq!(model.time_index(1.0).unwrap(), 51);
    }

    #[test]
    fn leisen_reimer_rejects_bad_strike() {
        assert!(matches!(
            BinomialModel::leisen_reimer(&params(51), 0.0),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn peizer_pratt_is_symmetric_around_one_half() {
        assert_abs_diff_eq!(peizer_pratt_2(0.0, 101), 0.5);
        for z in [0.3, 1.2, 2.5] {
            let p = peizer_pratt_2(z, 101);
            assert!(p > 0.5 && p < 1.0);
            assert_abs_diff_eq!(p + peizer_pratt_2(-z, 101), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn terminal_probabilities_sum_to_one() {
        let model = BinomialModel::cox_ross_rubinstein(&params(40)).unwrap();
        let p = model.terminal_probabilities().unwrap();
        assert_eq!(p.len(), 41);
        assert_abs_diff_eq!(p.iter().sum::<Real>(), 1.0, epsilon = 1e-12);
        assert_eq!(model.node_probabilities_at_time_index(0).unwrap(), vec![1.0]);
    }

    #[test]
    fn too_few_steps_for_high_rate_is_rejected() {
        // CRR needs e^{r dt} < u, which fails for one step with r >> σ
        let p = ModelParameters::new(100.0, 0.9, 0.05, 1.0, 1).unwrap();
        assert!(matches!(
            BinomialModel::cox_ross_rubinstein(&p),
            Err(Error::Precondition(_))
        ));
    }
}

//! Binomial distribution.
//!
//! Wraps the `statrs` crate's binomial implementation. On a binomial lattice
//! with `n` steps and up-probability `q`, the number of up-moves to a
//! terminal node is `Binomial(n, q)`.

use lt_core::{ensure, errors::Error, Probability, Real, Result};
use statrs::distribution::{Binomial, Discrete, DiscreteCDF};

/// Binomial distribution with `n` trials and success probability `p`.
#[derive(Debug, Clone)]
pub struct BinomialDistribution {
    dist: Binomial,
    n: u64,
    p: Probability,
}

impl BinomialDistribution {
    /// Create a binomial distribution with `n` trials and probability `p`.
    ///
    /// Fails with a precondition error if `p` is not in `[0, 1]`.
    pub fn new(p: Probability, n: u64) -> Result<Self> {
        ensure!((0.0..=1.0).contains(&p), "p must be in [0, 1], got {p}");
        let dist = Binomial::new(p, n).map_err(|e| Error::InvalidArgument(e.to_string()))?;
        Ok(Self { dist, n, p })
    }

    /// Number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> Probability {
        self.p
    }

    /// Probability mass function P(X = k).
    pub fn pmf(&self, k: u64) -> Real {
        self.dist.pmf(k)
    }

    /// Cumulative distribution function P(X ≤ k).
    pub fn cdf(&self, k: u64) -> Real {
        self.dist.cdf(k)
    }

    /// Mean of the distribution (= np).
    pub fn mean(&self) -> Real {
        self.n as Real * self.p
    }
}

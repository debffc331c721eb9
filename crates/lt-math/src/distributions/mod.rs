//! Probability distributions.
//!
//! The standard normal distribution function used by the closed-form
//! formulas, and the binomial distribution of terminal node
//! counts on a binomial lattice. Both delegate to the `statrs` crate.

pub mod binomial;
pub mod normal;

pub use binomial::BinomialDistribution;
pub use normal::normal_cdf;

//! Standard normal (Gaussian) distribution.

use lt_core::Real;
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// The standard normal cumulative distribution function Φ(x).
///
/// Evaluated as `½ erfc(−x/√2)`, which keeps full relative accuracy in the
/// lower tail.
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x / SQRT_2)
}

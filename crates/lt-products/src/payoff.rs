//! Payoff functions of the underlying value at exercise.
//!
//! Engines accept any `Fn(Real) -> Real`; these are the usual ones.

use lt_core::Real;

/// `max(S − K, 0)`.
pub fn call(strike: Real) -> impl Fn(Real) -> Real + Send + Sync + Clone {
    move |s| (s - strike).max(0.0)
}

/// `max(K − S, 0)`.
pub fn put(strike: Real) -> impl Fn(Real) -> Real + Send + Sync + Clone {
    move |s| (strike - s).max(0.0)
}

/// Pays `cash` when `S > K`.
pub fn digital_call(strike: Real, cash: Real) -> impl Fn(Real) -> Real + Send + Sync + Clone {
    move |s| if s > strike { cash } else { 0.0 }
}

/// Pays `cash` when `S < K`.
pub fn digital_put(strike: Real, cash: Real) -> impl Fn(Real) -> Real + Send + Sync + Clone {
    move |s| if s < strike { cash } else { 0.0 }
}

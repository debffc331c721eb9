//! Closed-form Black-Scholes prices for European payoffs.
//!
//! These are the reference values lattice prices converge to as the number
//! of time steps grows:
//!
//! $$C = S e^{-qT} N(d_1) - K e^{-rT} N(d_2)$$
//! $$P = K e^{-rT} N(-d_2) - S e^{-qT} N(-d_1)$$
//!
//! where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)T}{\sigma\sqrt{T}}$.

use std::fmt;

use crate::distributions::normal_cdf;
use lt_core::{Rate, Real, Time, Volatility};

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// `(d1, d2)`, saturated to ±1e15 when the total standard deviation vanishes.
fn d1_d2(
    spot: Real,
    strike: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    t: Time,
) -> (Real, Real) {
    let std_dev = volatility * t.sqrt();
    if std_dev > 1e-15 {
        let d1 = ((spot / strike).ln()
            + (risk_free_rate - dividend_yield + 0.5 * volatility * volatility) * t)
            / std_dev;
        (d1, d1 - std_dev)
    } else {
        let fwd = spot * ((risk_free_rate - dividend_yield) * t).exp();
        let big = if fwd > strike { 1e15 } else { -1e15 };
        (big, big)
    }
}

/// Black-Scholes-Merton price of a European call or put.
///
/// At or past expiry (`t <= 0`) the intrinsic value is returned.
pub fn black_scholes_price(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    t: Time,
) -> Real {
    let phi = option_type.sign();
    if t <= 0.0 {
        return (phi * (spot - strike)).max(0.0);
    }
    let (d1, d2) = d1_d2(spot, strike, risk_free_rate, dividend_yield, volatility, t);
    let df_r = (-risk_free_rate * t).exp();
    let df_q = (-dividend_yield * t).exp();
    phi * (spot * df_q * normal_cdf(phi * d1) - strike * df_r * normal_cdf(phi * d2))
}

/// Black-Scholes price of a cash-or-nothing digital paying 1 at expiry when
/// the option finishes in the money.
pub fn black_scholes_digital_price(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    t: Time,
) -> Real {
    let phi = option_type.sign();
    if t <= 0.0 {
        return if phi * (spot - strike) > 0.0 { 1.0 } else { 0.0 };
    }
    let (_, d2) = d1_d2(spot, strike, risk_free_rate, dividend_yield, volatility, t);
    (-risk_free_rate * t).exp() * normal_cdf(phi * d2)
}

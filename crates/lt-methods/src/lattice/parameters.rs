//! Parameters shared by every lattice construction.

use lt_core::{ensure, Rate, Real, Result, Size, Time, Volatility};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Black-Scholes dynamics and discretization of a one-factor lattice.
///
/// `spot` is the initial asset value, `last_time` the lattice horizon and
/// `number_of_steps` the number of equal time steps between 0 and
/// `last_time`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelParameters {
    spot: Real,
    risk_free_rate: Rate,
    volatility: Volatility,
    last_time: Time,
    number_of_steps: Size,
}

impl ModelParameters {
    /// Validated parameter set.
    pub fn new(
        spot: Real,
        risk_free_rate: Rate,
        volatility: Volatility,
        last_time: Time,
        number_of_steps: Size,
    ) -> Result<Self> {
        let params = Self {
            spot,
            risk_free_rate,
            volatility,
            last_time,
            number_of_steps,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the invariants. Deserialized values bypass [`ModelParameters::new`],
    /// so lattice constructors call this again.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.spot.is_finite() && self.spot > 0.0,
            "spot must be positive, got {}",
            self.spot
        );
        ensure!(
            self.risk_free_rate.is_finite(),
            "risk-free rate must be finite, got {}",
            self.risk_free_rate
        );
        ensure!(
            self.volatility.is_finite() && self.volatility > 0.0,
            "volatility must be positive, got {}",
            self.volatility
        );
        ensure!(
            self.last_time.is_finite() && self.last_time > 0.0,
            "last time must be positive, got {}",
            self.last_time
        );
        ensure!(self.number_of_steps > 0, "number of steps must be > 0");
        Ok(())
    }

    /// Same dynamics, different discretization.
    pub fn with_number_of_steps(&self, number_of_steps: Size) -> Result<Self> {
        Self::new(
            self.spot,
            self.risk_free_rate,
            self.volatility,
            self.last_time,
            number_of_steps,
        )
    }

    /// Initial asset value.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Continuously compounded risk-free rate.
    pub fn risk_free_rate(&self) -> Rate {
        self.risk_free_rate
    }

    /// Lognormal volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Lattice horizon.
    pub fn last_time(&self) -> Time {
        self.last_time
    }

    /// Number of time steps.
    pub fn number_of_steps(&self) -> Size {
        self.number_of_steps
    }

    /// `last_time / number_of_steps`.
    pub fn time_step(&self) -> Time {
        self.last_time / self.number_of_steps as Time
    }
}

//! Exercise-date schedules of Bermudan options.

use lt_core::{errors::Error, Result, Time};
use lt_math::comparison::{close, EPSILON};

/// Strictly increasing, non-negative exercise dates; the last one is the
/// maturity of the option.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSchedule {
    dates: Vec<Time>,
}

impl ExerciseSchedule {
    /// Schedule from its dates. The last date is taken as maturity.
    ///
    /// Fails with [`Error::InvalidSchedule`] if `dates` is empty, holds a
    /// negative or non-finite date, or is not strictly increasing.
    pub fn new(dates: Vec<Time>) -> Result<Self> {
        if dates.is_empty() {
            return Err(Error::InvalidSchedule("no exercise dates".into()));
        }
        if let Some(t) = dates.iter().find(|t| !t.is_finite() || **t < 0.0) {
            return Err(Error::InvalidSchedule(format!(
                "exercise date {t} is negative or not finite"
            )));
        }
        if let Some(w) = dates.windows(2).find(|w| w[1] <= w[0]) {
            return Err(Error::InvalidSchedule(format!(
                "exercise dates must be strictly increasing, found {} followed by {}",
                w[0], w[1]
            )));
        }
        Ok(Self { dates })
    }

    /// Schedule whose last date must equal `maturity`.
    pub fn with_maturity(dates: Vec<Time>, maturity: Time) -> Result<Self> {
        let schedule = Self::new(dates)?;
        if !close(schedule.maturity(), maturity, EPSILON) {
            return Err(Error::InvalidSchedule(format!(
                "last exercise date {} differs from maturity {maturity}",
                schedule.maturity()
            )));
        }
        Ok(schedule)
    }

    /// All dates, maturity last.
    pub fn dates(&self) -> &[Time] {
        &self.dates
    }

    /// Last date.
    pub fn maturity(&self) -> Time {
        self.dates[self.dates.len() - 1]
    }

    /// Number of dates, maturity included.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false`; a schedule holds at least its maturity.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

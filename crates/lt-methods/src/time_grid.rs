//! Time grids.
//!
//! A [`TimeGrid`] is a strictly increasing sequence of times. Lattices use a
//! uniform grid starting at zero; exercise histories of Bermudan options use
//! the (generally non-uniform) grid of scheduled exercise dates.

use lt_core::{ensure, errors::Error, Result, Size, Time};

/// A strictly increasing grid of time points.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<Time>,
    dts: Vec<Time>,
}

impl TimeGrid {
    /// Uniform grid from 0 to `end` with `steps` intervals.
    pub fn uniform(end: Time, steps: Size) -> Result<Self> {
        ensure!(steps > 0, "steps must be > 0");
        ensure!(end.is_finite() && end > 0.0, "end must be positive, got {end}");
        Self::from_start(0.0, steps, end / steps as Time)
    }

    /// `steps + 1` equally spaced points `start, start + dt, …, start + steps·dt`.
    pub fn from_start(start: Time, steps: Size, dt: Time) -> Result<Self> {
        ensure!(dt.is_finite() && dt > 0.0, "dt must be positive, got {dt}");
        ensure!(start.is_finite(), "start must be finite, got {start}");
        let times: Vec<Time> = (0..=steps).map(|i| start + i as Time * dt).collect();
        Self::from_times(times)
    }

    /// Grid made of the given points, which must be finite, non-empty and
    /// strictly increasing.
    pub fn from_times(times: Vec<Time>) -> Result<Self> {
        if times.is_empty() {
            return Err(Error::InvalidArgument("time grid must not be empty".into()));
        }
        if let Some(t) = times.iter().find(|t| !t.is_finite()) {
            return Err(Error::InvalidArgument(format!("non-finite time {t} in grid")));
        }
        if let Some(w) = times.windows(2).find(|w| w[1] <= w[0]) {
            return Err(Error::InvalidArgument(format!(
                "time grid must be strictly increasing, found {} followed by {}",
                w[0], w[1]
            )));
        }
        let dts = times.windows(2).map(|w| w[1] - w[0]).collect();
        Ok(Self { times, dts })
    }

    /// Number of time points (= steps + 1).
    pub fn size(&self) -> Size {
        self.times.len()
    }

    /// Number of steps (= time points − 1).
    pub fn steps(&self) -> Size {
        self.times.len() - 1
    }

    /// Time at index `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.size()`.
    pub fn time(&self, i: Size) -> Time {
        self.times[i]
    }

    /// Time step between index `i` and `i+1`.
    ///
    /// # Panics
    /// Panics if `i >= self.steps()`.
    pub fn dt(&self, i: Size) -> Time {
        self.dts[i]
    }

    /// First time.
    pub fn start(&self) -> Time {
        self.times[0]
    }

    /// Final time.
    pub fn end(&self) -> Time {
        self.times[self.times.len() - 1]
    }

    /// All time points.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Index of the grid point closest to `t`, clamped to the grid.
    ///
    /// A time exactly halfway between two points resolves to the earlier one.
    pub fn nearest_index(&self, t: Time) -> Size {
        let upper = self.times.partition_point(|&x| x < t);
        if upper == 0 {
            return 0;
        }
        if upper == self.times.len() {
            return self.times.len() - 1;
        }
        let (below, above) = (self.times[upper - 1], self.times[upper]);
        if above - t < t - below {
            upper
        } else {
            upper - 1
        }
    }

    /// Index of the grid point closest to `t`.
    ///
    /// Fails with [`Error::InvalidTime`] if `t` is not finite. A time more
    /// than half a step before the first point or after the last one has no
    /// grid point of its own and fails with [`Error::IndexOutOfRange`],
    /// reporting `index == size`.
    pub fn index_of(&self, t: Time) -> Result<Size> {
        if !t.is_finite() {
            return Err(Error::InvalidTime(format!("non-finite time {t}")));
        }
        let first_half = self.dts.first().map_or(0.0, |dt| 0.5 * dt);
        let last_half = self.dts.last().map_or(0.0, |dt| 0.5 * dt);
        let tolerance = 1e-12 * self.end().abs().max(1.0);
        if t < self.start() - first_half - tolerance || t > self.end() + last_half + tolerance {
            return Err(Error::IndexOutOfRange {
                index: self.size(),
                size: self.size(),
            });
        }
        Ok(self.nearest_index(t))
    }
}

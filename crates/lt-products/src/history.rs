//! Exercise history recorded by the early-exercise engines.
//!
//! Entries are appended while the induction walks backward, so storage is
//! maturity-first. Every accessor takes a chronological index `k`
//! (`0` = earliest recorded time) and reads stored entry `len − 1 − k`.

use lt_core::{errors::Error, Real, Result, Size, Time};
use lt_methods::TimeGrid;

use crate::exercise::ExerciseDecision;

/// Per-step vectors of an American or Bermudan valuation.
///
/// One entry per recorded time: every lattice step for an American option,
/// every matched exercise date for a Bermudan one. Each entry holds the
/// option values, the exercise values, the continuation values and the
/// exercise/wait decision at every node.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseHistory {
    values: Vec<Vec<Real>>,
    exercise_values: Vec<Vec<Real>>,
    continuation_values: Vec<Vec<Real>>,
    decisions: Vec<Vec<ExerciseDecision>>,
    exercise_times: TimeGrid,
}

impl ExerciseHistory {
    /// Number of recorded time steps.
    pub fn len(&self) -> Size {
        self.values.len()
    }

    /// `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Times of the recorded entries, in chronological order.
    pub fn exercise_times(&self) -> &TimeGrid {
        &self.exercise_times
    }

    /// First node of the earliest recorded entry.
    ///
    /// This is the valuation result whenever time zero was recorded: always
    /// for American options, and for Bermudan options whose schedule starts
    /// at zero.
    pub fn root_value(&self) -> Result<Real> {
        self.values_at_index(0)?
            .first()
            .copied()
            .ok_or_else(|| Error::Runtime("empty value vector at the first recorded time".into()))
    }

    /// Option values at chronological index `k`.
    pub fn values_at_index(&self, k: Size) -> Result<&[Real]> {
        Ok(&self.values[self.stored_index(k)?])
    }

    /// Exercise values at chronological index `k`.
    pub fn exercise_values_at_index(&self, k: Size) -> Result<&[Real]> {
        Ok(&self.exercise_values[self.stored_index(k)?])
    }

    /// Continuation values at chronological index `k`.
    pub fn continuation_values_at_index(&self, k: Size) -> Result<&[Real]> {
        Ok(&self.continuation_values[self.stored_index(k)?])
    }

    /// Exercise/wait decisions at chronological index `k`.
    pub fn decisions_at_index(&self, k: Size) -> Result<&[ExerciseDecision]> {
        Ok(&self.decisions[self.stored_index(k)?])
    }

    /// Option values at the recorded time closest to `t`.
    ///
    /// Times more than half a step outside the recorded range fail with
    /// [`Error::IndexOutOfRange`]; a non-finite `t` is an
    /// [`Error::InvalidTime`].
    pub fn values_at_time(&self, t: Time) -> Result<&[Real]> {
        self.values_at_index(self.index_of(t)?)
    }

    /// Exercise values at the recorded time closest to `t`.
    pub fn exercise_values_at_time(&self, t: Time) -> Result<&[Real]> {
        self.exercise_values_at_index(self.index_of(t)?)
    }

    /// Continuation values at the recorded time closest to `t`.
    pub fn continuation_values_at_time(&self, t: Time) -> Result<&[Real]> {
        self.continuation_values_at_index(self.index_of(t)?)
    }

    /// Exercise/wait decisions at the recorded time closest to `t`.
    pub fn decisions_at_time(&self, t: Time) -> Result<&[ExerciseDecision]> {
        self.decisions_at_index(self.index_of(t)?)
    }

    fn index_of(&self, t: Time) -> Result<Size> {
        self.exercise_times.index_of(t)
    }

    fn stored_index(&self, k: Size) -> Result<Size> {
        let size = self.len();
        if k >= size {
            return Err(Error::IndexOutOfRange { index: k, size });
        }
        Ok(size - 1 - k)
    }
}

/// Accumulates history entries during a backward induction.
#[derive(Debug)]
pub(crate) struct HistoryRecorder {
    times: Vec<Time>,
    values: Vec<Vec<Real>>,
    exercise_values: Vec<Vec<Real>>,
    continuation_values: Vec<Vec<Real>>,
    decisions: Vec<Vec<ExerciseDecision>>,
}

impl HistoryRecorder {
    pub(crate) fn with_capacity(capacity: Size) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            exercise_values: Vec::with_capacity(capacity),
            continuation_values: Vec::with_capacity(capacity),
            decisions: Vec::with_capacity(capacity),
        }
    }

    /// Maturity entry: no continuation is possible, so every value vector is
    /// the payoff and every node exercises.
    pub(crate) fn record_maturity(&mut self, time: Time, payoff: &[Real]) {
        self.record(
            time,
            payoff.to_vec(),
            payoff.to_vec(),
            payoff.to_vec(),
            vec![ExerciseDecision::Exercise; payoff.len()],
        );
    }

    pub(crate) fn record(
        &mut self,
        time: Time,
        values: Vec<Real>,
        exercise_values: Vec<Real>,
        continuation_values: Vec<Real>,
        decisions: Vec<ExerciseDecision>,
    ) {
        self.times.push(time);
        self.values.push(values);
        self.exercise_values.push(exercise_values);
        self.continuation_values.push(continuation_values);
        self.decisions.push(decisions);
    }

    /// Freeze into the read-only container. Times were recorded backward.
    pub(crate) fn finish(self) -> Result<ExerciseHistory> {
        let mut times = self.times;
        times.reverse();
        Ok(ExerciseHistory {
            values: self.values,
            exercise_values: self.exercise_values,
            continuation_values: self.continuation_values,
            decisions: self.decisions,
            exercise_times: TimeGrid::from_times(times)?,
        })
    }
}

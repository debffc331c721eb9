//! Bermudan options: exercise allowed only on scheduled dates.
//!
//! The induction visits every lattice index `i` from maturity back to 0 and
//! compares continuation with exercise only when the lattice time `i · dt`
//! lies within half a step of the next scheduled date still to be matched.
//! Everywhere else the value is the continuation value.
//!
//! A date matches index `i` when `|i · dt − date| < dt / 2`, so dates that
//! are not multiples of `dt` are exercised at the nearest lattice time and
//! shift by up to half a step. A date lying exactly halfway between two
//! lattice times matches neither.
//!
//! The pointer to the pending date only moves back on a match and stops at
//! the earliest date. A date that is never matched (a halfway date, or the
//! earlier of two dates sharing a lattice time) therefore blocks every date
//! before it: those dates are not exercised and the history comes out
//! shorter than the schedule. This discretization effect is left as is and
//! reported with a warning.

use std::fmt;

use lt_core::{Real, Result, Size, Time};
use lt_methods::TreeModel;
use tracing::{debug, warn};

use crate::history::{ExerciseHistory, HistoryRecorder};
use crate::induction::early_exercise_induction;
use crate::schedule::ExerciseSchedule;

/// A Bermudan option paying `payoff(S)` on exercise.
#[derive(Clone)]
pub struct BermudanOption<F> {
    schedule: ExerciseSchedule,
    payoff: F,
}

impl<F> fmt::Debug for BermudanOption<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BermudanOption")
            .field("schedule", &self.schedule)
            .finish_non_exhaustive()
    }
}

impl<F> BermudanOption<F>
where
    F: Fn(Real) -> Real,
{
    /// Option exercisable on the dates of `schedule`; its last date is the
    /// maturity.
    pub fn new(schedule: ExerciseSchedule, payoff: F) -> Self {
        Self { schedule, payoff }
    }

    /// Exercise schedule.
    pub fn schedule(&self) -> &ExerciseSchedule {
        &self.schedule
    }

    /// Value at time zero.
    pub fn value<M>(&self, model: &M) -> Result<Real>
    where
        M: TreeModel + ?Sized,
    {
        self.induct(model, None)
    }

    /// Exercise history: one entry per matched exercise date, maturity
    /// included, timed by the scheduled dates.
    pub fn option_data<M>(&self, model: &M) -> Result<ExerciseHistory>
    where
        M: TreeModel + ?Sized,
    {
        let mut recorder = HistoryRecorder::with_capacity(self.schedule.len());
        self.induct(model, Some(&mut recorder))?;
        recorder.finish()
    }

    fn induct<M>(&self, model: &M, recorder: Option<&mut HistoryRecorder>) -> Result<Real>
    where
        M: TreeModel + ?Sized,
    {
        let dates = self.schedule.dates();
        let maturity = self.schedule.maturity();
        let n = model.time_index(maturity)?;
        let dt = model.time_step();
        let half_step = 0.5 * dt;
        debug!(
            product = "bermudan",
            steps = n,
            dates = dates.len(),
            "valuing"
        );

        // Maturity is matched by construction; look for the one before it.
        let mut pending: Option<Size> = dates.len().checked_sub(2);
        let mut matched = 1;
        let value = early_exercise_induction(
            model,
            n,
            maturity,
            &self.payoff,
            |i| {
                let k = pending?;
                let date = dates[k];
                if (i as Time * dt - date).abs() < half_step {
                    // the earliest date is the floor: once matched, nothing is pending
                    pending = k.checked_sub(1);
                    matched += 1;
                    Some(date)
                } else {
                    None
                }
            },
            recorder,
        )?;

        if matched != dates.len() {
            warn!(
                matched,
                scheduled = dates.len(),
                unmatched_date = ?pending.map(|k| dates[k]),
                time_step = dt,
                "exercise dates not matched on the lattice; earlier dates were not exercised"
            );
        }
        debug!(product = "bermudan", steps = n, value, "valued");
        Ok(value)
    }
}

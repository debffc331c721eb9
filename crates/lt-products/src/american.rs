//! American options: exercise allowed at every lattice time up to maturity.
//!
//! At each index `i` the held value is `max(C_i, E_i)` with
//! `C_i` the conditional expectation of `V_{i+1}` and `E_i` the payoff at
//! the nodes of `i`.

use std::fmt;

use lt_core::{Real, Result, Time};
use lt_methods::TreeModel;
use tracing::debug;

use crate::history::{ExerciseHistory, HistoryRecorder};
use crate::induction::early_exercise_induction;

/// An American option paying `payoff(S)` on exercise.
#[derive(Clone)]
pub struct AmericanOption<F> {
    maturity: Time,
    payoff: F,
}

impl<F> fmt::Debug for AmericanOption<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmericanOption")
            .field("maturity", &self.maturity)
            .finish_non_exhaustive()
    }
}

impl<F> AmericanOption<F>
where
    F: Fn(Real) -> Real,
{
    /// Option exercisable at any time up to `maturity`.
    pub fn new(maturity: Time, payoff: F) -> Self {
        Self { maturity, payoff }
    }

    /// Maturity.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Value at time zero.
    pub fn value<M>(&self, model: &M) -> Result<Real>
    where
        M: TreeModel + ?Sized,
    {
        self.induct(model, None)
    }

    /// Full exercise history: one entry per lattice time `0, dt, …, T`.
    ///
    /// `option_data(model)?.root_value()` equals `value(model)`.
    pub fn option_data<M>(&self, model: &M) -> Result<ExerciseHistory>
    where
        M: TreeModel + ?Sized,
    {
        let n = model.time_index(self.maturity)?;
        let mut recorder = HistoryRecorder::with_capacity(n + 1);
        self.induct(model, Some(&mut recorder))?;
        recorder.finish()
    }

    fn induct<M>(&self, model: &M, recorder: Option<&mut HistoryRecorder>) -> Result<Real>
    where
        M: TreeModel + ?Sized,
    {
        let n = model.time_index(self.maturity)?;
        let dt = model.time_step();
        debug!(product = "american", steps = n, "valuing");
        let value = early_exercise_induction(
            model,
            n,
            n as Time * dt,
            &self.payoff,
            |i| Some(i as Time * dt),
            recorder,
        )?;
        debug!(product = "american", steps = n, value, "valued");
        Ok(value)
    }
}

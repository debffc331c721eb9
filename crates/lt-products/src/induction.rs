//! Backward-induction steps shared by the engines.
//!
//! Each step takes the value vector of index `i + 1` and returns a fresh
//! vector for index `i`; nothing is updated in place.

use lt_core::{check_dimension, Real, Result, Size, Time};
use lt_methods::TreeModel;
use tracing::trace;

use crate::exercise::ExerciseDecision;
use crate::history::HistoryRecorder;

/// `payoff` at every node of index `i`.
pub(crate) fn payoff_values<M>(model: &M, i: Size, payoff: &dyn Fn(Real) -> Real) -> Result<Vec<Real>>
where
    M: TreeModel + ?Sized,
{
    let values = model.transformed_values_at_time_index(i, payoff)?;
    check_dimension(i, model.node_count(i), values.len())?;
    Ok(values)
}

/// Discounted conditional expectation of `next` one step back, at index `i`.
pub(crate) fn roll_back<M>(model: &M, next: &[Real], i: Size) -> Result<Vec<Real>>
where
    M: TreeModel + ?Sized,
{
    let values = model.conditional_expectation(next, i)?;
    check_dimension(i, model.node_count(i), values.len())?;
    Ok(values)
}

/// Node-wise `max(continuation, exercise)` and the matching decisions.
pub(crate) fn exercise_step(
    continuation: &[Real],
    exercise: &[Real],
) -> (Vec<Real>, Vec<ExerciseDecision>) {
    continuation
        .iter()
        .zip(exercise)
        .map(|(&c, &e)| (c.max(e), ExerciseDecision::choose(c, e)))
        .unzip()
}

/// The single value left at index 0.
pub(crate) fn root_value(values: &[Real]) -> Result<Real> {
    check_dimension(0, 1, values.len())?;
    Ok(values[0])
}

/// Discounted expectation of `terminal` (values at `maturity_index`) back to
/// the root.
pub(crate) fn discounted_expectation<M>(
    model: &M,
    maturity_index: Size,
    terminal: Vec<Real>,
) -> Result<Real>
where
    M: TreeModel + ?Sized,
{
    let mut values = terminal;
    for i in (0..maturity_index).rev() {
        values = roll_back(model, &values, i)?;
    }
    root_value(&values)
}

/// Backward induction with early exercise.
///
/// `exercise_time(i)` returns the time to record for index `i` when exercise
/// is allowed there, and `None` when index `i` is pure continuation. Steps
/// with exercise are appended to `recorder`, maturity first.
pub(crate) fn early_exercise_induction<M>(
    model: &M,
    maturity_index: Size,
    maturity_time: Time,
    payoff: &dyn Fn(Real) -> Real,
    mut exercise_time: impl FnMut(Size) -> Option<Time>,
    mut recorder: Option<&mut HistoryRecorder>,
) -> Result<Real>
where
    M: TreeModel + ?Sized,
{
    let mut values = payoff_values(model, maturity_index, payoff)?;
    if let Some(rec) = recorder.as_deref_mut() {
        rec.record_maturity(maturity_time, &values);
    }

    for i in (0..maturity_index).rev() {
        let continuation = roll_back(model, &values, i)?;
        values = match exercise_time(i) {
            None => continuation,
            Some(time) => {
                let exercise = payoff_values(model, i, payoff)?;
                let (held, decisions) = exercise_step(&continuation, &exercise);
                trace!(
                    index = i,
                    time,
                    exercised = decisions.iter().filter(|d| d.is_exercise()).count(),
                    nodes = decisions.len(),
                    "exercise step"
                );
                if let Some(rec) = recorder.as_deref_mut() {
                    rec.record(time, held.clone(), exercise, continuation, decisions);
                }
                held
            }
        };
    }
    root_value(&values)
}

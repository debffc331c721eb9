//! Exercise/wait decision taken at a lattice node.

use std::fmt;

use lt_core::Real;

/// What the holder does at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseDecision {
    /// Take the exercise value now.
    Exercise,
    /// Keep the option alive.
    Wait,
}

impl ExerciseDecision {
    /// Compare a continuation value with an exercise value.
    ///
    /// Waiting is chosen only when continuation is strictly greater; ties
    /// go to [`ExerciseDecision::Exercise`].
    pub fn choose(continuation: Real, exercise: Real) -> Self {
        if continuation > exercise {
            ExerciseDecision::Wait
        } else {
            ExerciseDecision::Exercise
        }
    }

    /// `'e'` for exercise, `'w'` for wait.
    pub fn as_char(self) -> char {
        match self {
            ExerciseDecision::Exercise => 'e',
            ExerciseDecision::Wait => 'w',
        }
    }

    /// `true` for [`ExerciseDecision::Exercise`].
    pub fn is_exercise(self) -> bool {
        self == ExerciseDecision::Exercise
    }
}

impl fmt::Display for ExerciseDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

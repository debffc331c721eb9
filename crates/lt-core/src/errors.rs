//! Error types for the lattice valuation workspace.
//!
//! Every fallible operation in the workspace returns [`Result`]. Errors are
//! deterministic: a lattice valuation that fails once fails again with the
//! same inputs, so nothing here is meant to be retried. The `ensure!` macro
//! covers precondition checks.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A time or time index outside the model horizon, or not on the grid.
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// A vector whose length differs from the node count expected at a
    /// given time index. Always signals a broken lattice implementation.
    #[error("dimension mismatch at time index {index}: expected {expected} nodes, found {found}")]
    DimensionMismatch {
        /// Time index at which the mismatch was detected.
        index: usize,
        /// Node count required at that index.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },

    /// Malformed exercise-date schedule.
    #[error("invalid exercise schedule: {0}")]
    InvalidSchedule(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lt_core::{ensure, errors::Error};
/// fn positive(x: f64) -> lt_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Checks that a vector has the node count expected at a time index.
///
/// Returns [`Error::DimensionMismatch`] otherwise; vectors are never padded
/// or truncated.
pub fn check_dimension(index: usize, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(Error::DimensionMismatch {
            index,
            expected,
            found,
        });
    }
    Ok(())
}

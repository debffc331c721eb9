//! Tolerance checks on times and grid positions.

use lt_core::Real;

/// Absolute tolerance used when two times must coincide, e.g. the last
/// exercise date and the maturity.
pub const EPSILON: Real = 1e-10;

/// Absolute comparison: `a` and `b` differ by at most `tolerance`.
#[inline]
pub fn close(a: Real, b: Real, tolerance: Real) -> bool {
    (a - b).abs() <= tolerance
}

/// Nearest integer to `x / step` when `x` lies within `tolerance` (in units
/// of `step`) of an integer multiple of `step`.
///
/// Returns `None` for misaligned, negative or non-finite ratios.
pub fn aligned_multiple(x: Real, step: Real, tolerance: Real) -> Option<usize> {
    let ratio = x / step;
    if !ratio.is_finite() || ratio < -tolerance {
        return None;
    }
    let k = ratio.round();
    if (ratio - k).abs() > tolerance {
        return None;
    }
    Some(k.max(0.0) as usize)
}

//! Mathematical utility functions
//!
//! Percentage calculation with an explicit "no denominator" outcome instead of
//! a silent zero, so callers can report it distinctly.

/// Calculate `100 * part / total` with a single rounding step, or `None` if
/// total is zero.
///
/// The scaled numerator is formed in `i128` and divided once, so the result is
/// the nearest `f64` to the exact quotient whenever both operands are below
/// 2^53 after scaling.
///
/// # Examples
/// ```
/// use super_staker_checkup::utils::math::percentage_of_sats;
///
/// assert_eq!(percentage_of_sats(1, 4), Some(25.0));
/// assert_eq!(percentage_of_sats(0, 100), Some(0.0));
/// assert_eq!(percentage_of_sats(50, 0), None);
/// ```
#[inline]
pub fn percentage_of_sats(part: i64, total: i64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some((i128::from(part) * 100) as f64 / total as f64)
    }
}

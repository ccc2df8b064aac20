/// Promotes an `i64` to `f64` for mixed integer/real arithmetic.
///
/// Integers beyond `2^53` round to the nearest representable float, as
/// double-precision promotion does.
///
/// ## Example
/// ```
/// use matlang::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an index or extent to `usize`.
///
/// Negative values have no `usize` counterpart and yield `None`.
///
/// ## Example
/// ```
/// use matlang::util::num::i64_to_usize;
///
/// assert_eq!(i64_to_usize(3), Some(3));
/// assert_eq!(i64_to_usize(-1), None);
/// ```
#[must_use]
pub fn i64_to_usize(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

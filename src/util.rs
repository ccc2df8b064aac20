/// Numeric conversion helpers.
///
/// Conversions from `i64` to `usize` indices and `f64` operands.
pub mod num;

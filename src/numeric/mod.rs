// ============================================================================
// Numeric Module
// Exact rational arithmetic over arbitrary-precision integers
// ============================================================================
//
// This module provides:
// - Fraction: numerator/denominator pair with opt-in reduction
// - Operand: the closed set of inputs every operation accepts
// - Number: a fraction or the explicit NaN marker from lenient parsing
// - FractionError: error types for construction and arithmetic
//
// Design principles:
// - No floating-point arithmetic; floats only enter through their decimal text
// - Arithmetic returns Result; comparisons are total and return false instead
// - Builder-style mutators (reduce, fix_negative, reciprocate, scale_to)
//   return &mut Self; everything else returns a new value

mod compare;
mod errors;
mod format;
mod fraction;
mod number;
mod operand;
mod ops;
mod parse;

pub use errors::{FractionError, FractionResult, Role};
pub use format::Style;
pub use fraction::Fraction;
pub use number::Number;
pub use operand::Operand;

pub(crate) use fraction::{decimal_digits, pow10};

// ============================================================================
// Math Module
// Arbitrary-precision functions over Fraction
// ============================================================================
//
// This module provides:
// - MathContext: target accuracy, guard digits and iteration cap
// - Constant: 500-digit PI, E, SQRT2, SQRT1_2, PHI, LN10, LOG10_E, LOG2_E, LN2
// - Iterative functions: pow, sqrt, nth_root, sin, cos, tan, exp, ln, log, log2
// - Exact helpers: factorial, to_int, round, floor, ceil, trunc, abs, min, max
// - Random fractions
//
// The free functions below read the process-wide context once per call. Use
// the methods on an explicit MathContext to pick accuracy per computation.

mod constants;
mod context;
mod exp;
mod integer;
mod log;
mod random;
mod roots;
mod rounding;
mod trig;

pub use constants::{Constant, CONSTANT_DIGITS};
pub use context::{MathContext, DEFAULT_ACCURACY, DEFAULT_GUARD_DIGITS, DEFAULT_MAX_ITERATIONS};
pub use integer::{factorial, to_int};
pub use random::{random, random_from_float, random_with};
pub use rounding::{abs, ceil, floor, max, min, round, trunc};

use crate::numeric::{Fraction, FractionResult, Operand};

/// Process-wide accuracy in decimal digits.
pub fn accuracy() -> usize {
    MathContext::global().accuracy
}

/// Change the process-wide accuracy. Computations already running keep the
/// value they started with.
pub fn set_accuracy(digits: usize) -> Result<(), String> {
    MathContext::set_global_accuracy(digits)
}

pub fn pow(base: impl Into<Operand>, exponent: impl Into<Operand>) -> FractionResult<Fraction> {
    MathContext::global().pow(base, exponent)
}

pub fn sqrt(value: impl Into<Operand>) -> FractionResult<Fraction> {
    MathContext::global().sqrt(value)
}

pub fn sqrt_with_guess(
    value: impl Into<Operand>,
    guess: impl Into<Operand>,
) -> FractionResult<Fraction> {
    MathContext::global().sqrt_with_guess(value, guess)
}

pub fn nth_root(value: impl Into<Operand>, index: u32) -> FractionResult<Fraction> {
    MathContext::global().nth_root(value, index)
}

pub fn sin(angle: impl Into<Operand>) -> FractionResult<Fraction> {
    MathContext::global().sin(angle)
}

pub fn cos(angle: impl Into<Operand>) -> FractionResult<Fraction> {
    MathContext::global().cos(angle)
}

pub fn tan(angle: impl Into<Operand>) -> FractionResult<Fraction> {
    MathContext::global().tan(angle)
}

pub fn exp(power: impl Into<Operand>) -> FractionResult<Fraction> {
    MathContext::global().exp(power)
}

pub fn ln(value: impl Into<Operand>) -> FractionResult<Fraction> {
    MathContext::global().ln(value)
}

/// Base-10 logarithm.
pub fn log(value: impl Into<Operand>) -> FractionResult<Fraction> {
    MathContext::global().log(value)
}

pub fn log2(value: impl Into<Operand>) -> FractionResult<Fraction> {
    MathContext::global().log2(value)
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::numeric::{pow10, Fraction, Operand};
    use num_traits::Signed;

    pub(crate) trait CloseTo {
        /// `|self - other| < 10^-digits`
        fn close_to(&self, other: impl Into<Operand>, digits: usize) -> bool;
    }

    impl CloseTo for Fraction {
        fn close_to(&self, other: impl Into<Operand>, digits: usize) -> bool {
            let other = match other.into().resolve() {
                Ok(other) => other,
                Err(_) => return false,
            };
            let difference = self.minus(other).unwrap_or_else(|_| Fraction::one());
            difference.numerator().abs() * pow10(digits) < difference.denominator().abs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_accuracy_round_trip() {
        // Other tests read the global context concurrently; stay well above
        // the precision any of them assert on.
        let before = accuracy();
        set_accuracy(150).unwrap();
        assert_eq!(accuracy(), 150);
        set_accuracy(before).unwrap();
        assert_eq!(accuracy(), before);
        assert!(set_accuracy(0).is_err());
    }

    #[test]
    fn test_free_functions_use_global_context() {
        assert!(pow(2, -1).unwrap().eq("1/2"));
        assert_eq!(sqrt(2).unwrap().as_decimal(40), "1.4142135623730950488016887242096980785696");
        assert!(sqrt(2).unwrap().accuracy() > 100);
        assert!(cos(Constant::Pi).unwrap().eq(-1));
        assert!(ln(Constant::E).unwrap().eq(1));
        assert!(log(100).unwrap().eq(2));
        assert!(log2(8).unwrap().eq(3));
        assert_eq!(nth_root(27, 3).unwrap().round(), num_bigint::BigInt::from(3));
    }
}

// ============================================================================
// Operand
// The closed set of inputs every fraction operation accepts
// ============================================================================

use super::errors::{FractionError, FractionResult, Role};
use super::fraction::Fraction;
use super::parse::parse_literal;
use crate::math::Constant;
use num_bigint::{BigInt, BigUint};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

/// Any numeric input: integer, float, string, fraction, pair or named constant.
///
/// Every operation converts its argument through [`Operand::resolve`], so
/// type dispatch lives in one place. Strings are parsed lazily, which lets
/// comparisons turn parse failures into `false` while arithmetic reports them.
#[derive(Debug, Clone)]
pub enum Operand {
    Integer(BigInt),
    Float(f64),
    Text(String),
    Fraction(Fraction),
    /// A numerator/denominator pair, combined by cross-multiplication
    Pair(Box<Operand>, Box<Operand>),
    /// A precomputed constant, recognized by name in the math library
    Constant(Constant),
}

impl Operand {
    /// Normalize to a fraction.
    ///
    /// # Errors
    /// - `UnparsableInput` for strings outside the grammar
    /// - `InvalidArgumentType` for NaN or infinite floats
    /// - `ZeroDivision` for pairs or fraction strings with a zero denominator
    pub fn resolve(self) -> FractionResult<Fraction> {
        self.resolve_as(Role::Operand)
    }

    pub(crate) fn resolve_as(self, role: Role) -> FractionResult<Fraction> {
        match self {
            Operand::Integer(value) => Ok(Fraction::from_integer(value)),
            Operand::Float(value) => resolve_float(value, role),
            Operand::Text(text) => {
                if text.trim().is_empty() {
                    match role {
                        Role::Numerator => Ok(Fraction::zero()),
                        Role::Denominator => Ok(Fraction::one()),
                        Role::Operand => Err(FractionError::UnparsableInput {
                            literal: text,
                            role,
                        }),
                    }
                } else {
                    parse_literal(&text, role)
                }
            }
            Operand::Fraction(fraction) => Ok(fraction),
            Operand::Pair(numerator, denominator) => Fraction::new(*numerator, *denominator),
            Operand::Constant(constant) => Ok(constant.value()),
        }
    }

    /// Normalize to an exact integer.
    ///
    /// Integral fractions such as `"4/2"` are accepted.
    ///
    /// # Errors
    /// Returns `IntegerExpected` when the value has a fractional part.
    pub fn to_integer(self) -> FractionResult<BigInt> {
        let fraction = self.resolve()?;
        if fraction.is_integer() {
            Ok(fraction.whole())
        } else {
            Err(FractionError::IntegerExpected {
                value: fraction.to_string(),
            })
        }
    }

    /// The named constant this operand stands for, if any.
    pub fn constant(&self) -> Option<Constant> {
        match self {
            Operand::Constant(constant) => Some(*constant),
            _ => None,
        }
    }
}

/// Integral floats convert directly; others go through their shortest decimal
/// rendering so binary rounding artifacts never reach the exact value.
fn resolve_float(value: f64, role: Role) -> FractionResult<Fraction> {
    if !value.is_finite() {
        return Err(FractionError::InvalidArgumentType {
            value: value.to_string(),
        });
    }
    if value.fract() == 0.0 {
        return BigInt::from_f64(value)
            .map(Fraction::from_integer)
            .ok_or_else(|| FractionError::InvalidArgumentType {
                value: value.to_string(),
            });
    }
    parse_literal(&value.to_string(), role)
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                #[inline]
                fn from(value: $t) -> Self {
                    Operand::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Operand {
    fn from(value: BigInt) -> Self {
        Operand::Integer(value)
    }
}

impl From<&BigInt> for Operand {
    fn from(value: &BigInt) -> Self {
        Operand::Integer(value.clone())
    }
}

impl From<BigUint> for Operand {
    fn from(value: BigUint) -> Self {
        Operand::Integer(BigInt::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<f32> for Operand {
    /// Non-integral `f32` values keep their own shortest rendering; widening
    /// to `f64` first would expose binary noise.
    fn from(value: f32) -> Self {
        if value.is_finite() && value.fract() != 0.0 {
            Operand::Text(value.to_string())
        } else {
            Operand::Float(f64::from(value))
        }
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<&String> for Operand {
    fn from(value: &String) -> Self {
        Operand::Text(value.clone())
    }
}

impl From<Fraction> for Operand {
    fn from(value: Fraction) -> Self {
        Operand::Fraction(value)
    }
}

impl From<&Fraction> for Operand {
    fn from(value: &Fraction) -> Self {
        Operand::Fraction(value.clone())
    }
}

impl From<Constant> for Operand {
    fn from(value: Constant) -> Self {
        Operand::Constant(value)
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Operand::Fraction(Fraction::from_decimal(value))
    }
}

impl<N: Into<Operand>, D: Into<Operand>> From<(N, D)> for Operand {
    fn from((numerator, denominator): (N, D)) -> Self {
        Operand::Pair(Box::new(numerator.into()), Box::new(denominator.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(op: impl Into<Operand>) -> String {
        op.into().resolve().unwrap().to_string()
    }

    #[test]
    fn test_integer_operands() {
        assert_eq!(resolved(42u8), "42/1");
        assert_eq!(resolved(-42i64), "-42/1");
        assert_eq!(resolved(BigInt::from(7)), "7/1");
    }

    #[test]
    fn test_float_operands() {
        assert_eq!(resolved(3.0f64), "3/1");
        assert_eq!(resolved(0.1f64), "1/10");
        assert_eq!(resolved(-2.5f64), "-25/10");
        assert_eq!(resolved(0.1f32), "1/10");
    }

    #[test]
    fn test_non_finite_float_rejected() {
        assert!(matches!(
            Operand::from(f64::INFINITY).resolve(),
            Err(FractionError::InvalidArgumentType { .. })
        ));
    }

    #[test]
    fn test_pair_operand_cross_multiplies() {
        assert_eq!(resolved((3, 4)), "3/4");
        assert_eq!(resolved(("0.5", "0.25")), "500/250");
        assert_eq!(
            Operand::from((1, 0)).resolve().unwrap_err(),
            FractionError::ZeroDivision
        );
    }

    #[test]
    fn test_empty_text_depends_on_role() {
        assert!(Operand::from("").resolve().is_err());
        assert!(Operand::from("  ")
            .resolve_as(Role::Numerator)
            .unwrap()
            .is_zero());
        assert_eq!(
            Operand::from("").resolve_as(Role::Denominator).unwrap().to_string(),
            "1/1"
        );
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(Operand::from("4/2").to_integer().unwrap(), BigInt::from(2));
        assert_eq!(Operand::from(9.0).to_integer().unwrap(), BigInt::from(9));
        assert!(matches!(
            Operand::from(1.5).to_integer(),
            Err(FractionError::IntegerExpected { .. })
        ));
    }

    #[test]
    fn test_decimal_operand() {
        assert_eq!(resolved(Decimal::new(12345, 2)), "12345/100");
    }

    #[test]
    fn test_constant_operand() {
        let op = Operand::from(Constant::Pi);
        assert_eq!(op.constant(), Some(Constant::Pi));
        assert!(op.resolve().unwrap().accuracy() >= 400);
    }
}

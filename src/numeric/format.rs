// ============================================================================
// Formatting and Conversion
// Slash and LaTeX rendering, long-division decimals, host-type bridges
// ============================================================================

use super::errors::{FractionError, FractionResult};
use super::fraction::{pow10, Fraction};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;
use std::fmt;

/// Largest scale a `rust_decimal::Decimal` supports.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Digits carried past the denominator's length when bridging to `f64`.
const F64_EXTRA_DIGITS: usize = 17;

/// Rendering style for [`Fraction::to_string_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// `numerator/denominator`
    #[default]
    Slash,
    /// `\frac{numerator}{denominator}`
    Latex,
}

impl Fraction {
    /// Render in the given style. No reduction is performed.
    pub fn to_string_with(&self, style: Style) -> String {
        match style {
            Style::Slash => format!("{}/{}", self.numerator, self.denominator),
            Style::Latex => format!("\\frac{{{}}}{{{}}}", self.numerator, self.denominator),
        }
    }

    /// Shorthand for `to_string_with(Style::Latex)`.
    pub fn to_latex(&self) -> String {
        self.to_string_with(Style::Latex)
    }

    /// Fixed-point rendering with exactly `digits` places after the point.
    ///
    /// Long division: each step multiplies the remainder by ten and takes the
    /// integer quotient, so every digit shown is exact and the last one is
    /// truncated, never rounded.
    ///
    /// ```
    /// use nfrac::Fraction;
    ///
    /// let third = Fraction::new(1, 3)?;
    /// assert_eq!(third.as_decimal(5), "0.33333");
    /// assert_eq!(third.negative().as_decimal(2), "-0.33");
    /// # Ok::<(), nfrac::FractionError>(())
    /// ```
    pub fn as_decimal(&self, digits: usize) -> String {
        let numerator = self.numerator.abs();
        let denominator = self.denominator.abs();
        let integer_part = &numerator / &denominator;
        let mut remainder = &numerator % &denominator;

        let mut body = integer_part.to_string();
        let mut any_nonzero = !integer_part.is_zero();
        if digits > 0 {
            body.push('.');
            for _ in 0..digits {
                remainder *= 10u8;
                let digit = &remainder / &denominator;
                remainder -= &digit * &denominator;
                let digit = digit.to_u8().unwrap_or(0);
                any_nonzero |= digit != 0;
                body.push(char::from(b'0' + digit));
            }
        }

        if self.is_negative() && any_nonzero {
            format!("-{}", body)
        } else {
            body
        }
    }

    /// Lossy bridge to a host float, for display and interop only.
    pub fn to_f64(&self) -> f64 {
        self.as_decimal(self.accuracy() + F64_EXTRA_DIGITS)
            .parse()
            .unwrap_or(f64::NAN)
    }

    // ========================================================================
    // Conversion from rust_decimal (for API boundaries)
    // ========================================================================

    /// Exact conversion: mantissa over 10^scale, unreduced.
    pub fn from_decimal(d: Decimal) -> Self {
        Self::raw(BigInt::from(d.mantissa()), pow10(d.scale() as usize))
    }

    /// Convert to `rust_decimal::Decimal`, truncating to the largest scale
    /// whose mantissa still fits.
    ///
    /// # Errors
    /// Returns `OutOfRange` if even the integer part does not fit.
    pub fn to_decimal(&self) -> FractionResult<Decimal> {
        for scale in (0..=MAX_DECIMAL_SCALE).rev() {
            let scaled = &self.numerator * pow10(scale as usize) / &self.denominator;
            if let Some(mantissa) = scaled.to_i128() {
                if let Ok(decimal) = Decimal::try_from_i128_with_scale(mantissa, scale) {
                    return Ok(decimal);
                }
            }
        }
        Err(FractionError::OutOfRange { target: "Decimal" })
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

// ============================================================================
// Serde (string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Fraction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fraction {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

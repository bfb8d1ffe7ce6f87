// ============================================================================
// Number
// A fraction or the explicit not-a-number marker
// ============================================================================

use super::fraction::Fraction;
use std::fmt;

/// Result of lenient parsing: either a finite fraction or `NaN`.
///
/// `NaN` is a separate variant rather than a fraction with invalid parts, so
/// no arithmetic can ever run on it by accident. Like IEEE NaN it compares
/// unequal to everything, itself included.
#[derive(Debug, Clone)]
pub enum Number {
    Finite(Fraction),
    NaN,
}

impl Number {
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, Number::NaN)
    }

    pub fn as_fraction(&self) -> Option<&Fraction> {
        match self {
            Number::Finite(fraction) => Some(fraction),
            Number::NaN => None,
        }
    }

    pub fn into_fraction(self) -> Option<Fraction> {
        match self {
            Number::Finite(fraction) => Some(fraction),
            Number::NaN => None,
        }
    }
}

impl From<Fraction> for Number {
    fn from(fraction: Fraction) -> Self {
        Number::Finite(fraction)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Finite(a), Number::Finite(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Finite(fraction) => write!(f, "{}", fraction),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_is_never_equal() {
        assert_ne!(Number::NaN, Number::NaN);
        assert!(Number::NaN.is_nan());
        assert_eq!(Number::NaN.to_string(), "NaN");
        assert!(Number::NaN.into_fraction().is_none());
    }

    #[test]
    fn test_finite_compares_by_value() {
        let half = Number::from(Fraction::new(1, 2).unwrap());
        let two_quarters = Number::from(Fraction::new(2, 4).unwrap());
        assert_eq!(half, two_quarters);
        assert!(!half.is_nan());
        assert_eq!(half.as_fraction().unwrap().to_string(), "1/2");
    }
}

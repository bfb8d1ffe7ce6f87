// ============================================================================
// String Parsing
// Integer, decimal, radix and fraction notations
// ============================================================================

use super::errors::{FractionError, FractionResult, Role};
use super::fraction::{pow10, Fraction};
use super::number::Number;
use num_bigint::BigInt;

/// Largest decimal exponent accepted in `1e…` notation.
const MAX_EXPONENT: u32 = 100_000;

/// Parse any supported literal, reporting failures against `role`.
///
/// Tried in order: plain or decimal number (with optional exponent), a
/// `0x`/`0o`/`0b` integer, then a `a/b`, `a:b` or `\frac{a}{b}` fraction.
pub(crate) fn parse_literal(text: &str, role: Role) -> FractionResult<Fraction> {
    if let Some(value) = parse_number(text) {
        return Ok(value);
    }
    match split_fraction(text) {
        Some((numerator, denominator)) => {
            let unparsable = || FractionError::UnparsableInput {
                literal: text.to_string(),
                role,
            };
            let numerator = parse_number(numerator).ok_or_else(unparsable)?;
            let denominator = parse_number(denominator).ok_or_else(unparsable)?;
            if denominator.is_zero() {
                return Err(FractionError::ZeroDivision);
            }
            Ok(Fraction::raw(
                numerator.numerator * denominator.denominator,
                numerator.denominator * denominator.numerator,
            ))
        }
        None => Err(FractionError::UnparsableInput {
            literal: text.to_string(),
            role,
        }),
    }
}

/// Parse a single number: integer, decimal or radix literal.
///
/// Whitespace anywhere is ignored and a leading `+` is allowed. Decimals keep
/// their digits unreduced: `"3.14"` becomes `314/100`.
pub(crate) fn parse_number(text: &str) -> Option<Fraction> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let (negative, body) = match compact.as_bytes().first()? {
        b'-' => (true, &compact[1..]),
        b'+' => (false, &compact[1..]),
        _ => (false, compact.as_str()),
    };

    let value = match radix_prefix(body) {
        Some((radix, digits)) => {
            let digits = strip_separators(digits, radix)?;
            Fraction::from_integer(BigInt::parse_bytes(digits.as_bytes(), radix)?)
        }
        None => parse_decimal(body)?,
    };

    Some(if negative { value.negative() } else { value })
}

fn radix_prefix(body: &str) -> Option<(u32, &str)> {
    let prefix = body.get(..2)?;
    let radix = match prefix.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((radix, &body[2..]))
}

/// `digits[.digits][e[sign]digits]` with at least one mantissa digit.
fn parse_decimal(body: &str) -> Option<Fraction> {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let (whole, fractional) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };
    if whole.is_empty() && fractional.is_empty() {
        return None;
    }
    let whole = if whole.is_empty() {
        String::new()
    } else {
        strip_separators(whole, 10)?
    };
    let fractional = if fractional.is_empty() {
        String::new()
    } else {
        strip_separators(fractional, 10)?
    };

    let mut numerator = BigInt::parse_bytes(format!("{}{}", whole, fractional).as_bytes(), 10)?;
    let mut denominator = pow10(fractional.len());

    if let Some(exponent) = exponent {
        let (shrink, digits) = match exponent.as_bytes().first()? {
            b'-' => (true, &exponent[1..]),
            b'+' => (false, &exponent[1..]),
            _ => (false, exponent),
        };
        let shift: u32 = strip_separators(digits, 10)?.parse().ok()?;
        if shift > MAX_EXPONENT {
            return None;
        }
        if shrink {
            denominator *= pow10(shift as usize);
        } else {
            numerator *= pow10(shift as usize);
        }
    }

    Some(Fraction::raw(numerator, denominator))
}

/// Validate digit groups joined by single `_` and return the bare digits.
fn strip_separators(digits: &str, radix: u32) -> Option<String> {
    let mut bare = String::with_capacity(digits.len());
    for group in digits.split('_') {
        if group.is_empty() || !group.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        bare.push_str(group);
    }
    Some(bare)
}

/// Split `a/b`, `a:b` or `\frac{a}{b}` into its two sides.
fn split_fraction(text: &str) -> Option<(&str, &str)> {
    let text = text.trim();
    if let Some(rest) = text.strip_prefix("\\frac") {
        let rest = rest.trim_start().strip_prefix('{')?;
        let close = rest.find('}')?;
        let (numerator, rest) = (&rest[..close], &rest[close + 1..]);
        let rest = rest.trim_start().strip_prefix('{')?;
        let close = rest.find('}')?;
        let (denominator, rest) = (&rest[..close], &rest[close + 1..]);
        if !rest.trim().is_empty() {
            return None;
        }
        return Some((numerator, denominator));
    }
    let pos = text.find(['/', ':'])?;
    Some((&text[..pos], &text[pos + 1..]))
}

impl Fraction {
    /// Parse the `a/b`, `a:b` or `\frac{a}{b}` notation.
    ///
    /// Each side may use any number notation. Every failure, including a
    /// zero denominator or a plain number without a separator, yields
    /// [`Number::NaN`]; use `str::parse` for a precise error.
    ///
    /// ```
    /// use nfrac::Fraction;
    ///
    /// assert_eq!(Fraction::parse_fraction("3/4").to_string(), "3/4");
    /// assert!(Fraction::parse_fraction("bogus").is_nan());
    /// ```
    pub fn parse_fraction(text: &str) -> Number {
        let Some((numerator, denominator)) = split_fraction(text) else {
            return Number::NaN;
        };
        match (parse_number(numerator), parse_number(denominator)) {
            (Some(numerator), Some(denominator)) if !denominator.is_zero() => {
                Number::Finite(Fraction::raw(
                    numerator.numerator * denominator.denominator,
                    numerator.denominator * denominator.numerator,
                ))
            }
            _ => Number::NaN,
        }
    }
}

impl std::str::FromStr for Fraction {
    type Err = FractionError;

    /// Parse any supported notation.
    ///
    /// # Examples
    /// - "42" -> 42/1
    /// - "-1.25e2" -> -12500/100
    /// - "0xff_ff" -> 65535/1
    /// - "\\frac{1}{3}" -> 1/3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(FractionError::UnparsableInput {
                literal: s.to_string(),
                role: Role::Operand,
            });
        }
        parse_literal(s, Role::Operand)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(s: &str) -> String {
        s.parse::<Fraction>().unwrap().to_string()
    }

    #[test]
    fn test_plain_integers() {
        assert_eq!(parsed("42"), "42/1");
        assert_eq!(parsed("-42"), "-42/1");
        assert_eq!(parsed("+7"), "7/1");
        assert_eq!(parsed(" - 1_000 "), "-1000/1");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(parsed("3.14"), "314/100");
        assert_eq!(parsed("-0.5"), "-5/10");
        assert_eq!(parsed(".25"), "25/100");
        assert_eq!(parsed("5."), "5/1");
        assert_eq!(parsed("1_000.000_1"), "10000001/10000");
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parsed("1.5e2"), "1500/10");
        assert_eq!(parsed("1.5E-2"), "15/1000");
        assert_eq!(parsed("2e3"), "2000/1");
        assert_eq!(parsed("-4e+1"), "-40/1");
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(parsed("0xff"), "255/1");
        assert_eq!(parsed("0XFF_FF"), "65535/1");
        assert_eq!(parsed("-0o17"), "-15/1");
        assert_eq!(parsed("0b1010_1010"), "170/1");
    }

    #[test]
    fn test_fraction_notations() {
        assert_eq!(parsed("3/4"), "3/4");
        assert_eq!(parsed("3 : 4"), "3/4");
        assert_eq!(parsed("\\frac{1}{3}"), "1/3");
        assert_eq!(parsed("\\frac { -2 } { 0x10 }"), "-2/16");
        assert_eq!(parsed("1.5/2.5"), "150/250");
        assert_eq!(parsed("1/-2"), "-1/2");
    }

    #[test]
    fn test_rejects_malformed_input() {
        for bad in [
            "", "abc", "1.2.3", "0x", "0xg", "1__0", "_1", "1_", "e5", "1e", "0b102", "1/2/3",
            "\\frac{1}", "--1",
        ] {
            assert!(bad.parse::<Fraction>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_zero_denominator_in_fraction_notation() {
        assert_eq!(
            "1/0".parse::<Fraction>().unwrap_err(),
            FractionError::ZeroDivision
        );
    }

    #[test]
    fn test_parse_fraction() {
        let f = Fraction::parse_fraction("3/4");
        assert!(!f.is_nan());
        let f = f.into_fraction().unwrap();
        assert_eq!(f.numerator(), &BigInt::from(3));
        assert_eq!(f.denominator(), &BigInt::from(4));

        assert!(Fraction::parse_fraction("bogus").is_nan());
        assert!(Fraction::parse_fraction("5").is_nan());
        assert!(Fraction::parse_fraction("5/0").is_nan());
        assert!(Fraction::parse_fraction("x/2").is_nan());
    }

    #[test]
    fn test_huge_exponent_rejected() {
        assert!("1e100001".parse::<Fraction>().is_err());
    }
}

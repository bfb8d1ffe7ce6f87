// ============================================================================
// Logarithms
// Natural log by repeated square roots; base 10 and base 2 derived from it
// ============================================================================

use super::constants::Constant;
use super::context::{finish, MathContext};
use crate::numeric::{decimal_digits, Fraction, FractionError, FractionResult, Operand};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// 3322/2000 approximates log2(10) / 2: square roots needed per target digit.
const LEVELS_PER_DIGIT_NUMERATOR: usize = 3322;
const LEVELS_PER_DIGIT_DENOMINATOR: usize = 2000;

impl MathContext {
    /// Natural logarithm.
    ///
    /// Takes `k` square roots so that `r = x^(1/2^k)` sits next to one, then
    /// uses `ln x ≈ 2^(k-1) (r - 1/r)`, whose error shrinks with the square
    /// of `ln r`. The roots run with half the target again in extra digits,
    /// since the final scaling by `2^(k-1)` magnifies their error.
    ///
    /// `Constant::E` itself gives exactly one.
    ///
    /// # Errors
    /// Returns `NegativeDomain` for zero or negative input.
    pub fn ln(&self, value: impl Into<Operand>) -> FractionResult<Fraction> {
        let value = value.into();
        if value.constant() == Some(Constant::E) {
            return Ok(Fraction::one());
        }
        let x = positive("ln", value.resolve()?)?;
        if x == Fraction::one() {
            return Ok(Fraction::zero());
        }

        // |ln x| stays below the bit length of the larger part
        let bits = x.numerator.bits().max(x.denominator.bits());
        let bound_bits = (u64::BITS - bits.leading_zeros()) as usize;
        let levels = self.accuracy * LEVELS_PER_DIGIT_NUMERATOR / LEVELS_PER_DIGIT_DENOMINATOR
            + bound_bits
            + 2;
        let inner = self.widened(self.accuracy / 2 + decimal_digits(&BigInt::from(bits)) + 2);
        tracing::trace!(levels, working_digits = inner.working_digits(), "ln square roots");

        let mut root = x;
        for _ in 0..levels {
            root = inner.sqrt(root)?;
        }

        let inverse = root.reciprocal()?;
        let scale = Fraction::from_integer(BigInt::one() << (levels - 1));
        let mut result = root.sub_ref(&inverse).mul_ref(&scale);
        self.realign(&mut result);
        finish("ln", levels, result)
    }

    /// Base-10 logarithm; exact for integral powers of ten and their
    /// reciprocals.
    pub fn log(&self, value: impl Into<Operand>) -> FractionResult<Fraction> {
        let value = value.into();
        if value.constant() == Some(Constant::E) {
            return Ok(Constant::Log10E.value_for(self.working_digits()));
        }
        let x = positive("log", value.resolve()?)?;
        if let Some(exponent) = exact_power(&x, 10) {
            return Ok(Fraction::from_integer(exponent));
        }
        let ln10 = Constant::Ln10.value_for(self.working_digits());
        let mut result = self.ln(x)?.div_ref(&ln10)?;
        self.realign(&mut result);
        Ok(result)
    }

    /// Base-2 logarithm; exact for integral powers of two and their
    /// reciprocals.
    pub fn log2(&self, value: impl Into<Operand>) -> FractionResult<Fraction> {
        let value = value.into();
        if value.constant() == Some(Constant::E) {
            return Ok(Constant::Log2E.value_for(self.working_digits()));
        }
        let x = positive("log2", value.resolve()?)?;
        if let Some(exponent) = exact_power(&x, 2) {
            return Ok(Fraction::from_integer(exponent));
        }
        let log2_e = Constant::Log2E.value_for(self.working_digits());
        let mut result = self.ln(x)?.mul_ref(&log2_e);
        self.realign(&mut result);
        Ok(result)
    }
}

fn positive(operation: &'static str, x: Fraction) -> FractionResult<Fraction> {
    if x.is_positive() {
        Ok(x)
    } else {
        Err(FractionError::NegativeDomain {
            operation,
            value: x.to_string(),
        })
    }
}

/// `Some(k)` when `x` is exactly `base^k` for an integer `k`.
fn exact_power(x: &Fraction, base: u32) -> Option<i64> {
    let x = x.reduced();
    let (mut target, sign) = if x.denominator.is_one() {
        (x.numerator, 1)
    } else if x.numerator.is_one() {
        (x.denominator, -1)
    } else {
        return None;
    };

    let base = BigInt::from(base);
    let mut exponent = 0i64;
    while target > BigInt::one() {
        let (quotient, rest) = target.div_rem(&base);
        if !rest.is_zero() {
            return None;
        }
        target = quotient;
        exponent += 1;
    }
    Some(sign * exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::testing::CloseTo;

    fn ctx() -> MathContext {
        MathContext::fast()
    }

    #[test]
    fn test_ln_values() {
        let ctx = ctx();
        assert_eq!(ctx.ln(2).unwrap().as_decimal(25), "0.6931471805599453094172321");
        assert_eq!(ctx.ln(10).unwrap().as_decimal(25), "2.3025850929940456840179914");
        assert_eq!(ctx.ln("3/2").unwrap().as_decimal(25), "0.4054651081081643819780131");
        assert_eq!(ctx.ln(12345).unwrap().as_decimal(25), "9.4210064017792798779058775");
        assert_eq!(ctx.ln(1_000_000).unwrap().as_decimal(25), "13.8155105579642741041079487");
    }

    #[test]
    fn test_logarithms_of_large_values() {
        let ctx = ctx();
        assert_eq!(ctx.ln("2e60").unwrap().as_decimal(25), "138.8482527602026863504967194");
        assert_eq!(ctx.ln("2e300").unwrap().as_decimal(25), "691.4686750787736505148146685");
        assert_eq!(ctx.log("2e100").unwrap().as_decimal(25), "100.3010299956639811952137388");
        assert_eq!(ctx.log2("3e50").unwrap().as_decimal(25), "167.6813672450892735749697104");
        assert!(ctx.log("1e300").unwrap().eq(300));
    }

    #[test]
    fn test_ln_at_standard_accuracy() {
        let ln = MathContext::standard().ln("2e300").unwrap();
        assert_eq!(
            ln.as_decimal(150),
            "691.468675078773650514814668526767438848405946722992148064119050299765176525175438786405024853875908190132336693706445275756543159760600157556918881481269"
        );
    }

    #[test]
    fn test_ln_below_one() {
        assert_eq!(
            ctx().ln("1/3").unwrap().as_decimal(25),
            "-1.0986122886681096913952452"
        );
    }

    #[test]
    fn test_ln_special_cases() {
        let ctx = ctx();
        assert!(ctx.ln(1).unwrap().is_zero());
        assert!(ctx.ln(Constant::E).unwrap().eq(1));
        assert!(ctx.ln(Constant::E.value()).unwrap().close_to(1, 30));
    }

    #[test]
    fn test_ln_domain() {
        let ctx = ctx();
        assert_eq!(
            ctx.ln(0).unwrap_err(),
            FractionError::NegativeDomain {
                operation: "ln",
                value: "0/1".to_string(),
            }
        );
        assert!(matches!(
            ctx.ln(-2),
            Err(FractionError::NegativeDomain { operation: "ln", .. })
        ));
    }

    #[test]
    fn test_ln_inverts_exp() {
        let ctx = ctx();
        for x in ["1/7", "5", "42"] {
            let back = ctx.exp(ctx.ln(x).unwrap()).unwrap();
            assert!(back.close_to(x, 27), "x = {}", x);
        }
    }

    #[test]
    fn test_log10() {
        let ctx = ctx();
        assert!(ctx.log(1000).unwrap().eq(3));
        assert!(ctx.log("0.001").unwrap().eq(-3));
        assert!(ctx.log(1).unwrap().is_zero());
        assert_eq!(ctx.log(5).unwrap().as_decimal(25), "0.6989700043360188047862611");
        assert!(ctx.log(Constant::E).unwrap().close_to("0.4342944819032518276511289", 25));
        assert!(matches!(
            ctx.log(-10),
            Err(FractionError::NegativeDomain { operation: "log", .. })
        ));
    }

    #[test]
    fn test_log2() {
        let ctx = ctx();
        assert!(ctx.log2(1024).unwrap().eq(10));
        assert!(ctx.log2("1/8").unwrap().eq(-3));
        assert_eq!(ctx.log2(3).unwrap().as_decimal(25), "1.5849625007211561814537389");
    }

    #[test]
    fn test_exact_power() {
        let ten = |s: &str| exact_power(&s.parse::<Fraction>().unwrap(), 10);
        assert_eq!(ten("100"), Some(2));
        assert_eq!(ten("1/100"), Some(-2));
        assert_eq!(ten("200/2"), Some(2));
        assert_eq!(ten("1"), Some(0));
        assert_eq!(ten("20"), None);
        assert_eq!(ten("3/100"), None);
    }
}

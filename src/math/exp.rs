// ============================================================================
// Exponential
// Taylor series on a halved argument, squared back up
// ============================================================================

use super::context::{finish, MathContext};
use crate::numeric::{Fraction, FractionError, FractionResult, Operand};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// 4343/10000 approximates log10(e): decimal digits gained per unit of x.
const LOG10_E_NUMERATOR: u32 = 4343;
const LOG10_E_DENOMINATOR: u32 = 10_000;

impl MathContext {
    /// `e` raised to `power`.
    ///
    /// The argument is halved until it drops to one or below, the series runs
    /// on that, and the sum is squared back once per halving. Negative powers
    /// return the reciprocal of the positive case.
    ///
    /// ```
    /// use nfrac::math::MathContext;
    ///
    /// let e = MathContext::new(20).exp(1)?;
    /// assert_eq!(e.as_decimal(15), "2.718281828459045");
    /// # Ok::<(), nfrac::FractionError>(())
    /// ```
    pub fn exp(&self, power: impl Into<Operand>) -> FractionResult<Fraction> {
        let x = power.into().resolve()?;
        if x.is_zero() {
            return Ok(Fraction::one());
        }
        if x.is_negative() {
            let mut inverse = self.exp(x.negative())?.reciprocal()?;
            self.realign(&mut inverse);
            return Ok(inverse);
        }

        let one = Fraction::one();
        let half = Fraction::new(1, 2)?;
        let mut reduced = x.clone();
        let mut halvings = 0usize;
        while reduced > one {
            reduced = reduced.mul_ref(&half);
            halvings += 1;
        }

        // Each squaring doubles the error and the result carries digits in
        // front of the point, so the series runs with both added on.
        let magnitude = (x.whole() * LOG10_E_NUMERATOR / LOG10_E_DENOMINATOR)
            .to_usize()
            .ok_or(FractionError::OutOfRange {
                target: "exp argument",
            })?;
        let inner = self.widened(magnitude + halvings / 3 + 1);
        tracing::trace!(halvings, extra_digits = inner.accuracy - self.accuracy, "exp range reduction");

        let mut result = inner.exp_series(&reduced)?;
        for _ in 0..halvings {
            result = result.mul_ref(&result);
            inner.realign(&mut result);
        }
        self.realign(&mut result);
        Ok(result)
    }

    /// Σ x^k / k! for 0 ≤ x ≤ 1.
    fn exp_series(&self, x: &Fraction) -> FractionResult<Fraction> {
        let one = Fraction::one();
        let mut term = Fraction::one();
        let mut sum = Fraction::one();
        // Terms only shrink once k! outgrows x^k; until then a small term is
        // not a sign of convergence.
        let mut shrinking = 0usize;

        for k in 1..=self.max_iterations {
            term = term.mul_ref(x);
            term.denominator *= BigInt::from(k);
            self.realign(&mut term);

            if term < one {
                shrinking += 1;
            }
            if term.is_zero() || (shrinking > 0 && self.negligible(&term)) {
                return finish("exp", k, sum);
            }
            sum = sum.add_ref(&term);
            self.realign(&mut sum);
        }
        Err(self.exhausted("exp"))
    }
}

// ============================================================================
// Powers and Roots
// Exact integer powers and Newton iteration for roots
// ============================================================================

use super::context::{finish, MathContext};
use crate::numeric::{decimal_digits, Fraction, FractionError, FractionResult, Operand};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive};

impl MathContext {
    /// `base` raised to `exponent`.
    ///
    /// Integer exponents are exact; a negative exponent reciprocates the base
    /// first. A rational exponent `p/q` takes the `q`-th root by Newton
    /// iteration and raises it to `p`.
    ///
    /// # Errors
    /// - `ZeroDivision` for zero raised to a negative power
    /// - `NegativeDomain` for an even root of a negative base
    /// - `OutOfRange` when the exponent's parts do not fit in a `u32`
    pub fn pow(
        &self,
        base: impl Into<Operand>,
        exponent: impl Into<Operand>,
    ) -> FractionResult<Fraction> {
        let base = base.into().resolve()?;
        let exponent = exponent.into().resolve()?.reduced();
        if exponent.is_integer() {
            return integer_power(&base, &exponent.numerator);
        }

        let index = exponent
            .denominator
            .to_u32()
            .ok_or(FractionError::OutOfRange {
                target: "root index",
            })?;
        // Raising the root to p > 1 scales its error by about p * root^(p-1)
        let inner = match exponent.numerator.to_usize() {
            Some(power) if power > 1 => {
                let root_digits = decimal_digits(&base.whole()) / index as usize + 1;
                self.widened(root_digits * (power - 1) + decimal_digits(&exponent.numerator) + 1)
            }
            _ => *self,
        };
        let root = inner.nth_root(base, index)?;
        let mut result = integer_power(&root, &exponent.numerator)?;
        self.realign(&mut result);
        Ok(result)
    }

    /// Square root by Newton iteration, starting from a guess derived from
    /// the bit length of the integer part.
    ///
    /// ```
    /// use nfrac::math::MathContext;
    ///
    /// let root = MathContext::new(20).sqrt(2)?;
    /// assert_eq!(root.as_decimal(20), "1.41421356237309504880");
    /// # Ok::<(), nfrac::FractionError>(())
    /// ```
    pub fn sqrt(&self, value: impl Into<Operand>) -> FractionResult<Fraction> {
        let value = value.into().resolve()?;
        if value.is_negative() {
            return Err(FractionError::NegativeDomain {
                operation: "sqrt",
                value: value.to_string(),
            });
        }
        if value.is_zero() {
            return Ok(Fraction::zero());
        }
        let guess = initial_guess(&value, 2)?;
        self.sqrt_newton(&value, guess)
    }

    /// Square root starting from a caller-supplied positive guess.
    pub fn sqrt_with_guess(
        &self,
        value: impl Into<Operand>,
        guess: impl Into<Operand>,
    ) -> FractionResult<Fraction> {
        let value = value.into().resolve()?;
        if value.is_negative() {
            return Err(FractionError::NegativeDomain {
                operation: "sqrt",
                value: value.to_string(),
            });
        }
        if value.is_zero() {
            return Ok(Fraction::zero());
        }
        let guess = guess.into().resolve()?;
        if !guess.is_positive() {
            return Err(FractionError::InvalidArgumentType {
                value: guess.to_string(),
            });
        }
        self.sqrt_newton(&value, guess)
    }

    /// Principal `index`-th root.
    ///
    /// Odd roots of negative values are negative; even ones are undefined.
    pub fn nth_root(&self, value: impl Into<Operand>, index: u32) -> FractionResult<Fraction> {
        let value = value.into().resolve()?;
        if index == 0 {
            return Err(FractionError::OutOfRange {
                target: "root index",
            });
        }
        if index == 1 || value.is_zero() {
            return Ok(value);
        }
        if value.is_negative() {
            if index % 2 == 0 {
                return Err(FractionError::NegativeDomain {
                    operation: "even root",
                    value: value.to_string(),
                });
            }
            return Ok(self.nth_root(value.negative(), index)?.negative());
        }
        if index == 2 {
            return self.sqrt(value);
        }

        let guess = initial_guess(&value, index)?;
        let degree = Fraction::from_integer(index);
        let lower = Fraction::from_integer(index - 1);
        // x' = ((n - 1)x + a / x^(n - 1)) / n
        self.newton("nth_root", guess, |x| {
            let quotient = value.div_ref(&x.powi(index - 1))?;
            lower.mul_ref(x).add_ref(&quotient).div_ref(&degree)
        })
    }

    /// x' = (x² + a) / 2x
    pub(crate) fn sqrt_newton(&self, value: &Fraction, guess: Fraction) -> FractionResult<Fraction> {
        let two = Fraction::from_integer(2);
        self.newton("sqrt", guess, |x| {
            x.mul_ref(x).add_ref(value).div_ref(&x.mul_ref(&two))
        })
    }

    /// Shared Newton loop. Stops on an exact fixed point, or once the iterate
    /// carries more than `accuracy` digits and moved less than 10^-accuracy.
    fn newton<F>(&self, operation: &'static str, guess: Fraction, step: F) -> FractionResult<Fraction>
    where
        F: Fn(&Fraction) -> FractionResult<Fraction>,
    {
        let mut current = guess;
        for iteration in 1..=self.max_iterations {
            let mut next = step(&current)?;
            self.realign(&mut next);
            tracing::trace!(operation, iteration, accuracy = next.accuracy(), "newton step");

            if next == current
                || (next.accuracy() > self.accuracy && self.close_enough(&next, &current))
            {
                return finish(operation, iteration, next);
            }
            current = next;
        }
        Err(self.exhausted(operation))
    }
}

/// Exact power with a signed integer exponent.
fn integer_power(base: &Fraction, exponent: &BigInt) -> FractionResult<Fraction> {
    let magnitude = exponent
        .abs()
        .to_u32()
        .ok_or(FractionError::OutOfRange { target: "exponent" })?;
    if exponent.is_negative() {
        Ok(base.reciprocal()?.powi(magnitude))
    } else {
        Ok(base.powi(magnitude))
    }
}

/// Starting point for the `index`-th root of a positive value.
///
/// Large values use a power of two from the integer part's bit length; values
/// near one use a single Newton step from one; small values invert the guess
/// for their reciprocal. Every Newton step from a positive point lands at or
/// above the root, so the iteration then descends monotonically.
fn initial_guess(value: &Fraction, index: u32) -> FractionResult<Fraction> {
    let whole = value.whole().abs();
    if whole >= BigInt::from(2) {
        let shift = whole.bits() / u64::from(index);
        return Ok(Fraction::from_integer(BigInt::one() << shift));
    }

    let half = Fraction::new(1, 2)?;
    if value.abs() >= half {
        let lower = Fraction::from_integer(index - 1);
        return lower
            .add_ref(value)
            .div_ref(&Fraction::from_integer(index));
    }
    initial_guess(&value.reciprocal()?, index)?.reciprocal()
}

impl Fraction {
    /// Raise to a power using the process-wide [`MathContext`].
    ///
    /// ```
    /// use nfrac::Fraction;
    ///
    /// assert!(Fraction::from(2).pow(-1)?.eq("1/2"));
    /// assert!(Fraction::new(2, 3)?.pow(4)?.eq("16/81"));
    /// # Ok::<(), nfrac::FractionError>(())
    /// ```
    pub fn pow(&self, exponent: impl Into<Operand>) -> FractionResult<Fraction> {
        MathContext::global().pow(self, exponent)
    }

    /// Square root using the process-wide [`MathContext`].
    pub fn sqrt(&self) -> FractionResult<Fraction> {
        MathContext::global().sqrt(self)
    }
}

// ============================================================================
// Trigonometry
// Taylor series for sine and cosine, reduced modulo 2π
// ============================================================================

use super::constants::Constant;
use super::context::{finish, MathContext};
use crate::numeric::{Fraction, FractionResult, Operand};
use num_bigint::BigInt;

impl MathContext {
    /// Sine of an angle in radians.
    ///
    /// `Constant::Pi` itself gives exactly zero.
    pub fn sin(&self, angle: impl Into<Operand>) -> FractionResult<Fraction> {
        let angle = angle.into();
        if angle.constant() == Some(Constant::Pi) {
            return Ok(Fraction::zero());
        }
        let angle = angle.resolve()?;
        if angle.is_zero() {
            return Ok(Fraction::zero());
        }
        let x = self.reduce_angle(angle)?;
        self.alternating_series("sin", x.clone(), &x, 1)
    }

    /// Cosine of an angle in radians.
    ///
    /// `Constant::Pi` itself gives exactly minus one, the true value of
    /// cos(pi). Some older fraction libraries shortcut this case to `1`;
    /// callers porting results from them should expect the sign to differ.
    pub fn cos(&self, angle: impl Into<Operand>) -> FractionResult<Fraction> {
        let angle = angle.into();
        if angle.constant() == Some(Constant::Pi) {
            return Ok(Fraction::from_integer(-1));
        }
        let angle = angle.resolve()?;
        if angle.is_zero() {
            return Ok(Fraction::one());
        }
        let x = self.reduce_angle(angle)?;
        self.alternating_series("cos", Fraction::one(), &x, 0)
    }

    /// Tangent as `sin / cos`.
    ///
    /// # Errors
    /// Returns `ZeroDivision` if the cosine evaluates to exactly zero.
    pub fn tan(&self, angle: impl Into<Operand>) -> FractionResult<Fraction> {
        let angle = angle.into();
        if angle.constant() == Some(Constant::Pi) {
            return Ok(Fraction::zero());
        }
        let angle = angle.resolve()?;
        if angle.is_zero() {
            return Ok(Fraction::zero());
        }
        let sine = self.sin(angle.clone())?;
        let cosine = self.cos(angle)?;
        let mut tangent = sine.div_ref(&cosine)?;
        self.realign(&mut tangent);
        Ok(tangent)
    }

    /// Shift into [-π, π] by a whole number of turns.
    fn reduce_angle(&self, angle: Fraction) -> FractionResult<Fraction> {
        let pi = Constant::Pi.value_for(self.working_digits());
        if angle.abs() <= pi {
            return Ok(angle);
        }
        let turn = pi.mul_ref(&Fraction::from_integer(2));
        let turns = angle.div_ref(&turn)?.round();
        let mut reduced = angle.sub_ref(&turn.mul_ref(&Fraction::from_integer(turns.clone())));
        self.realign(&mut reduced);
        tracing::trace!(turns = %turns, "reduced angle");
        Ok(reduced)
    }

    /// Sum of `first + Σ term_k` where each term is the previous one times
    /// `-x² / ((p + 1)(p + 2))` and `p` starts at `power`.
    fn alternating_series(
        &self,
        operation: &'static str,
        first: Fraction,
        x: &Fraction,
        power: u64,
    ) -> FractionResult<Fraction> {
        let step = x.mul_ref(x).negative();
        let mut term = first;
        let mut sum = term.clone();
        let mut power = power;

        for iteration in 1..=self.max_iterations {
            term = term.mul_ref(&step);
            term.denominator *= BigInt::from(power + 1) * BigInt::from(power + 2);
            power += 2;
            self.realign(&mut term);

            if term.is_zero() || (sum.accuracy() > self.accuracy && self.negligible(&term)) {
                return finish(operation, iteration, sum);
            }
            sum = sum.add_ref(&term);
            self.realign(&mut sum);
        }
        Err(self.exhausted(operation))
    }
}

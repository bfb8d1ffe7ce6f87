// ============================================================================
// Fraction
// Exact rational number over arbitrary-precision integers
// ============================================================================

use super::errors::{FractionError, FractionResult, Role};
use super::operand::Operand;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Exact rational number stored as a numerator/denominator pair.
///
/// Reduction is opt-in: only [`Fraction::times`], [`Fraction::divide`] and
/// [`Fraction::reduce`] bring a value to lowest terms, so intermediate values
/// may carry common factors. Every constructor and arithmetic result keeps the
/// sign on the numerator; the raw setters are the only way to store a negative
/// denominator, which [`Fraction::fix_negative`] repairs.
///
/// # Example
/// ```
/// use nfrac::Fraction;
///
/// let sum = Fraction::new("1.5", 1)?.plus("2.25")?;
/// assert_eq!(sum.reduced().to_string(), "15/4");
/// # Ok::<(), nfrac::FractionError>(())
/// ```
#[derive(Clone)]
pub struct Fraction {
    pub(crate) numerator: BigInt,
    pub(crate) denominator: BigInt,
}

// ============================================================================
// Scale Helpers
// ============================================================================

/// Compute 10^n as a big integer.
pub(crate) fn pow10(n: usize) -> BigInt {
    num_traits::pow(BigInt::from(10u8), n)
}

/// Number of decimal digits in |n| (zero has one digit).
pub(crate) fn decimal_digits(n: &BigInt) -> usize {
    n.magnitude().to_str_radix(10).len()
}

impl Fraction {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction from any two numeric inputs.
    ///
    /// Each argument may be an integer, a float, a string in any supported
    /// notation, a `Fraction`, or a pair. Fraction-valued arguments are
    /// absorbed by cross-multiplication, so `new(a/b, c/d)` is `(a*d)/(b*c)`.
    /// An empty numerator string reads as 0 and an empty denominator as 1.
    ///
    /// # Errors
    /// - `ZeroDivision` if the denominator resolves to zero
    /// - `UnparsableInput` naming the literal and its role
    /// - `InvalidArgumentType` for non-finite floats
    pub fn new(
        numerator: impl Into<Operand>,
        denominator: impl Into<Operand>,
    ) -> FractionResult<Self> {
        let denominator = denominator.into().resolve_as(Role::Denominator)?;
        if denominator.is_zero() {
            return Err(FractionError::ZeroDivision);
        }
        let numerator = numerator.into().resolve_as(Role::Numerator)?;
        Ok(Self::raw(
            numerator.numerator * denominator.denominator,
            numerator.denominator * denominator.numerator,
        ))
    }

    /// Create from an integer value (denominator 1).
    #[inline]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    /// Create from an explicit numerator and denominator.
    ///
    /// # Errors
    /// Returns `ZeroDivision` if the denominator is zero.
    pub fn from_parts(numerator: BigInt, denominator: BigInt) -> FractionResult<Self> {
        if denominator.is_zero() {
            return Err(FractionError::ZeroDivision);
        }
        Ok(Self::raw(numerator, denominator))
    }

    /// Build without the zero check; callers guarantee a nonzero denominator.
    #[inline]
    pub(crate) fn raw(numerator: BigInt, denominator: BigInt) -> Self {
        let mut fraction = Self {
            numerator,
            denominator,
        };
        fraction.fix_negative();
        fraction
    }

    /// Zero (0/1)
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    /// One (1/1)
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Replace the numerator with an exact integer.
    ///
    /// # Errors
    /// Returns `IntegerExpected` if the input is not integral.
    pub fn set_numerator(&mut self, value: impl Into<Operand>) -> FractionResult<()> {
        self.numerator = value.into().to_integer()?;
        Ok(())
    }

    /// Replace the denominator with an exact nonzero integer.
    ///
    /// The sign is stored as given; call [`Fraction::fix_negative`] to move it.
    ///
    /// # Errors
    /// Returns `IntegerExpected` if the input is not integral and
    /// `ZeroDivision` if it is zero.
    pub fn set_denominator(&mut self, value: impl Into<Operand>) -> FractionResult<()> {
        let value = value.into().to_integer()?;
        if value.is_zero() {
            return Err(FractionError::ZeroDivision);
        }
        self.denominator = value;
        Ok(())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// True when the value is strictly below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.numerator.is_zero() && self.numerator.is_negative() != self.denominator.is_negative()
    }

    /// True when the value is strictly above zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.numerator.is_zero() && !self.is_negative()
    }

    /// Sign of the value: -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    /// True when the denominator divides the numerator.
    pub fn is_integer(&self) -> bool {
        self.remainder().is_zero()
    }

    /// Integer part, truncated toward zero.
    pub fn whole(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// Truncating remainder; the sign follows the numerator.
    pub fn remainder(&self) -> BigInt {
        &self.numerator % &self.denominator
    }

    // ========================================================================
    // Accuracy
    // ========================================================================

    /// Decimal digit count of the denominator minus one.
    ///
    /// A proxy for how many reliable decimal places the representation holds;
    /// the iterative math functions loop until this exceeds their target.
    pub fn accuracy(&self) -> usize {
        decimal_digits(&self.denominator) - 1
    }

    /// Rescale numerator and denominator by a power of ten to hit `digits`.
    ///
    /// Raising the accuracy multiplies both parts and keeps the value.
    /// Lowering it divides both parts with integer division, which truncates:
    /// this is how long iterations keep their integers bounded.
    pub fn set_accuracy(&mut self, digits: usize) -> &mut Self {
        let current = self.accuracy();
        if digits > current {
            let scale = pow10(digits - current);
            self.numerator *= &scale;
            self.denominator *= &scale;
        } else if digits < current {
            let scale = pow10(current - digits);
            self.numerator /= &scale;
            self.denominator /= &scale;
        }
        self
    }

    // ========================================================================
    // In-place Builders
    // ========================================================================

    /// Bring to lowest terms with a positive denominator.
    pub fn reduce(&mut self) -> &mut Self {
        self.fix_negative();
        let gcd = self.numerator.gcd(&self.denominator);
        if !gcd.is_zero() && !gcd.is_one() {
            self.numerator /= &gcd;
            self.denominator /= &gcd;
        }
        self
    }

    /// Move a negative sign from the denominator onto the numerator.
    pub fn fix_negative(&mut self) -> &mut Self {
        if self.denominator.is_negative() {
            self.denominator = -std::mem::take(&mut self.denominator);
            self.numerator = -std::mem::take(&mut self.numerator);
        }
        self
    }

    /// Swap numerator and denominator in place.
    ///
    /// # Errors
    /// Returns `ZeroDivision` if the numerator is zero.
    pub fn reciprocate(&mut self) -> FractionResult<&mut Self> {
        if self.numerator.is_zero() {
            return Err(FractionError::ZeroDivision);
        }
        std::mem::swap(&mut self.numerator, &mut self.denominator);
        Ok(self.fix_negative())
    }

    /// Multiply numerator and denominator by the same integer factor.
    ///
    /// # Errors
    /// Returns `IntegerExpected` for a non-integral factor and
    /// `ZeroDivision` for a zero factor.
    pub fn scale_to(&mut self, factor: impl Into<Operand>) -> FractionResult<&mut Self> {
        let factor = factor.into().to_integer()?;
        if factor.is_zero() {
            return Err(FractionError::ZeroDivision);
        }
        self.numerator *= &factor;
        self.denominator *= &factor;
        Ok(self.fix_negative())
    }

    /// A reduced copy, leaving `self` untouched.
    pub fn reduced(&self) -> Self {
        let mut copy = self.clone();
        copy.reduce();
        copy
    }

    // ========================================================================
    // Derived Values
    // ========================================================================

    /// The additive inverse.
    pub fn negative(&self) -> Self {
        Self {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    /// Returns `ZeroDivision` if the numerator is zero.
    pub fn reciprocal(&self) -> FractionResult<Self> {
        let mut copy = self.clone();
        copy.reciprocate()?;
        Ok(copy)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.abs(),
        }
    }

    /// Raise to a non-negative machine exponent, part by part.
    pub fn powi(&self, exponent: u32) -> Self {
        Self::raw(
            self.numerator.pow(exponent),
            self.denominator.pow(exponent),
        )
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Addition over the common denominator.
    ///
    /// # Errors
    /// Fails if the addend cannot be resolved to a number.
    pub fn plus(&self, addend: impl Into<Operand>) -> FractionResult<Self> {
        Ok(self.add_ref(&addend.into().resolve()?))
    }

    /// Subtraction, defined as addition of the negation.
    ///
    /// # Errors
    /// Fails if the subtrahend cannot be resolved to a number.
    pub fn minus(&self, subtrahend: impl Into<Operand>) -> FractionResult<Self> {
        Ok(self.sub_ref(&subtrahend.into().resolve()?))
    }

    /// Multiplication; the product is reduced.
    ///
    /// # Errors
    /// Fails if the multiplicand cannot be resolved to a number.
    pub fn times(&self, multiplicand: impl Into<Operand>) -> FractionResult<Self> {
        Ok(self.mul_ref(&multiplicand.into().resolve()?))
    }

    /// Division as multiplication by the reciprocal; the quotient is reduced.
    ///
    /// # Errors
    /// Returns `ZeroDivision` if the divisor is zero, or fails if it cannot
    /// be resolved to a number.
    pub fn divide(&self, divisor: impl Into<Operand>) -> FractionResult<Self> {
        self.div_ref(&divisor.into().resolve()?)
    }

    /// Sum without reduction: cross-multiply, then divide out the gcd of the
    /// denominators to keep the intermediate integers small.
    pub(crate) fn add_ref(&self, rhs: &Self) -> Self {
        let gcd = self.denominator.gcd(&rhs.denominator);
        let numerator =
            (&self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator) / &gcd;
        let denominator = &self.denominator * &rhs.denominator / &gcd;
        Self::raw(numerator, denominator)
    }

    pub(crate) fn sub_ref(&self, rhs: &Self) -> Self {
        let mut difference = self.add_ref(&rhs.negative());
        difference.fix_negative();
        difference
    }

    pub(crate) fn mul_ref(&self, rhs: &Self) -> Self {
        let mut product = Self::raw(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        );
        product.reduce();
        product
    }

    pub(crate) fn div_ref(&self, rhs: &Self) -> FractionResult<Self> {
        Ok(self.mul_ref(&rhs.reciprocal()?))
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Integer part, truncated toward zero.
    pub fn trunc(&self) -> BigInt {
        self.whole()
    }

    /// Largest integer not above the value.
    pub fn floor(&self) -> BigInt {
        let canonical = self.with_positive_denominator();
        canonical.numerator.div_floor(&canonical.denominator)
    }

    /// Smallest integer not below the value.
    pub fn ceil(&self) -> BigInt {
        let canonical = self.with_positive_denominator();
        -(-&canonical.numerator).div_floor(&canonical.denominator)
    }

    /// Nearest integer.
    ///
    /// With `r` the non-negative remainder above the floor, the floor wins
    /// only when `r < denominator - r`; exact halves round up.
    pub fn round(&self) -> BigInt {
        let canonical = self.with_positive_denominator();
        let (floor, rest) = canonical.numerator.div_mod_floor(&canonical.denominator);
        if rest < &canonical.denominator - &rest {
            floor
        } else {
            floor + 1
        }
    }

    fn with_positive_denominator(&self) -> std::borrow::Cow<'_, Self> {
        if self.denominator.is_negative() {
            let mut copy = self.clone();
            copy.fix_negative();
            std::borrow::Cow::Owned(copy)
        } else {
            std::borrow::Cow::Borrowed(self)
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Self::from_integer(value)
    }
}

// ============================================================================
// Tests
// ============================================================================

// ============================================================================
// Operator Overloads
// std::ops for Fraction operands
// ============================================================================

use super::fraction::Fraction;
use std::ops::{Add, Div, Mul, Neg, Sub};

// Infallible operators for ergonomics. They follow the method semantics:
// `+`/`-` keep the common denominator, `*`/`/` reduce. Division panics on a
// zero divisor; use `divide` where that must be an error.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait<&Fraction> for &Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: &Fraction) -> Fraction {
                self.$inner(rhs)
            }
        }

        impl $trait<Fraction> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: Fraction) -> Fraction {
                (&self).$inner(&rhs)
            }
        }

        impl $trait<&Fraction> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: &Fraction) -> Fraction {
                (&self).$inner(rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_ref);
impl_binary_op!(Sub, sub, sub_ref);
impl_binary_op!(Mul, mul, mul_ref);

impl Div<&Fraction> for &Fraction {
    type Output = Fraction;

    #[inline]
    fn div(self, rhs: &Fraction) -> Fraction {
        self.div_ref(rhs).expect("Fraction division by zero")
    }
}

impl Div<Fraction> for Fraction {
    type Output = Fraction;

    #[inline]
    fn div(self, rhs: Fraction) -> Fraction {
        &self / &rhs
    }
}

impl Div<&Fraction> for Fraction {
    type Output = Fraction;

    #[inline]
    fn div(self, rhs: &Fraction) -> Fraction {
        &self / rhs
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    #[inline]
    fn neg(mut self) -> Fraction {
        self.numerator = -self.numerator;
        self
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    #[inline]
    fn neg(self) -> Fraction {
        self.negative()
    }
}

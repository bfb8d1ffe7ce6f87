// ============================================================================
// Exact Fraction Library
// Arbitrary-precision rational arithmetic with an iterative math library
// ============================================================================

//! # nfrac
//!
//! Exact fractions over arbitrary-precision integers, plus a numeric function
//! library that computes irrational results (roots, trigonometry, exponentials,
//! logarithms) to a chosen number of decimal digits.
//!
//! ## Features
//!
//! - **Exact arithmetic**: every operation on [`Fraction`] is exact; nothing
//!   passes through floating point
//! - **Flexible inputs**: integers, floats, decimal or fraction strings, LaTeX
//!   `\frac{a}{b}`, pairs and named constants all convert to an [`Operand`]
//! - **Explicit precision**: a [`math::MathContext`] carries the target
//!   accuracy, guard digits and iteration cap; the free functions in [`math`]
//!   use a process-wide default
//! - **500-digit constants**: PI, E, SQRT2 and friends as fractions
//!
//! ## Example
//!
//! ```rust
//! use nfrac::prelude::*;
//!
//! let mut f = Fraction::new(6, 8)?;
//! f.reduce();
//! assert_eq!(f.to_string(), "3/4");
//!
//! let sum = Fraction::new("1.5", 1)?.plus("2.25")?.reduced();
//! assert_eq!(sum.to_string(), "15/4");
//!
//! let third = Fraction::from(1).divide(3)?;
//! assert_eq!(third.as_decimal(5), "0.33333");
//!
//! let ctx = MathContext::new(30);
//! assert_eq!(ctx.sqrt(2)?.as_decimal(10), "1.4142135623");
//! assert!(ctx.cos(Constant::Pi)?.eq(-1));
//! # Ok::<(), nfrac::FractionError>(())
//! ```

pub mod math;
pub mod numeric;

pub use numeric::{Fraction, FractionError, FractionResult, Number, Operand, Role, Style};

// Re-exports for convenience
pub mod prelude {
    pub use crate::math::{Constant, MathContext};
    pub use crate::numeric::{Fraction, FractionError, FractionResult, Number, Operand, Style};
}

#[cfg(test)]
mod proptests;

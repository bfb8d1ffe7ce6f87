// ============================================================================
// Integer Functions
// ============================================================================

use crate::numeric::{FractionError, FractionResult, Operand};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive};

/// Exact integer value of an operand.
///
/// `"4/2"` and `2.0` both yield `2`; `"1/2"` is `IntegerExpected`.
pub fn to_int(value: impl Into<Operand>) -> FractionResult<BigInt> {
    value.into().to_integer()
}

/// `n!` for a non-negative integer operand.
///
/// # Errors
/// - `IntegerExpected` for non-integral input
/// - `NegativeDomain` for negative input
/// - `OutOfRange` when `n` does not fit in a `u64`
pub fn factorial(value: impl Into<Operand>) -> FractionResult<BigInt> {
    let n = to_int(value)?;
    if n.is_negative() {
        return Err(FractionError::NegativeDomain {
            operation: "factorial",
            value: n.to_string(),
        });
    }
    let n = n.to_u64().ok_or(FractionError::OutOfRange {
        target: "factorial argument",
    })?;

    let mut product = BigInt::one();
    for k in 2..=n {
        product *= k;
    }
    tracing::trace!(n, digits = product.bits(), "factorial");
    Ok(product)
}

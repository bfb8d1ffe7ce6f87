// ============================================================================
// Rounding and Selection
// ============================================================================

use crate::numeric::{Fraction, FractionError, FractionResult, Operand};
use num_bigint::BigInt;

/// Nearest integer; halves round up (toward positive infinity).
pub fn round(value: impl Into<Operand>) -> FractionResult<BigInt> {
    Ok(value.into().resolve()?.round())
}

/// Largest integer not above the value.
pub fn floor(value: impl Into<Operand>) -> FractionResult<BigInt> {
    Ok(value.into().resolve()?.floor())
}

/// Smallest integer not below the value.
pub fn ceil(value: impl Into<Operand>) -> FractionResult<BigInt> {
    Ok(value.into().resolve()?.ceil())
}

/// Integer part, truncated toward zero.
pub fn trunc(value: impl Into<Operand>) -> FractionResult<BigInt> {
    Ok(value.into().resolve()?.trunc())
}

pub fn abs(value: impl Into<Operand>) -> FractionResult<Fraction> {
    Ok(value.into().resolve()?.abs())
}

/// Smallest of the values. The first one wins a tie.
///
/// # Errors
/// `InvalidArgumentType` for an empty input; otherwise the first operand that
/// fails to resolve.
pub fn min<I>(values: I) -> FractionResult<Fraction>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    select(values, |candidate, best| candidate < best)
}

/// Largest of the values. The first one wins a tie.
pub fn max<I>(values: I) -> FractionResult<Fraction>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    select(values, |candidate, best| candidate > best)
}

fn select<I, F>(values: I, better: F) -> FractionResult<Fraction>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
    F: Fn(&Fraction, &Fraction) -> bool,
{
    let mut best: Option<Fraction> = None;
    for value in values {
        let candidate = value.into().resolve()?;
        best = match best {
            Some(current) if !better(&candidate, &current) => Some(current),
            _ => Some(candidate),
        };
    }
    best.ok_or_else(|| FractionError::InvalidArgumentType {
        value: "empty sequence".to_string(),
    })
}

// ============================================================================
// Numeric Errors
// Error types for fraction construction, arithmetic and the math library
// ============================================================================

use std::fmt;

/// The position an input occupied when it failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Numerator,
    Denominator,
    Operand,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Numerator => write!(f, "numerator"),
            Role::Denominator => write!(f, "denominator"),
            Role::Operand => write!(f, "operand"),
        }
    }
}

/// Errors that can occur while building or computing with fractions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// A denominator, divisor or reciprocal resolved to zero
    ZeroDivision,
    /// An exact integer was required but the value has a fractional part
    IntegerExpected { value: String },
    /// A string did not match any recognized numeric grammar
    UnparsableInput { literal: String, role: Role },
    /// The argument is not something the operation accepts at all
    InvalidArgumentType { value: String },
    /// The operation is undefined for non-positive (or negative) input
    NegativeDomain {
        operation: &'static str,
        value: String,
    },
    /// The value does not fit the requested target representation
    OutOfRange { target: &'static str },
    /// An iterative algorithm hit its iteration cap
    NoConvergence {
        operation: &'static str,
        iterations: usize,
    },
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::ZeroDivision => write!(f, "division by zero"),
            FractionError::IntegerExpected { value } => {
                write!(f, "integer expected: `{}` is not an integer", value)
            }
            FractionError::UnparsableInput { literal, role } => {
                write!(f, "cannot use \"{}\" as a {}", literal, role)
            }
            FractionError::InvalidArgumentType { value } => {
                write!(f, "invalid argument: cannot accept `{}` as an input", value)
            }
            FractionError::NegativeDomain { operation, value } => {
                write!(f, "{} is not defined for {}", operation, value)
            }
            FractionError::OutOfRange { target } => {
                write!(f, "value out of range for {}", target)
            }
            FractionError::NoConvergence {
                operation,
                iterations,
            } => write!(
                f,
                "{} did not converge within {} iterations",
                operation, iterations
            ),
        }
    }
}

impl std::error::Error for FractionError {}

/// Result type alias for fraction operations
pub type FractionResult<T> = Result<T, FractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FractionError::ZeroDivision.to_string(), "division by zero");
        assert_eq!(
            FractionError::UnparsableInput {
                literal: "abc".to_string(),
                role: Role::Denominator,
            }
            .to_string(),
            "cannot use \"abc\" as a denominator"
        );
        assert_eq!(
            FractionError::NegativeDomain {
                operation: "factorial",
                value: "-1".to_string(),
            }
            .to_string(),
            "factorial is not defined for -1"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(FractionError::ZeroDivision, FractionError::ZeroDivision);
        assert_ne!(
            FractionError::ZeroDivision,
            FractionError::OutOfRange { target: "u32" }
        );
    }
}

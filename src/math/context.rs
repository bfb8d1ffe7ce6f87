// ============================================================================
// Math Context
// Accuracy and iteration settings shared by the numeric function library
// ============================================================================

use crate::numeric::{pow10, Fraction, FractionError, FractionResult};
use num_traits::Signed;
use parking_lot::{const_rwlock, RwLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal digits targeted by default
pub const DEFAULT_ACCURACY: usize = 200;

/// Extra working digits carried past the target
pub const DEFAULT_GUARD_DIGITS: usize = 10;

/// Iteration cap for every series and Newton loop
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Upper bound accepted by `validate`
const MAX_ACCURACY: usize = 100_000;

static GLOBAL: RwLock<MathContext> = const_rwlock(MathContext::DEFAULT);

// ============================================================================
// Math Context
// ============================================================================

/// Settings read by the iterative math functions.
///
/// A process-wide default sits behind a lock; each algorithm copies the
/// context once at entry, so changing the default never moves the stopping
/// point of a loop already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MathContext {
    /// Decimal digits the result must carry
    pub accuracy: usize,

    /// Extra digits kept during iteration; `accuracy + guard_digits` is the
    /// point where intermediate values get realigned (truncated)
    pub guard_digits: usize,

    /// Loops abort with `NoConvergence` after this many steps
    pub max_iterations: usize,
}

impl MathContext {
    pub const DEFAULT: Self = Self {
        accuracy: DEFAULT_ACCURACY,
        guard_digits: DEFAULT_GUARD_DIGITS,
        max_iterations: DEFAULT_MAX_ITERATIONS,
    };

    /// Create a context targeting `accuracy` digits with default limits
    pub const fn new(accuracy: usize) -> Self {
        Self {
            accuracy,
            guard_digits: DEFAULT_GUARD_DIGITS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Builder method: Set guard digits
    pub fn with_guard_digits(mut self, digits: usize) -> Self {
        self.guard_digits = digits;
        self
    }

    /// Builder method: Set iteration cap
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.accuracy == 0 {
            return Err("Accuracy must be at least one digit".to_string());
        }
        if self.accuracy > MAX_ACCURACY {
            return Err(format!("Accuracy cannot exceed {} digits", MAX_ACCURACY));
        }
        if self.max_iterations == 0 {
            return Err("Iteration cap must be positive".to_string());
        }
        Ok(())
    }

    /// Digits carried while iterating
    #[inline]
    pub fn working_digits(&self) -> usize {
        self.accuracy + self.guard_digits
    }

    // ========================================================================
    // Process-wide Default
    // ========================================================================

    /// Snapshot of the process-wide context
    pub fn global() -> Self {
        *GLOBAL.read()
    }

    /// Replace the process-wide context
    pub fn set_global(context: MathContext) -> Result<(), String> {
        context.validate()?;
        *GLOBAL.write() = context;
        Ok(())
    }

    /// Change only the process-wide accuracy
    pub fn set_global_accuracy(digits: usize) -> Result<(), String> {
        let mut global = GLOBAL.write();
        let candidate = MathContext {
            accuracy: digits,
            ..*global
        };
        candidate.validate()?;
        *global = candidate;
        Ok(())
    }

    // ========================================================================
    // Iteration Helpers
    // ========================================================================

    /// Truncate a value to a fixed point with `working_digits` places after
    /// the point once its denominator has grown past that.
    ///
    /// The truncation error is absolute (below 10^-working), so large
    /// magnitudes keep all of their integer digits.
    pub(crate) fn realign(&self, value: &mut Fraction) {
        let working = self.working_digits();
        if value.accuracy() > working {
            let scale = pow10(working);
            let numerator = &value.numerator * &scale / &value.denominator;
            *value = Fraction::raw(numerator, scale);
        }
    }

    /// True when `|a - b| < 10^-accuracy`.
    pub(crate) fn close_enough(&self, a: &Fraction, b: &Fraction) -> bool {
        let difference = a.sub_ref(b);
        difference.numerator.abs() * pow10(self.accuracy) < difference.denominator.abs()
    }

    /// True when `|term| < 10^-working_digits`.
    pub(crate) fn negligible(&self, term: &Fraction) -> bool {
        term.numerator.abs() * pow10(self.working_digits()) < term.denominator.abs()
    }

    /// Error for a loop that ran out of iterations.
    pub(crate) fn exhausted(&self, operation: &'static str) -> FractionError {
        tracing::warn!(
            operation,
            iterations = self.max_iterations,
            accuracy = self.accuracy,
            "iteration cap reached before convergence"
        );
        FractionError::NoConvergence {
            operation,
            iterations: self.max_iterations,
        }
    }

    /// Context used for sub-computations that need extra digits.
    pub(crate) fn widened(&self, extra: usize) -> Self {
        Self {
            accuracy: self.accuracy + extra,
            ..*self
        }
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MathContext {
    /// Thirty digits: quick checks and tests
    pub const fn fast() -> Self {
        Self::new(30)
    }

    /// The default two hundred digits
    pub const fn standard() -> Self {
        Self::DEFAULT
    }

    /// Five hundred digits, matching the precomputed constants
    pub const fn precise() -> Self {
        Self::new(500)
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of a computation together with the number of iterations it took.
pub(crate) fn finish(
    operation: &'static str,
    iterations: usize,
    value: Fraction,
) -> FractionResult<Fraction> {
    tracing::debug!(
        operation,
        iterations,
        accuracy = value.accuracy(),
        "converged"
    );
    Ok(value)
}

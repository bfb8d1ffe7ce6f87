// ============================================================================
// Random Fractions
// ============================================================================

use crate::numeric::{Fraction, FractionResult, Operand};
use num_bigint::BigInt;
use rand::Rng;

/// Uniform-ish fraction in [0, 1) from the thread-local generator.
pub fn random() -> Fraction {
    random_with(&mut rand::thread_rng())
}

/// Random fraction from the given generator: a denominator drawn from
/// `1..=u32::MAX` and a numerator below it.
///
/// Pass a seeded `StdRng` for reproducible sequences.
pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Fraction {
    let denominator: u64 = rng.gen_range(1..=u64::from(u32::MAX));
    let numerator: u64 = rng.gen_range(0..denominator);
    Fraction::raw(BigInt::from(numerator), BigInt::from(denominator))
}

/// Random fraction built from a host float in [0, 1), through its decimal
/// text.
pub fn random_from_float<R: Rng + ?Sized>(rng: &mut R) -> FractionResult<Fraction> {
    let value: f64 = rng.gen();
    Operand::from(value).resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_is_in_unit_interval() {
        for _ in 0..100 {
            let value = random();
            assert!(value.gteq(0));
            assert!(value.lt(1));
            assert!(value.denominator() > &BigInt::from(0));
        }
    }

    #[test]
    fn test_seeded_sequences_repeat() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(random_with(&mut a).to_string(), random_with(&mut b).to_string());
        }
    }

    #[test]
    fn test_random_from_float() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let value = random_from_float(&mut rng).unwrap();
            assert!(value.gteq(0) && value.lt(1));
        }
    }
}

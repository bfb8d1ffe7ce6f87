// ============================================================================
// Comparison
// Lenient value comparisons and the std ordering traits
// ============================================================================

use super::fraction::Fraction;
use super::operand::Operand;
use num_bigint::BigInt;
use num_traits::Signed;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

// Comparisons are total: an operand that cannot be resolved compares false
// instead of raising, unlike the arithmetic methods.
impl Fraction {
    /// Value equality after reduction.
    pub fn eq(&self, other: impl Into<Operand>) -> bool {
        match other.into().resolve() {
            Ok(other) => {
                let (a, b) = (self.reduced(), other.reduced());
                a.numerator == b.numerator && a.denominator == b.denominator
            }
            Err(_) => false,
        }
    }

    /// Strict equality: only another `Fraction` can match.
    pub fn seq(&self, other: impl Into<Operand>) -> bool {
        match other.into() {
            Operand::Fraction(other) => Fraction::eq(self, other),
            _ => false,
        }
    }

    /// Strictly less than.
    pub fn lt(&self, other: impl Into<Operand>) -> bool {
        match other.into().resolve() {
            Ok(other) if other.is_zero() => self.is_negative(),
            Ok(other) => self.sub_ref(&other).is_negative(),
            Err(_) => false,
        }
    }

    /// Less than or equal.
    pub fn lteq(&self, other: impl Into<Operand>) -> bool {
        match other.into().resolve() {
            Ok(other) if other.is_zero() => self.is_negative() || self.is_zero(),
            Ok(other) => !self.sub_ref(&other).is_positive(),
            Err(_) => false,
        }
    }

    /// Strictly greater than.
    pub fn gt(&self, other: impl Into<Operand>) -> bool {
        match other.into().resolve() {
            Ok(other) => other.sub_ref(self).is_negative(),
            Err(_) => false,
        }
    }

    /// Greater than or equal.
    pub fn gteq(&self, other: impl Into<Operand>) -> bool {
        match other.into().resolve() {
            Ok(other) => !other.sub_ref(self).is_positive(),
            Err(_) => false,
        }
    }

    /// Cross products with the denominators' signs folded in.
    fn cross_products(&self, other: &Self) -> (BigInt, BigInt) {
        let mut left = &self.numerator * &other.denominator;
        let mut right = &other.numerator * &self.denominator;
        if self.denominator.is_negative() != other.denominator.is_negative() {
            left = -left;
            right = -right;
        }
        (left, right)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (left, right) = self.cross_products(other);
        left == right
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (left, right) = self.cross_products(other);
        left.cmp(&right)
    }
}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduced();
        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_eq_accepts_any_numeric_input() {
        let half = frac(2, 4);
        assert!(half.eq("1/2"));
        assert!(half.eq(0.5));
        assert!(half.eq("0.50"));
        assert!(half.eq((1, 2)));
        assert!(!half.eq("0.51"));
    }

    #[test]
    fn test_eq_is_false_on_unparsable_input() {
        assert!(!frac(1, 2).eq("half"));
        assert!(!frac(1, 2).eq(f64::NAN));
    }

    #[test]
    fn test_seq_only_matches_fractions() {
        let half = frac(1, 2);
        assert!(half.seq(frac(2, 4)));
        assert!(!half.seq("1/2"));
        assert!(!half.seq(0.5));
    }

    #[test]
    fn test_ordering_methods() {
        let a = frac(1, 3);
        assert!(a.lt("1/2"));
        assert!(!a.lt("1/3"));
        assert!(a.lteq("1/3"));
        assert!(a.gt(0.25));
        assert!(a.gteq("2/6"));
        assert!(!a.gt("junk"));
        assert!(!a.lteq("junk"));
    }

    #[test]
    fn test_zero_fast_path() {
        assert!(frac(-1, 2).lt(0));
        assert!(!frac(0, 2).lt(0));
        assert!(frac(0, 2).lteq(0));
        assert!(!frac(1, 2).lteq(0));
    }

    #[test]
    fn test_std_traits_compare_by_value() {
        assert_eq!(frac(1, 2), frac(3, 6));
        assert!(frac(1, 3) < frac(1, 2));
        assert!(frac(-1, 2) < frac(0, 1));

        let mut raw = frac(1, 2);
        raw.set_denominator(-2).unwrap();
        // -1/2 stored with the sign on the denominator
        assert_eq!(raw, frac(-1, 2));
        assert!(raw < frac(0, 1));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let set: HashSet<Fraction> = [frac(1, 2), frac(2, 4), frac(-3, -6)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}

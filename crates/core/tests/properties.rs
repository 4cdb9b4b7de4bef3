//! Algebraic properties of interval arithmetic, checked over random integer
//! intervals small enough that no operation overflows.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use proptest::prelude::*;
use ranged_core::{Interval, IntervalError};

fn bound() -> impl Strategy<Value = i64> {
    -1_000i64..=1_000
}

/// Intervals with `min <= max`.
fn ordered() -> impl Strategy<Value = Interval<i64>> {
    (bound(), bound()).prop_map(|(a, b)| Interval::new(a.min(b), a.max(b)))
}

/// Intervals with arbitrary, possibly inverted, bounds.
fn any_bounds() -> impl Strategy<Value = Interval<i64>> {
    (bound(), bound()).prop_map(|(a, b)| Interval::new(a, b))
}

fn hash_of(iv: &Interval<i64>) -> u64 {
    let mut hasher = DefaultHasher::new();
    iv.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn addition_commutes(a in any_bounds(), b in any_bounds()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn multiplication_commutes(a in any_bounds(), b in any_bounds()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn zero_is_additive_identity(a in any_bounds()) {
        prop_assert_eq!(a + Interval::zero(), a);
    }

    #[test]
    fn one_is_multiplicative_identity(a in ordered()) {
        prop_assert_eq!(a * Interval::one(), a);
    }

    #[test]
    fn double_negation_is_identity(a in any_bounds()) {
        prop_assert_eq!(-(-a), a);
    }

    #[test]
    fn interval_contains_its_bounds(a in ordered()) {
        prop_assert!(a.contains(a.min()));
        prop_assert!(a.contains(a.max()));
    }

    #[test]
    fn product_encloses_every_pointwise_product(
        a in ordered(),
        b in ordered(),
        s in 0.0f64..=1.0,
        t in 0.0f64..=1.0,
    ) {
        let pick = |iv: &Interval<i64>, frac: f64| {
            let offset = (iv.size() as f64 * frac).floor() as i64;
            *iv.min() + offset
        };
        let x = pick(&a, s);
        let y = pick(&b, t);
        prop_assert!((a * b).contains(&(x * y)));
        prop_assert!((a + b).contains(&(x + y)));
        prop_assert!((a - b).contains(&(x - y)));
    }

    #[test]
    fn equal_intervals_hash_equally(a in any_bounds()) {
        let (min, max) = a.into_bounds();
        let copy = Interval::new(min, max);
        prop_assert_eq!(a, copy);
        prop_assert_eq!(hash_of(&a), hash_of(&copy));
    }

    #[test]
    fn combine_encloses_both_operands(a in ordered(), b in ordered()) {
        match Interval::combine(&a, &b) {
            Ok(merged) => {
                prop_assert!(!a.is_disjoint(&b));
                prop_assert_eq!(*merged.min(), *a.min().min(b.min()));
                prop_assert_eq!(*merged.max(), *a.max().max(b.max()));
            }
            Err(err) => {
                prop_assert!(a.is_disjoint(&b));
                prop_assert_eq!(err, IntervalError::Disjoint);
            }
        }
    }

    #[test]
    fn display_round_trips(a in any_bounds()) {
        prop_assert_eq!(a.to_string().parse::<Interval<i64>>(), Ok(a));
    }

    #[test]
    fn compare_to_is_equal_only_for_equal_intervals(a in any_bounds(), b in any_bounds()) {
        if let Ok(ordering) = a.compare_to(&b) {
            prop_assert_eq!(ordering.is_eq(), a == b);
        }
    }
}

#[test]
fn disjoint_pair_cannot_be_combined() {
    let a = Interval::new(0, 5);
    let b = Interval::new(10, 15);
    assert!(a.is_disjoint(&b));
    assert_eq!(Interval::combine(&a, &b), Err(IntervalError::Disjoint));
}

#[test]
fn overlapping_pair_combines() {
    let a = Interval::new(0, 5);
    let b = Interval::new(3, 8);
    assert_eq!(Interval::combine(&a, &b), Ok(Interval::new(0, 8)));
}

#[test]
fn multiply_selects_extreme_cross_products() {
    let a = Interval::new(-2, 3);
    let b = Interval::new(-4, 1);
    assert_eq!(a * b, Interval::new(-12, 8));
}

#[test]
fn less_or_equal_holds_through_shared_upper_bound() {
    let a = Interval::new(4, 9);
    let b = Interval::new(1, 9);
    assert!(!a.is_less(&b));
    assert!(a.is_less_or_equal(&b));
}

#[test]
fn nested_intervals_are_incomparable() {
    let outer = Interval::new(0, 10);
    let inner = Interval::new(2, 5);
    assert_eq!(outer.compare_to(&inner), Err(IntervalError::Incomparable));
}

#[test]
fn formatting_matches_scalar_for_points() {
    assert_eq!(Interval::point(5).to_string(), 5.to_string());
    assert_eq!(Interval::new(2, 3).to_string(), "[2,3]");
}

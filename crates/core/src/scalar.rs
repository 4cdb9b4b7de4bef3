use std::{
    fmt::Display,
    ops::{Div, Sub},
    str::FromStr,
};

use num_traits::{One, Zero};

/// The capabilities an interval bound type must provide.
///
/// A scalar supplies the four arithmetic operations, equality and ordering,
/// the additive and multiplicative identities, and a textual representation
/// in both directions.
/// Addition comes from [`Zero`] and multiplication from [`One`].
///
/// The trait is implemented automatically for every type meeting these bounds,
/// which includes all primitive integer and float types.
///
/// Ordering uses [`PartialOrd`], so floats qualify.
/// Comparisons involving `NaN` are simply false, and the interval predicates
/// built on them inherit that behavior.
pub trait Scalar:
    Clone + PartialOrd + Zero + One + Sub<Output = Self> + Div<Output = Self> + FromStr + Display
{
    /// Returns the scalar `2`, built as `1 + 1`.
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Parses a scalar literal, discarding the scalar's own error type.
    ///
    /// Returns `None` if `text` is not a valid literal for this scalar.
    fn parse_literal(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }
}

impl<T> Scalar for T where
    T: Clone
        + PartialOrd
        + Zero
        + One
        + Sub<Output = T>
        + Div<Output = T>
        + FromStr
        + Display
{
}

/// Returns the smallest of `first` and `rest`.
///
/// Ties keep the earliest value.
pub(crate) fn least<T: PartialOrd, const N: usize>(first: T, rest: [T; N]) -> T {
    rest.into_iter()
        .fold(first, |acc, value| if value < acc { value } else { acc })
}

/// Returns the largest of `first` and `rest`.
///
/// Ties keep the earliest value.
pub(crate) fn greatest<T: PartialOrd, const N: usize>(first: T, rest: [T; N]) -> T {
    rest.into_iter()
        .fold(first, |acc, value| if value > acc { value } else { acc })
}

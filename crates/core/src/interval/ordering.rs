use std::cmp::Ordering;

use tracing::warn;

use crate::scalar::Scalar;

use super::{DisplayBounds, Interval, IntervalError, IntervalResult};

/// Structural comparison predicates.
///
/// These relations are not a total order, and they are not consistent with
/// each other either: `[0, 1]` is both "less" and "greater" than `[2, 3]`.
/// That is why `Interval` does not implement [`PartialOrd`].
impl<T: Scalar> Interval<T> {
    /// Returns `true` if `self` starts no later than `other` and ends strictly
    /// earlier.
    ///
    /// Holds when `self.min <= other.min && self.max < other.max`.
    pub fn is_less(&self, other: &Self) -> bool {
        self.min <= other.min && self.max < other.max
    }

    /// Holds when `other.max >= self.max && other.min > self.min`.
    ///
    /// This is not the negation of [`Interval::is_less`], nor its mirror
    /// image with operands swapped.
    pub fn is_greater(&self, other: &Self) -> bool {
        other.max >= self.max && other.min > self.min
    }

    /// Holds when [`Interval::is_less`] holds or the upper bounds are equal.
    pub fn is_less_or_equal(&self, other: &Self) -> bool {
        self.is_less(other) || self.max == other.max
    }

    /// Holds when [`Interval::is_greater`] holds or the lower bounds are equal.
    pub fn is_greater_or_equal(&self, other: &Self) -> bool {
        self.is_greater(other) || self.min == other.min
    }

    /// Classifies `self` against `other` by trying each predicate in turn.
    ///
    /// Equal intervals compare [`Ordering::Equal`].
    /// Otherwise the first of [`is_greater`], [`is_less`],
    /// [`is_greater_or_equal`], and [`is_less_or_equal`] that holds decides
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Incomparable`] if no predicate holds, as for
    /// `[0, 10]` against `[2, 5]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use ranged_core::{Interval, IntervalError};
    ///
    /// let a = Interval::new(0, 5);
    /// assert_eq!(a.compare_to(&Interval::new(0, 5)), Ok(Ordering::Equal));
    /// assert_eq!(a.compare_to(&Interval::new(1, 8)), Ok(Ordering::Greater));
    /// assert_eq!(
    ///     Interval::new(0, 10).compare_to(&Interval::new(2, 5)),
    ///     Err(IntervalError::Incomparable),
    /// );
    /// ```
    ///
    /// [`is_greater`]: Interval::is_greater
    /// [`is_less`]: Interval::is_less
    /// [`is_greater_or_equal`]: Interval::is_greater_or_equal
    /// [`is_less_or_equal`]: Interval::is_less_or_equal
    pub fn compare_to(&self, other: &Self) -> IntervalResult<Ordering> {
        if self == other {
            Ok(Ordering::Equal)
        } else if self.is_greater(other) {
            Ok(Ordering::Greater)
        } else if self.is_less(other) {
            Ok(Ordering::Less)
        } else if self.is_greater_or_equal(other) {
            Ok(Ordering::Greater)
        } else if self.is_less_or_equal(other) {
            Ok(Ordering::Less)
        } else {
            // Reachable whenever one interval strictly nests inside the other
            // with no shared bound. Possibly a gap in the predicate set.
            warn!(
                left = %DisplayBounds(self),
                right = %DisplayBounds(other),
                "no ordering predicate classifies the intervals"
            );
            Err(IntervalError::Incomparable)
        }
    }
}

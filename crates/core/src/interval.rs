//! The closed interval type and its construction, membership, and merge rules.
//!
//! An [`Interval<T>`] is a pair of bounds `[min, max]` over a [`Scalar`].
//! Bounds are stored verbatim: nothing forces `min <= max`, so inverted
//! intervals can be built and flow through every operation.
//!
//! The remaining behavior is split across submodules:
//!
//! - arithmetic: `+`, `-`, `*`, `/`, negation, sums and products
//! - ordering: the named comparison predicates and [`Interval::compare_to`]
//! - format: [`Display`](std::fmt::Display) and [`FromStr`](std::str::FromStr)

mod arithmetic;
mod error;
mod format;
mod ordering;

use tracing::trace;

use crate::scalar::{Scalar, greatest, least};

pub use error::{IntervalError, IntervalResult};

/// A closed range `[min, max]` of possible values.
///
/// Arithmetic on intervals yields an interval enclosing every result that
/// could come from picking one value out of each operand.
/// Bounds are treated as independent, so an expression that mentions the same
/// value twice may produce a wider result than strictly necessary.
///
/// The default interval is the point zero `[0, 0]`.
/// Use [`Interval::unbounded`] for the interval spanning all values.
///
/// # Examples
///
/// ```
/// use ranged_core::Interval;
///
/// let a = Interval::new(-2, 3);
/// let b = Interval::new(-4, 1);
///
/// assert_eq!(a + b, Interval::new(-6, 4));
/// assert_eq!(a * b, Interval::new(-12, 8));
/// assert!(a.contains(&0));
/// assert_eq!(Interval::point(5).to_string(), "5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    min: T,
    max: T,
}

impl<T: Scalar> Interval<T> {
    /// Creates an interval from its bounds.
    ///
    /// The bounds are stored as given; `min > max` is accepted.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Creates the single-point interval `[value, value]`.
    pub fn point(value: T) -> Self {
        Self::new(value.clone(), value)
    }

    /// Returns the additive identity `[0, 0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self::point(T::zero())
    }

    /// Returns the multiplicative identity `[1, 1]`.
    #[must_use]
    pub fn one() -> Self {
        Self::point(T::one())
    }

    /// Returns the interval `[-inf, +inf]`.
    ///
    /// The bounds are parsed from the scalar's textual infinity symbols.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidScalar`] if the scalar cannot represent
    /// infinity, which is the case for all integer types.
    pub fn unbounded() -> IntervalResult<Self> {
        let min = parse_scalar::<T>("-inf")?;
        let max = parse_scalar::<T>("inf")?;
        Ok(Self::new(min, max))
    }

    /// Returns the lower bound.
    pub fn min(&self) -> &T {
        &self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> &T {
        &self.max
    }

    /// Consumes the interval and returns its `(min, max)` bounds.
    pub fn into_bounds(self) -> (T, T) {
        (self.min, self.max)
    }

    /// Returns `max - min`.
    #[must_use]
    pub fn size(&self) -> T {
        self.max.clone() - self.min.clone()
    }

    /// Returns `(min + max) / 2`.
    ///
    /// Integer scalars truncate as their own division does.
    #[must_use]
    pub fn arithmetic_average(&self) -> T {
        (self.min.clone() + self.max.clone()) / T::two()
    }

    /// Returns `true` if `min <= value <= max`.
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }

    /// Returns `true` if `self` contains neither bound of `other`.
    ///
    /// The check only looks at `other`'s endpoints, so it is not symmetric:
    /// a wide `other` that swallows `self` still counts as disjoint from it.
    ///
    /// ```
    /// use ranged_core::Interval;
    ///
    /// let narrow = Interval::new(2, 5);
    /// let wide = Interval::new(0, 10);
    ///
    /// assert!(narrow.is_disjoint(&wide));
    /// assert!(!wide.is_disjoint(&narrow));
    /// ```
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !(self.contains(&other.min) || self.contains(&other.max))
    }

    /// Returns the smallest interval enclosing both `left` and `right`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Disjoint`] if `left.is_disjoint(right)`.
    pub fn combine(left: &Self, right: &Self) -> IntervalResult<Self> {
        if left.is_disjoint(right) {
            trace!(
                left = %DisplayBounds(left),
                right = %DisplayBounds(right),
                "refusing to combine disjoint intervals"
            );
            return Err(IntervalError::Disjoint);
        }

        let (first, second) = if right.is_less(left) {
            (right, left)
        } else {
            (left, right)
        };

        Ok(Self::new(
            least(first.min.clone(), [second.min.clone()]),
            greatest(first.max.clone(), [second.max.clone()]),
        ))
    }
}

impl<T: Scalar> Default for Interval<T> {
    /// Returns the point interval `[0, 0]`.
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> From<T> for Interval<T> {
    fn from(value: T) -> Self {
        Self::point(value)
    }
}

/// Parses one scalar bound, keeping the offending text on failure.
fn parse_scalar<T: Scalar>(text: &str) -> IntervalResult<T> {
    T::parse_literal(text).ok_or_else(|| IntervalError::InvalidScalar {
        text: text.trim().to_owned(),
    })
}

/// Renders raw bounds for log fields, even for point intervals.
struct DisplayBounds<'a, T>(&'a Interval<T>);

impl<T: Scalar> std::fmt::Display for DisplayBounds<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.0.min, self.0.max)
    }
}

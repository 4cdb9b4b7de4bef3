use thiserror::Error;

/// Errors that can occur when combining, comparing, or parsing intervals.
///
/// Numeric failures inside the scalar type (division by zero, overflow) are
/// not represented here; they surface exactly as the scalar reports them.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntervalError {
    /// The operands of [`Interval::combine`] do not meet.
    ///
    /// [`Interval::combine`]: crate::Interval::combine
    #[error("intervals must overlap or touch to be combined")]
    Disjoint,

    /// None of the ordering predicates classified the pair.
    ///
    /// Raised by [`Interval::compare_to`]; signals an inconsistency in the
    /// ordering predicates rather than bad input.
    ///
    /// [`Interval::compare_to`]: crate::Interval::compare_to
    #[error("intervals are incomparable: no ordering predicate holds")]
    Incomparable,

    /// A scalar literal could not be parsed.
    #[error("invalid scalar literal: {text:?}")]
    InvalidScalar { text: String },

    /// Text is neither a bare scalar nor a bracketed `[min,max]` pair.
    #[error("malformed interval: {text:?}")]
    Malformed { text: String },
}

/// A result type alias to use with [`IntervalError`].
pub type IntervalResult<T, E = IntervalError> = Result<T, E>;

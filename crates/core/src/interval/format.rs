use std::{
    fmt::{self, Display, Formatter, LowerExp, UpperExp},
    str::FromStr,
};

use crate::scalar::Scalar;

use super::{Interval, IntervalError, parse_scalar};

impl<T: Scalar> Interval<T> {
    /// Writes a point interval as its scalar and anything else as `[min,max]`.
    ///
    /// `write_bound` receives the caller's formatter so width, precision,
    /// and sign flags apply to each bound.
    fn write_with(
        &self,
        f: &mut Formatter<'_>,
        write_bound: fn(&T, &mut Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        if self.min == self.max {
            return write_bound(&self.min, f);
        }
        f.write_str("[")?;
        write_bound(&self.min, f)?;
        f.write_str(",")?;
        write_bound(&self.max, f)?;
        f.write_str("]")
    }
}

/// Formats a point interval as its scalar and anything else as `[min,max]`.
///
/// ```
/// use ranged_core::Interval;
///
/// assert_eq!(Interval::point(5).to_string(), "5");
/// assert_eq!(Interval::new(2, 3).to_string(), "[2,3]");
/// assert_eq!(format!("{:.2}", Interval::new(0.5, 1.0)), "[0.50,1.00]");
/// ```
impl<T: Scalar> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_with(f, Display::fmt)
    }
}

impl<T: Scalar + LowerExp> LowerExp for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_with(f, LowerExp::fmt)
    }
}

impl<T: Scalar + UpperExp> UpperExp for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_with(f, UpperExp::fmt)
    }
}

/// Parses the text produced by [`Display`]: a bare scalar or `[min,max]`.
///
/// Whitespace around the text, the brackets, and each bound is ignored.
///
/// ```
/// use ranged_core::Interval;
///
/// assert_eq!("7".parse::<Interval<i32>>(), Ok(Interval::point(7)));
/// assert_eq!("[ -1, 4 ]".parse::<Interval<i32>>(), Ok(Interval::new(-1, 4)));
/// ```
impl<T: Scalar> FromStr for Interval<T> {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        let Some(inner) = text.strip_prefix('[') else {
            return parse_scalar(text).map(Self::point);
        };

        let malformed = || IntervalError::Malformed {
            text: text.to_owned(),
        };
        let inner = inner.strip_suffix(']').ok_or_else(malformed)?;
        let (min, max) = inner.split_once(',').ok_or_else(malformed)?;
        if max.contains(',') {
            return Err(malformed());
        }

        Ok(Self::new(parse_scalar(min)?, parse_scalar(max)?))
    }
}

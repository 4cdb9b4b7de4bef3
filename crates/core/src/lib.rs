//! Closed-interval arithmetic over generic scalars.
//!
//! This crate provides [`Interval<T>`], a value that stands for every number
//! in a closed range `[min, max]` rather than a single point.
//! Arithmetic, comparison, membership, and merge operations carry those
//! bounds through a computation, which makes intervals a building block for
//! error bounds and numeric bracketing.
//!
//! - [`Interval`] — the interval value type
//! - [`Scalar`] — the capabilities a bound type must provide
//! - [`IntervalError`] — failures from combining, comparing, or parsing
//!
//! # Example
//!
//! ```
//! use ranged_core::Interval;
//!
//! let length = Interval::new(9.5, 10.5);
//! let width = Interval::new(4.0, 4.5);
//! let area = length * width;
//!
//! assert_eq!(area, Interval::new(38.0, 47.25));
//! assert_eq!(area.to_string(), "[38,47.25]");
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for [`Interval`].

mod interval;
mod scalar;

pub use interval::{Interval, IntervalError, IntervalResult};
pub use scalar::Scalar;

use std::{
    iter::{Product, Sum},
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_traits::{One, Zero};

use crate::scalar::{Scalar, greatest, least};

use super::Interval;

/// Adds lower bounds and upper bounds pairwise.
impl<T: Scalar> Add for &Interval<T> {
    type Output = Interval<T>;

    fn add(self, rhs: Self) -> Interval<T> {
        Interval::new(
            self.min.clone() + rhs.min.clone(),
            self.max.clone() + rhs.max.clone(),
        )
    }
}

/// Subtracts with the bounds of `rhs` crossed: `[a.min - b.max, a.max - b.min]`.
impl<T: Scalar> Sub for &Interval<T> {
    type Output = Interval<T>;

    fn sub(self, rhs: Self) -> Interval<T> {
        Interval::new(
            self.min.clone() - rhs.max.clone(),
            self.max.clone() - rhs.min.clone(),
        )
    }
}

/// Multiplies by taking the extremes of all four cross products.
///
/// The signs of the bounds are not known in advance, so no fixed pairing of
/// bounds gives the result.
impl<T: Scalar> Mul for &Interval<T> {
    type Output = Interval<T>;

    fn mul(self, rhs: Self) -> Interval<T> {
        let products = [
            self.min.clone() * rhs.min.clone(),
            self.min.clone() * rhs.max.clone(),
            self.max.clone() * rhs.min.clone(),
            self.max.clone() * rhs.max.clone(),
        ];
        let [first, rest @ ..] = products;

        Interval::new(
            least(first.clone(), rest.clone()),
            greatest(first, rest),
        )
    }
}

/// Divides with the bounds of `rhs` crossed: `[a.min / b.max, a.max / b.min]`.
///
/// A divisor spanning zero is not detected.
/// The scalar's own division decides the outcome, so floats may yield
/// infinities or `NaN` and integers panic on a zero bound.
impl<T: Scalar> Div for &Interval<T> {
    type Output = Interval<T>;

    fn div(self, rhs: Self) -> Interval<T> {
        Interval::new(
            self.min.clone() / rhs.max.clone(),
            self.max.clone() / rhs.min.clone(),
        )
    }
}

/// Negates by subtracting from [`Interval::zero`].
impl<T: Scalar> Neg for &Interval<T> {
    type Output = Interval<T>;

    fn neg(self) -> Interval<T> {
        &Interval::<T>::zero() - self
    }
}

impl<T: Scalar> Neg for Interval<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

/// Implements an owned binary operator in terms of its by-reference form.
macro_rules! forward_owned_binop {
    ($($trait:ident::$method:ident),+ $(,)?) => {$(
        impl<T: Scalar> $trait for Interval<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $trait<&Interval<T>> for Interval<T> {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self {
                (&self).$method(rhs)
            }
        }
    )+};
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul, Div::div);

impl<T: Scalar> Zero for Interval<T> {
    fn zero() -> Self {
        Self::point(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.min.is_zero() && self.max.is_zero()
    }
}

impl<T: Scalar> One for Interval<T> {
    fn one() -> Self {
        Self::point(T::one())
    }
}

/// Sums intervals starting from `[0, 0]`.
impl<T: Scalar> Sum for Interval<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::point(T::zero()), |a, b| a + b)
    }
}

impl<'a, T: Scalar> Sum<&'a Interval<T>> for Interval<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::point(T::zero()), |a, b| a + b)
    }
}

/// Multiplies intervals starting from `[1, 1]`.
impl<T: Scalar> Product for Interval<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::point(T::one()), |a, b| a * b)
    }
}

//! Approximate equality.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their parts are.
///
/// For more information on the subtleties of approximate floating-point number comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type representing the tolerance for absolute and relative comparisons.
    ///
    /// This is almost always either [`f32`] or [`f64`], depending on which one is the underlying
    /// primitive type being compared.
    type Tolerance: DefaultTolerances + Copy;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to
    /// `abs_tolerance`, the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to the largest of
    /// the two values times `rel_tolerance`, the values are considered to be equal.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;
}

/// Trait implemented for the `Tolerance` value of [`ApproxEq`] implementations.
///
/// This supplies the default tolerances used by [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne].
pub trait DefaultTolerances {
    /// Default tolerance for *absolute comparisons* via [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for *relative comparisons* via [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
}

/// Assertion guard returned by the [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne] macros.
///
/// The assertion is checked when this value is dropped, at the end of the statement. Before that
/// happens, [`Asserter::abs`] and [`Asserter::rel`] can be called to pick the comparisons to
/// perform and the tolerances to use; if both are configured, the values count as equal when
/// *either* comparison considers them equal.
///
/// If neither method is called, a default comparison is performed, using
/// [`DefaultTolerances::DEFAULT_ABS_TOLERANCE`] and [`DefaultTolerances::DEFAULT_REL_TOLERANCE`].
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    negated: bool,
    location: &'static Location<'static>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn eq(left: &'a T, right: &'a T) -> Self {
        Self::new(left, right, false)
    }

    #[doc(hidden)]
    #[track_caller]
    pub fn ne(left: &'a T, right: &'a T) -> Self {
        Self::new(left, right, true)
    }

    #[track_caller]
    fn new(left: &'a T, right: &'a T, negated: bool) -> Self {
        Self {
            left,
            right,
            negated,
            location: Location::caller(),
            abs: None,
            rel: None,
        }
    }

    /// Perform an *absolute comparison* of the values with the given tolerance.
    ///
    /// This type of comparison is typically a good choice when comparing values that are
    /// relatively close to zero and potentially have opposing signs.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Perform a *relative comparison* of the values with the given tolerance.
    ///
    /// This type of comparison is a good default for numbers that aren't very close to zero (two
    /// numbers close to zero but with opposing signs only compare equal with a relative tolerance
    /// of at least 2.0).
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // NB: `#[track_caller]` does not work on destructors, so the assertion location is captured
    // in `new` and printed manually.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self
            .abs
            .map_or(false, |tol| self.left.abs_diff_eq(self.right, tol))
            || self
                .rel
                .map_or(false, |tol| self.left.rel_diff_eq(self.right, tol));
        if equal == self.negated {
            let op = if self.negated { "!=" } else { "==" };
            panic!(
                "assertion `left {op} right` failed at {}\n  left: {:?}\n right: {:?}",
                self.location, self.left, self.right,
            );
        }
    }
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// This macro functions identically to [`assert_eq!`], except in that it uses the [`ApproxEq`]
/// trait to perform an approximate comparison, and returns an [`Asserter`] that can be used to
/// configure the type of comparison, as well as the tolerance values to use.
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// Default approximate comparison:
///
/// ```
/// # use affine2d::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// ```
///
/// Perform absolute and relative comparisons with custom tolerance values:
///
/// ```
/// # use affine2d::*;
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::eq(&$lhs, &$rhs)
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// This macro functions identically to [`assert_ne!`], except in that it uses the [`ApproxEq`]
/// trait to perform an approximate comparison, and returns an [`Asserter`] that can be used to
/// configure the type of comparison, as well as the tolerance values to use.
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use affine2d::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::ne(&$lhs, &$rhs)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    fn tolerances() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, 1.001).abs(0.01);
        assert_approx_ne!(1.0, 1.001).abs(0.0001);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON);
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).abs(0.0);
    }

    #[test]
    fn nan_and_inf() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, 0.0).rel(1.0);

        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY).abs(0.0);
        assert_approx_ne!(f32::INFINITY, f32::MAX).abs(10000.0);
    }
}

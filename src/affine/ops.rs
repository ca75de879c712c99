use std::ops::{Index, IndexMut, Mul};

use crate::{approx::ApproxEq, traits::Number, AffineMatrix};

impl<T> Index<usize> for AffineMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for AffineMatrix<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U> PartialEq<AffineMatrix<U>> for AffineMatrix<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &AffineMatrix<U>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T: Eq> Eq for AffineMatrix<T> {}

impl<T: ApproxEq> ApproxEq for AffineMatrix<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }
}

/// Composes the transforms left to right: `a * b` applies `a` first, then `b`.
impl<T: Number> Mul for AffineMatrix<T> {
    type Output = AffineMatrix<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

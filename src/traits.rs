use std::ops;

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    /// Computes sine and cosine of the angle `self` (in radians) in a single evaluation.
    fn sin_cos(self) -> (Self, Self);
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point scalars usable as [`AffineMatrix`] coefficients.
///
/// This is the full set of scalar math an affine matrix needs: arithmetic via [`Number`],
/// trigonometry for the rotation and skew constructors, a square root for
/// [`average_scale`], and an ordering so inversion can detect near-singular matrices.
///
/// [`AffineMatrix`]: crate::AffineMatrix
/// [`average_scale`]: crate::AffineMatrix::average_scale
pub trait Scalar: Number + Trig + Sqrt + PartialOrd {
    /// Determinant magnitude below which a matrix is treated as non-invertible.
    const DET_TOLERANCE: Self;
}

impl Trig for f32 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn tan(self) -> Self {
        self.tan()
    }

    fn sin_cos(self) -> (Self, Self) {
        self.sin_cos()
    }
}

impl Trig for f64 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn tan(self) -> Self {
        self.tan()
    }

    fn sin_cos(self) -> (Self, Self) {
        self.sin_cos()
    }
}

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

impl Zero for f32 {
    const ZERO: Self = 0.0;
}
impl Zero for f64 {
    const ZERO: Self = 0.0;
}

impl One for f32 {
    const ONE: Self = 1.0;
}
impl One for f64 {
    const ONE: Self = 1.0;
}

impl Scalar for f32 {
    const DET_TOLERANCE: Self = 1e-6;
}
impl Scalar for f64 {
    const DET_TOLERANCE: Self = 1e-6;
}

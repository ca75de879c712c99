use std::fmt;

use crate::{Number, One, Scalar, Zero};

mod ops;

/// A 2×3 affine transformation matrix with [`f32`] coefficients.
pub type AffineMatrixf = AffineMatrix<f32>;

/// A 2×3 matrix describing a 2D affine transformation.
///
/// The matrix stores 6 coefficients `[a, b, c, d, e, f]`, laid out as
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// ```
///
/// and maps a point `(x, y)` to `(x·a + y·c + e, x·b + y·d + f)`.
///
/// # Construction
///
/// - [`AffineMatrix::IDENTITY`] is the transform that leaves every point unchanged.
/// - [`AffineMatrix::translation`], [`AffineMatrix::scaling`], [`AffineMatrix::rotation`],
///   [`AffineMatrix::skew_x`] and [`AffineMatrix::skew_y`] create the elementary transforms.
/// - [`AffineMatrix::from_array`] creates a matrix from raw coefficients.
/// - Composing two existing matrices with [`AffineMatrix::multiply`] (or the [`Mul`] operator)
///   yields a new matrix.
///
/// All constructors are total: every input produces a well-defined matrix. Skew angles near ±90°
/// yield huge or infinite coefficients per IEEE 754 semantics; they are not special-cased.
///
/// # Composition order
///
/// `a.multiply(b)` (equivalently `a * b`) is the transform "apply `a` first, then `b`", so a
/// pipeline reads left to right:
///
/// ```
/// # use affine2d::*;
/// # use std::f32::consts::FRAC_PI_2;
/// let m = AffineMatrixf::translation(10.0, 20.0)
///     .multiply(AffineMatrixf::rotation(FRAC_PI_2))
///     .multiply(AffineMatrixf::scaling(1.5, 2.5));
/// let (x, y) = m.transform_point(10.0, 10.0);
/// assert_eq!((x.round(), y.round()), (-45.0, 50.0));
/// ```
///
/// # Values, not state
///
/// [`AffineMatrix`] is a plain `Copy` value; every operation returns a new matrix and nothing is
/// mutated in place. [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented when the
/// coefficient type allows it, so matrices (and the [`to_mat3x4`] export) can be handed to a GPU
/// as raw bytes.
///
/// [`Mul`]: std::ops::Mul
/// [`to_mat3x4`]: AffineMatrix::to_mat3x4
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct AffineMatrix<T>([T; 6]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for AffineMatrix<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for AffineMatrix<T> {}

impl<T> AffineMatrix<T> {
    /// Creates a matrix from its raw coefficients `[a, b, c, d, e, f]`.
    #[inline]
    pub const fn from_array(coefficients: [T; 6]) -> Self {
        Self(coefficients)
    }

    /// Returns the raw coefficients `[a, b, c, d, e, f]`.
    #[inline]
    pub fn into_array(self) -> [T; 6] {
        self.0
    }

    /// Returns a reference to the raw coefficients `[a, b, c, d, e, f]`.
    #[inline]
    pub fn as_array(&self) -> &[T; 6] {
        &self.0
    }
}

impl<T: Zero + One> AffineMatrix<T> {
    /// The identity transform.
    ///
    /// Transforming any point with this matrix returns the point unchanged, and multiplying any
    /// matrix by it (on either side) returns that matrix.
    pub const IDENTITY: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ONE, T::ZERO, T::ZERO]);
}

impl<T: Number> AffineMatrix<T> {
    /// Creates a transform that moves points by `(tx, ty)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use affine2d::*;
    /// let translate = AffineMatrixf::translation(10.0, 20.0);
    /// assert_eq!(translate.transform_point(5.0, 5.0), (15.0, 25.0));
    /// ```
    pub fn translation(tx: T, ty: T) -> Self {
        Self([T::ONE, T::ZERO, T::ZERO, T::ONE, tx, ty])
    }

    /// Creates a transform that scales points by `sx` along the X axis and `sy` along the Y axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use affine2d::*;
    /// let scale = AffineMatrixf::scaling(1.5, 2.5);
    /// assert_eq!(scale.transform_point(10.0, 10.0), (15.0, 25.0));
    /// ```
    pub fn scaling(sx: T, sy: T) -> Self {
        Self([sx, T::ZERO, T::ZERO, sy, T::ZERO, T::ZERO])
    }

    /// Composes two transforms: the result applies `self` first, then `other`.
    ///
    /// Also available through the [`Mul`][std::ops::Mul] operator.
    pub fn multiply(self, other: Self) -> Self {
        let [a0, a1, a2, a3, a4, a5] = self.0;
        let [b0, b1, b2, b3, b4, b5] = other.0;
        Self([
            a0 * b0 + a1 * b2,
            a0 * b1 + a1 * b3,
            a2 * b0 + a3 * b2,
            a2 * b1 + a3 * b3,
            a4 * b0 + a5 * b2 + b4,
            a4 * b1 + a5 * b3 + b5,
        ])
    }

    /// Composes two transforms the other way around: the result applies `other` first, then
    /// `self`.
    ///
    /// `a.pre_multiply(b)` is identical to `b.multiply(a)`.
    pub fn pre_multiply(self, other: Self) -> Self {
        other.multiply(self)
    }

    /// Applies this transform to the point `(x, y)`, returning the transformed point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use affine2d::*;
    /// let identity = AffineMatrixf::IDENTITY;
    /// assert_eq!(identity.transform_point(10.0, 20.0), (10.0, 20.0));
    /// ```
    pub fn transform_point(&self, x: T, y: T) -> (T, T) {
        let [a, b, c, d, e, f] = self.0;
        (x * a + y * c + e, x * b + y * d + f)
    }

    /// Returns the determinant of the linear (2×2) part of the matrix.
    #[inline]
    pub fn determinant(&self) -> T {
        let [a, b, c, d, _, _] = self.0;
        a * d - c * b
    }

    /// Pads the matrix out to a 3×4 layout for consumption by a rendering pipeline.
    ///
    /// The returned coefficients are
    ///
    /// ```text
    /// [ a, b, 0, 0,
    ///   c, d, 0, 0,
    ///   e, f, 1, 0 ]
    /// ```
    ///
    /// which is the layout GPU pipelines expect when each matrix row is padded to a 4-element
    /// vector. The exact placement of the zero and one padding is part of the downstream
    /// contract and must not change.
    #[rustfmt::skip]
    pub fn to_mat3x4(&self) -> [T; 12] {
        let [a, b, c, d, e, f] = self.0;
        [
            a, b, T::ZERO, T::ZERO,
            c, d, T::ZERO, T::ZERO,
            e, f, T::ONE,  T::ZERO,
        ]
    }
}

impl<T: Scalar> AffineMatrix<T> {
    /// Creates a transform that rotates points counter-clockwise by `radians` (with Y pointing
    /// down, as is conventional for screen coordinates).
    ///
    /// Sine and cosine are computed in a single evaluation via [`Trig::sin_cos`][crate::Trig].
    ///
    /// # Examples
    ///
    /// ```
    /// # use affine2d::*;
    /// # use std::f32::consts::FRAC_PI_2;
    /// let rotate = AffineMatrixf::rotation(FRAC_PI_2);
    /// let (x, y) = rotate.transform_point(10.0, 10.0);
    /// assert!((x - -10.0).abs() < 0.01);
    /// assert!((y - 10.0).abs() < 0.01);
    /// ```
    pub fn rotation(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self([cos, sin, -sin, cos, T::ZERO, T::ZERO])
    }

    /// Creates a transform that skews points along the X axis by `radians`.
    pub fn skew_x(radians: T) -> Self {
        Self([T::ONE, T::ZERO, radians.tan(), T::ONE, T::ZERO, T::ZERO])
    }

    /// Creates a transform that skews points along the Y axis by `radians`.
    pub fn skew_y(radians: T) -> Self {
        Self([T::ONE, radians.tan(), T::ZERO, T::ONE, T::ZERO, T::ZERO])
    }

    /// Computes the inverse transform, or [`None`] if the matrix is near-singular.
    ///
    /// A matrix counts as near-singular when the magnitude of its [`determinant`] is below
    /// [`Scalar::DET_TOLERANCE`]. For the identity-fallback variant, see [`invert`].
    ///
    /// [`determinant`]: AffineMatrix::determinant
    /// [`invert`]: AffineMatrix::invert
    pub fn try_invert(&self) -> Option<Self> {
        let [a, b, c, d, e, f] = self.0;
        let det = self.determinant();
        if det > -T::DET_TOLERANCE && det < T::DET_TOLERANCE {
            return None;
        }

        let invdet = T::ONE / det;
        Some(Self([
            d * invdet,
            -b * invdet,
            -c * invdet,
            a * invdet,
            (c * f - d * e) * invdet,
            (b * e - a * f) * invdet,
        ]))
    }

    /// Computes the inverse transform, falling back to [`AffineMatrix::IDENTITY`] if the matrix
    /// is near-singular.
    ///
    /// The fallback is silent: the return value alone cannot distinguish a true inverse from the
    /// identity substitute. Callers that need to tell the two apart should use [`try_invert`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use affine2d::*;
    /// // A degenerate transform that collapses the X axis.
    /// let flat = AffineMatrixf::scaling(0.0, 1.0);
    /// assert!(flat.try_invert().is_none());
    /// assert_eq!(flat.invert(), AffineMatrixf::IDENTITY);
    /// ```
    ///
    /// [`try_invert`]: AffineMatrix::try_invert
    pub fn invert(&self) -> Self {
        self.try_invert().unwrap_or(Self::IDENTITY)
    }

    /// Returns the mean of the lengths of the two transformed basis vectors.
    ///
    /// This approximates the transform's uniform scale factor and is useful for decisions like
    /// stroke widths or level of detail, where an exact per-axis scale is not needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use affine2d::*;
    /// assert_eq!(AffineMatrixf::IDENTITY.average_scale(), 1.0);
    /// assert_eq!(AffineMatrixf::scaling(2.0, 2.0).average_scale(), 2.0);
    /// ```
    pub fn average_scale(&self) -> T {
        let [a, b, c, d, _, _] = self.0;
        let sx = (a * a + c * c).sqrt();
        let sy = (b * b + d * d).sqrt();
        (sx + sy) / (T::ONE + T::ONE)
    }
}

impl<T: fmt::Debug> fmt::Debug for AffineMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, ff] = &self.0;

        // Natural writing order (row-wise) for debug output.
        f.debug_list()
            .entry(&[a, c, e])
            .entry(&[b, d, ff])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn identity() {
        assert_eq!(
            AffineMatrixf::IDENTITY.into_array(),
            [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]
        );
        assert_eq!(AffineMatrixf::IDENTITY.transform_point(10.0, 20.0), (10.0, 20.0));
    }

    #[test]
    fn identity_is_two_sided() {
        let m = AffineMatrixf::translation(10.0, 20.0)
            .multiply(AffineMatrixf::rotation(0.7))
            .multiply(AffineMatrixf::scaling(3.0, -2.0));

        assert_approx_eq!(m.multiply(AffineMatrixf::IDENTITY), m);
        assert_approx_eq!(AffineMatrixf::IDENTITY.multiply(m), m);
    }

    #[test]
    fn translate() {
        let translate = AffineMatrixf::translation(40.0, 60.0);
        assert_eq!(translate.transform_point(10.0, 20.0), (50.0, 80.0));
    }

    #[test]
    fn scale() {
        let scale = AffineMatrixf::scaling(2.0, 3.0);
        assert_eq!(scale.transform_point(10.0, 20.0), (20.0, 60.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let rotate = AffineMatrixf::rotation(FRAC_PI_2);
        assert_approx_eq!(rotate.transform_point(10.0, 20.0), (-20.0, 10.0)).abs(0.01);
    }

    #[test]
    fn skew() {
        let skew_x = AffineMatrixf::skew_x(FRAC_PI_4);
        assert_approx_eq!(skew_x.transform_point(10.0, 20.0), (30.0, 20.0)).abs(0.01);

        let skew_y = AffineMatrixf::skew_y(FRAC_PI_4);
        assert_approx_eq!(skew_y.transform_point(10.0, 20.0), (10.0, 30.0)).abs(0.01);
    }

    #[test]
    fn multiply_applies_receiver_first() {
        let m = AffineMatrixf::translation(10.0, 20.0).multiply(AffineMatrixf::rotation(FRAC_PI_2));
        assert_approx_eq!(m.transform_point(10.0, 20.0), (-40.0, 20.0)).abs(0.01);
    }

    #[test]
    fn multiply_chain() {
        let m = AffineMatrixf::translation(10.0, 20.0)
            * AffineMatrixf::rotation(FRAC_PI_2)
            * AffineMatrixf::scaling(1.5, 2.5);
        let (x, y) = m.transform_point(10.0, 10.0);
        assert_eq!((x.round(), y.round()), (-45.0, 50.0));
    }

    #[test]
    fn pre_multiply() {
        let a = AffineMatrixf::translation(10.0, 20.0);
        let b = AffineMatrixf::rotation(0.3);
        assert_eq!(a.pre_multiply(b), b.multiply(a));
    }

    #[test]
    fn invert_round_trip() {
        let m = AffineMatrixf::translation(10.0, 20.0)
            .multiply(AffineMatrixf::rotation(1.2))
            .multiply(AffineMatrixf::scaling(1.5, 2.5));

        let inv = m.try_invert().unwrap();
        assert_approx_eq!(m.multiply(inv), AffineMatrixf::IDENTITY).abs(1e-4);
        assert_approx_eq!(m.multiply(inv).transform_point(3.0, -7.0), (3.0, -7.0)).abs(1e-3);
    }

    #[test]
    fn invert_round_trip_random() {
        let mut rng = fastrand::Rng::with_seed(0x2d2d_affe);
        let mut coefficient = move || rng.f32() * 4.0 - 2.0;

        for _ in 0..100 {
            let m = AffineMatrix::from_array([
                coefficient(),
                coefficient(),
                coefficient(),
                coefficient(),
                coefficient(),
                coefficient(),
            ]);
            if m.determinant().abs() < 1e-2 {
                // Ill-conditioned samples amplify rounding error past any fixed tolerance.
                continue;
            }

            let inv = m.try_invert().unwrap();
            assert_approx_eq!(m.multiply(inv).transform_point(3.0, -7.0), (3.0, -7.0)).abs(1e-3);
        }
    }

    #[test]
    fn near_singular_inverts_to_identity() {
        let flat = AffineMatrixf::scaling(0.0, 1.0);
        assert_eq!(flat.determinant(), 0.0);
        assert!(flat.try_invert().is_none());
        assert_eq!(flat.invert(), AffineMatrixf::IDENTITY);

        // Just past the tolerance, inversion succeeds again.
        assert!(AffineMatrixf::scaling(1e-3, 1e-3).try_invert().is_some());
    }

    #[test]
    fn extreme_skew_is_not_special_cased() {
        let steep = AffineMatrixf::skew_x(FRAC_PI_2);
        let (x, _) = steep.transform_point(0.0, 1.0);
        assert!(x.abs() > 1e6);
    }

    #[test]
    fn padded_export_layout() {
        let m = AffineMatrixf::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(
            m.to_mat3x4(),
            [
                1.0, 2.0, 0.0, 0.0, //
                3.0, 4.0, 0.0, 0.0, //
                5.0, 6.0, 1.0, 0.0, //
            ]
        );
    }

    #[test]
    fn average_scale() {
        assert_eq!(AffineMatrixf::IDENTITY.average_scale(), 1.0);
        assert_eq!(AffineMatrixf::scaling(2.0, 2.0).average_scale(), 2.0);

        // Rotation does not change lengths.
        assert_approx_eq!(AffineMatrixf::rotation(0.9).average_scale(), 1.0).abs(1e-6);
    }

    #[test]
    fn f64_width() {
        let m = AffineMatrix::<f64>::translation(10.0, 20.0)
            .multiply(AffineMatrix::rotation(std::f64::consts::FRAC_PI_2));
        assert_approx_eq!(m.transform_point(10.0, 20.0), (-40.0, 20.0)).abs(1e-9);
    }

    #[test]
    fn fmt() {
        let m = AffineMatrixf::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        // Rows print in natural writing order.
        assert_eq!(format!("{:?}", m), "[[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]");
    }
}

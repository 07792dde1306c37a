//! Zero-safe vector helpers on top of `glam::DVec3`.
//!
//! glam's `/` by a zero scalar yields infinities, and `normalize`
//! yields NaN for the zero vector. The simulation never wants either:
//! a degenerate direction or a zero divisor collapses to the zero vector,
//! and callers that need a real direction guard on length themselves.

use weft_types::Scalar;

use crate::Vec3;

/// Extension methods for [`Vec3`].
pub trait VectorExt: Sized {
    /// Unit vector in the same direction, or zero for a zero-length vector.
    fn normalized(self) -> Self;

    /// Component-wise division by `s`, or zero when `s == 0`.
    fn div_or_zero(self, s: Scalar) -> Self;

    /// Splits `self` into `(normal, tangent)` parts relative to unit normal `n`.
    ///
    /// `normal + tangent == self` and `tangent.dot(n) ≈ 0`.
    fn split_normal(self, n: Self) -> (Self, Self);
}

impl VectorExt for Vec3 {
    #[inline]
    fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Vec3::ZERO
        }
    }

    #[inline]
    fn div_or_zero(self, s: Scalar) -> Self {
        if s != 0.0 {
            self / s
        } else {
            Vec3::ZERO
        }
    }

    #[inline]
    fn split_normal(self, n: Self) -> (Self, Self) {
        let normal = n * self.dot(n);
        (normal, self - normal)
    }
}

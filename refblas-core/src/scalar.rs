//! Element types the kernels operate on: `f64` and `Complex64`.
//!
//! Kernels are written once against [`Element`]. Conjugation is the identity
//! for `f64`, so a conjugate-transpose kernel run on real data is the
//! transpose kernel and a Hermitian kernel is the symmetric one.

use core::fmt::Debug;
use core::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};
use num_complex::Complex64;
use num_traits::Num;

/// Scalar element of a BLAS vector or matrix.
pub trait Element:
    Copy
    + PartialEq
    + Debug
    + Send
    + Sync
    + Num
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Complex conjugate (identity for reals).
    fn conj(self) -> Self;

    /// Real part.
    fn re(self) -> f64;

    /// `(re, im)`; `im` is zero for reals.
    fn parts(self) -> (f64, f64);

    /// Promote a real value into `Self`.
    fn from_re(r: f64) -> Self;

    /// `|re| + |im|`, the BLAS `dcabs1` magnitude.
    fn abs1(self) -> f64;

    /// Multiply by a real factor.
    fn scale(self, r: f64) -> Self;

    #[inline(always)]
    fn conj_if(self, conj: bool) -> Self {
        if conj {
            self.conj()
        } else {
            self
        }
    }

    /// `self` with its imaginary part dropped.
    #[inline(always)]
    fn real_part(self) -> Self {
        Self::from_re(self.re())
    }
}

impl Element for f64 {
    #[inline(always)]
    fn conj(self) -> f64 {
        self
    }

    #[inline(always)]
    fn re(self) -> f64 {
        self
    }

    #[inline(always)]
    fn parts(self) -> (f64, f64) {
        (self, 0.0)
    }

    #[inline(always)]
    fn from_re(r: f64) -> f64 {
        r
    }

    #[inline(always)]
    fn abs1(self) -> f64 {
        self.abs()
    }

    #[inline(always)]
    fn scale(self, r: f64) -> f64 {
        self * r
    }
}

impl Element for Complex64 {
    #[inline(always)]
    fn conj(self) -> Complex64 {
        Complex64::conj(&self)
    }

    #[inline(always)]
    fn re(self) -> f64 {
        self.re
    }

    #[inline(always)]
    fn parts(self) -> (f64, f64) {
        (self.re, self.im)
    }

    #[inline(always)]
    fn from_re(r: f64) -> Complex64 {
        Complex64::new(r, 0.0)
    }

    #[inline(always)]
    fn abs1(self) -> f64 {
        self.re.abs() + self.im.abs()
    }

    #[inline(always)]
    fn scale(self, r: f64) -> Complex64 {
        Complex64::new(self.re * r, self.im * r)
    }
}

//! BLAS Level 1: Vector-vector operations.
//!
//! Every routine walks `j = 0..n` and maps the logical index through
//! [`Stride`], so negative increments traverse the slice from its end. The
//! kernels are generic over [`Element`]; the `d*` entry points take `f64`
//! slices, the `z*` entry points `Complex64` slices.

use num_complex::Complex64;
use num_traits::One;
use refblas_core::{Element, Stride};

// ============================================================================
// Generic kernels
// ============================================================================

fn asum<T: Element>(n: usize, x: &[T], incx: isize) -> f64 {
    let sx = Stride::new(n, incx);
    let mut sum = 0.0;
    for j in 0..n {
        sum += x[sx.at(j)].abs1();
    }
    sum
}

fn axpy<T: Element>(n: usize, alpha: T, x: &[T], incx: isize, y: &mut [T], incy: isize) {
    if n == 0 || alpha.is_zero() {
        return;
    }
    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    for j in 0..n {
        y[sy.at(j)] += alpha * x[sx.at(j)];
    }
}

fn copy<T: Element>(n: usize, x: &[T], incx: isize, y: &mut [T], incy: isize) {
    if incx == 1 && incy == 1 {
        y[..n].copy_from_slice(&x[..n]);
        return;
    }
    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    for j in 0..n {
        y[sy.at(j)] = x[sx.at(j)];
    }
}

fn swap<T: Element>(n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize) {
    if incx == 1 && incy == 1 {
        x[..n].swap_with_slice(&mut y[..n]);
        return;
    }
    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    for j in 0..n {
        std::mem::swap(&mut x[sx.at(j)], &mut y[sy.at(j)]);
    }
}

fn scal<T: Element>(n: usize, alpha: T, x: &mut [T], incx: isize) {
    let sx = Stride::new(n, incx);
    for j in 0..n {
        x[sx.at(j)] *= alpha;
    }
}

fn dot<T: Element>(n: usize, x: &[T], incx: isize, y: &[T], incy: isize, conj: bool) -> T {
    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    let mut sum = T::zero();
    for j in 0..n {
        sum += x[sx.at(j)].conj_if(conj) * y[sy.at(j)];
    }
    sum
}

/// Scaled sum of squares over every real and imaginary component, so no
/// intermediate square overflows or underflows before the final `sqrt`.
fn nrm2<T: Element>(n: usize, x: &[T], incx: isize) -> f64 {
    let sx = Stride::new(n, incx);
    let mut scale = 0.0f64;
    let mut ssq = 1.0f64;
    for j in 0..n {
        let (re, im) = x[sx.at(j)].parts();
        for part in [re, im] {
            if part != 0.0 {
                let a = part.abs();
                if scale < a {
                    ssq = 1.0 + ssq * (scale / a) * (scale / a);
                    scale = a;
                } else {
                    ssq += (a / scale) * (a / scale);
                }
            }
        }
    }
    scale * ssq.sqrt()
}

fn iamax<T: Element>(n: usize, x: &[T], incx: isize) -> usize {
    if n == 0 {
        return 0;
    }
    let sx = Stride::new(n, incx);
    let mut max_idx = 0;
    let mut max_val = x[sx.at(0)].abs1();
    for j in 1..n {
        let v = x[sx.at(j)].abs1();
        if v > max_val {
            max_val = v;
            max_idx = j;
        }
    }
    max_idx
}

fn iamin<T: Element>(n: usize, x: &[T], incx: isize) -> usize {
    if n == 0 {
        return 0;
    }
    let sx = Stride::new(n, incx);
    let mut min_idx = 0;
    let mut min_val = x[sx.at(0)].abs1();
    for j in 1..n {
        let v = x[sx.at(j)].abs1();
        if v < min_val {
            min_val = v;
            min_idx = j;
        }
    }
    min_idx
}

fn rot<T: Element>(n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize, c: f64, s: f64) {
    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    for j in 0..n {
        let (ix, iy) = (sx.at(j), sy.at(j));
        let xv = x[ix];
        let yv = y[iy];
        x[ix] = xv.scale(c) + yv.scale(s);
        y[iy] = yv.scale(c) - xv.scale(s);
    }
}

// ============================================================================
// ASUM: sum of magnitudes
// ============================================================================

/// Double-precision asum: sum(|x_i|)
pub fn dasum(n: usize, x: &[f64], incx: isize) -> f64 {
    asum(n, x, incx)
}

/// Complex asum: sum(|Re x_i| + |Im x_i|).
///
/// This is the taxicab magnitude of BLAS `dzasum`, not the sum of moduli.
pub fn dzasum(n: usize, x: &[Complex64], incx: isize) -> f64 {
    asum(n, x, incx)
}

// ============================================================================
// AXPY: y := alpha * x + y
// ============================================================================

/// Double-precision axpy: y := alpha * x + y
pub fn daxpy(n: usize, alpha: f64, x: &[f64], incx: isize, y: &mut [f64], incy: isize) {
    axpy(n, alpha, x, incx, y, incy);
}

/// Complex axpy: y := alpha * x + y
pub fn zaxpy(
    n: usize,
    alpha: Complex64,
    x: &[Complex64],
    incx: isize,
    y: &mut [Complex64],
    incy: isize,
) {
    axpy(n, alpha, x, incx, y, incy);
}

// ============================================================================
// COPY / SWAP
// ============================================================================

/// Double-precision copy: y := x
pub fn dcopy(n: usize, x: &[f64], incx: isize, y: &mut [f64], incy: isize) {
    copy(n, x, incx, y, incy);
}

/// Complex copy: y := x
pub fn zcopy(n: usize, x: &[Complex64], incx: isize, y: &mut [Complex64], incy: isize) {
    copy(n, x, incx, y, incy);
}

/// Double-precision swap: x <-> y
pub fn dswap(n: usize, x: &mut [f64], incx: isize, y: &mut [f64], incy: isize) {
    swap(n, x, incx, y, incy);
}

/// Complex swap: x <-> y
pub fn zswap(n: usize, x: &mut [Complex64], incx: isize, y: &mut [Complex64], incy: isize) {
    swap(n, x, incx, y, incy);
}

// ============================================================================
// SCAL: x := alpha * x
// ============================================================================

/// Double-precision scal: x := alpha * x
pub fn dscal(n: usize, alpha: f64, x: &mut [f64], incx: isize) {
    scal(n, alpha, x, incx);
}

/// Complex scal: x := alpha * x
pub fn zscal(n: usize, alpha: Complex64, x: &mut [Complex64], incx: isize) {
    scal(n, alpha, x, incx);
}

/// Complex vector scaled by a real: x := alpha * x
pub fn zdscal(n: usize, alpha: f64, x: &mut [Complex64], incx: isize) {
    let sx = Stride::new(n, incx);
    for j in 0..n {
        let i = sx.at(j);
        x[i] = x[i].scale(alpha);
    }
}

// ============================================================================
// DOT: inner products
// ============================================================================

/// Double-precision dot product: x^T * y
pub fn ddot(n: usize, x: &[f64], incx: isize, y: &[f64], incy: isize) -> f64 {
    dot(n, x, incx, y, incy, false)
}

/// Complex unconjugated dot product: x^T * y
pub fn zdotu(n: usize, x: &[Complex64], incx: isize, y: &[Complex64], incy: isize) -> Complex64 {
    dot(n, x, incx, y, incy, false)
}

/// Complex conjugated dot product: x^H * y
pub fn zdotc(n: usize, x: &[Complex64], incx: isize, y: &[Complex64], incy: isize) -> Complex64 {
    dot(n, x, incx, y, incy, true)
}

// ============================================================================
// NRM2: Euclidean norm
// ============================================================================

/// Double-precision nrm2: ||x||_2
pub fn dnrm2(n: usize, x: &[f64], incx: isize) -> f64 {
    nrm2(n, x, incx)
}

/// Complex nrm2: sqrt(sum |x_i|^2) with the true modulus.
pub fn dznrm2(n: usize, x: &[Complex64], incx: isize) -> f64 {
    nrm2(n, x, incx)
}

// ============================================================================
// I*AMAX / IZAMIN: extremum search
// ============================================================================

/// Double-precision iamax: first logical index of max |x_i|; 0 when `n == 0`.
pub fn idamax(n: usize, x: &[f64], incx: isize) -> usize {
    iamax(n, x, incx)
}

/// Complex iamax: first logical index of max |Re x_i| + |Im x_i|.
pub fn izamax(n: usize, x: &[Complex64], incx: isize) -> usize {
    iamax(n, x, incx)
}

/// Complex iamin: first logical index of min |Re x_i| + |Im x_i|.
///
/// Not part of the reference set; pivoting code downstream relies on it.
pub fn izamin(n: usize, x: &[Complex64], incx: isize) -> usize {
    iamin(n, x, incx)
}

// ============================================================================
// ROTG / ROT: Givens rotations
// ============================================================================

/// Construct a Givens rotation that zeroes `b`.
///
/// Returns `(c, s)` with `[[c, s], [-s, c]] * (a, b) = (r, 0)`. On exit `a`
/// holds `r` and `b` holds the recovery value `z`: `1/c` when
/// `0 < |c| <= s`, otherwise `s`. `r` takes the sign of whichever input has
/// the larger magnitude.
pub fn drotg(a: &mut f64, b: &mut f64) -> (f64, f64) {
    let roe = if a.abs() > b.abs() { *a } else { *b };
    let scale = a.abs() + b.abs();
    if scale == 0.0 {
        *a = 0.0;
        *b = 0.0;
        return (1.0, 0.0);
    }
    let mut r = scale * ((*a / scale).powi(2) + (*b / scale).powi(2)).sqrt();
    if roe < 0.0 {
        r = -r;
    }
    let c = *a / r;
    let s = *b / r;
    let z = if c.abs() > 0.0 && c.abs() <= s { 1.0 / c } else { s };
    *a = r;
    *b = z;
    (c, s)
}

/// Construct a complex Givens rotation that zeroes `b`.
///
/// Returns real `c` and complex `s` with
/// `[[c, s], [-conj(s), c]] * (a, b) = (r, 0)`; `a` is overwritten with `r`.
/// When `a == 0` the rotation is the swap `c = 0, s = 1` and `r = b`.
pub fn zrotg(a: &mut Complex64, b: Complex64) -> (f64, Complex64) {
    let abs_a = a.norm();
    if abs_a == 0.0 {
        *a = b;
        return (0.0, Complex64::one());
    }
    let abs_b = b.norm();
    let scale = abs_a + abs_b;
    let norm = scale * ((abs_a / scale).powi(2) + (abs_b / scale).powi(2)).sqrt();
    let alpha = *a / abs_a;
    let c = abs_a / norm;
    let s = alpha * b.conj() / norm;
    *a = alpha * norm;
    (c, s)
}

/// Apply a plane rotation: x := c*x + s*y, y := c*y - s*x
pub fn drot(n: usize, x: &mut [f64], incx: isize, y: &mut [f64], incy: isize, c: f64, s: f64) {
    rot(n, x, incx, y, incy, c, s);
}

/// Apply a real plane rotation to complex vectors.
pub fn zdrot(
    n: usize,
    x: &mut [Complex64],
    incx: isize,
    y: &mut [Complex64],
    incy: isize,
    c: f64,
    s: f64,
) {
    rot(n, x, incx, y, incy, c, s);
}

// ============================================================================
// ROTMG / ROTM: modified Givens rotations
// ============================================================================

const GAM: f64 = 4096.0;
const GAMSQ: f64 = GAM * GAM;
const RGAMSQ: f64 = 1.0 / GAMSQ;

/// Full `H` from a `[flag, h11, h21, h12, h22]` parameter array.
fn rotm_matrix(param: &[f64; 5]) -> (f64, f64, f64, f64) {
    let flag = param[0];
    if flag < 0.0 {
        (param[1], param[2], param[3], param[4])
    } else if flag == 0.0 {
        (1.0, param[2], param[3], 1.0)
    } else {
        (param[1], -1.0, 1.0, param[4])
    }
}

struct Rotm {
    flag: f64,
    h11: f64,
    h12: f64,
    h21: f64,
    h22: f64,
}

impl Rotm {
    fn zero() -> Self {
        Self {
            flag: -1.0,
            h11: 0.0,
            h12: 0.0,
            h21: 0.0,
            h22: 0.0,
        }
    }

    /// Store the implicit unit entries so that `H` can be rescaled as a full matrix.
    fn make_explicit(&mut self) {
        if self.flag == 0.0 {
            self.h11 = 1.0;
            self.h22 = 1.0;
        } else if self.flag == 1.0 {
            self.h21 = -1.0;
            self.h12 = 1.0;
        }
        self.flag = -1.0;
    }

    fn into_param(self) -> [f64; 5] {
        let mut param = [self.flag, 0.0, 0.0, 0.0, 0.0];
        if self.flag < 0.0 {
            param[1] = self.h11;
            param[2] = self.h21;
            param[3] = self.h12;
            param[4] = self.h22;
        } else if self.flag == 0.0 {
            param[2] = self.h21;
            param[3] = self.h12;
        } else {
            param[1] = self.h11;
            param[4] = self.h22;
        }
        param
    }
}

/// Construct a modified Givens transformation.
///
/// Finds `H` such that `H * (sqrt(d1)*x1, sqrt(d2)*y1)^T` has a zero second
/// component, updating `d1`, `d2` and `x1` in place. The result is
/// `[flag, h11, h21, h12, h22]`:
/// - `flag = -1`: `H = [[h11, h12], [h21, h22]]`
/// - `flag =  0`: `H = [[1, h12], [h21, 1]]`
/// - `flag =  1`: `H = [[h11, 1], [-1, h22]]`
/// - `flag = -2`: `H = I` (returned when `d2 * y1 == 0`)
///
/// `d1` and `d2` are kept within `[1/4096^2, 4096^2]` by rescaling the
/// corresponding row of `H`.
pub fn drotmg(d1: &mut f64, d2: &mut f64, x1: &mut f64, y1: f64) -> [f64; 5] {
    if *d1 < 0.0 {
        *d1 = 0.0;
        *d2 = 0.0;
        *x1 = 0.0;
        return Rotm::zero().into_param();
    }

    let p2 = *d2 * y1;
    if p2 == 0.0 {
        return [-2.0, 0.0, 0.0, 0.0, 0.0];
    }

    let p1 = *d1 * *x1;
    let q2 = p2 * y1;
    let q1 = p1 * *x1;

    let mut h = Rotm::zero();
    if q1.abs() > q2.abs() {
        let h21 = -y1 / *x1;
        let h12 = p2 / p1;
        let u = 1.0 - h12 * h21;
        if u > 0.0 {
            h.flag = 0.0;
            h.h21 = h21;
            h.h12 = h12;
            *d1 /= u;
            *d2 /= u;
            *x1 *= u;
        } else {
            // Only reachable through rounding; falls back to the zero transform.
            *d1 = 0.0;
            *d2 = 0.0;
            *x1 = 0.0;
        }
    } else if q2 < 0.0 {
        *d1 = 0.0;
        *d2 = 0.0;
        *x1 = 0.0;
    } else {
        h.flag = 1.0;
        h.h11 = p1 / p2;
        h.h22 = *x1 / y1;
        let u = 1.0 + h.h11 * h.h22;
        let temp = *d2 / u;
        *d2 = *d1 / u;
        *d1 = temp;
        *x1 = y1 * u;
    }

    if *d1 != 0.0 {
        while *d1 <= RGAMSQ || *d1 >= GAMSQ {
            h.make_explicit();
            if *d1 <= RGAMSQ {
                *d1 *= GAMSQ;
                *x1 /= GAM;
                h.h11 /= GAM;
                h.h12 /= GAM;
            } else {
                *d1 /= GAMSQ;
                *x1 *= GAM;
                h.h11 *= GAM;
                h.h12 *= GAM;
            }
        }
    }

    if *d2 != 0.0 {
        while d2.abs() <= RGAMSQ || d2.abs() >= GAMSQ {
            h.make_explicit();
            if d2.abs() <= RGAMSQ {
                *d2 *= GAMSQ;
                h.h21 /= GAM;
                h.h22 /= GAM;
            } else {
                *d2 /= GAMSQ;
                h.h21 *= GAM;
                h.h22 *= GAM;
            }
        }
    }

    h.into_param()
}

/// Apply a modified Givens transformation: (x_i, y_i) := H * (x_i, y_i).
///
/// `param` is the array produced by [`drotmg`]; `flag = -2` is a no-op.
pub fn drotm(n: usize, x: &mut [f64], incx: isize, y: &mut [f64], incy: isize, param: &[f64; 5]) {
    if n == 0 || param[0] == -2.0 {
        return;
    }
    let (h11, h21, h12, h22) = rotm_matrix(param);
    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    for j in 0..n {
        let (ix, iy) = (sx.at(j), sy.at(j));
        let w = x[ix];
        let z = y[iy];
        x[ix] = w * h11 + z * h12;
        y[iy] = w * h21 + z * h22;
    }
}

//! General and general-band products, and general rank-1 updates.

use num_complex::Complex64;
use refblas_core::{Element, Stride, Transpose};

use super::scale_by_beta;

// ============================================================================
// GEMV / GBMV: y := alpha * op(A) * x + beta * y
// ============================================================================

/// Band of an `m x n` matrix: `kl` sub- and `ku` super-diagonals.
#[derive(Clone, Copy)]
struct Band {
    kl: usize,
    ku: usize,
    lda: usize,
}

impl Band {
    #[inline(always)]
    fn rows(self, m: usize, j: usize) -> std::ops::Range<usize> {
        j.saturating_sub(self.ku)..m.min(j + self.kl + 1)
    }

    #[inline(always)]
    fn index(self, i: usize, j: usize) -> usize {
        self.ku + i - j + j * self.lda
    }
}

fn gbmv<T: Element>(
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    band: Band,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    if m == 0 || n == 0 || (alpha.is_zero() && beta.is_one()) {
        return;
    }
    let (lenx, leny) = if trans.is_trans() { (m, n) } else { (n, m) };
    scale_by_beta(leny, beta, y, incy);
    if alpha.is_zero() {
        return;
    }

    let sx = Stride::new(lenx, incx);
    let sy = Stride::new(leny, incy);
    if !trans.is_trans() {
        for j in 0..n {
            let temp = alpha * x[sx.at(j)];
            for i in band.rows(m, j) {
                y[sy.at(i)] += temp * a[band.index(i, j)];
            }
        }
    } else {
        let conj = trans.is_conj();
        for j in 0..n {
            let mut temp = T::zero();
            for i in band.rows(m, j) {
                temp += a[band.index(i, j)].conj_if(conj) * x[sx.at(i)];
            }
            y[sy.at(j)] += alpha * temp;
        }
    }
}

/// Double-precision GEMV: y := alpha * op(A) * x + beta * y
///
/// `A` is `m x n`. `x` has `n` elements for `NoTrans` and `m` otherwise;
/// `y` the other count.
pub fn dgemv(
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    gemv(trans, m, n, alpha, a, lda, x, incx, beta, y, incy);
}

/// Complex GEMV: y := alpha * op(A) * x + beta * y, `op` one of `A`, `A^T`, `A^H`.
pub fn zgemv(
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: Complex64,
    a: &[Complex64],
    lda: usize,
    x: &[Complex64],
    incx: isize,
    beta: Complex64,
    y: &mut [Complex64],
    incy: isize,
) {
    gemv(trans, m, n, alpha, a, lda, x, incx, beta, y, incy);
}

fn gemv<T: Element>(
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    if m == 0 || n == 0 || (alpha.is_zero() && beta.is_one()) {
        return;
    }
    let (lenx, leny) = if trans.is_trans() { (m, n) } else { (n, m) };
    scale_by_beta(leny, beta, y, incy);
    if alpha.is_zero() {
        return;
    }

    let sx = Stride::new(lenx, incx);
    let sy = Stride::new(leny, incy);
    if !trans.is_trans() {
        for j in 0..n {
            let temp = alpha * x[sx.at(j)];
            let col = &a[j * lda..j * lda + m];
            for (i, &aij) in col.iter().enumerate() {
                y[sy.at(i)] += temp * aij;
            }
        }
    } else {
        let conj = trans.is_conj();
        for j in 0..n {
            let col = &a[j * lda..j * lda + m];
            let mut temp = T::zero();
            for (i, &aij) in col.iter().enumerate() {
                temp += aij.conj_if(conj) * x[sx.at(i)];
            }
            y[sy.at(j)] += alpha * temp;
        }
    }
}

/// Double-precision GBMV: y := alpha * op(A) * x + beta * y
///
/// `A` is `m x n` with `kl` sub- and `ku` super-diagonals in band storage:
/// element `(i, j)` lives at `a[(ku + i - j) + j*lda]`, `lda >= kl + ku + 1`.
pub fn dgbmv(
    trans: Transpose,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    gbmv(trans, m, n, alpha, a, Band { kl, ku, lda }, x, incx, beta, y, incy);
}

/// Complex GBMV: y := alpha * op(A) * x + beta * y for a band `A`.
pub fn zgbmv(
    trans: Transpose,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    alpha: Complex64,
    a: &[Complex64],
    lda: usize,
    x: &[Complex64],
    incx: isize,
    beta: Complex64,
    y: &mut [Complex64],
    incy: isize,
) {
    gbmv(trans, m, n, alpha, a, Band { kl, ku, lda }, x, incx, beta, y, incy);
}

// ============================================================================
// GER: A := alpha * x * y^T + A  (or y^H)
// ============================================================================

fn ger<T: Element>(
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
    conj: bool,
) {
    if m == 0 || n == 0 || alpha.is_zero() {
        return;
    }
    let sx = Stride::new(m, incx);
    let sy = Stride::new(n, incy);
    for j in 0..n {
        let yj = y[sy.at(j)];
        if !yj.is_zero() {
            let temp = alpha * yj.conj_if(conj);
            for i in 0..m {
                a[i + j * lda] += x[sx.at(i)] * temp;
            }
        }
    }
}

/// Double-precision GER: A := alpha * x * y^T + A
pub fn dger(
    m: usize,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    a: &mut [f64],
    lda: usize,
) {
    ger(m, n, alpha, x, incx, y, incy, a, lda, false);
}

/// Complex GERU: A := alpha * x * y^T + A
pub fn zgeru(
    m: usize,
    n: usize,
    alpha: Complex64,
    x: &[Complex64],
    incx: isize,
    y: &[Complex64],
    incy: isize,
    a: &mut [Complex64],
    lda: usize,
) {
    ger(m, n, alpha, x, incx, y, incy, a, lda, false);
}

/// Complex GERC: A := alpha * x * y^H + A
pub fn zgerc(
    m: usize,
    n: usize,
    alpha: Complex64,
    x: &[Complex64],
    incx: isize,
    y: &[Complex64],
    incy: isize,
    a: &mut [Complex64],
    lda: usize,
) {
    ger(m, n, alpha, x, incx, y, incy, a, lda, true);
}

//! Symmetric and Hermitian products, rank-1 and rank-2 updates.
//!
//! Only the triangle selected by `uplo` is read or written. For the
//! Hermitian variants the imaginary part of every diagonal element is
//! assumed zero on input and is set to zero on every diagonal element an
//! update touches.

use num_complex::Complex64;
use refblas_core::{Element, Stride, Uplo};

use super::{scale_by_beta, Storage};

#[inline(always)]
fn diag<T: Element>(v: T, herm: bool) -> T {
    if herm {
        v.real_part()
    } else {
        v
    }
}

// ============================================================================
// SYMV / HEMV family: y := alpha * A * x + beta * y
// ============================================================================

fn hemv<T: Element>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    storage: Storage,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
    herm: bool,
) {
    if n == 0 || (alpha.is_zero() && beta.is_one()) {
        return;
    }
    scale_by_beta(n, beta, y, incy);
    if alpha.is_zero() {
        return;
    }

    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    let at = |i: usize, j: usize| storage.index(uplo, n, i, j);
    match uplo {
        Uplo::Upper => {
            for j in 0..n {
                let temp1 = alpha * x[sx.at(j)];
                let mut temp2 = T::zero();
                for i in storage.first_row(j)..j {
                    let aij = a[at(i, j)];
                    y[sy.at(i)] += temp1 * aij;
                    temp2 += aij.conj_if(herm) * x[sx.at(i)];
                }
                y[sy.at(j)] += temp1 * diag(a[at(j, j)], herm) + alpha * temp2;
            }
        }
        Uplo::Lower => {
            for j in 0..n {
                let temp1 = alpha * x[sx.at(j)];
                let mut temp2 = T::zero();
                y[sy.at(j)] += temp1 * diag(a[at(j, j)], herm);
                for i in j + 1..storage.end_row(n, j) {
                    let aij = a[at(i, j)];
                    y[sy.at(i)] += temp1 * aij;
                    temp2 += aij.conj_if(herm) * x[sx.at(i)];
                }
                y[sy.at(j)] += alpha * temp2;
            }
        }
    }
}

/// Double-precision SYMV: y := alpha * A * x + beta * y, `A` symmetric.
pub fn dsymv(
    uplo: Uplo,
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
    hemv(uplo, n, alpha, a, Storage::Full { lda }, x, incx, beta, y, incy, false);
}

/// Double-precision SBMV: symmetric band `A` with `k` off-diagonals.
///
/// Upper: `A(i, j)` at `a[(k + i - j) + j*lda]`. Lower: at `a[(i - j) + j*lda]`.
pub fn dsbmv(
    uplo: Uplo,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    hemv(uplo, n, alpha, a, Storage::Band { k, lda }, x, incx, beta, y, incy, false);
}

/// Double-precision SPMV: symmetric `A` in packed storage.
pub fn dspmv(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    ap: &[f64],
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    hemv(uplo, n, alpha, ap, Storage::Packed, x, incx, beta, y, incy, false);
}

/// Complex HEMV: y := alpha * A * x + beta * y, `A` Hermitian.
pub fn zhemv(
    uplo: Uplo,
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
    hemv(uplo, n, alpha, a, Storage::Full { lda }, x, incx, beta, y, incy, true);
}

/// Complex HBMV: Hermitian band `A` with `k` off-diagonals.
pub fn zhbmv(
    uplo: Uplo,
    n: usize,
    k: usize,
    alpha: Complex64,
    a: &[Complex64],
    lda: usize,
    x: &[Complex64],
    incx: isize,
    beta: Complex64,
    y: &mut [Complex64],
    incy: isize,
) {
    hemv(uplo, n, alpha, a, Storage::Band { k, lda }, x, incx, beta, y, incy, true);
}

/// Complex HPMV: Hermitian `A` in packed storage.
pub fn zhpmv(
    uplo: Uplo,
    n: usize,
    alpha: Complex64,
    ap: &[Complex64],
    x: &[Complex64],
    incx: isize,
    beta: Complex64,
    y: &mut [Complex64],
    incy: isize,
) {
    hemv(uplo, n, alpha, ap, Storage::Packed, x, incx, beta, y, incy, true);
}

// ============================================================================
// SYR / HER family: A := alpha * x * x^T + A  (x^H for Hermitian)
// ============================================================================

fn her<T: Element>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    a: &mut [T],
    storage: Storage,
    herm: bool,
) {
    if n == 0 || alpha.is_zero() {
        return;
    }
    let sx = Stride::new(n, incx);
    let at = |i: usize, j: usize| storage.index(uplo, n, i, j);
    for j in 0..n {
        let xj = x[sx.at(j)];
        let jj = at(j, j);
        if !xj.is_zero() {
            let temp = alpha * xj.conj_if(herm);
            let rows = match uplo {
                Uplo::Upper => 0..j,
                Uplo::Lower => j + 1..n,
            };
            for i in rows {
                a[at(i, j)] += x[sx.at(i)] * temp;
            }
            a[jj] = diag(a[jj] + xj * temp, herm);
        } else if herm {
            a[jj] = a[jj].real_part();
        }
    }
}

/// Double-precision SYR: A := alpha * x * x^T + A
pub fn dsyr(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    a: &mut [f64],
    lda: usize,
) {
    her(uplo, n, alpha, x, incx, a, Storage::Full { lda }, false);
}

/// Double-precision SPR: packed A := alpha * x * x^T + A
pub fn dspr(uplo: Uplo, n: usize, alpha: f64, x: &[f64], incx: isize, ap: &mut [f64]) {
    her(uplo, n, alpha, x, incx, ap, Storage::Packed, false);
}

/// Complex HER: A := alpha * x * x^H + A with real `alpha`.
pub fn zher(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[Complex64],
    incx: isize,
    a: &mut [Complex64],
    lda: usize,
) {
    her(uplo, n, Complex64::from_re(alpha), x, incx, a, Storage::Full { lda }, true);
}

/// Complex HPR: packed A := alpha * x * x^H + A with real `alpha`.
pub fn zhpr(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[Complex64],
    incx: isize,
    ap: &mut [Complex64],
) {
    her(uplo, n, Complex64::from_re(alpha), x, incx, ap, Storage::Packed, true);
}

// ============================================================================
// SYR2 / HER2 family: A := alpha*x*y^H + conj(alpha)*y*x^H + A
// ============================================================================

fn her2<T: Element>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    storage: Storage,
    herm: bool,
) {
    if n == 0 || alpha.is_zero() {
        return;
    }
    let sx = Stride::new(n, incx);
    let sy = Stride::new(n, incy);
    let at = |i: usize, j: usize| storage.index(uplo, n, i, j);
    for j in 0..n {
        let xj = x[sx.at(j)];
        let yj = y[sy.at(j)];
        let jj = at(j, j);
        if !xj.is_zero() || !yj.is_zero() {
            let temp1 = alpha * yj.conj_if(herm);
            let temp2 = (alpha * xj).conj_if(herm);
            let rows = match uplo {
                Uplo::Upper => 0..j,
                Uplo::Lower => j + 1..n,
            };
            for i in rows {
                a[at(i, j)] += x[sx.at(i)] * temp1 + y[sy.at(i)] * temp2;
            }
            a[jj] = diag(a[jj] + xj * temp1 + yj * temp2, herm);
        } else if herm {
            a[jj] = a[jj].real_part();
        }
    }
}

/// Double-precision SYR2: A := alpha * x * y^T + alpha * y * x^T + A
pub fn dsyr2(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    a: &mut [f64],
    lda: usize,
) {
    her2(uplo, n, alpha, x, incx, y, incy, a, Storage::Full { lda }, false);
}

/// Double-precision SPR2: packed rank-2 update.
pub fn dspr2(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    ap: &mut [f64],
) {
    her2(uplo, n, alpha, x, incx, y, incy, ap, Storage::Packed, false);
}

/// Complex HER2: A := alpha * x * y^H + conj(alpha) * y * x^H + A
pub fn zher2(
    uplo: Uplo,
    n: usize,
    alpha: Complex64,
    x: &[Complex64],
    incx: isize,
    y: &[Complex64],
    incy: isize,
    a: &mut [Complex64],
    lda: usize,
) {
    her2(uplo, n, alpha, x, incx, y, incy, a, Storage::Full { lda }, true);
}

/// Complex HPR2: packed Hermitian rank-2 update.
pub fn zhpr2(
    uplo: Uplo,
    n: usize,
    alpha: Complex64,
    x: &[Complex64],
    incx: isize,
    y: &[Complex64],
    incy: isize,
    ap: &mut [Complex64],
) {
    her2(uplo, n, alpha, x, incx, y, incy, ap, Storage::Packed, true);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_dsymv_reads_only_selected_triangle() {
        // A = [[2, 1], [1, 3]]; the other triangle holds NaN
        let upper = vec![2.0, NAN, 1.0, 3.0];
        let lower = vec![2.0, 1.0, NAN, 3.0];
        let x = vec![1.0, 1.0];
        for (uplo, a) in [(Uplo::Upper, &upper), (Uplo::Lower, &lower)] {
            let mut y = vec![0.0; 2];
            dsymv(uplo, 2, 1.0, a, 2, &x, 1, 0.0, &mut y, 1);
            assert_eq!(y, vec![3.0, 4.0], "{uplo:?}");
        }
    }

    #[test]
    fn test_dspmv_packed() {
        let ap = vec![2.0, 1.0, 3.0];
        let x = vec![1.0, 2.0];
        for uplo in [Uplo::Upper, Uplo::Lower] {
            let mut y = vec![1.0, 1.0];
            dspmv(uplo, 2, 1.0, &ap, &x, 1, 2.0, &mut y, 1);
            assert_eq!(y, vec![6.0, 9.0]);
        }
    }

    #[test]
    fn test_dsbmv_tridiagonal() {
        // [[1, 4, 0], [4, 2, 5], [0, 5, 3]], k = 1
        let upper = vec![NAN, 1.0, 4.0, 2.0, 5.0, 3.0];
        let lower = vec![1.0, 4.0, 2.0, 5.0, 3.0, NAN];
        let x = vec![1.0, 1.0, 1.0];
        for (uplo, a) in [(Uplo::Upper, &upper), (Uplo::Lower, &lower)] {
            let mut y = vec![0.0; 3];
            dsbmv(uplo, 3, 1, 1.0, a, 2, &x, 1, 0.0, &mut y, 1);
            assert_eq!(y, vec![5.0, 11.0, 8.0], "{uplo:?}");
        }
    }

    #[test]
    fn test_zhemv_ignores_diagonal_imaginary() {
        // A = [[2, 1+i], [1-i, 3]], diagonal carries garbage imaginary parts
        let a = vec![c(2.0, 7.0), c(NAN, NAN), c(1.0, 1.0), c(3.0, -4.0)];
        let x = vec![c(1.0, 0.0), c(0.0, 0.0)];
        let mut y = vec![c(0.0, 0.0); 2];
        zhemv(Uplo::Upper, 2, c(1.0, 0.0), &a, 2, &x, 1, c(0.0, 0.0), &mut y, 1);
        assert_eq!(y, vec![c(2.0, 0.0), c(1.0, -1.0)]);
    }

    #[test]
    fn test_zhpmv_matches_zhbmv() {
        // A = [[1, i], [-i, 2]]
        let ap_lower = vec![c(1.0, 0.0), c(0.0, -1.0), c(2.0, 0.0)];
        let band_lower = vec![c(1.0, 0.0), c(0.0, -1.0), c(2.0, 0.0), c(NAN, NAN)];
        let x = vec![c(1.0, 1.0), c(2.0, 0.0)];
        let mut y1 = vec![c(0.0, 0.0); 2];
        let mut y2 = vec![c(0.0, 0.0); 2];
        zhpmv(Uplo::Lower, 2, c(1.0, 0.0), &ap_lower, &x, 1, c(0.0, 0.0), &mut y1, 1);
        zhbmv(Uplo::Lower, 2, 1, c(1.0, 0.0), &band_lower, 2, &x, 1, c(0.0, 0.0), &mut y2, 1);
        // y = [1+i + 2i, (-i)(1+i) + 4] = [1+3i, 5-i]
        assert_eq!(y1, vec![c(1.0, 3.0), c(5.0, -1.0)]);
        assert_eq!(y1, y2);
    }

    #[test]
    fn test_dsyr_upper() {
        let x = vec![1.0, 2.0];
        let mut a = vec![0.0; 4];
        dsyr(Uplo::Upper, 2, 1.0, &x, 1, &mut a, 2);
        assert_eq!(a, vec![1.0, 0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_dspr_lower() {
        let x = vec![1.0, 2.0];
        let mut ap = vec![0.0; 3];
        dspr(Uplo::Lower, 2, 1.0, &x, 1, &mut ap);
        assert_eq!(ap, vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_zher_forces_real_diagonal() {
        let x = vec![c(0.0, 1.0), c(1.0, 0.0)];
        let mut a = vec![c(0.0, 5.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)];
        zher(Uplo::Upper, 2, 1.0, &x, 1, &mut a, 2);
        assert_eq!(a[0], c(1.0, 0.0));
        assert_eq!(a[2], c(0.0, 1.0));
        assert_eq!(a[3], c(1.0, 0.0));
        assert_eq!(a[1], c(0.0, 0.0));

        // zero x[j] still cleans the diagonal
        let x = vec![c(0.0, 0.0)];
        let mut a = vec![c(2.0, 3.0)];
        zher(Uplo::Lower, 1, 1.0, &x, 1, &mut a, 1);
        assert_eq!(a[0], c(2.0, 0.0));
    }

    #[test]
    fn test_zhpr_packed_upper() {
        let x = vec![c(1.0, 1.0)];
        let mut ap = vec![c(1.0, 0.0)];
        zhpr(Uplo::Upper, 1, 0.5, &x, 1, &mut ap);
        assert_eq!(ap[0], c(2.0, 0.0));
    }

    #[test]
    fn test_zher2_both_triangles() {
        let x = vec![c(1.0, 0.0), c(0.0, 0.0)];
        let y = vec![c(0.0, 0.0), c(1.0, 0.0)];
        let alpha = c(0.0, 1.0);

        let mut lower = vec![c(0.0, 0.0); 4];
        zher2(Uplo::Lower, 2, alpha, &x, 1, &y, 1, &mut lower, 2);
        assert_eq!(lower[1], c(0.0, -1.0));

        let mut upper = vec![c(0.0, 0.0); 4];
        zher2(Uplo::Upper, 2, alpha, &x, 1, &y, 1, &mut upper, 2);
        assert_eq!(upper[2], c(0.0, 1.0));

        let mut ap = vec![c(0.0, 0.0); 3];
        zhpr2(Uplo::Upper, 2, alpha, &x, 1, &y, 1, &mut ap);
        assert_eq!(ap[1], c(0.0, 1.0));
    }

    #[test]
    fn test_dsyr2_and_dspr2() {
        let x = vec![1.0, 0.0];
        let y = vec![0.0, 1.0];
        let mut a = vec![0.0; 4];
        dsyr2(Uplo::Lower, 2, 1.0, &x, 1, &y, 1, &mut a, 2);
        assert_eq!(a, vec![0.0, 1.0, 0.0, 0.0]);

        let mut ap = vec![0.0; 3];
        dspr2(Uplo::Upper, 2, 1.0, &x, 1, &y, 1, &mut ap);
        assert_eq!(ap, vec![0.0, 1.0, 0.0]);
    }
}

//! Triangular products and solves: x := op(A) * x and x := op(A)^-1 * x.
//!
//! No singularity test is performed; a zero pivot propagates IEEE `inf` or
//! `NaN` into `x`.

use num_complex::Complex64;
use refblas_core::{Diag, Element, Stride, Transpose, Uplo};

use super::Storage;

// ============================================================================
// TRMV family: x := op(A) * x
// ============================================================================

fn trmv<T: Element>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    storage: Storage,
    x: &mut [T],
    incx: isize,
) {
    if n == 0 {
        return;
    }
    let nounit = !diag.is_unit();
    let conj = trans.is_conj();
    let sx = Stride::new(n, incx);
    let at = |i: usize, j: usize| storage.index(uplo, n, i, j);

    match (trans.is_trans(), uplo) {
        (false, Uplo::Upper) => {
            for j in 0..n {
                let temp = x[sx.at(j)];
                if !temp.is_zero() {
                    for i in storage.first_row(j)..j {
                        x[sx.at(i)] += temp * a[at(i, j)];
                    }
                    if nounit {
                        x[sx.at(j)] *= a[at(j, j)];
                    }
                }
            }
        }
        (false, Uplo::Lower) => {
            for j in (0..n).rev() {
                let temp = x[sx.at(j)];
                if !temp.is_zero() {
                    for i in (j + 1..storage.end_row(n, j)).rev() {
                        x[sx.at(i)] += temp * a[at(i, j)];
                    }
                    if nounit {
                        x[sx.at(j)] *= a[at(j, j)];
                    }
                }
            }
        }
        (true, Uplo::Upper) => {
            for j in (0..n).rev() {
                let mut temp = x[sx.at(j)];
                if nounit {
                    temp *= a[at(j, j)].conj_if(conj);
                }
                for i in (storage.first_row(j)..j).rev() {
                    temp += a[at(i, j)].conj_if(conj) * x[sx.at(i)];
                }
                x[sx.at(j)] = temp;
            }
        }
        (true, Uplo::Lower) => {
            for j in 0..n {
                let mut temp = x[sx.at(j)];
                if nounit {
                    temp *= a[at(j, j)].conj_if(conj);
                }
                for i in j + 1..storage.end_row(n, j) {
                    temp += a[at(i, j)].conj_if(conj) * x[sx.at(i)];
                }
                x[sx.at(j)] = temp;
            }
        }
    }
}

// ============================================================================
// TRSV family: x := op(A)^-1 * x
// ============================================================================

fn trsv<T: Element>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    storage: Storage,
    x: &mut [T],
    incx: isize,
) {
    if n == 0 {
        return;
    }
    let nounit = !diag.is_unit();
    let conj = trans.is_conj();
    let sx = Stride::new(n, incx);
    let at = |i: usize, j: usize| storage.index(uplo, n, i, j);

    match (trans.is_trans(), uplo) {
        (false, Uplo::Upper) => {
            for j in (0..n).rev() {
                if !x[sx.at(j)].is_zero() {
                    if nounit {
                        x[sx.at(j)] /= a[at(j, j)];
                    }
                    let temp = x[sx.at(j)];
                    for i in (storage.first_row(j)..j).rev() {
                        x[sx.at(i)] -= temp * a[at(i, j)];
                    }
                }
            }
        }
        (false, Uplo::Lower) => {
            for j in 0..n {
                if !x[sx.at(j)].is_zero() {
                    if nounit {
                        x[sx.at(j)] /= a[at(j, j)];
                    }
                    let temp = x[sx.at(j)];
                    for i in j + 1..storage.end_row(n, j) {
                        x[sx.at(i)] -= temp * a[at(i, j)];
                    }
                }
            }
        }
        (true, Uplo::Upper) => {
            for j in 0..n {
                let mut temp = x[sx.at(j)];
                for i in storage.first_row(j)..j {
                    temp -= a[at(i, j)].conj_if(conj) * x[sx.at(i)];
                }
                if nounit {
                    temp /= a[at(j, j)].conj_if(conj);
                }
                x[sx.at(j)] = temp;
            }
        }
        (true, Uplo::Lower) => {
            for j in (0..n).rev() {
                let mut temp = x[sx.at(j)];
                for i in (j + 1..storage.end_row(n, j)).rev() {
                    temp -= a[at(i, j)].conj_if(conj) * x[sx.at(i)];
                }
                if nounit {
                    temp /= a[at(j, j)].conj_if(conj);
                }
                x[sx.at(j)] = temp;
            }
        }
    }
}

// ============================================================================
// Public entry points
// ============================================================================

/// Double-precision TRMV: x := op(A) * x, `A` triangular.
pub fn dtrmv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) {
    trmv(uplo, trans, diag, n, a, Storage::Full { lda }, x, incx);
}

/// Double-precision TBMV: triangular band `A` with `k` off-diagonals.
pub fn dtbmv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) {
    trmv(uplo, trans, diag, n, a, Storage::Band { k, lda }, x, incx);
}

/// Double-precision TPMV: packed triangular `A`.
pub fn dtpmv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[f64],
    x: &mut [f64],
    incx: isize,
) {
    trmv(uplo, trans, diag, n, ap, Storage::Packed, x, incx);
}

/// Complex TRMV: x := op(A) * x, `op` one of `A`, `A^T`, `A^H`.
pub fn ztrmv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[Complex64],
    lda: usize,
    x: &mut [Complex64],
    incx: isize,
) {
    trmv(uplo, trans, diag, n, a, Storage::Full { lda }, x, incx);
}

/// Complex TBMV.
pub fn ztbmv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[Complex64],
    lda: usize,
    x: &mut [Complex64],
    incx: isize,
) {
    trmv(uplo, trans, diag, n, a, Storage::Band { k, lda }, x, incx);
}

/// Complex TPMV.
pub fn ztpmv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[Complex64],
    x: &mut [Complex64],
    incx: isize,
) {
    trmv(uplo, trans, diag, n, ap, Storage::Packed, x, incx);
}

/// Double-precision TRSV: solves op(A) * x = b, `b` overwritten by `x`.
pub fn dtrsv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) {
    trsv(uplo, trans, diag, n, a, Storage::Full { lda }, x, incx);
}

/// Double-precision TBSV: band triangular solve.
pub fn dtbsv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) {
    trsv(uplo, trans, diag, n, a, Storage::Band { k, lda }, x, incx);
}

/// Double-precision TPSV: packed triangular solve.
pub fn dtpsv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[f64],
    x: &mut [f64],
    incx: isize,
) {
    trsv(uplo, trans, diag, n, ap, Storage::Packed, x, incx);
}

/// Complex TRSV.
pub fn ztrsv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[Complex64],
    lda: usize,
    x: &mut [Complex64],
    incx: isize,
) {
    trsv(uplo, trans, diag, n, a, Storage::Full { lda }, x, incx);
}

/// Complex TBSV.
pub fn ztbsv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[Complex64],
    lda: usize,
    x: &mut [Complex64],
    incx: isize,
) {
    trsv(uplo, trans, diag, n, a, Storage::Band { k, lda }, x, incx);
}

/// Complex TPSV.
pub fn ztpsv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[Complex64],
    x: &mut [Complex64],
    incx: isize,
) {
    trsv(uplo, trans, diag, n, ap, Storage::Packed, x, incx);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    const NAN: f64 = f64::NAN;

    // A = [[1, 2], [0, 3]], lower triangle NaN
    const UPPER: [f64; 4] = [1.0, NAN, 2.0, 3.0];

    #[test]
    fn test_dtrmv_upper() {
        let mut x = vec![1.0, 1.0];
        dtrmv(Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, &UPPER, 2, &mut x, 1);
        assert_eq!(x, vec![3.0, 3.0]);

        let mut x = vec![1.0, 1.0];
        dtrmv(Uplo::Upper, Transpose::Trans, Diag::NonUnit, 2, &UPPER, 2, &mut x, 1);
        assert_eq!(x, vec![1.0, 5.0]);
    }

    #[test]
    fn test_dtrmv_unit_diagonal_not_read() {
        let a = vec![NAN, NAN, 2.0, NAN];
        let mut x = vec![1.0, 1.0];
        dtrmv(Uplo::Upper, Transpose::NoTrans, Diag::Unit, 2, &a, 2, &mut x, 1);
        assert_eq!(x, vec![3.0, 1.0]);
    }

    #[test]
    fn test_dtrsv_undoes_dtrmv() {
        let mut x = vec![3.0, 3.0];
        dtrsv(Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, &UPPER, 2, &mut x, 1);
        assert_eq!(x, vec![1.0, 1.0]);

        let mut x = vec![1.0, 5.0];
        dtrsv(Uplo::Upper, Transpose::Trans, Diag::NonUnit, 2, &UPPER, 2, &mut x, 1);
        assert_eq!(x, vec![1.0, 1.0]);
    }

    #[test]
    fn test_dtrsv_negative_increment() {
        // logical x = [3, 3] stored reversed with a gap
        let mut x = vec![3.0, 0.0, 3.0];
        dtrsv(Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, &UPPER, 2, &mut x, -2);
        assert_eq!(x, vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_dtpmv_dtpsv_lower() {
        // A = [[2, 0], [1, 3]]
        let ap = vec![2.0, 1.0, 3.0];
        let mut x = vec![1.0, 1.0];
        dtpmv(Uplo::Lower, Transpose::NoTrans, Diag::NonUnit, 2, &ap, &mut x, 1);
        assert_eq!(x, vec![2.0, 4.0]);
        dtpsv(Uplo::Lower, Transpose::NoTrans, Diag::NonUnit, 2, &ap, &mut x, 1);
        assert_eq!(x, vec![1.0, 1.0]);
    }

    #[test]
    fn test_dtbmv_dtbsv_upper_bidiagonal() {
        // A = [[1, 4, 0], [0, 2, 5], [0, 0, 3]], k = 1
        let a = vec![NAN, 1.0, 4.0, 2.0, 5.0, 3.0];
        let mut x = vec![1.0, 1.0, 1.0];
        dtbmv(Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 3, 1, &a, 2, &mut x, 1);
        assert_eq!(x, vec![5.0, 7.0, 3.0]);
        dtbsv(Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 3, 1, &a, 2, &mut x, 1);
        assert_eq!(x, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_ztrmv_trans_vs_conj_trans() {
        // A = [[i, 1], [0, 2]]
        let a = vec![c(0.0, 1.0), c(NAN, NAN), c(1.0, 0.0), c(2.0, 0.0)];
        let ones = vec![c(1.0, 0.0), c(1.0, 0.0)];

        let mut x = ones.clone();
        ztrmv(Uplo::Upper, Transpose::ConjTrans, Diag::NonUnit, 2, &a, 2, &mut x, 1);
        assert_eq!(x, vec![c(0.0, -1.0), c(3.0, 0.0)]);

        let mut x = ones.clone();
        ztrmv(Uplo::Upper, Transpose::Trans, Diag::NonUnit, 2, &a, 2, &mut x, 1);
        assert_eq!(x, vec![c(0.0, 1.0), c(3.0, 0.0)]);
    }

    #[test]
    fn test_ztrsv_conj_trans() {
        let a = vec![c(0.0, 1.0), c(NAN, NAN), c(1.0, 0.0), c(2.0, 0.0)];
        let mut x = vec![c(0.0, -1.0), c(3.0, 0.0)];
        ztrsv(Uplo::Upper, Transpose::ConjTrans, Diag::NonUnit, 2, &a, 2, &mut x, 1);
        assert_eq!(x, vec![c(1.0, 0.0), c(1.0, 0.0)]);
    }

    #[test]
    fn test_zero_pivot_propagates_inf() {
        let a = vec![0.0];
        let mut x = vec![1.0];
        dtrsv(Uplo::Lower, Transpose::NoTrans, Diag::NonUnit, 1, &a, 1, &mut x, 1);
        assert!(x[0].is_infinite());
    }
}

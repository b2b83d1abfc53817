//! Triangular matrix-matrix product and solve.
//!
//! `B` is `m x n` and is overwritten. `A` is `m x m` on the left, `n x n` on
//! the right. No singularity test is performed.

use num_complex::Complex64;
use refblas_core::{Diag, Element, Side, Transpose, Uplo};

use super::{axpy_column, scale_column};

fn zero_b<T: Element>(m: usize, n: usize, b: &mut [T], ldb: usize) {
    for j in 0..n {
        b[j * ldb..j * ldb + m].fill(T::zero());
    }
}

// ============================================================================
// TRMM: B := alpha * op(A) * B  or  B := alpha * B * op(A)
// ============================================================================

fn trmm<T: Element>(
    side: Side,
    uplo: Uplo,
    trans_a: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    if m == 0 || n == 0 {
        return;
    }
    if alpha.is_zero() {
        zero_b(m, n, b, ldb);
        return;
    }
    let nounit = !diag.is_unit();
    let conj = trans_a.is_conj();

    match (side, trans_a.is_trans(), uplo) {
        // B := alpha*A*B
        (Side::Left, false, Uplo::Upper) => {
            for j in 0..n {
                for k in 0..m {
                    let bkj = b[k + j * ldb];
                    if !bkj.is_zero() {
                        let mut temp = alpha * bkj;
                        for i in 0..k {
                            b[i + j * ldb] += temp * a[i + k * lda];
                        }
                        if nounit {
                            temp *= a[k + k * lda];
                        }
                        b[k + j * ldb] = temp;
                    }
                }
            }
        }
        (Side::Left, false, Uplo::Lower) => {
            for j in 0..n {
                for k in (0..m).rev() {
                    let bkj = b[k + j * ldb];
                    if !bkj.is_zero() {
                        let temp = alpha * bkj;
                        b[k + j * ldb] = if nounit { temp * a[k + k * lda] } else { temp };
                        for i in k + 1..m {
                            b[i + j * ldb] += temp * a[i + k * lda];
                        }
                    }
                }
            }
        }
        // B := alpha*op(A)*B
        (Side::Left, true, Uplo::Upper) => {
            for j in 0..n {
                for i in (0..m).rev() {
                    let mut temp = b[i + j * ldb];
                    if nounit {
                        temp *= a[i + i * lda].conj_if(conj);
                    }
                    for k in 0..i {
                        temp += a[k + i * lda].conj_if(conj) * b[k + j * ldb];
                    }
                    b[i + j * ldb] = alpha * temp;
                }
            }
        }
        (Side::Left, true, Uplo::Lower) => {
            for j in 0..n {
                for i in 0..m {
                    let mut temp = b[i + j * ldb];
                    if nounit {
                        temp *= a[i + i * lda].conj_if(conj);
                    }
                    for k in i + 1..m {
                        temp += a[k + i * lda].conj_if(conj) * b[k + j * ldb];
                    }
                    b[i + j * ldb] = alpha * temp;
                }
            }
        }
        // B := alpha*B*A
        (Side::Right, false, Uplo::Upper) => {
            for j in (0..n).rev() {
                let mut temp = alpha;
                if nounit {
                    temp *= a[j + j * lda];
                }
                scale_column(b, ldb, j, 0..m, temp);
                for k in 0..j {
                    let akj = a[k + j * lda];
                    if !akj.is_zero() {
                        axpy_column(b, ldb, m, alpha * akj, k, j);
                    }
                }
            }
        }
        (Side::Right, false, Uplo::Lower) => {
            for j in 0..n {
                let mut temp = alpha;
                if nounit {
                    temp *= a[j + j * lda];
                }
                scale_column(b, ldb, j, 0..m, temp);
                for k in j + 1..n {
                    let akj = a[k + j * lda];
                    if !akj.is_zero() {
                        axpy_column(b, ldb, m, alpha * akj, k, j);
                    }
                }
            }
        }
        // B := alpha*B*op(A)
        (Side::Right, true, Uplo::Upper) => {
            for k in 0..n {
                for j in 0..k {
                    let ajk = a[j + k * lda];
                    if !ajk.is_zero() {
                        axpy_column(b, ldb, m, alpha * ajk.conj_if(conj), k, j);
                    }
                }
                let mut temp = alpha;
                if nounit {
                    temp *= a[k + k * lda].conj_if(conj);
                }
                scale_column(b, ldb, k, 0..m, temp);
            }
        }
        (Side::Right, true, Uplo::Lower) => {
            for k in (0..n).rev() {
                for j in k + 1..n {
                    let ajk = a[j + k * lda];
                    if !ajk.is_zero() {
                        axpy_column(b, ldb, m, alpha * ajk.conj_if(conj), k, j);
                    }
                }
                let mut temp = alpha;
                if nounit {
                    temp *= a[k + k * lda].conj_if(conj);
                }
                scale_column(b, ldb, k, 0..m, temp);
            }
        }
    }
}

// ============================================================================
// TRSM: solve op(A) * X = alpha * B  or  X * op(A) = alpha * B
// ============================================================================

fn trsm<T: Element>(
    side: Side,
    uplo: Uplo,
    trans_a: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    if m == 0 || n == 0 {
        return;
    }
    if alpha.is_zero() {
        zero_b(m, n, b, ldb);
        return;
    }
    let nounit = !diag.is_unit();
    let conj = trans_a.is_conj();

    match (side, trans_a.is_trans(), uplo) {
        // A*X = alpha*B
        (Side::Left, false, Uplo::Upper) => {
            for j in 0..n {
                scale_column(b, ldb, j, 0..m, alpha);
                for k in (0..m).rev() {
                    if !b[k + j * ldb].is_zero() {
                        if nounit {
                            b[k + j * ldb] /= a[k + k * lda];
                        }
                        let bkj = b[k + j * ldb];
                        for i in 0..k {
                            b[i + j * ldb] -= bkj * a[i + k * lda];
                        }
                    }
                }
            }
        }
        (Side::Left, false, Uplo::Lower) => {
            for j in 0..n {
                scale_column(b, ldb, j, 0..m, alpha);
                for k in 0..m {
                    if !b[k + j * ldb].is_zero() {
                        if nounit {
                            b[k + j * ldb] /= a[k + k * lda];
                        }
                        let bkj = b[k + j * ldb];
                        for i in k + 1..m {
                            b[i + j * ldb] -= bkj * a[i + k * lda];
                        }
                    }
                }
            }
        }
        // op(A)*X = alpha*B
        (Side::Left, true, Uplo::Upper) => {
            for j in 0..n {
                for i in 0..m {
                    let mut temp = alpha * b[i + j * ldb];
                    for k in 0..i {
                        temp -= a[k + i * lda].conj_if(conj) * b[k + j * ldb];
                    }
                    if nounit {
                        temp /= a[i + i * lda].conj_if(conj);
                    }
                    b[i + j * ldb] = temp;
                }
            }
        }
        (Side::Left, true, Uplo::Lower) => {
            for j in 0..n {
                for i in (0..m).rev() {
                    let mut temp = alpha * b[i + j * ldb];
                    for k in i + 1..m {
                        temp -= a[k + i * lda].conj_if(conj) * b[k + j * ldb];
                    }
                    if nounit {
                        temp /= a[i + i * lda].conj_if(conj);
                    }
                    b[i + j * ldb] = temp;
                }
            }
        }
        // X*A = alpha*B
        (Side::Right, false, Uplo::Upper) => {
            for j in 0..n {
                scale_column(b, ldb, j, 0..m, alpha);
                for k in 0..j {
                    let akj = a[k + j * lda];
                    if !akj.is_zero() {
                        axpy_column(b, ldb, m, -akj, k, j);
                    }
                }
                if nounit {
                    scale_column(b, ldb, j, 0..m, T::one() / a[j + j * lda]);
                }
            }
        }
        (Side::Right, false, Uplo::Lower) => {
            for j in (0..n).rev() {
                scale_column(b, ldb, j, 0..m, alpha);
                for k in j + 1..n {
                    let akj = a[k + j * lda];
                    if !akj.is_zero() {
                        axpy_column(b, ldb, m, -akj, k, j);
                    }
                }
                if nounit {
                    scale_column(b, ldb, j, 0..m, T::one() / a[j + j * lda]);
                }
            }
        }
        // X*op(A) = alpha*B
        (Side::Right, true, Uplo::Upper) => {
            for k in (0..n).rev() {
                if nounit {
                    scale_column(b, ldb, k, 0..m, T::one() / a[k + k * lda].conj_if(conj));
                }
                for j in 0..k {
                    let ajk = a[j + k * lda];
                    if !ajk.is_zero() {
                        axpy_column(b, ldb, m, -ajk.conj_if(conj), k, j);
                    }
                }
                scale_column(b, ldb, k, 0..m, alpha);
            }
        }
        (Side::Right, true, Uplo::Lower) => {
            for k in 0..n {
                if nounit {
                    scale_column(b, ldb, k, 0..m, T::one() / a[k + k * lda].conj_if(conj));
                }
                for j in k + 1..n {
                    let ajk = a[j + k * lda];
                    if !ajk.is_zero() {
                        axpy_column(b, ldb, m, -ajk.conj_if(conj), k, j);
                    }
                }
                scale_column(b, ldb, k, 0..m, alpha);
            }
        }
    }
}

// ============================================================================
// Public entry points
// ============================================================================

/// Double-precision TRMM: B := alpha*op(A)*B (`Side::Left`) or
/// B := alpha*B*op(A) (`Side::Right`), `A` triangular.
pub fn dtrmm(
    side: Side,
    uplo: Uplo,
    trans_a: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &mut [f64],
    ldb: usize,
) {
    trmm(side, uplo, trans_a, diag, m, n, alpha, a, lda, b, ldb);
}

/// Complex TRMM.
pub fn ztrmm(
    side: Side,
    uplo: Uplo,
    trans_a: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: Complex64,
    a: &[Complex64],
    lda: usize,
    b: &mut [Complex64],
    ldb: usize,
) {
    trmm(side, uplo, trans_a, diag, m, n, alpha, a, lda, b, ldb);
}

/// Double-precision TRSM: solves op(A)*X = alpha*B (`Side::Left`) or
/// X*op(A) = alpha*B (`Side::Right`); `B` is overwritten by `X`.
pub fn dtrsm(
    side: Side,
    uplo: Uplo,
    trans_a: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &mut [f64],
    ldb: usize,
) {
    trsm(side, uplo, trans_a, diag, m, n, alpha, a, lda, b, ldb);
}

/// Complex TRSM.
pub fn ztrsm(
    side: Side,
    uplo: Uplo,
    trans_a: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: Complex64,
    a: &[Complex64],
    lda: usize,
    b: &mut [Complex64],
    ldb: usize,
) {
    trsm(side, uplo, trans_a, diag, m, n, alpha, a, lda, b, ldb);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    const NAN: f64 = f64::NAN;

    // A = [[1, 2], [0, 3]] upper, lower triangle NaN
    const UPPER: [f64; 4] = [1.0, NAN, 2.0, 3.0];

    #[test]
    fn test_dtrmm_left_upper() {
        // B = I
        let mut b = vec![1.0, 0.0, 0.0, 1.0];
        dtrmm(Side::Left, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, 2, 1.0, &UPPER, 2, &mut b, 2);
        assert_eq!(b, vec![1.0, 0.0, 2.0, 3.0]);
    }

    #[test]
    fn test_dtrmm_right_trans_unit() {
        // B * A^T with unit diagonal: A^T = [[1, 0], [2, 1]], B = [[1, 1]]
        let mut b = vec![1.0, 1.0];
        dtrmm(Side::Right, Uplo::Upper, Transpose::Trans, Diag::Unit, 1, 2, 2.0, &UPPER, 2, &mut b, 1);
        assert_eq!(b, vec![6.0, 2.0]);
    }

    #[test]
    fn test_dtrsm_left_upper() {
        // A * X = B with B = A, so X = I
        let mut b = vec![1.0, 0.0, 2.0, 3.0];
        dtrsm(Side::Left, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 2, 2, 1.0, &UPPER, 2, &mut b, 2);
        assert_eq!(b, vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_dtrsm_right_lower_alpha() {
        // X * A = 2B, A = [[2, 0], [1, 4]], B = [[3, 4]] => X = [[2, 2]]
        let a = vec![2.0, 1.0, NAN, 4.0];
        let mut b = vec![3.0, 4.0];
        dtrsm(Side::Right, Uplo::Lower, Transpose::NoTrans, Diag::NonUnit, 1, 2, 2.0, &a, 2, &mut b, 1);
        assert_eq!(b, vec![2.0, 2.0]);
    }

    #[test]
    fn test_alpha_zero_clears_b() {
        let mut b = vec![NAN, NAN, 5.0];
        dtrsm(Side::Left, Uplo::Lower, Transpose::NoTrans, Diag::Unit, 2, 1, 0.0, &UPPER, 2, &mut b, 2);
        assert_eq!(b, vec![0.0, 0.0, 5.0]);
    }

    #[test]
    fn test_ztrmm_ztrsm_conj_trans() {
        // A = [[i, 1], [_, 2]] upper
        let a = vec![c(0.0, 1.0), c(NAN, NAN), c(1.0, 0.0), c(2.0, 0.0)];
        let b0 = vec![c(1.0, 0.0), c(1.0, 0.0)];
        let mut b = b0.clone();
        // A^H = [[-i, 0], [1, 2]]
        ztrmm(Side::Left, Uplo::Upper, Transpose::ConjTrans, Diag::NonUnit, 2, 1, c(1.0, 0.0), &a, 2, &mut b, 2);
        assert_eq!(b, vec![c(0.0, -1.0), c(3.0, 0.0)]);
        ztrsm(Side::Left, Uplo::Upper, Transpose::ConjTrans, Diag::NonUnit, 2, 1, c(1.0, 0.0), &a, 2, &mut b, 2);
        assert_eq!(b, b0);
    }
}

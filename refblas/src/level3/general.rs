//! General matrix multiply.

use num_complex::Complex64;
use refblas_core::stride::{check_leading_dim, check_len, required_len};
use refblas_core::{Element, Result, Transpose};

use super::scale_column;

// ============================================================================
// GEMM: C := alpha * op(A) * op(B) + beta * C
// ============================================================================

fn gemm<T: Element>(
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    if m == 0 || n == 0 || ((alpha.is_zero() || k == 0) && beta.is_one()) {
        return Ok(());
    }

    // op(A) is m x k, op(B) is k x n
    let (nrowa, ncola) = if trans_a.is_trans() { (k, m) } else { (m, k) };
    let (nrowb, ncolb) = if trans_b.is_trans() { (n, k) } else { (k, n) };
    check_leading_dim("lda", lda, nrowa)?;
    check_leading_dim("ldb", ldb, nrowb)?;
    check_leading_dim("ldc", ldc, m)?;
    check_len("a", a.len(), required_len(nrowa, ncola, lda))?;
    check_len("b", b.len(), required_len(nrowb, ncolb, ldb))?;
    check_len("c", c.len(), required_len(m, n, ldc))?;

    if alpha.is_zero() {
        for j in 0..n {
            scale_column(c, ldc, j, 0..m, beta);
        }
        return Ok(());
    }

    let conj_a = trans_a.is_conj();
    let conj_b = trans_b.is_conj();
    match (trans_a.is_trans(), trans_b.is_trans()) {
        (false, false) => {
            // C := alpha*A*B + beta*C
            for j in 0..n {
                scale_column(c, ldc, j, 0..m, beta);
                for l in 0..k {
                    let temp = alpha * b[l + j * ldb];
                    for i in 0..m {
                        c[i + j * ldc] += temp * a[i + l * lda];
                    }
                }
            }
        }
        (false, true) => {
            // C := alpha*A*op(B) + beta*C
            for j in 0..n {
                scale_column(c, ldc, j, 0..m, beta);
                for l in 0..k {
                    let temp = alpha * b[j + l * ldb].conj_if(conj_b);
                    for i in 0..m {
                        c[i + j * ldc] += temp * a[i + l * lda];
                    }
                }
            }
        }
        (true, false) => {
            // C := alpha*op(A)*B + beta*C
            for j in 0..n {
                for i in 0..m {
                    let mut temp = T::zero();
                    for l in 0..k {
                        temp += a[l + i * lda].conj_if(conj_a) * b[l + j * ldb];
                    }
                    let cij = &mut c[i + j * ldc];
                    *cij = if beta.is_zero() {
                        alpha * temp
                    } else {
                        alpha * temp + beta * *cij
                    };
                }
            }
        }
        (true, true) => {
            // C := alpha*op(A)*op(B) + beta*C
            for j in 0..n {
                for i in 0..m {
                    let mut temp = T::zero();
                    for l in 0..k {
                        temp += a[l + i * lda].conj_if(conj_a) * b[j + l * ldb].conj_if(conj_b);
                    }
                    let cij = &mut c[i + j * ldc];
                    *cij = if beta.is_zero() {
                        alpha * temp
                    } else {
                        alpha * temp + beta * *cij
                    };
                }
            }
        }
    }
    Ok(())
}

/// Double-precision GEMM: C := alpha * op(A) * op(B) + beta * C
///
/// `op(A)` is `m x k`, `op(B)` is `k x n`, `C` is `m x n`. After the quick
/// return for empty or no-op calls, leading dimensions and buffer lengths
/// are checked and an [`InvalidArgument`](refblas_core::BlasError::InvalidArgument)
/// error is returned before any element of `C` is written.
pub fn dgemm(
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) -> Result<()> {
    gemm(trans_a, trans_b, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
}

/// Complex GEMM: C := alpha * op(A) * op(B) + beta * C, `op` one of `X`, `X^T`, `X^H`.
pub fn zgemm(
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: Complex64,
    a: &[Complex64],
    lda: usize,
    b: &[Complex64],
    ldb: usize,
    beta: Complex64,
    c: &mut [Complex64],
    ldc: usize,
) -> Result<()> {
    gemm(trans_a, trans_b, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use refblas_core::BlasError;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_dgemm_identity() {
        let a = vec![1.0, 0.0, 0.0, 1.0];
        // [[5, 6], [7, 8]]
        let b = vec![5.0, 7.0, 6.0, 8.0];
        let mut cm = vec![0.0; 4];
        dgemm(Transpose::NoTrans, Transpose::NoTrans, 2, 2, 2, 1.0, &a, 2, &b, 2, 0.0, &mut cm, 2)
            .unwrap();
        assert_eq!(cm, b);
    }

    #[test]
    fn test_dgemm_all_transposes() {
        // A = [[1, 2], [3, 4]], B = [[5, 6], [7, 8]]
        let a = vec![1.0, 3.0, 2.0, 4.0];
        let b = vec![5.0, 7.0, 6.0, 8.0];
        let cases = [
            (Transpose::NoTrans, Transpose::NoTrans, [19.0, 43.0, 22.0, 50.0]),
            (Transpose::Trans, Transpose::NoTrans, [26.0, 38.0, 30.0, 44.0]),
            (Transpose::NoTrans, Transpose::Trans, [17.0, 39.0, 23.0, 53.0]),
            (Transpose::Trans, Transpose::Trans, [23.0, 34.0, 31.0, 46.0]),
        ];
        for (ta, tb, expected) in cases {
            let mut cm = vec![0.0; 4];
            dgemm(ta, tb, 2, 2, 2, 1.0, &a, 2, &b, 2, 0.0, &mut cm, 2).unwrap();
            assert_eq!(cm, expected, "{ta:?} {tb:?}");
        }
    }

    #[test]
    fn test_dgemm_alpha_beta() {
        let a = vec![1.0, 3.0, 2.0, 4.0];
        let b = vec![5.0, 7.0, 6.0, 8.0];
        let mut cm = vec![1.0, 1.0, 1.0, 1.0];
        dgemm(Transpose::NoTrans, Transpose::NoTrans, 2, 2, 2, 2.0, &a, 2, &b, 2, 1.0, &mut cm, 2)
            .unwrap();
        assert_eq!(cm, vec![39.0, 87.0, 45.0, 101.0]);
    }

    #[test]
    fn test_dgemm_rectangular() {
        // A is 2x3, B is 3x1
        let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        let b = vec![1.0, 1.0, 1.0];
        let mut cm = vec![0.0; 2];
        dgemm(Transpose::NoTrans, Transpose::NoTrans, 2, 1, 3, 1.0, &a, 2, &b, 3, 0.0, &mut cm, 2)
            .unwrap();
        assert_eq!(cm, vec![6.0, 15.0]);
    }

    #[test]
    fn test_dgemm_beta_zero_overwrites_nan() {
        let a = vec![1.0];
        let b = vec![2.0];
        let mut cm = vec![f64::NAN];
        dgemm(Transpose::NoTrans, Transpose::NoTrans, 1, 1, 1, 1.0, &a, 1, &b, 1, 0.0, &mut cm, 1)
            .unwrap();
        assert_eq!(cm[0], 2.0);
    }

    #[test]
    fn test_dgemm_rejects_small_lda() {
        let a = vec![0.0; 4];
        let b = vec![0.0; 4];
        let mut cm = vec![7.0; 4];
        let err = dgemm(
            Transpose::NoTrans,
            Transpose::NoTrans,
            2,
            2,
            2,
            1.0,
            &a,
            1,
            &b,
            2,
            0.0,
            &mut cm,
            2,
        )
        .unwrap_err();
        assert!(matches!(err, BlasError::InvalidArgument { name: "lda", .. }));
        assert_eq!(cm, vec![7.0; 4]);
    }

    #[test]
    fn test_dgemm_rejects_short_buffer() {
        let a = vec![0.0; 3];
        let b = vec![0.0; 4];
        let mut cm = vec![0.0; 4];
        let err = dgemm(
            Transpose::NoTrans,
            Transpose::NoTrans,
            2,
            2,
            2,
            1.0,
            &a,
            2,
            &b,
            2,
            0.0,
            &mut cm,
            2,
        )
        .unwrap_err();
        assert!(matches!(err, BlasError::InvalidArgument { name: "a", .. }));
    }

    #[test]
    fn test_dgemm_quick_return_skips_validation() {
        let mut cm = vec![3.0];
        // k == 0 and beta == 1: nothing to do, empty A/B are fine
        dgemm(Transpose::NoTrans, Transpose::NoTrans, 1, 1, 0, 1.0, &[], 0, &[], 0, 1.0, &mut cm, 1)
            .unwrap();
        assert_eq!(cm, vec![3.0]);
    }

    #[test]
    fn test_zgemm_conj_trans() {
        // A = [[i]], B = [[1 + i]]
        let a = vec![c(0.0, 1.0)];
        let b = vec![c(1.0, 1.0)];
        let mut cm = vec![c(0.0, 0.0)];
        zgemm(
            Transpose::ConjTrans,
            Transpose::NoTrans,
            1,
            1,
            1,
            c(1.0, 0.0),
            &a,
            1,
            &b,
            1,
            c(0.0, 0.0),
            &mut cm,
            1,
        )
        .unwrap();
        // -i * (1 + i) = 1 - i
        assert_eq!(cm[0], c(1.0, -1.0));

        let mut cm = vec![c(0.0, 0.0)];
        zgemm(
            Transpose::ConjTrans,
            Transpose::ConjTrans,
            1,
            1,
            1,
            c(1.0, 0.0),
            &a,
            1,
            &b,
            1,
            c(0.0, 0.0),
            &mut cm,
            1,
        )
        .unwrap();
        // -i * (1 - i) = -1 - i
        assert_eq!(cm[0], c(-1.0, -1.0));
    }
}

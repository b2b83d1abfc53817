//! Symmetric and Hermitian products, rank-k and rank-2k updates.
//!
//! The `*syrk`/`*syr2k` kernels read `trans` only for whether `A` is
//! transposed; whether that transpose conjugates is fixed by the routine
//! (`zherk`, `zher2k` always conjugate, `zsyrk`, `zsyr2k` never do).

use num_complex::Complex64;
use refblas_core::{Element, Side, Transpose, Uplo};

use super::scale_column;

#[inline(always)]
fn diag<T: Element>(v: T, herm: bool) -> T {
    if herm {
        v.real_part()
    } else {
        v
    }
}

#[inline(always)]
fn triangle_rows(uplo: Uplo, n: usize, j: usize) -> std::ops::Range<usize> {
    match uplo {
        Uplo::Upper => 0..j + 1,
        Uplo::Lower => j..n,
    }
}

/// beta * (triangle column `j` of C); for Hermitian updates the diagonal is
/// made real even when `beta == 1`.
fn scale_triangle_column<T: Element>(
    uplo: Uplo,
    n: usize,
    j: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
    herm: bool,
) {
    scale_column(c, ldc, j, triangle_rows(uplo, n, j), beta);
    if herm {
        let jj = j + j * ldc;
        c[jj] = c[jj].real_part();
    }
}

// ============================================================================
// SYMM / HEMM: C := alpha*A*B + beta*C  or  C := alpha*B*A + beta*C
// ============================================================================

fn hemm<T: Element>(
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
    herm: bool,
) {
    if m == 0 || n == 0 || (alpha.is_zero() && beta.is_one()) {
        return;
    }
    if alpha.is_zero() {
        for j in 0..n {
            scale_column(c, ldc, j, 0..m, beta);
        }
        return;
    }

    let beta_c = |cij: T| if beta.is_zero() { T::zero() } else { beta * cij };
    match (side, uplo) {
        (Side::Left, Uplo::Upper) => {
            for j in 0..n {
                for i in 0..m {
                    let temp1 = alpha * b[i + j * ldb];
                    let mut temp2 = T::zero();
                    for k in 0..i {
                        let aki = a[k + i * lda];
                        c[k + j * ldc] += temp1 * aki;
                        temp2 += b[k + j * ldb] * aki.conj_if(herm);
                    }
                    let ij = i + j * ldc;
                    c[ij] = beta_c(c[ij]) + temp1 * diag(a[i + i * lda], herm) + alpha * temp2;
                }
            }
        }
        (Side::Left, Uplo::Lower) => {
            for j in 0..n {
                for i in (0..m).rev() {
                    let temp1 = alpha * b[i + j * ldb];
                    let mut temp2 = T::zero();
                    for k in i + 1..m {
                        let aki = a[k + i * lda];
                        c[k + j * ldc] += temp1 * aki;
                        temp2 += b[k + j * ldb] * aki.conj_if(herm);
                    }
                    let ij = i + j * ldc;
                    c[ij] = beta_c(c[ij]) + temp1 * diag(a[i + i * lda], herm) + alpha * temp2;
                }
            }
        }
        (Side::Right, _) => {
            // A(k, j) read from whichever triangle holds it
            let a_kj = |k: usize, j: usize| -> T {
                let stored = match uplo {
                    Uplo::Upper => k <= j,
                    Uplo::Lower => k >= j,
                };
                if stored {
                    a[k + j * lda]
                } else {
                    a[j + k * lda].conj_if(herm)
                }
            };
            for j in 0..n {
                let temp1 = alpha * diag(a[j + j * lda], herm);
                for i in 0..m {
                    let ij = i + j * ldc;
                    c[ij] = beta_c(c[ij]) + temp1 * b[i + j * ldb];
                }
                for k in (0..n).filter(|&k| k != j) {
                    let temp1 = alpha * a_kj(k, j);
                    for i in 0..m {
                        c[i + j * ldc] += temp1 * b[i + k * ldb];
                    }
                }
            }
        }
    }
}

/// Double-precision SYMM with symmetric `A` on the given side.
///
/// `Side::Left`: C := alpha*A*B + beta*C, `A` is `m x m`.
/// `Side::Right`: C := alpha*B*A + beta*C, `A` is `n x n`.
pub fn dsymm(
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    hemm(side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc, false);
}

/// Complex SYMM with complex-symmetric `A` (`A = A^T`, no conjugation).
pub fn zsymm(
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: Complex64,
    a: &[Complex64],
    lda: usize,
    b: &[Complex64],
    ldb: usize,
    beta: Complex64,
    c: &mut [Complex64],
    ldc: usize,
) {
    hemm(side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc, false);
}

/// Complex HEMM with Hermitian `A`; the imaginary part of its diagonal is ignored.
pub fn zhemm(
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: Complex64,
    a: &[Complex64],
    lda: usize,
    b: &[Complex64],
    ldb: usize,
    beta: Complex64,
    c: &mut [Complex64],
    ldc: usize,
) {
    hemm(side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc, true);
}

// ============================================================================
// SYRK / HERK: C := alpha*A*A^H + beta*C  or  C := alpha*A^H*A + beta*C
// ============================================================================

fn herk<T: Element>(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
    herm: bool,
) {
    if n == 0 || ((alpha.is_zero() || k == 0) && beta.is_one()) {
        return;
    }
    if alpha.is_zero() {
        for j in 0..n {
            scale_triangle_column(uplo, n, j, beta, c, ldc, herm);
        }
        return;
    }

    if !trans.is_trans() {
        // A is n x k
        for j in 0..n {
            scale_triangle_column(uplo, n, j, beta, c, ldc, herm);
            for l in 0..k {
                let ajl = a[j + l * lda];
                if !ajl.is_zero() {
                    let temp = alpha * ajl.conj_if(herm);
                    for i in triangle_rows(uplo, n, j) {
                        c[i + j * ldc] += temp * a[i + l * lda];
                    }
                    let jj = j + j * ldc;
                    c[jj] = diag(c[jj], herm);
                }
            }
        }
    } else {
        // A is k x n
        for j in 0..n {
            for i in triangle_rows(uplo, n, j) {
                let mut temp = T::zero();
                for l in 0..k {
                    temp += a[l + i * lda].conj_if(herm) * a[l + j * lda];
                }
                let ij = i + j * ldc;
                let cij = if beta.is_zero() {
                    alpha * temp
                } else {
                    alpha * temp + beta * c[ij]
                };
                c[ij] = if i == j { diag(cij, herm) } else { cij };
            }
        }
    }
}

/// Double-precision SYRK on the `uplo` triangle of C.
///
/// `NoTrans`: C := alpha*A*A^T + beta*C, `A` is `n x k`.
/// `Trans`/`ConjTrans`: C := alpha*A^T*A + beta*C, `A` is `k x n`.
pub fn dsyrk(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    herk(uplo, trans, n, k, alpha, a, lda, beta, c, ldc, false);
}

/// Complex SYRK: C := alpha*A*A^T + beta*C (or A^T*A), no conjugation.
pub fn zsyrk(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: Complex64,
    a: &[Complex64],
    lda: usize,
    beta: Complex64,
    c: &mut [Complex64],
    ldc: usize,
) {
    herk(uplo, trans, n, k, alpha, a, lda, beta, c, ldc, false);
}

/// Complex HERK with real `alpha` and `beta`: C := alpha*A*A^H + beta*C (or A^H*A).
///
/// The diagonal of C is made real wherever the update touches it.
pub fn zherk(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[Complex64],
    lda: usize,
    beta: f64,
    c: &mut [Complex64],
    ldc: usize,
) {
    herk(
        uplo,
        trans,
        n,
        k,
        Complex64::from_re(alpha),
        a,
        lda,
        Complex64::from_re(beta),
        c,
        ldc,
        true,
    );
}

// ============================================================================
// SYR2K / HER2K: C := alpha*A*B^H + conj(alpha)*B*A^H + beta*C
// ============================================================================

fn her2k<T: Element>(
    uplo: Uplo,
    trans: Transpose,
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
    herm: bool,
) {
    if n == 0 || ((alpha.is_zero() || k == 0) && beta.is_one()) {
        return;
    }
    if alpha.is_zero() {
        for j in 0..n {
            scale_triangle_column(uplo, n, j, beta, c, ldc, herm);
        }
        return;
    }

    if !trans.is_trans() {
        // A, B are n x k
        for j in 0..n {
            scale_triangle_column(uplo, n, j, beta, c, ldc, herm);
            for l in 0..k {
                let ajl = a[j + l * lda];
                let bjl = b[j + l * ldb];
                if !ajl.is_zero() || !bjl.is_zero() {
                    let temp1 = alpha * bjl.conj_if(herm);
                    let temp2 = (alpha * ajl).conj_if(herm);
                    for i in triangle_rows(uplo, n, j) {
                        c[i + j * ldc] += a[i + l * lda] * temp1 + b[i + l * ldb] * temp2;
                    }
                    let jj = j + j * ldc;
                    c[jj] = diag(c[jj], herm);
                }
            }
        }
    } else {
        // A, B are k x n
        let alpha2 = alpha.conj_if(herm);
        for j in 0..n {
            for i in triangle_rows(uplo, n, j) {
                let mut temp1 = T::zero();
                let mut temp2 = T::zero();
                for l in 0..k {
                    temp1 += a[l + i * lda].conj_if(herm) * b[l + j * ldb];
                    temp2 += b[l + i * ldb].conj_if(herm) * a[l + j * lda];
                }
                let ij = i + j * ldc;
                let update = alpha * temp1 + alpha2 * temp2;
                let cij = if beta.is_zero() {
                    update
                } else {
                    update + beta * c[ij]
                };
                c[ij] = if i == j { diag(cij, herm) } else { cij };
            }
        }
    }
}

/// Double-precision SYR2K on the `uplo` triangle of C.
///
/// `NoTrans`: C := alpha*A*B^T + alpha*B*A^T + beta*C, `A`, `B` are `n x k`.
/// `Trans`/`ConjTrans`: C := alpha*A^T*B + alpha*B^T*A + beta*C, `A`, `B` are `k x n`.
pub fn dsyr2k(
    uplo: Uplo,
    trans: Transpose,
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
) {
    her2k(uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc, false);
}

/// Complex SYR2K, no conjugation.
pub fn zsyr2k(
    uplo: Uplo,
    trans: Transpose,
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
) {
    her2k(uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc, false);
}

/// Complex HER2K with real `beta`:
/// C := alpha*A*B^H + conj(alpha)*B*A^H + beta*C (or the `A^H*B` form).
pub fn zher2k(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    alpha: Complex64,
    a: &[Complex64],
    lda: usize,
    b: &[Complex64],
    ldb: usize,
    beta: f64,
    c: &mut [Complex64],
    ldc: usize,
) {
    her2k(
        uplo,
        trans,
        n,
        k,
        alpha,
        a,
        lda,
        b,
        ldb,
        Complex64::from_re(beta),
        c,
        ldc,
        true,
    );
}

//! Linear-algebra provider capability.
//!
//! Callers that want to swap in an accelerated implementation program
//! against [`Blas`] (usually as `&dyn Blas`) instead of the free functions.
//! Every method has a default body that runs the reference kernel of the same
//! name, so a provider overrides only the routines it actually accelerates
//! and inherits the rest.
//!
//! ```
//! use refblas::{reference, Blas};
//!
//! let blas: &dyn Blas = reference();
//! assert_eq!(blas.dasum(3, &[1.0, -2.0, 3.0], 1), 6.0);
//! ```

use num_complex::Complex64;
use refblas_core::{Diag, Result, Side, Transpose, Uplo};

use crate::{level1, level2, level3, transpose};

// ============================================================================
// Level 1
// ============================================================================

/// Vector-vector operations.
pub trait Level1 {
    fn dasum(&self, n: usize, x: &[f64], incx: isize) -> f64 {
        level1::dasum(n, x, incx)
    }
    fn dzasum(&self, n: usize, x: &[Complex64], incx: isize) -> f64 {
        level1::dzasum(n, x, incx)
    }
    fn daxpy(&self, n: usize, alpha: f64, x: &[f64], incx: isize, y: &mut [f64], incy: isize) {
        level1::daxpy(n, alpha, x, incx, y, incy)
    }
    fn zaxpy(
        &self,
        n: usize,
        alpha: Complex64,
        x: &[Complex64],
        incx: isize,
        y: &mut [Complex64],
        incy: isize,
    ) {
        level1::zaxpy(n, alpha, x, incx, y, incy)
    }
    fn dcopy(&self, n: usize, x: &[f64], incx: isize, y: &mut [f64], incy: isize) {
        level1::dcopy(n, x, incx, y, incy)
    }
    fn zcopy(&self, n: usize, x: &[Complex64], incx: isize, y: &mut [Complex64], incy: isize) {
        level1::zcopy(n, x, incx, y, incy)
    }
    fn dswap(&self, n: usize, x: &mut [f64], incx: isize, y: &mut [f64], incy: isize) {
        level1::dswap(n, x, incx, y, incy)
    }
    fn zswap(
        &self,
        n: usize,
        x: &mut [Complex64],
        incx: isize,
        y: &mut [Complex64],
        incy: isize,
    ) {
        level1::zswap(n, x, incx, y, incy)
    }
    fn dscal(&self, n: usize, alpha: f64, x: &mut [f64], incx: isize) {
        level1::dscal(n, alpha, x, incx)
    }
    fn zscal(&self, n: usize, alpha: Complex64, x: &mut [Complex64], incx: isize) {
        level1::zscal(n, alpha, x, incx)
    }
    fn zdscal(&self, n: usize, alpha: f64, x: &mut [Complex64], incx: isize) {
        level1::zdscal(n, alpha, x, incx)
    }
    fn ddot(&self, n: usize, x: &[f64], incx: isize, y: &[f64], incy: isize) -> f64 {
        level1::ddot(n, x, incx, y, incy)
    }
    fn zdotu(
        &self,
        n: usize,
        x: &[Complex64],
        incx: isize,
        y: &[Complex64],
        incy: isize,
    ) -> Complex64 {
        level1::zdotu(n, x, incx, y, incy)
    }
    fn zdotc(
        &self,
        n: usize,
        x: &[Complex64],
        incx: isize,
        y: &[Complex64],
        incy: isize,
    ) -> Complex64 {
        level1::zdotc(n, x, incx, y, incy)
    }
    fn dnrm2(&self, n: usize, x: &[f64], incx: isize) -> f64 {
        level1::dnrm2(n, x, incx)
    }
    fn dznrm2(&self, n: usize, x: &[Complex64], incx: isize) -> f64 {
        level1::dznrm2(n, x, incx)
    }
    fn idamax(&self, n: usize, x: &[f64], incx: isize) -> usize {
        level1::idamax(n, x, incx)
    }
    fn izamax(&self, n: usize, x: &[Complex64], incx: isize) -> usize {
        level1::izamax(n, x, incx)
    }
    fn izamin(&self, n: usize, x: &[Complex64], incx: isize) -> usize {
        level1::izamin(n, x, incx)
    }
    fn drotg(&self, a: &mut f64, b: &mut f64) -> (f64, f64) {
        level1::drotg(a, b)
    }
    fn zrotg(&self, a: &mut Complex64, b: Complex64) -> (f64, Complex64) {
        level1::zrotg(a, b)
    }
    fn drot(
        &self,
        n: usize,
        x: &mut [f64],
        incx: isize,
        y: &mut [f64],
        incy: isize,
        c: f64,
        s: f64,
    ) {
        level1::drot(n, x, incx, y, incy, c, s)
    }
    fn zdrot(
        &self,
        n: usize,
        x: &mut [Complex64],
        incx: isize,
        y: &mut [Complex64],
        incy: isize,
        c: f64,
        s: f64,
    ) {
        level1::zdrot(n, x, incx, y, incy, c, s)
    }
    fn drotmg(&self, d1: &mut f64, d2: &mut f64, x1: &mut f64, y1: f64) -> [f64; 5] {
        level1::drotmg(d1, d2, x1, y1)
    }
    fn drotm(
        &self,
        n: usize,
        x: &mut [f64],
        incx: isize,
        y: &mut [f64],
        incy: isize,
        param: &[f64; 5],
    ) {
        level1::drotm(n, x, incx, y, incy, param)
    }
}

// ============================================================================
// Level 2
// ============================================================================

/// Matrix-vector operations.
pub trait Level2 {
    fn dgemv(
        &self,
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
        level2::dgemv(trans, m, n, alpha, a, lda, x, incx, beta, y, incy)
    }
    fn zgemv(
        &self,
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
        level2::zgemv(trans, m, n, alpha, a, lda, x, incx, beta, y, incy)
    }
    fn dgbmv(
        &self,
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
        level2::dgbmv(trans, m, n, kl, ku, alpha, a, lda, x, incx, beta, y, incy)
    }
    fn zgbmv(
        &self,
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
        level2::zgbmv(trans, m, n, kl, ku, alpha, a, lda, x, incx, beta, y, incy)
    }
    fn dger(
        &self,
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
        level2::dger(m, n, alpha, x, incx, y, incy, a, lda)
    }
    fn zgeru(
        &self,
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
        level2::zgeru(m, n, alpha, x, incx, y, incy, a, lda)
    }
    fn zgerc(
        &self,
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
        level2::zgerc(m, n, alpha, x, incx, y, incy, a, lda)
    }
    fn dsymv(
        &self,
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
        level2::dsymv(uplo, n, alpha, a, lda, x, incx, beta, y, incy)
    }
    fn dsbmv(
        &self,
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
        level2::dsbmv(uplo, n, k, alpha, a, lda, x, incx, beta, y, incy)
    }
    fn dspmv(
        &self,
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
        level2::dspmv(uplo, n, alpha, ap, x, incx, beta, y, incy)
    }
    fn zhemv(
        &self,
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
        level2::zhemv(uplo, n, alpha, a, lda, x, incx, beta, y, incy)
    }
    fn zhbmv(
        &self,
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
        level2::zhbmv(uplo, n, k, alpha, a, lda, x, incx, beta, y, incy)
    }
    fn zhpmv(
        &self,
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
        level2::zhpmv(uplo, n, alpha, ap, x, incx, beta, y, incy)
    }
    fn dsyr(
        &self,
        uplo: Uplo,
        n: usize,
        alpha: f64,
        x: &[f64],
        incx: isize,
        a: &mut [f64],
        lda: usize,
    ) {
        level2::dsyr(uplo, n, alpha, x, incx, a, lda)
    }
    fn dspr(&self, uplo: Uplo, n: usize, alpha: f64, x: &[f64], incx: isize, ap: &mut [f64]) {
        level2::dspr(uplo, n, alpha, x, incx, ap)
    }
    fn zher(
        &self,
        uplo: Uplo,
        n: usize,
        alpha: f64,
        x: &[Complex64],
        incx: isize,
        a: &mut [Complex64],
        lda: usize,
    ) {
        level2::zher(uplo, n, alpha, x, incx, a, lda)
    }
    fn zhpr(
        &self,
        uplo: Uplo,
        n: usize,
        alpha: f64,
        x: &[Complex64],
        incx: isize,
        ap: &mut [Complex64],
    ) {
        level2::zhpr(uplo, n, alpha, x, incx, ap)
    }
    fn dsyr2(
        &self,
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
        level2::dsyr2(uplo, n, alpha, x, incx, y, incy, a, lda)
    }
    fn dspr2(
        &self,
        uplo: Uplo,
        n: usize,
        alpha: f64,
        x: &[f64],
        incx: isize,
        y: &[f64],
        incy: isize,
        ap: &mut [f64],
    ) {
        level2::dspr2(uplo, n, alpha, x, incx, y, incy, ap)
    }
    fn zher2(
        &self,
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
        level2::zher2(uplo, n, alpha, x, incx, y, incy, a, lda)
    }
    fn zhpr2(
        &self,
        uplo: Uplo,
        n: usize,
        alpha: Complex64,
        x: &[Complex64],
        incx: isize,
        y: &[Complex64],
        incy: isize,
        ap: &mut [Complex64],
    ) {
        level2::zhpr2(uplo, n, alpha, x, incx, y, incy, ap)
    }
    fn dtrmv(
        &self,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        n: usize,
        a: &[f64],
        lda: usize,
        x: &mut [f64],
        incx: isize,
    ) {
        level2::dtrmv(uplo, trans, diag, n, a, lda, x, incx)
    }
    fn dtbmv(
        &self,
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
        level2::dtbmv(uplo, trans, diag, n, k, a, lda, x, incx)
    }
    fn dtpmv(
        &self,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        n: usize,
        ap: &[f64],
        x: &mut [f64],
        incx: isize,
    ) {
        level2::dtpmv(uplo, trans, diag, n, ap, x, incx)
    }
    fn ztrmv(
        &self,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        n: usize,
        a: &[Complex64],
        lda: usize,
        x: &mut [Complex64],
        incx: isize,
    ) {
        level2::ztrmv(uplo, trans, diag, n, a, lda, x, incx)
    }
    fn ztbmv(
        &self,
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
        level2::ztbmv(uplo, trans, diag, n, k, a, lda, x, incx)
    }
    fn ztpmv(
        &self,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        n: usize,
        ap: &[Complex64],
        x: &mut [Complex64],
        incx: isize,
    ) {
        level2::ztpmv(uplo, trans, diag, n, ap, x, incx)
    }
    fn dtrsv(
        &self,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        n: usize,
        a: &[f64],
        lda: usize,
        x: &mut [f64],
        incx: isize,
    ) {
        level2::dtrsv(uplo, trans, diag, n, a, lda, x, incx)
    }
    fn dtbsv(
        &self,
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
        level2::dtbsv(uplo, trans, diag, n, k, a, lda, x, incx)
    }
    fn dtpsv(
        &self,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        n: usize,
        ap: &[f64],
        x: &mut [f64],
        incx: isize,
    ) {
        level2::dtpsv(uplo, trans, diag, n, ap, x, incx)
    }
    fn ztrsv(
        &self,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        n: usize,
        a: &[Complex64],
        lda: usize,
        x: &mut [Complex64],
        incx: isize,
    ) {
        level2::ztrsv(uplo, trans, diag, n, a, lda, x, incx)
    }
    fn ztbsv(
        &self,
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
        level2::ztbsv(uplo, trans, diag, n, k, a, lda, x, incx)
    }
    fn ztpsv(
        &self,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        n: usize,
        ap: &[Complex64],
        x: &mut [Complex64],
        incx: isize,
    ) {
        level2::ztpsv(uplo, trans, diag, n, ap, x, incx)
    }
}

// ============================================================================
// Level 3
// ============================================================================

/// Matrix-matrix operations and the in-place transpose.
pub trait Level3 {
    fn dgemm(
        &self,
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
        level3::dgemm(trans_a, trans_b, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
    }
    fn zgemm(
        &self,
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
        level3::zgemm(trans_a, trans_b, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
    }
    fn dsymm(
        &self,
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
        level3::dsymm(side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc)
    }
    fn zsymm(
        &self,
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
        level3::zsymm(side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc)
    }
    fn zhemm(
        &self,
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
        level3::zhemm(side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc)
    }
    fn dsyrk(
        &self,
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
        level3::dsyrk(uplo, trans, n, k, alpha, a, lda, beta, c, ldc)
    }
    fn zsyrk(
        &self,
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
        level3::zsyrk(uplo, trans, n, k, alpha, a, lda, beta, c, ldc)
    }
    fn zherk(
        &self,
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
        level3::zherk(uplo, trans, n, k, alpha, a, lda, beta, c, ldc)
    }
    fn dsyr2k(
        &self,
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
        level3::dsyr2k(uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
    }
    fn zsyr2k(
        &self,
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
        level3::zsyr2k(uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
    }
    fn zher2k(
        &self,
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
        level3::zher2k(uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
    }
    fn dtrmm(
        &self,
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
        level3::dtrmm(side, uplo, trans_a, diag, m, n, alpha, a, lda, b, ldb)
    }
    fn ztrmm(
        &self,
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
        level3::ztrmm(side, uplo, trans_a, diag, m, n, alpha, a, lda, b, ldb)
    }
    fn dtrsm(
        &self,
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
        level3::dtrsm(side, uplo, trans_a, diag, m, n, alpha, a, lda, b, ldb)
    }
    fn ztrsm(
        &self,
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
        level3::ztrsm(side, uplo, trans_a, diag, m, n, alpha, a, lda, b, ldb)
    }
    /// In-place transpose with caller-supplied scratch of
    /// [`aux_getrans_workspace_len`](crate::aux_getrans_workspace_len) elements.
    fn aux_dgetrans_with_workspace(
        &self,
        m: usize,
        n: usize,
        a: &mut [f64],
        work: &mut [f64],
    ) -> Result<()> {
        transpose::aux_dgetrans_with_workspace(m, n, a, work)
    }
    fn aux_zgetrans_with_workspace(
        &self,
        m: usize,
        n: usize,
        a: &mut [Complex64],
        work: &mut [Complex64],
    ) -> Result<()> {
        transpose::aux_zgetrans_with_workspace(m, n, a, work)
    }
}

/// A complete BLAS provider.
pub trait Blas: Level1 + Level2 + Level3 + Send + Sync {
    /// Short identifier, e.g. for diagnostics.
    fn name(&self) -> &'static str;
}

/// The pure-software reference provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceBlas;

impl Level1 for ReferenceBlas {}
impl Level2 for ReferenceBlas {}
impl Level3 for ReferenceBlas {}

impl Blas for ReferenceBlas {
    fn name(&self) -> &'static str {
        "reference"
    }
}

static REFERENCE: ReferenceBlas = ReferenceBlas;

/// Shared reference provider.
pub fn reference() -> &'static ReferenceBlas {
    &REFERENCE
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Overrides one routine, inherits everything else.
    struct CountingDot {
        calls: std::sync::atomic::AtomicUsize,
    }

    impl Level1 for CountingDot {
        fn ddot(&self, n: usize, x: &[f64], incx: isize, y: &[f64], incy: isize) -> f64 {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            level1::ddot(n, x, incx, y, incy)
        }
    }
    impl Level2 for CountingDot {}
    impl Level3 for CountingDot {}
    impl Blas for CountingDot {
        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[test]
    fn test_reference_is_object_safe() {
        let blas: &dyn Blas = reference();
        assert_eq!(blas.name(), "reference");
        assert_eq!(blas.ddot(2, &[1.0, 2.0], 1, &[3.0, 4.0], 1), 11.0);
    }

    #[test]
    fn test_partial_override() {
        let p = CountingDot {
            calls: std::sync::atomic::AtomicUsize::new(0),
        };
        let blas: &dyn Blas = &p;
        assert_eq!(blas.ddot(1, &[2.0], 1, &[3.0], 1), 6.0);
        assert_eq!(blas.dasum(2, &[-1.0, 1.0], 1), 2.0);
        assert_eq!(p.calls.load(std::sync::atomic::Ordering::Relaxed), 1);
    }

    #[test]
    fn test_level3_through_trait() {
        let blas = reference();
        let mut c = [0.0];
        blas.dgemm(
            Transpose::NoTrans,
            Transpose::NoTrans,
            1,
            1,
            1,
            2.0,
            &[3.0],
            1,
            &[4.0],
            1,
            0.0,
            &mut c,
            1,
        )
        .unwrap();
        assert_eq!(c[0], 24.0);

        let mut a = [1.0, 2.0];
        let mut work = [0.0; 2];
        blas.aux_dgetrans_with_workspace(2, 1, &mut a, &mut work).unwrap();
        assert_eq!(a, [1.0, 2.0]);
    }
}

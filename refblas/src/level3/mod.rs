//! BLAS Level 3: Matrix-matrix operations.
//!
//! Straight reference loop nests over column-major storage; no blocking, no
//! packing, no threads. Only `dgemm` and `zgemm` validate their arguments and
//! return [`Result`](refblas_core::Result); every other routine trusts the
//! caller and lets slice bounds checks catch undersized buffers.

mod general;
mod symmetric;
mod triangular;

pub use general::{dgemm, zgemm};
pub use symmetric::{dsymm, dsyr2k, dsyrk, zhemm, zher2k, zherk, zsymm, zsyr2k, zsyrk};
pub use triangular::{dtrmm, dtrsm, ztrmm, ztrsm};

use refblas_core::Element;

/// c[rows, j] := beta * c[rows, j], with `beta == 0` writing exact zeros.
#[inline]
pub(crate) fn scale_column<T: Element>(
    c: &mut [T],
    ldc: usize,
    j: usize,
    rows: std::ops::Range<usize>,
    beta: T,
) {
    if beta.is_one() {
        return;
    }
    let col = &mut c[j * ldc + rows.start..j * ldc + rows.end];
    if beta.is_zero() {
        col.fill(T::zero());
    } else {
        for v in col {
            *v *= beta;
        }
    }
}

/// b[rows, j] += alpha * b[rows, k] for two distinct columns of one matrix.
#[inline]
pub(crate) fn axpy_column<T: Element>(b: &mut [T], ldb: usize, m: usize, alpha: T, k: usize, j: usize) {
    for i in 0..m {
        let bik = b[i + k * ldb];
        b[i + j * ldb] += alpha * bik;
    }
}

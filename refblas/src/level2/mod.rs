//! BLAS Level 2: Matrix-vector operations.
//!
//! Column-major throughout. Symmetric, Hermitian and triangular kernels are
//! written once against [`Storage`], which hides whether the referenced
//! triangle is held in a full array, a band, or packed; the loop nests only
//! differ in the row ranges a band allows.

mod general;
mod symmetric;
mod triangular;

pub use general::{dgbmv, dgemv, dger, zgbmv, zgemv, zgerc, zgeru};
pub use symmetric::{
    dsbmv, dspmv, dspr, dspr2, dsymv, dsyr, dsyr2, zhbmv, zhemv, zhpmv, zhpr, zhpr2, zher, zher2,
};
pub use triangular::{
    dtbmv, dtbsv, dtpmv, dtpsv, dtrmv, dtrsv, ztbmv, ztbsv, ztpmv, ztpsv, ztrmv, ztrsv,
};

use refblas_core::stride::{packed_lower, packed_upper};
use refblas_core::{Element, Stride, Uplo};

/// Where the referenced triangle of an order-`n` matrix lives.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Storage {
    /// `a[i + j*lda]`.
    Full { lda: usize },
    /// `k` super- (upper) or sub-diagonals (lower). Upper puts the diagonal
    /// on band row `k`, lower on band row 0.
    Band { k: usize, lda: usize },
    /// Triangle packed column by column.
    Packed,
}

impl Storage {
    #[inline(always)]
    pub(crate) fn index(self, uplo: Uplo, n: usize, i: usize, j: usize) -> usize {
        match (self, uplo) {
            (Storage::Full { lda }, _) => i + j * lda,
            (Storage::Band { k, lda }, Uplo::Upper) => k + i - j + j * lda,
            (Storage::Band { lda, .. }, Uplo::Lower) => i - j + j * lda,
            (Storage::Packed, Uplo::Upper) => packed_upper(i, j),
            (Storage::Packed, Uplo::Lower) => packed_lower(n, i, j),
        }
    }

    /// First stored row above the diagonal of column `j`.
    #[inline(always)]
    pub(crate) fn first_row(self, j: usize) -> usize {
        match self {
            Storage::Band { k, .. } => j.saturating_sub(k),
            _ => 0,
        }
    }

    /// One past the last stored row below the diagonal of column `j`.
    #[inline(always)]
    pub(crate) fn end_row(self, n: usize, j: usize) -> usize {
        match self {
            Storage::Band { k, .. } => n.min(j + k + 1),
            _ => n,
        }
    }
}

/// y := beta * y, with `beta == 0` writing exact zeros.
pub(crate) fn scale_by_beta<T: Element>(len: usize, beta: T, y: &mut [T], incy: isize) {
    if beta.is_one() {
        return;
    }
    let sy = Stride::new(len, incy);
    if beta.is_zero() {
        for i in 0..len {
            y[sy.at(i)] = T::zero();
        }
    } else {
        for i in 0..len {
            y[sy.at(i)] *= beta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_index() {
        // n = 4, k = 1, lda = 2: upper band diagonal on row 1
        let s = Storage::Band { k: 1, lda: 2 };
        assert_eq!(s.index(Uplo::Upper, 4, 2, 2), 1 + 2 * 2);
        assert_eq!(s.index(Uplo::Upper, 4, 1, 2), 2 * 2);
        assert_eq!(s.index(Uplo::Lower, 4, 3, 2), 1 + 2 * 2);
        assert_eq!(s.first_row(3), 2);
        assert_eq!(s.end_row(4, 3), 4);
        assert_eq!(s.end_row(4, 1), 3);
    }

    #[test]
    fn test_beta_zero_clears_nan() {
        let mut y = vec![f64::NAN, 1.0, f64::NAN];
        scale_by_beta(2, 0.0, &mut y, 2);
        assert_eq!(y[0], 0.0);
        assert_eq!(y[1], 1.0);
        assert_eq!(y[2], 0.0);
    }
}

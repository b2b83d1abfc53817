// BLAS routines keep their classic argument lists, so many parameters are inherent to the API.
// Numeric kernels use index loops on strided arrays where iterators hurt readability.
#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! # refblas
//!
//! Pure Rust reference BLAS for `f64` and `Complex64`.
//!
//! No FFI, no SIMD, no threads. Every routine is the straightforward loop
//! nest of the classic reference BLAS, so results are deterministic for a
//! given input and serve as the correctness baseline for faster providers.
//!
//! ## BLAS Levels
//!
//! - **Level 1** (vector-vector): `dasum`, `daxpy`, `dcopy`, `dswap`, `dscal`,
//!   `ddot`, `dnrm2`, `idamax`, `drotg`, `drot`, `drotmg`, `drotm` and their
//!   complex counterparts
//! - **Level 2** (matrix-vector): general, banded, symmetric/Hermitian (full,
//!   banded, packed) and triangular (full, banded, packed) products, rank-1
//!   and rank-2 updates, triangular solves
//! - **Level 3** (matrix-matrix): `dgemm`, `dsymm`, `dsyrk`, `dsyr2k`, `dtrmm`,
//!   `dtrsm` and complex counterparts including `zhemm`, `zherk`, `zher2k`
//! - **Auxiliary**: in-place transpose `aux_dgetrans` / `aux_zgetrans`
//!
//! ## Memory Layout
//!
//! Matrices are column-major: element `(i, j)` of a matrix with leading
//! dimension `lda` lives at `a[i + j*lda]`. Vector increments are signed; a
//! negative increment walks the vector from its physical end.
//!
//! ```
//! use refblas::level3;
//! use refblas::Transpose;
//!
//! let a = [1.0, 0.0, 0.0, 1.0];
//! let b = [5.0, 7.0, 6.0, 8.0];
//! let mut c = [0.0; 4];
//! level3::dgemm(Transpose::NoTrans, Transpose::NoTrans, 2, 2, 2,
//!               1.0, &a, 2, &b, 2, 0.0, &mut c, 2).unwrap();
//! assert_eq!(c, b);
//! ```

pub mod level1;
pub mod level2;
pub mod level3;
pub mod provider;
pub mod transpose;

// Re-export the shared vocabulary for convenience
pub use refblas_core::{BlasError, Complex64, Diag, Result, Side, Transpose, Uplo};

pub use provider::{reference, Blas, Level1, Level2, Level3, ReferenceBlas};
pub use transpose::{aux_dgetrans, aux_getrans_workspace_len, aux_zgetrans};

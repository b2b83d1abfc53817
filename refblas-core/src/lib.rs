//! # refblas core
//!
//! Shared vocabulary of the refblas kernels:
//! - **Mode flags**: `Uplo`, `Transpose`, `Side`, `Diag`, with CBLAS codes and
//!   BLAS character parsing.
//! - **Addressing**: `Stride` for positive/negative vector increments, packed
//!   triangle offsets, buffer-length helpers.
//! - **Elements**: the `Element` trait over `f64` and `Complex64`.
//! - **Errors**: `BlasError` for the checked entry points.
//! - **RNG**: `SplitMix64` for reproducible test data.

pub mod error;
pub mod layout;
pub mod rng;
pub mod scalar;
pub mod stride;

pub use error::{BlasError, Result};
pub use layout::{Diag, Side, Transpose, Uplo};
pub use num_complex::Complex64;
pub use rng::SplitMix64;
pub use scalar::Element;
pub use stride::Stride;

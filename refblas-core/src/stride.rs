//! Logical-to-physical addressing for strided vectors and column-major,
//! packed and banded matrices.
//!
//! A vector of `n` logical elements with increment `inc` maps element `j` to
//! physical offset `k0 + j*inc`. For a negative increment the traversal starts
//! at the physical end, so `k0 = base + (n-1)*|inc|`. Kernels receive the
//! vector as a slice beginning at its start index and address it from base 0.
//!
//! Undersized buffers are a caller contract violation; the kernels index
//! slices directly and the bounds check panics.

use crate::error::{BlasError, Result};

/// Physical offset of logical element 0.
#[inline(always)]
pub fn first_index(base: usize, n: usize, inc: isize) -> usize {
    if inc < 0 && n > 0 {
        base + (n - 1) * inc.unsigned_abs()
    } else {
        base
    }
}

/// Physical addressing of a strided vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stride {
    start: usize,
    inc: isize,
}

impl Stride {
    /// Addressing of an `n`-element vector that starts at physical offset 0.
    #[inline(always)]
    pub fn new(n: usize, inc: isize) -> Self {
        Self::with_base(0, n, inc)
    }

    /// Addressing of an `n`-element vector whose lowest physical offset is `base`.
    #[inline(always)]
    pub fn with_base(base: usize, n: usize, inc: isize) -> Self {
        Self {
            start: first_index(base, n, inc),
            inc,
        }
    }

    /// Physical offset of logical element `j`.
    #[inline(always)]
    pub fn at(self, j: usize) -> usize {
        (self.start as isize + j as isize * self.inc) as usize
    }
}

/// Offset of `(i, j)`, `i <= j`, in an upper triangle packed column by column.
#[inline(always)]
pub fn packed_upper(i: usize, j: usize) -> usize {
    i + j * (j + 1) / 2
}

/// Offset of `(i, j)`, `i >= j`, in a lower triangle of order `n` packed
/// column by column (row by row of the transposed upper triangle).
#[inline(always)]
pub fn packed_lower(n: usize, i: usize, j: usize) -> usize {
    (i - j) + j * (2 * n - j + 1) / 2
}

/// Number of elements of a packed triangle of order `n`.
#[inline(always)]
pub fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Minimum slice length for a `rows x cols` column-major matrix with leading
/// dimension `ld`.
#[inline(always)]
pub fn required_len(rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        ld * (cols - 1) + rows
    }
}

/// Minimum slice length for an `n`-element vector with increment `inc`.
#[inline(always)]
pub fn vector_len(n: usize, inc: isize) -> usize {
    if n == 0 {
        0
    } else {
        1 + (n - 1) * inc.unsigned_abs()
    }
}

/// Fails unless `ld >= max(1, rows)`.
pub fn check_leading_dim(name: &'static str, ld: usize, rows: usize) -> Result<()> {
    if ld < rows.max(1) {
        return Err(BlasError::invalid(
            name,
            format!("leading dimension {ld} is smaller than max(1, {rows})"),
        ));
    }
    Ok(())
}

/// Fails unless a buffer of `len` elements covers `required` elements.
pub fn check_len(name: &'static str, len: usize, required: usize) -> Result<()> {
    if len < required {
        return Err(BlasError::invalid(
            name,
            format!("buffer holds {len} elements, {required} required"),
        ));
    }
    Ok(())
}

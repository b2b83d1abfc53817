//! In-place transposition of a non-square column-major matrix.
//!
//! An `m x n` matrix stored contiguously (`lda == m`) is rewritten as its
//! `n x m` transpose (`lda == n`) in the same buffer, using `max(m, n)`
//! elements of scratch. With `c = gcd(m, n)` and `b = m / c` the
//! permutation is decomposed into three passes, each of which only moves
//! elements within one column or one row and so needs a single
//! column- or row-sized buffer:
//!
//! 1. when `c > 1`, rotate row `i` left by `i / b` columns;
//! 2. scatter column `j`: element `y` goes to row
//!    `((j + y/b) mod n + y*n) mod m`;
//! 3. gather row `y`: column `x` takes column `(t mod n - (t div n)/b) mod n`
//!    with `t = x*m + y`.
//!
//! Every pass is a pure permutation, so transposing twice is exact.

use refblas_core::stride::check_len;
use refblas_core::{Complex64, Element, Result};

/// Scratch length required by the `*_with_workspace` transposes.
pub fn aux_getrans_workspace_len(m: usize, n: usize) -> usize {
    m.max(n)
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn getrans<T: Element>(m: usize, n: usize, a: &mut [T], work: &mut [T]) -> Result<()> {
    if m == 0 || n == 0 {
        return Ok(());
    }
    check_len("a", a.len(), m * n)?;
    check_len("work", work.len(), aux_getrans_workspace_len(m, n))?;

    let c = gcd(m, n);
    let b = m / c;

    if c > 1 {
        for i in 0..m {
            let q = i / b;
            for x in 0..n {
                work[x] = a[((x + q) % n) * m + i];
            }
            for x in 0..n {
                a[x * m + i] = work[x];
            }
        }
    }

    for j in 0..n {
        for y in 0..m {
            let d = ((j + y / b) % n + y * n) % m;
            work[d] = a[j * m + y];
        }
        a[j * m..j * m + m].copy_from_slice(&work[..m]);
    }

    for y in 0..m {
        for x in 0..n {
            let t = x * m + y;
            let src = (t % n + n - (t / n) / b) % n;
            work[x] = a[src * m + y];
        }
        for x in 0..n {
            a[x * m + y] = work[x];
        }
    }
    Ok(())
}

/// Transpose an `m x n` real matrix in place using caller-supplied scratch.
///
/// `a` holds at least `m*n` elements with `lda == m`; on return it holds the
/// `n x m` transpose with `lda == n`. `work` needs
/// [`aux_getrans_workspace_len`] elements, otherwise `InvalidArgument` is
/// returned and `a` is untouched.
pub fn aux_dgetrans_with_workspace(
    m: usize,
    n: usize,
    a: &mut [f64],
    work: &mut [f64],
) -> Result<()> {
    getrans(m, n, a, work)
}

/// Complex counterpart of [`aux_dgetrans_with_workspace`]. No conjugation.
pub fn aux_zgetrans_with_workspace(
    m: usize,
    n: usize,
    a: &mut [Complex64],
    work: &mut [Complex64],
) -> Result<()> {
    getrans(m, n, a, work)
}

/// Transpose an `m x n` real matrix in place, allocating the scratch.
pub fn aux_dgetrans(m: usize, n: usize, a: &mut [f64]) -> Result<()> {
    let mut work = vec![0.0; aux_getrans_workspace_len(m, n)];
    getrans(m, n, a, &mut work)
}

/// Transpose an `m x n` complex matrix in place, allocating the scratch.
pub fn aux_zgetrans(m: usize, n: usize, a: &mut [Complex64]) -> Result<()> {
    let mut work = vec![Complex64::new(0.0, 0.0); aux_getrans_workspace_len(m, n)];
    getrans(m, n, a, &mut work)
}

#[cfg(test)]
mod tests {
    use super::*;
    use refblas_core::BlasError;

    fn transposed(m: usize, n: usize, a: &[f64]) -> Vec<f64> {
        let mut t = vec![0.0; m * n];
        for i in 0..m {
            for j in 0..n {
                t[j + i * n] = a[i + j * m];
            }
        }
        t
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(7, 3), 1);
        assert_eq!(gcd(5, 5), 5);
    }

    #[test]
    fn test_2x3() {
        // [[1, 2, 3], [4, 5, 6]]
        let mut a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        aux_dgetrans(2, 3, &mut a).unwrap();
        assert_eq!(a, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_all_small_shapes() {
        for m in 1..=9 {
            for n in 1..=9 {
                let a0: Vec<f64> = (0..m * n).map(|v| v as f64).collect();
                let mut a = a0.clone();
                aux_dgetrans(m, n, &mut a).unwrap();
                assert_eq!(a, transposed(m, n, &a0), "{m}x{n}");
            }
        }
    }

    #[test]
    fn test_complex_no_conjugation() {
        let mut a = vec![Complex64::new(1.0, 1.0), Complex64::new(2.0, -1.0)];
        aux_zgetrans(2, 1, &mut a).unwrap();
        assert_eq!(a, vec![Complex64::new(1.0, 1.0), Complex64::new(2.0, -1.0)]);
    }

    #[test]
    fn test_short_workspace_rejected() {
        let mut a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut work = vec![0.0; 2];
        let err = aux_dgetrans_with_workspace(2, 3, &mut a, &mut work).unwrap_err();
        assert!(matches!(err, BlasError::InvalidArgument { name: "work", .. }));
        assert_eq!(a, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_empty_is_noop() {
        let mut a: Vec<f64> = vec![];
        aux_dgetrans(0, 5, &mut a).unwrap();
        assert_eq!(aux_getrans_workspace_len(3, 7), 7);
    }
}

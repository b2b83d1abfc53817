//! Deterministic PRNG for reproducible tests and benchmark inputs.
//!
//! `SplitMix64` is a fast 64-bit generator with a single `u64` of state.
//! Property tests of the kernels draw their matrices and vectors from it so
//! every failure replays bit for bit.

use num_complex::Complex64;

/// SplitMix64 PRNG.
///
/// # Example
/// ```
/// use refblas_core::SplitMix64;
///
/// let mut rng = SplitMix64::new(42);
/// let v = rng.next_f64();
/// assert!((0.0..1.0).contains(&v));
/// ```
#[derive(Debug, Clone)]
pub struct SplitMix64(u64);

impl SplitMix64 {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw u64.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform f64 in [0, 1), from the top 53 bits.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [-1, 1).
    #[inline]
    pub fn next_signed(&mut self) -> f64 {
        2.0 * self.next_f64() - 1.0
    }

    /// Complex value with both parts uniform in [-1, 1).
    #[inline]
    pub fn next_complex(&mut self) -> Complex64 {
        let re = self.next_signed();
        Complex64::new(re, self.next_signed())
    }

    /// `len` values uniform in [-1, 1).
    pub fn vec_f64(&mut self, len: usize) -> Vec<f64> {
        (0..len).map(|_| self.next_signed()).collect()
    }

    /// `len` complex values with parts uniform in [-1, 1).
    pub fn vec_c64(&mut self, len: usize) -> Vec<Complex64> {
        (0..len).map(|_| self.next_complex()).collect()
    }
}

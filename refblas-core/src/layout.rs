//! BLAS mode flags for column-major kernels.
//!
//! Each flag keeps its CBLAS numeric code (`#[repr(u32)]`) and parses from the
//! classic single-character BLAS argument. Defaults follow the reference
//! conventions: upper triangle, no transpose, left side, unit diagonal.

use crate::error::BlasError;

/// Transpose operation applied to a matrix operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Transpose {
    /// No transpose.
    #[default]
    NoTrans = 111,
    /// Transpose.
    Trans = 112,
    /// Conjugate transpose (plain transpose for real data).
    ConjTrans = 113,
}

impl Transpose {
    /// True for `Trans` and `ConjTrans`.
    #[inline(always)]
    pub fn is_trans(self) -> bool {
        self != Transpose::NoTrans
    }

    /// True only for `ConjTrans`.
    #[inline(always)]
    pub fn is_conj(self) -> bool {
        self == Transpose::ConjTrans
    }
}

/// Triangle of a symmetric, Hermitian or triangular matrix that is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Uplo {
    #[default]
    Upper = 121,
    Lower = 122,
}

/// Diagonal specifier for triangular matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Diag {
    NonUnit = 131,
    /// Diagonal entries are assumed to be one and never read.
    #[default]
    Unit = 132,
}

impl Diag {
    #[inline(always)]
    pub fn is_unit(self) -> bool {
        self == Diag::Unit
    }
}

/// Side on which the special matrix operand appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Side {
    #[default]
    Left = 141,
    Right = 142,
}

fn unsupported(flag: &'static str, value: impl std::fmt::Debug) -> BlasError {
    BlasError::NotImplemented {
        flag,
        value: format!("{value:?}"),
    }
}

impl TryFrom<char> for Transpose {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Transpose::NoTrans),
            'T' => Ok(Transpose::Trans),
            'C' => Ok(Transpose::ConjTrans),
            _ => Err(unsupported("transpose", c)),
        }
    }
}

impl TryFrom<u32> for Transpose {
    type Error = BlasError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            111 => Ok(Transpose::NoTrans),
            112 => Ok(Transpose::Trans),
            113 => Ok(Transpose::ConjTrans),
            _ => Err(unsupported("transpose", code)),
        }
    }
}

impl TryFrom<char> for Uplo {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'U' => Ok(Uplo::Upper),
            'L' => Ok(Uplo::Lower),
            _ => Err(unsupported("uplo", c)),
        }
    }
}

impl TryFrom<u32> for Uplo {
    type Error = BlasError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            121 => Ok(Uplo::Upper),
            122 => Ok(Uplo::Lower),
            _ => Err(unsupported("uplo", code)),
        }
    }
}

impl TryFrom<char> for Diag {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Diag::NonUnit),
            'U' => Ok(Diag::Unit),
            _ => Err(unsupported("diag", c)),
        }
    }
}

impl TryFrom<u32> for Diag {
    type Error = BlasError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            131 => Ok(Diag::NonUnit),
            132 => Ok(Diag::Unit),
            _ => Err(unsupported("diag", code)),
        }
    }
}

impl TryFrom<char> for Side {
    type Error = BlasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'L' => Ok(Side::Left),
            'R' => Ok(Side::Right),
            _ => Err(unsupported("side", c)),
        }
    }
}

impl TryFrom<u32> for Side {
    type Error = BlasError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            141 => Ok(Side::Left),
            142 => Ok(Side::Right),
            _ => Err(unsupported("side", code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Uplo::default(), Uplo::Upper);
        assert_eq!(Transpose::default(), Transpose::NoTrans);
        assert_eq!(Side::default(), Side::Left);
        assert_eq!(Diag::default(), Diag::Unit);
    }

    #[test]
    fn test_parse_chars() {
        assert_eq!(Transpose::try_from('c').unwrap(), Transpose::ConjTrans);
        assert_eq!(Uplo::try_from('L').unwrap(), Uplo::Lower);
        assert_eq!(Diag::try_from('n').unwrap(), Diag::NonUnit);
        assert_eq!(Side::try_from('R').unwrap(), Side::Right);
    }

    #[test]
    fn test_parse_codes_roundtrip() {
        for t in [Transpose::NoTrans, Transpose::Trans, Transpose::ConjTrans] {
            assert_eq!(Transpose::try_from(t as u32).unwrap(), t);
        }
        assert_eq!(Side::try_from(Side::Right as u32).unwrap(), Side::Right);
    }

    #[test]
    fn test_bad_flag_names_value() {
        let err = Side::try_from('X').unwrap_err();
        assert_eq!(
            err,
            BlasError::NotImplemented {
                flag: "side",
                value: "'X'".to_string()
            }
        );
        assert!(err.to_string().contains("side"));
        assert!(Uplo::try_from(7u32).is_err());
    }

    #[test]
    fn test_transpose_predicates() {
        assert!(!Transpose::NoTrans.is_trans());
        assert!(Transpose::Trans.is_trans());
        assert!(!Transpose::Trans.is_conj());
        assert!(Transpose::ConjTrans.is_conj());
    }
}

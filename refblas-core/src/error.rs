//! Error types for the few checked BLAS entry points.

use thiserror::Error;

/// Errors raised by checked entry points and flag parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlasError {
    /// A dimension, leading dimension, buffer or workspace is inconsistent.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A mode flag value has no kernel behind it.
    #[error("not implemented: {flag} = {value}")]
    NotImplemented { flag: &'static str, value: String },
}

impl BlasError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        BlasError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for checked BLAS operations.
pub type Result<T> = std::result::Result<T, BlasError>;

//! Error types for lup

use thiserror::Error;

/// Result type alias using lup's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the factorization and substitution routines.
///
/// The numeric core only reports these; whether to abort is up to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Storage request could not be satisfied
    #[error("allocation of {bytes} bytes failed")]
    Alloc {
        /// Requested size in bytes
        bytes: usize,
    },

    /// No nonzero pivot candidate in a column
    #[error("singular matrix (no nonzero pivot in column {column})")]
    Singular {
        /// Column in which pivoting failed
        column: usize,
    },

    /// Matrix of dimension zero
    #[error("matrix dimension must be positive")]
    EmptyMatrix,

    /// Operand length does not match the matrix dimension
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },
}

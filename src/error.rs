//! Error type for precondition violations.
//!
//! All three kinds are fail-fast: detected before any arithmetic begins and
//! surfaced immediately, never silently truncated or retried. Noise-induced
//! decoding corruption is *not* an error; decryption returns its best-effort
//! output (see [`crate::decrypt`]).

/// Errors raised by key generation, matrix operations and encryption.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Module rank k must be at least 1.
    #[error("invalid module rank {0}: must be at least 1")]
    InvalidRank(usize),

    /// A matrix operation was invoked on non-conforming shapes.
    #[error("dimension mismatch: {lhs_rows}x{lhs_cols} does not conform with {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// The message to encrypt must be exactly [`crate::params::MESSAGE_BYTES`] bytes.
    #[error("message must be exactly {expected} bytes, got {actual}")]
    InvalidMessageLength { expected: usize, actual: usize },
}

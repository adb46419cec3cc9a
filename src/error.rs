//! Error types for the IRC stream library.
//!
//! Framing, parsing, dispatch and encoding on an [`IrcStream`](crate::IrcStream)
//! are total and never fail. Errors only arise on the async codec path, where
//! the underlying reader can fail or a configured line limit is exceeded.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Line exceeded the maximum length configured on a codec.
    #[error("message too long: {actual} bytes (limit: {limit})")]
    MessageTooLong {
        /// Actual line length, terminator included.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },
}

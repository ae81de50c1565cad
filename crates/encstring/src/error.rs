use thiserror::Error;

/// Result alias used by the fallible operations of this crate.
pub type Result<T, E = StringError> = core::result::Result<T, E>;

/// Errors raised by positional mutation and by validating constructors.
///
/// Queries never fail: a search miss is `None` and out-of-range slice bounds
/// clamp. Every fallible mutator checks its arguments before touching the
/// buffer, so an `Err` always leaves the string unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringError {
    /// A code-point index passed to a positional mutation is past the end.
    #[error("index {index} out of range for string of length {len}")]
    OutOfRange {
        /// The rejected code-point index.
        index: usize,
        /// The code-point length of the string at the time of the call.
        len: usize,
    },
    /// Storage units do not form a complete sequence of encoded code points.
    #[error("invalid encoding: units valid up to offset {valid_up_to}")]
    InvalidEncoding {
        /// Offset, in storage units, of the first unit that failed to decode.
        valid_up_to: usize,
    },
}

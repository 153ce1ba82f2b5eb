//! Error types for the bitmsg codec.
//!
//! All operations return structured errors rather than panicking.
//! Validation failures abort the whole call; no partial output is
//! ever produced.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Codec: alphabet or bit-block validation during encode/decode
/// - Config: command-line configuration problems
/// - I/O: reading message files or writing output files
#[derive(Debug, Error)]
pub enum Error {
    /// Codec validation error (disallowed character, malformed block)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Codec validation errors.
///
/// `InvalidCharacter` covers both boundaries: a disallowed character in
/// the raw input (plaintext or binary string) and a decoded character
/// that falls outside the alphabet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A character outside the permitted set was found.
    ///
    /// `position` is the character index in the scanned text for raw
    /// input, or the block index for characters reconstructed by decode.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// A separated block does not contain exactly 8 binary digits
    #[error("block {block} has {length} digits, expected 8")]
    InvalidBlockLength { block: usize, length: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

//! bitmsg-core: Bit-string message codec over a restricted text alphabet
//!
//! This library converts human-readable messages to binary signals and
//! back:
//! - A message may contain letters, digits, space, comma, period, and
//!   exclamation mark, nothing else
//! - Each character becomes one 8-bit block (its ASCII code, MSB first)
//! - Blocks are joined with single spaces
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `alphabet`: the permitted character set and validation
//! - `bitio`: byte <-> 8-digit block conversions
//! - `codec`: the encode/decode operations and their contracts
//! - `error`: structured error types
//! - `metrics`: observable run behavior
//!
//! # Design Principles
//!
//! - **No panics**: all validation failures are structured errors
//! - **No partial output**: a bad character rejects the whole call
//! - **Pure**: both directions are stateless functions, safe to call
//!   from any number of threads
//!
//! # Example
//! ```
//! use bitmsg_core::codec::{encode, decode};
//!
//! let binary = encode("Hi!").unwrap();
//! assert_eq!(binary, "01001000 01101001 00100001");
//! assert_eq!(decode(&binary).unwrap(), "Hi!");
//! ```

pub mod alphabet;
pub mod bitio;
pub mod codec;
pub mod error;
pub mod metrics;

// Re-export commonly used types
pub use error::{CodecError, Error, Result};

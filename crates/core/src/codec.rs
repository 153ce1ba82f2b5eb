//! Encoding and decoding between plaintext messages and binary strings.
//!
//! Human-readable messages over the restricted alphabet are translated
//! to space-separated 8-bit blocks and back. The two operations are
//! exact inverses over the valid input domain.
//!
//! # Encoding Rules
//!
//! ```text
//! "ABC" -> 65, 66, 67 -> "01000001 01000010 01000011"
//! "Hi!" -> 72, 105, 33 -> "01001000 01101001 00100001"
//! ```
//!
//! 1. Every character of the message must belong to the alphabet.
//! 2. Each character maps to its ASCII code.
//! 3. Each code becomes an 8-digit binary block, MSB first.
//! 4. Blocks are joined with a single space, no leading or trailing
//!    separator.
//!
//! Decoding runs the same steps in reverse and applies a second,
//! independent alphabet check to the reconstructed message, so a binary
//! string that parses cleanly but spells a control character is still
//! rejected.
//!
//! # Determinism
//!
//! Both operations are pure functions of their input. No state, no I/O.

use crate::alphabet;
use crate::bitio;
use crate::error::CodecError;

/// The block separator in binary-string form.
pub const SEPARATOR: char = ' ';

/// Encode a plaintext message into a binary string.
///
/// # Arguments
/// - `message`: text where every character is one of the allowed symbols
///
/// # Returns
/// Space-separated 8-bit blocks, one per input character. An empty
/// message encodes to an empty string.
///
/// # Errors
/// `CodecError::InvalidCharacter` if the message contains a character
/// outside the alphabet. No partial output is produced.
pub fn encode(message: &str) -> Result<String, CodecError> {
    alphabet::validate(message)?;

    let mut binary = String::with_capacity(message.len() * (bitio::BLOCK_BITS + 1));
    for (i, ch) in message.chars().enumerate() {
        if i > 0 {
            binary.push(SEPARATOR);
        }
        // Validation guarantees ASCII, so the cast is the character code.
        binary.push_str(&bitio::encode_byte(ch as u8));
    }

    Ok(binary)
}

/// Decode a binary string back into a plaintext message.
///
/// Inverse of [`encode`]: `decode(encode(m)) == m` for every valid
/// message `m`, and `encode(decode(b)) == b` for every well-formed
/// binary string `b`.
///
/// # Arguments
/// - `binary`: '0'/'1' digits in 8-digit blocks joined by single spaces
///
/// # Errors
/// - `CodecError::InvalidCharacter` if the raw input contains anything
///   other than '0', '1', or the separator
/// - `CodecError::InvalidBlockLength` if a separated block is not
///   exactly 8 digits long
/// - `CodecError::InvalidCharacter` if a decoded character falls
///   outside the alphabet (second validation pass, over the
///   reconstructed message; `position` is the block index)
pub fn decode(binary: &str) -> Result<String, CodecError> {
    if binary.is_empty() {
        return Ok(String::new());
    }

    // First pass: the raw signal may only contain digits and separators.
    for (position, ch) in binary.chars().enumerate() {
        if ch != '0' && ch != '1' && ch != SEPARATOR {
            return Err(CodecError::InvalidCharacter { ch, position });
        }
    }

    let mut message = String::new();
    for (index, block) in binary.split(SEPARATOR).enumerate() {
        let value = bitio::decode_block(block, index)?;
        message.push(value as char);
    }

    // Second pass: the reconstructed message must itself be valid
    // plaintext. One character per block, so the reported position is
    // the offending block index.
    alphabet::validate(&message)?;

    Ok(message)
}

/// Encode with absent-input pass-through.
///
/// `None` in, `None` out; absent input is not an error. Callers holding
/// optional message fields can delegate here instead of unwrapping.
pub fn encode_opt(message: Option<&str>) -> Result<Option<String>, CodecError> {
    message.map(encode).transpose()
}

/// Decode with absent-input pass-through. See [`encode_opt`].
pub fn decode_opt(binary: Option<&str>) -> Result<Option<String>, CodecError> {
    binary.map(decode).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode("ABC").unwrap(), "01000001 01000010 01000011");
        assert_eq!(encode("Hi!").unwrap(), "01001000 01101001 00100001");
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(decode("01000001 01000010 01000011").unwrap(), "ABC");
        assert_eq!(decode("01001000 01101001 00100001").unwrap(), "Hi!");
    }

    #[test]
    fn test_empty_round_trip() {
        assert_eq!(encode("").unwrap(), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_single_character() {
        assert_eq!(encode("A").unwrap(), "01000001");
        assert_eq!(decode("01000001").unwrap(), "A");
    }

    #[test]
    fn test_no_leading_or_trailing_separator() {
        let binary = encode("ab").unwrap();
        assert!(!binary.starts_with(SEPARATOR));
        assert!(!binary.ends_with(SEPARATOR));
        assert_eq!(binary.matches(SEPARATOR).count(), 1);
    }

    #[test]
    fn test_encode_rejects_disallowed_character() {
        let err = encode("A?B").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidCharacter {
                ch: '?',
                position: 1
            }
        );
    }

    #[test]
    fn test_decode_rejects_non_binary_character() {
        let err = decode("0100000X 01000010").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidCharacter {
                ch: 'X',
                position: 7
            }
        );
    }

    #[test]
    fn test_decode_rejects_control_character() {
        // 00000111 is BEL, parses cleanly but is not valid plaintext.
        let err = decode("01000001 00000111").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidCharacter {
                ch: '\u{7}',
                position: 1
            }
        );
    }

    #[test]
    fn test_decode_rejects_high_value_block() {
        // 255 maps outside ASCII entirely.
        assert!(matches!(
            decode("11111111"),
            Err(CodecError::InvalidCharacter { position: 0, .. })
        ));
    }

    #[test]
    fn test_decode_rejects_short_block() {
        let err = decode("01000001 010").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidBlockLength {
                block: 1,
                length: 3
            }
        );
    }

    #[test]
    fn test_decode_rejects_unseparated_blocks() {
        // Two blocks fused together read as one 16-digit block.
        assert!(matches!(
            decode("0100000101000010"),
            Err(CodecError::InvalidBlockLength {
                block: 0,
                length: 16
            })
        ));
    }

    #[test]
    fn test_decode_rejects_doubled_separator() {
        // The empty block between the separators has length 0.
        let err = decode("01000001  01000010").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidBlockLength {
                block: 1,
                length: 0
            }
        );
    }

    #[test]
    fn test_decode_rejects_trailing_separator() {
        assert!(matches!(
            decode("01000001 "),
            Err(CodecError::InvalidBlockLength {
                block: 1,
                length: 0
            })
        ));
    }

    #[test]
    fn test_round_trip_sentence() {
        let message = "This, is a test 19!.";
        let binary = encode(message).unwrap();
        assert_eq!(decode(&binary).unwrap(), message);
    }

    #[test]
    fn test_binary_round_trip() {
        let binary = "01001000 01100101 01101100 01101100 01101111";
        assert_eq!(encode(&decode(binary).unwrap()).unwrap(), binary);
    }

    #[test]
    fn test_opt_pass_through() {
        assert_eq!(encode_opt(None).unwrap(), None);
        assert_eq!(decode_opt(None).unwrap(), None);
        assert_eq!(encode_opt(Some("Hi!")).unwrap().as_deref(), Some("01001000 01101001 00100001"));
        assert_eq!(decode_opt(Some("01000001")).unwrap().as_deref(), Some("A"));
    }

    #[test]
    fn test_opt_propagates_errors() {
        assert!(encode_opt(Some("nope?")).is_err());
        assert!(decode_opt(Some("abc")).is_err());
    }
}

//! Sample message generation for demonstration runs.
//!
//! When no input is specified, we generate a message that exercises the
//! whole alphabet: word-shaped letter runs, digits, and the permitted
//! punctuation.
//!
//! # Design
//!
//! Generated text looks vaguely like prose rather than uniform noise,
//! so the encoded output is readable block by block. Generation is
//! deterministic for a given seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Generate a sample message of exactly `len` characters.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `len`: number of characters to generate
///
/// Every character is drawn from the permitted alphabet.
pub fn generate_message(seed: u64, len: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut message = String::with_capacity(len);

    while message.len() < len {
        let word_len = rng.gen_range(2..=9).min(len - message.len());

        // Words start uppercase now and then.
        for i in 0..word_len {
            let table = if i == 0 && rng.gen_bool(0.2) { UPPER } else { LOWER };
            message.push(table[rng.gen_range(0..table.len())] as char);
        }

        if message.len() >= len {
            break;
        }

        // Occasionally a number instead of the next word.
        if rng.gen_bool(0.1) {
            message.push(' ');
            let digit_len = rng.gen_range(1..=4).min(len.saturating_sub(message.len()));
            for _ in 0..digit_len {
                message.push(DIGITS[rng.gen_range(0..DIGITS.len())] as char);
            }
            if message.len() >= len {
                break;
            }
        }

        // Word boundary: usually a space, sometimes punctuation first.
        match rng.gen_range(0..10) {
            0 => message.push_str(", "),
            1 => message.push_str(". "),
            2 => message.push_str("! "),
            _ => message.push(' '),
        }
    }

    message.truncate(len);
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitmsg_core::alphabet;

    #[test]
    fn test_exact_length() {
        for len in [0, 1, 2, 10, 64, 1000] {
            let message = generate_message(7, len);
            assert_eq!(message.chars().count(), len);
        }
    }

    #[test]
    fn test_determinism() {
        let a = generate_message(12345, 500);
        let b = generate_message(12345, 500);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let a = generate_message(1, 200);
        let b = generate_message(2, 200);
        assert_ne!(a, b);
    }

    #[test]
    fn test_only_alphabet_characters() {
        let message = generate_message(99, 2000);
        for ch in message.chars() {
            assert!(alphabet::is_allowed(ch), "{ch:?} outside alphabet");
        }
    }

    #[test]
    fn test_generated_message_encodes() {
        let message = generate_message(4242, 300);
        assert!(bitmsg_core::codec::encode(&message).is_ok());
    }
}

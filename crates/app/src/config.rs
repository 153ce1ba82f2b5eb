//! Configuration for the bitmsg demonstration CLI.
//!
//! Handles parsing command-line arguments and generating sensible
//! defaults (including a randomized sample message that is reproducible
//! with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: it then encodes a
//! generated sample message, decodes it back, and verifies the round
//! trip. All defaults are printed so runs are reproducible.

use std::path::PathBuf;

/// Which direction the run exercises first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plaintext in, binary string out (then decoded back to verify)
    Encode,
    /// Binary string in, plaintext out (then re-encoded to verify)
    Decode,
}

/// Complete configuration for a codec run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Input ===
    /// Direction of the primary operation
    pub mode: Mode,

    /// Inline input text (message or binary string, depending on mode)
    pub input_text: Option<String>,

    /// Read the input from this file instead
    pub input_file: Option<PathBuf>,

    // === Output ===
    /// Write the primary output here instead of stdout
    pub output_file: Option<PathBuf>,

    // === Generation ===
    /// Seed for sample message generation
    pub seed: u64,

    /// Length of the generated sample message (encode mode, no input)
    pub gen_chars: usize,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no input is provided, encode mode generates a sample message.
    /// If --seed is provided, generation is fully deterministic.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode = Mode::Encode;
        let mut input_text: Option<String> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut gen_chars: Option<usize> = None;
        let mut print_config = false;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--encode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--encode requires a message".to_string());
                    }
                    mode = Mode::Encode;
                    input_text = Some(args[i].clone());
                }
                "--decode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--decode requires a binary string".to_string());
                    }
                    mode = Mode::Decode;
                    input_text = Some(args[i].clone());
                }
                "--decode-file" => {
                    mode = Mode::Decode;
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--gen-chars" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--gen-chars requires a number".to_string());
                    }
                    gen_chars = Some(args[i].parse().map_err(|_| "invalid gen-chars")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        if input_text.is_some() && input_file.is_some() {
            return Err("give either an inline input or --in, not both".to_string());
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            mode,
            input_text,
            input_file,
            output_file,
            seed,
            gen_chars: gen_chars.unwrap_or(64),
            print_config,
            print_metrics,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Mode: {:?}", self.mode);
        match (&self.input_text, &self.input_file) {
            (Some(text), _) => println!("Input: inline ({} chars)", text.chars().count()),
            (None, Some(path)) => println!("Input: file {}", path.display()),
            (None, None) => println!("Input: generated sample ({} chars)", self.gen_chars),
        }
        match &self.output_file {
            Some(path) => println!("Output: file {}", path.display()),
            None => println!("Output: stdout"),
        }
        println!("Seed: {}", self.seed);
        println!();
    }
}

fn print_help() {
    println!("bitmsg: encode messages to binary signals and back");
    println!();
    println!("USAGE:");
    println!("    bitmsg [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --encode <TEXT>     Encode the given message");
    println!("    --decode <BITS>     Decode the given binary string");
    println!("    --in <PATH>         Read the input from a file instead");
    println!("    --decode-file       Treat --in content as a binary string");
    println!("    --out <PATH>        Write the primary output to a file");
    println!();
    println!("    --seed <N>          Random seed for sample generation");
    println!("    --gen-chars <N>     Generated sample length (default: 64)");
    println!();
    println!("    --print-config      Print resolved configuration");
    println!("    --no-metrics        Don't print metrics summary");
    println!("    --help, -h          Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    bitmsg                              # Encode a generated sample");
    println!("    bitmsg --seed 42                    # Deterministic sample");
    println!("    bitmsg --encode \"Hi!\"               # Encode a specific message");
    println!("    bitmsg --decode \"01000001\"          # Decode a binary string");
    println!("    bitmsg --in msg.txt --out bits.txt  # File to file");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&[]).unwrap();
        assert_eq!(config.mode, Mode::Encode);
        assert!(config.input_text.is_none());
        assert!(config.input_file.is_none());
        assert_eq!(config.gen_chars, 64);
        assert!(config.print_metrics);
    }

    #[test]
    fn test_encode_flag() {
        let config = Config::from_args(&args(&["--encode", "Hi!"])).unwrap();
        assert_eq!(config.mode, Mode::Encode);
        assert_eq!(config.input_text.as_deref(), Some("Hi!"));
    }

    #[test]
    fn test_decode_flag() {
        let config = Config::from_args(&args(&["--decode", "01000001"])).unwrap();
        assert_eq!(config.mode, Mode::Decode);
        assert_eq!(config.input_text.as_deref(), Some("01000001"));
    }

    #[test]
    fn test_seed_is_deterministic() {
        let config = Config::from_args(&args(&["--seed", "42"])).unwrap();
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_missing_value() {
        assert!(Config::from_args(&args(&["--encode"])).is_err());
        assert!(Config::from_args(&args(&["--seed"])).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_inline_and_file_conflict() {
        let result = Config::from_args(&args(&["--encode", "Hi!", "--in", "msg.txt"]));
        assert!(result.is_err());
    }
}

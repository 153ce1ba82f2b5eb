//! bitmsg: demonstration CLI for the bit-string message codec.
//!
//! Exercises the two codec operations end to end: obtain a message
//! (inline, from a file, or generated), run the primary direction,
//! run the opposite direction on the result, and verify that the round
//! trip reproduces the original exactly.

mod config;
mod input_gen;

use bitmsg_core::codec;
use bitmsg_core::metrics::Metrics;
use bitmsg_core::{Error, Result};
use config::{Config, Mode};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            return ExitCode::FAILURE;
        }
    };

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Run one codec round. Returns whether the round-trip verification held.
fn run(config: &Config) -> Result<bool> {
    let mut metrics = Metrics::new();
    let input = resolve_input(config)?;

    let round_trip_ok = match config.mode {
        Mode::Encode => {
            let binary = match codec::encode(&input) {
                Ok(binary) => binary,
                Err(err) => {
                    metrics.record_rejected();
                    return Err(err.into());
                }
            };
            metrics.record_encode(input.chars().count());

            let decoded = codec::decode(&binary)?;
            metrics.record_decode(block_count(&binary));

            write_output(config, &binary)?;
            println!("original= {input}");
            println!("encoded=  {binary}");
            println!("decoded=  {decoded}");

            decoded == input
        }
        Mode::Decode => {
            let message = match codec::decode(&input) {
                Ok(message) => message,
                Err(err) => {
                    metrics.record_rejected();
                    return Err(err.into());
                }
            };
            metrics.record_decode(block_count(&input));

            let reencoded = codec::encode(&message)?;
            metrics.record_encode(message.chars().count());

            write_output(config, &message)?;
            println!("binary=    {input}");
            println!("decoded=   {message}");
            println!("reencoded= {reencoded}");

            reencoded == input
        }
    };

    metrics.complete();
    if config.print_metrics {
        metrics.print_summary();
    }
    metrics.print_result(round_trip_ok);

    Ok(round_trip_ok)
}

/// Resolve the run's input: inline flag, file, or generated sample.
fn resolve_input(config: &Config) -> Result<String> {
    if let Some(text) = &config.input_text {
        return Ok(text.clone());
    }

    if let Some(path) = &config.input_file {
        let content = std::fs::read_to_string(path)?;
        // Editors leave a trailing newline, which is not alphabet text.
        return Ok(content
            .trim_end_matches(|c| c == '\n' || c == '\r')
            .to_string());
    }

    match config.mode {
        Mode::Encode => {
            let message = input_gen::generate_message(config.seed, config.gen_chars);
            println!("generated sample message (seed {}):", config.seed);
            Ok(message)
        }
        Mode::Decode => Err(Error::Config(
            "decode mode needs --decode <BITS> or --in <PATH>".to_string(),
        )),
    }
}

/// Number of 8-bit blocks in a well-formed binary string.
fn block_count(binary: &str) -> usize {
    if binary.is_empty() {
        0
    } else {
        binary.split(' ').count()
    }
}

/// Write the primary output to the configured file, if any.
fn write_output(config: &Config, output: &str) -> Result<()> {
    if let Some(path) = &config.output_file {
        std::fs::write(path, output)?;
        println!("wrote {} chars to {}", output.chars().count(), path.display());
    }
    Ok(())
}

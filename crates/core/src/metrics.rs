//! Metrics collection and reporting for codec runs.
//!
//! Observable insight into what a run did: how many messages passed
//! through each direction, how many characters and blocks were
//! produced, how many inputs were rejected, and how long it took.
//!
//! # Thread Safety
//!
//! The `Metrics` struct is NOT thread-safe. The codec itself is pure
//! and freely callable from multiple threads; metrics are an explicit,
//! single-threaded concern of the caller. For multi-threaded use, keep
//! per-thread metrics and merge at the end.

use std::time::{Duration, Instant};

/// Counters for a batch of codec operations.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Encoding ===
    /// Messages successfully encoded
    pub messages_encoded: u64,

    /// Plaintext characters consumed by encode
    pub chars_encoded: u64,

    /// Binary-string characters emitted (digits plus separators)
    pub binary_chars_emitted: u64,

    // === Decoding ===
    /// Binary strings successfully decoded
    pub messages_decoded: u64,

    /// Blocks consumed by decode
    pub blocks_decoded: u64,

    // === Failures ===
    /// Inputs rejected by validation (either direction)
    pub inputs_rejected: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            messages_encoded: 0,
            chars_encoded: 0,
            binary_chars_emitted: 0,
            messages_decoded: 0,
            blocks_decoded: 0,
            inputs_rejected: 0,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Record one successful encode of `chars` characters.
    pub fn record_encode(&mut self, chars: usize) {
        self.messages_encoded += 1;
        self.chars_encoded += chars as u64;
        // 8 digits per character, one separator between blocks.
        self.binary_chars_emitted += (chars * 8 + chars.saturating_sub(1)) as u64;
    }

    /// Record one successful decode of `blocks` blocks.
    pub fn record_decode(&mut self, blocks: usize) {
        self.messages_decoded += 1;
        self.blocks_decoded += blocks as u64;
    }

    /// Record a rejected input.
    pub fn record_rejected(&mut self) {
        self.inputs_rejected += 1;
    }

    /// Binary-string characters emitted per plaintext character.
    ///
    /// 8 digits plus the separator share, so just under 9.0 for any
    /// nonempty message. Returns 0.0 if nothing was encoded.
    pub fn expansion_ratio(&self) -> f64 {
        if self.chars_encoded == 0 {
            0.0
        } else {
            self.binary_chars_emitted as f64 / self.chars_encoded as f64
        }
    }

    /// Characters processed per second across both directions.
    pub fn throughput_cps(&self) -> f64 {
        let duration_secs = self.duration().as_secs_f64();
        if duration_secs == 0.0 {
            0.0
        } else {
            (self.chars_encoded + self.blocks_decoded) as f64 / duration_secs
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Codec Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();
        println!("Messages encoded: {}", self.messages_encoded);
        println!("Characters encoded: {}", self.chars_encoded);
        println!("Messages decoded: {}", self.messages_decoded);
        println!("Blocks decoded: {}", self.blocks_decoded);
        println!("Inputs rejected: {}", self.inputs_rejected);
        println!();
        println!("Expansion: {:.2} binary chars per plaintext char", self.expansion_ratio());
        println!("Throughput: {:.0} chars/s", self.throughput_cps());
    }

    /// Print just the final result (pass/fail).
    pub fn print_result(&self, round_trip_ok: bool) {
        if round_trip_ok && self.inputs_rejected == 0 {
            println!("✓ Codec run completed successfully");
            println!(
                "  {} chars encoded, {} blocks decoded in {} ms",
                self.chars_encoded,
                self.blocks_decoded,
                self.duration().as_millis()
            );
        } else if !round_trip_ok {
            println!("✗ Codec run failed: round-trip mismatch");
        } else {
            println!("✗ Codec run failed: {} inputs rejected", self.inputs_rejected);
        }
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             messages_encoded={}\n\
             chars_encoded={}\n\
             binary_chars_emitted={}\n\
             messages_decoded={}\n\
             blocks_decoded={}\n\
             inputs_rejected={}\n\
             expansion_ratio={:.4}\n",
            self.duration().as_millis(),
            self.messages_encoded,
            self.chars_encoded,
            self.binary_chars_emitted,
            self.messages_decoded,
            self.blocks_decoded,
            self.inputs_rejected,
            self.expansion_ratio(),
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert!(metrics.end_time.is_none());
        assert_eq!(metrics.messages_encoded, 0);
    }

    #[test]
    fn test_record_encode() {
        let mut metrics = Metrics::new();
        metrics.record_encode(3);
        metrics.record_encode(5);

        assert_eq!(metrics.messages_encoded, 2);
        assert_eq!(metrics.chars_encoded, 8);
    }

    #[test]
    fn test_record_decode() {
        let mut metrics = Metrics::new();
        metrics.record_decode(4);

        assert_eq!(metrics.messages_decoded, 1);
        assert_eq!(metrics.blocks_decoded, 4);
    }

    #[test]
    fn test_expansion_ratio_empty() {
        let metrics = Metrics::new();
        assert_eq!(metrics.expansion_ratio(), 0.0);
    }

    #[test]
    fn test_expansion_ratio_single_message() {
        let mut metrics = Metrics::new();
        // "ABC" -> 24 digits + 2 separators = 26 chars out for 3 in.
        metrics.record_encode(3);

        let ratio = metrics.expansion_ratio();
        assert!((ratio - 26.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_export_text() {
        let mut metrics = Metrics::new();
        metrics.record_encode(10);
        metrics.record_decode(10);
        metrics.record_rejected();

        let text = metrics.export_text();
        assert!(text.contains("messages_encoded=1"));
        assert!(text.contains("chars_encoded=10"));
        assert!(text.contains("blocks_decoded=10"));
        assert!(text.contains("inputs_rejected=1"));
    }
}

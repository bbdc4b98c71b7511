//! Decode statistics.
//!
//! The decoder never gives up on a stream by itself; these counters let the
//! caller decide when a link has failed, for example when
//! `consecutive_errors` passes a threshold.
//!
//! # Thread Safety
//!
//! `DecodeStats` is plain data owned by one decoder. To aggregate several
//! streams, clone each decoder's stats and [`merge`](DecodeStats::merge)
//! them.

use std::fmt;

use crate::error::DecodeError;
use crate::value::CodeValue;

/// Counters over the symbols a decoder has processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Symbols processed
    pub symbols: u64,

    /// Data values decoded
    pub data: u64,

    /// Control values decoded
    pub control: u64,

    /// Symbols not in the code table
    pub invalid: u64,

    /// Symbols valid only under the other running disparity
    pub mismatches: u64,

    /// Errors since the last good symbol
    pub consecutive_errors: u64,

    /// Longest run of consecutive errors seen
    pub max_consecutive_errors: u64,
}

impl DecodeStats {
    /// Create zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one decode outcome.
    pub fn record(&mut self, outcome: &Result<CodeValue, DecodeError>) {
        self.symbols += 1;
        match outcome {
            Ok(value) => {
                if value.is_control() {
                    self.control += 1;
                } else {
                    self.data += 1;
                }
                self.consecutive_errors = 0;
            }
            Err(err) => {
                match err {
                    DecodeError::InvalidSymbol { .. } => self.invalid += 1,
                    DecodeError::DisparityMismatch { .. } => self.mismatches += 1,
                }
                self.consecutive_errors += 1;
                self.max_consecutive_errors = self.max_consecutive_errors.max(self.consecutive_errors);
            }
        }
    }

    /// Total errors of either kind.
    pub fn errors(&self) -> u64 {
        self.invalid + self.mismatches
    }

    /// Fraction of symbols that produced an error.
    ///
    /// Returns 0.0 if nothing has been decoded.
    pub fn error_rate(&self) -> f64 {
        if self.symbols == 0 {
            0.0
        } else {
            self.errors() as f64 / self.symbols as f64
        }
    }

    /// Fold another stream's counters into these.
    ///
    /// Run lengths are per stream, so the merged maximum is the larger of
    /// the two and the current run is left as is.
    pub fn merge(&mut self, other: &DecodeStats) {
        self.symbols += other.symbols;
        self.data += other.data;
        self.control += other.control;
        self.invalid += other.invalid;
        self.mismatches += other.mismatches;
        self.max_consecutive_errors = self.max_consecutive_errors.max(other.max_consecutive_errors);
    }

    /// Export as `key=value` lines (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "symbols={}\n\
             data={}\n\
             control={}\n\
             invalid={}\n\
             mismatches={}\n\
             error_rate={:.4}\n\
             max_consecutive_errors={}\n",
            self.symbols,
            self.data,
            self.control,
            self.invalid,
            self.mismatches,
            self.error_rate(),
            self.max_consecutive_errors,
        )
    }
}

impl fmt::Display for DecodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} symbols ({} data, {} control), {} invalid, {} mismatched ({:.2}% errors)",
            self.symbols,
            self.data,
            self.control,
            self.invalid,
            self.mismatches,
            self.error_rate() * 100.0
        )
    }
}

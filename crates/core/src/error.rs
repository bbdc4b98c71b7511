//! Error types for the 8b/10b codec.
//!
//! Construction and encode failures are returned through [`Error`]. Decode
//! failures are per-symbol and travel inline in the decoder's output as
//! [`DecodeError`], so one bad symbol never stops a stream.

use thiserror::Error;

use crate::symbol::{Disparity, Symbol};
use crate::value::CodeValue;

/// Top-level error type for all fallible operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The code table failed validation and must not be used.
    #[error("code table integrity error: {0}")]
    TableIntegrity(#[from] TableIntegrityError),

    /// Encoder input that is not a registered data or control value.
    #[error("unknown code value {value} (not registered in the code table)")]
    UnknownValue { value: CodeValue },

    /// A 10-bit pattern that the code table never assigns.
    #[error("invalid symbol {symbol} ({symbol:#05x})")]
    InvalidSymbol { symbol: Symbol },

    /// A symbol was fed to a disparity tracker that no valid code produces.
    #[error("disparity rule violation: {0}")]
    DisparityRule(#[from] DisparityRuleViolation),

    /// Per-symbol decode error, for callers that prefer to stop at the first one.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Packing or unpacking symbols to bytes failed.
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Text that is not a `Dx.y` / `Kx.y` value name.
    #[error("cannot parse code value from {0:?}")]
    ParseValue(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Reasons a code table is rejected during construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableIntegrityError {
    /// A seed symbol has bits set above bit 9.
    #[error("{value}: seed symbol {bits:#x} is wider than 10 bits")]
    SymbolOutOfRange { value: CodeValue, bits: u16 },

    /// The same value appears in more than one seed row.
    #[error("duplicate entry for {value}")]
    DuplicateValue { value: CodeValue },

    /// A data value or registered control value has no seed row.
    #[error("missing entry for {value}")]
    MissingValue { value: CodeValue },

    /// A seed row names a control value outside the fixed control set.
    #[error("{value} is not a registered control value")]
    UnregisteredControl { value: CodeValue },

    /// Two values share a symbol in the same disparity slot.
    #[error("symbol {symbol} is used by both {first} and {second} under {slot}")]
    SymbolCollision {
        symbol: Symbol,
        slot: Disparity,
        first: CodeValue,
        second: CodeValue,
    },

    /// A symbol decodes to different values depending on the slot.
    #[error("symbol {symbol} decodes to {neg} under RD- but {pos} under RD+")]
    AmbiguousSymbol {
        symbol: Symbol,
        neg: CodeValue,
        pos: CodeValue,
    },

    /// The two members of an entry do not hand the disparity back and forth.
    #[error("{value}: RD- symbol contributes {neg_disparity:+}, RD+ symbol contributes {pos_disparity:+}")]
    UnbalancedEntry {
        value: CodeValue,
        neg_disparity: i8,
        pos_disparity: i8,
    },
}

/// A symbol whose disparity contribution is outside {-2, 0, +2}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("symbol {symbol} contributes {contribution:+} (allowed: -2, 0, +2)")]
pub struct DisparityRuleViolation {
    pub symbol: Symbol,
    pub contribution: i8,
}

/// Per-symbol decode failure, reported inline by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The pattern is not in the code table under either disparity.
    ///
    /// The decoder holds its running disparity unchanged.
    #[error("invalid symbol {symbol}")]
    InvalidSymbol { symbol: Symbol },

    /// The pattern is a real code for `value`, but only under the disparity
    /// opposite to `expected`.
    ///
    /// The decoder still advances its running disparity from the symbol.
    #[error("disparity mismatch: {symbol} encodes {value} but is not valid at {expected}")]
    DisparityMismatch {
        symbol: Symbol,
        value: CodeValue,
        expected: Disparity,
    },
}

impl DecodeError {
    /// The offending symbol.
    pub fn symbol(&self) -> Symbol {
        match *self {
            DecodeError::InvalidSymbol { symbol } | DecodeError::DisparityMismatch { symbol, .. } => {
                symbol
            }
        }
    }
}

/// Errors from packing symbols into, or unpacking them from, bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitIoError {
    /// Fewer bits remain than one more symbol needs.
    #[error("truncated symbol stream: need {needed} bits, {available} available")]
    Truncated { needed: usize, available: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

//! The 8b/10b code table.
//!
//! Built once from seed rows, validated, and immutable afterwards. Encoders
//! and decoders borrow it; it is `Send + Sync` and safe to read from any
//! number of threads.
//!
//! # Validation
//!
//! Construction rejects the whole table if any of these fail:
//! - every data value and registered control value has exactly one row
//! - every seed symbol fits in ten bits
//! - no symbol is shared by two values in the same disparity slot, and no
//!   symbol decodes to different values in different slots
//! - every row is balanced: the RD- symbol contributes 0 or +2 and the RD+
//!   symbol contributes the negation, so leaving RD- with one member lands
//!   in the state whose member leads back
//!
//! # Lookup
//!
//! Both directions are direct array indexing: values by a dense key,
//! symbols by their ten bits.

use tracing::{debug, warn};

use crate::error::{Error, Result, TableIntegrityError};
use crate::seed::{SeedEntry, STANDARD_SEED};
use crate::symbol::{Disparity, Symbol, SYMBOL_MASK};
use crate::value::CodeValue;

/// Size of the value-keyed array: data keys 0..256, control keys 256..512.
const VALUE_SLOTS: usize = 512;

/// Size of the symbol-keyed array.
const SYMBOL_SLOTS: usize = SYMBOL_MASK as usize + 1;

/// The pair of symbols registered for one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    value: CodeValue,
    neg: Symbol,
    pos: Symbol,
}

impl CodeEntry {
    /// The value this entry encodes.
    pub fn value(&self) -> CodeValue {
        self.value
    }

    /// Symbol sent at RD-.
    pub fn neg(&self) -> Symbol {
        self.neg
    }

    /// Symbol sent at RD+.
    pub fn pos(&self) -> Symbol {
        self.pos
    }

    /// Symbol sent at `disparity`.
    pub fn symbol(&self, disparity: Disparity) -> Symbol {
        match disparity {
            Disparity::Neg => self.neg,
            Disparity::Pos => self.pos,
        }
    }

    /// True when sending this value never changes the running disparity.
    pub fn is_neutral(&self) -> bool {
        self.neg.is_neutral()
    }
}

/// Which disparity slots a symbol is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// RD- column only
    Neg,
    /// RD+ column only
    Pos,
    /// Same symbol in both columns
    Both,
}

impl Membership {
    /// True when the symbol may legitimately be sent at `disparity`.
    pub fn admits(self, disparity: Disparity) -> bool {
        matches!(
            (self, disparity),
            (Membership::Both, _) | (Membership::Neg, Disparity::Neg) | (Membership::Pos, Disparity::Pos)
        )
    }

    /// The single slot a symbol belongs to, if it belongs to only one.
    pub fn only(self) -> Option<Disparity> {
        match self {
            Membership::Neg => Some(Disparity::Neg),
            Membership::Pos => Some(Disparity::Pos),
            Membership::Both => None,
        }
    }
}

impl From<Disparity> for Membership {
    fn from(disparity: Disparity) -> Self {
        match disparity {
            Disparity::Neg => Membership::Neg,
            Disparity::Pos => Membership::Pos,
        }
    }
}

/// What a symbol decodes to, and under which slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeEntry {
    pub value: CodeValue,
    pub membership: Membership,
}

/// Immutable 8b/10b code table.
#[derive(Debug, Clone)]
pub struct CodeTable {
    /// Indexed by `CodeValue::key`
    encode: Vec<Option<CodeEntry>>,
    /// Indexed by symbol bits
    decode: Vec<Option<DecodeEntry>>,
    data_len: usize,
    control_len: usize,
}

impl CodeTable {
    /// Build the standard table.
    ///
    /// # Errors
    /// Returns `Error::TableIntegrity` if the built-in seed fails validation.
    pub fn build() -> Result<Self> {
        Self::from_seed(&STANDARD_SEED)
    }

    /// Build a table from caller-provided seed rows.
    ///
    /// # Errors
    /// Returns `Error::TableIntegrity` describing the first violation found.
    /// A rejected table is never partially usable.
    pub fn from_seed(seed: &[SeedEntry]) -> Result<Self> {
        match Self::assemble(seed) {
            Ok(table) => {
                debug!(
                    data = table.data_len,
                    control = table.control_len,
                    symbols = table.assigned_symbols(),
                    "built 8b/10b code table"
                );
                Ok(table)
            }
            Err(err) => {
                warn!(error = %err, rows = seed.len(), "rejected 8b/10b seed data");
                Err(err.into())
            }
        }
    }

    fn assemble(seed: &[SeedEntry]) -> std::result::Result<Self, TableIntegrityError> {
        let mut encode: Vec<Option<CodeEntry>> = vec![None; VALUE_SLOTS];
        let mut decode: Vec<Option<DecodeEntry>> = vec![None; SYMBOL_SLOTS];

        for row in seed {
            let value = row.value;
            if !value.is_registered() {
                return Err(TableIntegrityError::UnregisteredControl { value });
            }

            let neg = seed_symbol(value, row.neg)?;
            let pos = seed_symbol(value, row.pos)?;

            let balanced = matches!(neg.disparity(), 0 | 2) && pos.disparity() == -neg.disparity();
            if !balanced {
                return Err(TableIntegrityError::UnbalancedEntry {
                    value,
                    neg_disparity: neg.disparity(),
                    pos_disparity: pos.disparity(),
                });
            }

            let slot = &mut encode[value.key()];
            if slot.is_some() {
                return Err(TableIntegrityError::DuplicateValue { value });
            }
            *slot = Some(CodeEntry { value, neg, pos });

            register(&mut decode, neg, Disparity::Neg, value)?;
            register(&mut decode, pos, Disparity::Pos, value)?;
        }

        if let Some(value) = CodeValue::registered().find(|v| encode[v.key()].is_none()) {
            return Err(TableIntegrityError::MissingValue { value });
        }

        Ok(Self {
            data_len: encode[..256].iter().flatten().count(),
            control_len: encode[256..].iter().flatten().count(),
            encode,
            decode,
        })
    }

    /// Symbol for `value` at `disparity`.
    ///
    /// # Errors
    /// Returns `Error::UnknownValue` if `value` is not registered.
    pub fn lookup_encode(&self, value: CodeValue, disparity: Disparity) -> Result<Symbol> {
        self.entry(value)
            .map(|entry| entry.symbol(disparity))
            .ok_or(Error::UnknownValue { value })
    }

    /// Value encoded by `symbol`, under whichever slot it belongs to.
    ///
    /// Use [`CodeValue::is_control`] on the result to tell data from control.
    ///
    /// # Errors
    /// Returns `Error::InvalidSymbol` for patterns the table never assigns.
    pub fn lookup_decode(&self, symbol: Symbol) -> Result<CodeValue> {
        self.decode_entry(symbol)
            .map(|entry| entry.value)
            .ok_or(Error::InvalidSymbol { symbol })
    }

    /// Value and slot membership for `symbol`, or `None` if unassigned.
    pub fn decode_entry(&self, symbol: Symbol) -> Option<DecodeEntry> {
        self.decode.get(symbol.bits() as usize).copied().flatten()
    }

    /// The entry registered for `value`.
    pub fn entry(&self, value: CodeValue) -> Option<CodeEntry> {
        self.encode.get(value.key()).copied().flatten()
    }

    /// All entries: data values in byte order, then control values.
    pub fn entries(&self) -> impl Iterator<Item = CodeEntry> + '_ {
        self.encode.iter().flatten().copied()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.data_len + self.control_len
    }

    /// Always false for a successfully built table.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of data entries (always 256).
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    /// Number of control entries.
    pub fn control_len(&self) -> usize {
        self.control_len
    }

    /// Number of distinct 10-bit patterns the table assigns.
    pub fn assigned_symbols(&self) -> usize {
        self.decode.iter().flatten().count()
    }
}

fn seed_symbol(value: CodeValue, bits: u16) -> std::result::Result<Symbol, TableIntegrityError> {
    Symbol::new(bits).ok_or(TableIntegrityError::SymbolOutOfRange { value, bits })
}

/// Record that `symbol` decodes to `value` under `slot`.
fn register(
    decode: &mut [Option<DecodeEntry>],
    symbol: Symbol,
    slot: Disparity,
    value: CodeValue,
) -> std::result::Result<(), TableIntegrityError> {
    let index = symbol.bits() as usize;
    let existing = match decode[index] {
        None => {
            decode[index] = Some(DecodeEntry {
                value,
                membership: slot.into(),
            });
            return Ok(());
        }
        Some(existing) => existing,
    };

    if existing.membership.admits(slot) {
        return Err(TableIntegrityError::SymbolCollision {
            symbol,
            slot,
            first: existing.value,
            second: value,
        });
    }

    if existing.value == value {
        // same symbol in both columns
        decode[index] = Some(DecodeEntry {
            value,
            membership: Membership::Both,
        });
        return Ok(());
    }

    let (neg, pos) = match slot {
        Disparity::Neg => (value, existing.value),
        Disparity::Pos => (existing.value, value),
    };
    Err(TableIntegrityError::AmbiguousSymbol { symbol, neg, pos })
}

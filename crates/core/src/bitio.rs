//! Packing symbols into bytes and back.
//!
//! Symbols are laid end to end, ten bits each, MSB-first within each byte.
//! With [`BitOrder::Transmission`] bit `a` of every symbol goes first, which
//! is the order a serializer puts them on the line. [`BitOrder::Reversed`]
//! sends `j` first, matching captures taken by receivers that shift bits in
//! LSB-first.
//!
//! # Padding Rules
//! - `SymbolWriter`: pads the final partial byte with trailing zeros
//! - `SymbolReader`: the caller must know how many symbols to read; padding
//!   is indistinguishable from data
//!
//! # Example
//! ```
//! use line8b10b_core::bitio::{pack_symbols, unpack_symbols, BitOrder};
//! use line8b10b_core::Symbol;
//!
//! let symbols = [Symbol::new(0b001111_1010).unwrap(), Symbol::new(0b110000_0101).unwrap()];
//! let bytes = pack_symbols(&symbols, BitOrder::Transmission);
//! assert_eq!(bytes, vec![0b0011_1110, 0b1011_0000, 0b0101_0000]);
//!
//! let back = unpack_symbols(&bytes, 2, BitOrder::Transmission).unwrap();
//! assert_eq!(back, symbols);
//! ```

use crate::error::{BitIoError, Result};
use crate::symbol::{Symbol, SYMBOL_BITS};

/// Which end of a symbol is serialized first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// `a` first, as transmitted
    #[default]
    Transmission,
    /// `j` first, as captured LSB-first
    Reversed,
}

impl BitOrder {
    fn apply(self, symbol: Symbol) -> Symbol {
        match self {
            BitOrder::Transmission => symbol,
            BitOrder::Reversed => symbol.reverse(),
        }
    }
}

/// Writes symbols MSB-first into a byte buffer.
///
/// # Invariants
/// - `pending` holds fewer than 8 bits, right-aligned in `acc`
#[derive(Debug, Clone, Default)]
pub struct SymbolWriter {
    bytes: Vec<u8>,
    order: BitOrder,
    /// Bits not yet flushed to `bytes`
    acc: u32,
    pending: u32,
    symbols: usize,
}

impl SymbolWriter {
    /// Create a writer with empty output.
    pub fn new(order: BitOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Append one symbol.
    pub fn write_symbol(&mut self, symbol: Symbol) {
        let bits = self.order.apply(symbol).bits() as u32;
        self.acc = (self.acc << SYMBOL_BITS) | bits;
        self.pending += SYMBOL_BITS;

        while self.pending >= 8 {
            self.pending -= 8;
            self.bytes.push((self.acc >> self.pending) as u8);
        }
        self.acc &= (1 << self.pending) - 1;
        self.symbols += 1;
    }

    /// Number of symbols written so far.
    pub fn symbol_count(&self) -> usize {
        self.symbols
    }

    /// Return the total number of bits written (including partial byte).
    pub fn bit_len(&self) -> usize {
        self.symbols * SYMBOL_BITS as usize
    }

    /// Finish writing and return the output bytes.
    ///
    /// Remaining bits are padded with trailing zeros to complete the final
    /// byte. This consumes the writer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.pending > 0 {
            self.bytes.push((self.acc << (8 - self.pending)) as u8);
        }
        self.bytes
    }
}

/// Reads symbols MSB-first from a byte buffer.
///
/// # Invariants
/// - `bit_position` never exceeds `data.len() * 8`
#[derive(Debug, Clone)]
pub struct SymbolReader<'a> {
    data: &'a [u8],
    order: BitOrder,
    /// Current bit position (0 = MSB of first byte)
    bit_position: usize,
}

impl<'a> SymbolReader<'a> {
    /// Create a reader over `data`.
    pub fn new(data: &'a [u8], order: BitOrder) -> Self {
        Self {
            data,
            order,
            bit_position: 0,
        }
    }

    /// Read the next symbol.
    ///
    /// # Errors
    /// Returns `BitIoError::Truncated` if fewer than ten bits remain; the
    /// position is not moved.
    pub fn read_symbol(&mut self) -> Result<Symbol> {
        let needed = SYMBOL_BITS as usize;
        let available = self.bits_remaining();
        if available < needed {
            return Err(BitIoError::Truncated { needed, available }.into());
        }

        let mut bits = 0u16;
        for _ in 0..needed {
            let byte = self.data[self.bit_position / 8];
            let bit = (byte >> (7 - self.bit_position % 8)) & 1;
            bits = (bits << 1) | bit as u16;
            self.bit_position += 1;
        }

        Ok(self.order.apply(Symbol::from_bits_truncate(bits)))
    }

    /// Return the number of bits remaining in the buffer.
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.bit_position
    }

    /// Number of whole symbols left (padding bits may count toward one).
    pub fn symbols_remaining(&self) -> usize {
        self.bits_remaining() / SYMBOL_BITS as usize
    }
}

/// Pack `symbols` into bytes.
pub fn pack_symbols(symbols: &[Symbol], order: BitOrder) -> Vec<u8> {
    let mut writer = SymbolWriter::new(order);
    for &symbol in symbols {
        writer.write_symbol(symbol);
    }
    writer.finish()
}

/// Unpack exactly `count` symbols from `bytes`.
///
/// # Errors
/// Returns `BitIoError::Truncated` if `bytes` holds fewer than `count`
/// symbols.
pub fn unpack_symbols(bytes: &[u8], count: usize, order: BitOrder) -> Result<Vec<Symbol>> {
    let mut reader = SymbolReader::new(bytes, order);
    (0..count).map(|_| reader.read_symbol()).collect()
}

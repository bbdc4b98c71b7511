//! 10-bit line symbols and the two-valued running disparity.
//!
//! # Bit Layout
//!
//! A symbol stores the ten code bits `abcdei fghj` with `a` in bit 9 and `j`
//! in bit 0, so the value read MSB-first is the order the bits go on the
//! wire:
//!
//! ```text
//!  bit:   9 8 7 6 5 4   3 2 1 0
//!  code:  a b c d e i   f g h j
//!         \_ 5b/6b _/   \3b/4b/
//! ```
//!
//! # Disparity
//!
//! A symbol's disparity contribution is `ones - zeros`. Symbols produced by
//! the code table always contribute -2, 0 or +2.

use std::fmt;

/// Number of bits in one symbol.
pub const SYMBOL_BITS: u32 = 10;

/// Mask selecting the ten symbol bits of a `u16`.
pub const SYMBOL_MASK: u16 = 0x3FF;

/// An unsigned 10-bit line symbol.
///
/// # Invariants
/// - bits above bit 9 are always zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u16);

impl Symbol {
    /// Create a symbol, rejecting values wider than ten bits.
    pub const fn new(bits: u16) -> Option<Self> {
        if bits & !SYMBOL_MASK != 0 {
            None
        } else {
            Some(Self(bits))
        }
    }

    /// Create a symbol from the low ten bits of `bits`.
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & SYMBOL_MASK)
    }

    /// Raw bits, `a` in bit 9.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Number of one bits (the symbol's weight).
    pub const fn ones(self) -> u32 {
        self.0.count_ones()
    }

    /// Disparity contribution: count of ones minus count of zeros.
    pub const fn disparity(self) -> i8 {
        2 * self.ones() as i8 - SYMBOL_BITS as i8
    }

    /// True when the symbol has exactly five ones.
    pub const fn is_neutral(self) -> bool {
        self.disparity() == 0
    }

    /// The `abcdei` sub-block produced by the 5b/6b sub-code.
    pub const fn six_bit(self) -> u8 {
        (self.0 >> 4) as u8
    }

    /// The `fghj` sub-block produced by the 3b/4b sub-code.
    pub const fn four_bit(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// Reverse the bit order, mapping `a` to bit 0 and `j` to bit 9.
    ///
    /// Receivers that shift line bits in LSB-first see every symbol in this
    /// reversed form.
    pub const fn reverse(self) -> Self {
        Self(self.0.reverse_bits() >> (16 - SYMBOL_BITS))
    }

    /// Return a copy with bit `bit` (0 = `j`, 9 = `a`) inverted.
    ///
    /// Bit indices outside 0..10 leave the symbol unchanged.
    pub const fn with_bit_flipped(self, bit: u32) -> Self {
        if bit >= SYMBOL_BITS {
            self
        } else {
            Self(self.0 ^ (1 << bit))
        }
    }

    /// Iterate over all 1024 possible symbols in ascending order.
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..=SYMBOL_MASK).map(Symbol)
    }
}

impl fmt::Display for Symbol {
    /// Formats as `abcdei fghj`, e.g. `001111 1010` for K28.5 RD-.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06b} {:04b}", self.six_bit(), self.four_bit())
    }
}

impl fmt::Binary for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<Symbol> for u16 {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// Running disparity of a stream.
///
/// RD- is the standard starting state and the `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disparity {
    /// RD-: the stream has sent one more zero than ones so far.
    #[default]
    Neg,
    /// RD+: the stream has sent one more one than zeros so far.
    Pos,
}

impl Disparity {
    /// Both states, RD- first.
    pub const ALL: [Disparity; 2] = [Disparity::Neg, Disparity::Pos];

    /// The opposite state.
    pub const fn flip(self) -> Self {
        match self {
            Disparity::Neg => Disparity::Pos,
            Disparity::Pos => Disparity::Neg,
        }
    }
}

impl fmt::Display for Disparity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disparity::Neg => f.write_str("RD-"),
            Disparity::Pos => f.write_str("RD+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wide_values() {
        assert!(Symbol::new(0x3FF).is_some());
        assert!(Symbol::new(0x400).is_none());
        assert_eq!(Symbol::from_bits_truncate(0x7FA).bits(), 0x3FA);
    }

    #[test]
    fn test_disparity_contribution() {
        // K28.5 RD-: 001111 1010 -> six ones
        let k28_5 = Symbol::new(0b001111_1010).unwrap();
        assert_eq!(k28_5.ones(), 6);
        assert_eq!(k28_5.disparity(), 2);

        // D21.5: 101010 1010 -> neutral
        let d21_5 = Symbol::new(0b101010_1010).unwrap();
        assert!(d21_5.is_neutral());

        assert_eq!(Symbol::new(0).unwrap().disparity(), -10);
    }

    #[test]
    fn test_sub_blocks() {
        let symbol = Symbol::new(0b001111_1010).unwrap();
        assert_eq!(symbol.six_bit(), 0b001111);
        assert_eq!(symbol.four_bit(), 0b1010);
    }

    #[test]
    fn test_reverse() {
        let symbol = Symbol::new(0b001111_1010).unwrap();
        assert_eq!(symbol.reverse().bits(), 0b010111_1100);
        assert_eq!(symbol.reverse().reverse(), symbol);
    }

    #[test]
    fn test_bit_flip() {
        let symbol = Symbol::new(0b00000_00000).unwrap();
        assert_eq!(symbol.with_bit_flipped(9).bits(), 0b10000_00000);
        assert_eq!(symbol.with_bit_flipped(0).bits(), 0b1);
        assert_eq!(symbol.with_bit_flipped(10), symbol);
    }

    #[test]
    fn test_display() {
        let symbol = Symbol::new(0b001111_1010).unwrap();
        assert_eq!(symbol.to_string(), "001111 1010");
        assert_eq!(format!("{:#x}", symbol), "0xfa");
        assert_eq!(Disparity::Neg.to_string(), "RD-");
    }

    #[test]
    fn test_all_symbols() {
        assert_eq!(Symbol::all().count(), 1024);
        assert_eq!(Symbol::all().last().unwrap().bits(), SYMBOL_MASK);
    }

    #[test]
    fn test_disparity_default_and_flip() {
        assert_eq!(Disparity::default(), Disparity::Neg);
        assert_eq!(Disparity::Neg.flip(), Disparity::Pos);
        assert_eq!(Disparity::Pos.flip().flip(), Disparity::Pos);
    }
}

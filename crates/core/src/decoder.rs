//! Disparity-checked decoding of symbols into values.
//!
//! The decoder mirrors the encoder: it looks each symbol up in the code
//! table and tracks running disparity in lockstep. Every symbol produces
//! exactly one outcome:
//!
//! - **valid**: known symbol, admitted at the current disparity; the value
//!   is returned and the tracker advances
//! - **disparity mismatch**: known symbol, but only sent at the other
//!   disparity; an error is returned and the tracker still advances by the
//!   symbol's own contribution, so it realigns with the sender
//! - **invalid symbol**: unknown pattern; an error is returned and the
//!   tracker keeps its state
//!
//! Errors are returned inline and decoding continues; stopping a noisy link
//! is the caller's decision (see [`DecodeStats`]).

use tracing::trace;

use crate::disparity::DisparityTracker;
use crate::error::DecodeError;
use crate::stats::DecodeStats;
use crate::symbol::{Disparity, Symbol};
use crate::table::CodeTable;
use crate::value::CodeValue;

/// Decoder for one stream.
#[derive(Debug, Clone)]
pub struct Decoder<'t> {
    table: &'t CodeTable,
    tracker: DisparityTracker,
    /// False until a symbol has pinned the running disparity
    synchronized: bool,
    stats: DecodeStats,
}

impl<'t> Decoder<'t> {
    /// Create a decoder expecting the stream to start at RD-.
    pub fn new(table: &'t CodeTable) -> Self {
        Self::with_disparity(table, Disparity::Neg)
    }

    /// Create a decoder expecting the stream to start at `start`.
    pub fn with_disparity(table: &'t CodeTable, start: Disparity) -> Self {
        Self {
            table,
            tracker: DisparityTracker::new(start),
            synchronized: true,
            stats: DecodeStats::new(),
        }
    }

    /// Create a decoder for a stream joined mid-flight, at unknown disparity.
    ///
    /// No mismatch is reported until the first symbol that belongs to only
    /// one disparity column; that symbol fixes the running disparity.
    pub fn unsynchronized(table: &'t CodeTable) -> Self {
        Self {
            synchronized: false,
            ..Self::new(table)
        }
    }

    /// Current running disparity.
    pub fn disparity(&self) -> Disparity {
        self.tracker.current()
    }

    /// True once the running disparity is known.
    pub fn is_synchronized(&self) -> bool {
        self.synchronized
    }

    /// Force the running disparity, e.g. after a link-level resync.
    pub fn reset(&mut self, disparity: Disparity) {
        self.tracker.reset(disparity);
        self.synchronized = true;
    }

    /// Statistics over everything decoded so far.
    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    /// Decode one symbol.
    pub fn decode_symbol(&mut self, symbol: Symbol) -> Result<CodeValue, DecodeError> {
        let outcome = self.classify(symbol);
        self.stats.record(&outcome);
        outcome
    }

    fn classify(&mut self, symbol: Symbol) -> Result<CodeValue, DecodeError> {
        let Some(entry) = self.table.decode_entry(symbol) else {
            trace!(%symbol, disparity = %self.tracker.current(), "invalid symbol");
            return Err(DecodeError::InvalidSymbol { symbol });
        };

        let expected = self.tracker.current();
        let mut mismatch = false;
        if !self.synchronized {
            if let Some(slot) = entry.membership.only() {
                self.tracker.reset(slot);
                self.synchronized = true;
            }
        } else {
            mismatch = !entry.membership.admits(expected);
        }

        self.tracker
            .advance(symbol)
            .map_err(|_| DecodeError::InvalidSymbol { symbol })?;

        if mismatch {
            trace!(%symbol, value = %entry.value, %expected, "disparity mismatch");
            return Err(DecodeError::DisparityMismatch {
                symbol,
                value: entry.value,
                expected,
            });
        }
        Ok(entry.value)
    }

    /// Lazily decode `symbols`, one outcome per symbol.
    pub fn decode<I>(&mut self, symbols: I) -> Decode<'_, 't, I::IntoIter>
    where
        I: IntoIterator<Item = Symbol>,
    {
        Decode {
            decoder: self,
            symbols: symbols.into_iter(),
        }
    }

    /// Decode `symbols` into a vector of outcomes.
    pub fn decode_all<I>(&mut self, symbols: I) -> Vec<Result<CodeValue, DecodeError>>
    where
        I: IntoIterator<Item = Symbol>,
    {
        self.decode(symbols).collect()
    }
}

/// Lazy decoding iterator returned by [`Decoder::decode`].
#[derive(Debug)]
pub struct Decode<'d, 't, I> {
    decoder: &'d mut Decoder<'t>,
    symbols: I,
}

impl<I> Iterator for Decode<'_, '_, I>
where
    I: Iterator<Item = Symbol>,
{
    type Item = Result<CodeValue, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let symbol = self.symbols.next()?;
        Some(self.decoder.decode_symbol(symbol))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.symbols.size_hint()
    }
}

impl<I> ExactSizeIterator for Decode<'_, '_, I> where I: ExactSizeIterator<Item = Symbol> {}

impl<I> std::iter::FusedIterator for Decode<'_, '_, I> where I: std::iter::FusedIterator<Item = Symbol> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;

    fn table() -> CodeTable {
        CodeTable::build().unwrap()
    }

    fn sym(bits: u16) -> Symbol {
        Symbol::new(bits).unwrap()
    }

    const K28_5_NEG: u16 = 0b001111_1010;
    const K28_5_POS: u16 = 0b110000_0101;

    #[test]
    fn test_round_trip() {
        let table = table();
        let values = [
            CodeValue::K28_5,
            CodeValue::Data(0x4A),
            CodeValue::Data(0x03),
            CodeValue::K28_1,
            CodeValue::Data(0xFF),
        ];
        let symbols = Encoder::new(&table).encode_all(values).unwrap();

        let mut decoder = Decoder::new(&table);
        let decoded: Vec<_> = decoder.decode(symbols).collect();
        assert_eq!(decoded, values.map(Ok::<_, DecodeError>).to_vec());
        assert_eq!(decoder.stats().errors(), 0);
        assert_eq!(decoder.stats().control, 2);
    }

    #[test]
    fn test_mismatch_advances_tracker() {
        let table = table();
        let mut decoder = Decoder::new(&table);

        // K28.5 RD+ arriving at RD-
        assert_eq!(
            decoder.decode_symbol(sym(K28_5_POS)),
            Err(DecodeError::DisparityMismatch {
                symbol: sym(K28_5_POS),
                value: CodeValue::K28_5,
                expected: Disparity::Neg,
            })
        );
        // four ones: the tracker lands at RD- and the next RD- symbol is fine
        assert_eq!(decoder.disparity(), Disparity::Neg);
        assert_eq!(decoder.decode_symbol(sym(K28_5_NEG)), Ok(CodeValue::K28_5));
        assert_eq!(decoder.disparity(), Disparity::Pos);
    }

    #[test]
    fn test_invalid_symbol_holds_state() {
        let table = table();
        let mut decoder = Decoder::new(&table);

        assert_eq!(decoder.decode_symbol(sym(K28_5_NEG)), Ok(CodeValue::K28_5));
        assert_eq!(decoder.disparity(), Disparity::Pos);

        for garbage in [0x000, 0x3FF, 0b111111_1000] {
            assert_eq!(
                decoder.decode_symbol(sym(garbage)),
                Err(DecodeError::InvalidSymbol {
                    symbol: sym(garbage)
                })
            );
            assert_eq!(decoder.disparity(), Disparity::Pos);
        }

        assert_eq!(decoder.decode_symbol(sym(K28_5_POS)), Ok(CodeValue::K28_5));
        assert_eq!(decoder.stats().invalid, 3);
        assert_eq!(decoder.stats().max_consecutive_errors, 3);
    }

    #[test]
    fn test_lost_symbol_resyncs() {
        let table = table();
        // D3.0 alternates +2 / -2
        let symbols = Encoder::new(&table).encode_bytes(&[0x03; 4]).unwrap();

        // receiver misses the first symbol
        let mut decoder = Decoder::new(&table);
        let decoded = decoder.decode_all(symbols[1..].iter().copied());

        assert!(matches!(
            decoded[0],
            Err(DecodeError::DisparityMismatch {
                value: CodeValue::Data(0x03),
                expected: Disparity::Neg,
                ..
            })
        ));
        assert_eq!(decoded[1], Ok(CodeValue::Data(0x03)));
        assert_eq!(decoded[2], Ok(CodeValue::Data(0x03)));
    }

    #[test]
    fn test_unsynchronized_adopts_stream_disparity() {
        let table = table();
        let values = [CodeValue::Data(0x03), CodeValue::Data(0x00), CodeValue::K28_5];
        let symbols = Encoder::with_disparity(&table, Disparity::Pos)
            .encode_all(values)
            .unwrap();

        let mut decoder = Decoder::unsynchronized(&table);
        assert!(!decoder.is_synchronized());
        let decoded = decoder.decode_all(symbols.iter().copied());
        assert_eq!(decoded, values.map(Ok::<_, DecodeError>).to_vec());
        assert!(decoder.is_synchronized());

        // a decoder assuming RD- flags the first symbol
        let mut strict = Decoder::new(&table);
        assert!(strict.decode_symbol(symbols[0]).is_err());
    }

    #[test]
    fn test_unsynchronized_waits_for_one_sided_symbol() {
        let table = table();
        let mut decoder = Decoder::unsynchronized(&table);

        // D21.5 is the same symbol in both columns
        assert_eq!(decoder.decode_symbol(sym(0b101010_1010)), Ok(CodeValue::Data(0xB5)));
        assert!(!decoder.is_synchronized());

        assert_eq!(decoder.decode_symbol(sym(K28_5_POS)), Ok(CodeValue::K28_5));
        assert!(decoder.is_synchronized());
        assert_eq!(decoder.disparity(), Disparity::Neg);
    }

    #[test]
    fn test_reset_synchronizes() {
        let table = table();
        let mut decoder = Decoder::unsynchronized(&table);
        decoder.reset(Disparity::Pos);
        assert!(decoder.is_synchronized());
        assert!(decoder.decode_symbol(sym(K28_5_NEG)).is_err());
    }

    #[test]
    fn test_decode_size_hint() {
        let table = table();
        let mut decoder = Decoder::new(&table);
        let symbols = vec![sym(K28_5_NEG); 7];
        assert_eq!(decoder.decode(symbols).len(), 7);
    }
}

//! Disparity-aware encoding of values into symbols.
//!
//! For every value the encoder picks the table symbol for the current
//! running disparity, emits it, and advances its tracker. Encoding stops at
//! the first value the table does not know; the caller can resume from the
//! disparity checkpoint returned by [`Encoder::disparity`].
//!
//! # Example
//! ```
//! use line8b10b_core::{CodeTable, CodeValue, Disparity, Encoder};
//!
//! let table = CodeTable::build().unwrap();
//! let mut encoder = Encoder::new(&table);
//!
//! let symbols = encoder.encode_all([CodeValue::K28_5, CodeValue::Data(0x4A)]).unwrap();
//! assert_eq!(symbols[0].bits(), 0b001111_1010);
//! // K28.5 at RD- carries six ones, so the stream is now at RD+
//! assert_eq!(encoder.disparity(), Disparity::Pos);
//! ```

use tracing::debug;

use crate::disparity::DisparityTracker;
use crate::error::Result;
use crate::symbol::{Disparity, Symbol};
use crate::table::CodeTable;
use crate::value::CodeValue;

/// Encoder for one stream.
#[derive(Debug, Clone)]
pub struct Encoder<'t> {
    table: &'t CodeTable,
    tracker: DisparityTracker,
}

impl<'t> Encoder<'t> {
    /// Create an encoder starting at RD-.
    pub fn new(table: &'t CodeTable) -> Self {
        Self::with_disparity(table, Disparity::Neg)
    }

    /// Create an encoder starting at `start`.
    pub fn with_disparity(table: &'t CodeTable, start: Disparity) -> Self {
        Self {
            table,
            tracker: DisparityTracker::new(start),
        }
    }

    /// Current running disparity: the checkpoint to resume from.
    pub fn disparity(&self) -> Disparity {
        self.tracker.current()
    }

    /// Force the running disparity.
    pub fn reset(&mut self, disparity: Disparity) {
        self.tracker.reset(disparity);
    }

    /// Encode a single value.
    ///
    /// # Errors
    /// Returns `Error::UnknownValue` for unregistered values; the running
    /// disparity is not changed.
    pub fn encode_value(&mut self, value: CodeValue) -> Result<Symbol> {
        let symbol = self
            .table
            .lookup_encode(value, self.tracker.current())
            .map_err(|err| {
                debug!(%value, disparity = %self.tracker.current(), "cannot encode value");
                err
            })?;
        self.tracker.advance(symbol)?;
        Ok(symbol)
    }

    /// Lazily encode `values`.
    ///
    /// The iterator yields one symbol per value. If a value is unknown it
    /// yields that error and then ends.
    pub fn encode<I>(&mut self, values: I) -> Encode<'_, 't, I::IntoIter>
    where
        I: IntoIterator<Item = CodeValue>,
    {
        Encode {
            encoder: self,
            values: values.into_iter(),
            failed: false,
        }
    }

    /// Encode `values` into a vector.
    ///
    /// # Errors
    /// Returns the first `Error::UnknownValue`; symbols already produced are
    /// discarded but the running disparity reflects them.
    pub fn encode_all<I>(&mut self, values: I) -> Result<Vec<Symbol>>
    where
        I: IntoIterator<Item = CodeValue>,
    {
        self.encode(values).collect()
    }

    /// Encode payload bytes as data values.
    pub fn encode_bytes(&mut self, bytes: &[u8]) -> Result<Vec<Symbol>> {
        self.encode_all(bytes.iter().copied().map(CodeValue::Data))
    }
}

/// Lazy encoding iterator returned by [`Encoder::encode`].
#[derive(Debug)]
pub struct Encode<'e, 't, I> {
    encoder: &'e mut Encoder<'t>,
    values: I,
    failed: bool,
}

impl<I> Iterator for Encode<'_, '_, I>
where
    I: Iterator<Item = CodeValue>,
{
    type Item = Result<Symbol>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let value = self.values.next()?;
        let result = self.encoder.encode_value(value);
        self.failed = result.is_err();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.values.size_hint().1)
        }
    }
}

impl<I> std::iter::FusedIterator for Encode<'_, '_, I> where I: std::iter::FusedIterator<Item = CodeValue> {}

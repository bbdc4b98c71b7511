//! Source values carried by 8b/10b symbols.
//!
//! Every payload byte is a data value `Dx.y` and a small fixed set of
//! control values `Kx.y` is reserved for framing. In both cases `x` is the
//! low five bits of the byte (`EDCBA`) and `y` the high three bits (`HGF`),
//! so `D10.2` is `0x4A` and `K28.5` is `0xBC`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The bytes of the twelve registered control values.
pub const CONTROL_BYTES: [u8; 12] = [
    0x1C, 0x3C, 0x5C, 0x7C, 0x9C, 0xBC, 0xDC, 0xFC, // K28.0 - K28.7
    0xF7, 0xFB, 0xFD, 0xFE, // K23.7, K27.7, K29.7, K30.7
];

/// A value to encode: a data byte or a control code.
///
/// `Control` may carry any byte, but only the bytes in [`CONTROL_BYTES`]
/// are registered in the code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodeValue {
    /// Payload byte `Dx.y`.
    Data(u8),
    /// Control code `Kx.y`.
    Control(u8),
}

impl CodeValue {
    /// K28.0
    pub const K28_0: CodeValue = CodeValue::Control(0x1C);
    /// K28.1, comma-bearing
    pub const K28_1: CodeValue = CodeValue::Control(0x3C);
    /// K28.5, the usual comma / idle character
    pub const K28_5: CodeValue = CodeValue::Control(0xBC);
    /// K28.7, comma-bearing
    pub const K28_7: CodeValue = CodeValue::Control(0xFC);
    /// K23.7
    pub const K23_7: CodeValue = CodeValue::Control(0xF7);
    /// K27.7
    pub const K27_7: CodeValue = CodeValue::Control(0xFB);
    /// K29.7
    pub const K29_7: CodeValue = CodeValue::Control(0xFD);
    /// K30.7
    pub const K30_7: CodeValue = CodeValue::Control(0xFE);

    /// Build a value from its `x.y` coordinates.
    ///
    /// Returns `None` when `x > 31` or `y > 7`.
    pub const fn from_xy(control: bool, x: u8, y: u8) -> Option<Self> {
        if x > 31 || y > 7 {
            return None;
        }
        let byte = (y << 5) | x;
        Some(if control {
            CodeValue::Control(byte)
        } else {
            CodeValue::Data(byte)
        })
    }

    /// The underlying byte.
    pub const fn byte(self) -> u8 {
        match self {
            CodeValue::Data(b) | CodeValue::Control(b) => b,
        }
    }

    /// True for `Kx.y` values.
    pub const fn is_control(self) -> bool {
        matches!(self, CodeValue::Control(_))
    }

    /// Low five bits, the `x` in `Dx.y`.
    pub const fn x(self) -> u8 {
        self.byte() & 0x1F
    }

    /// High three bits, the `y` in `Dx.y`.
    pub const fn y(self) -> u8 {
        self.byte() >> 5
    }

    /// True when the value is a data byte or a registered control code.
    pub fn is_registered(self) -> bool {
        match self {
            CodeValue::Data(_) => true,
            CodeValue::Control(b) => CONTROL_BYTES.contains(&b),
        }
    }

    /// Dense index for table storage: data at 0..256, controls at 256..512.
    pub(crate) const fn key(self) -> usize {
        match self {
            CodeValue::Data(b) => b as usize,
            CodeValue::Control(b) => 256 + b as usize,
        }
    }

    /// Iterate over every registered value: all data bytes, then controls.
    pub fn registered() -> impl Iterator<Item = CodeValue> {
        (0..=u8::MAX)
            .map(CodeValue::Data)
            .chain(CONTROL_BYTES.iter().copied().map(CodeValue::Control))
    }
}

impl From<u8> for CodeValue {
    fn from(byte: u8) -> Self {
        CodeValue::Data(byte)
    }
}

impl fmt::Display for CodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_control() { 'K' } else { 'D' };
        write!(f, "{}{}.{}", kind, self.x(), self.y())
    }
}

impl FromStr for CodeValue {
    type Err = Error;

    /// Parse `Dx.y` or `Kx.y` (case-insensitive prefix, `x` may be zero-padded).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::ParseValue(s.to_string());

        let mut chars = s.chars();
        let control = match chars.next() {
            Some('D') | Some('d') => false,
            Some('K') | Some('k') => true,
            _ => return Err(invalid()),
        };
        let (x, y) = chars.as_str().split_once('.').ok_or_else(invalid)?;
        let x: u8 = x.parse().map_err(|_| invalid())?;
        let y: u8 = y.parse().map_err(|_| invalid())?;

        CodeValue::from_xy(control, x, y).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming() {
        assert_eq!(CodeValue::Data(0x00).to_string(), "D0.0");
        assert_eq!(CodeValue::Data(0x4A).to_string(), "D10.2");
        assert_eq!(CodeValue::Data(0xFF).to_string(), "D31.7");
        assert_eq!(CodeValue::K28_5.to_string(), "K28.5");
        assert_eq!(CodeValue::K23_7.to_string(), "K23.7");
    }

    #[test]
    fn test_parse() {
        assert_eq!("D10.2".parse::<CodeValue>().unwrap(), CodeValue::Data(0x4A));
        assert_eq!("d05.6".parse::<CodeValue>().unwrap(), CodeValue::Data(0xC5));
        assert_eq!("K28.5".parse::<CodeValue>().unwrap(), CodeValue::K28_5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "X1.0", "D1", "D32.0", "D1.8", "K.1", "D1.0.0"] {
            assert!(
                matches!(bad.parse::<CodeValue>(), Err(Error::ParseValue(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_name_round_trip() {
        for value in CodeValue::registered() {
            assert_eq!(value.to_string().parse::<CodeValue>().unwrap(), value);
        }
    }

    #[test]
    fn test_registered_set() {
        assert_eq!(CodeValue::registered().count(), 256 + 12);
        assert!(CodeValue::K28_1.is_registered());
        assert!(!CodeValue::Control(0x00).is_registered());
        assert!(CodeValue::Data(0x00).is_registered());
    }

    #[test]
    fn test_keys_are_distinct() {
        assert_eq!(CodeValue::Data(0xBC).key(), 0xBC);
        assert_eq!(CodeValue::K28_5.key(), 256 + 0xBC);
    }
}

//! line8b10b-core: the 8b/10b transmission code
//!
//! This library maps 8-bit bytes plus a small set of control characters to
//! 10-bit DC-balanced symbols and back:
//! - A validated code table built from seed rows (256 data + 12 control values)
//! - Running-disparity tracking so the line never drifts
//! - Streaming encoder and decoder, one pair per stream
//! - Inline detection of invalid symbols and disparity mismatches
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `symbol`, `value`: the two alphabets (10-bit symbols, `Dx.y`/`Kx.y` values)
//! - `seed`: the standard seed rows
//! - `table`: code table construction, validation and lookup
//! - `disparity`: running-disparity state machine
//! - `encoder`, `decoder`: per-stream codecs
//! - `stats`: decode counters for link supervision
//! - `bitio`: packing symbols into bytes
//! - `channel`, `sample`: seeded noise and input generation for testing
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **No globals**: The table is built explicitly and borrowed by codecs
//! - **Shared read-only state**: One table serves any number of threads
//! - **Deterministic**: Seeded randomness makes runs reproducible
//!
//! # Example
//! ```
//! use line8b10b_core::{CodeTable, CodeValue, Decoder, Encoder};
//!
//! let table = CodeTable::build().unwrap();
//! let values = [CodeValue::K28_5, CodeValue::Data(b'h'), CodeValue::Data(b'i')];
//!
//! let symbols = Encoder::new(&table).encode_all(values).unwrap();
//! let decoded: Vec<_> = Decoder::new(&table)
//!     .decode(symbols)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(decoded, values);
//! ```

pub mod bitio;
pub mod channel;
pub mod decoder;
pub mod disparity;
pub mod encoder;
pub mod error;
pub mod sample;
pub mod seed;
pub mod stats;
pub mod symbol;
pub mod table;
pub mod value;

// Re-export commonly used types
pub use bitio::{pack_symbols, unpack_symbols, BitOrder};
pub use channel::{NoiseConfig, NoisyChannel};
pub use decoder::Decoder;
pub use disparity::{next_disparity, DisparityTracker};
pub use encoder::Encoder;
pub use error::{DecodeError, Error, Result, TableIntegrityError};
pub use seed::{SeedEntry, STANDARD_SEED};
pub use stats::DecodeStats;
pub use symbol::{Disparity, Symbol};
pub use table::{CodeEntry, CodeTable, DecodeEntry, Membership};
pub use value::CodeValue;

//! Sample value streams for tests and benchmarks.
//!
//! Generated streams mix:
//! - runs of one byte (long stretches of the same symbol pair)
//! - text-like bytes from a small alphabet
//! - uniformly random bytes
//! - control characters, as a link layer would insert them
//!
//! so that both disparity columns and all code groups get exercised.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::value::{CodeValue, CONTROL_BYTES};

const MAX_SEGMENT: usize = 64;

/// Generate `len` values deterministically from `seed`.
pub fn generate_values(seed: u64, len: usize) -> Vec<CodeValue> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values = Vec::with_capacity(len);

    while values.len() < len {
        let segment = rng.gen_range(1..=MAX_SEGMENT).min(len - values.len());

        match rng.gen_range(0..10u8) {
            // 20% runs
            0..=1 => {
                let byte: u8 = rng.gen();
                values.extend(std::iter::repeat(CodeValue::Data(byte)).take(segment));
            }

            // 30% text-like
            2..=4 => {
                let alphabet = b"abcdefghijklmnopqrstuvwxyz .!,\n";
                for _ in 0..segment {
                    let idx = rng.gen_range(0..alphabet.len());
                    values.push(CodeValue::Data(alphabet[idx]));
                }
            }

            // 10% control characters
            5 => {
                for _ in 0..segment.min(4) {
                    let idx = rng.gen_range(0..CONTROL_BYTES.len());
                    values.push(CodeValue::Control(CONTROL_BYTES[idx]));
                }
            }

            // 40% random bytes
            _ => {
                for _ in 0..segment {
                    values.push(CodeValue::Data(rng.gen()));
                }
            }
        }
    }

    values
}

/// Generate `len` random payload bytes.
pub fn generate_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        for len in [0, 1, 63, 64, 65, 1000, 10_000] {
            assert_eq!(generate_values(999, len).len(), len);
            assert_eq!(generate_bytes(999, len).len(), len);
        }
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_values(12345, 5000), generate_values(12345, 5000));
        assert_ne!(generate_values(1, 1000), generate_values(2, 1000));
    }

    #[test]
    fn test_all_values_registered() {
        let values = generate_values(42, 20_000);
        assert!(values.iter().all(|v| v.is_registered()));
        assert!(values.iter().any(|v| v.is_control()));
        assert!(values.iter().any(|v| !v.is_control()));
    }
}

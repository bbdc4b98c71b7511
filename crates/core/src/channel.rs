//! Noisy line simulator for exercising error detection.
//!
//! Each transmitted bit is flipped independently with probability
//! `bit_error_rate` (a binary symmetric channel). All randomness comes from a
//! seeded ChaCha8 RNG, so a given seed and input always produce the same
//! corrupted stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::symbol::{Symbol, SYMBOL_BITS};

/// Configuration for the noisy channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    /// Per-bit flip probability [0.0, 1.0]
    pub bit_error_rate: f64,

    /// Random seed for determinism
    pub seed: u64,
}

impl NoiseConfig {
    /// A channel that never flips a bit.
    pub fn clean(seed: u64) -> Self {
        Self {
            bit_error_rate: 0.0,
            seed,
        }
    }

    /// A moderately noisy channel: about one flip per hundred symbols.
    pub fn default_with_seed(seed: u64) -> Self {
        Self {
            bit_error_rate: 1e-3,
            seed,
        }
    }

    /// Check the configuration.
    ///
    /// # Errors
    /// Returns `Error::Config` if `bit_error_rate` is not a probability.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.bit_error_rate) {
            return Err(Error::Config(format!(
                "bit_error_rate must be in [0, 1], got {}",
                self.bit_error_rate
            )));
        }
        Ok(())
    }
}

/// Binary symmetric channel over symbols.
///
/// # Thread Safety
/// Holds its own RNG; use one instance per stream.
#[derive(Debug, Clone)]
pub struct NoisyChannel {
    config: NoiseConfig,
    rng: ChaCha8Rng,

    // Statistics
    symbols_sent: u64,
    bits_flipped: u64,
    symbols_corrupted: u64,
}

impl NoisyChannel {
    /// Create a channel from a validated configuration.
    ///
    /// # Errors
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn new(config: NoiseConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            bit_error_rate = config.bit_error_rate,
            seed = config.seed,
            "noisy channel created"
        );

        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            symbols_sent: 0,
            bits_flipped: 0,
            symbols_corrupted: 0,
        })
    }

    /// The channel's configuration.
    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Pass one symbol through the channel.
    pub fn transmit(&mut self, symbol: Symbol) -> Symbol {
        self.symbols_sent += 1;
        if self.config.bit_error_rate == 0.0 {
            return symbol;
        }

        let mut received = symbol;
        for bit in 0..SYMBOL_BITS {
            if self.rng.gen_bool(self.config.bit_error_rate) {
                received = received.with_bit_flipped(bit);
                self.bits_flipped += 1;
            }
        }

        if received != symbol {
            self.symbols_corrupted += 1;
            trace!(sent = %symbol, %received, "symbol corrupted");
        }
        received
    }

    /// Pass a whole sequence through the channel.
    pub fn transmit_all(&mut self, symbols: &[Symbol]) -> Vec<Symbol> {
        symbols.iter().map(|&symbol| self.transmit(symbol)).collect()
    }

    /// Get statistics about channel behavior.
    pub fn stats(&self) -> ChannelStats {
        ChannelStats {
            symbols_sent: self.symbols_sent,
            bits_sent: self.symbols_sent * SYMBOL_BITS as u64,
            bits_flipped: self.bits_flipped,
            symbols_corrupted: self.symbols_corrupted,
        }
    }
}

/// Statistics about channel behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelStats {
    /// Symbols passed through
    pub symbols_sent: u64,

    /// Bits passed through
    pub bits_sent: u64,

    /// Bits flipped by noise
    pub bits_flipped: u64,

    /// Symbols with at least one flipped bit
    pub symbols_corrupted: u64,
}

impl ChannelStats {
    /// Observed bit error rate.
    pub fn bit_error_rate(&self) -> f64 {
        if self.bits_sent == 0 {
            0.0
        } else {
            self.bits_flipped as f64 / self.bits_sent as f64
        }
    }
}

//! Running disparity tracking.
//!
//! The tracker is a two-state machine advanced once per symbol:
//!
//! | contribution | next state          |
//! |--------------|---------------------|
//! | +2           | RD+                 |
//! | 0            | unchanged           |
//! | -2           | RD-                 |
//! | other        | rejected, unchanged |
//!
//! From a consistent stream a +2 symbol only arrives at RD- and a -2 symbol
//! only at RD+, so each nonzero symbol flips the state. A symbol with the
//! same polarity as the current state leaves it where it is; the decoder
//! relies on this to realign after a disparity error.

use crate::error::{DisparityRuleViolation, Result};
use crate::symbol::{Disparity, Symbol};

/// Apply the disparity rule to `symbol` from `current`.
///
/// # Errors
/// Returns `DisparityRuleViolation` if the symbol's contribution is not
/// -2, 0 or +2.
pub fn next_disparity(current: Disparity, symbol: Symbol) -> Result<Disparity> {
    match symbol.disparity() {
        2 => Ok(Disparity::Pos),
        0 => Ok(current),
        -2 => Ok(Disparity::Neg),
        contribution => Err(DisparityRuleViolation {
            symbol,
            contribution,
        }
        .into()),
    }
}

/// Running disparity of one stream.
///
/// Owned by exactly one encoder or decoder; never shared between streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisparityTracker {
    current: Disparity,
}

impl DisparityTracker {
    /// Create a tracker starting at `start`.
    pub fn new(start: Disparity) -> Self {
        Self { current: start }
    }

    /// The current running disparity.
    pub fn current(&self) -> Disparity {
        self.current
    }

    /// Advance past `symbol` and return the new state.
    ///
    /// # Errors
    /// Returns `DisparityRuleViolation` for malformed symbols; the state is
    /// left unchanged.
    pub fn advance(&mut self, symbol: Symbol) -> Result<Disparity> {
        self.current = next_disparity(self.current, symbol)?;
        Ok(self.current)
    }

    /// Force the state, e.g. after a link reset.
    pub fn reset(&mut self, disparity: Disparity) {
        self.current = disparity;
    }
}

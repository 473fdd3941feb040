//! Frame views over a player's roll sequence.
//!
//! A frame never owns authoritative state: it is re-derived from the roll
//! sequence on every query. An empty frame means "not yet played" and is
//! distinct from a played frame with zero pins (`[0]` / `[0, 0]`).

use serde::{Deserialize, Serialize};

use crate::domain::rules::MAX_PINS;

/// One of the ten scoring slots. Frames 1-9 hold 1-2 rolls, frame 10 holds
/// 1-3. Serialized as a bare JSON array of pin counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    rolls: Vec<u8>,
}

impl Frame {
    pub fn empty() -> Self {
        Self { rolls: Vec::new() }
    }

    pub fn from_rolls(rolls: Vec<u8>) -> Self {
        debug_assert!(rolls.len() <= 3, "a frame holds at most 3 rolls");
        Self { rolls }
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// True when the frame position has not been played yet.
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// First roll of the frame knocked down all ten pins.
    pub fn is_strike(&self) -> bool {
        self.rolls.first().copied() == Some(MAX_PINS)
    }

    /// First two rolls together knocked down all ten pins (and the first
    /// alone did not).
    pub fn is_spare(&self) -> bool {
        !self.is_strike()
            && self.rolls.len() >= 2
            && self.rolls[0] + self.rolls[1] == MAX_PINS
    }

    /// Raw pins knocked down in this frame so far, without any bonus.
    pub fn pin_total(&self) -> u16 {
        self.rolls.iter().map(|&r| u16::from(r)).sum()
    }
}

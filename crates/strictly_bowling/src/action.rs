//! First-class roll events for a bowling game.
//!
//! A roll is a domain event: the pins one ball knocked down, tagged with
//! the frame and position it was thrown at.

use super::{FrameNumber, PinCount, RollPosition};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single roll within a game.
///
/// A roll slot that has not been thrown yet carries no pin count. That is
/// distinct from a gutter ball, which carries `PinCount::ZERO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    /// Frame the roll belongs to.
    pub frame: FrameNumber,
    /// Position of the roll within the frame.
    pub position: RollPosition,
    /// Pins knocked down, or `None` if the roll has not been taken.
    pub pins: Option<PinCount>,
}

impl Roll {
    /// Creates a roll that has been taken.
    #[instrument]
    pub fn played(frame: FrameNumber, position: RollPosition, pins: PinCount) -> Self {
        Self {
            frame,
            position,
            pins: Some(pins),
        }
    }

    /// Creates an empty slot for a roll not yet taken.
    pub fn not_played(frame: FrameNumber, position: RollPosition) -> Self {
        Self {
            frame,
            position,
            pins: None,
        }
    }

    /// Returns true if the roll has been taken.
    pub fn is_played(&self) -> bool {
        self.pins.is_some()
    }

    /// Pins counted toward scoring (zero for an untaken roll).
    pub fn scored_pins(&self) -> u16 {
        self.pins.map_or(0, |pins| u16::from(pins.get()))
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.pins {
            Some(pins) => write!(f, "frame {} {} roll: {}", self.frame, self.position, pins),
            None => write!(f, "frame {} {} roll: not played", self.frame, self.position),
        }
    }
}

/// Error that can occur when submitting a roll.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RollError {
    /// More pins than are standing, or more than a full rack.
    #[display("Invalid pin count {pins}: only {standing} pins standing")]
    InvalidPinCount {
        /// Pins the caller tried to knock down.
        pins: u8,
        /// Pins standing when the roll was made.
        standing: u8,
    },

    /// The tenth frame is closed.
    #[display("Game is already complete")]
    GameAlreadyComplete,

    /// Recorded history disagrees with a caller's or postcondition's view.
    #[display("Roll sequence violation: {}", _0)]
    RollSequenceViolation(String),
}

impl std::error::Error for RollError {}

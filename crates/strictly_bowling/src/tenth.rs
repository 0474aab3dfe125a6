//! Tenth-frame state machine.
//!
//! The tenth frame settles its own bonus: a strike earns two more rolls and
//! a spare earns one, all inside the frame. After a strike the rack is reset,
//! so bonus rolls are validated against a fresh rack rather than the pins
//! left by the previous roll. The one judgment call, the second bonus roll
//! after a non-strike first bonus roll, follows the configured [`BonusRack`].

use super::action::RollError;
use super::config::BonusRack;
use super::{FrameOutcome, PinCount, PINS_PER_RACK};
use tracing::{debug, instrument};

/// Roll-acceptance state of the tenth frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TenthFrameState {
    /// No rolls yet.
    Start,
    /// First roll left pins standing.
    AwaitingSecond {
        /// Pins knocked down by the first roll.
        first: PinCount,
    },
    /// Strike on the first roll; two bonus rolls owed.
    StruckOpen {
        /// First bonus roll, once taken.
        bonus: Option<PinCount>,
    },
    /// Spare on the first two rolls; one bonus roll owed.
    SparedOpen,
    /// No further rolls accepted.
    Closed {
        /// Classification of the frame's opening rolls.
        outcome: FrameOutcome,
    },
}

/// The tenth frame: its state plus the rack rule for its bonus rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenthFrame {
    state: TenthFrameState,
    rack: BonusRack,
}

impl TenthFrame {
    /// Creates an empty tenth frame.
    pub fn new(rack: BonusRack) -> Self {
        Self {
            state: TenthFrameState::Start,
            rack,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> TenthFrameState {
        self.state
    }

    /// Returns the rack rule for bonus rolls.
    pub fn rack(&self) -> BonusRack {
        self.rack
    }

    /// Pins standing for the next roll, or `None` once closed.
    pub fn standing(&self) -> Option<u8> {
        match self.state {
            TenthFrameState::Start => Some(PINS_PER_RACK),
            TenthFrameState::AwaitingSecond { first } => Some(first.remaining()),
            TenthFrameState::StruckOpen { bonus: None } => Some(PINS_PER_RACK),
            TenthFrameState::StruckOpen { bonus: Some(bonus) } if bonus.is_strike() => {
                Some(PINS_PER_RACK)
            }
            TenthFrameState::StruckOpen { bonus: Some(bonus) } => match self.rack {
                BonusRack::Standing => Some(bonus.remaining()),
                BonusRack::Fresh => Some(PINS_PER_RACK),
            },
            TenthFrameState::SparedOpen => Some(PINS_PER_RACK),
            TenthFrameState::Closed { .. } => None,
        }
    }

    /// Consumes one roll and returns the next frame state.
    #[instrument]
    pub fn advance(self, pins: PinCount) -> Result<Self, RollError> {
        let standing = self.standing().ok_or_else(|| {
            RollError::RollSequenceViolation("tenth frame already closed".to_string())
        })?;
        if pins.get() > standing {
            return Err(RollError::InvalidPinCount {
                pins: pins.get(),
                standing,
            });
        }

        let state = match self.state {
            TenthFrameState::Start if pins.is_strike() => {
                TenthFrameState::StruckOpen { bonus: None }
            }
            TenthFrameState::Start => TenthFrameState::AwaitingSecond { first: pins },
            TenthFrameState::AwaitingSecond { first } if pins.get() == first.remaining() => {
                TenthFrameState::SparedOpen
            }
            TenthFrameState::AwaitingSecond { .. } => TenthFrameState::Closed {
                outcome: FrameOutcome::Open,
            },
            TenthFrameState::StruckOpen { bonus: None } => {
                TenthFrameState::StruckOpen { bonus: Some(pins) }
            }
            TenthFrameState::StruckOpen { bonus: Some(_) } => TenthFrameState::Closed {
                outcome: FrameOutcome::Strike,
            },
            TenthFrameState::SparedOpen => TenthFrameState::Closed {
                outcome: FrameOutcome::Spare,
            },
            TenthFrameState::Closed { .. } => {
                return Err(RollError::RollSequenceViolation(
                    "tenth frame already closed".to_string(),
                ));
            }
        };

        debug!(from = %self.state, to = %state, "Tenth frame transition");
        Ok(Self { state, ..self })
    }

    /// Returns true once the frame accepts no more rolls.
    pub fn is_closed(&self) -> bool {
        matches!(self.state, TenthFrameState::Closed { .. })
    }

    /// Classifies the frame by its opening rolls.
    ///
    /// A struck or spared tenth frame is classified as soon as the strike
    /// or spare lands, even while bonus rolls are still owed.
    pub fn outcome(&self) -> FrameOutcome {
        match self.state {
            TenthFrameState::Start | TenthFrameState::AwaitingSecond { .. } => {
                FrameOutcome::InProgress
            }
            TenthFrameState::StruckOpen { .. } => FrameOutcome::Strike,
            TenthFrameState::SparedOpen => FrameOutcome::Spare,
            TenthFrameState::Closed { outcome } => outcome,
        }
    }

    /// Bonus rolls still owed before the frame closes.
    pub fn bonus_rolls_owed(&self) -> usize {
        match self.state {
            TenthFrameState::StruckOpen { bonus: None } => 2,
            TenthFrameState::StruckOpen { bonus: Some(_) } | TenthFrameState::SparedOpen => 1,
            TenthFrameState::Start
            | TenthFrameState::AwaitingSecond { .. }
            | TenthFrameState::Closed { .. } => 0,
        }
    }

    /// Most rolls this frame can hold given what has happened so far.
    pub fn capacity(&self) -> usize {
        match self.state {
            TenthFrameState::Closed {
                outcome: FrameOutcome::Open,
            } => 2,
            _ => 3,
        }
    }
}

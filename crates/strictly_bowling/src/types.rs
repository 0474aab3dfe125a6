//! Core domain types for ten-pin bowling.

use crate::action::RollError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Pins standing in a full rack.
pub const PINS_PER_RACK: u8 = 10;

/// Frames in a complete game.
pub const FRAMES_PER_GAME: usize = 10;

/// Pins knocked down by a single roll (0-10).
///
/// A `PinCount` can only be built through validation, so holding one
/// means the bound against the rack it was rolled at has been checked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct PinCount(u8);

impl PinCount {
    /// A gutter ball.
    pub const ZERO: Self = Self(0);

    /// Every pin in the rack.
    pub const ALL: Self = Self(PINS_PER_RACK);

    /// Validates a pin count against a full rack.
    #[instrument]
    pub fn new(pins: u8) -> Result<Self, RollError> {
        Self::within(pins, PINS_PER_RACK)
    }

    /// Validates a pin count against the pins currently standing.
    #[instrument]
    pub fn within(pins: u8, standing: u8) -> Result<Self, RollError> {
        if pins > standing || pins > PINS_PER_RACK {
            return Err(RollError::InvalidPinCount { pins, standing });
        }
        Ok(Self(pins))
    }

    /// Returns the raw number of pins.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns true if every pin went down.
    pub fn is_strike(self) -> bool {
        self.0 == PINS_PER_RACK
    }

    /// Pins left standing after this roll on a full rack.
    pub fn remaining(self) -> u8 {
        PINS_PER_RACK - self.0
    }
}

impl TryFrom<u8> for PinCount {
    type Error = RollError;

    fn try_from(pins: u8) -> Result<Self, Self::Error> {
        Self::new(pins)
    }
}

impl From<PinCount> for u8 {
    fn from(pins: PinCount) -> Self {
        pins.0
    }
}

/// One-based frame number (1-10).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct FrameNumber(u8);

impl FrameNumber {
    /// The opening frame.
    pub const FIRST: Self = Self(1);

    /// The last frame, which carries its own bonus rolls.
    pub const TENTH: Self = Self(FRAMES_PER_GAME as u8);

    /// Creates a frame number, returning `None` outside 1-10.
    pub fn new(number: u8) -> Option<Self> {
        (1..=Self::TENTH.0).contains(&number).then_some(Self(number))
    }

    /// Creates a frame number from a zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_add(1)
            .and_then(|number| u8::try_from(number).ok())
            .and_then(Self::new)
    }

    /// Returns the one-based frame number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based index into a game's frames.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Returns true for the tenth frame.
    pub fn is_tenth(self) -> bool {
        self == Self::TENTH
    }

    /// Returns the following frame, or `None` after the tenth.
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }
}

impl TryFrom<u8> for FrameNumber {
    type Error = RollError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| {
            RollError::RollSequenceViolation(format!("frame number {number} is outside 1-10"))
        })
    }
}

impl From<FrameNumber> for u8 {
    fn from(number: FrameNumber) -> Self {
        number.0
    }
}

/// Ordinal position of a roll within its frame.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RollPosition {
    /// Opening roll of a frame.
    First,
    /// Second roll of a frame.
    Second,
    /// Tenth-frame bonus roll.
    Third,
}

impl RollPosition {
    /// Maps a zero-based roll index within a frame to its position.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(RollPosition::First),
            1 => Some(RollPosition::Second),
            2 => Some(RollPosition::Third),
            _ => None,
        }
    }
}

/// Classification of a frame from its own rolls.
///
/// No look-ahead is needed to classify a frame, only to score it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "snake_case")]
pub enum FrameOutcome {
    /// All ten pins on the first roll.
    Strike,
    /// All ten pins across the first two rolls.
    Spare,
    /// Pins left standing after the frame's rolls.
    Open,
    /// Not enough rolls yet to classify.
    InProgress,
}

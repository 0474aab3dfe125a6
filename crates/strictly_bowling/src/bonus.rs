//! Deferred bonus resolution for strikes and spares.
//!
//! A strike or spare in frames one through nine cannot be scored until the
//! rolls after it are known. Resolution walks the roll stream that follows
//! the frame, one roll event at a time, regardless of frame boundaries.
//! A following strike is one event worth ten, never two.

use super::frame::Frame;
use super::FrameOutcome;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Subsequent roll events a frame needs before its score is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BonusRequirement {
    /// Open frame: the frame's own pins are its score.
    NoBonus,
    /// Spare: the next roll.
    NextRoll,
    /// Strike: the next two rolls.
    NextTwoRolls,
}

impl BonusRequirement {
    /// Requirement for a frame classified as `outcome`.
    ///
    /// A frame still in progress has nothing to resolve yet.
    pub fn for_outcome(outcome: FrameOutcome) -> Self {
        match outcome {
            FrameOutcome::Strike => BonusRequirement::NextTwoRolls,
            FrameOutcome::Spare => BonusRequirement::NextRoll,
            FrameOutcome::Open | FrameOutcome::InProgress => BonusRequirement::NoBonus,
        }
    }

    /// Number of roll events required.
    pub fn rolls(self) -> usize {
        match self {
            BonusRequirement::NoBonus => 0,
            BonusRequirement::NextRoll => 1,
            BonusRequirement::NextTwoRolls => 2,
        }
    }
}

/// Resolves frame scores against the roll stream.
pub struct BonusResolver;

impl BonusResolver {
    /// Requirement for `frame`.
    ///
    /// The tenth frame carries its own bonus rolls, so it never borrows.
    pub fn requirement(frame: &Frame) -> BonusRequirement {
        if frame.number().is_tenth() {
            BonusRequirement::NoBonus
        } else {
            BonusRequirement::for_outcome(frame.outcome())
        }
    }

    /// Bonus pins for the frame at `index`, or `None` while the rolls it
    /// needs have not happened yet.
    #[instrument(skip(frames))]
    pub fn bonus(frames: &[Frame], index: usize) -> Option<u16> {
        let frame = frames.get(index)?;
        let needed = Self::requirement(frame).rolls();

        let following: Vec<u16> = frames
            .get(index + 1..)
            .unwrap_or_default()
            .iter()
            .flat_map(|later| later.rolls().iter())
            .take(needed)
            .map(|pins| u16::from(pins.get()))
            .collect();

        if following.len() < needed {
            trace!(needed, available = following.len(), "Bonus still pending");
            return None;
        }
        Some(following.iter().sum())
    }

    /// Final score of the frame at `index`, or `None` while pending.
    ///
    /// A frame still accepting rolls is always pending.
    #[instrument(skip(frames))]
    pub fn resolve(frames: &[Frame], index: usize) -> Option<u16> {
        let frame = frames.get(index)?;
        if !frame.is_closed() {
            return None;
        }
        Self::bonus(frames, index).map(|bonus| frame.pin_total() + bonus)
    }
}

//! Per-frame and cumulative scores.

use super::bonus::BonusResolver;
use super::frame::Frame;
use super::{FRAMES_PER_GAME, RollError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Score of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "status", content = "value")]
pub enum FrameScore {
    /// Not computable until more rolls arrive.
    #[default]
    Pending,
    /// Frame pins plus any bonus. Never changes once reported.
    Final(u16),
}

impl FrameScore {
    /// Returns true if the score is final.
    pub fn is_final(&self) -> bool {
        matches!(self, FrameScore::Final(_))
    }

    /// Returns the value of a final score.
    pub fn value(&self) -> Option<u16> {
        match self {
            FrameScore::Final(value) => Some(*value),
            FrameScore::Pending => None,
        }
    }
}

/// Scores for all ten frames plus running totals.
///
/// Running totals cover only the unbroken run of final frames starting
/// at frame one. A later frame is never totalled past a pending one.
/// Deserialized sheets are checked against the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawGameScore")]
pub struct GameScore {
    pub(crate) frames: Vec<FrameScore>,
    pub(crate) cumulative: Vec<u16>,
}

/// Unchecked wire form of [`GameScore`].
#[derive(Deserialize, JsonSchema)]
struct RawGameScore {
    frames: Vec<FrameScore>,
    cumulative: Vec<u16>,
}

impl TryFrom<RawGameScore> for GameScore {
    type Error = RollError;

    fn try_from(raw: RawGameScore) -> Result<Self, Self::Error> {
        if raw.frames.len() != FRAMES_PER_GAME {
            return Err(RollError::RollSequenceViolation(format!(
                "score sheet has {} frames, expected {FRAMES_PER_GAME}",
                raw.frames.len()
            )));
        }
        let score = Self {
            frames: raw.frames,
            cumulative: raw.cumulative,
        };
        if !score.totals_consistent() {
            return Err(RollError::RollSequenceViolation(
                "running totals do not match the final prefix".to_string(),
            ));
        }
        Ok(score)
    }
}

impl GameScore {
    /// A score sheet with every frame pending.
    pub fn new() -> Self {
        Self {
            frames: vec![FrameScore::Pending; FRAMES_PER_GAME],
            cumulative: Vec::new(),
        }
    }

    /// Scores `frames` from scratch.
    ///
    /// Pure in the roll history: the same frames always produce the same
    /// score sheet, so re-running it after every roll is safe.
    #[instrument(skip(frames), fields(frames = frames.len()))]
    pub fn tally(frames: &[Frame]) -> Self {
        let scores: Vec<FrameScore> = (0..FRAMES_PER_GAME)
            .map(|index| match BonusResolver::resolve(frames, index) {
                Some(value) => FrameScore::Final(value),
                None => FrameScore::Pending,
            })
            .collect();

        let cumulative = scores
            .iter()
            .map_while(FrameScore::value)
            .scan(0u16, |total, value| {
                *total += value;
                Some(*total)
            })
            .collect();

        Self {
            frames: scores,
            cumulative,
        }
    }

    /// Per-frame scores, one entry per frame.
    pub fn frames(&self) -> &[FrameScore] {
        &self.frames
    }

    /// Running totals for the final prefix.
    pub fn cumulative(&self) -> &[u16] {
        &self.cumulative
    }

    /// Number of leading frames that are final.
    pub fn final_prefix_len(&self) -> usize {
        self.cumulative.len()
    }

    /// Running total through `frame_index` (zero-based), if exposed.
    pub fn running_total(&self, frame_index: usize) -> Option<u16> {
        self.cumulative.get(frame_index).copied()
    }

    /// Total through the last final frame of the prefix.
    pub fn total(&self) -> u16 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Returns true once every frame is final.
    pub fn is_final(&self) -> bool {
        self.cumulative.len() == FRAMES_PER_GAME
    }

    /// Returns true if the running totals cover exactly the leading final
    /// frames and each adds that frame's score to the total before it.
    pub(crate) fn totals_consistent(&self) -> bool {
        let prefix = self
            .frames
            .iter()
            .take_while(|frame| frame.is_final())
            .count();
        if self.cumulative.len() != prefix {
            return false;
        }

        let mut running = 0u16;
        self.frames
            .iter()
            .zip(&self.cumulative)
            .all(|(frame, total)| match frame.value().and_then(|v| running.checked_add(v)) {
                Some(next) => {
                    running = next;
                    running == *total
                }
                None => false,
            })
    }
}

impl Default for GameScore {
    fn default() -> Self {
        Self::new()
    }
}

//! Score aggregator for a single bowling game.
//!
//! `Game` owns the frames of one game. Rolls go in through
//! [`Game::submit_roll`]; every accepted roll re-scores the whole game from
//! its roll history, so the score sheet is always a pure function of the
//! rolls taken so far.

use super::action::{Roll, RollError};
use super::config::ScoringRules;
use super::contracts::{Contract, RollContract};
use super::frame::Frame;
use super::score::GameScore;
use super::{FrameNumber, PINS_PER_RACK};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Whose frame is next, from a turn-sequencing collaborator's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    /// The frame the next roll will land in.
    Frame(FrameNumber),
    /// The tenth frame is closed.
    GameComplete,
}

/// One game of ten frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) rules: ScoringRules,
    pub(crate) frames: Vec<Frame>,
    pub(crate) score: GameScore,
}

/// Alias naming the game by its scoring role.
pub type ScoreAggregator = Game;

impl Game {
    /// Creates a game under regulation rules.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rules(ScoringRules::default())
    }

    /// Creates a game under the given rules.
    #[instrument]
    pub fn with_rules(rules: ScoringRules) -> Self {
        Self {
            rules,
            frames: Vec::new(),
            score: GameScore::new(),
        }
    }

    /// Returns the rules this game is scored under.
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Returns the frames started so far, in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the current score sheet.
    ///
    /// Never fails; frames short of rolls report as pending.
    pub fn score(&self) -> &GameScore {
        &self.score
    }

    /// Returns true once the tenth frame is closed.
    pub fn is_complete(&self) -> bool {
        self.frames
            .last()
            .is_some_and(|frame| frame.number().is_tenth() && frame.is_closed())
    }

    /// Returns the frame the next roll will land in.
    pub fn current_frame(&self) -> Turn {
        match self.frames.last() {
            Some(frame) if !frame.is_closed() => Turn::Frame(frame.number()),
            _ => FrameNumber::from_index(self.frames.len()).map_or(Turn::GameComplete, Turn::Frame),
        }
    }

    /// Pins standing for the next roll, or `None` once the game is over.
    pub fn standing(&self) -> Option<u8> {
        match self.frames.last() {
            Some(frame) if !frame.is_closed() => frame.standing(),
            _ if self.is_complete() => None,
            _ => Some(PINS_PER_RACK),
        }
    }

    /// Rolls already taken in the frame the next roll will land in.
    pub fn current_frame_rolls(&self) -> usize {
        match self.frames.last() {
            Some(frame) if !frame.is_closed() => frame.rolls().len(),
            _ => 0,
        }
    }

    /// Checks a collaborator's roll count for the current frame against
    /// the recorded history.
    ///
    /// A mismatch is a caller bug and is reported as
    /// [`RollError::RollSequenceViolation`].
    #[instrument(skip(self))]
    pub fn check_current_frame_rolls(&self, claimed: usize) -> Result<(), RollError> {
        let recorded = self.current_frame_rolls();
        if claimed == recorded {
            return Ok(());
        }
        let frame = match self.current_frame() {
            Turn::Frame(number) => number.to_string(),
            Turn::GameComplete => "after the tenth".to_string(),
        };
        Err(RollError::RollSequenceViolation(format!(
            "caller counted {claimed} rolls in frame {frame}, history has {recorded}"
        )))
    }

    /// Every roll taken so far, in order.
    pub fn rolls(&self) -> impl Iterator<Item = Roll> + '_ {
        self.frames.iter().flat_map(|frame| frame.roll_events())
    }

    /// Submits one roll to the current frame.
    ///
    /// A rejected roll leaves the game unchanged.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (`LegalRoll`)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(frame = ?self.current_frame()))]
    pub fn submit_roll(&mut self, pins: u8) -> Result<(), RollError> {
        RollContract::pre(self, &pins)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        match self.frames.last_mut().filter(|frame| !frame.is_closed()) {
            Some(frame) => {
                frame.bowl(pins)?;
            }
            None => {
                let number = FrameNumber::from_index(self.frames.len())
                    .ok_or(RollError::GameAlreadyComplete)?;
                let mut frame = Frame::new(number, *self.rules.tenth_frame_rack());
                frame.bowl(pins)?;
                debug!(frame = %number, "Frame opened");
                self.frames.push(frame);
            }
        }

        self.score = GameScore::tally(&self.frames);

        #[cfg(debug_assertions)]
        RollContract::post(&before, self)?;

        if self.is_complete() {
            info!(total = self.score.total(), "Game complete");
        }
        Ok(())
    }

    /// Builds a game by submitting `rolls` in order.
    #[instrument]
    pub fn replay(rolls: &[u8]) -> Result<Self, RollError> {
        Self::replay_with_rules(ScoringRules::default(), rolls)
    }

    /// Builds a game under `rules` by submitting `rolls` in order.
    ///
    /// Stops at the first rejected roll.
    #[instrument]
    pub fn replay_with_rules(rules: ScoringRules, rolls: &[u8]) -> Result<Self, RollError> {
        let mut game = Self::with_rules(rules);
        for &pins in rolls {
            game.submit_roll(pins)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

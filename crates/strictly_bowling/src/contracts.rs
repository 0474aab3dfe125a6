//! Contract-based validation for roll submission.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::RollError;
use super::game::Game;
use super::invariants::{BowlingInvariants, InvariantSet};
use super::score::GameScore;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RollError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), RollError>;
}

// ─────────────────────────────────────────────────────────────
//  Roll Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the tenth frame must still be open.
pub struct GameInPlay;

impl GameInPlay {
    /// Fails with `GameAlreadyComplete` once the tenth frame is closed.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), RollError> {
        if game.is_complete() {
            warn!("Roll submitted after the game ended");
            Err(RollError::GameAlreadyComplete)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the roll cannot knock down more pins than are standing.
pub struct PinsStanding;

impl PinsStanding {
    /// Fails with `InvalidPinCount` above the pins standing.
    #[instrument(skip(game))]
    pub fn check(pins: u8, game: &Game) -> Result<(), RollError> {
        let standing = game.standing().ok_or(RollError::GameAlreadyComplete)?;
        if pins > standing {
            warn!(pins, standing, "Roll knocks down more pins than are standing");
            Err(RollError::InvalidPinCount { pins, standing })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a roll is legal if the game is in play and
/// the pins are standing.
pub struct LegalRoll;

impl LegalRoll {
    /// Validates all preconditions for a roll.
    #[instrument(skip(game))]
    pub fn check(pins: u8, game: &Game) -> Result<(), RollError> {
        GameInPlay::check(game)?;
        PinsStanding::check(pins, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Score monotonicity
// ─────────────────────────────────────────────────────────────

/// Postcondition: a roll never takes back a final score.
///
/// The final prefix only grows, and a final frame keeps its value.
pub struct ScoreMonotonic;

impl ScoreMonotonic {
    /// Returns true if `after` preserves everything final in `before`.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameScore, after: &GameScore) -> bool {
        let prefix_kept = after.final_prefix_len() >= before.final_prefix_len();
        let finals_kept = before
            .frames()
            .iter()
            .zip(after.frames())
            .all(|(was, now)| !was.is_final() || was == now);

        let valid = prefix_kept && finals_kept;
        if !valid {
            warn!(
                before = before.final_prefix_len(),
                after = after.final_prefix_len(),
                "Score monotonicity violated"
            );
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Roll Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for roll submission.
///
/// Preconditions:
/// - Game must still be in play
/// - Pins must be standing
///
/// Postconditions:
/// - Game invariants hold
/// - Final scores are never revised
pub struct RollContract;

impl Contract<Game, u8> for RollContract {
    fn pre(game: &Game, pins: &u8) -> Result<(), RollError> {
        LegalRoll::check(*pins, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), RollError> {
        BowlingInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            RollError::RollSequenceViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if !ScoreMonotonic::holds(before.score(), after.score()) {
            return Err(RollError::RollSequenceViolation(
                "Postcondition failed: final score revised".to_string(),
            ));
        }
        Ok(())
    }
}

//! Strictly Bowling - type-safe ten-pin bowling scoring
//!
//! This library scores a single bowling game roll by roll. Strikes and
//! spares stay pending until the rolls they borrow from have been thrown,
//! and running totals are only reported for the unbroken run of final
//! frames from frame one.
//!
//! # Architecture
//!
//! - **Types**: validated pin counts, frame numbers and roll positions
//! - **Frames**: one state machine for frames 1-9 and one for the tenth
//! - **Bonus**: look-ahead resolution of strike and spare bonuses
//! - **Game**: the score aggregator, with contract-checked roll submission
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{FrameScore, Game, Turn};
//!
//! # fn example() -> Result<(), strictly_bowling::RollError> {
//! let mut game = Game::new();
//! game.submit_roll(10)?;
//! game.submit_roll(3)?;
//! game.submit_roll(4)?;
//!
//! assert_eq!(game.score().frames()[0], FrameScore::Final(17));
//! assert_eq!(game.score().total(), 24);
//! assert!(matches!(game.current_frame(), Turn::Frame(_)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod bonus;
mod config;
mod contracts;
mod frame;
mod game;
mod invariants;
mod score;
mod tenth;
mod types;

// Crate-level exports - Value types
pub use types::{FRAMES_PER_GAME, FrameNumber, FrameOutcome, PINS_PER_RACK, PinCount, RollPosition};

// Crate-level exports - Roll events
pub use action::{Roll, RollError};

// Crate-level exports - Frame state machines
pub use frame::{Frame, FrameState, Progress};
pub use tenth::{TenthFrame, TenthFrameState};

// Crate-level exports - Scoring
pub use bonus::{BonusRequirement, BonusResolver};
pub use score::{FrameScore, GameScore};

// Crate-level exports - Game
pub use game::{Game, ScoreAggregator, Turn};

// Crate-level exports - Configuration
pub use config::{BonusRack, ConfigError, ScoringRules};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, GameInPlay, LegalRoll, PinsStanding, RollContract, ScoreMonotonic};
pub use invariants::{
    BowlingInvariants, FinalPrefixInvariant, FrameSequenceInvariant, Invariant,
    InvariantSet, InvariantViolation, RackBoundInvariant,
};

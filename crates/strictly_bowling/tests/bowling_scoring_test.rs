//! Scoring tests for complete and partial games.

use strictly_bowling::{
    FrameNumber, FrameOutcome, FrameScore, Game, GameScore, RollError, Turn,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn finals(score: &GameScore) -> Vec<Option<u16>> {
    score.frames().iter().map(FrameScore::value).collect()
}

#[test]
fn test_gutter_game() {
    init_tracing();
    let game = Game::replay(&[0; 20]).expect("Valid game");

    assert!(game.is_complete());
    assert_eq!(game.current_frame(), Turn::GameComplete);
    assert!(game.score().frames().iter().all(|f| *f == FrameScore::Final(0)));
    assert_eq!(game.score().cumulative(), &[0; 10]);
    assert_eq!(game.score().total(), 0);
}

#[test]
fn test_perfect_game() {
    init_tracing();
    let game = Game::replay(&[10; 12]).expect("Valid game");

    assert!(game.is_complete());
    assert!(game.score().frames().iter().all(|f| *f == FrameScore::Final(30)));
    assert_eq!(
        game.score().cumulative(),
        &[30, 60, 90, 120, 150, 180, 210, 240, 270, 300]
    );
    assert_eq!(game.score().total(), 300);
}

#[test]
fn test_all_spares() {
    let game = Game::replay(&[5; 21]).expect("Valid game");

    assert!(game.is_complete());
    assert!(game.score().frames().iter().all(|f| *f == FrameScore::Final(15)));
    assert_eq!(game.score().total(), 150);
}

#[test]
fn test_single_strike() {
    let mut rolls = vec![10, 3, 4];
    rolls.extend([0; 16]);
    let game = Game::replay(&rolls).expect("Valid game");

    let score = game.score();
    assert_eq!(score.frames()[0], FrameScore::Final(17));
    assert_eq!(score.frames()[1], FrameScore::Final(7));
    assert_eq!(score.running_total(1), Some(24));
    assert_eq!(score.total(), 24);
    assert!(game.is_complete());
}

#[test]
fn test_mixed_game() {
    // X, 7/, 9-, X, -8, 8/, -6, X, X, X81
    let rolls = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];
    let game = Game::replay(&rolls).expect("Valid game");

    assert_eq!(
        game.score().cumulative(),
        &[20, 39, 48, 66, 74, 84, 90, 120, 148, 167]
    );
    assert_eq!(game.score().total(), 167);
}

#[test]
fn test_strike_pending_until_two_rolls() {
    let mut game = Game::new();
    game.submit_roll(10).unwrap();
    assert_eq!(game.score().frames()[0], FrameScore::Pending);

    game.submit_roll(10).unwrap();
    assert_eq!(game.score().frames()[0], FrameScore::Pending);
    assert_eq!(game.score().frames()[1], FrameScore::Pending);

    game.submit_roll(4).unwrap();
    assert_eq!(game.score().frames()[0], FrameScore::Final(24));
    assert_eq!(game.score().frames()[1], FrameScore::Pending);
    assert_eq!(game.score().cumulative(), &[24]);

    game.submit_roll(2).unwrap();
    assert_eq!(finals(game.score())[..3], [Some(24), Some(16), Some(6)]);
    assert_eq!(game.score().cumulative(), &[24, 40, 46]);
}

#[test]
fn test_pending_frame_blocks_later_totals() {
    // Spare in frame 1 stays pending while frame 1's bonus roll is unknown;
    // nothing after it can be totalled.
    let game = Game::replay(&[4, 6]).unwrap();
    assert_eq!(game.score().final_prefix_len(), 0);

    let game = Game::replay(&[4, 6, 3]).unwrap();
    assert_eq!(game.score().frames()[0], FrameScore::Final(13));
    assert_eq!(game.score().frames()[1], FrameScore::Pending);
    assert_eq!(game.score().cumulative(), &[13]);
}

#[test]
fn test_score_is_idempotent() {
    let game = Game::replay(&[10, 7, 3, 4]).unwrap();
    let first = game.score().clone();
    let second = game.score().clone();
    assert_eq!(first, second);
    assert_eq!(GameScore::tally(game.frames()), first);
}

#[test]
fn test_score_is_monotonic() {
    let rolls = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];
    let mut game = Game::new();
    let mut previous = game.score().clone();

    for pins in rolls {
        game.submit_roll(pins).unwrap();
        let current = game.score().clone();

        assert!(current.final_prefix_len() >= previous.final_prefix_len());
        for (was, now) in previous.frames().iter().zip(current.frames()) {
            if was.is_final() {
                assert_eq!(was, now);
            }
        }
        previous = current;
    }
}

#[test]
fn test_eleven_pins_rejected() {
    let mut game = Game::new();
    let before = game.clone();

    assert_eq!(
        game.submit_roll(11),
        Err(RollError::InvalidPinCount {
            pins: 11,
            standing: 10
        })
    );
    assert_eq!(game, before);
}

#[test]
fn test_more_than_standing_rejected() {
    let mut game = Game::replay(&[5]).unwrap();
    let before = game.clone();

    assert!(matches!(
        game.submit_roll(6),
        Err(RollError::InvalidPinCount { pins: 6, standing: 5 })
    ));
    assert_eq!(game, before);
    assert_eq!(game.score(), before.score());
}

#[test]
fn test_roll_after_game_complete_rejected() {
    let mut game = Game::replay(&[1; 20]).unwrap();
    let before = game.clone();

    assert_eq!(game.submit_roll(0), Err(RollError::GameAlreadyComplete));
    assert_eq!(game, before);
    assert_eq!(game.standing(), None);
}

#[test]
fn test_replay_stops_at_first_error() {
    assert!(matches!(
        Game::replay(&[3, 8, 1]),
        Err(RollError::InvalidPinCount { pins: 8, standing: 7 })
    ));
}

#[test]
fn test_turn_progression() {
    let mut game = Game::new();
    for expected in 1..=9 {
        assert_eq!(
            game.current_frame(),
            Turn::Frame(FrameNumber::new(expected).unwrap())
        );
        game.submit_roll(10).unwrap();
    }
    assert_eq!(game.current_frame(), Turn::Frame(FrameNumber::TENTH));
    game.submit_roll(10).unwrap();
    game.submit_roll(10).unwrap();
    assert_eq!(game.current_frame(), Turn::Frame(FrameNumber::TENTH));
    game.submit_roll(10).unwrap();
    assert_eq!(game.current_frame(), Turn::GameComplete);
}

#[test]
fn test_frame_outcomes() {
    let game = Game::replay(&[10, 6, 4, 3, 2, 5]).unwrap();
    let outcomes: Vec<FrameOutcome> = game.frames().iter().map(|f| f.outcome()).collect();
    assert_eq!(
        outcomes,
        vec![
            FrameOutcome::Strike,
            FrameOutcome::Spare,
            FrameOutcome::Open,
            FrameOutcome::InProgress,
        ]
    );
}

#[test]
fn test_pin_sum_bound_holds_for_all_regular_frames() {
    let game = Game::replay(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]).unwrap();
    for frame in game.frames().iter().filter(|f| !f.number().is_tenth()) {
        assert!(frame.pin_total() <= 10);
    }
}

#[test]
fn test_roll_sequence_violation_on_mismatched_count() {
    let game = Game::replay(&[4]).unwrap();
    assert!(game.check_current_frame_rolls(1).is_ok());

    let err = game.check_current_frame_rolls(0).unwrap_err();
    assert!(matches!(err, RollError::RollSequenceViolation(_)));
    assert!(err.to_string().contains("history has 1"));
}

//! Frame sequence invariant: frames open in order and close before the next.

use super::super::{Game, FRAMES_PER_GAME};
use super::Invariant;

/// Invariant: frames are numbered 1..n in order, each holds at least one
/// roll, and only the last may still be open.
pub struct FrameSequenceInvariant;

impl Invariant<Game> for FrameSequenceInvariant {
    fn holds(game: &Game) -> bool {
        let frames = game.frames();
        if frames.len() > FRAMES_PER_GAME {
            return false;
        }

        let last = frames.len().saturating_sub(1);
        frames.iter().enumerate().all(|(index, frame)| {
            frame.number().index() == index
                && !frame.rolls().is_empty()
                && (index == last || frame.is_closed())
        })
    }

    fn description() -> &'static str {
        "Frames open in order and only the last may be open"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(FrameSequenceInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_open_last_frame_holds() {
        let game = Game::replay(&[10, 10, 4]).unwrap();
        assert!(FrameSequenceInvariant::holds(&game));
    }

    #[test]
    fn test_complete_game_holds() {
        let game = Game::replay(&[10; 12]).unwrap();
        assert!(FrameSequenceInvariant::holds(&game));
    }

    #[test]
    fn test_open_frame_before_last_violates() {
        let mut game = Game::replay(&[3, 4, 5]).unwrap();

        // Corrupt the history by dropping the closed frame
        game.frames.remove(0);
        assert!(!FrameSequenceInvariant::holds(&game));
    }
}

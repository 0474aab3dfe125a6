//! Rack bound invariant: no frame knocks down more pins than were standing.

use super::super::config::BonusRack;
use super::super::frame::Frame;
use super::super::{Game, PINS_PER_RACK};
use super::Invariant;

/// Invariant: every frame's rolls fit the pins that were standing.
///
/// Frames one through nine knock down at most ten pins in total, and a
/// strike is the only roll of its frame. The tenth frame may exceed ten
/// only through bonus rolls earned by a strike or spare.
pub struct RackBoundInvariant;

impl RackBoundInvariant {
    fn regular_frame_holds(pins: &[u8]) -> bool {
        match pins {
            [] => true,
            [first] => *first <= PINS_PER_RACK,
            [first, second] => *first < PINS_PER_RACK && first + second <= PINS_PER_RACK,
            _ => false,
        }
    }

    fn tenth_frame_holds(pins: &[u8], rack: BonusRack) -> bool {
        let fits = |a: u8, b: u8| a + b <= PINS_PER_RACK;
        match pins {
            [] => true,
            [first] => *first <= PINS_PER_RACK,
            [first, second] if *first < PINS_PER_RACK => fits(*first, *second),
            [_, second] => *second <= PINS_PER_RACK,
            [first, second, third] if *first == PINS_PER_RACK => {
                let second_fresh = *second == PINS_PER_RACK || rack == BonusRack::Fresh;
                *second <= PINS_PER_RACK
                    && *third <= PINS_PER_RACK
                    && (second_fresh || fits(*second, *third))
            }
            [first, second, third] => first + second == PINS_PER_RACK && *third <= PINS_PER_RACK,
            _ => false,
        }
    }

    fn frame_holds(frame: &Frame, rack: BonusRack) -> bool {
        let pins: Vec<u8> = frame.rolls().iter().map(|p| p.get()).collect();
        if frame.number().is_tenth() {
            Self::tenth_frame_holds(&pins, rack)
        } else {
            Self::regular_frame_holds(&pins)
        }
    }
}

impl Invariant<Game> for RackBoundInvariant {
    fn holds(game: &Game) -> bool {
        let rack = *game.rules().tenth_frame_rack();
        game.frames()
            .iter()
            .all(|frame| Self::frame_holds(frame, rack))
    }

    fn description() -> &'static str {
        "Frame pins never exceed the pins standing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoringRules;

    #[test]
    fn test_empty_game_holds() {
        assert!(RackBoundInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_regular_frames_hold() {
        let game = Game::replay(&[10, 9, 1, 0, 10, 4, 5]).unwrap();
        assert!(RackBoundInvariant::holds(&game));
    }

    #[test]
    fn test_tenth_frame_bonus_exemption() {
        let mut rolls = vec![0; 18];
        rolls.extend([10, 10, 10]);
        let game = Game::replay(&rolls).unwrap();
        assert!(RackBoundInvariant::holds(&game));
    }

    #[test]
    fn test_fresh_rack_tenth_holds() {
        let mut rolls = vec![0; 18];
        rolls.extend([10, 7, 9]);
        let rules = ScoringRules::new().with_tenth_frame_rack(BonusRack::Fresh);
        let game = Game::replay_with_rules(rules, &rolls).unwrap();
        assert!(RackBoundInvariant::holds(&game));
    }

    #[test]
    fn test_overfull_frames_violate() {
        assert!(!RackBoundInvariant::regular_frame_holds(&[5, 6]));
        assert!(!RackBoundInvariant::regular_frame_holds(&[10, 0]));
        assert!(!RackBoundInvariant::regular_frame_holds(&[1, 1, 1]));
        assert!(!RackBoundInvariant::tenth_frame_holds(&[3, 4, 2], BonusRack::Standing));
        assert!(!RackBoundInvariant::tenth_frame_holds(&[10, 7, 9], BonusRack::Standing));
        assert!(RackBoundInvariant::tenth_frame_holds(&[10, 7, 9], BonusRack::Fresh));
    }
}

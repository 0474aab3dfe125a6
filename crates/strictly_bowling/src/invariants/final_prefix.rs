//! Final prefix invariant: running totals never skip a pending frame.

use super::super::Game;
use super::Invariant;

/// Invariant: running totals cover exactly the leading run of final
/// frames, and each total adds that frame's score to the one before.
///
/// Also checks that no frame reports a final score before it has closed.
pub struct FinalPrefixInvariant;

impl Invariant<Game> for FinalPrefixInvariant {
    fn holds(game: &Game) -> bool {
        let score = game.score();
        let finals_closed = score
            .frames()
            .iter()
            .enumerate()
            .filter(|(_, frame)| frame.is_final())
            .all(|(index, _)| game.frames().get(index).is_some_and(|f| f.is_closed()));

        finals_closed && score.totals_consistent()
    }

    fn description() -> &'static str {
        "Running totals cover exactly the final prefix"
    }
}

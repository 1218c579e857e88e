//! Utility functions for testing and demos.

use crate::interface::*;

/// Play a complete game from `start` with the two provided strategies.
///
/// The first strategy plays for whichever player is active at `start`.
/// Returns the result of the game.
pub fn battle_royale<S, S1, S2>(start: S, s1: &mut S1, s2: &mut S2) -> Winner
where
    S: GameState,
    S1: Strategy<S>,
    S2: Strategy<S>,
{
    let mut state = start;
    let mut strategies: [&mut dyn Strategy<S>; 2] = [s1, s2];
    let mut turn = 0;
    loop {
        if let Some(winner) = state.winner() {
            return winner;
        }
        let strategy = &mut strategies[turn];
        match strategy.choose_move(&state) {
            Ok(m) => {
                state = state
                    .apply(m)
                    .unwrap_or_else(|_| panic!("strategy chose an illegal move {:?}", m));
            }
            Err(NoLegalMove) => unreachable!("non-terminal state had no legal moves"),
        }
        turn = 1 - turn;
    }
}

//! An implementation of exhaustive recursive minimax.
//!
//! Searches every line of play to the end of the game, so the chosen move is
//! provably optimal. No pruning; running time is exponential in the number
//! of remaining plies, which is fine for small endgames and hopeless for
//! anything deep.

use super::util::*;
use crate::interface::*;

use log::debug;

pub struct Recursive {
    prev_score: Option<Score>,
    // Nodes scored by the last choose_move.
    nodes_explored: usize,
}

impl Recursive {
    pub fn new() -> Recursive {
        Recursive { prev_score: None, nodes_explored: 0 }
    }

    /// The score of the root position in the last search, from the
    /// perspective of the player who was to move there.
    pub fn root_score(&self) -> Option<Score> {
        self.prev_score
    }

    /// A human-readable summary of the last move generation.
    pub fn stats(&self) -> String {
        format!("Explored {} nodes.", self.nodes_explored)
    }

    // Exact value of s for the player to move at s.
    fn minimax<S: GameState>(&mut self, s: &S) -> Score {
        self.nodes_explored += 1;
        if let Some(winner) = s.winner() {
            return Score::from_winner(winner, s.active_player());
        }
        let mut best = Score::Loss;
        for m in s.legal_moves() {
            let value = -self.minimax(&successor(s, m));
            best = best.max(value);
        }
        best
    }
}

impl Default for Recursive {
    fn default() -> Self {
        Recursive::new()
    }
}

impl<S: GameState> Strategy<S> for Recursive {
    fn choose_move(&mut self, s: &S) -> Result<S::M, NoLegalMove> {
        self.nodes_explored = 0;
        let mut moves = s.legal_moves().into_iter();
        let first = moves.next().ok_or(NoLegalMove)?;
        let mut best = BestMove::new(-self.minimax(&successor(s, first)), first);
        for m in moves {
            best.max(-self.minimax(&successor(s, m)), m);
        }
        let (score, m) = best.into_inner();
        self.prev_score = Some(score);
        debug!("recursive minimax chose {:?} scoring {:?}; {}", m, score, self.stats());
        Ok(m)
    }
}

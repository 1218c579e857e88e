//! An implementation of depth-limited minimax.
//!
//! Searches exactly like the recursive strategy down to a configured number
//! of plies, then substitutes the state's own
//! [`rough_outcome`](crate::interface::GameState::rough_outcome) estimate for
//! further expansion. Running time is bounded by the horizon; the price is
//! that choices below the horizon are only as good as the heuristic, and need
//! not match the exhaustive strategies.

use super::util::*;
use crate::interface::*;

use log::debug;

/// The default search horizon, in plies.
pub const DEFAULT_MAX_DEPTH: usize = 4;

pub struct Myopic {
    max_depth: usize,
    prev_score: Option<Score>,
    nodes_explored: usize,
    // Subtrees cut off at the horizon in the last search.
    truncations: usize,
}

impl Myopic {
    /// Create a strategy that searches `max_depth` plies ahead.
    ///
    /// Panics if `max_depth` is zero; a zero-ply search could not examine
    /// any move at all.
    pub fn new(max_depth: usize) -> Myopic {
        assert!(max_depth > 0, "max_depth must be positive");
        Myopic { max_depth, prev_score: None, nodes_explored: 0, truncations: 0 }
    }

    /// The configured search horizon, in plies.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The score of the root position in the last search, from the
    /// perspective of the player who was to move there. Estimated, not
    /// exact, whenever any subtree was truncated.
    pub fn root_score(&self) -> Option<Score> {
        self.prev_score
    }

    /// A human-readable summary of the last move generation.
    pub fn stats(&self) -> String {
        format!(
            "Explored {} nodes; cut off {} subtrees at depth {}.",
            self.nodes_explored, self.truncations, self.max_depth
        )
    }

    // Value of s for the player to move at s, exact only above the horizon.
    // `depth` counts plies from the root.
    fn minimax<S: GameState>(&mut self, s: &S, depth: usize) -> Score {
        self.nodes_explored += 1;
        if let Some(winner) = s.winner() {
            return Score::from_winner(winner, s.active_player());
        }
        if depth >= self.max_depth {
            self.truncations += 1;
            return s.rough_outcome().estimate();
        }
        let mut best = Score::Loss;
        for m in s.legal_moves() {
            let value = -self.minimax(&successor(s, m), depth + 1);
            best = best.max(value);
        }
        best
    }
}

impl Default for Myopic {
    fn default() -> Self {
        Myopic::new(DEFAULT_MAX_DEPTH)
    }
}

impl<S: GameState> Strategy<S> for Myopic {
    fn choose_move(&mut self, s: &S) -> Result<S::M, NoLegalMove> {
        self.nodes_explored = 0;
        self.truncations = 0;
        let mut moves = s.legal_moves().into_iter();
        let first = moves.next().ok_or(NoLegalMove)?;
        let mut best = BestMove::new(-self.minimax(&successor(s, first), 1), first);
        for m in moves {
            best.max(-self.minimax(&successor(s, m), 1), m);
        }
        let (score, m) = best.into_inner();
        self.prev_score = Some(score);
        debug!("myopic minimax chose {:?} scoring {:?}; {}", m, score, self.stats());
        Ok(m)
    }
}

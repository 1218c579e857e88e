//! An implementation of minimax with an explicit work stack.
//!
//! Chooses exactly the same move as [`Recursive`](super::recursive::Recursive)
//! for every input, but keeps the pending positions in a heap-allocated stack
//! of frames instead of the call stack. Use it for games whose trees run
//! deeper than the host's execution stack can safely recurse.

use super::util::*;
use crate::interface::*;

use log::debug;
use std::cmp::max;

// One position whose children are still being resolved. `scores` holds the
// values of expanded children, already flipped to this frame's perspective;
// `next` indexes the first unexpanded move.
struct Frame<S: GameState> {
    state: S,
    moves: Vec<S::M>,
    next: usize,
    scores: Vec<Score>,
}

impl<S: GameState> Frame<S> {
    // Only called for non-terminal states, so `moves` is never empty.
    fn new(state: S) -> Frame<S> {
        let moves = state.legal_moves();
        Frame { state, moves, next: 0, scores: Vec::new() }
    }

    // First-encountered maximum among the resolved children. Matches the
    // selection order of the recursive strategy move for move.
    fn fold(&self) -> (Score, S::M) {
        let mut best = BestMove::new(self.scores[0], self.moves[0]);
        for (&score, &m) in self.scores.iter().zip(self.moves.iter()).skip(1) {
            best.max(score, m);
        }
        best.into_inner()
    }
}

pub struct Iterative {
    prev_score: Option<Score>,
    nodes_explored: usize,
    // High-water mark of the explicit stack in the last search, in frames.
    max_stack_depth: usize,
}

impl Iterative {
    pub fn new() -> Iterative {
        Iterative { prev_score: None, nodes_explored: 0, max_stack_depth: 0 }
    }

    /// The score of the root position in the last search, from the
    /// perspective of the player who was to move there.
    pub fn root_score(&self) -> Option<Score> {
        self.prev_score
    }

    /// A human-readable summary of the last move generation.
    pub fn stats(&self) -> String {
        format!(
            "Explored {} nodes; work stack peaked at {} frames.",
            self.nodes_explored, self.max_stack_depth
        )
    }
}

impl Default for Iterative {
    fn default() -> Self {
        Iterative::new()
    }
}

impl<S: GameState + Clone> Strategy<S> for Iterative {
    fn choose_move(&mut self, s: &S) -> Result<S::M, NoLegalMove> {
        self.nodes_explored = 0;
        self.max_stack_depth = 1;
        if s.winner().is_some() {
            return Err(NoLegalMove);
        }

        let mut stack = vec![Frame::new(s.clone())];
        loop {
            let top = stack.last_mut().unwrap();
            if top.next < top.moves.len() {
                // Expand the next child of the deepest pending frame.
                let m = top.moves[top.next];
                top.next += 1;
                let succ = successor(&top.state, m);
                self.nodes_explored += 1;
                if let Some(winner) = succ.winner() {
                    let value = Score::from_winner(winner, succ.active_player());
                    top.scores.push(-value);
                } else {
                    stack.push(Frame::new(succ));
                    self.max_stack_depth = max(self.max_stack_depth, stack.len());
                }
            } else {
                // All children resolved: fold upward.
                let (score, m) = top.fold();
                stack.pop();
                match stack.last_mut() {
                    Some(parent) => parent.scores.push(-score),
                    None => {
                        // That was the root frame.
                        self.prev_score = Some(score);
                        debug!(
                            "iterative minimax chose {:?} scoring {:?}; {}",
                            m,
                            score,
                            self.stats()
                        );
                        return Ok(m);
                    }
                }
            }
        }
    }
}

//! An implementation of recursive minimax with a transposition cache.
//!
//! Positions reachable by several move orders are scored once and reused,
//! which collapses heavily transposing games. Requires states to implement
//! [`CanonicalKey`]; soundness rests entirely on that key capturing every
//! distinction that affects future play.

use super::util::*;
use crate::interface::*;

use log::debug;
use std::collections::HashMap;

/// How long a [`Memoizing`] strategy keeps its cache.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CacheScope {
    /// Clear the cache at the start of every `choose_move`. Bounded memory
    /// per search, no reuse between turns.
    PerCall,
    /// Keep the cache for the lifetime of the strategy instance. Successive
    /// turns of a game hit positions scored on earlier turns; memory grows
    /// with every distinct position ever visited.
    PerInstance,
}

/// Cached entries hold the score of the position from the perspective of the
/// player to move at that position.
pub struct Memoizing<S: GameState + CanonicalKey> {
    scope: CacheScope,
    cache: HashMap<S::Key, Score>,
    prev_score: Option<Score>,
    nodes_explored: usize,
    cache_hits: usize,
}

impl<S: GameState + CanonicalKey> Memoizing<S> {
    pub fn new(scope: CacheScope) -> Memoizing<S> {
        Memoizing {
            scope,
            cache: HashMap::new(),
            prev_score: None,
            nodes_explored: 0,
            cache_hits: 0,
        }
    }

    /// The score of the root position in the last search, from the
    /// perspective of the player who was to move there.
    pub fn root_score(&self) -> Option<Score> {
        self.prev_score
    }

    /// How many subtrees the last `choose_move` skipped via the cache.
    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    /// A human-readable summary of the last move generation.
    pub fn stats(&self) -> String {
        format!(
            "Explored {} nodes with {} cache hits; cache holds {} positions.",
            self.nodes_explored,
            self.cache_hits,
            self.cache.len()
        )
    }

    // Exact value of s for the player to move at s, consulting the cache
    // before expanding any subtree.
    fn minimax(&mut self, s: &S) -> Score {
        self.nodes_explored += 1;
        if let Some(winner) = s.winner() {
            // Terminal scores are cheap to recompute; don't cache them.
            return Score::from_winner(winner, s.active_player());
        }
        let key = s.canonical_key();
        if let Some(&value) = self.cache.get(&key) {
            self.cache_hits += 1;
            return value;
        }
        let mut best = Score::Loss;
        for m in s.legal_moves() {
            let value = -self.minimax(&successor(s, m));
            best = best.max(value);
        }
        self.cache.insert(key, best);
        best
    }
}

impl<S: GameState + CanonicalKey> Default for Memoizing<S> {
    fn default() -> Self {
        Memoizing::new(CacheScope::PerCall)
    }
}

impl<S: GameState + CanonicalKey> Strategy<S> for Memoizing<S> {
    fn choose_move(&mut self, s: &S) -> Result<S::M, NoLegalMove> {
        if self.scope == CacheScope::PerCall {
            self.cache.clear();
        }
        self.nodes_explored = 0;
        self.cache_hits = 0;
        let mut moves = s.legal_moves().into_iter();
        let first = moves.next().ok_or(NoLegalMove)?;
        let mut best = BestMove::new(-self.minimax(&successor(s, first)), first);
        for m in moves {
            best.max(-self.minimax(&successor(s, m)), m);
        }
        let (score, m) = best.into_inner();
        self.prev_score = Some(score);
        debug!("memoizing minimax chose {:?} scoring {:?}; {}", m, score, self.stats());
        Ok(m)
    }
}

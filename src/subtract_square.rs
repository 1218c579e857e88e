//! A definition of the game Subtract Square using the library, for use in
//! tests and demos.
//!
//! Players take turns subtracting a positive square number from a running
//! total. Whoever reduces the total to zero leaves the opponent without a
//! move and wins. The game transposes heavily (many move orders reach the
//! same total), which makes it a good workout for the memoizing strategy.

use crate::interface::*;
use std::fmt::{self, Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubtractSquare {
    to_move: Player,
    total: u32,
}

fn is_positive_square(n: u32) -> bool {
    // u64 arithmetic so the root check cannot overflow near u32::MAX.
    n > 0 && {
        let root = (n as f64).sqrt() as u64;
        root * root == n as u64 || (root + 1) * (root + 1) == n as u64
    }
}

impl SubtractSquare {
    /// Start a game at `total`, with `first` to move.
    pub fn new(first: Player, total: u32) -> SubtractSquare {
        SubtractSquare { to_move: first, total }
    }

    /// The current running total.
    pub fn total(&self) -> u32 {
        self.total
    }
}

impl Display for SubtractSquare {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Current total: {}", self.total)
    }
}

impl GameState for SubtractSquare {
    type M = u32;

    fn active_player(&self) -> Player {
        self.to_move
    }

    fn legal_moves(&self) -> Vec<u32> {
        let mut moves = Vec::new();
        let mut n: u64 = 1;
        while n * n <= self.total as u64 {
            moves.push((n * n) as u32);
            n += 1;
        }
        moves
    }

    fn apply(&self, m: u32) -> Result<SubtractSquare, InvalidMove> {
        if m == 0 || m > self.total || !is_positive_square(m) {
            return Err(InvalidMove);
        }
        Ok(SubtractSquare { to_move: self.to_move.opponent(), total: self.total - m })
    }

    fn winner(&self) -> Option<Winner> {
        if self.total == 0 {
            // The player who subtracted to zero has already moved.
            Some(Winner::Competitor(self.to_move.opponent()))
        } else {
            None
        }
    }

    fn rough_outcome(&self) -> RoughOutcome {
        if is_positive_square(self.total) {
            // We can take the whole total and win immediately.
            RoughOutcome::LikelyWin
        } else if self
            .legal_moves()
            .iter()
            .all(|&m| is_positive_square(self.total - m))
        {
            // Every move hands the opponent an immediate win.
            RoughOutcome::LikelyLoss
        } else {
            RoughOutcome::Unknown
        }
    }
}

impl CanonicalKey for SubtractSquare {
    type Key = (u32, Player);

    fn canonical_key(&self) -> (u32, Player) {
        (self.total, self.to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_moves_are_squares_up_to_total() {
        let s = SubtractSquare::new(Player::One, 20);
        assert_eq!(s.legal_moves(), vec![1, 4, 9, 16]);
        let s = SubtractSquare::new(Player::One, 1);
        assert_eq!(s.legal_moves(), vec![1]);
    }

    #[test]
    fn terminal_iff_no_moves() {
        let s = SubtractSquare::new(Player::One, 0);
        assert!(s.legal_moves().is_empty());
        assert_eq!(s.winner(), Some(Winner::Competitor(Player::Two)));
        let s = SubtractSquare::new(Player::Two, 5);
        assert_eq!(s.winner(), None);
    }

    #[test]
    fn apply_rejects_illegal_moves() {
        let s = SubtractSquare::new(Player::One, 10);
        assert_eq!(s.apply(3), Err(InvalidMove));
        assert_eq!(s.apply(16), Err(InvalidMove));
        assert_eq!(s.apply(0), Err(InvalidMove));
        let next = s.apply(9).unwrap();
        assert_eq!(next.total(), 1);
        assert_eq!(next.active_player(), Player::Two);
    }

    #[test]
    fn rough_outcome_matches_heuristic() {
        // 16 is a square: take it all.
        assert_eq!(SubtractSquare::new(Player::One, 16).rough_outcome(), RoughOutcome::LikelyWin);
        // From 2 the only move is 1, leaving 1, a square, for the opponent.
        assert_eq!(SubtractSquare::new(Player::One, 2).rough_outcome(), RoughOutcome::LikelyLoss);
        // From 3: subtracting 1 leaves 2, not a square.
        assert_eq!(SubtractSquare::new(Player::One, 3).rough_outcome(), RoughOutcome::Unknown);
    }

    #[test]
    fn canonical_key_ignores_history() {
        // 12 -> 11 -> 2 and 12 -> 3 -> 2 reach the same position.
        let a = SubtractSquare::new(Player::One, 12).apply(1).unwrap().apply(9).unwrap();
        let b = SubtractSquare::new(Player::One, 12).apply(9).unwrap().apply(1).unwrap();
        assert_eq!(a.canonical_key(), b.canonical_key());
    }
}

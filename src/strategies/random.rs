//! A strategy that randomly chooses a move, for use in tests.

use crate::interface::*;
use rand::Rng;

pub struct Random {
    rng: rand::rngs::ThreadRng,
}

impl Random {
    pub fn new() -> Random {
        Random { rng: rand::thread_rng() }
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl<S: GameState> Strategy<S> for Random {
    fn choose_move(&mut self, s: &S) -> Result<S::M, NoLegalMove> {
        let moves = s.legal_moves();
        if moves.is_empty() {
            return Err(NoLegalMove);
        }
        Ok(moves[self.rng.gen_range(0..moves.len())])
    }
}

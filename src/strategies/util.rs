use crate::interface::*;

/// The successor reached by a move the state itself enumerated.
///
/// `legal_moves` and `apply` are required to agree, so a failure here is a
/// bug in the `GameState` implementation and not recoverable by the search.
pub(super) fn successor<S: GameState>(s: &S, m: S::M) -> S {
    match s.apply(m) {
        Ok(next) => next,
        Err(InvalidMove) => panic!("legal_moves() produced a move {:?} that apply() rejects", m),
    }
}

/// Running maximum over (score, move) pairs, keeping the first-encountered
/// move when scores tie. All strategies select with this so that their
/// choices stay comparable.
pub(super) struct BestMove<M> {
    score: Score,
    m: M,
}

impl<M: Copy> BestMove<M> {
    pub(super) fn new(score: Score, m: M) -> Self {
        BestMove { score, m }
    }

    pub(super) fn max(&mut self, score: Score, m: M) {
        if score > self.score {
            self.score = score;
            self.m = m;
        }
    }

    pub(super) fn into_inner(self) -> (Score, M) {
        (self.score, self.m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_move_keeps_first_on_tie() {
        let mut best = BestMove::new(Score::Tie, 'a');
        best.max(Score::Tie, 'b');
        assert_eq!(best.into_inner(), (Score::Tie, 'a'));
    }

    #[test]
    fn best_move_upgrades_on_strict_improvement() {
        let mut best = BestMove::new(Score::Loss, 'a');
        best.max(Score::Tie, 'b');
        best.max(Score::Win, 'c');
        best.max(Score::Win, 'd');
        assert_eq!(best.into_inner(), (Score::Win, 'c'));
    }
}

// All exhaustive strategies are fundamentally the same minimax algorithm and
// must agree on every choice; the myopic strategy must respect its depth
// bound. This file checks those properties against the bundled Subtract
// Square game and against purpose-built stub games.

use plymax::subtract_square::SubtractSquare;
use plymax::{
    CacheScope, CanonicalKey, GameState, InvalidMove, Iterative, Memoizing, Myopic, NoLegalMove,
    Player, Recursive, RoughOutcome, Score, Strategy, Winner,
};

use std::cell::RefCell;
use std::rc::Rc;

// Whether the player to move at `total` can force a win, by dynamic
// programming. The reference answer the searches must reproduce.
fn forced_win(total: u32) -> bool {
    let mut win = vec![false; total as usize + 1];
    for t in 1..=total as usize {
        let mut n = 1;
        while n * n <= t {
            if !win[t - n * n] {
                win[t] = true;
                break;
            }
            n += 1;
        }
    }
    win[total as usize]
}

#[test]
fn exhaustive_strategies_agree() {
    let mut recursive = Recursive::new();
    let mut iterative = Iterative::new();
    let mut per_call = Memoizing::new(CacheScope::PerCall);
    let mut per_instance = Memoizing::new(CacheScope::PerInstance);
    for total in 1..=25 {
        let s = SubtractSquare::new(Player::One, total);
        let expected = recursive.choose_move(&s).unwrap();
        assert_eq!(iterative.choose_move(&s), Ok(expected), "total={}", total);
        assert_eq!(per_call.choose_move(&s), Ok(expected), "total={}", total);
        assert_eq!(per_instance.choose_move(&s), Ok(expected), "total={}", total);
        assert_eq!(iterative.root_score(), recursive.root_score(), "total={}", total);
        assert_eq!(per_call.root_score(), recursive.root_score(), "total={}", total);
        assert_eq!(per_instance.root_score(), recursive.root_score(), "total={}", total);
    }
}

#[test]
fn choices_are_deterministic() {
    let s = SubtractSquare::new(Player::One, 18);
    let mut recursive = Recursive::new();
    let first = recursive.choose_move(&s).unwrap();
    for _ in 0..10 {
        assert_eq!(recursive.choose_move(&s), Ok(first));
    }
    let mut memoizing = Memoizing::new(CacheScope::PerInstance);
    let first = memoizing.choose_move(&s).unwrap();
    for _ in 0..10 {
        assert_eq!(memoizing.choose_move(&s), Ok(first));
    }
}

#[test]
fn recursive_is_optimal() {
    let mut recursive = Recursive::new();
    for total in 1..=25 {
        let s = SubtractSquare::new(Player::One, total);
        let m = recursive.choose_move(&s).unwrap();
        if forced_win(total) {
            // An optimal move hands the opponent a lost position.
            assert!(!forced_win(total - m), "total={} move={}", total, m);
            assert_eq!(recursive.root_score(), Some(Score::Win), "total={}", total);
        } else {
            assert_eq!(recursive.root_score(), Some(Score::Loss), "total={}", total);
        }
    }
}

#[test]
fn terminal_states_yield_no_move() {
    let s = SubtractSquare::new(Player::One, 0);
    assert!(s.legal_moves().is_empty());
    assert_eq!(Recursive::new().choose_move(&s), Err(NoLegalMove));
    assert_eq!(Iterative::new().choose_move(&s), Err(NoLegalMove));
    assert_eq!(Memoizing::new(CacheScope::PerCall).choose_move(&s), Err(NoLegalMove));
    assert_eq!(Myopic::new(4).choose_move(&s), Err(NoLegalMove));
    assert_eq!(plymax::Random::new().choose_move(&s), Err(NoLegalMove));
}

#[test]
fn memoizing_reuses_transpositions() {
    let s = SubtractSquare::new(Player::One, 25);
    let mut plain = Recursive::new();
    let mut cached = Memoizing::new(CacheScope::PerCall);
    assert_eq!(plain.choose_move(&s).ok(), cached.choose_move(&s).ok());
    // Subtract Square transposes constantly, so the cache must fire.
    assert!(cached.cache_hits() > 0, "{}", cached.stats());
}

// A one-decision game: two moves from the start, one an immediate win and
// one an immediate loss, with the losing move enumerated first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum TwoChoice {
    Start,
    Won,
    Lost,
}

impl GameState for TwoChoice {
    type M = char;

    fn active_player(&self) -> Player {
        match self {
            TwoChoice::Start => Player::One,
            _ => Player::Two,
        }
    }

    fn legal_moves(&self) -> Vec<char> {
        match self {
            TwoChoice::Start => vec!['l', 'w'],
            _ => Vec::new(),
        }
    }

    fn apply(&self, m: char) -> Result<TwoChoice, InvalidMove> {
        match (self, m) {
            (TwoChoice::Start, 'w') => Ok(TwoChoice::Won),
            (TwoChoice::Start, 'l') => Ok(TwoChoice::Lost),
            _ => Err(InvalidMove),
        }
    }

    fn winner(&self) -> Option<Winner> {
        match self {
            TwoChoice::Start => None,
            TwoChoice::Won => Some(Winner::Competitor(Player::One)),
            TwoChoice::Lost => Some(Winner::Competitor(Player::Two)),
        }
    }
}

impl CanonicalKey for TwoChoice {
    type Key = TwoChoice;

    fn canonical_key(&self) -> TwoChoice {
        *self
    }
}

#[test]
fn every_strategy_takes_the_immediate_win() {
    let s = TwoChoice::Start;
    assert_eq!(Recursive::new().choose_move(&s), Ok('w'));
    assert_eq!(Iterative::new().choose_move(&s), Ok('w'));
    assert_eq!(Memoizing::new(CacheScope::PerCall).choose_move(&s), Ok('w'));
    assert_eq!(Memoizing::new(CacheScope::PerInstance).choose_move(&s), Ok('w'));
    assert_eq!(Myopic::new(1).choose_move(&s), Ok('w'));
    assert_eq!(Myopic::new(4).choose_move(&s), Ok('w'));
}

// A uniform binary tree that records how many times states at each depth
// were expanded. Terminal only far below any horizon under test.
#[derive(Clone)]
struct Probe {
    depth: usize,
    expansions: Rc<RefCell<Vec<usize>>>,
}

impl Probe {
    const CAP: usize = 64;

    fn new() -> Probe {
        Probe { depth: 0, expansions: Rc::new(RefCell::new(vec![0; Probe::CAP + 1])) }
    }
}

impl GameState for Probe {
    type M = u8;

    fn active_player(&self) -> Player {
        if self.depth % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    fn legal_moves(&self) -> Vec<u8> {
        if self.depth >= Probe::CAP {
            Vec::new()
        } else {
            vec![0, 1]
        }
    }

    fn apply(&self, m: u8) -> Result<Probe, InvalidMove> {
        if m > 1 || self.depth >= Probe::CAP {
            return Err(InvalidMove);
        }
        self.expansions.borrow_mut()[self.depth] += 1;
        Ok(Probe { depth: self.depth + 1, expansions: Rc::clone(&self.expansions) })
    }

    fn winner(&self) -> Option<Winner> {
        if self.depth >= Probe::CAP {
            Some(Winner::Draw)
        } else {
            None
        }
    }

    fn rough_outcome(&self) -> RoughOutcome {
        RoughOutcome::Unknown
    }
}

#[test]
fn myopic_never_expands_below_the_horizon() {
    for max_depth in 1..=5 {
        let root = Probe::new();
        let mut myopic = Myopic::new(max_depth);
        myopic.choose_move(&root).unwrap();
        let expansions = root.expansions.borrow();
        for depth in 0..max_depth {
            assert!(expansions[depth] > 0, "max_depth={} depth={}", max_depth, depth);
        }
        for depth in max_depth..=Probe::CAP {
            assert_eq!(expansions[depth], 0, "max_depth={} depth={}", max_depth, depth);
        }
    }
}

#[test]
fn myopic_depth_must_be_configurable() {
    assert_eq!(Myopic::default().max_depth(), plymax::DEFAULT_MAX_DEPTH);
    assert_eq!(Myopic::new(7).max_depth(), 7);
}

#[test]
#[should_panic(expected = "max_depth must be positive")]
fn myopic_rejects_zero_depth() {
    Myopic::new(0);
}

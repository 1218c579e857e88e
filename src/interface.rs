//! The common structures and traits.

use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use std::ops::Neg;
use thiserror::Error;

/// One of the two players of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Player::One => write!(f, "P1"),
            Player::Two => write!(f, "P2"),
        }
    }
}

/// The result of playing a game until it finishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    /// The named player won.
    Competitor(Player),
    /// Nobody won.
    Draw,
}

/// An assessment of a position from the perspective of the player whose turn
/// it is to play.
///
/// The derived ordering is `Loss < Tie < Win`, so comparing scores directly
/// selects the more favorable one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Score {
    Loss,
    Tie,
    Win,
}

impl Neg for Score {
    type Output = Score;

    /// Flip to the opponent's perspective. Their win is our loss.
    fn neg(self) -> Score {
        match self {
            Score::Win => Score::Loss,
            Score::Tie => Score::Tie,
            Score::Loss => Score::Win,
        }
    }
}

impl Score {
    /// Canonical score of a finished game, from the perspective of `player`.
    pub fn from_winner(winner: Winner, player: Player) -> Score {
        match winner {
            Winner::Competitor(p) if p == player => Score::Win,
            Winner::Competitor(_) => Score::Loss,
            Winner::Draw => Score::Tie,
        }
    }
}

/// A cheap guess at the eventual outcome of an unfinished position, from the
/// perspective of the player to move.
///
/// Only consulted when search is truncated (see
/// [`Myopic`](crate::strategies::myopic::Myopic)). It may be wrong; it must
/// be cheap — proportional to the size of the state, never a search of its
/// own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoughOutcome {
    LikelyWin,
    LikelyTie,
    LikelyLoss,
    Unknown,
}

impl RoughOutcome {
    /// Collapse the estimate into a `Score`, treating `Unknown` as `Tie`.
    pub fn estimate(self) -> Score {
        match self {
            RoughOutcome::LikelyWin => Score::Win,
            RoughOutcome::LikelyTie | RoughOutcome::Unknown => Score::Tie,
            RoughOutcome::LikelyLoss => Score::Loss,
        }
    }
}

/// A move was applied that is not legal from the current state.
///
/// This is a contract violation: `legal_moves` and `apply` are required to
/// agree, so the strategies never recover from it internally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("attempted to apply a move that is not legal from this state")]
pub struct InvalidMove;

/// A strategy was asked to choose a move from a terminal state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("no legal moves: cannot choose a move from a terminal state")]
pub struct NoLegalMove;

/// A position in a two-player, perfect-knowledge game.
///
/// States are immutable: `apply` returns the successor rather than modifying
/// the receiver, so the search may hold many positions at once without undo
/// bookkeeping. Two states reached by equal move sequences must compare
/// equal under [`CanonicalKey`] for caching to be sound.
pub trait GameState: Sized {
    /// The type of moves playable from this kind of state.
    type M: Copy + Eq + Debug;

    /// Whose turn it is to play.
    fn active_player(&self) -> Player;

    /// Every move playable from this state. Empty exactly when the state is
    /// terminal.
    fn legal_moves(&self) -> Vec<Self::M>;

    /// The state reached by playing `m`. Fails with [`InvalidMove`] if `m`
    /// is not in `legal_moves()`.
    fn apply(&self, m: Self::M) -> Result<Self, InvalidMove>;

    /// `Some(winner)` or `Some(Draw)` if the state is terminal, `None` if
    /// the game is still undetermined.
    fn winner(&self) -> Option<Winner>;

    /// A cheap estimate of the eventual outcome, for truncated search.
    fn rough_outcome(&self) -> RoughOutcome {
        RoughOutcome::Unknown
    }
}

/// An optional trait for game state types to support score caching.
///
/// Strategies that cache things by game state require this. The key must be
/// a pure function of the position itself — board contents and player to
/// move — never of the move history that reached it or of object identity.
/// Two states with equal keys must have identical legal moves and identical
/// optimal scores; the cache assumes exact equality and does no symmetry
/// folding.
pub trait CanonicalKey {
    /// Canonical representation of the position.
    type Key: Eq + Hash + Clone;

    /// Compute the key for this position.
    fn canonical_key(&self) -> Self::Key;
}

/// A play session: a current state plus the players' display labels.
///
/// Created once per session by a driver, which alternates asking a
/// [`Strategy`] (or a human) for moves and applying them here.
pub struct Game<S> {
    labels: [String; 2],
    state: S,
}

impl<S: GameState> Game<S> {
    /// Start a game from `state` with the default "P1"/"P2" labels.
    pub fn new(state: S) -> Game<S> {
        Game::with_labels(state, ["P1".to_string(), "P2".to_string()])
    }

    /// Start a game from `state` with custom player labels.
    pub fn with_labels(state: S, labels: [String; 2]) -> Game<S> {
        Game { labels, state }
    }

    /// The current position.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The display label for `player`.
    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::One => &self.labels[0],
            Player::Two => &self.labels[1],
        }
    }

    /// Whether the game has finished.
    pub fn is_over(&self) -> bool {
        self.state.winner().is_some()
    }

    /// The result, if the game has finished.
    pub fn winner(&self) -> Option<Winner> {
        self.state.winner()
    }

    /// Play `m`, advancing the current position.
    pub fn make_move(&mut self, m: S::M) -> Result<(), InvalidMove> {
        self.state = self.state.apply(m)?;
        Ok(())
    }
}

/// Defines a method of choosing a move for the current player.
pub trait Strategy<S: GameState> {
    /// Pick a move to play from `s`. Fails with [`NoLegalMove`] if `s` is
    /// terminal.
    fn choose_move(&mut self, s: &S) -> Result<S::M, NoLegalMove>;
}

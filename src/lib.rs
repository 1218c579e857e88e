//! Strategies for two-player, sequential-move, zero-sum, perfect-information
//! games.
//!
//! Implement [`GameState`] for your game's positions, then hand any position
//! to a [`Strategy`] to get the move to play:
//!
//! * [`Recursive`] — exhaustive minimax, provably optimal.
//! * [`Iterative`] — the same choices via an explicit work stack, for trees
//!   deeper than the call stack can hold.
//! * [`Memoizing`] — exhaustive minimax with a transposition cache, for
//!   games where many move orders reach the same position (requires
//!   [`CanonicalKey`]).
//! * [`Myopic`] — minimax truncated at a fixed number of plies, substituting
//!   the state's [`rough_outcome`](GameState::rough_outcome) estimate beyond
//!   the horizon.
//!
//! Search is single-threaded and runs to completion; callers that need a
//! time budget should reach for [`Myopic`] rather than interrupting an
//! exhaustive strategy.

pub mod interface;
pub mod strategies;
pub mod subtract_square;
pub mod util;

pub use interface::{
    CanonicalKey, Game, GameState, InvalidMove, NoLegalMove, Player, RoughOutcome, Score,
    Strategy, Winner,
};
pub use strategies::iterative::Iterative;
pub use strategies::memoizing::{CacheScope, Memoizing};
pub use strategies::myopic::{Myopic, DEFAULT_MAX_DEPTH};
pub use strategies::random::Random;
pub use strategies::recursive::Recursive;

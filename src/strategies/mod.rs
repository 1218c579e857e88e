//! Strategy implementations.

pub mod iterative;
pub mod memoizing;
pub mod myopic;
pub mod random;
pub mod recursive;
mod util;

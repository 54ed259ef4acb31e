//! Match-play scoring engine.
//!
//! Pure functions only: the reducer folds a match's hole events into a
//! canonical [`MatchState`](crate::models::MatchState), the points calculator
//! turns that state into a point split, and the predicates/formatting helpers
//! answer the questions a scoring UI asks before and after committing a hole.
//!
//! Nothing here performs I/O or errors; a partially corrupt event log still
//! reduces to some valid state.

mod format;
mod points;
mod predicates;
mod reducer;

pub use format::*;
pub use points::*;
pub use predicates::*;
pub use reducer::*;

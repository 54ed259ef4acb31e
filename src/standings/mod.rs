//! Tournament standings engine.
//!
//! Consumes the scoring engine's per-match output: sums point splits into
//! team totals, then turns totals into a magic number and clinch call.

mod aggregate;
mod magic_number;

pub use aggregate::*;
pub use magic_number::*;

use thiserror::Error;

/// Errors from the standings engine.
#[derive(Debug, Error)]
pub enum StandingsError {
    /// Both sides clinched at once: points_to_win / total_matches are
    /// inconsistent. Surfaced rather than resolved, since picking a side
    /// would hide the configuration bug.
    #[error(
        "Both teams clinched ({team_a_points} vs {team_b_points} with {matches_remaining} \
         matches remaining): points_to_win/total_matches configuration is inconsistent"
    )]
    SimultaneousClinch {
        team_a_points: f64,
        team_b_points: f64,
        matches_remaining: u32,
    },
}

//! Dormie and would-close-out predicates.
//!
//! Used by scoring UIs to warn "this result ends the match" before a hole is
//! committed, and to badge dormie matches on the standings page.

use crate::models::{DormieCheck, HoleWinner};

/// Per-team dormie flags for a `(score, holes_remaining)` pair.
///
/// `check_dormie(s, r).any()` agrees with `MatchState::is_dormie` for every
/// reachable state; the reducer tests cross-check that.
pub fn check_dormie(current_score: i32, holes_remaining: u32) -> DormieCheck {
    DormieCheck {
        team_a_dormie: current_score > 0 && current_score as u32 == holes_remaining,
        team_b_dormie: current_score < 0 && current_score.unsigned_abs() == holes_remaining,
    }
}

/// Simulate scoring one more hole: would the match be closed out?
///
/// Pure lookahead; nothing is mutated. With `prev_holes_remaining == 0`
/// there is no hole left to simulate; the lookahead then reports whether the
/// finished match already stands decided (`prev_score != 0`) rather than
/// decrementing past zero.
pub fn would_close_out(prev_score: i32, prev_holes_remaining: u32, winner: HoleWinner) -> bool {
    if prev_holes_remaining == 0 {
        return prev_score != 0;
    }

    let new_score = prev_score + winner.score_delta();
    let new_holes_remaining = prev_holes_remaining - 1;

    new_score.unsigned_abs() > new_holes_remaining
}

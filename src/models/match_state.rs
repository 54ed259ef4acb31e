//! Derived match state models.
//!
//! Nothing in this file is persisted; it is all recomputed from the hole
//! event log by `scoring::reducer`.

use serde::{Deserialize, Serialize};

use super::{MatchStatus, Team};

/// Canonical state of a match, derived from its hole results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Decided holes (winner teamA/teamB/halved)
    pub holes_played: u32,

    /// Holes left to play; holes_played + holes_remaining <= 18
    pub holes_remaining: u32,

    /// Holes won by team A
    pub team_a_holes_won: u32,

    /// Holes won by team B
    pub team_b_holes_won: u32,

    /// team_a_holes_won - team_b_holes_won; positive means team A up
    pub current_score: i32,

    /// Leader is up by exactly the holes remaining (match not yet over)
    pub is_dormie: bool,

    /// Trailing team can no longer even the match
    pub is_closed_out: bool,

    /// Canonical short form: "AS", "N UP", or "N&M"; never empty
    pub display_score: String,

    /// Lifecycle status
    pub status: MatchStatus,

    /// Winner, defined only for a completed non-halved match
    pub winning_team: Option<Team>,
}

impl MatchState {
    /// State of a match with no decided holes.
    pub fn scheduled(holes: u32) -> Self {
        Self {
            holes_played: 0,
            holes_remaining: holes,
            team_a_holes_won: 0,
            team_b_holes_won: 0,
            current_score: 0,
            is_dormie: false,
            is_closed_out: false,
            display_score: "AS".to_string(),
            status: MatchStatus::Scheduled,
            winning_team: None,
        }
    }
}

/// Point split a match contributes to the team standings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchPoints {
    pub team_a: f64,
    pub team_b: f64,
}

impl MatchPoints {
    /// No points awarded (match not finished).
    pub fn none() -> Self {
        Self {
            team_a: 0.0,
            team_b: 0.0,
        }
    }
}

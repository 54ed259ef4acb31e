//! Derived standings models.

use serde::{Deserialize, Serialize};

use super::Team;

/// Tournament-wide team point totals and progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStandings {
    /// Team A points across all matches (half points possible)
    pub team_a_points: f64,

    /// Team B points across all matches
    pub team_b_points: f64,

    /// Matches whose state is completed
    pub matches_completed: u32,

    /// total_matches - matches_completed
    pub matches_remaining: u32,

    /// All matches in the tournament, including unscheduled ones
    pub total_matches: u32,

    /// Side currently ahead on points, None when level
    pub leader: Option<Team>,

    /// |team_a_points - team_b_points|
    pub margin: f64,
}

/// Points each side still needs, and whether anyone has clinched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagicNumber {
    /// Configured threshold, Ryder Cup convention floor(total/2) + 0.5
    pub points_to_win: f64,

    /// Points team A still needs (floored at 0)
    pub team_a_needed: f64,

    /// Points team B still needs (floored at 0)
    pub team_b_needed: f64,

    pub team_a_clinched: bool,
    pub team_b_clinched: bool,
    pub has_clinched: bool,

    /// Whichever side clinched, if any
    pub clinching_team: Option<Team>,
}

/// Independent per-team dormie flags for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DormieCheck {
    pub team_a_dormie: bool,
    pub team_b_dormie: bool,
}

impl DormieCheck {
    /// Whether either side is dormie.
    pub fn any(&self) -> bool {
        self.team_a_dormie || self.team_b_dormie
    }
}

//! Match points calculation.

use crate::models::{MatchPoints, MatchState, MatchStatus};

/// Point split for one match: 1/0 to the winner, 0.5/0.5 for a halve,
/// 0/0 while unfinished. The sum is always 0 or 1; the standings
/// aggregator relies on that.
pub fn match_points(state: &MatchState) -> MatchPoints {
    if state.status != MatchStatus::Completed {
        return MatchPoints::none();
    }

    if state.current_score == 0 {
        MatchPoints {
            team_a: 0.5,
            team_b: 0.5,
        }
    } else if state.current_score > 0 {
        MatchPoints {
            team_a: 1.0,
            team_b: 0.0,
        }
    } else {
        MatchPoints {
            team_a: 0.0,
            team_b: 1.0,
        }
    }
}

//! Canonical score formatting.

use crate::models::{MatchState, Team};

/// Format the canonical short-form score.
///
/// - level → `"AS"`
/// - closed out with holes to spare → `"N&M"` (e.g. `"3&2"`, `"10&8"`)
/// - otherwise → `"N UP"` (in progress, or won on the final hole)
pub fn format_display_score(current_score: i32, holes_remaining: u32, is_closed_out: bool) -> String {
    let margin = current_score.unsigned_abs();

    if current_score == 0 {
        "AS".to_string()
    } else if is_closed_out && holes_remaining > 0 {
        format!("{}&{}", margin, holes_remaining)
    } else {
        format!("{} UP", margin)
    }
}

/// Human sentence for a completed match, e.g. `"Stars wins 3&2"`.
///
/// Caller error to invoke on a state that is not completed; the output is
/// only meaningful once the match is over.
pub fn format_final_result(state: &MatchState, team_a_name: &str, team_b_name: &str) -> String {
    match state.winning_team {
        Some(Team::A) => format!("{} wins {}", team_a_name, state.display_score),
        Some(Team::B) => format!("{} wins {}", team_b_name, state.display_score),
        None => "Match Halved".to_string(),
    }
}

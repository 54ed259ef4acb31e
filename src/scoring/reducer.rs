//! The match state reducer: fold hole events into canonical match state.

use std::collections::HashMap;

use crate::config::ScoringRules;
use crate::models::{HoleResult, HoleWinner, MatchState, MatchStatus, Team};

use super::format_display_score;

/// Reduce a match's hole results to its canonical state.
///
/// Accepts the event log in any order, with duplicate hole numbers and
/// out-of-range holes. Out-of-range holes are discarded; duplicates are
/// resolved by latest `recorded_at` (ties by later append position), so a
/// correction submitted by any scorer is authoritative. Idempotent: the same
/// input always produces the same state.
pub fn reduce_match_state(results: &[HoleResult], rules: &ScoringRules) -> MatchState {
    // Last write per hole wins. Keyed grouping, not insertion order: with
    // concurrent scorers the append order need not match timestamp order.
    let mut latest: HashMap<u32, (usize, &HoleResult)> = HashMap::new();
    for (idx, result) in results.iter().enumerate() {
        if !rules.is_valid_hole(result.hole_number) {
            continue;
        }
        let supersedes = match latest.get(&result.hole_number) {
            Some((prev_idx, prev)) => (result.recorded_at, idx) > (prev.recorded_at, *prev_idx),
            None => true,
        };
        if supersedes {
            latest.insert(result.hole_number, (idx, result));
        }
    }

    let mut holes_played = 0u32;
    let mut team_a_holes_won = 0u32;
    let mut team_b_holes_won = 0u32;

    for (_, result) in latest.values() {
        match result.winner {
            HoleWinner::TeamA => {
                holes_played += 1;
                team_a_holes_won += 1;
            }
            HoleWinner::TeamB => {
                holes_played += 1;
                team_b_holes_won += 1;
            }
            HoleWinner::Halved => {
                holes_played += 1;
            }
            // An undecided hole does not advance the match.
            HoleWinner::None => {}
        }
    }

    let holes_remaining = rules.holes - holes_played;
    let current_score = team_a_holes_won as i32 - team_b_holes_won as i32;

    let is_closed_out = current_score.unsigned_abs() > holes_remaining;
    let is_dormie = holes_remaining > 0
        && current_score != 0
        && current_score.unsigned_abs() == holes_remaining;

    let status = if holes_played == 0 {
        MatchStatus::Scheduled
    } else if is_closed_out || holes_remaining == 0 {
        MatchStatus::Completed
    } else {
        MatchStatus::Active
    };

    let winning_team = match status {
        MatchStatus::Completed if current_score > 0 => Some(Team::A),
        MatchStatus::Completed if current_score < 0 => Some(Team::B),
        _ => None,
    };

    MatchState {
        holes_played,
        holes_remaining,
        team_a_holes_won,
        team_b_holes_won,
        current_score,
        is_dormie,
        is_closed_out,
        display_score: format_display_score(current_score, holes_remaining, is_closed_out),
        status,
        winning_team,
    }
}

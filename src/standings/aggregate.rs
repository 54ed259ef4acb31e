//! Standings aggregation across all matches of a tournament.

use crate::models::{MatchState, MatchStatus, Team, TeamStandings};
use crate::scoring::match_points;

/// Fold every match's state into the team standings.
///
/// `states` must contain one entry per scheduled match, played or not, so
/// that `total_matches` and the magic number see the whole tournament.
/// Each completed match contributes exactly one point in total, so
/// `team_a_points + team_b_points == matches_completed` always holds.
pub fn compute_standings(states: &[MatchState]) -> TeamStandings {
    let mut team_a_points = 0.0;
    let mut team_b_points = 0.0;
    let mut matches_completed = 0u32;

    for state in states {
        let points = match_points(state);
        team_a_points += points.team_a;
        team_b_points += points.team_b;

        if state.status == MatchStatus::Completed {
            matches_completed += 1;
        }
    }

    let total_matches = states.len() as u32;
    let leader = if team_a_points > team_b_points {
        Some(Team::A)
    } else if team_b_points > team_a_points {
        Some(Team::B)
    } else {
        None
    };

    TeamStandings {
        team_a_points,
        team_b_points,
        matches_completed,
        matches_remaining: total_matches - matches_completed,
        total_matches,
        leader,
        margin: (team_a_points - team_b_points).abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringRules;
    use crate::models::{EntityId, HoleResult, HoleWinner};
    use crate::scoring::reduce_match_state;
    use pretty_assertions::assert_eq;

    fn state_from(winners: &[HoleWinner]) -> MatchState {
        let results: Vec<_> = winners
            .iter()
            .enumerate()
            .map(|(i, w)| {
                HoleResult::new(EntityId::from("m"), i as u32 + 1, *w, EntityId::from("p"))
            })
            .collect();
        reduce_match_state(&results, &ScoringRules::default())
    }

    fn assert_invariants(standings: &TeamStandings) {
        assert_eq!(
            standings.team_a_points + standings.team_b_points,
            standings.matches_completed as f64
        );
        assert_eq!(
            standings.matches_completed + standings.matches_remaining,
            standings.total_matches
        );
        assert_eq!(
            standings.margin,
            (standings.team_a_points - standings.team_b_points).abs()
        );
    }

    #[test]
    fn test_empty_tournament() {
        let standings = compute_standings(&[]);

        assert_eq!(standings.total_matches, 0);
        assert_eq!(standings.leader, None);
        assert_eq!(standings.margin, 0.0);
        assert_invariants(&standings);
    }

    #[test]
    fn test_unplayed_matches_count_toward_total_only() {
        let states = vec![
            MatchState::scheduled(18),
            MatchState::scheduled(18),
            MatchState::scheduled(18),
        ];

        let standings = compute_standings(&states);

        assert_eq!(standings.total_matches, 3);
        assert_eq!(standings.matches_completed, 0);
        assert_eq!(standings.matches_remaining, 3);
        assert_eq!(standings.team_a_points, 0.0);
        assert_invariants(&standings);
    }

    #[test]
    fn test_mixed_tournament() {
        let states = vec![
            // Team A closeout win
            state_from(&[HoleWinner::TeamA; 10]),
            // Halved match
            state_from(&[HoleWinner::Halved; 18]),
            // Team B win on the last
            state_from(&{
                let mut w = vec![HoleWinner::Halved; 17];
                w.push(HoleWinner::TeamB);
                w
            }),
            // Live match
            state_from(&[HoleWinner::TeamA; 4]),
            // Not started
            MatchState::scheduled(18),
        ];

        let standings = compute_standings(&states);

        assert_eq!(standings.team_a_points, 1.5);
        assert_eq!(standings.team_b_points, 1.5);
        assert_eq!(standings.matches_completed, 3);
        assert_eq!(standings.matches_remaining, 2);
        assert_eq!(standings.leader, None);
        assert_eq!(standings.margin, 0.0);
        assert_invariants(&standings);
    }

    #[test]
    fn test_leader_and_margin() {
        let states = vec![
            state_from(&[HoleWinner::TeamA; 10]),
            state_from(&[HoleWinner::TeamA; 10]),
            state_from(&[HoleWinner::Halved; 18]),
            MatchState::scheduled(18),
        ];

        let standings = compute_standings(&states);

        assert_eq!(standings.team_a_points, 2.5);
        assert_eq!(standings.team_b_points, 0.5);
        assert_eq!(standings.leader, Some(Team::A));
        assert_eq!(standings.margin, 2.0);
        assert_invariants(&standings);
    }

    #[test]
    fn test_team_b_leads() {
        let states = vec![
            state_from(&[HoleWinner::TeamB; 10]),
            state_from(&[HoleWinner::TeamA; 3]),
        ];

        let standings = compute_standings(&states);

        assert_eq!(standings.leader, Some(Team::B));
        assert_eq!(standings.margin, 1.0);
        assert_invariants(&standings);
    }
}

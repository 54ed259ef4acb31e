//! Magic number and clinch determination.

use crate::models::{MagicNumber, Team, TeamStandings};

use super::StandingsError;

/// Ryder Cup convention: half the matches plus a half point, so no
/// configuration produces a reachable tie at the threshold.
pub fn points_to_win(total_matches: u32) -> f64 {
    (total_matches / 2) as f64 + 0.5
}

/// Compute each side's remaining requirement and whether anyone clinched.
///
/// A side clinches when the opponent cannot catch it even by winning every
/// remaining match. Reaching the threshold alone is not enough: with an odd
/// match count both sides can finish exactly at `floor(total/2) + 0.5`, a
/// halved cup, not a win. Both sides clinching at once means the standings
/// and configuration are inconsistent; that is surfaced as
/// [`StandingsError::SimultaneousClinch`], never resolved silently.
pub fn compute_magic_number(
    standings: &TeamStandings,
    points_to_win: f64,
) -> Result<MagicNumber, StandingsError> {
    let remaining = standings.matches_remaining as f64;

    let team_a_clinched = standings.team_a_points > standings.team_b_points + remaining;
    let team_b_clinched = standings.team_b_points > standings.team_a_points + remaining;

    if team_a_clinched && team_b_clinched {
        return Err(StandingsError::SimultaneousClinch {
            team_a_points: standings.team_a_points,
            team_b_points: standings.team_b_points,
            matches_remaining: standings.matches_remaining,
        });
    }

    let clinching_team = if team_a_clinched {
        Some(Team::A)
    } else if team_b_clinched {
        Some(Team::B)
    } else {
        None
    };

    Ok(MagicNumber {
        points_to_win,
        team_a_needed: (points_to_win - standings.team_a_points).max(0.0),
        team_b_needed: (points_to_win - standings.team_b_points).max(0.0),
        team_a_clinched,
        team_b_clinched,
        has_clinched: clinching_team.is_some(),
        clinching_team,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings(a: f64, b: f64, completed: u32, total: u32) -> TeamStandings {
        TeamStandings {
            team_a_points: a,
            team_b_points: b,
            matches_completed: completed,
            matches_remaining: total - completed,
            total_matches: total,
            leader: if a > b {
                Some(Team::A)
            } else if b > a {
                Some(Team::B)
            } else {
                None
            },
            margin: (a - b).abs(),
        }
    }

    #[test]
    fn test_points_to_win_convention() {
        assert_eq!(points_to_win(12), 6.5);
        assert_eq!(points_to_win(9), 4.5);
        assert_eq!(points_to_win(28), 14.5);
    }

    #[test]
    fn test_needed_points() {
        let magic = compute_magic_number(&standings(4.0, 2.0, 6, 12), 6.5).unwrap();

        assert_eq!(magic.team_a_needed, 2.5);
        assert_eq!(magic.team_b_needed, 4.5);
        assert!(!magic.has_clinched);
        assert_eq!(magic.clinching_team, None);
    }

    #[test]
    fn test_needed_floors_at_zero() {
        let magic = compute_magic_number(&standings(7.0, 2.0, 9, 12), 6.5).unwrap();

        assert_eq!(magic.team_a_needed, 0.0);
        assert_eq!(magic.team_b_needed, 4.5);
    }

    #[test]
    fn test_clinch_when_opponent_cannot_catch_up() {
        // 7 vs 2 with 3 left: B tops out at 5, A has clinched.
        let magic = compute_magic_number(&standings(7.0, 2.0, 9, 12), 6.5).unwrap();

        assert!(magic.team_a_clinched);
        assert!(!magic.team_b_clinched);
        assert!(magic.has_clinched);
        assert_eq!(magic.clinching_team, Some(Team::A));
    }

    #[test]
    fn test_no_clinch_while_catchable() {
        // 6 vs 3 with 3 left: B can still reach 6 and halve the cup.
        let magic = compute_magic_number(&standings(6.0, 3.0, 9, 12), 6.5).unwrap();

        assert!(!magic.has_clinched);
    }

    #[test]
    fn test_team_b_clinch() {
        let magic = compute_magic_number(&standings(1.0, 8.0, 9, 12), 6.5).unwrap();

        assert!(magic.team_b_clinched);
        assert_eq!(magic.clinching_team, Some(Team::B));
    }

    #[test]
    fn test_exact_tie_possible_means_no_clinch() {
        // 5 vs 4 with 1 left: B winning it makes 5-5.
        let magic = compute_magic_number(&standings(5.0, 4.0, 9, 10), 5.5).unwrap();

        assert!(!magic.has_clinched);
    }

    #[test]
    fn test_halved_odd_tournament_is_not_an_anomaly() {
        // Nine matches all halved: 4.5 apiece, and 4.5 is the convention
        // threshold for nine matches. Both sides sit at the threshold, but
        // neither has won anything; this is a halved cup, not a clinch and
        // not a configuration error.
        let magic = compute_magic_number(&standings(4.5, 4.5, 9, 9), points_to_win(9)).unwrap();

        assert!(!magic.team_a_clinched);
        assert!(!magic.team_b_clinched);
        assert!(!magic.has_clinched);
        assert_eq!(magic.clinching_team, None);
        assert_eq!(magic.team_a_needed, 0.0);
        assert_eq!(magic.team_b_needed, 0.0);
    }

    #[test]
    fn test_threshold_reached_but_catchable_is_no_clinch() {
        // 4.5 of 9 with one match left: the opponent can still draw level.
        let magic = compute_magic_number(&standings(4.5, 3.5, 8, 9), 4.5).unwrap();

        assert!(!magic.has_clinched);
        assert_eq!(magic.team_a_needed, 0.0);
    }

    #[test]
    fn test_clinch_with_matches_still_out() {
        let magic = compute_magic_number(&standings(6.5, 3.5, 10, 12), 6.5).unwrap();

        assert!(magic.team_a_clinched);
        assert_eq!(magic.team_a_needed, 0.0);
        assert_eq!(magic.clinching_team, Some(Team::A));
    }

    #[test]
    fn test_halved_cup_nobody_clinches() {
        let magic = compute_magic_number(&standings(6.0, 6.0, 12, 12), 6.5).unwrap();

        assert!(!magic.has_clinched);
        assert_eq!(magic.team_a_needed, 0.5);
        assert_eq!(magic.team_b_needed, 0.5);
    }
}

//! Match and session models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MatchId, MatchStatus, PlayerId, SessionId};

/// A head-to-head match-play contest over up to 18 holes.
///
/// The `status`/`result`/`margin`/`holes_remaining`/`current_hole` fields are
/// a cache of the last reduction, written whole by the store after every
/// mutation. They are never authoritative: the reducer can always be re-run
/// over the event log to reproduce them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier
    pub id: MatchId,

    /// Session (trip day / format block) this match belongs to
    pub session_id: SessionId,

    /// Team A roster for this match
    pub team_a_player_ids: Vec<PlayerId>,

    /// Team B roster for this match
    pub team_b_player_ids: Vec<PlayerId>,

    /// Cached lifecycle status
    pub status: MatchStatus,

    /// Cached short-form score, e.g. "3&2" (None until first reduction)
    pub result: Option<String>,

    /// Cached winning margin in holes
    pub margin: Option<u32>,

    /// Cached holes remaining
    pub holes_remaining: u32,

    /// Cached next hole a scorer would enter
    pub current_hole: u32,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Create a new match with a content-derived ID and an empty cache.
    pub fn new(
        session_id: SessionId,
        match_number: u32,
        team_a_player_ids: Vec<PlayerId>,
        team_b_player_ids: Vec<PlayerId>,
        holes: u32,
    ) -> Self {
        let id = MatchId::for_slot(&session_id, match_number);

        Self {
            id,
            session_id,
            team_a_player_ids,
            team_b_player_ids,
            status: MatchStatus::Scheduled,
            result: None,
            margin: None,
            holes_remaining: holes,
            current_hole: 1,
            created_at: Utc::now(),
        }
    }
}

/// A session of matches — one block of the trip (e.g. "Saturday foursomes").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier
    pub id: SessionId,

    /// Trip name, e.g. "Pinehurst 2026"
    pub trip_name: String,

    /// Display name for team A
    pub team_a_name: String,

    /// Display name for team B
    pub team_b_name: String,

    /// Total matches scheduled in the tournament, including unplayed ones
    pub total_matches: u32,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session with a content-derived ID.
    pub fn new(
        trip_name: String,
        team_a_name: String,
        team_b_name: String,
        total_matches: u32,
    ) -> Self {
        let id = SessionId::for_trip(&trip_name, &team_a_name, &team_b_name);

        Self {
            id,
            trip_name,
            team_a_name,
            team_b_name,
            total_matches,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;

    #[test]
    fn test_match_creation() {
        let m = Match::new(
            EntityId::from("session-1"),
            1,
            vec![EntityId::from("p1"), EntityId::from("p2")],
            vec![EntityId::from("p3"), EntityId::from("p4")],
            18,
        );

        assert_eq!(m.status, MatchStatus::Scheduled);
        assert_eq!(m.result, None);
        assert_eq!(m.holes_remaining, 18);
        assert_eq!(m.current_hole, 1);
        assert!(!m.id.as_str().is_empty());
    }

    #[test]
    fn test_match_id_deterministic_per_slot() {
        let a = Match::new(EntityId::from("s"), 1, vec![], vec![], 18);
        let b = Match::new(EntityId::from("s"), 1, vec![], vec![], 18);
        let c = Match::new(EntityId::from("s"), 2, vec![], vec![], 18);

        assert_eq!(a.id, b.id);
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn test_session_creation() {
        let session = Session::new(
            "Pinehurst 2026".to_string(),
            "Stars".to_string(),
            "Stripes".to_string(),
            12,
        );

        assert_eq!(session.total_matches, 12);
        assert!(!session.id.as_str().is_empty());
    }
}

//! Hole result model — one scored hole within a match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HoleWinner, MatchId, PlayerId};

/// A single scored hole, appended to a match's event log.
///
/// Records are immutable once created. A correction is a *new* record for the
/// same hole with a later timestamp; the reducer keeps the latest write per
/// hole, so nothing here is ever edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleResult {
    /// Unique identifier for this record (not content-derived; every append
    /// is a distinct event even when it repeats a hole)
    pub id: Uuid,

    /// Match this result belongs to
    pub match_id: MatchId,

    /// Hole number, intended domain 1-18
    pub hole_number: u32,

    /// Outcome of the hole
    pub winner: HoleWinner,

    /// Raw team A strokes, when the scorer entered them
    pub team_a_strokes: Option<u32>,

    /// Raw team B strokes, when the scorer entered them
    pub team_b_strokes: Option<u32>,

    /// Who entered the score
    pub recorded_by: PlayerId,

    /// When this record was created; total order for "latest wins" and undo
    pub recorded_at: DateTime<Utc>,
}

impl HoleResult {
    /// Create a new result stamped with the current time.
    pub fn new(
        match_id: MatchId,
        hole_number: u32,
        winner: HoleWinner,
        recorded_by: PlayerId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_id,
            hole_number,
            winner,
            team_a_strokes: None,
            team_b_strokes: None,
            recorded_by,
            recorded_at: Utc::now(),
        }
    }

    /// Attach raw stroke counts.
    pub fn with_strokes(mut self, team_a: Option<u32>, team_b: Option<u32>) -> Self {
        self.team_a_strokes = team_a;
        self.team_b_strokes = team_b;
        self
    }
}

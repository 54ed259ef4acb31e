//! Content-derived identifiers.
//!
//! Sessions and matches hash their identifying fields into short stable IDs,
//! so re-seeding the same trip produces the same identifiers and a match slot
//! can be found again without storing a mapping. Player IDs are just the
//! scorer handles the trip setup supplies.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex characters kept from the digest; short enough for a scorecard.
const ID_LEN: usize = 16;

/// A stable identifier for a session, match, or player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    fn from_fields(fields: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                hasher.update(b"|");
            }
            hasher.update(field.as_bytes());
        }
        let digest = hex::encode(hasher.finalize());
        Self(digest[..ID_LEN].to_string())
    }

    /// Session ID, derived from the trip and team names.
    pub fn for_trip(trip_name: &str, team_a_name: &str, team_b_name: &str) -> SessionId {
        Self::from_fields(&[trip_name, team_a_name, team_b_name])
    }

    /// Match ID for a 1-based slot within a session.
    pub fn for_slot(session_id: &SessionId, match_number: u32) -> MatchId {
        Self::from_fields(&[session_id.as_str(), &match_number.to_string()])
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Type alias for match IDs
pub type MatchId = EntityId;

/// Type alias for session (trip day / format block) IDs
pub type SessionId = EntityId;

/// Type alias for player IDs
pub type PlayerId = EntityId;

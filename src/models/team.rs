//! Team and per-hole outcome discriminants.
//!
//! These are closed enums on purpose: every new state forces exhaustive
//! matching at every call site instead of a stringly-typed fallthrough.

use serde::{Deserialize, Serialize};

/// One of the two sides in a Ryder-Cup format trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "teamA")]
    A,
    #[serde(rename = "teamB")]
    B,
}

impl Team {
    /// The opposing side.
    pub fn opponent(&self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::A => write!(f, "Team A"),
            Team::B => write!(f, "Team B"),
        }
    }
}

/// Outcome of a single hole as entered by a scorer.
///
/// `None` means the hole has been touched but not decided (e.g. strokes
/// entered for one side only); it does not advance the holes-played count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoleWinner {
    TeamA,
    TeamB,
    Halved,
    None,
}

impl HoleWinner {
    /// Whether this outcome counts as a played hole.
    pub fn is_decided(&self) -> bool {
        !matches!(self, HoleWinner::None)
    }

    /// Contribution to the running score (team A perspective).
    pub fn score_delta(&self) -> i32 {
        match self {
            HoleWinner::TeamA => 1,
            HoleWinner::TeamB => -1,
            HoleWinner::Halved | HoleWinner::None => 0,
        }
    }
}

impl std::fmt::Display for HoleWinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoleWinner::TeamA => write!(f, "teamA"),
            HoleWinner::TeamB => write!(f, "teamB"),
            HoleWinner::Halved => write!(f, "halved"),
            HoleWinner::None => write!(f, "none"),
        }
    }
}

impl std::str::FromStr for HoleWinner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teamA" | "team-a" | "a" => Ok(HoleWinner::TeamA),
            "teamB" | "team-b" | "b" => Ok(HoleWinner::TeamB),
            "halved" | "half" | "as" => Ok(HoleWinner::Halved),
            "none" => Ok(HoleWinner::None),
            other => Err(format!("Unknown hole winner: {}", other)),
        }
    }
}

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchStatus {
    /// No holes scored yet.
    Scheduled,
    /// At least one hole scored, match still live.
    Active,
    /// Closed out or all holes played.
    Completed,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Scheduled => write!(f, "scheduled"),
            MatchStatus::Active => write!(f, "active"),
            MatchStatus::Completed => write!(f, "completed"),
        }
    }
}

//! Core data models for the match-play tracker.

mod golf_match;
mod hole_result;
mod ids;
mod match_state;
mod standings;
mod team;

pub use golf_match::*;
pub use hole_result::*;
pub use ids::*;
pub use match_state::*;
pub use standings::*;
pub use team::*;

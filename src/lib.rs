//! # Matchplay Tracker
//!
//! A Ryder-Cup style golf trip tracker: two teams, sessions of head-to-head
//! match-play contests, live team standings.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (hole results, matches, derived states)
//! - **scoring**: Pure match-play engine — event-log reducer, points, formats
//! - **standings**: Team totals, leader, magic number, clinch determination
//! - **store**: Match/event store, mutation operations, JSONL event log
//! - **config**: Tournament configuration loading and validation
//!
//! Data flows one way: hole events fold into `MatchState`, states map to
//! point splits, splits sum into `TeamStandings`, standings feed the magic
//! number. Everything derived is recomputed from the event log on demand;
//! nothing is patched incrementally.

pub mod config;
pub mod models;
pub mod scoring;
pub mod standings;
pub mod store;

pub use models::*;

//! Match and event-log store.
//!
//! Owns the per-match hole event logs and the two mutation entry points,
//! `record_hole_result` and `undo_last_score`. The discipline throughout is
//! read-modify-recompute-write whole state: every mutation appends or removes
//! one event and then re-runs the reducer over the full log, so the cached
//! fields on [`Match`] can never drift from the events.

mod jsonl;

pub use jsonl::*;

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{ScoringRules, TournamentConfig};
use crate::models::{
    HoleResult, HoleWinner, MagicNumber, Match, MatchId, MatchState, MatchStatus, PlayerId,
    Session, TeamStandings,
};
use crate::scoring::reduce_match_state;
use crate::standings::{compute_magic_number, compute_standings, StandingsError};

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("Hole number {hole} out of range 1-{max}")]
    InvalidHoleNumber { hole: u32, max: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory store for one tournament's matches and hole events.
pub struct MatchStore {
    session: Session,
    rules: ScoringRules,
    matches: Vec<Match>,
    results: HashMap<MatchId, Vec<HoleResult>>,
}

impl MatchStore {
    /// Create a store for a session with no matches yet.
    pub fn new(session: Session, rules: ScoringRules) -> Self {
        Self {
            session,
            rules,
            matches: Vec::new(),
            results: HashMap::new(),
        }
    }

    /// Build a store from tournament configuration, creating one match slot
    /// per scheduled match.
    pub fn from_config(config: &TournamentConfig) -> Self {
        let session = Session::new(
            config.trip_name.clone(),
            config.team_a_name.clone(),
            config.team_b_name.clone(),
            config.total_matches,
        );

        let mut store = Self::new(session, config.rules);
        for number in 1..=config.total_matches {
            let m = Match::new(
                store.session.id.clone(),
                number,
                Vec::new(),
                Vec::new(),
                config.rules.holes,
            );
            store.matches.push(m);
        }
        store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Add a match to the session.
    pub fn add_match(&mut self, m: Match) {
        self.matches.push(m);
    }

    /// Look up a match by 1-based slot number.
    pub fn match_by_number(&self, number: u32) -> Option<&Match> {
        self.matches.get(number.checked_sub(1)? as usize)
    }

    fn match_index(&self, match_id: &MatchId) -> Result<usize, StoreError> {
        self.matches
            .iter()
            .position(|m| &m.id == match_id)
            .ok_or_else(|| StoreError::MatchNotFound(match_id.clone()))
    }

    /// The event log for a match, in append order.
    pub fn results_for(&self, match_id: &MatchId) -> &[HoleResult] {
        self.results.get(match_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replay previously persisted hole results into the store's logs and
    /// rebuild every touched match's cache. Events for unknown matches are
    /// skipped with a warning; the reducer tolerates whatever remains.
    pub fn replay(&mut self, results: Vec<HoleResult>) {
        for result in results {
            if self.matches.iter().any(|m| m.id == result.match_id) {
                self.results
                    .entry(result.match_id.clone())
                    .or_default()
                    .push(result);
            } else {
                warn!("Skipping event for unknown match {}", result.match_id);
            }
        }

        for idx in 0..self.matches.len() {
            let match_id = self.matches[idx].id.clone();
            if self.results.contains_key(&match_id) {
                let state = reduce_match_state(self.results_for(&match_id), &self.rules);
                Self::write_cache(&mut self.matches[idx], &state);
            }
        }
    }

    /// Record one hole result: validate, append (never overwrite), re-reduce
    /// the full log, rewrite the match cache. Returns the fresh state.
    pub fn record_hole_result(
        &mut self,
        match_id: &MatchId,
        hole_number: u32,
        winner: HoleWinner,
        team_a_strokes: Option<u32>,
        team_b_strokes: Option<u32>,
        recorded_by: PlayerId,
    ) -> Result<MatchState, StoreError> {
        if !self.rules.is_valid_hole(hole_number) {
            return Err(StoreError::InvalidHoleNumber {
                hole: hole_number,
                max: self.rules.holes,
            });
        }
        let idx = self.match_index(match_id)?;

        let result = HoleResult::new(match_id.clone(), hole_number, winner, recorded_by)
            .with_strokes(team_a_strokes, team_b_strokes);
        self.results
            .entry(match_id.clone())
            .or_default()
            .push(result);

        let state = reduce_match_state(self.results_for(match_id), &self.rules);
        Self::write_cache(&mut self.matches[idx], &state);

        info!(
            "Recorded hole {} of match {} for {}: now {} ({})",
            hole_number, match_id, winner, state.display_score, state.status
        );
        Ok(state)
    }

    /// Undo the most recently recorded result for a match — greatest
    /// timestamp, not highest hole number, since out-of-order corrections are
    /// legal. Returns `Ok(false)` when there is nothing to undo.
    pub fn undo_last_score(&mut self, match_id: &MatchId) -> Result<bool, StoreError> {
        let idx = self.match_index(match_id)?;

        let log = match self.results.get_mut(match_id) {
            Some(log) if !log.is_empty() => log,
            _ => {
                debug!("Nothing to undo for match {}", match_id);
                return Ok(false);
            }
        };

        let Some(last) = log
            .iter()
            .enumerate()
            .max_by_key(|(i, r)| (r.recorded_at, *i))
            .map(|(i, _)| i)
        else {
            return Ok(false);
        };
        let removed = log.remove(last);

        let state = reduce_match_state(self.results_for(match_id), &self.rules);
        Self::write_cache(&mut self.matches[idx], &state);

        info!(
            "Undid hole {} of match {}: now {} ({})",
            removed.hole_number, match_id, state.display_score, state.status
        );
        Ok(true)
    }

    /// Reduce one match's current state from its event log.
    pub fn match_state(&self, match_id: &MatchId) -> Result<MatchState, StoreError> {
        self.match_index(match_id)?;
        Ok(reduce_match_state(self.results_for(match_id), &self.rules))
    }

    /// Tournament standings, re-derived from every match's event log. Match
    /// slots the session schedules beyond those created here still count
    /// toward the total as unplayed.
    pub fn standings(&self) -> TeamStandings {
        let mut states: Vec<MatchState> = self
            .matches
            .iter()
            .map(|m| reduce_match_state(self.results_for(&m.id), &self.rules))
            .collect();

        let scheduled_total = self.session.total_matches as usize;
        while states.len() < scheduled_total {
            states.push(MatchState::scheduled(self.rules.holes));
        }

        compute_standings(&states)
    }

    /// Magic number for the current standings at the given threshold.
    pub fn magic_number(&self, points_to_win: f64) -> Result<MagicNumber, StandingsError> {
        compute_magic_number(&self.standings(), points_to_win)
    }

    // Cache rebuild: written whole from the reduced state, never patched.
    fn write_cache(m: &mut Match, state: &MatchState) {
        m.status = state.status;
        m.holes_remaining = state.holes_remaining;
        m.current_hole = (state.holes_played + 1).min(state.holes_played + state.holes_remaining);
        if state.status == MatchStatus::Scheduled {
            m.result = None;
            m.margin = None;
        } else {
            m.result = Some(state.display_score.clone());
            m.margin = Some(state.current_score.unsigned_abs());
        }
    }
}

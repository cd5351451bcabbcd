//! League: the rules plus every tournament played under them.

use crate::logic::build_global_standings;
use crate::models::standings::{GlobalPlayerStats, TournamentSelection};
use crate::models::tournament::{Tournament, TournamentId};
use crate::rules::Rules;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Errors for league-level operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    TournamentNotFound(TournamentId),
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::TournamentNotFound(id) => write!(f, "Tournament {} not found", id),
        }
    }
}

impl std::error::Error for LeagueError {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct League {
    /// Rules every tournament is scored under. After changing them directly, call
    /// `recompute_all` so stored scores, ranks and points follow the new rules.
    pub rules: Rules,
    pub tournaments: Vec<Tournament>,
}

impl League {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            tournaments: Vec::new(),
        }
    }

    /// Add an empty tournament. Returns its id.
    pub fn create_tournament(&mut self, name: impl Into<String>, date: NaiveDate) -> TournamentId {
        let t = Tournament::new(name, date);
        let id = t.id;
        log::info!("Created tournament {} ({}) on {}", t.name, id, date);
        self.tournaments.push(t);
        id
    }

    pub fn remove_tournament(&mut self, id: TournamentId) -> Result<Tournament, LeagueError> {
        let idx = self
            .tournaments
            .iter()
            .position(|t| t.id == id)
            .ok_or(LeagueError::TournamentNotFound(id))?;
        let removed = self.tournaments.remove(idx);
        log::info!("Removed tournament {} ({})", removed.name, id);
        Ok(removed)
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn tournament_mut(&mut self, id: TournamentId) -> Option<&mut Tournament> {
        self.tournaments.iter_mut().find(|t| t.id == id)
    }

    /// Swap in an updated copy of a tournament, recomputed under the league rules.
    pub fn replace_tournament(&mut self, mut updated: Tournament) -> Result<(), LeagueError> {
        updated.recompute(&self.rules);
        let slot = self
            .tournament_mut(updated.id)
            .ok_or(LeagueError::TournamentNotFound(updated.id))?;
        *slot = updated;
        Ok(())
    }

    /// Close a tournament for editing.
    pub fn finish_tournament(&mut self, id: TournamentId) -> Result<(), LeagueError> {
        let t = self.tournament_mut(id).ok_or(LeagueError::TournamentNotFound(id))?;
        t.finish();
        log::info!("Finished tournament {} ({})", t.name, id);
        Ok(())
    }

    /// Recompute every tournament, e.g. after loading or after the rules changed.
    pub fn recompute_all(&mut self) {
        let rules = self.rules.clone();
        for t in &mut self.tournaments {
            t.recompute(&rules);
        }
    }

    pub fn global_standings(&self, selection: &TournamentSelection) -> Vec<GlobalPlayerStats> {
        build_global_standings(&self.tournaments, selection)
    }
}

//! Cross-tournament leaderboard rows and the view phase used for presentation ordering.

use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which view a roster is being ordered for.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Elimination,
    Final,
}

/// Points one player earned in one tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentPoints {
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub points: u32,
}

/// One leaderboard row, keyed by trimmed player name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalPlayerStats {
    pub name: String,
    pub total_points: u32,
    pub tournaments_played: u32,
    /// Mean elimination score per single game over all counted tournaments.
    pub global_average: f64,
    /// In tournament iteration order.
    pub history: Vec<TournamentPoints>,
}

impl GlobalPlayerStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_points: 0,
            tournaments_played: 0,
            global_average: 0.0,
            history: Vec::new(),
        }
    }
}

/// Which tournaments count towards the leaderboard.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentSelection {
    #[default]
    All,
    Only(HashSet<TournamentId>),
}

impl TournamentSelection {
    pub fn includes(&self, id: &TournamentId) -> bool {
        match self {
            TournamentSelection::All => true,
            TournamentSelection::Only(ids) => ids.contains(id),
        }
    }
}

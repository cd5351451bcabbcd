//! PlayerScore: one player's entry in one tournament.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player within a tournament.
pub type PlayerId = Uuid;

/// Number of games in the elimination round.
pub const ELIMINATION_GAMES: usize = 3;

/// A player's raw scores plus the values derived from them.
///
/// Derived fields are written only by the scoring and ranking operations in `logic`;
/// they are read through accessors so callers cannot patch them by hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub id: PlayerId,
    pub name: String,
    pub handicap_eligible: bool,
    /// Raw elimination games (g1, g2, g3).
    pub games: [i32; ELIMINATION_GAMES],
    /// Raw final game; None if not played.
    pub final_game: Option<i32>,

    #[serde(default)]
    elimination_total: i64,
    #[serde(default)]
    elimination_avg: f64,
    #[serde(default)]
    final_total: Option<f64>,
    #[serde(default)]
    rank: Option<u32>,
    #[serde(default)]
    ranking_points: u32,
}

impl PlayerScore {
    /// Create a new player with the given name. Scores start at zero, final not played.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            handicap_eligible: false,
            games: [0; ELIMINATION_GAMES],
            final_game: None,
            elimination_total: 0,
            elimination_avg: 0.0,
            final_total: None,
            rank: None,
            ranking_points: 0,
        }
    }

    pub fn with_handicap(mut self, eligible: bool) -> Self {
        self.handicap_eligible = eligible;
        self
    }

    pub fn with_games(mut self, g1: i32, g2: i32, g3: i32) -> Self {
        self.games = [g1, g2, g3];
        self
    }

    pub fn with_final(mut self, final_game: Option<i32>) -> Self {
        self.final_game = final_game;
        self
    }

    /// Sum of the elimination games plus handicap.
    pub fn elimination_total(&self) -> i64 {
        self.elimination_total
    }

    /// Elimination total per game.
    pub fn elimination_avg(&self) -> f64 {
        self.elimination_avg
    }

    /// Final game plus handicap plus elimination average; None if the final was not played.
    pub fn final_total(&self) -> Option<f64> {
        self.final_total
    }

    pub fn rank(&self) -> Option<u32> {
        self.rank
    }

    pub fn ranking_points(&self) -> u32 {
        self.ranking_points
    }

    pub(crate) fn set_elimination(&mut self, total: i64, avg: f64) {
        self.elimination_total = total;
        self.elimination_avg = avg;
    }

    pub(crate) fn set_final_total(&mut self, total: Option<f64>) {
        self.final_total = total;
    }

    pub(crate) fn set_standing(&mut self, rank: Option<u32>, points: u32) {
        self.rank = rank;
        self.ranking_points = points;
    }
}

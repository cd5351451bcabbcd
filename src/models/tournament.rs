//! Tournament: an ordered roster of player scores with a name and a date.

use crate::logic::{
    apply_score, apply_score_paste, assign_ranks_and_points, select_finalists, sort_players, ScoreField,
};
use crate::models::player::{PlayerId, PlayerScore};
use crate::models::standings::Phase;
use crate::rules::Rules;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur while editing a tournament roster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Player not found in the roster.
    PlayerNotFound(PlayerId),
    /// Player names cannot be blank.
    EmptyPlayerName,
    /// Tournament has been closed; reopen it before editing.
    TournamentFinished,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            TournamentError::EmptyPlayerName => write!(f, "Player name cannot be empty"),
            TournamentError::TournamentFinished => write!(f, "Tournament is finished"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// One league tournament. Insertion order of `players` is kept through every recomputation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub date: NaiveDate,
    /// Roster in entry order. After editing it directly, call `recompute` so the
    /// derived scores, ranks and points match the raw games again.
    pub players: Vec<PlayerScore>,
    #[serde(default)]
    pub is_finished: bool,
}

impl Tournament {
    /// Create an empty, open tournament.
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date,
            players: Vec::new(),
            is_finished: false,
        }
    }

    /// Create a tournament from an existing roster, with all derived fields computed.
    pub fn with_players(name: impl Into<String>, date: NaiveDate, players: Vec<PlayerScore>, rules: &Rules) -> Self {
        let mut t = Self::new(name, date);
        t.replace_players(players, rules);
        t
    }

    /// Recompute every derived field (e.g. after deserializing or changing rules).
    pub fn recompute(&mut self, rules: &Rules) {
        self.players = assign_ranks_and_points(&self.players, rules);
    }

    fn replace_players(&mut self, players: Vec<PlayerScore>, rules: &Rules) {
        self.players = assign_ranks_and_points(&players, rules);
    }

    fn ensure_open(&self) -> Result<(), TournamentError> {
        if self.is_finished {
            return Err(TournamentError::TournamentFinished);
        }
        Ok(())
    }

    fn ensure_player(&self, id: PlayerId) -> Result<(), TournamentError> {
        if self.players.iter().any(|p| p.id == id) {
            Ok(())
        } else {
            Err(TournamentError::PlayerNotFound(id))
        }
    }

    /// Rebuild the roster with `edit` applied to one player, then rerank.
    fn edit_player<F>(&mut self, id: PlayerId, rules: &Rules, edit: F) -> Result<(), TournamentError>
    where
        F: Fn(&mut PlayerScore),
    {
        self.ensure_open()?;
        self.ensure_player(id)?;
        let players = self
            .players
            .iter()
            .map(|p| {
                let mut p = p.clone();
                if p.id == id {
                    edit(&mut p);
                }
                p
            })
            .collect();
        self.replace_players(players, rules);
        Ok(())
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&PlayerScore> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Append a new player with zero scores. Returns the new id.
    pub fn add_player(&mut self, name: &str, rules: &Rules) -> Result<PlayerId, TournamentError> {
        self.ensure_open()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let player = PlayerScore::new(name);
        let id = player.id;
        let mut players = self.players.clone();
        players.push(player);
        self.replace_players(players, rules);
        Ok(id)
    }

    /// Append imported players after the current roster.
    pub fn import_players(&mut self, imported: Vec<PlayerScore>, rules: &Rules) -> Result<(), TournamentError> {
        self.ensure_open()?;
        let mut players = self.players.clone();
        players.extend(imported);
        self.replace_players(players, rules);
        Ok(())
    }

    pub fn remove_player(&mut self, id: PlayerId, rules: &Rules) -> Result<(), TournamentError> {
        self.ensure_open()?;
        self.ensure_player(id)?;
        let players = self.players.iter().filter(|p| p.id != id).cloned().collect();
        self.replace_players(players, rules);
        Ok(())
    }

    /// Rename a player. The name is trimmed and must not be blank.
    pub fn rename_player(&mut self, id: PlayerId, name: &str, rules: &Rules) -> Result<(), TournamentError> {
        self.ensure_open()?;
        self.ensure_player(id)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        self.edit_player(id, rules, |p| p.name = name.to_string())
    }

    /// Set one raw score from user input (see `parse_game_score` / `parse_final_score`).
    pub fn set_score(&mut self, id: PlayerId, field: ScoreField, raw: &str, rules: &Rules) -> Result<(), TournamentError> {
        self.edit_player(id, rules, |p| apply_score(p, field, raw))
    }

    pub fn toggle_handicap(&mut self, id: PlayerId, rules: &Rules) -> Result<(), TournamentError> {
        self.edit_player(id, rules, |p| p.handicap_eligible = !p.handicap_eligible)
    }

    /// Apply a pasted block of scores, rows following `view_order` from `start_player`.
    pub fn paste_scores(
        &mut self,
        view_order: &[PlayerId],
        start_player: PlayerId,
        start_field: ScoreField,
        text: &str,
        rules: &Rules,
    ) -> Result<(), TournamentError> {
        self.ensure_open()?;
        self.ensure_player(start_player)?;
        let players = apply_score_paste(&self.players, view_order, start_player, start_field, text);
        self.replace_players(players, rules);
        Ok(())
    }

    /// Close the tournament for editing.
    pub fn finish(&mut self) {
        self.is_finished = true;
    }

    pub fn reopen(&mut self) {
        self.is_finished = false;
    }

    /// Finalists in roster order.
    pub fn finalists(&self, rules: &Rules) -> Vec<&PlayerScore> {
        let ids = select_finalists(&self.players, rules);
        self.players.iter().filter(|p| ids.contains(&p.id)).collect()
    }

    /// Finalists ordered by elimination average, highest first.
    pub fn finalists_by_average(&self, rules: &Rules) -> Vec<&PlayerScore> {
        let mut finalists = self.finalists(rules);
        finalists.sort_by(|a, b| b.elimination_avg().total_cmp(&a.elimination_avg()));
        finalists
    }

    /// Full classification as shown on the results view.
    pub fn standings(&self, rules: &Rules) -> Vec<PlayerScore> {
        sort_players(&self.players, Phase::Final, rules)
    }
}

//! Raw score entry: lenient parsing of typed or pasted values onto a roster.

use crate::models::{PlayerId, PlayerScore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw score column of a player row.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreField {
    Game1,
    Game2,
    Game3,
    Final,
}

impl ScoreField {
    /// Index into `PlayerScore::games`; None for the final game.
    pub fn game_index(self) -> Option<usize> {
        match self {
            ScoreField::Game1 => Some(0),
            ScoreField::Game2 => Some(1),
            ScoreField::Game3 => Some(2),
            ScoreField::Final => None,
        }
    }
}

/// Elimination game input: blank or garbage becomes 0. Negative values pass through.
pub fn parse_game_score(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

/// Final game input: blank means not played, garbage becomes 0.
pub fn parse_final_score(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.parse().unwrap_or(0))
}

/// Write one raw value into the given field.
pub fn apply_score(player: &mut PlayerScore, field: ScoreField, raw: &str) {
    match field.game_index() {
        Some(i) => player.games[i] = parse_game_score(raw),
        None => player.final_game = parse_final_score(raw),
    }
}

/// Cell updates for one pasted row.
fn row_updates(row: &str, start_field: ScoreField) -> Vec<(ScoreField, i32)> {
    const GAME_FIELDS: [ScoreField; 3] = [ScoreField::Game1, ScoreField::Game2, ScoreField::Game3];

    row.split('\t')
        .enumerate()
        .filter_map(|(col, cell)| {
            let value: i32 = cell.trim().parse().ok()?;
            match start_field.game_index() {
                Some(start) => GAME_FIELDS.get(start + col).map(|&f| (f, value)),
                None => (col == 0).then_some((ScoreField::Final, value)),
            }
        })
        .collect()
}

/// Apply a pasted spreadsheet block to the roster.
///
/// Rows map to consecutive players of `view_order` starting at `start_player`; columns
/// spill rightwards from `start_field` up to the last elimination game. A final-game
/// paste uses only the first column. Unparsable cells are skipped. The returned roster
/// keeps the input order; derived fields are left for the ranking pass.
pub fn apply_score_paste(
    roster: &[PlayerScore],
    view_order: &[PlayerId],
    start_player: PlayerId,
    start_field: ScoreField,
    text: &str,
) -> Vec<PlayerScore> {
    let Some(start) = view_order.iter().position(|id| *id == start_player) else {
        return roster.to_vec();
    };

    let updates: HashMap<PlayerId, Vec<(ScoreField, i32)>> = text
        .lines()
        .filter(|row| !row.trim().is_empty())
        .zip(view_order[start..].iter())
        .map(|(row, id)| (*id, row_updates(row, start_field)))
        .filter(|(_, cells)| !cells.is_empty())
        .collect();

    roster
        .iter()
        .map(|p| {
            let mut p = p.clone();
            for &(field, value) in updates.get(&p.id).into_iter().flatten() {
                match field.game_index() {
                    Some(i) => p.games[i] = value,
                    None => p.final_game = Some(value),
                }
            }
            p
        })
        .collect()
}

//! Leaderboard across tournaments: points, appearances and a running per-game average.

use crate::models::{GlobalPlayerStats, PlayerScore, Tournament, TournamentPoints, TournamentSelection};
use crate::models::ELIMINATION_GAMES;
use std::collections::HashMap;

/// Fold one tournament result into a player's row.
///
/// The average is kept per single game: the previous average is expanded back to a
/// sum over `(k - 1) * 3` games, the new elimination total is added, and the sum is
/// divided by `k * 3`.
fn record_result(entry: &mut GlobalPlayerStats, tournament: &Tournament, player: &PlayerScore) {
    let games = ELIMINATION_GAMES as f64;
    entry.tournaments_played += 1;
    entry.total_points += player.ranking_points();
    entry.history.push(TournamentPoints {
        tournament_id: tournament.id,
        tournament_name: tournament.name.clone(),
        points: player.ranking_points(),
    });

    let played = f64::from(entry.tournaments_played);
    let previous_sum = entry.global_average * (played - 1.0) * games;
    entry.global_average = (previous_sum + player.elimination_total() as f64) / (played * games);
}

/// Build the league leaderboard: total points descending, then global average descending.
///
/// Players are matched across tournaments by trimmed name, not by id, since ids are
/// tournament-scoped. Two different people with the same name share one row.
/// Rows that tie on both keys keep first-appearance order.
pub fn build_global_standings(
    tournaments: &[Tournament],
    selection: &TournamentSelection,
) -> Vec<GlobalPlayerStats> {
    let mut rows: Vec<GlobalPlayerStats> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for tournament in tournaments.iter().filter(|t| selection.includes(&t.id)) {
        for player in &tournament.players {
            let key = player.name.trim();
            let slot = match index.get(key).copied() {
                Some(slot) => slot,
                None => {
                    rows.push(GlobalPlayerStats::new(key));
                    index.insert(key.to_string(), rows.len() - 1);
                    rows.len() - 1
                }
            };
            record_result(&mut rows[slot], tournament, player);
        }
    }

    rows.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| b.global_average.total_cmp(&a.global_average))
    });
    rows
}

//! Scoring: elimination totals and final totals from raw games and the handicap rule.

use crate::models::{PlayerScore, ELIMINATION_GAMES};
use crate::rules::Rules;

/// Handicap added to each game of this player (0 if not eligible).
pub fn handicap_per_game(player: &PlayerScore, rules: &Rules) -> i32 {
    if player.handicap_eligible {
        rules.handicap_bonus
    } else {
        0
    }
}

/// Elimination total = g1 + g2 + g3 + 3 * handicap; average = total / 3.
///
/// Negative games are taken as-is; validation is the caller's concern. Summed in `i64`
/// so any `i32` input is accepted without overflow.
pub fn compute_elimination_stats(player: &PlayerScore, rules: &Rules) -> PlayerScore {
    let games = ELIMINATION_GAMES as i64;
    let scratch: i64 = player.games.iter().map(|&g| i64::from(g)).sum();
    let total = scratch + games * i64::from(handicap_per_game(player, rules));
    let mut out = player.clone();
    out.set_elimination(total, total as f64 / games as f64);
    out
}

/// Final total = (final game + handicap) + elimination average.
///
/// The handicap counts twice on purpose: once on the final game and once inside the
/// elimination average. Reads the elimination average already stored on `player`.
pub fn compute_final_score(player: &PlayerScore, rules: &Rules) -> PlayerScore {
    let total = player.final_game.map(|raw| {
        f64::from(raw) + f64::from(handicap_per_game(player, rules)) + player.elimination_avg()
    });
    let mut out = player.clone();
    out.set_final_total(total);
    out
}

/// Both scoring steps in order.
pub fn compute_scores(player: &PlayerScore, rules: &Rules) -> PlayerScore {
    compute_final_score(&compute_elimination_stats(player, rules), rules)
}

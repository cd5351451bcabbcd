//! Ranking: finalist selection, standings order, rank numbers and ranking points.

use crate::logic::scoring::compute_scores;
use crate::models::{Phase, PlayerId, PlayerScore};
use crate::rules::Rules;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Elimination total descending, then name ascending (case-sensitive).
fn by_elimination(a: &PlayerScore, b: &PlayerScore) -> Ordering {
    b.elimination_total()
        .cmp(&a.elimination_total())
        .then_with(|| a.name.cmp(&b.name))
}

fn by_average_desc(a: &PlayerScore, b: &PlayerScore) -> Ordering {
    b.elimination_avg().total_cmp(&a.elimination_avg())
}

/// Ids of the top `finalists_count` players by elimination total (all players if fewer).
pub fn select_finalists(roster: &[PlayerScore], rules: &Rules) -> HashSet<PlayerId> {
    let mut sorted: Vec<&PlayerScore> = roster.iter().collect();
    sorted.sort_by(|a, b| by_elimination(a, b));
    sorted
        .into_iter()
        .take(rules.finalists_count)
        .map(|p| p.id)
        .collect()
}

/// Order finalists: final total descending, totals within `tie_tolerance` of their
/// neighbour form one tie group ordered by elimination average; finalists without a
/// final score come last, by elimination average.
fn order_finalists<'a>(finalists: Vec<&'a PlayerScore>, tolerance: f64) -> Vec<&'a PlayerScore> {
    let mut played: Vec<(f64, &PlayerScore)> = Vec::new();
    let mut not_played: Vec<&PlayerScore> = Vec::new();
    for p in finalists {
        match p.final_total() {
            Some(total) => played.push((total, p)),
            None => not_played.push(p),
        }
    }
    played.sort_by(|(x, _), (y, _)| y.total_cmp(x));

    let mut ordered = Vec::with_capacity(played.len() + not_played.len());
    let mut group: Vec<&PlayerScore> = Vec::new();
    let mut previous: Option<f64> = None;
    for (total, p) in played {
        if previous.is_some_and(|prev| (prev - total).abs() > tolerance) {
            group.sort_by(|a, b| by_average_desc(a, b));
            ordered.append(&mut group);
        }
        previous = Some(total);
        group.push(p);
    }
    group.sort_by(|a, b| by_average_desc(a, b));
    ordered.append(&mut group);

    not_played.sort_by(|a, b| by_average_desc(a, b));
    ordered.append(&mut not_played);
    ordered
}

/// Full final classification: every finalist ahead of every non-finalist.
///
/// Uses the derived fields already stored on the players. Equal players keep roster order.
pub fn resolve_standings<'a>(roster: &'a [PlayerScore], rules: &Rules) -> Vec<&'a PlayerScore> {
    let finalist_ids = select_finalists(roster, rules);
    let (finalists, mut others): (Vec<&PlayerScore>, Vec<&PlayerScore>) =
        roster.iter().partition(|p| finalist_ids.contains(&p.id));

    let mut ordered = order_finalists(finalists, rules.tie_tolerance);
    others.sort_by(|a, b| b.elimination_total().cmp(&a.elimination_total()));
    ordered.append(&mut others);
    ordered
}

/// Points for a 0-based standings position: max points for the winner, one fewer per place.
pub fn ranking_points_for(position: usize, rules: &Rules) -> u32 {
    let position = u32::try_from(position).unwrap_or(u32::MAX);
    rules.max_ranking_points.saturating_sub(position)
}

/// Recompute every derived field of the roster and return it in entry order.
///
/// Scores are recomputed first so rank and points never come from stale values; the
/// ranking pass produces an id lookup that is merged back onto the fresh roster.
pub fn assign_ranks_and_points(roster: &[PlayerScore], rules: &Rules) -> Vec<PlayerScore> {
    let calculated: Vec<PlayerScore> = roster.iter().map(|p| compute_scores(p, rules)).collect();

    let standings: HashMap<PlayerId, (u32, u32)> = resolve_standings(&calculated, rules)
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let rank = u32::try_from(i + 1).unwrap_or(u32::MAX);
            (p.id, (rank, ranking_points_for(i, rules)))
        })
        .collect();

    log::debug!(
        "Ranked {} player(s), {} finalist slot(s)",
        calculated.len(),
        rules.finalists_count.min(calculated.len())
    );

    calculated
        .into_iter()
        .map(|mut p| {
            match standings.get(&p.id) {
                Some(&(rank, points)) => p.set_standing(Some(rank), points),
                None => p.set_standing(None, 0),
            }
            p
        })
        .collect()
}

/// Presentation order for a phase view. Does not affect scoring.
pub fn sort_players(roster: &[PlayerScore], phase: Phase, rules: &Rules) -> Vec<PlayerScore> {
    match phase {
        Phase::Elimination => {
            let mut sorted = roster.to_vec();
            sorted.sort_by(by_elimination);
            sorted
        }
        Phase::Final => resolve_standings(roster, rules).into_iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finalist(name: &str, avg: f64, final_total: f64) -> PlayerScore {
        let mut p = PlayerScore::new(name);
        p.set_elimination((avg * 3.0).round() as i64, avg);
        p.set_final_total(Some(final_total));
        p
    }

    #[test]
    fn final_totals_within_tolerance_fall_back_to_average() {
        let rules = Rules::default();
        let roster = vec![finalist("A", 150.0, 300.005), finalist("B", 160.0, 300.0)];
        let order: Vec<&str> = resolve_standings(&roster, &rules).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn final_totals_outside_tolerance_keep_score_order() {
        let rules = Rules::default();
        let roster = vec![finalist("A", 150.0, 300.02), finalist("B", 160.0, 300.0)];
        let order: Vec<&str> = resolve_standings(&roster, &rules).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn ranking_points_floor_at_zero() {
        let rules = Rules { max_ranking_points: 2, ..Rules::default() };
        let points: Vec<u32> = (0..4).map(|i| ranking_points_for(i, &rules)).collect();
        assert_eq!(points, vec![2, 1, 0, 0]);
    }
}

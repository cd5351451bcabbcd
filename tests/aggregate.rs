//! Integration tests for the cross-tournament leaderboard.

use bowling_league::{build_global_standings, PlayerScore, Rules, Tournament, TournamentSelection};
use chrono::NaiveDate;
use std::collections::HashSet;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn flat(name: &str, per_game: i32) -> PlayerScore {
    PlayerScore::new(name).with_games(per_game, per_game, per_game)
}

/// T1: Jan 450, Ola 300 (Jan 24, Ola 23). T2: Jan 480, Ola 600 (Ola 24, Jan 23).
fn two_tournaments() -> Vec<Tournament> {
    let rules = Rules::default();
    vec![
        Tournament::with_players("Round 1", day(1), vec![flat("Jan", 150), flat("Ola", 100)], &rules),
        Tournament::with_players("Round 2", day(8), vec![flat("Jan", 160), flat("Ola", 200)], &rules),
    ]
}

#[test]
fn running_average_is_per_game_across_tournaments() {
    let tournaments = two_tournaments();

    let after_first = build_global_standings(&tournaments[..1], &TournamentSelection::All);
    let jan = after_first.iter().find(|s| s.name == "Jan").unwrap();
    assert!((jan.global_average - 150.0).abs() < 1e-9);

    let after_both = build_global_standings(&tournaments, &TournamentSelection::All);
    let jan = after_both.iter().find(|s| s.name == "Jan").unwrap();
    assert!((jan.global_average - 155.0).abs() < 1e-9);
    assert_eq!(jan.tournaments_played, 2);
    assert_eq!(jan.total_points, 47);
}

#[test]
fn equal_points_break_on_global_average() {
    let standings = build_global_standings(&two_tournaments(), &TournamentSelection::All);

    let rows: Vec<(&str, u32)> = standings.iter().map(|s| (s.name.as_str(), s.total_points)).collect();
    // Jan averages 155.0, Ola 150.0.
    assert_eq!(rows, vec![("Jan", 47), ("Ola", 47)]);
}

#[test]
fn history_follows_tournament_order() {
    let tournaments = two_tournaments();
    let standings = build_global_standings(&tournaments, &TournamentSelection::All);
    let ola = standings.iter().find(|s| s.name == "Ola").unwrap();

    let history: Vec<(&str, u32)> = ola
        .history
        .iter()
        .map(|h| (h.tournament_name.as_str(), h.points))
        .collect();
    assert_eq!(history, vec![("Round 1", 23), ("Round 2", 24)]);
    assert_eq!(ola.history[1].tournament_id, tournaments[1].id);
}

#[test]
fn only_selected_tournaments_count() {
    let tournaments = two_tournaments();
    let selection = TournamentSelection::Only(HashSet::from([tournaments[1].id]));

    let standings = build_global_standings(&tournaments, &selection);

    let rows: Vec<(&str, u32, u32)> = standings
        .iter()
        .map(|s| (s.name.as_str(), s.total_points, s.tournaments_played))
        .collect();
    assert_eq!(rows, vec![("Ola", 24, 1), ("Jan", 23, 1)]);
}

#[test]
fn empty_selection_gives_empty_leaderboard() {
    let standings = build_global_standings(&two_tournaments(), &TournamentSelection::Only(HashSet::new()));
    assert!(standings.is_empty());
}

#[test]
fn players_are_merged_by_trimmed_name() {
    // Identity is the trimmed display name: unrelated players sharing a name become one row.
    let rules = Rules::default();
    let tournaments = vec![
        Tournament::with_players("Round 1", day(1), vec![flat("Jan ", 150)], &rules),
        Tournament::with_players("Round 2", day(8), vec![flat("  Jan", 150), flat("jan", 150)], &rules),
    ];

    let standings = build_global_standings(&tournaments, &TournamentSelection::All);

    let jan = standings.iter().find(|s| s.name == "Jan").unwrap();
    assert_eq!(jan.tournaments_played, 2);
    // Matching is case-sensitive.
    assert!(standings.iter().any(|s| s.name == "jan" && s.tournaments_played == 1));
    assert_eq!(standings.len(), 2);
}

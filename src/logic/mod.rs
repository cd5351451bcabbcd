//! League scoring logic: scoring, ranking, aggregation, score entry and roster import.

mod aggregate;
mod entry;
mod import;
mod ranking;
mod scoring;

pub use aggregate::build_global_standings;
pub use entry::{apply_score, apply_score_paste, parse_final_score, parse_game_score, ScoreField};
pub use import::{parse_roster, ImportError};
pub use ranking::{
    assign_ranks_and_points, ranking_points_for, resolve_standings, select_finalists, sort_players,
};
pub use scoring::{compute_elimination_stats, compute_final_score, compute_scores, handicap_per_game};

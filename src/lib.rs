//! Bowling league scoring: library with models and business logic.

pub mod logic;
pub mod models;
pub mod rules;

pub use logic::{
    apply_score, apply_score_paste, assign_ranks_and_points, build_global_standings,
    compute_elimination_stats, compute_final_score, compute_scores, handicap_per_game,
    parse_final_score, parse_game_score, parse_roster, ranking_points_for, resolve_standings,
    select_finalists, sort_players, ImportError, ScoreField,
};
pub use models::{
    GlobalPlayerStats, League, LeagueError, Phase, PlayerId, PlayerScore, Tournament,
    TournamentError, TournamentId, TournamentPoints, TournamentSelection, ELIMINATION_GAMES,
};
pub use rules::{Rules, RulesError};

//! Data structures for the league: player scores, tournaments, leaderboard rows.

mod league;
mod player;
mod standings;
mod tournament;

pub use league::{League, LeagueError};
pub use player::{PlayerId, PlayerScore, ELIMINATION_GAMES};
pub use standings::{GlobalPlayerStats, Phase, TournamentPoints, TournamentSelection};
pub use tournament::{Tournament, TournamentError, TournamentId};

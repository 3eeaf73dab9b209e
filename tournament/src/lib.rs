pub mod runner;
pub mod series;

pub use runner::{run_game, run_game_with, GameRecord, RunError, MAX_ATTEMPTS};
pub use series::{play_series, run_series, summarize, SeriesConfig, SeriesGame, SeriesSummary};

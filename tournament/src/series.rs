// ═══════════════════════════════════════════════════════════════════════
// Series — many independent games in parallel, aggregated per agent
//
// Every game gets its own seed and its own freshly built agent pair, so
// games share nothing and the summary does not depend on scheduling.
// With `swap_seats`, odd-numbered games put the second agent in seat 0.
// ═══════════════════════════════════════════════════════════════════════

use crate::runner::{run_game, GameRecord};
use durak_agents::{make_agent, Agent, AgentKind};
use durak_engine::setup::{GameConfig, OpeningRule};
use durak_engine::types::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub games: u32,
    pub base_seed: u64,
    pub max_decisions: usize,
    /// Agent in slot 0 and slot 1. Slot 0 sits in seat 0 unless swapped.
    pub agents: [AgentKind; 2],
    pub swap_seats: bool,
    pub opening: OpeningRule,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig {
            games: 100,
            base_seed: 42,
            max_decisions: 10_000,
            agents: [AgentKind::Heuristic, AgentKind::Random],
            swap_seats: true,
            opening: OpeningRule::default(),
        }
    }
}

impl SeriesConfig {
    /// Seed for game `g`.
    pub fn game_seed(&self, g: u32) -> u64 {
        self.base_seed.wrapping_add(g as u64 * 1000)
    }

    /// Which slot sits in each seat for game `g`.
    pub fn lineup(&self, g: u32) -> [usize; 2] {
        if self.swap_seats && g % 2 == 1 { [1, 0] } else { [0, 1] }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentStats {
    pub kind: Option<AgentKind>,
    pub wins: u32,
    pub losses: u32,
    pub errors: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub games: u32,
    pub completed: u32,
    pub errors: u32,
    /// Indexed by slot.
    pub agents: [AgentStats; 2],
    /// Wins by seat, across slots.
    pub seat_wins: [u32; 2],
    pub mean_decisions: f64,
    pub mean_rounds: f64,
}

impl SeriesSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Outcome of one game of a series, before aggregation.
#[derive(Debug, Clone)]
pub struct SeriesGame {
    pub game: u32,
    pub lineup: [usize; 2],
    pub result: Result<GameRecord, String>,
}

fn play_one(config: &SeriesConfig, g: u32) -> SeriesGame {
    let seed = config.game_seed(g);
    let lineup = config.lineup(g);
    let mut agents: [Box<dyn Agent>; 2] = [
        make_agent(config.agents[lineup[0]], seed.wrapping_add(1)),
        make_agent(config.agents[lineup[1]], seed.wrapping_add(2)),
    ];
    let game_config = GameConfig { seed, opening: config.opening };
    let result = run_game(&mut agents, &game_config, config.max_decisions).map_err(|e| {
        warn!(game = g, seed, error = %e, "game failed");
        e.to_string()
    });
    if let Ok(record) = &result {
        debug!(game = g, seed, loser = ?record.loser, decisions = record.decisions, "game finished");
    }
    SeriesGame { game: g, lineup, result }
}

/// Play every game of the series, in parallel, in game order.
pub fn play_series(config: &SeriesConfig) -> Vec<SeriesGame> {
    (0..config.games)
        .into_par_iter()
        .map(|g| play_one(config, g))
        .collect()
}

/// Play a series and aggregate it.
pub fn run_series(config: &SeriesConfig) -> SeriesSummary {
    info!(games = config.games, p0 = %config.agents[0], p1 = %config.agents[1], "series start");
    let summary = summarize(config, &play_series(config));
    info!(completed = summary.completed, errors = summary.errors, "series done");
    summary
}

pub fn summarize(config: &SeriesConfig, games: &[SeriesGame]) -> SeriesSummary {
    let mut summary = SeriesSummary {
        games: games.len() as u32,
        ..SeriesSummary::default()
    };
    for (slot, stats) in summary.agents.iter_mut().enumerate() {
        stats.kind = Some(config.agents[slot]);
    }

    let mut total_decisions = 0usize;
    let mut total_rounds = 0u64;
    for game in games {
        match &game.result {
            Ok(record) => {
                summary.completed += 1;
                total_decisions += record.decisions;
                total_rounds += record.rounds as u64;
                for seat in Seat::ALL {
                    let slot = game.lineup[seat.index()];
                    if record.rewards[seat.index()] > 0 {
                        summary.agents[slot].wins += 1;
                        summary.seat_wins[seat.index()] += 1;
                    } else {
                        summary.agents[slot].losses += 1;
                    }
                }
            }
            Err(_) => {
                summary.errors += 1;
                for stats in summary.agents.iter_mut() {
                    stats.errors += 1;
                }
            }
        }
    }

    if summary.completed > 0 {
        summary.mean_decisions = total_decisions as f64 / summary.completed as f64;
        summary.mean_rounds = total_rounds as f64 / summary.completed as f64;
    }
    summary
}

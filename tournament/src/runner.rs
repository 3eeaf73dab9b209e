// ═══════════════════════════════════════════════════════════════════════
// Game Runner — runs a complete headless game with agents
// ═══════════════════════════════════════════════════════════════════════

use durak_agents::Agent;
use durak_engine::action::{describe, ActionId};
use durak_engine::engine::{self, legal_actions, reward, step, StepOutcome};
use durak_engine::error::EngineError;
use durak_engine::setup::{new_game, GameConfig};
use durak_engine::state::GameState;
use durak_engine::types::*;
use durak_engine::visibility::player_view;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Attempts an agent gets to return a legal id before the game is abandoned.
pub const MAX_ATTEMPTS: usize = 8;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("{agent} ({seat}) returned {attempts} illegal actions in a row")]
    AgentExhausted { seat: Seat, agent: String, attempts: usize },
    #[error("game exceeded {limit} decisions without finishing (round {rounds})")]
    DecisionLimit { limit: usize, rounds: u32 },
    #[error("game stuck: {seat} to act with no legal actions")]
    Stuck { seat: Seat },
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result of a completed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    /// Indexed by seat.
    pub rewards: [i8; 2],
    pub loser: Option<Seat>,
    pub decisions: usize,
    pub rounds: u32,
    /// Every applied move, in order.
    pub history: Vec<(Seat, ActionId)>,
}

/// Run a complete game. `agents[0]` plays seat 0, `agents[1]` seat 1.
///
/// Each agent is asked only when its seat is to act, sees only its own
/// `PlayerView`, and is told about each of its own moves afterwards.
pub fn run_game(
    agents: &mut [Box<dyn Agent>; 2],
    config: &GameConfig,
    max_decisions: usize, // safety limit to prevent infinite loops
) -> Result<GameRecord, RunError> {
    run_game_with(agents, config, max_decisions, |_, _, _, _| {})
}

/// [`run_game`], calling `on_move` with the resulting state after every
/// applied move.
pub fn run_game_with<F>(
    agents: &mut [Box<dyn Agent>; 2],
    config: &GameConfig,
    max_decisions: usize,
    mut on_move: F,
) -> Result<GameRecord, RunError>
where
    F: FnMut(&GameState, Seat, ActionId, StepOutcome),
{
    let mut state = new_game(config);
    let mut history = Vec::new();

    while !state.is_done() {
        if history.len() >= max_decisions {
            return Err(RunError::DecisionLimit { limit: max_decisions, rounds: state.rounds() });
        }

        let seat = state.to_act();
        let legal = legal_actions(&state);
        if legal.is_empty() {
            error!(%seat, "no legal actions in a live game");
            return Err(RunError::Stuck { seat });
        }

        let id = solicit(agents[seat.index()].as_mut(), &state, seat, &legal)?;
        let outcome = step(&mut state, id)?;
        debug!(%seat, action = %describe(id), ?outcome, "decision");
        history.push((seat, id));

        agents[seat.index()].observe_action(id, &player_view(&state, seat));
        on_move(&state, seat, id, outcome);
    }

    Ok(GameRecord {
        seed: config.seed,
        rewards: [reward(&state, Seat::Zero), reward(&state, Seat::One)],
        loser: engine::loser(&state),
        decisions: history.len(),
        rounds: state.rounds(),
        history,
    })
}

/// Ask until the agent names a legal id, up to `MAX_ATTEMPTS` times.
fn solicit(
    agent: &mut dyn Agent,
    state: &GameState,
    seat: Seat,
    legal: &[ActionId],
) -> Result<ActionId, RunError> {
    let view = player_view(state, seat);
    for attempt in 1..=MAX_ATTEMPTS {
        let id = agent.choose_action(&view, legal);
        if legal.contains(&id) {
            return Ok(id);
        }
        warn!(agent = agent.name(), %seat, attempt, action = %describe(id), "illegal choice, asking again");
    }
    Err(RunError::AgentExhausted {
        seat,
        agent: agent.name().to_string(),
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use durak_agents::{HeuristicAgent, RandomAgent, ScriptedAgent};
    use durak_engine::visibility::PlayerView;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn randoms(seed: u64) -> [Box<dyn Agent>; 2] {
        [Box::new(RandomAgent::new(seed)), Box::new(RandomAgent::new(seed + 1))]
    }

    /// Always answers with an id outside the action space.
    struct Garbage;

    impl Agent for Garbage {
        fn name(&self) -> &str { "Garbage" }
        fn choose_action(&mut self, _view: &PlayerView, _legal: &[ActionId]) -> ActionId {
            ActionId(200)
        }
    }

    #[test]
    fn test_random_game_completes() {
        let mut agents = randoms(7);
        let record = run_game(&mut agents, &GameConfig::with_seed(7), 10_000).unwrap();
        assert_eq!(record.decisions, record.history.len());
        assert_eq!(record.rewards[0], -record.rewards[1]);
        let loser = record.loser.unwrap();
        assert_eq!(record.rewards[loser.index()], -1);
    }

    #[test]
    fn test_history_replays_to_same_result() {
        let config = GameConfig::with_seed(31);
        let mut agents: [Box<dyn Agent>; 2] = [Box::new(HeuristicAgent::new()), Box::new(RandomAgent::new(5))];
        let record = run_game(&mut agents, &config, 10_000).unwrap();

        let mut state = new_game(&config);
        for &(seat, id) in &record.history {
            assert_eq!(state.to_act(), seat);
            step(&mut state, id).unwrap();
        }
        assert!(state.is_done());
        assert_eq!(reward(&state, Seat::Zero), record.rewards[0]);
    }

    #[test]
    fn test_same_seeds_same_record() {
        let a = run_game(&mut randoms(2), &GameConfig::with_seed(99), 10_000).unwrap();
        let b = run_game(&mut randoms(2), &GameConfig::with_seed(99), 10_000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_illegal_agent_is_exhausted() {
        let mut agents: [Box<dyn Agent>; 2] = [Box::new(Garbage), Box::new(Garbage)];
        let err = run_game(&mut agents, &GameConfig::with_seed(1), 10_000).unwrap_err();
        assert!(matches!(err, RunError::AgentExhausted { attempts: MAX_ATTEMPTS, .. }));
    }

    #[test]
    fn test_decision_limit() {
        let err = run_game(&mut randoms(3), &GameConfig::with_seed(3), 2).unwrap_err();
        assert!(matches!(err, RunError::DecisionLimit { limit: 2, .. }));
    }

    /// Counts observed moves on behalf of a random player.
    struct Watcher {
        seat: Seat,
        inner: RandomAgent,
        seen: Arc<AtomicUsize>,
    }

    impl Agent for Watcher {
        fn name(&self) -> &str { "Watcher" }
        fn choose_action(&mut self, view: &PlayerView, legal: &[ActionId]) -> ActionId {
            self.inner.choose_action(view, legal)
        }
        fn observe_action(&mut self, _action: ActionId, view: &PlayerView) {
            assert_eq!(view.viewer, self.seat);
            self.seen.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_agents_observe_only_their_own_moves() {
        let seen = [Arc::new(AtomicUsize::new(0)), Arc::new(AtomicUsize::new(0))];
        let mut agents: [Box<dyn Agent>; 2] = [
            Box::new(Watcher { seat: Seat::Zero, inner: RandomAgent::new(1), seen: seen[0].clone() }),
            Box::new(Watcher { seat: Seat::One, inner: RandomAgent::new(2), seen: seen[1].clone() }),
        ];
        let record = run_game(&mut agents, &GameConfig::with_seed(12), 10_000).unwrap();
        for seat in Seat::ALL {
            let own = record.history.iter().filter(|(s, _)| *s == seat).count();
            assert_eq!(seen[seat.index()].load(Ordering::Relaxed), own, "{}", seat);
        }
    }

    #[test]
    fn test_on_move_sees_every_move_in_order() {
        let mut seen = Vec::new();
        let mut last_done = false;
        let record = run_game_with(&mut randoms(4), &GameConfig::with_seed(4), 10_000, |state, seat, id, _| {
            assert!(!last_done, "callback after the game ended");
            last_done = state.is_done();
            seen.push((seat, id));
        })
        .unwrap();
        assert!(last_done);
        assert_eq!(seen, record.history);
    }

    #[test]
    fn test_first_legal_game_finishes() {
        let mut agents: [Box<dyn Agent>; 2] = [
            Box::new(ScriptedAgent::new(Vec::new())),
            Box::new(ScriptedAgent::new(Vec::new())),
        ];
        let record = run_game(&mut agents, &GameConfig::with_seed(12), 10_000).unwrap();
        let mut state = new_game(&GameConfig::with_seed(12));
        for &(_, id) in &record.history {
            assert_eq!(id, legal_actions(&state)[0]);
            step(&mut state, id).unwrap();
        }
        assert!(state.is_done());
    }
}

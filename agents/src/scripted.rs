// ═══════════════════════════════════════════════════════════════════════
// Scripted Agent — replays a fixed list of moves.
// Used to reproduce positions and in driver tests.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use durak_engine::action::{describe, ActionId};
use durak_engine::visibility::PlayerView;
use std::collections::VecDeque;
use tracing::warn;

pub struct ScriptedAgent {
    script: VecDeque<ActionId>,
}

impl ScriptedAgent {
    pub fn new(script: impl IntoIterator<Item = ActionId>) -> Self {
        ScriptedAgent {
            script: script.into_iter().collect(),
        }
    }

    /// Moves still queued.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Agent for ScriptedAgent {
    fn name(&self) -> &str { "Scripted" }

    /// Next scripted id if legal; otherwise the first legal action.
    fn choose_action(&mut self, _view: &PlayerView, legal: &[ActionId]) -> ActionId {
        let fallback = legal.first().copied().unwrap_or(ActionId::TAKE);
        match self.script.pop_front() {
            Some(id) if legal.contains(&id) => id,
            Some(id) => {
                warn!(action = %describe(id), "scripted action not legal here, falling back");
                fallback
            }
            None => fallback,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Human Agent — terminal prompt over the legal actions
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use dialoguer::Select;
use durak_engine::action::{describe, ActionId};
use durak_engine::render::render_view;
use durak_engine::visibility::PlayerView;
use tracing::warn;

#[derive(Debug, Default)]
pub struct HumanAgent;

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent
    }
}

impl Agent for HumanAgent {
    fn name(&self) -> &str { "Human" }

    fn choose_action(&mut self, view: &PlayerView, legal: &[ActionId]) -> ActionId {
        let fallback = legal.first().copied().unwrap_or(ActionId::TAKE);
        if legal.len() == 1 {
            println!("\nOnly move: {}", describe(fallback));
            return fallback;
        }

        println!("\n{}", render_view(view));
        let labels: Vec<String> = legal.iter().map(|&id| describe(id)).collect();
        let selection = Select::new()
            .with_prompt("Your move")
            .items(&labels)
            .default(0)
            .interact();
        match selection {
            Ok(i) => legal.get(i).copied().unwrap_or(fallback),
            Err(e) => {
                warn!(error = %e, "prompt failed, playing first legal action");
                fallback
            }
        }
    }
}

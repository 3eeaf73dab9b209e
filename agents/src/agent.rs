// ═══════════════════════════════════════════════════════════════════════
// Agent Trait — interface every decision-maker implements
//
// KEY DESIGN PRINCIPLE:
//   Agents receive a `PlayerView` (not raw GameState), which only
//   contains information the player is legally allowed to see.
//   This enforces information hiding at the type level.
//
//   The agent never gets to see:
//     - The opponent's hand (only its size)
//     - Deck ordering
// ═══════════════════════════════════════════════════════════════════════

use durak_engine::action::ActionId;
use durak_engine::visibility::PlayerView;

/// Trait that all agents must implement.
///
/// The driver only asks an agent to move when `legal` is non-empty, and it
/// re-asks if the returned id is not in `legal`.
pub trait Agent: Send {
    /// Human-readable name for this agent (e.g., "Random", "Heuristic").
    fn name(&self) -> &str;

    /// Pick one of `legal` for the position shown in `view`.
    fn choose_action(&mut self, view: &PlayerView, legal: &[ActionId]) -> ActionId;

    /// Called after each of this agent's own moves is applied, with its
    /// view of the resulting position. Default: ignore.
    fn observe_action(&mut self, _action: ActionId, _view: &PlayerView) {}
}

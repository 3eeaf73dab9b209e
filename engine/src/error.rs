use crate::action::Action;
use crate::types::Seat;
use thiserror::Error;

/// Everything the engine can refuse. None of these are fatal: the state is
/// left untouched and the driver is expected to ask for another action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("action id {0} is outside the action space")]
    InvalidActionId(u8),

    #[error("{action} is not legal for {player} in this position")]
    IllegalAction { action: Action, player: Seat },

    #[error("engine invariant violated: {0}")]
    InvariantViolation(String),

    #[error("the game is already over")]
    GameOver,

    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

pub mod types;
pub mod cards;
pub mod action;
pub mod error;
pub mod state;
pub mod setup;
pub mod engine;
pub mod visibility;
pub mod render;


pub use types::*;
pub use cards::Deck;
pub use action::{describe, Action, ActionId, NUM_ACTIONS};
pub use error::EngineError;
pub use state::{GameState, Layout};
pub use setup::{new_game, GameConfig, OpeningRule};
pub use engine::{is_terminal, legal_actions, reward, step, StepOutcome};
pub use visibility::{player_view, PlayerView};

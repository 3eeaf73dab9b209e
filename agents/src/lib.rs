pub mod agent;
pub mod random;
pub mod heuristic;
pub mod scripted;
pub mod human;
pub mod kind;

pub use agent::Agent;
pub use random::RandomAgent;
pub use heuristic::HeuristicAgent;
pub use scripted::ScriptedAgent;
pub use human::HumanAgent;
pub use kind::{make_agent, AgentKind};

use crate::agent::Agent;
use crate::heuristic::HeuristicAgent;
use crate::human::HumanAgent;
use crate::random::RandomAgent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Agents selectable from the command line and series configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Heuristic,
    Human,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Random, AgentKind::Heuristic, AgentKind::Human];
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            AgentKind::Random => "random",
            AgentKind::Heuristic => "heuristic",
            AgentKind::Human => "human",
        };
        write!(f, "{}", s)
    }
}

/// Build a boxed agent. `seed` feeds agents that use randomness.
pub fn make_agent(kind: AgentKind, seed: u64) -> Box<dyn Agent> {
    match kind {
        AgentKind::Random => Box::new(RandomAgent::new(seed)),
        AgentKind::Heuristic => Box::new(HeuristicAgent::new()),
        AgentKind::Human => Box::new(HumanAgent::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_agent_names() {
        assert_eq!(make_agent(AgentKind::Random, 1).name(), "Random");
        assert_eq!(make_agent(AgentKind::Heuristic, 1).name(), "Heuristic");
        assert_eq!(make_agent(AgentKind::Human, 1).name(), "Human");
    }

    #[test]
    fn test_kind_display_matches_cli_value() {
        use clap::ValueEnum;
        for kind in AgentKind::ALL {
            let value = kind.to_possible_value().unwrap();
            assert_eq!(value.get_name(), kind.to_string());
        }
    }
}

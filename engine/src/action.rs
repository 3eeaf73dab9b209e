// ═══════════════════════════════════════════════════════════════════════
// Action codec — the integer wire format between engine and agents
//
//   0              Take
//   1              Stop Attack
//   2  .. 2+36     Attack(card)   card = decode(id - 2)
//   38 .. 38+36    Defend(card)   card = decode(id - 38)
//
// Decoding is strict: ids >= NUM_ACTIONS are rejected, never wrapped.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::EngineError;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Size of the action id space.
pub const NUM_ACTIONS: usize = 2 + 2 * NUM_CARDS;

const TAKE_ID: u8 = 0;
const STOP_ATTACK_ID: u8 = 1;
const ATTACK_BASE: u8 = 2;
const DEFEND_BASE: u8 = ATTACK_BASE + NUM_CARDS as u8;

/// Raw action id as exchanged with agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(pub u8);

impl ActionId {
    pub const TAKE: ActionId = ActionId(TAKE_ID);
    pub const STOP_ATTACK: ActionId = ActionId(STOP_ATTACK_ID);

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Decode into a semantic action. Fails for ids outside the space.
    pub fn decode(self) -> Result<Action, EngineError> {
        Action::decode(self)
    }

    /// Every id in the action space, in order.
    pub fn all() -> impl Iterator<Item = ActionId> {
        (0..NUM_ACTIONS as u8).map(ActionId)
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four things a player can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Defender gives up and collects the table.
    Take,
    /// Attacker declares no further cards this round.
    StopAttack,
    /// Put a card on the attack pile.
    Attack(Card),
    /// Cover the oldest open attack card.
    Defend(Card),
}

impl Action {
    pub fn encode(self) -> ActionId {
        match self {
            Action::Take => ActionId(TAKE_ID),
            Action::StopAttack => ActionId(STOP_ATTACK_ID),
            Action::Attack(card) => ActionId(ATTACK_BASE + card.index()),
            Action::Defend(card) => ActionId(DEFEND_BASE + card.index()),
        }
    }

    pub fn decode(id: ActionId) -> Result<Action, EngineError> {
        let n = id.0;
        let action = match n {
            TAKE_ID => Action::Take,
            STOP_ATTACK_ID => Action::StopAttack,
            _ if n < DEFEND_BASE => Action::Attack(card_at(n - ATTACK_BASE, id)?),
            _ => Action::Defend(card_at(n - DEFEND_BASE, id)?),
        };
        Ok(action)
    }

    /// The card this action moves, if any.
    pub fn card(self) -> Option<Card> {
        match self {
            Action::Attack(c) | Action::Defend(c) => Some(c),
            Action::Take | Action::StopAttack => None,
        }
    }
}

fn card_at(offset: u8, id: ActionId) -> Result<Card, EngineError> {
    Card::from_index(offset).ok_or(EngineError::InvalidActionId(id.0))
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Take => write!(f, "Take"),
            Action::StopAttack => write!(f, "Stop Attack"),
            Action::Attack(c) => write!(f, "ATTACK({})", c),
            Action::Defend(c) => write!(f, "DEFEND({})", c),
        }
    }
}

impl From<Action> for ActionId {
    fn from(action: Action) -> ActionId {
        action.encode()
    }
}

impl TryFrom<ActionId> for Action {
    type Error = EngineError;

    fn try_from(id: ActionId) -> Result<Action, EngineError> {
        Action::decode(id)
    }
}

/// Human-readable label for any id. Out-of-range ids read "Invalid Action".
pub fn describe(id: ActionId) -> String {
    match Action::decode(id) {
        Ok(action) => action.to_string(),
        Err(_) => "Invalid Action".to_string(),
    }
}

/// Dense legality mask over the whole action space.
pub fn to_mask(actions: &[ActionId]) -> [bool; NUM_ACTIONS] {
    let mut mask = [false; NUM_ACTIONS];
    for id in actions {
        if let Some(slot) = mask.get_mut(id.index()) {
            *slot = true;
        }
    }
    mask
}

/// Inverse of [`to_mask`], ids in ascending order.
pub fn from_mask(mask: &[bool; NUM_ACTIONS]) -> Vec<ActionId> {
    mask.iter()
        .enumerate()
        .filter(|(_, &set)| set)
        .map(|(i, _)| ActionId(i as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank).unwrap()
    }

    #[test]
    fn test_action_space_size() {
        assert_eq!(NUM_ACTIONS, 74);
        assert_eq!(ActionId::all().count(), 74);
    }

    #[test]
    fn test_fixed_ids() {
        assert_eq!(Action::Take.encode(), ActionId(0));
        assert_eq!(Action::StopAttack.encode(), ActionId(1));
        assert_eq!(Action::Attack(card(Suit::Clubs, 6)).encode(), ActionId(2));
        assert_eq!(Action::Attack(card(Suit::Spades, 14)).encode(), ActionId(37));
        assert_eq!(Action::Defend(card(Suit::Clubs, 6)).encode(), ActionId(38));
        assert_eq!(Action::Defend(card(Suit::Spades, 14)).encode(), ActionId(73));
        // suit * 9 + (rank - 6)
        assert_eq!(Action::Attack(card(Suit::Hearts, 10)).encode(), ActionId(2 + 18 + 4));
    }

    #[test]
    fn test_card_index_inverse() {
        for n in 0..NUM_CARDS as u8 {
            assert_eq!(Card::from_index(n).unwrap().index(), n);
        }
        for c in Card::all() {
            assert_eq!(Card::from_index(c.index()), Some(c));
        }
        assert_eq!(Card::from_index(36), None);
    }

    #[test]
    fn test_every_id_decodes_and_reencodes() {
        for id in ActionId::all() {
            let action = id.decode().unwrap();
            assert_eq!(action.encode(), id);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        for raw in [74u8, 75, 100, 255] {
            assert_eq!(Action::decode(ActionId(raw)), Err(EngineError::InvalidActionId(raw)));
        }
    }

    #[test]
    fn test_describe_labels() {
        assert_eq!(describe(ActionId(0)), "Take");
        assert_eq!(describe(ActionId(1)), "Stop Attack");
        assert_eq!(describe(Action::Attack(card(Suit::Clubs, 6)).encode()), "ATTACK(6♣)");
        assert_eq!(describe(Action::Defend(card(Suit::Hearts, 12)).encode()), "DEFEND(Q♥)");
        assert_eq!(describe(ActionId(200)), "Invalid Action");
    }

    #[test]
    fn test_mask_roundtrip_and_ignores_out_of_range() {
        let ids = vec![ActionId(0), ActionId(5), ActionId(73)];
        let mask = to_mask(&[ActionId(73), ActionId(0), ActionId(5), ActionId(99)]);
        assert_eq!(mask.iter().filter(|&&b| b).count(), 3);
        assert_eq!(from_mask(&mask), ids);
    }
}

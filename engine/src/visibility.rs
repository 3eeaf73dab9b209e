// ═══════════════════════════════════════════════════════════════════════
// Visibility / Information Model
//
//   PUBLIC:  table piles, graveyard, trump card, deck size, hand sizes,
//            whose move it is, round flags
//   PRIVATE: your own hand
//   HIDDEN:  deck order, the opponent's hand
//
// Agents MUST only receive PlayerView, never the raw GameState.
// ═══════════════════════════════════════════════════════════════════════

use crate::state::GameState;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Length of [`PlayerView::features`].
pub const FEATURE_LEN: usize = 1 + 5 * NUM_CARDS + 1 + 2 + 2 + 2 + 2 + 1;

/// The slice of the game a seated player is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub viewer: Seat,

    // ── Private ────────────────────────────────────────────
    pub hand: Vec<Card>,

    // ── Public ─────────────────────────────────────────────
    pub attack_table: Vec<Card>,
    pub defend_table: Vec<Card>,
    pub graveyard: Vec<Card>,
    pub trump: Card,
    pub deck_len: usize,
    /// Count only; the cards themselves are hidden.
    pub opponent_hand_len: usize,
    pub to_act: Seat,
    pub defender: Seat,
    pub defender_has_taken: bool,
    pub attacker_has_stopped: bool,
    pub is_done: bool,
}

/// Build the view for one seat.
pub fn player_view(state: &GameState, viewer: Seat) -> PlayerView {
    PlayerView {
        viewer,
        hand: state.hand(viewer).to_vec(),
        attack_table: state.attack_table().to_vec(),
        defend_table: state.defend_table().to_vec(),
        graveyard: state.graveyard().to_vec(),
        trump: state.trump(),
        deck_len: state.deck_len(),
        opponent_hand_len: state.hand(viewer.other()).len(),
        to_act: state.to_act(),
        defender: state.defender(),
        defender_has_taken: state.defender_has_taken(),
        attacker_has_stopped: state.attacker_has_stopped(),
        is_done: state.is_done(),
    }
}

impl PlayerView {
    pub fn trump_suit(&self) -> Suit {
        self.trump.suit()
    }

    pub fn is_defending(&self) -> bool {
        self.viewer == self.defender
    }

    /// The attack card the defender has to answer next, if any.
    pub fn open_attack(&self) -> Option<Card> {
        self.attack_table.get(self.defend_table.len()).copied()
    }

    /// Cards the viewer cannot locate: the deck plus the opponent's hand.
    /// The trump card is included while it is still in the deck.
    pub fn unseen_cards(&self) -> Vec<Card> {
        Card::all()
            .filter(|c| {
                !self.hand.contains(c)
                    && !self.attack_table.contains(c)
                    && !self.defend_table.contains(c)
                    && !self.graveyard.contains(c)
            })
            .collect()
    }

    /// Fixed-length numeric encoding for learning agents:
    ///
    /// `[deck_len, hand(36), trump(36), attack(36), defend(36), graveyard(36),
    ///   is_done, to_act(2), defender(2), viewer(2), defender_has_taken,
    ///   attacker_has_stopped, opponent_hand_len]`
    pub fn features(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(FEATURE_LEN);
        out.push(self.deck_len as f32);
        push_many_hot(&mut out, &self.hand);
        push_many_hot(&mut out, &[self.trump]);
        push_many_hot(&mut out, &self.attack_table);
        push_many_hot(&mut out, &self.defend_table);
        push_many_hot(&mut out, &self.graveyard);
        out.push(flag(self.is_done));
        push_one_hot(&mut out, self.to_act);
        push_one_hot(&mut out, self.defender);
        push_one_hot(&mut out, self.viewer);
        out.push(flag(self.defender_has_taken));
        out.push(flag(self.attacker_has_stopped));
        out.push(self.opponent_hand_len as f32);
        out
    }
}

fn flag(b: bool) -> f32 {
    if b { 1.0 } else { 0.0 }
}

fn push_many_hot(out: &mut Vec<f32>, cards: &[Card]) {
    let start = out.len();
    out.resize(start + NUM_CARDS, 0.0);
    for card in cards {
        out[start + card.index() as usize] = 1.0;
    }
}

fn push_one_hot(out: &mut Vec<f32>, seat: Seat) {
    out.push(flag(seat == Seat::Zero));
    out.push(flag(seat == Seat::One));
}

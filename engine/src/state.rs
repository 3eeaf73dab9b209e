// ═══════════════════════════════════════════════════════════════════════
// Game state — the full, omniscient aggregate
//
// Fields are private to the crate. Outside code reads through accessors
// and changes the state only via `engine::step`.
// ═══════════════════════════════════════════════════════════════════════

use crate::cards::Deck;
use crate::error::EngineError;
use crate::types::*;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) hands: [Vec<Card>; 2],
    /// `defend_table[i]` answers `attack_table[i]`.
    pub(crate) attack_table: Vec<Card>,
    pub(crate) defend_table: Vec<Card>,
    pub(crate) graveyard: Vec<Card>,
    /// Revealed at setup; its suit is trump for the whole game.
    pub(crate) trump: Card,
    pub(crate) to_act: Seat,
    pub(crate) defender: Seat,
    pub(crate) defender_has_taken: bool,
    pub(crate) attacker_has_stopped: bool,
    pub(crate) is_done: bool,
    /// Completed rounds (defended or taken).
    pub(crate) rounds: u32,
}

/// A hand-arranged position. Turned into a [`GameState`] by
/// [`GameState::from_layout`], which checks that the zones partition the
/// 36-card pack.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Front is dealt first.
    pub deck: Vec<Card>,
    pub hands: [Vec<Card>; 2],
    pub attack_table: Vec<Card>,
    pub defend_table: Vec<Card>,
    pub graveyard: Vec<Card>,
    /// Defaults to the bottom of the deck when `None`. Required when the deck is empty.
    pub trump: Option<Card>,
    pub attacker: Option<Seat>,
    /// Defaults to the attacker when `None`.
    pub to_act: Option<Seat>,
    pub defender_has_taken: bool,
    pub attacker_has_stopped: bool,
}

impl GameState {
    /// Build a state from an explicit layout.
    pub fn from_layout(layout: Layout) -> Result<GameState, EngineError> {
        let mut seen: HashSet<Card> = HashSet::with_capacity(NUM_CARDS);
        let zones = layout.deck.iter()
            .chain(layout.hands[0].iter())
            .chain(layout.hands[1].iter())
            .chain(layout.attack_table.iter())
            .chain(layout.defend_table.iter())
            .chain(layout.graveyard.iter());
        for &card in zones {
            if !seen.insert(card) {
                return Err(EngineError::InvalidLayout(format!("{} appears twice", card)));
            }
        }
        if seen.len() != NUM_CARDS {
            return Err(EngineError::InvalidLayout(format!(
                "{} cards placed, expected {}", seen.len(), NUM_CARDS
            )));
        }
        if layout.defend_table.len() > layout.attack_table.len()
            || layout.attack_table.len() > MAX_ATTACK
        {
            return Err(EngineError::InvalidLayout(format!(
                "table piles out of bounds: attack={} defend={}",
                layout.attack_table.len(), layout.defend_table.len()
            )));
        }
        let trump = match layout.trump.or_else(|| layout.deck.last().copied()) {
            Some(t) => t,
            None => return Err(EngineError::InvalidLayout("no trump card".to_string())),
        };
        if let Some(&bottom) = layout.deck.last() {
            if bottom != trump {
                return Err(EngineError::InvalidLayout(format!(
                    "trump {} must be the bottom card of the deck, found {}", trump, bottom
                )));
            }
        }

        let attacker = layout.attacker.unwrap_or(Seat::Zero);
        let mut state = GameState {
            deck: Deck::from_cards(layout.deck),
            hands: layout.hands,
            attack_table: layout.attack_table,
            defend_table: layout.defend_table,
            graveyard: layout.graveyard,
            trump,
            to_act: layout.to_act.unwrap_or(attacker),
            defender: attacker.other(),
            defender_has_taken: layout.defender_has_taken,
            attacker_has_stopped: layout.attacker_has_stopped,
            is_done: false,
            rounds: 0,
        };
        state.is_done = state.check_done();
        Ok(state)
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    pub fn attack_table(&self) -> &[Card] {
        &self.attack_table
    }

    pub fn defend_table(&self) -> &[Card] {
        &self.defend_table
    }

    pub fn graveyard(&self) -> &[Card] {
        &self.graveyard
    }

    pub fn trump(&self) -> Card {
        self.trump
    }

    pub fn trump_suit(&self) -> Suit {
        self.trump.suit()
    }

    /// Whose move it is.
    pub fn to_act(&self) -> Seat {
        self.to_act
    }

    pub fn defender(&self) -> Seat {
        self.defender
    }

    pub fn attacker(&self) -> Seat {
        self.defender.other()
    }

    pub fn defender_has_taken(&self) -> bool {
        self.defender_has_taken
    }

    pub fn attacker_has_stopped(&self) -> bool {
        self.attacker_has_stopped
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Attack cards not yet covered.
    pub fn undefended(&self) -> usize {
        self.attack_table.len().saturating_sub(self.defend_table.len())
    }

    /// Every card in every zone, in zone order: deck, hands, table, graveyard.
    pub fn all_cards(&self) -> Vec<Card> {
        self.deck.iter()
            .chain(self.hands[0].iter())
            .chain(self.hands[1].iter())
            .chain(self.attack_table.iter())
            .chain(self.defend_table.iter())
            .chain(self.graveyard.iter())
            .copied()
            .collect()
    }

    // ── Crate-internal mutation helpers ────────────────────────────────

    pub(crate) fn check_done(&self) -> bool {
        self.deck.is_empty() && self.hands.iter().any(|h| h.is_empty())
    }

    /// Returns false when the card is not in the hand.
    pub(crate) fn remove_from_hand(&mut self, seat: Seat, card: Card) -> bool {
        let hand = &mut self.hands[seat.index()];
        match hand.iter().position(|&c| c == card) {
            Some(pos) => {
                hand.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Top a hand back up to six cards (fewer if the deck runs short).
    pub(crate) fn refill(&mut self, seat: Seat) {
        let missing = HAND_SIZE.saturating_sub(self.hands[seat.index()].len());
        let dealt = self.deck.deal(missing);
        self.hands[seat.index()].extend(dealt);
    }

    /// Empty both table piles, attack pile first.
    pub(crate) fn sweep_table(&mut self) -> Vec<Card> {
        let mut cards = std::mem::take(&mut self.attack_table);
        cards.append(&mut self.defend_table);
        cards
    }

    pub(crate) fn clear_round_flags(&mut self) {
        self.defender_has_taken = false;
        self.attacker_has_stopped = false;
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Heuristic Agent — spends cheap cards first and hoards trumps.
// Significantly stronger than RandomAgent.
//
// Strategy:
//   - Lead with the weakest card, plain suits before trumps.
//   - Throw in only plain cards below Queen while the deck still has cards;
//     once it is empty, dump anything that matches.
//   - Defend with the cheapest card that beats, plain before trump.
//   - Take rather than burn a high trump while the deck is still large.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use durak_engine::action::{Action, ActionId};
use durak_engine::types::*;
use durak_engine::visibility::PlayerView;

/// Trumps at or above this rank are worth keeping.
const HIGH_TRUMP: u8 = 12;
/// Plain cards at or above this rank are not thrown in early.
const HIGH_THROW_IN: u8 = 12;
/// Deck size above which taking beats spending a high trump.
const LARGE_DECK: usize = 12;

#[derive(Debug, Default)]
pub struct HeuristicAgent;

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent
    }

    /// Cost of giving up a card: any trump outranks every plain card.
    fn cost(card: Card, trump: Suit) -> (bool, u8) {
        (card.is_trump(trump), card.rank())
    }

    fn cheapest(cards: impl Iterator<Item = Card>, trump: Suit) -> Option<Card> {
        cards.min_by_key(|&c| (Self::cost(c, trump), c.suit()))
    }

    fn defend(view: &PlayerView, legal: &[ActionId]) -> ActionId {
        let trump = view.trump_suit();
        let Some(card) = Self::cheapest(playable(legal).into_iter(), trump) else {
            return ActionId::TAKE;
        };
        if card.is_trump(trump) && card.rank() >= HIGH_TRUMP && view.deck_len > LARGE_DECK {
            return ActionId::TAKE;
        }
        Action::Defend(card).encode()
    }

    fn attack(view: &PlayerView, legal: &[ActionId]) -> ActionId {
        let trump = view.trump_suit();
        let attacks = playable(legal);

        if view.attack_table.is_empty() {
            // Leading: must play something.
            return Self::cheapest(attacks.into_iter(), trump)
                .map(|c| Action::Attack(c).encode())
                .unwrap_or(ActionId::STOP_ATTACK);
        }

        let throw_in = if view.deck_len == 0 {
            Self::cheapest(attacks.into_iter(), trump)
        } else {
            Self::cheapest(
                attacks.into_iter().filter(|c| !c.is_trump(trump) && c.rank() < HIGH_THROW_IN),
                trump,
            )
        };
        throw_in.map_or(ActionId::STOP_ATTACK, |c| Action::Attack(c).encode())
    }
}

/// Cards named by the legal ids. The mover only ever holds one kind of
/// card action, so this is either all attacks or all defences.
fn playable(legal: &[ActionId]) -> Vec<Card> {
    legal.iter()
        .filter_map(|id| id.decode().ok())
        .filter_map(Action::card)
        .collect()
}

impl Agent for HeuristicAgent {
    fn name(&self) -> &str { "Heuristic" }

    fn choose_action(&mut self, view: &PlayerView, legal: &[ActionId]) -> ActionId {
        let choice = if view.is_defending() {
            Self::defend(view, legal)
        } else {
            Self::attack(view, legal)
        };
        if legal.contains(&choice) {
            choice
        } else {
            legal.first().copied().unwrap_or(choice)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank).unwrap()
    }

    fn view(hand: Vec<Card>, attack: Vec<Card>, defend: Vec<Card>, defending: bool, deck_len: usize) -> PlayerView {
        PlayerView {
            viewer: Seat::Zero,
            hand,
            attack_table: attack,
            defend_table: defend,
            graveyard: Vec::new(),
            trump: card(Suit::Hearts, 6),
            deck_len,
            opponent_hand_len: 6,
            to_act: Seat::Zero,
            defender: if defending { Seat::Zero } else { Seat::One },
            defender_has_taken: false,
            attacker_has_stopped: false,
            is_done: false,
        }
    }

    fn attacks(cards: &[Card]) -> Vec<ActionId> {
        cards.iter().map(|&c| Action::Attack(c).encode()).collect()
    }

    #[test]
    fn test_leads_weakest_plain_card() {
        let hand = vec![card(Suit::Hearts, 6), card(Suit::Spades, 9), card(Suit::Clubs, 7)];
        let v = view(hand.clone(), vec![], vec![], false, 20);
        let choice = HeuristicAgent::new().choose_action(&v, &attacks(&hand));
        assert_eq!(choice, Action::Attack(card(Suit::Clubs, 7)).encode());
    }

    #[test]
    fn test_leads_trump_only_when_forced() {
        let hand = vec![card(Suit::Hearts, 10), card(Suit::Hearts, 8)];
        let v = view(hand.clone(), vec![], vec![], false, 20);
        let choice = HeuristicAgent::new().choose_action(&v, &attacks(&hand));
        assert_eq!(choice, Action::Attack(card(Suit::Hearts, 8)).encode());
    }

    #[test]
    fn test_holds_back_high_throw_in_while_deck_remains() {
        let hand = vec![card(Suit::Spades, 13)];
        let v = view(hand.clone(), vec![card(Suit::Clubs, 13)], vec![card(Suit::Clubs, 14)], false, 5);
        let mut legal = vec![ActionId::STOP_ATTACK];
        legal.extend(attacks(&hand));
        assert_eq!(HeuristicAgent::new().choose_action(&v, &legal), ActionId::STOP_ATTACK);

        let v = view(hand, vec![card(Suit::Clubs, 13)], vec![card(Suit::Clubs, 14)], false, 0);
        assert_eq!(
            HeuristicAgent::new().choose_action(&v, &legal),
            Action::Attack(card(Suit::Spades, 13)).encode()
        );
    }

    #[test]
    fn test_defends_plain_before_trump() {
        let hand = vec![card(Suit::Hearts, 7), card(Suit::Clubs, 10), card(Suit::Clubs, 9)];
        let v = view(hand, vec![card(Suit::Clubs, 8)], vec![], true, 10);
        let legal = vec![
            ActionId::TAKE,
            Action::Defend(card(Suit::Hearts, 7)).encode(),
            Action::Defend(card(Suit::Clubs, 10)).encode(),
            Action::Defend(card(Suit::Clubs, 9)).encode(),
        ];
        assert_eq!(
            HeuristicAgent::new().choose_action(&v, &legal),
            Action::Defend(card(Suit::Clubs, 9)).encode()
        );
    }

    #[test]
    fn test_takes_instead_of_spending_high_trump_early() {
        let hand = vec![card(Suit::Hearts, 13)];
        let legal = vec![ActionId::TAKE, Action::Defend(card(Suit::Hearts, 13)).encode()];

        let v = view(hand.clone(), vec![card(Suit::Clubs, 8)], vec![], true, 20);
        assert_eq!(HeuristicAgent::new().choose_action(&v, &legal), ActionId::TAKE);

        let v = view(hand, vec![card(Suit::Clubs, 8)], vec![], true, 4);
        assert_eq!(HeuristicAgent::new().choose_action(&v, &legal), legal[1]);
    }

    #[test]
    fn test_takes_when_nothing_beats() {
        let v = view(vec![card(Suit::Clubs, 6)], vec![card(Suit::Clubs, 8)], vec![], true, 10);
        assert_eq!(HeuristicAgent::new().choose_action(&v, &[ActionId::TAKE]), ActionId::TAKE);
    }
}

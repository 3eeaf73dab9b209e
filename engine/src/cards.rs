// ═══════════════════════════════════════════════════════════════════════
// Deck — the 36-card pack, shuffled once and drawn from the front
// ═══════════════════════════════════════════════════════════════════════

use crate::types::*;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ordered draw pile. Front is dealt first; the back card is the trump
/// card, which is revealed at setup and therefore dealt last.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// All 36 cards in index order.
    pub fn ordered() -> Self {
        Deck { cards: Card::all().collect() }
    }

    /// All 36 cards, uniformly permuted.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Card::all().collect();
        cards.shuffle(rng);
        Deck { cards: cards.into() }
    }

    /// A deck holding exactly these cards, front first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards: cards.into() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card that will be dealt last.
    pub fn bottom(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Remove up to `n` cards from the front. Fewer when the deck runs short.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_ordered_deck_has_every_card_once() {
        let deck = Deck::ordered();
        assert_eq!(deck.len(), NUM_CARDS);
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), NUM_CARDS);
    }

    #[test]
    fn test_shuffle_is_permutation_and_seeded() {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(7));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(7));
        let c = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut sorted: Vec<Card> = a.iter().copied().collect();
        sorted.sort_by_key(|c| c.index());
        let ordered: Vec<Card> = Deck::ordered().iter().copied().collect();
        assert_eq!(sorted, ordered);
    }

    #[test]
    fn test_deal_takes_from_front_and_stops_short() {
        let mut deck = Deck::ordered();
        let first = deck.deal(2);
        assert_eq!(first, vec![Card::new(Suit::Clubs, 6).unwrap(), Card::new(Suit::Clubs, 7).unwrap()]);
        assert_eq!(deck.len(), 34);

        let rest = deck.deal(100);
        assert_eq!(rest.len(), 34);
        assert!(deck.is_empty());
        assert!(deck.deal(3).is_empty());
    }

    #[test]
    fn test_bottom_is_last_dealt() {
        let mut deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3));
        let bottom = deck.bottom().unwrap();
        let all = deck.deal(NUM_CARDS);
        assert_eq!(*all.last().unwrap(), bottom);
        assert_eq!(deck.bottom(), None);
    }
}

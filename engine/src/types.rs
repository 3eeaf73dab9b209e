// ═══════════════════════════════════════════════════════════════════════
// Core types — suits, cards, seats
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ── Constants ──────────────────────────────────────────────────────────

/// Lowest rank in the 36-card pack (the six).
pub const LOWEST_RANK: u8 = 6;
/// Highest rank in the pack (the ace).
pub const HIGHEST_RANK: u8 = 14;
/// Ranks per suit (6..=14).
pub const RANKS_PER_SUIT: u8 = HIGHEST_RANK - LOWEST_RANK + 1;
/// Distinct cards in the pack.
pub const NUM_CARDS: usize = 4 * RANKS_PER_SUIT as usize;
/// Hands are topped back up to this many cards after every round.
pub const HAND_SIZE: usize = 6;
/// Maximum number of attack cards in a single round.
pub const MAX_ATTACK: usize = 6;

// ── Enums ──────────────────────────────────────────────────────────────

/// Suit order is only used for deterministic sorting and the card index,
/// it carries no meaning in play (apart from the trump suit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Suit> {
        Suit::ALL.get(i as usize).copied()
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suit::Clubs => write!(f, "Clubs"),
            Suit::Diamonds => write!(f, "Diamonds"),
            Suit::Hearts => write!(f, "Hearts"),
            Suit::Spades => write!(f, "Spades"),
        }
    }
}

/// One of the two players at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    Zero,
    One,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::Zero, Seat::One];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Seat> {
        Seat::ALL.get(i).copied()
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::Zero => Seat::One,
            Seat::One => Seat::Zero,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

// ── Card ───────────────────────────────────────────────────────────────

/// A single playing card. Ranks run 6..=14 (11=J, 12=Q, 13=K, 14=A).
///
/// Fields are private so every `Card` in existence has a valid rank; that
/// includes deserialized ones.
/// Ordering is by rank first, suit second; equality is suit+rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    suit: Suit,
    rank: u8,
}

/// Wire shape of a card before its rank is checked.
#[derive(Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = String;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.suit, raw.rank)
            .ok_or_else(|| format!("rank {} outside {}..={}", raw.rank, LOWEST_RANK, HIGHEST_RANK))
    }
}

impl Card {
    /// Six of clubs, index 0.
    pub const FIRST: Card = Card { suit: Suit::Clubs, rank: LOWEST_RANK };

    /// Build a card, rejecting ranks outside 6..=14.
    pub fn new(suit: Suit, rank: u8) -> Option<Card> {
        (LOWEST_RANK..=HIGHEST_RANK)
            .contains(&rank)
            .then_some(Card { suit, rank })
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Dense index in `[0, 36)`: `suit * 9 + (rank - 6)`.
    pub fn index(self) -> u8 {
        self.suit.index() * RANKS_PER_SUIT + (self.rank - LOWEST_RANK)
    }

    /// Inverse of [`Card::index`]. `None` for indices `>= 36`.
    pub fn from_index(n: u8) -> Option<Card> {
        let suit = Suit::from_index(n / RANKS_PER_SUIT)?;
        Some(Card { suit, rank: n % RANKS_PER_SUIT + LOWEST_RANK })
    }

    /// The full pack in index order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..NUM_CARDS as u8).filter_map(Card::from_index)
    }

    pub fn is_trump(self, trump: Suit) -> bool {
        self.suit == trump
    }

    /// Can `self` cover `attack`? Same suit and higher rank, or a trump
    /// laid on a non-trump.
    pub fn beats(self, attack: Card, trump: Suit) -> bool {
        if self.suit == attack.suit {
            self.rank > attack.rank
        } else {
            self.suit == trump
        }
    }

    fn rank_label(self) -> String {
        match self.rank {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            r => r.to_string(),
        }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

/// Format a slice of cards as `[6♣ 10♦ A♠]`.
pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
    format!("[{}]", inner.join(" "))
}

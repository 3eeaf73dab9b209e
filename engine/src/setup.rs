// ═══════════════════════════════════════════════════════════════════════
// Game setup — shuffles, deals and picks the opening attacker
// ═══════════════════════════════════════════════════════════════════════

use crate::cards::Deck;
use crate::state::GameState;
use crate::types::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Who leads the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpeningRule {
    /// Holder of the lowest trump attacks; a seeded coin flip when nobody holds one.
    #[default]
    LowestTrump,
    /// Player 0 always attacks first.
    FirstSeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Controls the shuffle and any tie-break, for reproducibility.
    pub seed: u64,
    pub opening: OpeningRule,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        GameConfig { seed, ..GameConfig::default() }
    }
}

/// Create a fresh game: shuffled pack, six cards each, trump revealed.
pub fn new_game(config: &GameConfig) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut deck = Deck::shuffled(&mut rng);

    let hand0 = deck.deal(HAND_SIZE);
    let hand1 = deck.deal(HAND_SIZE);
    // 36 - 12 cards remain, so the bottom card always exists.
    let trump = deck.bottom().unwrap_or(Card::FIRST);

    let hands = [hand0, hand1];
    let attacker = match config.opening {
        OpeningRule::FirstSeat => Seat::Zero,
        OpeningRule::LowestTrump => lowest_trump_holder(&hands, trump.suit())
            .unwrap_or_else(|| if rng.gen_bool(0.5) { Seat::Zero } else { Seat::One }),
    };

    debug!(seed = config.seed, %trump, %attacker, "new game");

    GameState {
        deck,
        hands,
        attack_table: Vec::new(),
        defend_table: Vec::new(),
        graveyard: Vec::new(),
        trump,
        to_act: attacker,
        defender: attacker.other(),
        defender_has_taken: false,
        attacker_has_stopped: false,
        is_done: false,
        rounds: 0,
    }
}

/// Seat holding the lowest-ranked trump, if anyone holds one.
pub fn lowest_trump_holder(hands: &[Vec<Card>; 2], trump: Suit) -> Option<Seat> {
    Seat::ALL.iter()
        .filter_map(|&seat| {
            hands[seat.index()].iter()
                .filter(|c| c.suit() == trump)
                .map(|c| c.rank())
                .min()
                .map(|rank| (rank, seat))
        })
        .min()
        .map(|(_, seat)| seat)
}

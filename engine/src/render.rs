// ═══════════════════════════════════════════════════════════════════════
// Text rendering — omniscient state dump and the seated player's view
// ═══════════════════════════════════════════════════════════════════════

use crate::state::GameState;
use crate::types::*;
use crate::visibility::PlayerView;
use std::fmt;

/// Everything, including both hands and the deck order. Debug use only.
pub fn render(state: &GameState) -> String {
    Table(state).to_string()
}

/// What the viewer sees at the table.
pub fn render_view(view: &PlayerView) -> String {
    Seated(view).to_string()
}

struct Table<'a>(&'a GameState);

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        let deck: Vec<Card> = state.all_cards().into_iter().take(state.deck_len()).collect();
        writeln!(f, "Deck ({}): {}", state.deck_len(), format_cards(&deck))?;
        for seat in Seat::ALL {
            let role = if seat == state.defender() { "defending" } else { "attacking" };
            writeln!(f, "{} hand: {}  <{}>", seat, format_cards(state.hand(seat)), role)?;
        }
        writeln!(f, "Attack table: {}", format_cards(state.attack_table()))?;
        writeln!(f, "Defend table: {}", format_cards(state.defend_table()))?;
        writeln!(f, "Graveyard: {}", format_cards(state.graveyard()))?;
        writeln!(f, "Trump: {} ({})", state.trump(), state.trump_suit())?;
        writeln!(f, "Defender has taken: {}", state.defender_has_taken())?;
        writeln!(f, "Attacker has stopped: {}", state.attacker_has_stopped())?;
        write!(f, "To act: {}", state.to_act())?;
        if state.is_done() {
            write!(f, " (game over)")?;
        }
        Ok(())
    }
}

struct Seated<'a>(&'a PlayerView);

impl fmt::Display for Seated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let role = if view.is_defending() { "defending" } else { "attacking" };
        writeln!(f, "You are {} ({})", view.viewer, role)?;
        writeln!(f, "Hand: {}", format_cards(&view.hand))?;
        writeln!(f, "Attack table: {}", format_cards(&view.attack_table))?;
        writeln!(f, "Defend table: {}", format_cards(&view.defend_table))?;
        if let (true, Some(open)) = (view.is_defending(), view.open_attack()) {
            writeln!(f, "To cover: {}", open)?;
        }
        writeln!(f, "Trump: {}", view.trump)?;
        writeln!(f, "Cards in deck: {}", view.deck_len)?;
        writeln!(f, "Cards in opponent's hand: {}", view.opponent_hand_len)?;
        writeln!(f, "Defender has taken: {}", view.defender_has_taken)?;
        write!(f, "Attacker has stopped: {}", view.attacker_has_stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionId;
    use crate::engine::{legal_actions, step};
    use crate::setup::{new_game, GameConfig};
    use crate::visibility::player_view;

    #[test]
    fn test_render_mentions_every_zone() {
        let state = new_game(&GameConfig::with_seed(5));
        let text = render(&state);
        assert!(text.contains("Deck (24)"));
        assert!(text.contains("Player 0 hand"));
        assert!(text.contains("Player 1 hand"));
        assert!(text.contains(&format!("Trump: {}", state.trump())));
    }

    #[test]
    fn test_render_view_hides_opponent_cards() {
        let state = new_game(&GameConfig::with_seed(5));
        let view = player_view(&state, Seat::Zero);
        let text = render_view(&view);
        assert!(text.contains("Cards in opponent's hand: 6"));
        for card in state.hand(Seat::One) {
            assert!(!text.contains(&card.to_string()), "{} leaked", card);
        }
    }

    #[test]
    fn test_render_view_names_card_to_cover() {
        let mut state = new_game(&GameConfig::with_seed(5));
        let lead = legal_actions(&state)[0];
        step(&mut state, lead).unwrap();
        step(&mut state, ActionId::STOP_ATTACK).unwrap();
        let led = state.attack_table()[0];

        let defender = render_view(&player_view(&state, state.defender()));
        assert!(defender.contains(&format!("To cover: {}", led)));
        let attacker = render_view(&player_view(&state, state.attacker()));
        assert!(!attacker.contains("To cover"));
    }
}

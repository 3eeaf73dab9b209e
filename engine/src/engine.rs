// ═══════════════════════════════════════════════════════════════════════
// Rule Engine — legal actions and state transitions
//
// Architecture:
//   The engine is a pure state machine. It never does I/O or calls agents.
//   The driver asks `legal_actions()` for whoever is to move, obtains a
//   choice, and feeds it back through `step()`. `step()` validates the id
//   against the legal set before touching anything, so a rejected action
//   leaves the state exactly as it was.
//
// Round flow:
//   1. Attacker leads any card, then may throw in cards of ranks already
//      on the table, or stop.
//   2. Defender covers open attack cards one at a time, or takes.
//   3. The round resolves either to the graveyard (roles swap) or into
//      the defender's hand (attacker keeps attacking). Hands are refilled
//      from the deck, attacker first.
// ═══════════════════════════════════════════════════════════════════════

use crate::action::{self, Action, ActionId, NUM_ACTIONS};
use crate::error::EngineError;
use crate::state::GameState;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, error, warn};

/// What an applied action caused, for drivers and renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The round goes on.
    Continue,
    /// Every attack card was covered: table to graveyard, roles swapped.
    Defended,
    /// The defender picked up the table; the attacker leads again.
    Taken,
}

// ── Legal actions ──────────────────────────────────────────────────────

/// Legal action ids for the player to move. Empty once the game is over.
pub fn legal_actions(state: &GameState) -> Vec<ActionId> {
    if state.is_done {
        return Vec::new();
    }
    if state.to_act == state.defender {
        defender_actions(state)
    } else {
        attacker_actions(state)
    }
}

/// Dense legality mask over the whole action space.
pub fn legal_mask(state: &GameState) -> [bool; NUM_ACTIONS] {
    action::to_mask(&legal_actions(state))
}

fn defender_actions(state: &GameState) -> Vec<ActionId> {
    let covered = state.defend_table.len();
    let Some(&attack) = state.attack_table.get(covered) else {
        error!(
            attack = state.attack_table.len(),
            defend = covered,
            "defender to act with nothing left to cover"
        );
        return Vec::new();
    };

    let trump = state.trump.suit();
    let mut actions = vec![ActionId::TAKE];
    actions.extend(
        state.hand(state.defender).iter()
            .filter(|card| card.beats(attack, trump))
            .map(|&card| Action::Defend(card).encode()),
    );
    actions
}

fn attacker_actions(state: &GameState) -> Vec<ActionId> {
    let hand = state.hand(state.to_act);

    if state.attack_table.is_empty() {
        return hand.iter().map(|&card| Action::Attack(card).encode()).collect();
    }

    let mut actions = vec![ActionId::STOP_ATTACK];
    if !attacker_can_add(state) {
        return actions;
    }

    let ranks = ranks_in_play(state);
    actions.extend(
        hand.iter()
            .filter(|card| ranks.contains(&card.rank()))
            .map(|&card| Action::Attack(card).encode()),
    );
    actions
}

/// Room for another attack card: under the six-card cap, and the defender
/// still holds more cards than there are open attacks.
pub fn attacker_can_add(state: &GameState) -> bool {
    state.attack_table.len() < MAX_ATTACK
        && state.undefended() < state.hand(state.defender).len()
}

/// Ranks on either table pile; throw-ins must match one of these.
pub fn ranks_in_play(state: &GameState) -> HashSet<u8> {
    state.attack_table.iter()
        .chain(state.defend_table.iter())
        .map(|c| c.rank())
        .collect()
}

// ── Applying actions ───────────────────────────────────────────────────

/// Apply an action id for the player to move.
///
/// Out-of-range ids fail with [`EngineError::InvalidActionId`]; ids that
/// decode but are not currently legal fail with
/// [`EngineError::IllegalAction`]. Either way nothing changes.
pub fn step(state: &mut GameState, id: ActionId) -> Result<StepOutcome, EngineError> {
    if state.is_done {
        return Err(EngineError::GameOver);
    }
    let action = Action::decode(id)?;
    if !legal_actions(state).contains(&id) {
        warn!(%action, player = %state.to_act, "rejected illegal action");
        return Err(EngineError::IllegalAction { action, player: state.to_act });
    }

    debug!(%action, player = %state.to_act, "apply");
    let outcome = match action {
        Action::Attack(card) => handle_attack(state, card)?,
        Action::Defend(card) => handle_defend(state, card)?,
        Action::Take => handle_take(state),
        Action::StopAttack => handle_stop_attack(state),
    };

    state.is_done = state.check_done();
    if state.is_done {
        debug!(rounds = state.rounds, "game over");
    }
    Ok(outcome)
}

fn handle_attack(state: &mut GameState, card: Card) -> Result<StepOutcome, EngineError> {
    let seat = state.to_act;
    if !state.remove_from_hand(seat, card) {
        return Err(EngineError::InvariantViolation(format!("{} not in {}'s hand", card, seat)));
    }
    state.attack_table.push(card);
    Ok(StepOutcome::Continue)
}

fn handle_defend(state: &mut GameState, card: Card) -> Result<StepOutcome, EngineError> {
    let defender = state.defender;
    if !state.remove_from_hand(defender, card) {
        return Err(EngineError::InvariantViolation(format!("{} not in {}'s hand", card, defender)));
    }
    state.defend_table.push(card);

    if state.defend_table.len() < state.attack_table.len() {
        // More open attacks to answer.
        return Ok(StepOutcome::Continue);
    }

    if state.attack_table.len() >= MAX_ATTACK || state.hand(defender).is_empty() {
        finish_defended(state);
        return Ok(StepOutcome::Defended);
    }

    // Covered so far; attacker may throw in more.
    state.to_act = state.attacker();
    Ok(StepOutcome::Continue)
}

fn handle_take(state: &mut GameState) -> StepOutcome {
    state.defender_has_taken = true;
    if attacker_can_add(state) {
        state.to_act = state.attacker();
        StepOutcome::Continue
    } else {
        finish_taken(state);
        StepOutcome::Taken
    }
}

fn handle_stop_attack(state: &mut GameState) -> StepOutcome {
    state.attacker_has_stopped = true;
    if state.defender_has_taken {
        finish_taken(state);
        StepOutcome::Taken
    } else if state.attack_table.len() == state.defend_table.len() {
        finish_defended(state);
        StepOutcome::Defended
    } else {
        state.to_act = state.defender;
        StepOutcome::Continue
    }
}

/// Successful defense: table to graveyard, refill attacker then defender,
/// swap roles.
fn finish_defended(state: &mut GameState) {
    let cards = state.sweep_table();
    debug!(cards = cards.len(), defender = %state.defender, "round defended");
    state.graveyard.extend(cards);
    state.clear_round_flags();

    let attacker = state.attacker();
    state.refill(attacker);
    state.refill(state.defender);

    state.defender = attacker;
    state.to_act = attacker.other();
    state.rounds += 1;
}

/// Defender collects the table; the same attacker leads the next round.
fn finish_taken(state: &mut GameState) {
    let cards = state.sweep_table();
    debug!(cards = cards.len(), defender = %state.defender, "round taken");
    let defender = state.defender;
    state.hands[defender.index()].extend(cards);
    state.clear_round_flags();

    let attacker = state.attacker();
    state.refill(attacker);
    state.to_act = attacker;
    state.rounds += 1;
}

// ── Queries ────────────────────────────────────────────────────────────

/// The round is winding down: defender took, attacker stopped, or six
/// cards are matched. Diagnostic only; no transition hangs off it.
pub fn is_round_over(state: &GameState) -> bool {
    state.defender_has_taken
        || state.attacker_has_stopped
        || (state.attack_table.len() == MAX_ATTACK && state.defend_table.len() == MAX_ATTACK)
}

/// Deck exhausted and at least one hand empty.
pub fn is_terminal(state: &GameState) -> bool {
    state.is_done
}

/// +1 for an empty hand at the end, -1 for the player left holding cards,
/// 0 while the game is running.
pub fn reward(state: &GameState, seat: Seat) -> i8 {
    if !state.is_done {
        return 0;
    }
    if state.hand(seat).is_empty() { 1 } else { -1 }
}

/// The durak: the player still holding cards at the end.
pub fn loser(state: &GameState) -> Option<Seat> {
    if !state.is_done {
        return None;
    }
    Seat::ALL.into_iter().find(|&s| !state.hand(s).is_empty())
}

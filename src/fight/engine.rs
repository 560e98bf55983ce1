//! Turn engine: orders the two combatants once, then alternates turns until
//! someone is defeated or runs out of moves.
//!
//! The loop always terminates: every turn consumes one queued move, and both
//! queues are finite.

use serde::Serialize;

use crate::fight::catalog::SlotId;
use crate::fight::combatant::Combatant;
use crate::fight::input::FightInput;
use crate::fight::narration::{exhaustion_line, narrate_move, victory_line};

/// Append-only sequence of narrated sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Story {
    lines: Vec<String>,
}

impl Story {
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FightOutcome {
    Victory { winner: SlotId, remaining_energy: i32 },
    Exhausted { combatant: SlotId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FightReport {
    pub story: Story,
    pub outcome: FightOutcome,
    pub turns: usize,
}

/// Sort key: smaller `(total, moves, hits)` input goes first; stable on ties.
pub fn order_combatants(first: Combatant, second: Combatant) -> [Combatant; 2] {
    if second.token_lengths() < first.token_lengths() {
        [second, first]
    } else {
        [first, second]
    }
}

#[derive(Debug, Clone)]
pub struct FightSimulator {
    active: Combatant,
    opponent: Combatant,
    story: Story,
    turns: usize,
}

impl FightSimulator {
    pub fn new(input: &FightInput) -> Self {
        let [active, opponent] = order_combatants(
            Combatant::from_play(SlotId::Player1, input.play(SlotId::Player1)),
            Combatant::from_play(SlotId::Player2, input.play(SlotId::Player2)),
        );
        Self::from_ordered(active, opponent)
    }

    /// Start from combatants that are already in turn order.
    pub fn from_ordered(active: Combatant, opponent: Combatant) -> Self {
        tracing::debug!(
            first = active.short_name(),
            second = opponent.short_name(),
            "fight ordered"
        );
        Self {
            active,
            opponent,
            story: Story::default(),
            turns: 0,
        }
    }

    /// Slot narrating the next turn.
    pub fn active_slot(&self) -> SlotId {
        self.active.slot
    }

    /// Play one turn. Returns the outcome once the fight has ended.
    pub fn play_turn(&mut self) -> Option<FightOutcome> {
        let Some(resolved) = self.active.next_move() else {
            self.story.push(exhaustion_line(&self.active));
            return Some(FightOutcome::Exhausted {
                combatant: self.active.slot,
            });
        };
        self.turns += 1;

        self.story
            .push(narrate_move(&self.active, &self.opponent, &resolved));
        self.opponent.apply_damage(resolved.power());

        tracing::debug!(
            turn = self.turns,
            actor = self.active.short_name(),
            combination = resolved.definition.combination,
            power = resolved.power(),
            target_energy = self.opponent.energy(),
            "turn played"
        );

        if self.opponent.is_defeated() {
            self.story.push(victory_line(&self.active));
            return Some(FightOutcome::Victory {
                winner: self.active.slot,
                remaining_energy: self.active.energy(),
            });
        }

        std::mem::swap(&mut self.active, &mut self.opponent);
        None
    }

    pub fn run(mut self) -> FightReport {
        let outcome = loop {
            if let Some(outcome) = self.play_turn() {
                break outcome;
            }
        };
        FightReport {
            story: self.story,
            outcome,
            turns: self.turns,
        }
    }
}

pub fn simulate_fight(input: &FightInput) -> FightReport {
    FightSimulator::new(input).run()
}

pub fn narrate_story(input: &FightInput) -> Story {
    simulate_fight(input).story
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combatant(slot: SlotId, moves: &[&str], hits: &[&str]) -> Combatant {
        Combatant::for_slot(
            slot,
            moves.iter().map(|s| s.to_string()).collect(),
            hits.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn shorter_input_moves_first() {
        let [first, _] = order_combatants(
            combatant(SlotId::Player1, &["DSD"], &["P"]),
            combatant(SlotId::Player2, &["D"], &["K"]),
        );
        assert_eq!(first.slot, SlotId::Player2);
    }

    #[test]
    fn tie_keeps_player_one_first() {
        let [first, _] = order_combatants(
            combatant(SlotId::Player1, &["D"], &["K"]),
            combatant(SlotId::Player2, &["A"], &["P"]),
        );
        assert_eq!(first.slot, SlotId::Player1);
    }

    #[test]
    fn equal_total_breaks_on_move_chars() {
        let [first, _] = order_combatants(
            combatant(SlotId::Player1, &["DD", "S"], &["", ""]),
            combatant(SlotId::Player2, &["D", "S"], &["K", ""]),
        );
        assert_eq!(first.slot, SlotId::Player2);
    }

    #[test]
    fn exhaustion_abandons_turn_without_damage() {
        let mut sim = FightSimulator::from_ordered(
            combatant(SlotId::Player1, &["D"], &["K"]),
            combatant(SlotId::Player2, &["SA", "W"], &["K", ""]),
        );
        assert_eq!(sim.play_turn(), None);
        assert_eq!(sim.active_slot(), SlotId::Player2);
        assert_eq!(sim.play_turn(), None);
        assert_eq!(
            sim.play_turn(),
            Some(FightOutcome::Exhausted {
                combatant: SlotId::Player1
            })
        );
    }

    #[test]
    fn winning_turn_emits_two_lines() {
        let report = FightSimulator::from_ordered(
            combatant(SlotId::Player1, &["DSD", "DSD", "DSD"], &["P", "P", "P"]),
            combatant(SlotId::Player2, &["W", "W"], &["", ""]),
        )
        .run();
        assert_eq!(
            report.story.lines(),
            [
                "Tonyn usa un Taladoken",
                "Arnaldor sube",
                "Tonyn usa un Taladoken al pobre Arnaldor",
                "Tonyn Gana la pelea y aún le queda 6 de energía",
            ]
        );
        assert_eq!(report.turns, 3);
        assert_eq!(
            report.outcome,
            FightOutcome::Victory {
                winner: SlotId::Player1,
                remaining_energy: 6
            }
        );
    }
}

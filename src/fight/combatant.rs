use crate::fight::catalog::{Archetype, MoveDefinition, SlotId};
use crate::fight::input::PlayInput;
use crate::fight::resolver::{resolve, ResolvedMove};

/// One side of a fight: archetype data plus the queued tokens and energy.
#[derive(Debug, Clone)]
pub struct Combatant {
    pub slot: SlotId,
    archetype: &'static Archetype,
    energy: i32,
    moves: Vec<String>,
    hits: Vec<String>,
    cursor: usize,
}

/// Input-size key used to decide who moves first: `(total, moves, hits)`
/// character counts.
pub type TokenLengths = (usize, usize, usize);

impl Combatant {
    /// Build the combatant configured for `slot`.
    ///
    /// Callers pass validated input; `moves` and `hits` have equal length.
    pub fn for_slot(slot: SlotId, moves: Vec<String>, hits: Vec<String>) -> Self {
        debug_assert_eq!(moves.len(), hits.len());
        let archetype = slot.archetype();
        Self {
            slot,
            archetype,
            energy: archetype.max_energy,
            moves,
            hits,
            cursor: 0,
        }
    }

    pub fn from_play(slot: SlotId, play: &PlayInput) -> Self {
        Self::for_slot(slot, play.moves.clone(), play.hits.clone())
    }

    pub fn display_name(&self) -> &'static str {
        self.archetype.display_name
    }

    pub fn short_name(&self) -> &'static str {
        self.archetype.short_name()
    }

    pub fn slot_index(&self) -> u8 {
        self.archetype.slot_index
    }

    pub fn max_energy(&self) -> i32 {
        self.archetype.max_energy
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn is_defeated(&self) -> bool {
        self.energy <= 0
    }

    pub fn remaining_moves(&self) -> usize {
        self.moves.len().saturating_sub(self.cursor)
    }

    pub fn move_pool(&self) -> impl Iterator<Item = &'static MoveDefinition> {
        self.archetype.move_pool()
    }

    pub fn token_lengths(&self) -> TokenLengths {
        let moves: usize = self.moves.iter().map(|m| m.chars().count()).sum();
        let hits: usize = self.hits.iter().map(|h| h.chars().count()).sum();
        (moves + hits, moves, hits)
    }

    /// Resolve the next queued token pair, or `None` once the queue is spent.
    pub fn next_move(&mut self) -> Option<ResolvedMove> {
        let token = self.moves.get(self.cursor)?;
        let hit = self.hits.get(self.cursor)?;
        let resolved = resolve(token, hit, self.archetype.move_pool());
        self.cursor += 1;
        Some(resolved)
    }

    /// Energy is not clamped; only the termination check reads `<= 0`.
    pub fn apply_damage(&mut self, amount: u8) {
        self.energy -= i32::from(amount);
    }

    /// At or below half of max energy (real-valued half).
    pub fn is_desperate(&self) -> bool {
        self.energy * 2 <= self.archetype.max_energy
    }
}

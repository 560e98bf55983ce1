//! Static move registry and per-slot archetype table.
//!
//! Every archetype shares [BASE_MOVES] and appends its own two special moves.
//! The table is plain constant data, so it can be read from any number of
//! concurrent fights without synchronization.

use serde::Serialize;

/// A single move a combatant can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveDefinition {
    pub name: &'static str,
    pub action_prefix: &'static str,
    /// Suffix that `"<move>+<hit>"` must end with, compared case-insensitively.
    pub combination: &'static str,
    pub power: u8,
}

/// Separator between the directional part and the hit of a combination.
pub const COMBINATION_SEPARATOR: char = '+';

/// Fallback when no combination matches: no damage, no action phrase.
pub const NO_OP: MoveDefinition = MoveDefinition {
    name: "",
    action_prefix: "",
    combination: "",
    power: 0,
};

pub const PUNCH: MoveDefinition = MoveDefinition {
    name: "puñetazo",
    action_prefix: "da un",
    combination: "P",
    power: 1,
};

pub const KICK: MoveDefinition = MoveDefinition {
    name: "patada",
    action_prefix: "da una",
    combination: "K",
    power: 1,
};

pub static BASE_MOVES: [MoveDefinition; 2] = [PUNCH, KICK];

static TONYN_SPECIALS: [MoveDefinition; 2] = [
    MoveDefinition {
        name: "Taladoken",
        action_prefix: "usa un",
        combination: "DSD+P",
        power: 3,
    },
    MoveDefinition {
        name: "Remuyuken",
        action_prefix: "conecta un",
        combination: "SD+K",
        power: 2,
    },
];

static ARNALDOR_SPECIALS: [MoveDefinition; 2] = [
    MoveDefinition {
        name: "Remuyuken",
        action_prefix: "conecta un",
        combination: "SA+K",
        power: 3,
    },
    MoveDefinition {
        name: "Taladoken",
        action_prefix: "da un",
        combination: "ASA+P",
        power: 2,
    },
];

impl MoveDefinition {
    /// Special moves carry a separator and swallow the directional lead-in.
    pub fn is_special(&self) -> bool {
        self.combination.contains(COMBINATION_SEPARATOR)
    }

    pub fn is_no_op(&self) -> bool {
        self.combination.is_empty()
    }

    /// `"<prefix> <name>"`, trimmed; empty for [NO_OP].
    pub fn action_phrase(&self) -> String {
        format!("{} {}", self.action_prefix, self.name)
            .trim()
            .to_string()
    }
}

/// The two fixed combatant slots of a fight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotId {
    Player1,
    Player2,
}

impl SlotId {
    pub const ALL: [SlotId; 2] = [SlotId::Player1, SlotId::Player2];

    /// Key used for this slot in request payloads.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Player1 => "player1",
            Self::Player2 => "player2",
        }
    }

    pub fn archetype(self) -> &'static Archetype {
        match self {
            Self::Player1 => &TONYN,
            Self::Player2 => &ARNALDOR,
        }
    }
}

/// Fixed configuration of a combatant selected by slot.
#[derive(Debug, PartialEq, Eq)]
pub struct Archetype {
    pub display_name: &'static str,
    pub max_energy: i32,
    /// 1 or 2; mirrors which direction reads as retreating.
    pub slot_index: u8,
    pub special_moves: &'static [MoveDefinition],
}

pub const DEFAULT_MAX_ENERGY: i32 = 6;

pub static TONYN: Archetype = Archetype {
    display_name: "Tonyn Stallone",
    max_energy: DEFAULT_MAX_ENERGY,
    slot_index: 1,
    special_moves: &TONYN_SPECIALS,
};

pub static ARNALDOR: Archetype = Archetype {
    display_name: "Arnaldor Shuatseneguer",
    max_energy: DEFAULT_MAX_ENERGY,
    slot_index: 2,
    special_moves: &ARNALDOR_SPECIALS,
};

impl Archetype {
    /// First word of the display name.
    pub fn short_name(&self) -> &'static str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(self.display_name)
    }

    /// Base moves followed by this archetype's specials.
    pub fn move_pool(&self) -> impl Iterator<Item = &'static MoveDefinition> {
        BASE_MOVES.iter().chain(self.special_moves.iter())
    }
}

pub mod catalog;
pub mod combatant;
pub mod engine;
pub mod input;
pub mod narration;
pub mod resolver;

pub use catalog::{
    Archetype, MoveDefinition, SlotId, ARNALDOR, BASE_MOVES, COMBINATION_SEPARATOR,
    DEFAULT_MAX_ENERGY, KICK, NO_OP, PUNCH, TONYN,
};
pub use combatant::{Combatant, TokenLengths};
pub use engine::{
    narrate_story, order_combatants, simulate_fight, FightOutcome, FightReport, FightSimulator,
    Story,
};
pub use input::{validate_fight, validate_play, FightInput, PlayInput, ValidationError};
pub use narration::{exhaustion_line, movement_word, narrate_move, victory_line};
pub use resolver::{resolve, ResolvedMove};

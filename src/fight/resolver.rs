use crate::fight::catalog::{MoveDefinition, COMBINATION_SEPARATOR, NO_OP};

/// Outcome of matching one `(move, hit)` token pair against a move pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMove {
    pub definition: &'static MoveDefinition,
    /// Raw move token consumed this turn.
    pub token: String,
    /// Directional lead-in narrated before the action; empty for special moves.
    pub pre_movement: String,
}

impl ResolvedMove {
    pub fn power(&self) -> u8 {
        self.definition.power
    }

    pub fn action_phrase(&self) -> String {
        self.definition.action_phrase()
    }
}

/// Pick the pool entry whose combination is the longest case-insensitive
/// suffix of `"<token>+<hit>"`.
///
/// A candidate only replaces the current best when strictly longer, so the
/// first entry in pool order wins a tie. Nothing matching yields [NO_OP].
pub fn resolve<I>(token: &str, hit: &str, pool: I) -> ResolvedMove
where
    I: IntoIterator<Item = &'static MoveDefinition>,
{
    let full = format!("{token}{COMBINATION_SEPARATOR}{hit}").to_uppercase();

    let mut best: &'static MoveDefinition = &NO_OP;
    for definition in pool {
        if definition.combination.len() > best.combination.len()
            && full.ends_with(&definition.combination.to_uppercase())
        {
            best = definition;
        }
    }

    let pre_movement = if best.is_special() {
        String::new()
    } else {
        token.to_string()
    };

    tracing::debug!(token, hit, combination = best.combination, "resolved move");

    ResolvedMove {
        definition: best,
        token: token.to_string(),
        pre_movement,
    }
}

use crate::fight::combatant::Combatant;
use crate::fight::resolver::ResolvedMove;

/// Footwork verb for the first character of a raw move token.
///
/// Which of `A`/`D` reads as retreating depends on the side of the screen.
pub fn movement_word(token: &str, slot_index: u8) -> &'static str {
    let lead = token
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase());
    match (lead, slot_index) {
        (Some('W'), _) => "sube",
        (Some('S'), _) => "baja",
        (Some('A'), 1) | (Some('D'), 2) => "retrocede",
        _ => "avanza",
    }
}

pub fn desperate_epithet(target: &Combatant) -> String {
    format!("al pobre {}", target.short_name())
}

/// Sentence for one resolved move. Read `target` before damage is applied.
pub fn narrate_move(actor: &Combatant, target: &Combatant, resolved: &ResolvedMove) -> String {
    let mut parts: Vec<String> = vec![actor.short_name().to_string()];

    let has_footwork = !resolved.pre_movement.is_empty();
    if has_footwork {
        parts.push(movement_word(&resolved.pre_movement, actor.slot_index()).to_string());
    }

    let action = resolved.action_phrase();
    if !action.is_empty() {
        if has_footwork {
            parts.push("y".to_string());
        }
        parts.push(action);
    }

    if !resolved.definition.is_no_op() && target.is_desperate() {
        parts.push(desperate_epithet(target));
    }

    parts.join(" ")
}

pub fn victory_line(winner: &Combatant) -> String {
    format!(
        "{} Gana la pelea y aún le queda {} de energía",
        winner.short_name(),
        winner.energy()
    )
}

pub fn exhaustion_line(combatant: &Combatant) -> String {
    format!(
        "{} se ha quedado sin movimientos. La pelea ha finalizado.",
        combatant.short_name()
    )
}

use serde::Serialize;
use thiserror::Error;

use crate::fight::{simulate_fight, validate_fight, MoveDefinition, SlotId, ValidationError};

pub const WELCOME_INFO: &str = "Bienvenido a la API de Talana Kombat! Para iniciar una pelea, envía una solicitud POST a la URL /kombat/fight.";
pub const FIGHT_INFO: &str =
    "Genial, has llegado a la URL! Para iniciar una pelea, envía una solicitud POST.";

#[derive(Debug, Clone, Serialize)]
pub struct FightResponse {
    pub story: Vec<String>,
    pub story_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CombatantCatalogEntry {
    pub slot: SlotId,
    pub name: &'static str,
    pub energy: i32,
    pub moves: Vec<MoveDefinition>,
}

#[derive(Debug, Error)]
pub enum FightPayloadError {
    #[error("Invalid request body: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Error: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to serialize fight response: {0}")]
    Serialize(serde_json::Error),
}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "kombat-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn welcome_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({ "info": WELCOME_INFO }))
}

pub fn fight_info_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({ "info": FIGHT_INFO }))
}

pub fn moves_payload() -> Result<String, serde_json::Error> {
    let combatants: Vec<CombatantCatalogEntry> = SlotId::ALL
        .into_iter()
        .map(|slot| {
            let archetype = slot.archetype();
            CombatantCatalogEntry {
                slot,
                name: archetype.display_name,
                energy: archetype.max_energy,
                moves: archetype.move_pool().copied().collect(),
            }
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "combatants": combatants }))
}

/// Run a whole fight from a JSON request body.
pub fn fight_response(body: &str) -> Result<FightResponse, FightPayloadError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let input = validate_fight(&value)?;
    let report = simulate_fight(&input);
    tracing::info!(turns = report.turns, outcome = ?report.outcome, "fight narrated");

    let story_text = report.story.text();
    Ok(FightResponse {
        story: report.story.into_lines(),
        story_text,
    })
}

pub fn fight_payload(body: &str) -> Result<String, FightPayloadError> {
    let response = fight_response(body)?;
    serde_json::to_string_pretty(&response).map_err(FightPayloadError::Serialize)
}

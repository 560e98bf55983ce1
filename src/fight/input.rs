//! Fight request shape and its structural validation.
//!
//! Validation runs on the raw JSON value so that non-string tokens surface as
//! the same descriptive messages as oversized ones. Messages are Spanish and
//! returned verbatim to clients.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::fight::catalog::SlotId;

pub const MAX_MOVE_LEN: usize = 5;
pub const MAX_HIT_LEN: usize = 1;

const MOVES_KEY: &str = "movimientos";
const HITS_KEY: &str = "golpes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayInput {
    #[serde(rename = "movimientos")]
    pub moves: Vec<String>,
    #[serde(rename = "golpes")]
    pub hits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightInput {
    pub player1: PlayInput,
    pub player2: PlayInput,
}

impl FightInput {
    pub fn play(&self, slot: SlotId) -> &PlayInput {
        match slot {
            SlotId::Player1 => &self.player1,
            SlotId::Player2 => &self.player2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Las claves \"player1\" y \"player2\" son requeridas.")]
    MissingPlayers,
    #[error("Las claves \"movimientos\" y \"golpes\" son requeridas en una jugada.")]
    MissingPlayKeys,
    #[error("Para cada jugador, la cantidad de movimientos y de golpes debe ser la misma.")]
    LengthMismatch,
    #[error("Cada movimiento debe ser un string de longitud máxima 5.")]
    InvalidMove,
    #[error("Cada golpe debe ser un string de longitud máxima 1.")]
    InvalidHit,
}

/// Check the request structure and, on success, return the typed input.
///
/// `player1` is checked completely before `player2`; the first failure wins.
pub fn validate_fight(value: &Value) -> Result<FightInput, ValidationError> {
    let (Some(player1), Some(player2)) = (
        value.get(SlotId::Player1.key()),
        value.get(SlotId::Player2.key()),
    ) else {
        return Err(ValidationError::MissingPlayers);
    };

    Ok(FightInput {
        player1: validate_play(player1)?,
        player2: validate_play(player2)?,
    })
}

pub fn validate_play(value: &Value) -> Result<PlayInput, ValidationError> {
    let (Some(moves), Some(hits)) = (
        value.get(MOVES_KEY).and_then(Value::as_array),
        value.get(HITS_KEY).and_then(Value::as_array),
    ) else {
        return Err(ValidationError::MissingPlayKeys);
    };

    if moves.len() != hits.len() {
        return Err(ValidationError::LengthMismatch);
    }

    Ok(PlayInput {
        moves: bounded_strings(moves, MAX_MOVE_LEN).ok_or(ValidationError::InvalidMove)?,
        hits: bounded_strings(hits, MAX_HIT_LEN).ok_or(ValidationError::InvalidHit)?,
    })
}

fn bounded_strings(values: &[Value], max_len: usize) -> Option<Vec<String>> {
    values
        .iter()
        .map(|value| {
            value
                .as_str()
                .filter(|s| s.chars().count() <= max_len)
                .map(str::to_string)
        })
        .collect()
}

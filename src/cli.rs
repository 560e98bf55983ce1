use std::fs;

use thiserror::Error;

use crate::config::ServerConfig;
use crate::fight::{validate_fight, FightInput, ValidationError};
use crate::server;
use crate::server::api::fight_response;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Fight,
    Validate,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("fight") => Some(Command::Fight),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Fight) => handle_fight(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: kombat <serve|fight|validate>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let config = ServerConfig::from_env();
    match server::run_server(&config.bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!(%err, "server error");
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_fight(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: kombat fight <path-to-fight.json> [--text]");
        return 2;
    };
    let as_text = args.iter().any(|arg| arg == "--text");

    let raw = match read_file(path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("fight failed: {err}");
            return 1;
        }
    };

    match fight_response(&raw) {
        Ok(response) if as_text => {
            println!("{}", response.story_text);
            0
        }
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize fight result: {err}");
                1
            }
        },
        Err(err) => {
            eprintln!("fight failed: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: kombat validate <path-to-fight.json>");
        return 2;
    };

    match load_fight(path) {
        Ok(_) => {
            println!("validation passed: {path}");
            0
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })
}

/// Read and validate a fight request file.
pub fn load_fight(path: &str) -> Result<FightInput, CliError> {
    let raw = read_file(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    Ok(validate_fight(&value)?)
}

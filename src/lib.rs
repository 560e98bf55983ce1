pub mod cli;
pub mod config;
pub mod fight;
pub mod server;

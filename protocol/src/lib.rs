use thiserror::Error;

pub mod command;
pub mod event;

pub use command::{Direction, PlayerCommand, parse_command};
pub use event::{GameEvent, RosterEntry};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Empty command")]
    EmptyCommand,
}

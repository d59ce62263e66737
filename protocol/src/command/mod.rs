
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Grid movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (dx, dy) with y growing downwards
    pub fn delta(&self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" | "north" => Some(Direction::Up),
            "down" | "d" | "south" => Some(Direction::Down),
            "left" | "l" | "west" => Some(Direction::Left),
            "right" | "r" | "east" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Commands a player can send to a session
///
/// Roster slots are 1-based positions in insertion order, as shown by
/// `inventory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PlayerCommand {
    /// starter NAME
    ChooseStarter { name: String },

    /// explore TIER
    Explore { tier: u8 },

    /// move DIRECTION
    Move { direction: Direction },

    /// leave
    Leave,

    /// attack
    Attack,

    /// catch
    Catch,

    /// swap [SLOT]
    Swap { slot: Option<usize> },

    /// flee
    Flee,

    /// inventory
    Inventory,

    /// active SLOT
    SetActive { slot: usize },

    /// evolvable
    Evolvable,

    /// evolve SLOT SLOT
    Evolve { first: usize, second: usize },
}

impl PlayerCommand {
    /// Serialize command to protocol format
    pub fn to_protocol_string(&self) -> String {
        match self {
            Self::ChooseStarter { name } => format!("starter {}", name),
            Self::Explore { tier } => format!("explore {}", tier),
            Self::Move { direction } => format!("move {}", direction.as_str()),
            Self::Leave => "leave".to_string(),
            Self::Attack => "attack".to_string(),
            Self::Catch => "catch".to_string(),
            Self::Swap { slot: Some(slot) } => format!("swap {}", slot),
            Self::Swap { slot: None } => "swap".to_string(),
            Self::Flee => "flee".to_string(),
            Self::Inventory => "inventory".to_string(),
            Self::SetActive { slot } => format!("active {}", slot),
            Self::Evolvable => "evolvable".to_string(),
            Self::Evolve { first, second } => format!("evolve {} {}", first, second),
        }
    }

    /// Whether the command only makes sense during a battle
    pub fn is_battle_action(&self) -> bool {
        matches!(
            self,
            Self::Attack | Self::Catch | Self::Swap { .. } | Self::Flee
        )
    }
}

/// Parse a single command line
pub fn parse_command(line: &str) -> Result<PlayerCommand, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some(keyword) = parts.first() else {
        return Err(ParseError::EmptyCommand);
    };

    match keyword.to_lowercase().as_str() {
        "starter" => parse_starter(&parts),
        "explore" => parse_explore(&parts),
        "move" | "go" => parse_move(&parts),
        "up" | "down" | "left" | "right" => {
            at_most(&parts, 1)?;
            parse_move(&["move", *keyword])
        }
        "leave" | "exit" => no_args(&parts, PlayerCommand::Leave),
        "attack" => no_args(&parts, PlayerCommand::Attack),
        "catch" | "capture" => no_args(&parts, PlayerCommand::Catch),
        "swap" => parse_swap(&parts),
        "flee" | "run" => no_args(&parts, PlayerCommand::Flee),
        "inventory" | "inv" => no_args(&parts, PlayerCommand::Inventory),
        "active" => parse_active(&parts),
        "evolvable" => no_args(&parts, PlayerCommand::Evolvable),
        "evolve" => parse_evolve(&parts),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn no_args(parts: &[&str], command: PlayerCommand) -> Result<PlayerCommand, ParseError> {
    at_most(parts, 1)?;
    Ok(command)
}

/// Reject trailing words beyond the keyword plus its arguments
fn at_most(parts: &[&str], words: usize) -> Result<(), ParseError> {
    if parts.len() > words {
        return Err(ParseError::InvalidFormat(format!(
            "unexpected argument to {}: {}",
            parts[0], parts[words]
        )));
    }
    Ok(())
}

fn parse_starter(parts: &[&str]) -> Result<PlayerCommand, ParseError> {
    if parts.len() < 2 {
        return Err(ParseError::MissingField("starter name".to_string()));
    }
    Ok(PlayerCommand::ChooseStarter {
        name: parts[1..].join(" "),
    })
}

fn parse_explore(parts: &[&str]) -> Result<PlayerCommand, ParseError> {
    if parts.len() < 2 {
        return Err(ParseError::MissingField("area tier".to_string()));
    }
    at_most(parts, 2)?;
    let tier = parts[1]
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat("invalid area tier".to_string()))?;
    Ok(PlayerCommand::Explore { tier })
}

fn parse_move(parts: &[&str]) -> Result<PlayerCommand, ParseError> {
    if parts.len() < 2 {
        return Err(ParseError::MissingField("direction".to_string()));
    }
    at_most(parts, 2)?;
    let direction = Direction::from_protocol(parts[1])
        .ok_or_else(|| ParseError::InvalidFormat(format!("invalid direction: {}", parts[1])))?;
    Ok(PlayerCommand::Move { direction })
}

fn parse_swap(parts: &[&str]) -> Result<PlayerCommand, ParseError> {
    at_most(parts, 2)?;
    let slot = match parts.get(1) {
        Some(raw) => Some(parse_slot(raw)?),
        None => None,
    };
    Ok(PlayerCommand::Swap { slot })
}

fn parse_active(parts: &[&str]) -> Result<PlayerCommand, ParseError> {
    if parts.len() < 2 {
        return Err(ParseError::MissingField("roster slot".to_string()));
    }
    at_most(parts, 2)?;
    Ok(PlayerCommand::SetActive {
        slot: parse_slot(parts[1])?,
    })
}

fn parse_evolve(parts: &[&str]) -> Result<PlayerCommand, ParseError> {
    if parts.len() < 3 {
        return Err(ParseError::MissingField("two roster slots".to_string()));
    }
    at_most(parts, 3)?;
    Ok(PlayerCommand::Evolve {
        first: parse_slot(parts[1])?,
        second: parse_slot(parts[2])?,
    })
}

fn parse_slot(raw: &str) -> Result<usize, ParseError> {
    match raw.parse::<usize>() {
        Ok(slot) if slot > 0 => Ok(slot),
        _ => Err(ParseError::InvalidFormat(format!(
            "invalid roster slot: {}",
            raw
        ))),
    }
}

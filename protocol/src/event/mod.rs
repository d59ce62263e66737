mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Direction;

/// One roster line as shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// 1-based position in insertion order
    pub slot: usize,
    pub name: String,
    pub element: String,
    pub family: String,
    pub tier: u8,
    pub health: u32,
    pub max_health: u32,
    pub active: bool,
}

/// Events a session reports back after a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    StarterChosen {
        name: String,
        element: String,
    },
    EnteredArea {
        tier: u8,
        width: u32,
        height: u32,
    },
    LeftArea,
    Moved {
        x: u32,
        y: u32,
    },
    Blocked {
        direction: Direction,
    },
    Encounter {
        name: String,
        element: String,
        tier: u8,
        health: u32,
        /// Element that beats the wild creature
        weak_to: String,
        /// Roster members whose element beats the wild creature
        counters: Vec<String>,
    },
    Attacked {
        damage: u32,
        advantage: bool,
        enemy_health: u32,
    },
    CaptureFailed {
        chance: i64,
    },
    Captured {
        name: String,
    },
    Swapped {
        name: String,
    },
    ActionRejected {
        reason: String,
    },
    BattleOver {
        message: String,
    },
    Roster {
        entries: Vec<RosterEntry>,
    },
    Evolvable {
        entries: Vec<RosterEntry>,
    },
    ActiveChanged {
        name: String,
    },
    Evolved {
        name: String,
        tier: u8,
    },
}

impl GameEvent {
    /// Serialize to protocol format: |KIND|FIELD|FIELD...
    ///
    /// Roster listings put one `|entry|...` line per creature after the
    /// header line.
    pub fn to_protocol_string(&self) -> String {
        match self {
            Self::StarterChosen { name, element } => format!("|starter|{}|{}", name, element),
            Self::EnteredArea {
                tier,
                width,
                height,
            } => format!("|area|{}|{}|{}", tier, width, height),
            Self::LeftArea => "|leave".to_string(),
            Self::Moved { x, y } => format!("|move|{}|{}", x, y),
            Self::Blocked { direction } => format!("|blocked|{}", direction.as_str()),
            Self::Encounter {
                name,
                element,
                tier,
                health,
                weak_to,
                counters,
            } => format!(
                "|encounter|{}|{}|{}|{}|{}|{}",
                name,
                element,
                tier,
                health,
                weak_to,
                counters.join(",")
            ),
            Self::Attacked {
                damage,
                advantage,
                enemy_health,
            } => format!(
                "|attack|{}|{}|{}",
                damage,
                if *advantage { "advantage" } else { "" },
                enemy_health
            ),
            Self::CaptureFailed { chance } => format!("|catchfail|{}", chance),
            Self::Captured { name } => format!("|caught|{}", name),
            Self::Swapped { name } => format!("|swap|{}", name),
            Self::ActionRejected { reason } => format!("|rejected|{}", reason),
            Self::BattleOver { message } => format!("|battleover|{}", message),
            Self::Roster { entries } => roster_lines("roster", entries),
            Self::Evolvable { entries } => roster_lines("evolvable", entries),
            Self::ActiveChanged { name } => format!("|active|{}", name),
            Self::Evolved { name, tier } => format!("|evolved|{}|{}", name, tier),
        }
    }

    /// Whether this event closes a battle
    pub fn ends_battle(&self) -> bool {
        matches!(self, Self::BattleOver { .. })
    }
}

fn roster_lines(kind: &str, entries: &[RosterEntry]) -> String {
    let mut out = format!("|{}|{}", kind, entries.len());
    for e in entries {
        out.push_str(&format!(
            "\n|entry|{}|{}|{}|{}|{}|{}/{}{}",
            e.slot,
            e.name,
            e.element,
            e.family,
            e.tier,
            e.health,
            e.max_health,
            if e.active { "|active" } else { "" }
        ));
    }
    out
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}. {} [{}] {} EL{} {}/{}",
            if self.active { "*" } else { " " },
            self.slot,
            self.name,
            self.element,
            self.family,
            self.tier,
            self.health,
            self.max_health
        )
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StarterChosen { name, element } => {
                write!(f, "You chose {} ({}) as your starter.", name, element)
            }
            Self::EnteredArea {
                tier,
                width,
                height,
            } => write!(f, "Entered area {} ({}x{}).", tier, width, height),
            Self::LeftArea => write!(f, "Left the area."),
            Self::Moved { x, y } => write!(f, "Moved to ({}, {}).", x, y),
            Self::Blocked { direction } => write!(f, "Can't move {}.", direction.as_str()),
            Self::Encounter {
                name,
                element,
                tier,
                health,
                weak_to,
                counters,
            } => {
                write!(
                    f,
                    "A wild {} appeared! Type: {}, EL: {}, Health: {}. Weak to {}",
                    name, element, tier, health, weak_to
                )?;
                if !counters.is_empty() {
                    write!(f, " (try {})", counters.join(", "))?;
                }
                Ok(())
            }
            Self::Attacked {
                damage,
                advantage,
                enemy_health,
            } => {
                write!(f, "Last Damage Dealt: {}", damage)?;
                if *advantage {
                    write!(f, " (type advantage)")?;
                }
                write!(f, ". Enemy health: {}", enemy_health)
            }
            Self::CaptureFailed { chance } => {
                write!(f, "The creature broke free ({}% chance).", chance)
            }
            Self::Captured { name } => write!(f, "Caught {}!", name),
            Self::Swapped { name } => write!(f, "Go, {}!", name),
            Self::ActionRejected { reason } => write!(f, "Nothing happened: {}.", reason),
            Self::BattleOver { message } => write!(f, "{}", message),
            Self::Roster { entries } | Self::Evolvable { entries } => {
                if entries.is_empty() {
                    return write!(f, "(no creatures)");
                }
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", entry)?;
                }
                Ok(())
            }
            Self::ActiveChanged { name } => write!(f, "{} is now your active creature.", name),
            Self::Evolved { name, tier } => {
                write!(f, "Creature evolved into: {} (EL {})", name, tier)
            }
        }
    }
}

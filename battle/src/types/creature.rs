//! Creature identity and health

use std::sync::atomic::{AtomicU64, Ordering};

use super::element::Element;

/// Highest evolution tier a creature can reach
pub const MAX_TIER: u8 = 3;

static NEXT_CREATURE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique creature identifier
///
/// Issued from a monotonically increasing counter. Two creatures of the same
/// species, family and tier are still different individuals, so equality is
/// always decided by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureId(u64);

impl CreatureId {
    fn next() -> Self {
        Self(NEXT_CREATURE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single creature
///
/// Species data (name, element, family, tier, max health) is fixed at
/// creation. Only the current health changes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    id: CreatureId,

    /// Species name (e.g. "Strawander")
    pub name: String,

    /// Elemental type
    pub element: Element,

    /// Family label shared by every tier of one species line
    pub family: String,

    /// Evolution tier (1-3)
    pub tier: u8,

    health: u32,
    max_health: u32,
}

impl Creature {
    /// Create a creature at full health with a fresh id
    pub fn new(
        name: impl Into<String>,
        element: Element,
        family: impl Into<String>,
        tier: u8,
        max_health: u32,
    ) -> Self {
        Self {
            id: CreatureId::next(),
            name: name.into(),
            element,
            family: family.into(),
            tier,
            health: max_health,
            max_health,
        }
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Subtract damage from current health, stopping at zero
    pub fn reduce_health(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Force current health to `value`
    ///
    /// Not bounded by max health: battles use this to give every wild
    /// creature the same starting toughness regardless of species.
    pub fn set_health(&mut self, value: u32) {
        self.health = value;
    }

    /// Whether health has reached zero
    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    /// Whether this creature can still evolve
    pub fn can_evolve_further(&self) -> bool {
        self.tier < MAX_TIER
    }
}

impl PartialEq for Creature {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Creature {}

impl std::hash::Hash for Creature {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {}, tier {}) {}/{}",
            self.name, self.element, self.family, self.tier, self.health, self.max_health
        )
    }
}

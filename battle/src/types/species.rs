//! Static species catalog
//!
//! Nine families, three tiers each. Families A-C are Fire, D-F Nature,
//! G-I Water. The tier-1 line-up doubles as the starter choice.

use super::creature::{Creature, MAX_TIER};
use super::element::Element;

/// Health every catalog creature is instantiated with
pub const DEFAULT_MAX_HEALTH: u32 = 100;

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Species {
    pub name: &'static str,
    pub element: Element,
    pub family: &'static str,
    pub tier: u8,
}

impl Species {
    const fn new(name: &'static str, element: Element, family: &'static str, tier: u8) -> Self {
        Self {
            name,
            element,
            family,
            tier,
        }
    }

    /// Create a fresh creature of this species
    pub fn instantiate(&self, max_health: u32) -> Creature {
        Creature::new(self.name, self.element, self.family, self.tier, max_health)
    }
}

use Element::{Fire, Nature, Water};

/// Catalog indexed by [tier - 1][family slot]
#[rustfmt::skip]
pub static CATALOG: [[Species; 9]; 3] = [
    [
        Species::new("Strawander", Fire,   "A FAMILY", 1),
        Species::new("Chocowool",  Fire,   "B FAMILY", 1),
        Species::new("Parfwit",    Fire,   "C FAMILY", 1),
        Species::new("Brownisaur", Nature, "D FAMILY", 1),
        Species::new("Frubat",     Nature, "E FAMILY", 1),
        Species::new("Malts",      Nature, "F FAMILY", 1),
        Species::new("Squirpie",   Water,  "G FAMILY", 1),
        Species::new("Chocolite",  Water,  "H FAMILY", 1),
        Species::new("Oshacone",   Water,  "I FAMILY", 1),
    ],
    [
        Species::new("Strawleon",  Fire,   "A FAMILY", 2),
        Species::new("Chocofluff", Fire,   "B FAMILY", 2),
        Species::new("Parfure",    Fire,   "C FAMILY", 2),
        Species::new("Chocosaur",  Nature, "D FAMILY", 2),
        Species::new("Golberry",   Nature, "E FAMILY", 2),
        Species::new("Kirlicake",  Nature, "F FAMILY", 2),
        Species::new("Tartortle",  Water,  "G FAMILY", 2),
        Species::new("Chocolish",  Water,  "H FAMILY", 2),
        Species::new("Dewice",     Water,  "I FAMILY", 2),
    ],
    [
        Species::new("Strawizard", Fire,   "A FAMILY", 3),
        Species::new("Candaros",   Fire,   "B FAMILY", 3),
        Species::new("Parfelure",  Fire,   "C FAMILY", 3),
        Species::new("Fudgasaur",  Nature, "D FAMILY", 3),
        Species::new("Croberry",   Nature, "E FAMILY", 3),
        Species::new("Velvevoir",  Nature, "F FAMILY", 3),
        Species::new("Piestoise",  Water,  "G FAMILY", 3),
        Species::new("Icesundae",  Water,  "H FAMILY", 3),
        Species::new("Samurcone",  Water,  "I FAMILY", 3),
    ],
];

/// All species of one tier, or None outside 1-3
pub fn tier_roster(tier: u8) -> Option<&'static [Species; 9]> {
    if tier == 0 || tier > MAX_TIER {
        return None;
    }
    CATALOG.get(usize::from(tier - 1))
}

/// The nine tier-1 species offered as starters
pub fn starters() -> &'static [Species; 9] {
    &CATALOG[0]
}

/// Look up a species by family and tier
pub fn species(family: &str, tier: u8) -> Option<&'static Species> {
    tier_roster(tier)?.iter().find(|s| s.family == family)
}

/// The species a family evolves into from `tier`
pub fn successor(family: &str, tier: u8) -> Option<&'static Species> {
    species(family, tier.checked_add(1)?)
}

/// Look up a species by name (case-insensitive)
pub fn by_name(name: &str) -> Option<&'static Species> {
    CATALOG
        .iter()
        .flatten()
        .find(|s| s.name.eq_ignore_ascii_case(name))
}

//! Random selection of wild creatures

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::{Creature, species};

/// Chance (percent) that a step in an area triggers an encounter
pub const ENCOUNTER_CHANCE_PERCENT: u32 = 40;

/// Picks wild creatures for an area tier
#[derive(Debug, Clone)]
pub struct EncounterSelector<R> {
    rng: R,
    max_health: u32,
}

impl<R: Rng> EncounterSelector<R> {
    /// Create a selector drawing from `rng`
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_health: species::DEFAULT_MAX_HEALTH,
        }
    }

    /// Override the health wild creatures are created with
    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    /// A fresh, full-health creature chosen uniformly from the tier's nine
    /// species. Tiers outside 1-3 yield None.
    pub fn random_creature(&mut self, tier: u8) -> Option<Creature> {
        let pool = species::tier_roster(tier)?;
        let picked = pool.choose(&mut self.rng)?;

        tracing::debug!(tier, species = picked.name, "Wild creature selected");
        Some(picked.instantiate(self.max_health))
    }

    /// Roll a single encounter check
    pub fn roll_encounter(&mut self, chance_percent: u32) -> bool {
        let roll: u32 = self.rng.gen_range(0..100);
        let hit = roll < chance_percent;
        tracing::debug!(roll, chance_percent, hit, "Encounter roll");
        hit
    }

    /// Access the underlying generator
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

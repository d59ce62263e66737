use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use treatmon_battle::{ENCOUNTER_CHANCE_PERCENT, types::species::DEFAULT_MAX_HEALTH};

/// One explorable area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaConfig {
    /// Tier of the wild creatures found here
    pub tier: u8,
    pub width: u32,
    pub height: u32,
}

/// Session settings
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub encounter_chance_percent: u32,

    /// Roll the encounter chance twice per step and require both to hit
    pub double_encounter_roll: bool,

    pub starter_health: u32,

    /// Max health of wild creatures (their battle health is reset anyway)
    pub wild_health: u32,

    pub areas: Vec<AreaConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            encounter_chance_percent: ENCOUNTER_CHANCE_PERCENT,
            double_encounter_roll: false,
            starter_health: DEFAULT_MAX_HEALTH,
            wild_health: DEFAULT_MAX_HEALTH,
            areas: vec![
                AreaConfig {
                    tier: 1,
                    width: 5,
                    height: 1,
                },
                AreaConfig {
                    tier: 2,
                    width: 3,
                    height: 3,
                },
                AreaConfig {
                    tier: 3,
                    width: 4,
                    height: 4,
                },
            ],
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse game config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.encounter_chance_percent > 100 {
            bail!(
                "encounter_chance_percent must be at most 100, got {}",
                self.encounter_chance_percent
            );
        }
        if self.starter_health == 0 {
            bail!("starter_health must be positive");
        }
        if self.wild_health == 0 {
            bail!("wild_health must be positive");
        }
        for area in &self.areas {
            if area.width == 0 || area.height == 0 {
                bail!("area tier {} has an empty grid", area.tier);
            }
        }
        Ok(())
    }

    /// First area configured for `tier`
    pub fn area(&self, tier: u8) -> Option<&AreaConfig> {
        self.areas.iter().find(|a| a.tier == tier)
    }
}

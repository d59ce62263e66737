//! One player's game: starter, roster, current area and current battle

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use treatmon_battle::query::members_with_advantage;
use treatmon_battle::types::species;
use treatmon_battle::{
    Battle, Creature, CreatureId, EncounterSelector, EvolutionError, Roster, RosterError, Turn,
    evolve,
};
use treatmon_protocol::{Direction, GameEvent, PlayerCommand, RosterEntry};

use crate::area::Area;
use crate::config::GameConfig;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Choose a starter first")]
    NoStarter,

    #[error("A starter was already chosen")]
    StarterAlreadyChosen,

    #[error("{0} is not a starter")]
    UnknownStarter(String),

    #[error("Not exploring an area")]
    NotExploring,

    #[error("Already exploring area {0}")]
    AlreadyExploring(u8),

    #[error("No area with tier {0}")]
    UnknownArea(u8),

    #[error("Not allowed during a battle")]
    InBattle,

    #[error("No battle in progress")]
    NoBattle,

    #[error("No creature in roster slot {0}")]
    BadSlot(usize),

    #[error("No active creature to fight with")]
    NoActiveCreature,

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Evolution(#[from] EvolutionError),

    #[error("Failed to seed battle generator: {0}")]
    Rng(#[from] rand::Error),
}

/// A single player's game state
///
/// Every command goes through [`GameSession::apply`], which returns the
/// events to show the player.
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    roster: Roster,
    selector: EncounterSelector<R>,
    area: Option<Area>,
    battle: Option<Battle<StdRng>>,
    starter_chosen: bool,
}

impl<R: Rng> GameSession<R> {
    /// Create a session drawing every random value from `rng`
    pub fn new(config: GameConfig, rng: R) -> Self {
        let selector = EncounterSelector::new(rng).with_max_health(config.wild_health);
        Self {
            config,
            roster: Roster::new(),
            selector,
            area: None,
            battle: None,
            starter_chosen: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn area(&self) -> Option<&Area> {
        self.area.as_ref()
    }

    pub fn battle(&self) -> Option<&Battle<StdRng>> {
        self.battle.as_ref()
    }

    pub fn in_battle(&self) -> bool {
        self.battle.is_some()
    }

    /// Run one command
    ///
    /// Rejected battle actions are not errors: they come back as an
    /// `ActionRejected` event.
    pub fn apply(&mut self, command: PlayerCommand) -> Result<Vec<GameEvent>, SessionError> {
        tracing::debug!(command = %command.to_protocol_string(), "Applying command");

        if command.is_battle_action() {
            if self.battle.is_none() {
                return Err(SessionError::NoBattle);
            }
        } else if self.battle.is_some()
            && !matches!(command, PlayerCommand::Inventory | PlayerCommand::Evolvable)
        {
            return Err(SessionError::InBattle);
        }

        match command {
            PlayerCommand::ChooseStarter { name } => self.choose_starter(&name),
            PlayerCommand::Explore { tier } => self.explore(tier),
            PlayerCommand::Move { direction } => self.step(direction),
            PlayerCommand::Leave => self.leave(),
            PlayerCommand::Attack => self.battle_turn(|battle, _| battle.attack()),
            PlayerCommand::Catch => self.battle_turn(|battle, roster| battle.try_capture(roster)),
            PlayerCommand::Swap { slot } => self.swap(slot),
            PlayerCommand::Flee => self.battle_turn(|battle, _| battle.flee()),
            PlayerCommand::Inventory => Ok(vec![GameEvent::Roster {
                entries: self.entries(self.roster.iter()),
            }]),
            PlayerCommand::SetActive { slot } => self.set_active(slot),
            PlayerCommand::Evolvable => Ok(vec![GameEvent::Evolvable {
                entries: self.entries(self.roster.eligible_for_evolution()),
            }]),
            PlayerCommand::Evolve { first, second } => self.evolve(first, second),
        }
    }

    fn choose_starter(&mut self, name: &str) -> Result<Vec<GameEvent>, SessionError> {
        if self.starter_chosen {
            return Err(SessionError::StarterAlreadyChosen);
        }

        let starter = species::starters()
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SessionError::UnknownStarter(name.to_string()))?;

        let creature = starter.instantiate(self.config.starter_health);
        tracing::info!(starter = %creature.name, id = %creature.id(), "Starter chosen");

        let event = GameEvent::StarterChosen {
            name: creature.name.clone(),
            element: creature.element.as_str().to_string(),
        };
        self.roster.add(creature);
        self.starter_chosen = true;
        Ok(vec![event])
    }

    fn explore(&mut self, tier: u8) -> Result<Vec<GameEvent>, SessionError> {
        if !self.starter_chosen {
            return Err(SessionError::NoStarter);
        }
        if let Some(area) = &self.area {
            return Err(SessionError::AlreadyExploring(area.tier()));
        }

        let area_config = self.config.area(tier).ok_or(SessionError::UnknownArea(tier))?;
        let area = Area::new(area_config);
        tracing::info!(tier, width = area.width(), height = area.height(), "Entered area");

        let event = GameEvent::EnteredArea {
            tier,
            width: area.width(),
            height: area.height(),
        };
        self.area = Some(area);
        Ok(vec![event])
    }

    fn leave(&mut self) -> Result<Vec<GameEvent>, SessionError> {
        let area = self.area.take().ok_or(SessionError::NotExploring)?;
        tracing::info!(tier = area.tier(), "Left area");
        Ok(vec![GameEvent::LeftArea])
    }

    fn step(&mut self, direction: Direction) -> Result<Vec<GameEvent>, SessionError> {
        let area = self.area.as_mut().ok_or(SessionError::NotExploring)?;
        if !area.step(direction) {
            return Ok(vec![GameEvent::Blocked { direction }]);
        }

        let (x, y) = area.position();
        let tier = area.tier();
        let mut events = vec![GameEvent::Moved { x, y }];

        if self.encounter_triggered() {
            if let Some(enemy) = self.selector.random_creature(tier) {
                events.push(self.start_battle(enemy)?);
            }
        }
        Ok(events)
    }

    /// One roll per step, or two that must both hit with `double_encounter_roll`
    fn encounter_triggered(&mut self) -> bool {
        let chance = self.config.encounter_chance_percent;
        if !self.selector.roll_encounter(chance) {
            return false;
        }
        !self.config.double_encounter_roll || self.selector.roll_encounter(chance)
    }

    fn start_battle(&mut self, enemy: Creature) -> Result<GameEvent, SessionError> {
        let player = self.roster.active().ok_or(SessionError::NoActiveCreature)?;
        let rng = StdRng::from_rng(self.selector.rng_mut())?;
        let battle = Battle::start(player, enemy, rng);

        let enemy = battle.enemy();
        let event = GameEvent::Encounter {
            name: enemy.name.clone(),
            element: enemy.element.as_str().to_string(),
            tier: enemy.tier,
            health: enemy.health(),
            weak_to: enemy.element.weakness().as_str().to_string(),
            counters: members_with_advantage(&self.roster, enemy)
                .into_iter()
                .map(|c| c.name.clone())
                .collect(),
        };
        self.battle = Some(battle);
        Ok(event)
    }

    fn swap(&mut self, slot: Option<usize>) -> Result<Vec<GameEvent>, SessionError> {
        let target = match slot {
            Some(slot) => self.slot_id(slot)?,
            None => {
                let current = self
                    .battle
                    .as_ref()
                    .ok_or(SessionError::NoBattle)?
                    .player()
                    .id();
                // With nobody else to send in, let the battle reject the swap
                self.roster
                    .first_other_than(current)
                    .map(Creature::id)
                    .unwrap_or(current)
            }
        };
        self.battle_turn(|battle, roster| battle.swap(roster, target))
    }

    fn battle_turn(
        &mut self,
        action: impl FnOnce(&mut Battle<StdRng>, &mut Roster) -> Turn,
    ) -> Result<Vec<GameEvent>, SessionError> {
        let battle = self.battle.as_mut().ok_or(SessionError::NoBattle)?;
        let turn = action(battle, &mut self.roster);

        let mut events = vec![match turn {
            Turn::Attacked { damage, advantage } => GameEvent::Attacked {
                damage,
                advantage,
                enemy_health: battle.enemy().health(),
            },
            Turn::CaptureAttempted { success: true, .. } => GameEvent::Captured {
                name: battle.enemy().name.clone(),
            },
            Turn::CaptureAttempted { chance, .. } => GameEvent::CaptureFailed { chance },
            Turn::Swapped { .. } => GameEvent::Swapped {
                name: battle.player().name.clone(),
            },
            Turn::Fled => GameEvent::BattleOver {
                message: battle.outcome_message().to_string(),
            },
            Turn::Rejected(rejection) => GameEvent::ActionRejected {
                reason: rejection.as_str().to_string(),
            },
        }];

        // A capture closes the encounter even with actions left
        if battle.is_over() || battle.is_enemy_caught() {
            if !matches!(turn, Turn::Fled) {
                events.push(GameEvent::BattleOver {
                    message: battle.outcome_message().to_string(),
                });
            }
            self.battle = None;
        }
        Ok(events)
    }

    fn set_active(&mut self, slot: usize) -> Result<Vec<GameEvent>, SessionError> {
        let id = self.slot_id(slot)?;
        self.roster.set_active(id)?;

        let name = self
            .roster
            .active()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        Ok(vec![GameEvent::ActiveChanged { name }])
    }

    fn evolve(&mut self, first: usize, second: usize) -> Result<Vec<GameEvent>, SessionError> {
        let first = self.slot_id(first)?;
        let second = self.slot_id(second)?;

        let evolved = evolve(&mut self.roster, first, second)?;
        let creature = self.roster.get(evolved).ok_or(RosterError::NotAMember(evolved))?;
        Ok(vec![GameEvent::Evolved {
            name: creature.name.clone(),
            tier: creature.tier,
        }])
    }

    fn slot_id(&self, slot: usize) -> Result<CreatureId, SessionError> {
        slot.checked_sub(1)
            .and_then(|index| self.roster.get_index(index))
            .map(Creature::id)
            .ok_or(SessionError::BadSlot(slot))
    }

    /// Listing rows for roster members, slots taken from insertion order
    fn entries<'a>(&self, members: impl Iterator<Item = &'a Creature>) -> Vec<RosterEntry> {
        let active = self.roster.active_id();
        members
            .filter_map(|c| {
                let position = self.roster.position(c.id())?;
                Some(RosterEntry {
                    slot: position + 1,
                    name: c.name.clone(),
                    element: c.element.as_str().to_string(),
                    family: c.family.clone(),
                    tier: c.tier,
                    health: c.health(),
                    max_health: c.max_health(),
                    active: Some(c.id()) == active,
                })
            })
            .collect()
    }
}

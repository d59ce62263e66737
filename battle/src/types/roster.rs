//! The player's creature collection

use thiserror::Error;

use super::creature::{Creature, CreatureId};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    #[error("Creature {0} is not in the roster")]
    NotAMember(CreatureId),
}

/// Creatures owned by the player, in insertion order, plus the active one
#[derive(Debug, Clone, Default)]
pub struct Roster {
    creatures: Vec<Creature>,
    active: Option<CreatureId>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a creature. The first creature added to a roster without an
    /// active creature becomes active.
    pub fn add(&mut self, creature: Creature) {
        let id = creature.id();
        self.creatures.push(creature);
        if self.active.is_none() {
            self.active = Some(id);
        }
    }

    /// Remove a creature by identity
    ///
    /// Removing the active creature leaves the roster without one; the
    /// caller is expected to pick a new active creature.
    pub fn remove(&mut self, id: CreatureId) -> Option<Creature> {
        let index = self.position(id)?;
        if self.active == Some(id) {
            self.active = None;
        }
        Some(self.creatures.remove(index))
    }

    /// Make a member the active creature
    pub fn set_active(&mut self, id: CreatureId) -> Result<(), RosterError> {
        if !self.contains(id) {
            tracing::warn!(creature = %id, "Tried to activate a creature outside the roster");
            return Err(RosterError::NotAMember(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// The active creature, if any
    pub fn active(&self) -> Option<&Creature> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn active_id(&self) -> Option<CreatureId> {
        self.active
    }

    /// Members below the final tier, recomputed on every call
    pub fn eligible_for_evolution(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter().filter(|c| c.can_evolve_further())
    }

    pub fn contains(&self, id: CreatureId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id() == id)
    }

    /// Get a member by insertion position
    pub fn get_index(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    /// Position of a member in insertion order
    pub fn position(&self, id: CreatureId) -> Option<usize> {
        self.creatures.iter().position(|c| c.id() == id)
    }

    /// First member (insertion order) that is not `id`
    pub fn first_other_than(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id() != id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

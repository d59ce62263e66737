//! Merging two creatures into the next tier of their line
//!
//! The successor comes from the species catalog: two tier-1 Strawanders
//! become a Strawleon, two Strawleons a Strawizard. The result keeps the
//! first source's element, family and max health.

use thiserror::Error;

use crate::types::{Creature, CreatureId, Roster, species};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvolutionError {
    #[error("Creature {0} is not in the roster")]
    NotAMember(CreatureId),

    #[error("Creatures {0} and {1} are not an eligible pair")]
    Ineligible(CreatureId, CreatureId),

    #[error("No tier {tier} species in {family}")]
    NoSuccessor { family: String, tier: u8 },
}

/// Check whether two creatures may be merged
///
/// Both must be different individuals of the same family and tier, and that
/// tier must be below the final one.
pub fn can_evolve(first: &Creature, second: &Creature) -> bool {
    first.id() != second.id()
        && first.family == second.family
        && first.tier == second.tier
        && first.can_evolve_further()
}

/// Build the creature two eligible sources would evolve into, without
/// touching any roster
pub fn evolved_form(first: &Creature, second: &Creature) -> Result<Creature, EvolutionError> {
    if !can_evolve(first, second) {
        return Err(EvolutionError::Ineligible(first.id(), second.id()));
    }

    let next_tier = first.tier + 1;
    let successor =
        species::successor(&first.family, first.tier).ok_or_else(|| EvolutionError::NoSuccessor {
            family: first.family.clone(),
            tier: next_tier,
        })?;

    Ok(Creature::new(
        successor.name,
        first.element,
        first.family.clone(),
        next_tier,
        first.max_health(),
    ))
}

/// Evolve two roster members
///
/// On success both sources are removed and the evolved creature is appended.
/// It only becomes active if the roster was left without an active creature.
/// On failure the roster is untouched.
pub fn evolve(
    roster: &mut Roster,
    first: CreatureId,
    second: CreatureId,
) -> Result<CreatureId, EvolutionError> {
    let a = roster.get(first).ok_or(EvolutionError::NotAMember(first))?;
    let b = roster.get(second).ok_or(EvolutionError::NotAMember(second))?;

    let evolved = evolved_form(a, b)?;
    let evolved_id = evolved.id();

    tracing::info!(
        first = %first,
        second = %second,
        into = %evolved.name,
        tier = evolved.tier,
        "Creatures evolved"
    );

    roster.remove(first);
    roster.remove(second);
    roster.add(evolved);

    Ok(evolved_id)
}

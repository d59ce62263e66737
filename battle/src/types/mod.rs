//! Domain types: creatures, elements, the roster and the species catalog

mod creature;
mod element;
mod roster;
pub mod species;

pub use creature::{Creature, CreatureId, MAX_TIER};
pub use element::{ADVANTAGE_MULTIPLIER, Element};
pub use roster::{Roster, RosterError};
pub use species::Species;

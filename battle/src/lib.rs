//! Combat, capture and evolution rules for treatmon.
//!
//! This crate is the rules core of the game: everything with a numeric rule
//! or a state transition lives here, everything presentational lives in the
//! front end.
//!
//! # Overview
//!
//! `treatmon-battle` sits between the session layer and the static species
//! data:
//!
//! ```text
//! treatmon-client (session, areas, starter choice)
//!        │
//!        ▼
//! treatmon-battle (rules) ← THIS CRATE
//!        │
//!        └─> species catalog (static data)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Creature`] - identity, element, family, tier and health
//! - [`Element`] - Fire / Nature / Water with the advantage cycle
//! - [`Roster`] - the player's creatures and the active one
//! - [`Species`] - catalog entries, see [`types::species`]
//!
//! ## Rules
//! - [`Battle`] - one encounter: attack, capture, swap, flee
//! - [`evolution`] - merging two creatures into the next tier
//! - [`EncounterSelector`] - picking wild creatures for an area tier
//!
//! All randomness comes from a generator handed in by the caller, so a
//! seeded generator makes every rule reproducible.
//!
//! # Example Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use treatmon_battle::{Battle, EncounterSelector, Roster, Turn, types::species};
//!
//! let mut roster = Roster::new();
//! roster.add(species::starters()[0].instantiate(100));
//!
//! let mut selector = EncounterSelector::new(StdRng::seed_from_u64(1));
//! let enemy = selector.random_creature(1).unwrap();
//!
//! let player = roster.active().unwrap().clone();
//! let mut battle = Battle::start(&player, enemy, StdRng::seed_from_u64(2));
//!
//! if let Turn::Attacked { damage, .. } = battle.attack() {
//!     println!("Hit for {}", damage);
//! }
//! while !battle.is_over() && !battle.is_enemy_caught() {
//!     battle.try_capture(&mut roster);
//! }
//! println!("{}", battle.outcome_message());
//! ```

pub mod combat;
pub mod encounter;
pub mod evolution;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use combat::{Battle, BattleOutcome, BattleState, Rejection, Turn};
pub use encounter::{ENCOUNTER_CHANCE_PERCENT, EncounterSelector};
pub use evolution::{EvolutionError, can_evolve, evolve};
pub use types::{Creature, CreatureId, Element, MAX_TIER, Roster, RosterError, Species};

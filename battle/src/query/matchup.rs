//! Element matchup helpers for decision making

use crate::types::{Creature, Roster};

/// Roster members (insertion order) whose element beats the enemy's
pub fn members_with_advantage<'a>(roster: &'a Roster, enemy: &Creature) -> Vec<&'a Creature> {
    roster
        .iter()
        .filter(|c| c.element.beats(enemy.element))
        .collect()
}

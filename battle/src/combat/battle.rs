//! Battle - one encounter's state

use rand::Rng;
use rand::rngs::StdRng;

use crate::types::{Creature, CreatureId};

/// Actions available in a whole battle (shared by every action kind)
pub const MAX_ACTIONS: u32 = 3;

/// Health every wild creature is reset to when a battle starts
pub const ENEMY_START_HEALTH: u32 = 50;

/// Base capture chance (percent) before the health adjustment
pub const CATCH_BASE_CHANCE: i64 = 40;

/// Coarse battle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    InProgress,
    Over,
}

/// How a battle ended, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    InProgress,
    EnemyCaught,
    EnemyDefeated,
    /// Fled, or ran out of actions
    Ended,
}

impl BattleOutcome {
    /// Message for the player
    pub fn message(&self) -> &'static str {
        match self {
            BattleOutcome::InProgress => "Battle in progress.",
            BattleOutcome::EnemyCaught => "Enemy caught successfully!",
            BattleOutcome::EnemyDefeated => "Enemy defeated!",
            BattleOutcome::Ended => "Battle ended.",
        }
    }
}

/// Result of one requested action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Attacked { damage: u32, advantage: bool },
    CaptureAttempted { chance: i64, roll: u32, success: bool },
    Swapped { from: CreatureId, to: CreatureId },
    Fled,
    /// Nothing happened and no action was spent
    Rejected(Rejection),
}

/// Why an action had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    BattleOver,
    AlreadyCaught,
    RosterTooSmall,
    AlreadyActive,
    NotAMember,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::BattleOver => "battle is over",
            Rejection::AlreadyCaught => "enemy was already caught",
            Rejection::RosterTooSmall => "no other creature to swap in",
            Rejection::AlreadyActive => "creature is already fighting",
            Rejection::NotAMember => "creature is not in the roster",
        }
    }
}

/// Capture chance in percent for an enemy at `enemy_health`
///
/// Not clamped: the value exceeds 100 or drops below 0 at the extremes.
pub fn catch_chance(enemy_health: u32) -> i64 {
    CATCH_BASE_CHANCE + i64::from(ENEMY_START_HEALTH) - i64::from(enemy_health)
}

/// Damage for a base roll, scaled by the attacker's tier and, when the
/// attacker's element beats the defender's, by 1.5 (truncated)
pub fn attack_damage(base_roll: u32, attacker: &Creature, defender: &Creature) -> u32 {
    let raw = base_roll * u32::from(attacker.tier);
    (f64::from(raw) * attacker.element.multiplier_against(defender.element)) as u32
}

/// A single encounter between the player's creature and a wild one
///
/// The battle owns the enemy. It does not hold the roster: actions that
/// need it (capture, swap) borrow it for the duration of the call.
#[derive(Debug, Clone)]
pub struct Battle<R = StdRng> {
    /// The player's fighting creature (snapshot of a roster member)
    pub(crate) player: Creature,

    /// The wild creature
    pub(crate) enemy: Creature,

    pub(crate) actions_taken: u32,
    pub(crate) last_damage: u32,
    pub(crate) enemy_caught: bool,

    pub(crate) rng: R,
}

impl<R: Rng> Battle<R> {
    /// Start a battle, resetting the enemy's health to [`ENEMY_START_HEALTH`]
    pub fn start(player: &Creature, mut enemy: Creature, rng: R) -> Self {
        enemy.set_health(ENEMY_START_HEALTH);

        tracing::info!(
            player = %player.name,
            enemy = %enemy.name,
            enemy_element = %enemy.element,
            enemy_tier = enemy.tier,
            "Battle started"
        );

        Self {
            player: player.clone(),
            enemy,
            actions_taken: 0,
            last_damage: 0,
            enemy_caught: false,
            rng,
        }
    }
}

impl<R> Battle<R> {
    pub fn player(&self) -> &Creature {
        &self.player
    }

    pub fn enemy(&self) -> &Creature {
        &self.enemy
    }

    pub fn actions_taken(&self) -> u32 {
        self.actions_taken
    }

    pub fn actions_remaining(&self) -> u32 {
        MAX_ACTIONS.saturating_sub(self.actions_taken)
    }

    /// Damage dealt by the most recent attack (0 before any attack)
    pub fn last_damage(&self) -> u32 {
        self.last_damage
    }

    pub fn is_enemy_caught(&self) -> bool {
        self.enemy_caught
    }

    /// Enemy defeated or action budget spent
    ///
    /// A capture does not end the battle by itself; it only blocks further
    /// capture attempts.
    pub fn is_over(&self) -> bool {
        self.enemy.is_fainted() || self.actions_taken >= MAX_ACTIONS
    }

    pub fn state(&self) -> BattleState {
        if self.is_over() {
            BattleState::Over
        } else {
            BattleState::InProgress
        }
    }

    /// Capture takes priority over defeat, defeat over a plain ending
    pub fn outcome(&self) -> BattleOutcome {
        if self.enemy_caught {
            BattleOutcome::EnemyCaught
        } else if self.enemy.is_fainted() {
            BattleOutcome::EnemyDefeated
        } else if self.is_over() {
            BattleOutcome::Ended
        } else {
            BattleOutcome::InProgress
        }
    }

    pub fn outcome_message(&self) -> &'static str {
        self.outcome().message()
    }
}

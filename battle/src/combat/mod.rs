//! Turn-based battle state machine

mod actions;
mod battle;

pub use battle::{
    Battle, BattleOutcome, BattleState, CATCH_BASE_CHANCE, ENEMY_START_HEALTH, MAX_ACTIONS,
    Rejection, Turn, attack_damage, catch_chance,
};

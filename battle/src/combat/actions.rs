//! Turn actions: attack, capture, swap, flee

use rand::Rng;

use super::battle::{
    Battle, MAX_ACTIONS, Rejection, Turn, attack_damage, catch_chance,
};
use crate::types::{CreatureId, Roster};

impl<R: Rng> Battle<R> {
    /// Hit the enemy for `1..=10 x tier` damage, times 1.5 with advantage
    pub fn attack(&mut self) -> Turn {
        if self.is_over() {
            return self.reject(Rejection::BattleOver);
        }

        let base_roll: u32 = self.rng.gen_range(1..=10);
        let damage = attack_damage(base_roll, &self.player, &self.enemy);
        let advantage = self.player.element.beats(self.enemy.element);

        self.enemy.reduce_health(damage);
        self.last_damage = damage;
        self.actions_taken += 1;

        tracing::debug!(
            base_roll,
            damage,
            advantage,
            enemy_health = self.enemy.health(),
            "Attack resolved"
        );
        self.log_if_finished();

        Turn::Attacked { damage, advantage }
    }

    /// Try to catch the enemy; spends an action whether or not it works
    ///
    /// A caught enemy is added to `roster` under its own identity. Once it
    /// is caught, further attempts are rejected without spending an action.
    pub fn try_capture(&mut self, roster: &mut Roster) -> Turn {
        if self.is_over() {
            return self.reject(Rejection::BattleOver);
        }
        if self.enemy_caught {
            return self.reject(Rejection::AlreadyCaught);
        }

        let chance = catch_chance(self.enemy.health());
        let roll: u32 = self.rng.gen_range(0..100);
        let success = i64::from(roll) < chance;

        if success {
            roster.add(self.enemy.clone());
            self.enemy_caught = true;
            tracing::info!(enemy = %self.enemy.name, id = %self.enemy.id(), "Enemy captured");
        }
        self.actions_taken += 1;

        tracing::debug!(chance, roll, success, "Capture attempted");
        self.log_if_finished();

        Turn::CaptureAttempted {
            chance,
            roll,
            success,
        }
    }

    /// Put another roster member in the fight and make it the roster's
    /// active creature
    pub fn swap(&mut self, roster: &mut Roster, to: CreatureId) -> Turn {
        if self.is_over() {
            return self.reject(Rejection::BattleOver);
        }
        if roster.len() <= 1 {
            return self.reject(Rejection::RosterTooSmall);
        }
        if to == self.player.id() {
            return self.reject(Rejection::AlreadyActive);
        }
        let Some(next) = roster.get(to).cloned() else {
            return self.reject(Rejection::NotAMember);
        };
        if roster.set_active(to).is_err() {
            return self.reject(Rejection::NotAMember);
        }

        let from = self.player.id();
        self.player = next;
        self.actions_taken += 1;

        tracing::debug!(from = %from, to = %to, name = %self.player.name, "Swapped creature");
        self.log_if_finished();

        Turn::Swapped { from, to }
    }

    /// End the battle immediately
    pub fn flee(&mut self) -> Turn {
        self.actions_taken = MAX_ACTIONS;
        tracing::info!(enemy = %self.enemy.name, "Player fled");
        Turn::Fled
    }

    fn reject(&self, reason: Rejection) -> Turn {
        tracing::debug!(reason = reason.as_str(), "Action rejected");
        Turn::Rejected(reason)
    }

    fn log_if_finished(&self) {
        if self.is_over() {
            tracing::info!(
                outcome = ?self.outcome(),
                actions = self.actions_taken,
                "Battle finished"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::combat::{BattleOutcome, BattleState, ENEMY_START_HEALTH};
    use crate::types::{Creature, species};

    fn strawander() -> Creature {
        species::by_name("Strawander").unwrap().instantiate(100)
    }

    fn wild(name: &str) -> Creature {
        species::by_name(name).unwrap().instantiate(100)
    }

    /// Roster holding one Strawander, plus a battle against `enemy`
    fn setup<R: Rng>(enemy: &str, rng: R) -> (Roster, Battle<R>) {
        let mut roster = Roster::new();
        roster.add(strawander());
        let player = roster.active().unwrap().clone();
        let battle = Battle::start(&player, wild(enemy), rng);
        (roster, battle)
    }

    /// Generator whose every draw is the lowest value of the range
    fn lowest_rolls() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn test_attack_with_advantage_matches_roll() {
        let seed = 11;
        let mut probe = StdRng::seed_from_u64(seed);
        let base: u32 = probe.gen_range(1..=10);

        // Strawander (Fire, tier 1) vs Malts (Nature)
        let (_, mut battle) = setup("Malts", StdRng::seed_from_u64(seed));
        let turn = battle.attack();

        let expected = (f64::from(base) * 1.5).floor() as u32;
        assert_eq!(
            turn,
            Turn::Attacked {
                damage: expected,
                advantage: true
            }
        );
        assert_eq!(battle.enemy().health(), ENEMY_START_HEALTH - expected);
        assert_eq!(battle.last_damage(), expected);
        assert_eq!(battle.actions_taken(), 1);
    }

    #[test]
    fn test_attack_neutral_scales_with_tier() {
        let seed = 23;
        let mut probe = StdRng::seed_from_u64(seed);
        let base: u32 = probe.gen_range(1..=10);

        let mut roster = Roster::new();
        roster.add(wild("Strawleon"));
        let player = roster.active().unwrap().clone();
        // Fire vs Water is neutral
        let mut battle = Battle::start(&player, wild("Squirpie"), StdRng::seed_from_u64(seed));

        let turn = battle.attack();
        assert_eq!(
            turn,
            Turn::Attacked {
                damage: base * 2,
                advantage: false
            }
        );
        assert_eq!(battle.enemy().health(), ENEMY_START_HEALTH - base * 2);
    }

    #[test]
    fn test_lowest_roll_attack() {
        let (_, mut battle) = setup("Squirpie", lowest_rolls());
        assert_eq!(
            battle.attack(),
            Turn::Attacked {
                damage: 1,
                advantage: false
            }
        );
        assert_eq!(battle.enemy().health(), 49);
    }

    #[test]
    fn test_action_budget_is_three() {
        // Same element, tier 1: at most 30 damage, never a knockout
        let (_, mut battle) = setup("Chocowool", StdRng::seed_from_u64(5));

        battle.attack();
        assert!(!battle.is_over());
        battle.attack();
        assert!(!battle.is_over());
        battle.attack();
        assert!(battle.is_over());
        assert_eq!(battle.state(), BattleState::Over);

        let health = battle.enemy().health();
        assert_eq!(battle.attack(), Turn::Rejected(Rejection::BattleOver));
        assert_eq!(battle.enemy().health(), health);
        assert_eq!(battle.actions_taken(), MAX_ACTIONS);
        assert_eq!(battle.outcome(), BattleOutcome::Ended);
    }

    #[test]
    fn test_knockout_ends_battle() {
        let (mut roster, mut battle) = setup("Malts", StdRng::seed_from_u64(9));
        battle.enemy.set_health(1);

        battle.attack();
        assert_eq!(battle.enemy().health(), 0);
        assert!(battle.is_over());
        assert_eq!(battle.actions_taken(), 1);
        assert_eq!(battle.outcome(), BattleOutcome::EnemyDefeated);
        assert_eq!(battle.outcome_message(), "Enemy defeated!");

        assert_eq!(battle.try_capture(&mut roster), Turn::Rejected(Rejection::BattleOver));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_capture_success_adds_enemy() {
        let (mut roster, mut battle) = setup("Frubat", lowest_rolls());
        let enemy_id = battle.enemy().id();

        let turn = battle.try_capture(&mut roster);
        assert_eq!(
            turn,
            Turn::CaptureAttempted {
                chance: 40,
                roll: 0,
                success: true
            }
        );
        assert!(battle.is_enemy_caught());
        assert!(roster.contains(enemy_id));
        assert_eq!(roster.len(), 2);
        assert_eq!(battle.enemy().id(), enemy_id);
        assert_eq!(battle.actions_taken(), 1);

        assert!(!battle.is_over());
        assert_eq!(battle.state(), BattleState::InProgress);
        assert_eq!(battle.outcome(), BattleOutcome::EnemyCaught);
        assert_eq!(battle.outcome_message(), "Enemy caught successfully!");
    }

    #[test]
    fn test_second_capture_rejected() {
        let (mut roster, mut battle) = setup("Frubat", lowest_rolls());
        battle.try_capture(&mut roster);

        assert_eq!(
            battle.try_capture(&mut roster),
            Turn::Rejected(Rejection::AlreadyCaught)
        );
        assert_eq!(battle.actions_taken(), 1);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_attack_after_capture_until_budget_spent() {
        let (mut roster, mut battle) = setup("Frubat", lowest_rolls());
        battle.try_capture(&mut roster);

        assert!(matches!(battle.attack(), Turn::Attacked { .. }));
        assert!(matches!(battle.attack(), Turn::Attacked { .. }));
        assert!(battle.is_over());
        assert_eq!(battle.attack(), Turn::Rejected(Rejection::BattleOver));
        assert_eq!(battle.outcome(), BattleOutcome::EnemyCaught);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_capture_keeps_roster_active() {
        let (mut roster, mut battle) = setup("Frubat", lowest_rolls());
        let active = roster.active_id();
        battle.try_capture(&mut roster);
        assert_eq!(roster.active_id(), active);
    }

    #[test]
    fn test_failed_capture_spends_action() {
        let (mut roster, mut battle) = setup("Frubat", StdRng::seed_from_u64(1));
        // chance 40 + 50 - 100 = -10: no roll can succeed
        battle.enemy.set_health(100);

        let turn = battle.try_capture(&mut roster);
        assert!(matches!(
            turn,
            Turn::CaptureAttempted {
                chance: -10,
                success: false,
                ..
            }
        ));
        assert_eq!(battle.actions_taken(), 1);
        assert!(!battle.is_enemy_caught());
        assert_eq!(roster.len(), 1);
    }

    fn capture_rate(enemy_health: u32, trials: u64) -> f64 {
        let mut caught = 0;
        for seed in 0..trials {
            let (mut roster, mut battle) = setup("Oshacone", StdRng::seed_from_u64(seed));
            battle.enemy.set_health(enemy_health);
            if let Turn::CaptureAttempted { success: true, .. } = battle.try_capture(&mut roster) {
                caught += 1;
            }
        }
        caught as f64 / trials as f64
    }

    #[test]
    fn test_capture_rate_converges() {
        for (health, expected) in [(50, 0.40), (20, 0.70), (80, 0.10)] {
            let rate = capture_rate(health, 4000);
            assert!(
                (rate - expected).abs() < 0.04,
                "health {}: rate {} expected {}",
                health,
                rate,
                expected
            );
        }
    }

    #[test]
    fn test_capture_rate_saturates() {
        assert_eq!(capture_rate(100, 500), 0.0);
        assert_eq!(capture_rate(120, 500), 0.0);
    }

    #[test]
    fn test_swap_with_single_member_is_noop() {
        let (mut roster, mut battle) = setup("Malts", StdRng::seed_from_u64(3));
        let player = battle.player().id();
        let other = strawander();

        assert_eq!(battle.swap(&mut roster, other.id()), Turn::Rejected(Rejection::RosterTooSmall));
        assert_eq!(battle.actions_taken(), 0);
        assert_eq!(battle.player().id(), player);
        assert_eq!(roster.active_id(), Some(player));
    }

    #[test]
    fn test_swap_to_current_is_noop() {
        let (mut roster, mut battle) = setup("Malts", StdRng::seed_from_u64(3));
        roster.add(wild("Squirpie"));
        let player = battle.player().id();

        assert_eq!(battle.swap(&mut roster, player), Turn::Rejected(Rejection::AlreadyActive));
        assert_eq!(battle.actions_taken(), 0);
    }

    #[test]
    fn test_swap_to_stranger_is_noop() {
        let (mut roster, mut battle) = setup("Malts", StdRng::seed_from_u64(3));
        roster.add(wild("Squirpie"));
        let stranger = wild("Frubat");

        assert_eq!(battle.swap(&mut roster, stranger.id()), Turn::Rejected(Rejection::NotAMember));
        assert_eq!(battle.actions_taken(), 0);
    }

    #[test]
    fn test_swap_changes_fighter_and_roster_active() {
        let (mut roster, mut battle) = setup("Malts", lowest_rolls());
        let first = battle.player().id();
        let squirpie = wild("Squirpie");
        let squirpie_id = squirpie.id();
        roster.add(squirpie);

        let turn = battle.swap(&mut roster, squirpie_id);
        assert_eq!(
            turn,
            Turn::Swapped {
                from: first,
                to: squirpie_id
            }
        );
        assert_eq!(battle.player().id(), squirpie_id);
        assert_eq!(roster.active_id(), Some(squirpie_id));
        assert_eq!(battle.actions_taken(), 1);

        // Water vs Nature is neutral now
        assert_eq!(
            battle.attack(),
            Turn::Attacked {
                damage: 1,
                advantage: false
            }
        );
    }

    #[test]
    fn test_swap_after_budget_is_noop() {
        let (mut roster, mut battle) = setup("Malts", StdRng::seed_from_u64(3));
        let squirpie = wild("Squirpie");
        let squirpie_id = squirpie.id();
        roster.add(squirpie);

        battle.flee();
        assert_eq!(battle.swap(&mut roster, squirpie_id), Turn::Rejected(Rejection::BattleOver));
        assert_ne!(roster.active_id(), Some(squirpie_id));
    }

    #[test]
    fn test_flee() {
        let (mut roster, mut battle) = setup("Malts", StdRng::seed_from_u64(3));
        battle.attack();

        assert_eq!(battle.flee(), Turn::Fled);
        assert!(battle.is_over());
        assert_eq!(battle.actions_remaining(), 0);
        assert_eq!(battle.outcome(), BattleOutcome::Ended);
        assert_eq!(battle.outcome_message(), "Battle ended.");
        assert_eq!(battle.try_capture(&mut roster), Turn::Rejected(Rejection::BattleOver));
    }

    #[test]
    fn test_mixed_actions_share_budget() {
        let (mut roster, mut battle) = setup("Chocowool", StdRng::seed_from_u64(8));
        let squirpie = wild("Squirpie");
        let squirpie_id = squirpie.id();
        roster.add(squirpie);
        battle.enemy.set_health(100);

        battle.attack();
        battle.swap(&mut roster, squirpie_id);
        assert_eq!(battle.actions_remaining(), 1);
        battle.try_capture(&mut roster);
        assert!(battle.is_over());
        assert_eq!(battle.attack(), Turn::Rejected(Rejection::BattleOver));
    }
}

#[cfg(test)]
mod tests {
    use crate::{Direction, GameEvent, RosterEntry};

    fn entry(slot: usize, name: &str, active: bool) -> RosterEntry {
        RosterEntry {
            slot,
            name: name.to_string(),
            element: "FIRE".to_string(),
            family: "A FAMILY".to_string(),
            tier: 1,
            health: 100,
            max_health: 100,
            active,
        }
    }

    #[test]
    fn test_attack_protocol_string() {
        let event = GameEvent::Attacked {
            damage: 12,
            advantage: true,
            enemy_health: 38,
        };
        assert_eq!(event.to_protocol_string(), "|attack|12|advantage|38");

        let neutral = GameEvent::Attacked {
            damage: 4,
            advantage: false,
            enemy_health: 46,
        };
        assert_eq!(neutral.to_protocol_string(), "|attack|4||46");
    }

    #[test]
    fn test_encounter_lists_counters() {
        let event = GameEvent::Encounter {
            name: "Malts".to_string(),
            element: "NATURE".to_string(),
            tier: 1,
            health: 50,
            weak_to: "FIRE".to_string(),
            counters: vec!["Strawander".to_string(), "Parfwit".to_string()],
        };
        assert_eq!(
            event.to_protocol_string(),
            "|encounter|Malts|NATURE|1|50|FIRE|Strawander,Parfwit"
        );
        assert_eq!(
            event.to_string(),
            "A wild Malts appeared! Type: NATURE, EL: 1, Health: 50. Weak to FIRE (try Strawander, Parfwit)"
        );

        let unanswered = GameEvent::Encounter {
            name: "Malts".to_string(),
            element: "NATURE".to_string(),
            tier: 1,
            health: 50,
            weak_to: "FIRE".to_string(),
            counters: vec![],
        };
        assert_eq!(
            unanswered.to_protocol_string(),
            "|encounter|Malts|NATURE|1|50|FIRE|"
        );
        assert!(unanswered.to_string().ends_with("Weak to FIRE"));
    }

    #[test]
    fn test_blocked_protocol_string() {
        let event = GameEvent::Blocked {
            direction: Direction::Left,
        };
        assert_eq!(event.to_protocol_string(), "|blocked|left");
    }

    #[test]
    fn test_roster_protocol_lines() {
        let event = GameEvent::Roster {
            entries: vec![entry(1, "Strawander", true), entry(2, "Strawander", false)],
        };
        let text = event.to_protocol_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "|roster|2");
        assert_eq!(lines[1], "|entry|1|Strawander|FIRE|A FAMILY|1|100/100|active");
        assert_eq!(lines[2], "|entry|2|Strawander|FIRE|A FAMILY|1|100/100");
    }

    #[test]
    fn test_display_messages() {
        let over = GameEvent::BattleOver {
            message: "Enemy defeated!".to_string(),
        };
        assert_eq!(over.to_string(), "Enemy defeated!");
        assert!(over.ends_battle());

        let evolved = GameEvent::Evolved {
            name: "Strawleon".to_string(),
            tier: 2,
        };
        assert_eq!(evolved.to_string(), "Creature evolved into: Strawleon (EL 2)");
        assert!(!evolved.ends_battle());
    }

    #[test]
    fn test_display_roster() {
        let event = GameEvent::Roster {
            entries: vec![entry(1, "Strawander", true)],
        };
        assert_eq!(event.to_string(), "*1. Strawander [FIRE] A FAMILY EL1 100/100");

        let empty = GameEvent::Evolvable { entries: vec![] };
        assert_eq!(empty.to_string(), "(no creatures)");
    }

    #[test]
    fn test_event_json() {
        let event = GameEvent::Captured {
            name: "Frubat".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"captured","name":"Frubat"}"#);

        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

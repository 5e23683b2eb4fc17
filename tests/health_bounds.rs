//! Property tests: health stays inside its bounds under any sequence of
//! damage and healing.

use crypt_keeper::core::types::MonsterKind;
use crypt_keeper::entity::{Character, Combatant, Monster, PLAYER_MAX_HEALTH};
use crypt_keeper::events::EventLog;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Damage(i32),
    Heal(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-50..200i32).prop_map(Op::Damage),
        (-50..200i32).prop_map(Op::Heal),
    ]
}

proptest! {
    #[test]
    fn player_health_stays_in_range(
        start in 1..300i32,
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut log = EventLog::memory();
        let mut hero = Character::new("Hero", start, 10, 10).unwrap();

        for op in ops {
            let before = hero.health();
            let result = match op {
                Op::Damage(d) => hero.take_damage(d, &mut log).map(|_| ()),
                Op::Heal(h) => hero.heal(h, &mut log),
            };
            if result.is_err() {
                prop_assert_eq!(hero.health(), before);
            }
            prop_assert!((0..=PLAYER_MAX_HEALTH).contains(&hero.health()));
        }
    }

    #[test]
    fn monster_health_never_negative_or_rising(
        start in 1..5000i32,
        hits in prop::collection::vec(-20..400i32, 0..40),
    ) {
        let mut log = EventLog::memory();
        let mut monster = Monster::new(MonsterKind::Lich, "L", start, 1, 1).unwrap();

        for hit in hits {
            let before = monster.health();
            let _ = monster.take_damage(hit, &mut log);
            prop_assert!(monster.health() >= 0);
            prop_assert!(monster.health() <= before);
        }
    }
}

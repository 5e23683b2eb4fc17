//! Strike resolution
//!
//! Damage is `attacker.attack - defender.defense`. An attack with no
//! positive damage has no effect; a retaliation with no positive damage
//! still lands, for zero.

use crate::combat::special::{SpecialAttack, SpecialRoller};
use crate::core::error::Result;
use crate::entity::combatant::{Combatant, DamageOutcome};
use crate::events::EventLog;

/// Raw damage before any bonus. May be zero or negative.
pub fn base_damage(attack: i32, defense: i32) -> i32 {
    attack - defense
}

/// Result of one strike
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrikeReport {
    pub attacker: String,
    pub defender: String,
    /// Damage applied to the defender
    pub damage: i32,
    /// Bonus that triggered, if any
    pub special: Option<SpecialAttack>,
    pub outcome: StrikeOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeOutcome {
    /// Damage was not positive and nothing changed
    NoEffect,
    Landed(DamageOutcome),
}

impl StrikeReport {
    pub fn defeated_defender(&self) -> bool {
        matches!(self.outcome, StrikeOutcome::Landed(DamageOutcome::Defeated))
    }
}

/// Attack that does nothing unless base damage is positive
pub fn strike(
    attacker: &dyn Combatant,
    defender: &mut dyn Combatant,
    roller: &mut SpecialRoller,
    log: &mut EventLog,
) -> Result<StrikeReport> {
    let base = base_damage(attacker.attack_power(), defender.defense());

    if base <= 0 {
        log.log(format!(
            "{} attacks {}, but it has no effect!",
            attacker.name(),
            defender.name()
        ))?;
        return Ok(StrikeReport {
            attacker: attacker.name().to_string(),
            defender: defender.name().to_string(),
            damage: 0,
            special: None,
            outcome: StrikeOutcome::NoEffect,
        });
    }

    land(attacker, defender, base, roller, log)
}

/// Counter-attack: non-positive damage is clamped to zero and still applied
pub fn retaliate(
    attacker: &dyn Combatant,
    defender: &mut dyn Combatant,
    roller: &mut SpecialRoller,
    log: &mut EventLog,
) -> Result<StrikeReport> {
    let base = base_damage(attacker.attack_power(), defender.defense()).max(0);
    land(attacker, defender, base, roller, log)
}

fn land(
    attacker: &dyn Combatant,
    defender: &mut dyn Combatant,
    base: i32,
    roller: &mut SpecialRoller,
    log: &mut EventLog,
) -> Result<StrikeReport> {
    let special = match attacker.special_attack() {
        Some(attack) if base > 0 && roller.roll(attack) => Some(attack),
        _ => None,
    };
    let damage = special.map_or(base, |attack| attack.apply(base));

    if let Some(attack) = special {
        log.log(attack.announcement())?;
    }
    log.log(format!(
        "{} attacks {} for {} damage!",
        attacker.name(),
        defender.name(),
        damage
    ))?;

    let outcome = defender.take_damage(damage, log)?;

    Ok(StrikeReport {
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        damage,
        special,
        outcome: StrikeOutcome::Landed(outcome),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::types::MonsterKind;
    use crate::entity::{Character, Monster};

    fn monster(attack: i32, defense: i32) -> Monster {
        Monster::new(MonsterKind::Skeleton, "Bones", 40, attack, defense).unwrap()
    }

    fn always_special() -> SpecialRoller {
        SpecialRoller::from_config(&GameConfig {
            special_attacks: true,
            critical_chance: 100,
            poison_chance: 100,
            fire_chance: 100,
            seed: Some(1),
            ..GameConfig::default()
        })
    }

    #[test]
    fn test_base_damage() {
        assert_eq!(base_damage(20, 10), 10);
        assert_eq!(base_damage(5, 10), -5);
    }

    #[test]
    fn test_positive_damage_applied_exactly() {
        let mut log = EventLog::memory();
        let hero = Character::new("Hero", 100, 20, 10).unwrap();
        let mut target = monster(5, 10);

        let report = strike(&hero, &mut target, &mut SpecialRoller::disabled(), &mut log).unwrap();

        assert_eq!(report.damage, 10);
        assert_eq!(
            report.outcome,
            StrikeOutcome::Landed(DamageOutcome::Wounded { remaining: 30 })
        );
        assert_eq!(target.health(), 30);
        assert_eq!(log.lines()[0], "Hero attacks Bones for 10 damage!");
    }

    #[test]
    fn test_no_effect_leaves_target_untouched() {
        let mut log = EventLog::memory();
        let hero = Character::new("Hero", 100, 5, 10).unwrap();
        let mut target = monster(5, 10);

        let report = strike(&hero, &mut target, &mut always_special(), &mut log).unwrap();

        assert_eq!(report.outcome, StrikeOutcome::NoEffect);
        assert_eq!(report.special, None);
        assert_eq!(target.health(), 40);
        assert_eq!(log.lines(), ["Hero attacks Bones, but it has no effect!"]);
    }

    #[test]
    fn test_retaliation_clamps_to_zero() {
        let mut log = EventLog::memory();
        let weak = monster(3, 0);
        let mut hero = Character::new("Hero", 100, 45, 10).unwrap();

        let report = retaliate(&weak, &mut hero, &mut always_special(), &mut log).unwrap();

        assert_eq!(report.damage, 0);
        assert_eq!(report.special, None);
        assert_eq!(hero.health(), 100);
        assert!(matches!(report.outcome, StrikeOutcome::Landed(_)));
    }

    #[test]
    fn test_critical_doubles_damage() {
        let mut log = EventLog::memory();
        let hero = Character::new("Hero", 100, 20, 10).unwrap();
        let mut target = monster(5, 10);

        let report = strike(&hero, &mut target, &mut always_special(), &mut log).unwrap();

        assert_eq!(report.special, Some(SpecialAttack::Critical));
        assert_eq!(report.damage, 20);
        assert_eq!(target.health(), 20);
        assert_eq!(log.lines()[0], "Critical hit!");
    }

    #[test]
    fn test_fire_strike_from_lich() {
        let mut log = EventLog::memory();
        let lich = Monster::lich("LichKing").unwrap();
        let mut hero = Character::new("Hero", 100, 45, 10).unwrap();

        let report = retaliate(&lich, &mut hero, &mut always_special(), &mut log).unwrap();

        assert_eq!(report.special, Some(SpecialAttack::Fire));
        assert_eq!(report.damage, 35);
        assert_eq!(hero.health(), 65);
    }

    #[test]
    fn test_killing_blow_reports_defeat() {
        let mut log = EventLog::memory();
        let hero = Character::new("Hero", 100, 100, 0).unwrap();
        let mut target = monster(5, 10);

        let report = strike(&hero, &mut target, &mut SpecialRoller::disabled(), &mut log).unwrap();

        assert!(report.defeated_defender());
        assert_eq!(target.health(), 0);
    }
}

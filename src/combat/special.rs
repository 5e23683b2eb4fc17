//! Probabilistic bonus damage
//!
//! Each combatant kind carries one special attack. A bonus is only rolled
//! when the base hit already does damage.

use crate::core::config::GameConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialAttack {
    /// Player: damage doubled
    Critical,
    /// Skeleton: +5 damage
    Poison,
    /// Lich: +10 damage
    Fire,
}

impl SpecialAttack {
    /// Damage after the bonus is added to a positive base
    pub fn apply(&self, base: i32) -> i32 {
        match self {
            SpecialAttack::Critical => base.saturating_mul(2),
            SpecialAttack::Poison => base.saturating_add(5),
            SpecialAttack::Fire => base.saturating_add(10),
        }
    }

    pub fn announcement(&self) -> &'static str {
        match self {
            SpecialAttack::Critical => "Critical hit!",
            SpecialAttack::Poison => "Poisonous attack!",
            SpecialAttack::Fire => "Fire Strike!",
        }
    }
}

/// Rolls special attacks against fixed percentage chances
#[derive(Debug, Clone)]
pub struct SpecialRoller {
    enabled: bool,
    critical_chance: u32,
    poison_chance: u32,
    fire_chance: u32,
    rng: StdRng,
}

impl SpecialRoller {
    /// Roller that never triggers
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            critical_chance: 0,
            poison_chance: 0,
            fire_chance: 0,
            rng: StdRng::seed_from_u64(0),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            enabled: config.special_attacks,
            critical_chance: config.critical_chance,
            poison_chance: config.poison_chance,
            fire_chance: config.fire_chance,
            rng,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn chance(&self, attack: SpecialAttack) -> u32 {
        match attack {
            SpecialAttack::Critical => self.critical_chance,
            SpecialAttack::Poison => self.poison_chance,
            SpecialAttack::Fire => self.fire_chance,
        }
    }

    /// Uniform roll in 0..100 below the attack's chance
    pub fn roll(&mut self, attack: SpecialAttack) -> bool {
        if !self.enabled {
            return false;
        }
        let chance = self.chance(attack);
        self.rng.gen_range(0..100) < chance
    }
}

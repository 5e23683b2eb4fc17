//! Shared combat capability for the player and monsters
//!
//! Anything with health, attack and defense takes part in the damage
//! formula. Reaching zero health is reported as a [`DamageOutcome`], not an
//! error, so callers decide what a defeat means.

use crate::combat::special::SpecialAttack;
use crate::core::error::{GameError, Result};
use crate::events::EventLog;
use serde::{Deserialize, Serialize};

/// Name and combat stats shared by every combatant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub(crate) name: String,
    pub(crate) health: i32,
    pub(crate) attack: i32,
    pub(crate) defense: i32,
}

impl Vitals {
    /// Validated stats: non-empty name, positive health, non-negative
    /// attack and defense
    pub fn new(name: &str, health: i32, attack: i32, defense: i32) -> Result<Self> {
        if name.is_empty() {
            return Err(GameError::InvalidArgument("Name must not be empty".into()));
        }
        if health <= 0 {
            return Err(GameError::InvalidArgument(format!(
                "Health must be positive, got {}",
                health
            )));
        }
        if attack < 0 || defense < 0 {
            return Err(GameError::InvalidArgument(format!(
                "Attack and defense must be non-negative, got {} and {}",
                attack, defense
            )));
        }

        Ok(Self {
            name: name.to_string(),
            health,
            attack,
            defense,
        })
    }
}

/// What happened to a combatant that took damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Still standing with this much health
    Wounded { remaining: i32 },
    /// Health reached zero
    Defeated,
}

impl DamageOutcome {
    pub fn is_defeated(&self) -> bool {
        matches!(self, DamageOutcome::Defeated)
    }
}

/// An entity with health, attack and defense
pub trait Combatant {
    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    /// Bonus this combatant may roll on a hit
    fn special_attack(&self) -> Option<SpecialAttack> {
        None
    }

    fn name(&self) -> &str {
        &self.vitals().name
    }

    fn health(&self) -> i32 {
        self.vitals().health
    }

    fn attack_power(&self) -> i32 {
        self.vitals().attack
    }

    fn defense(&self) -> i32 {
        self.vitals().defense
    }

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Subtract `amount` from health, stopping at zero
    ///
    /// Negative amounts are rejected and leave health untouched. Every hit
    /// is logged, and a hit that empties health logs the defeat too.
    fn take_damage(&mut self, amount: i32, log: &mut EventLog) -> Result<DamageOutcome> {
        if amount < 0 {
            return Err(GameError::InvalidArgument(format!(
                "Damage must be non-negative, got {}",
                amount
            )));
        }

        let vitals = self.vitals_mut();
        vitals.health = (vitals.health - amount).max(0);
        let remaining = vitals.health;

        log.log(format!(
            "{} takes {} damage, HP now {}",
            self.name(),
            amount,
            remaining
        ))?;

        if remaining == 0 {
            log.log(format!("{} has been defeated!", self.name()))?;
            Ok(DamageOutcome::Defeated)
        } else {
            Ok(DamageOutcome::Wounded { remaining })
        }
    }
}
